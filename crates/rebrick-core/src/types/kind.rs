//! Entity kind type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::catalog::{self, EntityDescriptor};
use crate::error::{Error, InvalidInputError};

/// One of the catalog collections kept in sync.
///
/// # Example
///
/// ```
/// use rebrick_core::EntityKind;
///
/// let kind: EntityKind = "part-categories".parse().unwrap();
/// assert_eq!(kind, EntityKind::PartCategory);
/// assert_eq!(kind.descriptor().table, "part_categories");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum EntityKind {
    Set,
    Color,
    Minifig,
    Part,
    PartCategory,
}

impl EntityKind {
    /// Every kind, in the order a full sync visits them.
    pub const ALL: [EntityKind; 5] = [
        EntityKind::Set,
        EntityKind::Color,
        EntityKind::Minifig,
        EntityKind::Part,
        EntityKind::PartCategory,
    ];

    /// Returns the canonical name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Set => "set",
            EntityKind::Color => "color",
            EntityKind::Minifig => "minifig",
            EntityKind::Part => "part",
            EntityKind::PartCategory => "part-category",
        }
    }

    /// Returns the descriptor that maps records of this kind onto the store.
    pub fn descriptor(&self) -> &'static EntityDescriptor {
        match self {
            EntityKind::Set => &catalog::SET,
            EntityKind::Color => &catalog::COLOR,
            EntityKind::Minifig => &catalog::MINIFIG,
            EntityKind::Part => &catalog::PART,
            EntityKind::PartCategory => &catalog::PART_CATEGORY,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s.trim().to_ascii_lowercase().as_str() {
            "set" | "sets" => EntityKind::Set,
            "color" | "colors" => EntityKind::Color,
            "minifig" | "minifigs" => EntityKind::Minifig,
            "part" | "parts" => EntityKind::Part,
            "part-category" | "part-categories" | "part_category" | "part_categories" => {
                EntityKind::PartCategory
            }
            _ => {
                return Err(InvalidInputError::Kind {
                    value: s.to_string(),
                }
                .into());
            }
        };
        Ok(kind)
    }
}

impl TryFrom<String> for EntityKind {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<EntityKind> for String {
    fn from(kind: EntityKind) -> Self {
        kind.as_str().to_string()
    }
}

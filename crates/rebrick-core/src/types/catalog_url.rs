//! Catalog service URL type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::{Error, InvalidInputError};

/// A validated base URL of the remote catalog service.
///
/// Endpoint paths are appended as path segments, so a base with a path
/// prefix (e.g. `http://host:9000/rebrickapi`) keeps it.
///
/// # Example
///
/// ```
/// use rebrick_core::CatalogUrl;
///
/// let base = CatalogUrl::new("http://localhost:9000/rebrickapi/").unwrap();
/// assert_eq!(
///     base.endpoint(["getonepart", "3001"]).as_str(),
///     "http://localhost:9000/rebrickapi/getonepart/3001"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CatalogUrl(Url);

impl CatalogUrl {
    /// Create a new catalog URL from a string, validating the format.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| InvalidInputError::CatalogUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;

        Ok(Self(url))
    }

    /// Returns the URL of an endpoint below this base.
    ///
    /// Each segment is percent-encoded on its own, so a key containing `/`
    /// stays a single segment.
    pub fn endpoint<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> Url {
        let mut url = self.0.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Returns the base URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        if url.cannot_be_a_base() {
            return Err(InvalidInputError::CatalogUrl {
                value: original.to_string(),
                reason: "must be an absolute URL".to_string(),
            }
            .into());
        }

        if !matches!(url.scheme(), "http" | "https") {
            return Err(InvalidInputError::CatalogUrl {
                value: original.to_string(),
                reason: "must use http or https".to_string(),
            }
            .into());
        }

        if url.host_str().is_none() {
            return Err(InvalidInputError::CatalogUrl {
                value: original.to_string(),
                reason: "must have a host".to_string(),
            }
            .into());
        }

        if url.query().is_some() || url.fragment().is_some() {
            return Err(InvalidInputError::CatalogUrl {
                value: original.to_string(),
                reason: "must not carry a query or fragment".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl fmt::Display for CatalogUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CatalogUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for CatalogUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.0.as_str())
    }
}

impl<'de> Deserialize<'de> for CatalogUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        CatalogUrl::new(&s).map_err(serde::de::Error::custom)
    }
}

impl AsRef<str> for CatalogUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_on_root_base() {
        let base = CatalogUrl::new("http://127.0.0.1:8080").unwrap();
        assert_eq!(
            base.endpoint(["getallparts"]).as_str(),
            "http://127.0.0.1:8080/getallparts"
        );
    }

    #[test]
    fn endpoint_keeps_path_prefix() {
        let base = CatalogUrl::new("http://192.168.50.199:9000/rebrickapi").unwrap();
        assert_eq!(
            base.endpoint(["getonefromrebrickable", "7140-1"]).as_str(),
            "http://192.168.50.199:9000/rebrickapi/getonefromrebrickable/7140-1"
        );
    }

    #[test]
    fn endpoint_encodes_key_segment() {
        let base = CatalogUrl::new("https://catalog.example").unwrap();
        assert_eq!(
            base.endpoint(["getonepart", "973pr1/a b"]).as_str(),
            "https://catalog.example/getonepart/973pr1%2Fa%20b"
        );
    }

    #[test]
    fn rejects_non_http_schemes() {
        assert!(CatalogUrl::new("file:///tmp/catalog").is_err());
        assert!(CatalogUrl::new("ftp://catalog.example").is_err());
    }

    #[test]
    fn rejects_relative_and_query_urls() {
        assert!(CatalogUrl::new("/rebrickapi").is_err());
        assert!(CatalogUrl::new("http://catalog.example/api?x=1").is_err());
    }
}

//! Catalog endpoint paths.

use rebrick_core::EntityKind;

/// Path of the endpoint returning every record of a kind.
pub(crate) fn collection_path(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Set => "getallsetsfromrebrickable",
        EntityKind::Color => "getallcolorsfromrebrickable",
        EntityKind::Minifig => "getallminifigs",
        EntityKind::Part => "getallparts",
        EntityKind::PartCategory => "getallpartcategories",
    }
}

/// Path of the endpoint returning one record, followed by the key segment.
pub(crate) fn detail_path(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Set => "getonefromrebrickable",
        EntityKind::Color => "getonecolor",
        EntityKind::Minifig => "getoneminifig",
        EntityKind::Part => "getonepart",
        EntityKind::PartCategory => "getonepartcategory",
    }
}

use imagery_core::{ContentRef, ImageMetadata, LogicalKey, Namespace};
use imagery_catalog::Catalog;

/// A catalog with placeholders, one stored skin, one URL and one metadata record.
pub fn populated_catalog(namespace: u64) -> Catalog {
    let mut catalog = Catalog::new();
    catalog.set_namespace(Namespace::new(namespace));
    catalog.set_identifier(LogicalKey::none(), content("0a0a"));
    catalog.set_identifier(LogicalKey::loading(), content("0b0b"));
    catalog.set_identifier(LogicalKey::new("rifle.ak", 10135), content("0c0c"));
    catalog.set_url(LogicalKey::new("rifle.ak", 10135), "http://example.com/ak.png");
    catalog.set_metadata(
        LogicalKey::new("rifle.ak", 10135),
        ImageMetadata::basic("Tempered AK47", "Glows a little"),
    );
    catalog
}

pub fn content(value: &str) -> ContentRef {
    ContentRef::new(value).unwrap()
}

//! Fixed paths of the static images the pages reference.
//!
//! Files are served from the configured assets directory under `/assets`.

/// Site logo, also used as the favicon.
pub const LOGO: &str = "/assets/logo.svg";

/// Product photos on the fresh oil page, keyed by product name.
pub const PRODUCT_PHOTOS: [(&str, &str); 2] = [
    ("Vegetable Oil", "/assets/vegetable-oil.svg"),
    ("Rapeseed Oil", "/assets/rapeseed-oil.svg"),
];

/// Photo path for a product, if it has one.
pub(super) fn product_photo(name: &str) -> Option<&'static str> {
    PRODUCT_PHOTOS
        .iter()
        .find(|(product, _)| *product == name)
        .map(|(_, path)| *path)
}

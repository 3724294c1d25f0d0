//! Car - a single vehicle from the garage catalog

/// One catalog car
///
/// Reference data: built once from the catalog and never mutated. The id is
/// stable across the whole catalog (no two cars share one, even across
/// eras), `year` is the model year the player has to pin down on the
/// timeline, and `image` is the path of the showroom artwork served next to
/// the app bundle.
#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    /// Catalog-wide unique identifier
    pub id: u32,
    /// Display name (e.g. "Jaguar E-Type")
    pub name: String,
    /// Model year shown on the timeline
    pub year: i32,
    /// Artwork path relative to the site root
    pub image: String,
}

impl Car {
    pub fn new(id: u32, name: impl Into<String>, year: i32, image: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            year,
            image: image.into(),
        }
    }
}

/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the catalog and the UI layer.

use serde::Deserialize;
use std::path::PathBuf;

/// Where a scheme's image lives for the current session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ImageRef {
    /// Seed records ship without a file
    #[default]
    Placeholder,
    /// A file picked by the user, valid only while the app is running
    Local(PathBuf),
}

/// A single electrical scheme in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Scheme {
    /// Catalog ID (position-derived, see `Catalog::next_id`)
    pub id: u32,
    /// Car brand (e.g., "BMW")
    pub brand: String,
    /// Model of that brand (e.g., "3 Series")
    pub model: String,
    /// Four-digit model year
    pub year: String,
    /// Display name (e.g., "Освещение")
    pub name: String,
    #[serde(skip)]
    pub image: ImageRef,
}

impl Scheme {
    /// "{brand} {model} • {year}" line shown under the name
    pub fn subtitle(&self) -> String {
        format!("{} {} • {}", self.brand, self.model, self.year)
    }
}

/// A validated upload, waiting for the catalog to assign an ID
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewScheme {
    pub brand: String,
    pub model: String,
    pub year: String,
    pub name: String,
    pub image: ImageRef,
}

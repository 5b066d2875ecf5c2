/// Catalog filter panel state (brand -> model -> year)

use super::data::Scheme;
use super::vehicles;

/// Currently selected filters; `None` means "any"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<String>,
}

impl FilterState {
    /// Select a brand. The model always resets since it belongs to the old brand.
    pub fn set_brand(&mut self, brand: Option<String>) {
        self.brand = brand;
        self.model = None;
    }

    pub fn set_model(&mut self, model: Option<String>) {
        self.model = model;
    }

    pub fn set_year(&mut self, year: Option<String>) {
        self.year = year;
    }

    /// Clear every filter
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Models selectable under the current brand (empty without a brand)
    pub fn available_models(&self) -> Vec<String> {
        self.brand
            .as_deref()
            .map(vehicles::models_for)
            .unwrap_or_default()
    }

    /// True if the scheme passes every non-empty filter
    pub fn matches(&self, scheme: &Scheme) -> bool {
        field_matches(&self.brand, &scheme.brand)
            && field_matches(&self.model, &scheme.model)
            && field_matches(&self.year, &scheme.year)
    }
}

fn field_matches(filter: &Option<String>, value: &str) -> bool {
    match filter.as_deref() {
        None | Some("") => true,
        Some(wanted) => wanted == value,
    }
}

use thiserror::Error;

use super::data::{NewScheme, Scheme};
use super::filter::FilterState;
use crate::config::SEED_SCHEMES;

/// Errors raised while building the catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("embedded seed catalog is malformed: {0}")]
    Seed(#[from] serde_json::Error),
}

/// The Catalog holds every scheme known to this session.
/// Records are only ever appended; nothing is written to disk.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    schemes: Vec<Scheme>,
}

impl Catalog {
    /// Create a catalog from an explicit list of schemes
    pub fn new(schemes: Vec<Scheme>) -> Self {
        Catalog { schemes }
    }

    /// Create the catalog pre-filled with the bundled seed schemes
    pub fn seeded() -> Result<Self, CatalogError> {
        let schemes: Vec<Scheme> = serde_json::from_str(SEED_SCHEMES)?;

        println!("📁 Loaded {} seed schemes", schemes.len());

        Ok(Catalog::new(schemes))
    }

    /// Number of schemes in the catalog
    pub fn len(&self) -> usize {
        self.schemes.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }

    /// ID the next added scheme will get (count + 1)
    pub fn next_id(&self) -> u32 {
        self.schemes.len() as u32 + 1
    }

    /// Append a validated upload and return the stored record
    pub fn add(&mut self, scheme: NewScheme) -> &Scheme {
        let id = self.next_id();
        self.schemes.push(Scheme {
            id,
            brand: scheme.brand,
            model: scheme.model,
            year: scheme.year,
            name: scheme.name,
            image: scheme.image,
        });

        &self.schemes[self.schemes.len() - 1]
    }

    /// Look up a scheme by ID
    pub fn get(&self, id: u32) -> Option<&Scheme> {
        self.schemes.iter().find(|scheme| scheme.id == id)
    }

    /// All schemes, in insertion order
    #[cfg(test)]
    pub fn all(&self) -> &[Scheme] {
        &self.schemes
    }

    /// Schemes passing the given filters, in insertion order
    pub fn filtered(&self, filters: &FilterState) -> Vec<&Scheme> {
        self.schemes
            .iter()
            .filter(|scheme| filters.matches(scheme))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::ImageRef;
    use std::path::PathBuf;

    fn new_scheme(brand: &str, model: &str, year: &str, name: &str) -> NewScheme {
        NewScheme {
            brand: brand.to_string(),
            model: model.to_string(),
            year: year.to_string(),
            name: name.to_string(),
            image: ImageRef::Local(PathBuf::from(format!("/tmp/{}.png", name))),
        }
    }

    fn sample_catalog() -> Catalog {
        let mut catalog = Catalog::seeded().unwrap();
        catalog.add(new_scheme("BMW", "X5", "2020", "Стартер"));
        catalog.add(new_scheme("Audi", "A4", "2020", "Климат"));
        catalog.add(new_scheme("Lada", "Niva", "1999", "Печка"));
        catalog
    }

    #[test]
    fn test_seed_catalog() {
        let catalog = Catalog::seeded().unwrap();

        assert!(!catalog.is_empty());
        assert_eq!(catalog.len(), 3);
        let names: Vec<&str> = catalog.all().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Система зажигания", "Освещение", "Система зарядки"]);
        assert!(catalog.all().iter().all(|s| s.image == ImageRef::Placeholder));
        assert_eq!(catalog.get(3).map(|s| s.brand.as_str()), Some("Audi"));
    }

    #[test]
    fn test_add_assigns_next_id() {
        let mut catalog = Catalog::seeded().unwrap();
        assert_eq!(catalog.next_id(), 4);

        let added = catalog.add(new_scheme("Kia", "Rio", "2015", "Фары")).clone();
        assert_eq!(added.id, 4);
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.get(4), Some(&added));
    }

    #[test]
    fn test_filtered_equals_matching_subset() {
        let catalog = sample_catalog();

        let brands = [None, Some("BMW"), Some("Audi"), Some("Lada"), Some("Volvo")];
        let models = [None, Some("3 Series"), Some("X5"), Some("A4"), Some("Niva")];
        let years = [None, Some("2020"), Some("2019"), Some("1999")];

        for brand in brands {
            for model in models {
                for year in years {
                    let filters = FilterState {
                        brand: brand.map(str::to_string),
                        model: model.map(str::to_string),
                        year: year.map(str::to_string),
                    };

                    let expected: Vec<u32> = catalog
                        .all()
                        .iter()
                        .filter(|s| brand.map_or(true, |b| s.brand == b))
                        .filter(|s| model.map_or(true, |m| s.model == m))
                        .filter(|s| year.map_or(true, |y| s.year == y))
                        .map(|s| s.id)
                        .collect();
                    let actual: Vec<u32> =
                        catalog.filtered(&filters).iter().map(|s| s.id).collect();

                    assert_eq!(actual, expected, "filters: {:?}", filters);
                }
            }
        }
    }

    #[test]
    fn test_filtered_examples() {
        let catalog = sample_catalog();

        let mut filters = FilterState::default();
        assert_eq!(catalog.filtered(&filters).len(), 6);

        filters.set_brand(Some("BMW".to_string()));
        assert_eq!(catalog.filtered(&filters).len(), 3);

        filters.set_model(Some("3 Series".to_string()));
        let ids: Vec<u32> = catalog.filtered(&filters).iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2]);

        filters.set_year(Some("2019".to_string()));
        assert!(catalog.filtered(&filters).is_empty());
    }
}

/// Draft state of the "add scheme" form and its validation

use std::path::PathBuf;
use thiserror::Error;

use super::data::{ImageRef, NewScheme};
use super::vehicles;

/// Reasons an upload is refused. The messages are shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("Заполните все поля")]
    MissingFields,
    #[error("Выберите файл изображения")]
    MissingFile,
}

/// In-progress values of the upload form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadDraft {
    pub name: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<String>,
    pub file: Option<PathBuf>,
}

impl UploadDraft {
    /// Select a brand; a model picked for another brand is dropped
    pub fn set_brand(&mut self, brand: String) {
        if self.brand.as_deref() != Some(brand.as_str()) {
            self.model = None;
        }
        self.brand = Some(brand);
    }

    /// Models selectable under the draft's brand
    pub fn available_models(&self) -> Vec<String> {
        self.brand
            .as_deref()
            .map(vehicles::models_for)
            .unwrap_or_default()
    }

    /// File name of the chosen image, for the "Выбран файл" line
    pub fn file_label(&self) -> Option<String> {
        self.file
            .as_ref()
            .and_then(|path| path.file_name())
            .map(|name| name.to_string_lossy().to_string())
    }

    /// Check the draft and turn it into a record ready for the catalog.
    ///
    /// Missing text fields are reported before a missing file.
    pub fn validate(&self) -> Result<NewScheme, UploadError> {
        let (Some(brand), Some(model), Some(year)) = (
            non_empty(&self.brand),
            non_empty(&self.model),
            non_empty(&self.year),
        ) else {
            return Err(UploadError::MissingFields);
        };
        if self.name.is_empty() {
            return Err(UploadError::MissingFields);
        }

        let file = self.file.clone().ok_or(UploadError::MissingFile)?;

        Ok(NewScheme {
            brand: brand.to_string(),
            model: model.to_string(),
            year: year.to_string(),
            name: self.name.clone(),
            image: ImageRef::Local(file),
        })
    }

    /// Reset every field
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft() -> UploadDraft {
        UploadDraft {
            name: "Система зажигания".to_string(),
            brand: Some("Toyota".to_string()),
            model: Some("Camry".to_string()),
            year: Some("2018".to_string()),
            file: Some(PathBuf::from("/tmp/camry.png")),
        }
    }

    #[test]
    fn test_complete_draft_validates() {
        let scheme = complete_draft().validate().unwrap();

        assert_eq!(scheme.brand, "Toyota");
        assert_eq!(scheme.model, "Camry");
        assert_eq!(scheme.year, "2018");
        assert_eq!(scheme.name, "Система зажигания");
        assert_eq!(scheme.image, ImageRef::Local(PathBuf::from("/tmp/camry.png")));
    }

    #[test]
    fn test_any_missing_field_is_rejected() {
        let mut draft = complete_draft();
        draft.name = String::new();
        assert_eq!(draft.validate(), Err(UploadError::MissingFields));

        let mut draft = complete_draft();
        draft.brand = None;
        assert_eq!(draft.validate(), Err(UploadError::MissingFields));

        let mut draft = complete_draft();
        draft.model = Some(String::new());
        assert_eq!(draft.validate(), Err(UploadError::MissingFields));

        let mut draft = complete_draft();
        draft.year = None;
        assert_eq!(draft.validate(), Err(UploadError::MissingFields));
    }

    #[test]
    fn test_name_is_stored_as_typed() {
        let mut draft = complete_draft();
        draft.name = "  Фары ".to_string();
        assert_eq!(draft.validate().unwrap().name, "  Фары ");

        draft.name = "   ".to_string();
        assert_eq!(draft.validate().unwrap().name, "   ");
    }

    #[test]
    fn test_missing_fields_reported_before_missing_file() {
        let draft = UploadDraft::default();
        assert_eq!(draft.validate(), Err(UploadError::MissingFields));
    }

    #[test]
    fn test_missing_file_is_rejected() {
        let mut draft = complete_draft();
        draft.file = None;
        assert_eq!(draft.validate(), Err(UploadError::MissingFile));
    }

    #[test]
    fn test_brand_change_drops_model() {
        let mut draft = complete_draft();

        draft.set_brand("Toyota".to_string());
        assert_eq!(draft.model.as_deref(), Some("Camry"));

        draft.set_brand("Honda".to_string());
        assert_eq!(draft.model, None);
        assert!(draft.available_models().contains(&"Civic".to_string()));
    }

    #[test]
    fn test_file_label_and_clear() {
        let mut draft = complete_draft();
        assert_eq!(draft.file_label().as_deref(), Some("camry.png"));

        draft.clear();
        assert_eq!(draft, UploadDraft::default());
        assert_eq!(draft.file_label(), None);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(UploadError::MissingFields.to_string(), "Заполните все поля");
        assert_eq!(UploadError::MissingFile.to_string(), "Выберите файл изображения");
    }
}

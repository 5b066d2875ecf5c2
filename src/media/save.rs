/// Save-to-device: copy a scheme's image to a user-chosen location
use rfd::FileDialog;
use std::path::PathBuf;
use thiserror::Error;

use crate::config::PLACEHOLDER_IMAGE;
use crate::state::data::{ImageRef, Scheme};

/// Characters that cannot appear in a file name on common platforms
const FORBIDDEN_CHARS: [char; 9] = ['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Reasons a save can fail. The messages are shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SaveError {
    #[error("Не удалось сохранить {path}: {message}")]
    Io { path: PathBuf, message: String },
}

/// Suggested file name: "{brand}_{model}_{year}_{name}.png"
pub fn download_file_name(scheme: &Scheme) -> String {
    let stem = format!(
        "{}_{}_{}_{}",
        scheme.brand, scheme.model, scheme.year, scheme.name
    );
    let stem: String = stem
        .chars()
        .map(|c| if FORBIDDEN_CHARS.contains(&c) { '_' } else { c })
        .collect();

    format!("{}.png", stem)
}

/// Folder the save dialog opens in
pub fn default_save_dir() -> Option<PathBuf> {
    dirs::download_dir().or_else(dirs::home_dir)
}

/// Show the native save dialog, pre-filled with the suggested file name
pub fn choose_destination(scheme: &Scheme) -> Option<PathBuf> {
    let mut dialog = FileDialog::new()
        .set_title("Сохранить на устройство")
        .set_file_name(download_file_name(scheme))
        .add_filter("PNG", &["png"]);

    if let Some(dir) = default_save_dir() {
        dialog = dialog.set_directory(dir);
    }

    dialog.save_file()
}

/// Write the scheme image to `destination`
/// Seed records without a file get the bundled placeholder image.
/// Runs on the async runtime so a large file does not block the UI
pub async fn save_scheme_image(image: ImageRef, destination: PathBuf) -> Result<PathBuf, SaveError> {
    let result = match &image {
        ImageRef::Local(source) => tokio::fs::copy(source, &destination).await,
        ImageRef::Placeholder => tokio::fs::write(&destination, PLACEHOLDER_IMAGE)
            .await
            .map(|_| PLACEHOLDER_IMAGE.len() as u64),
    };

    match result {
        Ok(bytes) => {
            println!("💾 Saved {}KB to {}", bytes / 1024, destination.display());
            Ok(destination)
        }
        Err(e) => {
            eprintln!("⚠️  Error saving {}: {}", destination.display(), e);
            Err(SaveError::Io {
                path: destination,
                message: e.to_string(),
            })
        }
    }
}

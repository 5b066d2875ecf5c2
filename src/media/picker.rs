/// Native file picker for scheme images
use image::ImageFormat;
use rfd::FileDialog;
use std::path::{Path, PathBuf};

use crate::config::ACCEPTED_EXTENSIONS;

/// Show the native file dialog and return the chosen image
/// Returns None if the user cancelled or picked an unsupported file
pub fn pick_scheme_image() -> Option<PathBuf> {
    let path = FileDialog::new()
        .set_title("Файл схемы")
        .add_filter("PNG / JPEG", &ACCEPTED_EXTENSIONS)
        .pick_file()?;

    if !is_supported_image(&path) {
        eprintln!("⚠️  Ignoring unsupported file: {}", path.display());
        return None;
    }

    println!("🖼️  Picked scheme image: {}", path.display());
    Some(path)
}

/// Check the file type by extension (PNG or JPEG only)
pub fn is_supported_image(path: &Path) -> bool {
    matches!(
        ImageFormat::from_path(path),
        Ok(ImageFormat::Png | ImageFormat::Jpeg)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_extensions() {
        assert!(is_supported_image(Path::new("/tmp/scheme.png")));
        assert!(is_supported_image(Path::new("/tmp/scheme.jpg")));
        assert!(is_supported_image(Path::new("/tmp/scheme.JPEG")));
    }

    #[test]
    fn test_unsupported_extensions() {
        assert!(!is_supported_image(Path::new("/tmp/scheme.gif")));
        assert!(!is_supported_image(Path::new("/tmp/scheme.pdf")));
        assert!(!is_supported_image(Path::new("/tmp/scheme")));
    }
}

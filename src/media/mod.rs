/// Scheme image file handling
///
/// This module handles:
/// - Picking a PNG/JPEG file for a new scheme
/// - Saving a scheme's image to the user's device

pub mod picker;
pub mod save;

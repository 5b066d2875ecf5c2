/// Application-wide constants
use std::time::Duration;

/// Window title and header text
pub const APP_TITLE: &str = "AutoScheme";

/// Header subtitle
pub const APP_SUBTITLE: &str = "Электрические схемы автомобилей";

/// Initial window size (width, height)
pub const WINDOW_SIZE: (f32, f32) = (1200.0, 820.0);

/// Number of model years offered in the year pickers
pub const YEAR_WINDOW: usize = 30;

/// How long a notification stays on screen
pub const TOAST_TIMEOUT: Duration = Duration::from_secs(4);

/// Width of one card in the results grid
pub const CARD_WIDTH: f32 = 340.0;

/// Height of the image area inside a card
pub const CARD_PREVIEW_HEIGHT: f32 = 180.0;

/// Height of the image area inside the detail dialog
pub const DETAIL_PREVIEW_HEIGHT: f32 = 440.0;

/// Extensions accepted by the scheme file picker
pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Schemes every session starts with
pub const SEED_SCHEMES: &str = include_str!("../assets/seed_schemes.json");

/// Image written when saving a scheme that has no file of its own
pub const PLACEHOLDER_IMAGE: &[u8] = include_bytes!("../assets/placeholder.png");

/// Fixed vehicle reference data: brands, their models, and the year window
///
/// A model is only meaningful together with its owning brand. This table
/// is the only place that pairing is enforced.

use chrono::Datelike;

use crate::config::YEAR_WINDOW;

/// All selectable brands, in display order
pub const BRANDS: [&str; 17] = [
    "Lada", "Audi", "BMW", "Mercedes-Benz", "Volkswagen", "Toyota", "Honda", "Ford", "Chevrolet",
    "Nissan", "Hyundai", "Kia", "Mazda", "Subaru", "Lexus", "Volvo", "Porsche",
];

/// Brand -> models lookup table
const MODELS_BY_BRAND: [(&str, &[&str]); 17] = [
    ("Lada", &["Vesta", "Granta", "Largus", "Niva", "Kalina", "Priora", "Samara", "XRAY"]),
    ("Audi", &["A3", "A4", "A6", "Q5", "Q7"]),
    ("BMW", &["3 Series", "5 Series", "X3", "X5", "X7"]),
    ("Mercedes-Benz", &["C-Class", "E-Class", "GLE", "GLC", "S-Class"]),
    ("Volkswagen", &["Golf", "Passat", "Tiguan", "Polo", "Jetta"]),
    ("Toyota", &["Camry", "Corolla", "RAV4", "Land Cruiser", "Prius"]),
    ("Honda", &["Civic", "Accord", "CR-V", "Pilot", "Odyssey"]),
    ("Ford", &["Focus", "Mustang", "Explorer", "F-150", "Escape"]),
    ("Chevrolet", &["Malibu", "Silverado", "Equinox", "Tahoe", "Camaro"]),
    ("Nissan", &["Altima", "Sentra", "Rogue", "Pathfinder", "Maxima"]),
    ("Hyundai", &["Elantra", "Sonata", "Tucson", "Santa Fe", "Kona"]),
    ("Kia", &["Optima", "Sorento", "Sportage", "Rio", "Telluride"]),
    ("Mazda", &["Mazda3", "Mazda6", "CX-5", "CX-9", "MX-5"]),
    ("Subaru", &["Impreza", "Outback", "Forester", "Crosstrek", "Legacy"]),
    ("Lexus", &["ES", "RX", "NX", "GX", "LS"]),
    ("Volvo", &["S60", "S90", "XC60", "XC90", "V60"]),
    ("Porsche", &["911", "Cayenne", "Macan", "Panamera", "Taycan"]),
];

/// Brand options for a pick list
pub fn brands() -> Vec<String> {
    BRANDS.iter().map(|brand| brand.to_string()).collect()
}

/// Models of a brand, empty for an unknown brand
pub fn models_for(brand: &str) -> Vec<String> {
    MODELS_BY_BRAND
        .iter()
        .find(|(name, _)| *name == brand)
        .map(|(_, models)| models.iter().map(|model| model.to_string()).collect())
        .unwrap_or_default()
}

/// Year window ending at `anchor`, newest first
pub fn years_ending(anchor: i32) -> Vec<String> {
    (0..YEAR_WINDOW as i32)
        .map(|offset| (anchor - offset).to_string())
        .collect()
}

/// Rolling year window ending at the current calendar year
pub fn years() -> Vec<String> {
    years_ending(chrono::Local::now().year())
}

/// State management module
///
/// This module handles all application state, including:
/// - The in-memory scheme catalog (catalog.rs)
/// - Shared data structures (data.rs)
/// - Filter panel selections (filter.rs)
/// - The upload form draft and its validation (upload.rs)
/// - Fixed brand/model/year reference data (vehicles.rs)

pub mod catalog;
pub mod data;
pub mod filter;
pub mod upload;
pub mod vehicles;

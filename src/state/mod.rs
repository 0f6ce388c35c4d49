/// State management module
///
/// This module handles all application state, including:
/// - The pet record and its placeholder (data.rs)
/// - Loading the pet catalog (catalog.rs)
/// - List/detail navigation and the current selection (navigation.rs)

pub mod catalog;
pub mod data;
pub mod navigation;

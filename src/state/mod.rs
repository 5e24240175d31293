/// State management module
///
/// This module handles all application state, including:
/// - Shared data structures (data.rs)
/// - Loading the catalog file (catalog.rs)
/// - Genre filter, sort key and the filter/sort stages (view.rs)
/// - Title collation (collate.rs)
/// - The controller that ties them to the UI (controller.rs)

pub mod catalog;
pub mod collate;
pub mod controller;
pub mod data;
pub mod view;

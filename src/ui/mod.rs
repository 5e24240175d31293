/// User interface module
///
/// - The presenter the controller renders into (surface.rs)
/// - Card and detail overlay widgets (card.rs, detail.rs)
/// - Cover resolution and placeholder drawing (cover.rs)
/// - Genre decorations and price formatting (style.rs)

pub mod card;
pub mod cover;
pub mod detail;
pub mod style;
pub mod surface;

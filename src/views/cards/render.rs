// Render facade for cards so external code keeps importing
// views::cards::{project_card, CARD_WIDTH}.

pub use crate::views::cards::items::project_card;

/// Default card width used by the grid (in logical pixels).
pub const CARD_WIDTH: f32 = crate::ui_constants::CARD_WIDTH;

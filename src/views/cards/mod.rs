pub mod items;
mod render;

pub use render::{project_card, CARD_WIDTH};

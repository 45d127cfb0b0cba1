// UI constants gathered in one place instead of magic numbers at call sites.

/// Default card width in logical pixels.
pub const CARD_WIDTH: f32 = 320.0;

/// Gap between cards in the grid.
pub const CARD_GAP: f32 = 16.0;

/// UI spacing constants
pub mod spacing {
    /// Small spacing (4px)
    pub const SMALL: f32 = 4.0;

    /// Medium spacing (8px)
    pub const MEDIUM: f32 = 8.0;

    /// Large spacing (16px)
    pub const LARGE: f32 = 16.0;

    /// Extra large spacing (24px)
    pub const XLARGE: f32 = 24.0;
}

/// Card-specific layout constants
pub mod card {
    /// Inner margin of the card frame (symmetric)
    pub const INNER_MARGIN: f32 = 8.0;

    /// Border radius of card corners
    pub const ROUNDING: f32 = 8.0;

    /// Space between the cover image and the title
    pub const POST_COVER_GAP: f32 = 12.0;

    /// Rounding of pills/chips drawn on top of the cover
    pub const PILL_ROUNDING: f32 = 6.0;

    /// How far the cover zooms in while the card is hovered (1.0 = no zoom)
    pub const HOVER_ZOOM: f32 = 1.1;

    /// Opacity of the dark veil behind the hover links (0..=1)
    pub const HOVER_VEIL_OPACITY: f32 = 0.6;

    /// Lines kept of the description before the ellipsis
    pub const DESCRIPTION_LINES: usize = 2;
}

/// Entrance animation timing
pub mod entrance {
    /// Delay between consecutive cards joining the entrance, seconds
    pub const STAGGER_S: f32 = 0.2;

    /// Container fade-in duration, seconds
    pub const CONTAINER_FADE_S: f32 = 0.3;

    /// Per-card fade/rise duration, seconds
    pub const CARD_FADE_S: f32 = 0.3;

    /// Vertical offset a card rises from, logical px
    pub const RISE_PX: f32 = 20.0;
}

/// Modal layout constants
pub mod modal {
    /// Dialog width in logical pixels
    pub const WIDTH: f32 = 560.0;

    /// Backdrop darkness (0 = transparent, 255 = black)
    pub const BACKDROP_ALPHA: u8 = 150;
}

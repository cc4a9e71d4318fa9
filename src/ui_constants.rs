// UI and asset constants shared by the card builder and the egui painter.

/// Default card width in logical pixels
pub const CARD_WIDTH: f32 = 320.0;

/// Gap between cards in the grid
pub const CARD_GAP: f32 = 16.0;

/// Maximum number of description characters shown on a card
pub const DESCRIPTION_LIMIT: usize = 190;

/// Static assets shipped next to the binary
pub mod assets {
    /// Shown when a hotel has no usable gallery image
    pub const PLACEHOLDER_IMAGE: &str = "Imgs/hotel-svgrepo-com.svg";

    /// One icon per star of the hotel category
    pub const STAR_ICON: &str = "Imgs/start-favorite-svgrepo-com.svg";
}

/// UI spacing constants
pub mod spacing {
    /// Small spacing (4px)
    pub const SMALL: f32 = 4.0;

    /// Medium spacing (8px)
    pub const MEDIUM: f32 = 8.0;
}

/// Card-specific layout constants
pub mod card {
    /// Inner margin of card frame (symmetric)
    pub const INNER_MARGIN: f32 = 8.0;

    /// Border radius of card corners
    pub const ROUNDING: f32 = 8.0;

    /// Badge rounding
    pub const BADGE_ROUNDING: f32 = 6.0;

    /// Side length of the carousel buttons
    pub const NAV_SIZE: f32 = 28.0;

    /// Side length of one rating star
    pub const STAR_SIZE: f32 = 14.0;
}

/// Carousel navigation buttons, in the order they are placed on a card.
#[derive(strum::EnumIter, strum::Display, PartialEq, Eq, Clone, Copy, Debug)]
pub enum NavDirection {
    #[strum(to_string = "prev")]
    Previous,
    #[strum(to_string = "next")]
    Next,
}

impl NavDirection {
    /// Cursor offset applied by the carousel.
    pub fn step(self) -> isize {
        match self {
            NavDirection::Previous => -1,
            NavDirection::Next => 1,
        }
    }

    /// Fluent message id of the button's accessible label.
    pub fn label_id(self) -> &'static str {
        match self {
            NavDirection::Previous => "card-nav-prev",
            NavDirection::Next => "card-nav-next",
        }
    }

    /// Glyph painted on the button.
    pub fn glyph(self) -> &'static str {
        match self {
            NavDirection::Previous => "‹",
            NavDirection::Next => "›",
        }
    }
}

/// Messages the status region can show during a render pass.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum StatusMessage {
    Loading,
    Empty,
    Failed,
}

impl StatusMessage {
    pub fn message_id(self) -> &'static str {
        match self {
            StatusMessage::Loading => "status-loading",
            StatusMessage::Empty => "status-empty",
            StatusMessage::Failed => "status-failed",
        }
    }
}

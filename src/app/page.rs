// The page the render pass writes into: a card grid, a status region and an
// optional results label. Any of them may be missing; the loader checks.

use crate::views::cards::HotelCard;

#[derive(Debug, Default)]
pub struct Grid {
    cards: Vec<HotelCard>,
}

impl Grid {
    pub fn cards(&self) -> &[HotelCard] {
        &self.cards
    }

    pub fn cards_mut(&mut self) -> &mut [HotelCard] {
        &mut self.cards
    }

    /// Drop every current card and take `cards` in one swap.
    pub fn replace_cards(&mut self, cards: Vec<HotelCard>) {
        self.cards = cards;
    }
}

/// Loading / empty / error messages. Only the loader writes here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusRegion {
    text: String,
    hidden: bool,
}

impl Default for StatusRegion {
    fn default() -> Self {
        Self {
            text: String::new(),
            hidden: true,
        }
    }
}

impl StatusRegion {
    pub fn show_status(&mut self, message: impl Into<String>) {
        self.text = message.into();
        self.hidden = false;
    }

    pub fn hide_status(&mut self) {
        self.text.clear();
        self.hidden = true;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ResultsLabel {
    pub text: String,
}

#[derive(Debug, Default)]
pub struct Page {
    pub grid: Option<Grid>,
    pub status: Option<StatusRegion>,
    pub results: Option<ResultsLabel>,
}

impl Page {
    /// A page with every anchor present.
    pub fn complete() -> Self {
        Self {
            grid: Some(Grid::default()),
            status: Some(StatusRegion::default()),
            results: Some(ResultsLabel::default()),
        }
    }
}

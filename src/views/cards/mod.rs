// Card building blocks: pure formatting, carousel, view builder, rating, card, egui painter.
pub mod builder;
pub mod card;
pub mod carousel;
pub mod format;
mod rating;
mod render;

pub use card::HotelCard;
pub use render::{draw_card, Textures};

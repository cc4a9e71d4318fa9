pub mod cards;
pub mod dom;

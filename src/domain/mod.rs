//! Доменная модель блэкджека: карты, колода, руки, игрок, дилер.

pub mod card;
pub mod dealer;
pub mod deck;
pub mod hand;
pub mod player;
pub mod round;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use dealer::*;
pub use deck::*;
pub use hand::*;
pub use player::*;
pub use round::*;

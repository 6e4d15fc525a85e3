//! Core data model definitions shared across Gamefront crates.
#![allow(missing_docs)]

pub mod banner;
pub mod game;
pub mod ids;
pub mod page;

pub use banner::{Banner, BannerSet};
pub use game::{Game, Genre, Screenshot};
pub use ids::GameId;
pub use page::ApiResponse;

//! sea-orm entity models for the meme catalog database.

#![warn(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious
)]

pub mod memes;
pub mod user_selections;

pub mod prelude {
    pub use super::memes::Entity as Memes;
    pub use super::user_selections::Entity as UserSelections;
}

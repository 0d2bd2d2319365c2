//! src/routes/mod.rs

mod pages;
mod ping;
mod submit_contact;

pub use pages::*;
pub use ping::*;
pub use submit_contact::*;

//! HTTP Handlers

mod book;
mod ping;

pub use book::*;
pub use ping::*;

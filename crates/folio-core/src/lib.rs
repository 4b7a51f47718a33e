//! Scroll and pointer motion coordination for the folio page.
//!
//! Platform-free: the web frontend feeds raw browser samples in and binds
//! the derived numbers to styles; host tests drive the same types directly.

pub mod config;
pub mod constants;
pub mod contact;
pub mod cursor;
pub mod derive;
pub mod hub;
pub mod nav;
pub mod reveal;
pub mod sampler;
pub mod signals;

pub use config::*;
pub use constants::*;
pub use contact::*;
pub use cursor::*;
pub use derive::*;
pub use hub::*;
pub use nav::*;
pub use reveal::*;
pub use sampler::*;
pub use signals::*;

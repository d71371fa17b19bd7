//! Data models organized by type.

pub mod book;
pub mod responses;

pub use book::*;
pub use responses::*;

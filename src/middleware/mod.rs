//! Request preconditions applied before routing.

pub mod accept_json;
pub mod redirect_slashes;

pub use accept_json::AcceptJson;
pub use redirect_slashes::RedirectSlashes;

//! Data models for the Syrve loyalty API.
//!
//! Responses are kept as raw JSON so that every field the server sends
//! survives re-printing; the models only add typed access to the few fields
//! the lookup flow reads.

mod history;
mod organization;
mod token;

pub use history::*;
pub use organization::*;
pub use token::*;

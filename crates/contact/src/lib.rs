mod client;
mod form;
mod types;

pub use client::*;
pub use form::*;
pub use types::*;

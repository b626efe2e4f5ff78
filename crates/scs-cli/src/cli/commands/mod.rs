//! Command implementations for the `scs` binary.

mod contact;
mod generate;
mod listing;
mod resolve;
mod subscribe;

pub use contact::run_contact;
pub use generate::{run_generate, GenerateCommand};
pub use listing::run_listing;
pub use resolve::run_resolve;
pub use subscribe::run_subscribe;

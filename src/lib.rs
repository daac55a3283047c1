// pub modules
pub mod controller;
pub mod model;
pub mod search;
pub mod source;
pub mod state;
pub mod store;

// re-exported types
mod config;
pub use config::Config;

mod error;
pub use error::*;

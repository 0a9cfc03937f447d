pub mod api;
pub mod build;
pub mod cart;
pub mod catalog;
pub mod compat;
pub mod config;
pub mod error;
pub mod export;
pub mod format;
pub mod scorer;
pub mod shop;
pub mod storage;
// cmd and reports are modules of the binary crate (main.rs).

pub use error::{RigError, RigResult};

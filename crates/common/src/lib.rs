//! Common types shared across the ssmfact crates.

pub mod error;
pub mod os;

pub use error::{Error, Result};
pub use os::OsFamily;

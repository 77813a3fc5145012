//! Filesystem layer for splice
//!
//! Provides the target path type, whole-file reads, atomic writes and
//! format-detecting config loading.

pub mod checksum;
pub mod config;
pub mod error;
pub mod io;
pub mod path;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use path::TargetPath;

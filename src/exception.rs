//! Error handling module.
//!
//! # Examples
//!
//! ```rust,no_run
//! use grappelli::exception::{Error, Result};
//! ```

pub use grappelli_exception::*;

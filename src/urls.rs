//! URL dispatch module.
//!
//! # Examples
//!
//! ```rust,no_run
//! use grappelli::urls::{DefaultRouter, Router, path, re_path};
//! ```

pub use grappelli_urls::*;

//! `fancyname` is a library to generate large batches of decorated variants of a name.
//!
//! The main entry point is `engine::StyleEngine`, which renders the text through
//! Unicode character maps and decorates it according to one of nine style categories.
//! The `generate` and `transform` functions use the built-in tables directly.
//!
//! If you need more control, the configuration, symbol pools and gamer templates
//! can be customised (start with `config::MainConfig` and `StyleEngine::from_config`).
//!
//! "Hello world" example:
//! ```
//! use fancyname::prelude::*;
//!
//! assert_eq!(transform("Hello", Some("fullwidth")), "Ｈｅｌｌｏ");
//!
//! let styles = generate("Hello");
//! assert_eq!(styles.len(), StyleEngine::default().batch_size());
//! assert!(styles.iter().any(|s| s.category == StyleCategory::Gamer));
//! ```

pub mod category;
pub mod config;
pub mod constants;
pub mod controller;
pub mod custom;
pub mod engine;
pub mod error;
pub mod filters;
pub mod fonts;
pub mod formatter;
pub mod log;
pub mod symbols;
pub mod template;

/// The fancyname prelude
///
/// This module re-exports the most commonly used items from fancyname.
/// You can use it with `use fancyname::prelude::*;` to bring all common items into scope.
pub mod prelude {
    // Re-export commonly used types
    pub use crate::category::StyleCategory;
    pub use crate::custom::CustomStyle;
    pub use crate::engine::{GeneratedStyle, StyleEngine};
    pub use crate::error::Result;

    // Re-export commonly used functions
    pub use crate::engine::generate;
    pub use crate::fonts::transform;
}

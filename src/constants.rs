//! Module for shared constants used across the codebase

pub mod generation {
    /// Number of records a generation pass aims for, spread evenly over the categories
    pub const TARGET_TOTAL: usize = 42000;

    /// Prefix of every generated record identifier
    pub const ID_PREFIX: &str = "s";

    /// Text used when none is supplied
    pub const DEFAULT_TEXT: &str = "Your Name";
}

/// Fixed (non random) decorations
pub mod wraps {
    pub const ENGLISH: (&str, &str) = ("『 ", " 』");
    pub const FREE: (&str, &str) = ("💼 ", " 💼");
    pub const SYMBOL: (&str, &str) = ("🔱 ", " 🔱");
    /// Outer decoration of the graphic category around the combination pair
    pub const GRAPHIC: (&str, &str) = ("🎨 ", " 🎨");
    /// Outer decoration of the fancy category around the combination pair
    pub const FANCY: (&str, &str) = ("✨ ", " ✨");
}

pub mod display {
    /// Number of records shown per page
    pub const DEFAULT_PAGE_SIZE: usize = 200;

    /// Default output pattern for each record
    pub const DEFAULT_FORMAT: &str = "{{ text }}";

    pub const DEFAULT_CUSTOM_PREFIX: &str = "🏹";
    pub const DEFAULT_CUSTOM_SUFFIX: &str = "🏹";
}

pub mod config {
    /// Name of the main configuration file
    pub const DEFAULT_CONF_FILE: &str = "fancyname.toml";
}

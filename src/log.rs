use std::env;

use once_cell::sync::Lazy;

pub static DEBUG_ENABLED: Lazy<bool> = Lazy::new(|| {
    env::var("FANCYNAME_DEBUG").map_or(false, |log_level| log_level.eq("true") || log_level.eq("1"))
});

pub fn is_debug_enabled() -> bool {
    *DEBUG_ENABLED
}

/// Prints a debug line in yellow to stderr. Used by the `debug!` macro.
pub fn print_debug(message: &str) {
    eprintln!("{}", nu_ansi_term::Color::Yellow.paint(message));
}

/// Logs a debug message with optional formatted arguments.
///
/// Messages are written to stderr so they never mix with the generated styles.
///
/// # Examples
///
/// ```
/// use fancyname::debug;
///
/// // Only printed (in yellow) when FANCYNAME_DEBUG is "true" or "1"
/// debug!("Generation completed");
/// debug!("{} records for {:?}", 42003, "Zed");
/// ```
#[macro_export]
macro_rules! debug {
    ($fmt:expr) => {
        if *$crate::log::DEBUG_ENABLED {
            $crate::log::print_debug(&format!("{}", $fmt));
        }
    };
    ($fmt:expr, $($arg:tt)*) => {
        if *$crate::log::DEBUG_ENABLED {
            $crate::log::print_debug(&format!($fmt, $($arg)*));
        }
    };
}

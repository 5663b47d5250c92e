//! Filters for the Tera output patterns
//! Currently supports the following filters:
//! - `font` : Apply a character map to the text
//! - `surround` : Wrap the text between two strings

pub mod font;
pub mod surround;

//! Named character maps ("fonts") and the character transformation.
//!
//! Every map associates single source characters with a decorative replacement.
//! Maps are built once from the static tables and never modified afterwards.
//!
//! ```
//! use fancyname::fonts::transform;
//!
//! assert_eq!(transform("Zed 7", Some("circled")), "Ⓩⓔⓓ ⑦");
//! assert_eq!(transform("Zed", Some("no-such-font")), "Zed");
//! assert_eq!(transform("Zed", None), "Zed");
//! ```

mod tables;

use once_cell::sync::Lazy;
use std::collections::HashMap;

use tables::{FontTable, Glyphs, FONT_TABLES};

/// A named association from single characters to replacement strings.
#[derive(Debug, Clone)]
pub struct CharacterMap {
    name: &'static str,
    glyphs: HashMap<char, Box<str>>,
}

impl CharacterMap {
    fn from_table(table: &FontTable) -> Self {
        let glyphs = match table.glyphs {
            Glyphs::Aligned { from, to } => from
                .chars()
                .zip(to.chars())
                .map(|(src, dst)| (src, dst.to_string().into_boxed_str()))
                .collect(),
            Glyphs::Combining { from, mark } => from
                .chars()
                .map(|src| (src, format!("{}{}", src, mark).into_boxed_str()))
                .collect(),
        };
        CharacterMap {
            name: table.name,
            glyphs,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the replacement for the given char, if the map covers it
    pub fn lookup(&self, c: char) -> Option<&str> {
        self.glyphs.get(&c).map(|g| g.as_ref())
    }

    pub fn contains(&self, c: char) -> bool {
        self.glyphs.contains_key(&c)
    }

    /// Number of source characters covered by the map
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Applies the map to every char of the text, keeping unmapped chars as they are
    pub fn apply(&self, text: &str) -> String {
        let mut result = String::with_capacity(text.len() * 4);
        for c in text.chars() {
            match self.glyphs.get(&c) {
                Some(glyph) => result.push_str(glyph),
                None => result.push(c),
            }
        }
        result
    }
}

/// Ordered collection of the available character maps with lookup by name
#[derive(Debug)]
pub struct FontRegistry {
    maps: Vec<CharacterMap>,
    index: HashMap<&'static str, usize>,
}

impl FontRegistry {
    /// Builds the registry with every built-in map, in table order
    pub fn builtin() -> Self {
        let maps: Vec<CharacterMap> = FONT_TABLES.iter().map(CharacterMap::from_table).collect();
        let index = maps
            .iter()
            .enumerate()
            .map(|(i, map)| (map.name(), i))
            .collect();
        FontRegistry { maps, index }
    }

    pub fn get(&self, name: &str) -> Option<&CharacterMap> {
        self.index.get(name).map(|&i| &self.maps[i])
    }

    /// Returns the map at the given registration position
    pub fn at(&self, position: usize) -> Option<&CharacterMap> {
        self.maps.get(position)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.maps.iter().map(|m| m.name())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CharacterMap> {
        self.maps.iter()
    }

    pub fn len(&self) -> usize {
        self.maps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }

    /// Transforms the text with the named map. Missing or unknown names leave the text unchanged.
    pub fn transform(&self, text: &str, map_name: Option<&str>) -> String {
        match map_name.and_then(|name| self.get(name)) {
            Some(map) => map.apply(text),
            None => text.to_string(),
        }
    }
}

/// Global registry with the built-in maps
pub static FONTS: Lazy<FontRegistry> = Lazy::new(FontRegistry::builtin);

/// Transforms the text using the built-in map with the given name.
///
/// An absent or unknown name returns the text unchanged.
pub fn transform(text: &str, map_name: Option<&str>) -> String {
    FONTS.transform(text, map_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_aligned() {
        for table in FONT_TABLES {
            if let Glyphs::Aligned { from, to } = table.glyphs {
                assert_eq!(
                    from.chars().count(),
                    to.chars().count(),
                    "table {} is misaligned",
                    table.name
                );
            }
        }
    }

    #[test]
    fn test_names_are_unique() {
        assert_eq!(FONTS.len(), FONT_TABLES.len());
        assert_eq!(FONTS.index.len(), FONTS.len());
    }

    #[test]
    fn test_identity_without_map() {
        let text = "Zed ✨ 42!";
        assert_eq!(transform(text, None), text);
        assert_eq!(transform(text, Some("unknown-map-name")), text);
        assert_eq!(transform("", Some("bold")), "");
    }

    #[test]
    fn test_known_maps() {
        assert_eq!(transform("Zed", Some("bold")), "𝐙𝐞𝐝");
        assert_eq!(transform("Zed", Some("fullwidth")), "Ｚｅｄ");
        assert_eq!(transform("hello", Some("italic")), "ℎ𝑒𝑙𝑙𝑜");
        assert_eq!(transform("BR", Some("script")), "ℬℛ");
        assert_eq!(transform("CZ", Some("double_struck")), "ℂℤ");
        assert_eq!(transform("abc", Some("small_caps")), "ᴀʙᴄ");
        assert_eq!(transform("10", Some("circled")), "①⓪");
    }

    #[test]
    fn test_multi_char_replacement() {
        assert_eq!(transform("ab", Some("strikethrough")), "a\u{336}b\u{336}");
        assert_eq!(transform("a b", Some("underline")), "a\u{332} b\u{332}");
    }

    #[test]
    fn test_unmapped_chars_are_preserved() {
        let text = "Zé d-_\t🦀.";
        for map in FONTS.iter() {
            let result = map.apply(text);
            let mut rebuilt = String::new();
            for c in text.chars() {
                match map.lookup(c) {
                    Some(glyph) => rebuilt.push_str(glyph),
                    None => rebuilt.push(c),
                }
            }
            assert_eq!(result, rebuilt, "map {}", map.name());
            assert!(!map.contains(' '), "map {} must not touch spaces", map.name());
            assert!(!map.contains('é'));
            assert!(!map.contains('🦀'));
        }
    }

    #[test]
    fn test_decorative_input_roundtrips() {
        // Already decorated text only contains chars outside every source alphabet
        let decorated = transform("Zed", Some("bold"));
        assert_eq!(transform(&decorated, Some("circled")), decorated);
    }

    #[test]
    fn test_registry_order() {
        assert_eq!(FONTS.at(0).map(|m| m.name()), Some("bold"));
        assert_eq!(FONTS.names().last(), Some("underline"));
        assert!(FONTS.at(FONTS.len()).is_none());
        assert!(FONTS.iter().all(|m| !m.is_empty()));
    }
}

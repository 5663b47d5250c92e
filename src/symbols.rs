//! Decorative symbol pools used to wrap the styled text.
//!
//! Single symbol pools (arrow, gamer, aesthetic and Bangla script) and the
//! combination pool of open/close pairs. Pools are validated on construction so
//! drawing from them can never fail.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::error::*;

pub const ARROW: &[&str] = &[
    "➳", "➵", "➶", "➷", "➸", "➹", "➺", "➻", "➼", "➽", "➾", "⇝", "⇜", "↣", "↢", "⟿", "⤳", "⥤", "➤",
    "➢", "🏹", "⇶", "↠", "⟹",
];

pub const GAMER: &[&str] = &[
    "꧁", "꧂", "亗", "☬", "༒", "࿐", "★", "☆", "♛", "♕", "⚔️", "🔥", "👑", "☠️", "🎮", "⚡", "💀", "ツ",
    "乡", "彡", "メ", "༄", "᭄", "✪",
];

pub const AESTHETIC: &[&str] = &[
    "♡", "❀", "✿", "❁", "✧", "☾", "☽", "˚", "♪", "🌸", "🦋", "🎀", "🌙", "✨", "💫", "🍒", "🌷", "☁️",
    "🕊️", "💕",
];

pub const BANGLA: &[&str] = &[
    "✒️", "ঔ", "৫", "৳", "৺", "৻", "ৡ", "ৠ", "অ", "ঐ", "ঋ", "ঽ", "৹", "৸", "❦", "❧",
];

pub const COMBINATIONS: &[(&str, &str)] = &[
    ("꧁", "꧂"),
    ("༺", "༻"),
    ("『", "』"),
    ("【", "】"),
    ("《", "》"),
    ("〖", "〗"),
    ("〔", "〕"),
    ("⟦", "⟧"),
    ("⦃", "⦄"),
    ("«", "»"),
    ("⫷", "⫸"),
    ("╰", "╯"),
    ("❮", "❯"),
    ("⊱", "⊰"),
    ("𓆩", "𓆪"),
    ("⦑", "⦒"),
];

/// A named, non-empty, ordered sequence of decorative strings
#[derive(Debug, Clone)]
pub struct SymbolPool {
    name: String,
    symbols: Vec<String>,
}

impl SymbolPool {
    /// Creates a pool, failing if it is empty or holds a blank symbol
    pub fn new<S: Into<String>>(name: &str, symbols: Vec<S>) -> Result<Self> {
        let symbols: Vec<String> = symbols.into_iter().map(Into::into).collect();
        if symbols.is_empty() {
            return Err(Error::EmptyPool(name.to_string()));
        }
        if let Some(index) = symbols.iter().position(|s| s.trim().is_empty()) {
            return Err(Error::InvalidSymbol {
                pool: name.to_string(),
                index,
            });
        }
        Ok(SymbolPool {
            name: name.to_string(),
            symbols,
        })
    }

    fn from_static(name: &str, symbols: &[&str]) -> Self {
        SymbolPool {
            name: name.to_string(),
            symbols: symbols.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Draws one symbol uniformly
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        // Never empty once constructed
        self.symbols.choose(rng).map_or("", String::as_str)
    }
}

/// A non-empty list of open/close symbol pairs
#[derive(Debug, Clone)]
pub struct ComboPool {
    pairs: Vec<(String, String)>,
}

impl ComboPool {
    pub const NAME: &'static str = "combinations";

    pub fn new(pairs: Vec<(String, String)>) -> Result<Self> {
        if pairs.is_empty() {
            return Err(Error::EmptyPool(Self::NAME.to_string()));
        }
        if let Some(index) = pairs
            .iter()
            .position(|(open, close)| open.trim().is_empty() || close.trim().is_empty())
        {
            return Err(Error::InvalidSymbol {
                pool: Self::NAME.to_string(),
                index,
            });
        }
        Ok(ComboPool { pairs })
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> (&str, &str) {
        self.pairs
            .choose(rng)
            .map_or(("", ""), |(open, close)| (open.as_str(), close.as_str()))
    }
}

/// Every pool the generation engine draws from
#[derive(Debug, Clone)]
pub struct SymbolPools {
    pub arrow: SymbolPool,
    pub gamer: SymbolPool,
    pub aesthetic: SymbolPool,
    pub bangla: SymbolPool,
    pub combinations: ComboPool,
}

impl SymbolPools {
    pub fn builtin() -> Self {
        SymbolPools {
            arrow: SymbolPool::from_static("arrow", ARROW),
            gamer: SymbolPool::from_static("gamer", GAMER),
            aesthetic: SymbolPool::from_static("aesthetic", AESTHETIC),
            bangla: SymbolPool::from_static("bangla", BANGLA),
            combinations: ComboPool {
                pairs: COMBINATIONS
                    .iter()
                    .map(|(o, c)| (o.to_string(), c.to_string()))
                    .collect(),
            },
        }
    }

    /// Symbols offered as prefix/suffix choices in custom mode (arrow, gamer, then aesthetic)
    pub fn palette(&self) -> Vec<&str> {
        self.arrow
            .symbols()
            .iter()
            .chain(self.gamer.symbols())
            .chain(self.aesthetic.symbols())
            .map(String::as_str)
            .collect()
    }
}

impl Default for SymbolPools {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_builtin_pools_are_valid() {
        for (name, pool) in [
            ("arrow", ARROW),
            ("gamer", GAMER),
            ("aesthetic", AESTHETIC),
            ("bangla", BANGLA),
        ] {
            assert!(SymbolPool::new(name, pool.to_vec()).is_ok(), "pool {}", name);
        }
        let pairs = COMBINATIONS
            .iter()
            .map(|(o, c)| (o.to_string(), c.to_string()))
            .collect();
        assert!(ComboPool::new(pairs).is_ok());
    }

    #[test]
    fn test_empty_pool_fails() {
        let result = SymbolPool::new::<String>("arrow", vec![]);
        assert!(matches!(result, Err(Error::EmptyPool(name)) if name == "arrow"));
        assert!(matches!(ComboPool::new(vec![]), Err(Error::EmptyPool(_))));
    }

    #[test]
    fn test_blank_symbol_fails() {
        let result = SymbolPool::new("gamer", vec!["★", " ", "☆"]);
        assert!(matches!(
            result,
            Err(Error::InvalidSymbol { pool, index: 1 }) if pool == "gamer"
        ));
        let result = ComboPool::new(vec![("<".to_string(), "".to_string())]);
        assert!(matches!(result, Err(Error::InvalidSymbol { index: 0, .. })));
    }

    #[test]
    fn test_draw_stays_in_pool() {
        let pools = SymbolPools::builtin();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let symbol = pools.arrow.draw(&mut rng);
            assert!(ARROW.contains(&symbol));
            let (open, close) = pools.combinations.draw(&mut rng);
            assert!(COMBINATIONS.contains(&(open, close)));
        }
    }

    #[test]
    fn test_draw_from_owned_symbols() {
        let pool = SymbolPool::new("gamer", vec!["꧁".to_string()]).unwrap();
        let mut rng = StdRng::seed_from_u64(2);
        assert_eq!(pool.draw(&mut rng), "꧁");

        let combos = ComboPool::new(vec![("<".to_string(), ">".to_string())]).unwrap();
        assert_eq!(combos.draw(&mut rng), ("<", ">"));
    }

    #[test]
    fn test_draw_covers_pool() {
        let pool = SymbolPool::new("tiny", vec!["a", "b", "c"]).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(pool.draw(&mut rng).to_string());
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_palette_order() {
        let pools = SymbolPools::builtin();
        let palette = pools.palette();
        assert_eq!(palette.len(), ARROW.len() + GAMER.len() + AESTHETIC.len());
        assert_eq!(palette[0], ARROW[0]);
        assert_eq!(palette[ARROW.len()], GAMER[0]);
        assert_eq!(palette.last(), AESTHETIC.last());
    }
}

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum_macros::Display;

use crate::constants::wraps;
use crate::error::*;
use crate::symbols::SymbolPools;
use crate::template::TemplateSet;

/// The fixed groupings of generated styles, each with its own decoration rule
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum StyleCategory {
    Gamer,
    Aesthetic,
    Bangla,
    Fancy,
    English,
    Arrow,
    Symbol,
    Graphic,
    Free,
}

impl StyleCategory {
    pub const ALL: [StyleCategory; 9] = [
        StyleCategory::Gamer,
        StyleCategory::Aesthetic,
        StyleCategory::Bangla,
        StyleCategory::Fancy,
        StyleCategory::English,
        StyleCategory::Arrow,
        StyleCategory::Symbol,
        StyleCategory::Graphic,
        StyleCategory::Free,
    ];

    /// Short upper case label used when listing categories
    pub fn label(&self) -> &'static str {
        match self {
            StyleCategory::Gamer => "GAMER",
            StyleCategory::Aesthetic => "AESTHET",
            StyleCategory::Bangla => "BANGLA",
            StyleCategory::Fancy => "FANCY",
            StyleCategory::English => "ENGLISH",
            StyleCategory::Arrow => "ARROW",
            StyleCategory::Symbol => "SYMBOL",
            StyleCategory::Graphic => "GRAPHIC",
            StyleCategory::Free => "FREE",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            StyleCategory::Gamer => "🎮",
            StyleCategory::Aesthetic => "🎀",
            StyleCategory::Bangla => "✒️",
            StyleCategory::Fancy => "🌟",
            StyleCategory::English => "🟦",
            StyleCategory::Arrow => "🏹",
            StyleCategory::Symbol => "🔱",
            StyleCategory::Graphic => "🎨",
            StyleCategory::Free => "💼",
        }
    }

    /// Applies the decoration rule of the category to the styled text.
    ///
    /// Random parts (symbols, pairs and templates) are drawn from `rng` on every call.
    pub fn decorate<R: Rng + ?Sized>(
        self,
        styled: &str,
        pools: &SymbolPools,
        templates: &TemplateSet,
        rng: &mut R,
    ) -> String {
        match self {
            StyleCategory::Arrow => mirror(pools.arrow.draw(rng), styled),
            StyleCategory::Gamer => templates.render_random(styled, &pools.gamer, rng),
            StyleCategory::Bangla => mirror(pools.bangla.draw(rng), styled),
            StyleCategory::English => wrap(styled, wraps::ENGLISH),
            StyleCategory::Graphic => {
                let (open, close) = pools.combinations.draw(rng);
                wrap(&format!("{}{}{}", open, styled, close), wraps::GRAPHIC)
            }
            StyleCategory::Free => wrap(styled, wraps::FREE),
            StyleCategory::Fancy => {
                let (open, close) = pools.combinations.draw(rng);
                wrap(&format!("{}{}{}", open, styled, close), wraps::FANCY)
            }
            StyleCategory::Aesthetic => mirror(pools.aesthetic.draw(rng), styled),
            StyleCategory::Symbol => wrap(styled, wraps::SYMBOL),
        }
    }
}

/// Same symbol on both sides, separated by a space
fn mirror(symbol: &str, styled: &str) -> String {
    format!("{} {} {}", symbol, styled, symbol)
}

fn wrap(styled: &str, (start, end): (&str, &str)) -> String {
    format!("{}{}{}", start, styled, end)
}

impl FromStr for StyleCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "gamer" => Ok(StyleCategory::Gamer),
            "aesthetic" | "aesthet" => Ok(StyleCategory::Aesthetic),
            "bangla" => Ok(StyleCategory::Bangla),
            "fancy" => Ok(StyleCategory::Fancy),
            "english" => Ok(StyleCategory::English),
            "arrow" => Ok(StyleCategory::Arrow),
            "symbol" => Ok(StyleCategory::Symbol),
            "graphic" => Ok(StyleCategory::Graphic),
            "free" => Ok(StyleCategory::Free),
            _ => Err(Error::UnknownCategory(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn decorate(category: StyleCategory, styled: &str, seed: u64) -> String {
        let pools = SymbolPools::builtin();
        let templates = TemplateSet::builtin();
        let mut rng = StdRng::seed_from_u64(seed);
        category.decorate(styled, &pools, &templates, &mut rng)
    }

    #[test]
    fn test_display_and_parse() {
        for category in StyleCategory::ALL {
            let parsed: StyleCategory = category.to_string().parse().unwrap();
            assert_eq!(parsed, category);
            let parsed: StyleCategory = category.label().parse().unwrap();
            assert_eq!(parsed, category);
        }
        assert_eq!(StyleCategory::Aesthetic.to_string(), "aesthetic");
        assert!(matches!(
            "unknown".parse::<StyleCategory>(),
            Err(Error::UnknownCategory(_))
        ));
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&StyleCategory::Bangla).unwrap();
        assert_eq!(json, "\"bangla\"");
    }

    #[test]
    fn test_fixed_wraps() {
        assert_eq!(decorate(StyleCategory::English, "Zed", 1), "『 Zed 』");
        assert_eq!(decorate(StyleCategory::Free, "Zed", 2), "💼 Zed 💼");
        assert_eq!(decorate(StyleCategory::Symbol, "Zed", 3), "🔱 Zed 🔱");
    }

    #[test]
    fn test_mirrored_symbols() {
        let pools = SymbolPools::builtin();
        let cases = [
            (StyleCategory::Arrow, &pools.arrow),
            (StyleCategory::Bangla, &pools.bangla),
            (StyleCategory::Aesthetic, &pools.aesthetic),
        ];
        for (category, pool) in cases {
            for seed in 0..50 {
                let result = decorate(category, "Zed", seed);
                let (left, rest) = result.split_once(" Zed ").unwrap();
                assert_eq!(left, rest, "{} in {:?}", category, result);
                assert!(pool.symbols().iter().any(|s| s == left));
            }
        }
    }

    #[test]
    fn test_combination_wraps() {
        let pools = SymbolPools::builtin();
        for seed in 0..50 {
            let graphic = decorate(StyleCategory::Graphic, "Zed", seed);
            let inner = graphic
                .strip_prefix("🎨 ")
                .and_then(|s| s.strip_suffix(" 🎨"))
                .unwrap();
            assert!(pools
                .combinations
                .pairs()
                .iter()
                .any(|(o, c)| *inner == format!("{}Zed{}", o, c)));

            let fancy = decorate(StyleCategory::Fancy, "Zed", seed);
            assert!(fancy.starts_with("✨ ") && fancy.ends_with(" ✨"));
        }
    }

    #[test]
    fn test_gamer_uses_templates() {
        let pools = SymbolPools::builtin();
        let templates = TemplateSet::builtin();
        for seed in 0..50 {
            let result = decorate(StyleCategory::Gamer, "Zed", seed);
            let known = templates.templates().iter().any(|t| {
                if t.uses_symbol() {
                    pools.gamer.symbols().iter().any(|s| t.render("Zed", s) == result)
                } else {
                    t.render("Zed", "") == result
                }
            });
            assert!(known, "unexpected gamer style {:?}", result);
        }
    }
}

//! The style generation engine.
//!
//! Given a text, the engine produces a fixed quota of decorated records for every
//! category, then shuffles the whole batch:
//!
//! ```
//! use fancyname::engine::{generate, StyleEngine};
//! use fancyname::category::StyleCategory;
//!
//! let styles = generate("Zed");
//! let engine = StyleEngine::default();
//! assert_eq!(styles.len(), engine.per_category() * StyleCategory::ALL.len());
//! assert!(generate("   ").is_empty());
//! ```

use once_cell::sync::Lazy;
use rand::Rng;
use serde::Serialize;

use crate::category::StyleCategory;
use crate::config::MainConfig;
use crate::constants::generation::{ID_PREFIX, TARGET_TOTAL};
use crate::debug;
use crate::error::*;
use crate::fonts::{FontRegistry, FONTS};
use crate::symbols::{ComboPool, SymbolPool, SymbolPools};
use crate::template::{Template, TemplateSet, GAMER_TEMPLATES};

/// One decorated variant of the input text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedStyle {
    /// Unique within the generation pass that created it
    pub id: String,
    pub text: String,
    pub category: StyleCategory,
}

pub struct StyleEngine {
    fonts: &'static FontRegistry,
    pools: SymbolPools,
    templates: TemplateSet,
    target_total: usize,
}

impl Default for StyleEngine {
    fn default() -> Self {
        StyleEngine {
            fonts: &FONTS,
            pools: SymbolPools::builtin(),
            templates: TemplateSet::builtin(),
            target_total: TARGET_TOTAL,
        }
    }
}

impl StyleEngine {
    /// Creates an engine from explicit tables
    ///
    /// # Errors
    /// `ConfigError` if the target total is zero
    pub fn new(pools: SymbolPools, templates: TemplateSet, target_total: usize) -> Result<Self> {
        if target_total == 0 {
            return Err(Error::ConfigError(
                "target_total must be greater than zero".to_string(),
            ));
        }
        Ok(StyleEngine {
            fonts: &FONTS,
            pools,
            templates,
            target_total,
        })
    }

    /// Creates an engine merging the configured symbols and templates with the built-in ones.
    ///
    /// Any invalid table (empty pool, blank symbol, malformed or missing templates) fails here,
    /// before any record is generated.
    pub fn from_config(config: &MainConfig) -> Result<Self> {
        let pools_config = &config.pools;
        let merge_pool = |name: &str, builtin: &[&str], extra: &[String]| {
            let mut symbols: Vec<String> = if pools_config.replace_builtin {
                Vec::new()
            } else {
                builtin.iter().map(|s| s.to_string()).collect()
            };
            symbols.extend(extra.iter().cloned());
            SymbolPool::new(name, symbols)
        };

        let mut pairs: Vec<(String, String)> = if pools_config.replace_builtin {
            Vec::new()
        } else {
            crate::symbols::COMBINATIONS
                .iter()
                .map(|(o, c)| (o.to_string(), c.to_string()))
                .collect()
        };
        pairs.extend(pools_config.combinations.iter().cloned());

        let pools = SymbolPools {
            arrow: merge_pool("arrow", crate::symbols::ARROW, &pools_config.arrow)?,
            gamer: merge_pool("gamer", crate::symbols::GAMER, &pools_config.gamer)?,
            aesthetic: merge_pool(
                "aesthetic",
                crate::symbols::AESTHETIC,
                &pools_config.aesthetic,
            )?,
            bangla: merge_pool("bangla", crate::symbols::BANGLA, &pools_config.bangla)?,
            combinations: ComboPool::new(pairs)?,
        };

        let gamer = &config.gamer;
        let mut sources: Vec<&str> = if gamer.replace_builtin {
            Vec::new()
        } else {
            GAMER_TEMPLATES.to_vec()
        };
        sources.extend(gamer.templates.iter().map(String::as_str));
        let templates = sources
            .into_iter()
            .map(Template::parse)
            .collect::<Result<Vec<_>>>()?;
        let templates = TemplateSet::new(templates, gamer.literal_templates)?;

        let engine = Self::new(pools, templates, config.defaults.target_total)?;
        debug!(
            "Engine ready : {} fonts, {} gamer templates, target total {}",
            engine.fonts.len(),
            engine.templates.len(),
            engine.target_total
        );
        Ok(engine)
    }

    pub fn fonts(&self) -> &FontRegistry {
        self.fonts
    }

    pub fn pools(&self) -> &SymbolPools {
        &self.pools
    }

    pub fn templates(&self) -> &TemplateSet {
        &self.templates
    }

    pub fn target_total(&self) -> usize {
        self.target_total
    }

    /// Number of records produced for each category
    pub fn per_category(&self) -> usize {
        self.target_total.div_ceil(StyleCategory::ALL.len())
    }

    /// Number of records produced by a generation pass over a non-empty text
    pub fn batch_size(&self) -> usize {
        self.per_category() * StyleCategory::ALL.len()
    }

    /// Generates every style for the text using the thread random generator
    pub fn generate(&self, text: &str) -> Vec<GeneratedStyle> {
        self.generate_with(text, &mut rand::rng())
    }

    /// Generates every style for the text drawing all random choices from `rng`.
    ///
    /// The text is trimmed first; an empty text yields no records.
    pub fn generate_with<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> Vec<GeneratedStyle> {
        let text = text.trim();
        if text.is_empty() {
            return Vec::new();
        }

        let per_category = self.per_category();
        let font_choices = self.fonts.len() + 1;
        let mut results = Vec::with_capacity(self.batch_size());
        let mut counter = 0usize;

        for category in StyleCategory::ALL {
            for _ in 0..per_category {
                // Choice 0 keeps the text as is, the rest select a registered map
                let styled = match rng.random_range(0..font_choices) {
                    0 => text.to_string(),
                    n => match self.fonts.at(n - 1) {
                        Some(map) => map.apply(text),
                        None => text.to_string(),
                    },
                };
                let decorated = category.decorate(&styled, &self.pools, &self.templates, rng);
                results.push(GeneratedStyle {
                    id: format!("{}-{}-{}", ID_PREFIX, category, counter),
                    text: decorated,
                    category,
                });
                counter += 1;
            }
        }

        shuffle(&mut results, rng);
        debug!("Generated {} styles for {:?}", results.len(), text);
        results
    }
}

/// Uniform in-place permutation (Fisher-Yates)
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

static ENGINE: Lazy<StyleEngine> = Lazy::new(StyleEngine::default);

/// Generates every style for the text with the built-in tables
pub fn generate(text: &str) -> Vec<GeneratedStyle> {
    ENGINE.generate(text)
}

use std::io::Write;

use nu_ansi_term::Color::{Cyan, Green, Yellow};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::category::StyleCategory;
use crate::config::MainConfig;
use crate::custom::CustomStyle;
use crate::engine::{GeneratedStyle, StyleEngine};
use crate::error::*;
use crate::formatter::StyleFormatter;

/// What to generate and which slice of the result to print
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub text: String,
    pub category: Option<StyleCategory>,
    /// 1-based page number
    pub page: usize,
    /// Page size, `None` prints every record
    pub limit: Option<usize>,
    pub format: String,
    pub json: bool,
    pub seed: Option<u64>,
    /// Appends a "showing x of y" line after the records
    pub summary: bool,
}

/// Filters the styles by category (all of them when `None`) and returns the requested page.
///
/// Pages are 1-based; page 0 is treated as page 1. The list itself is left untouched.
pub fn page(
    styles: &[GeneratedStyle],
    category: Option<StyleCategory>,
    page: usize,
    limit: Option<usize>,
) -> Vec<&GeneratedStyle> {
    let filtered = styles
        .iter()
        .filter(move |s| category.map_or(true, |c| s.category == c));
    match limit {
        Some(limit) => filtered
            .skip(page.saturating_sub(1).saturating_mul(limit))
            .take(limit)
            .collect(),
        None => filtered.collect(),
    }
}

/// Provides the operations of the command line front end : bulk generation,
/// listing of fonts, categories and symbols, and the custom preview.
pub struct StylesController<'a> {
    pub engine: StyleEngine,
    pub config: &'a MainConfig,
}

impl<'a> StylesController<'a> {
    /// Creates the controller building the engine from the configuration
    pub fn new(config: &'a MainConfig) -> Result<Self> {
        Ok(Self {
            engine: StyleEngine::from_config(config)?,
            config,
        })
    }

    /// Generates the styles and writes the requested page.
    ///
    /// # Returns
    /// `Ok(false)` if nothing was generated (empty text) or the page is empty
    pub fn generate(&self, request: &GenerateRequest, output: &mut dyn Write) -> Result<bool> {
        let styles = match request.seed {
            Some(seed) => self
                .engine
                .generate_with(&request.text, &mut StdRng::seed_from_u64(seed)),
            None => self.engine.generate(&request.text),
        };

        let total = styles
            .iter()
            .filter(|s| request.category.map_or(true, |c| s.category == c))
            .count();
        let selected = page(&styles, request.category, request.page, request.limit);

        if request.json {
            serde_json::to_writer_pretty(&mut *output, &selected)?;
            writeln!(output)?;
        } else {
            let formatter = StyleFormatter::new(&request.format)?;
            let first = request
                .limit
                .map_or(0, |limit| request.page.saturating_sub(1).saturating_mul(limit));
            for (i, style) in selected.iter().enumerate() {
                writeln!(output, "{}", formatter.format(style, first + i + 1)?)?;
            }
            if request.summary && !selected.is_empty() {
                writeln!(
                    output,
                    "{}",
                    Cyan.paint(format!(
                        "Showing {}-{} of {} styles",
                        first + 1,
                        first + selected.len(),
                        total
                    ))
                )?;
            }
        }

        Ok(!selected.is_empty())
    }

    /// Lists every font map with a preview of the text
    pub fn list_fonts(&self, text: &str, output: &mut dyn Write) -> Result<bool> {
        let fonts = self.engine.fonts();
        let width = fonts.names().map(str::len).max().unwrap_or(0);
        for map in fonts.iter() {
            writeln!(
                output,
                "{}  {}",
                Green.paint(format!("{:width$}", map.name(), width = width)),
                map.apply(text)
            )?;
        }
        Ok(true)
    }

    /// Lists the categories with the number of records each one receives per generation
    pub fn list_categories(&self, output: &mut dyn Write) -> Result<bool> {
        let per_category = self.engine.per_category();
        for category in StyleCategory::ALL {
            writeln!(
                output,
                "{} {:<10} {:<8} {}",
                category.icon(),
                Green.paint(category.to_string()),
                category.label(),
                per_category
            )?;
        }
        writeln!(
            output,
            "{}",
            Yellow.paint(format!("{} styles per generation", self.engine.batch_size()))
        )?;
        Ok(true)
    }

    /// Lists the symbols available as custom prefix and suffix
    pub fn list_symbols(&self, output: &mut dyn Write) -> Result<bool> {
        let palette = self.engine.pools().palette();
        for row in palette.chunks(12) {
            writeln!(output, "{}", row.join(" "))?;
        }
        Ok(true)
    }

    /// Prints the custom preview of the text
    pub fn custom(&self, custom: &CustomStyle, text: &str, output: &mut dyn Write) -> Result<bool> {
        custom.validate(self.engine.fonts())?;
        writeln!(output, "{}", custom.preview(self.engine.fonts(), text))?;
        Ok(true)
    }
}

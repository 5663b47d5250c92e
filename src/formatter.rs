use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error as StdError;
use tera::{Context as TeraContext, Tera};

use crate::engine::GeneratedStyle;
use crate::error::*;
use crate::filters::{font, surround};
use crate::fonts::FONTS;

static TERA_VAR_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{\{([^}]+)\}\}").unwrap());

const TEMPLATE_NAME: &str = "style";

/// Renders generated styles through a Tera output pattern.
///
/// The pattern can use the `text`, `category`, `id` and `index` variables
/// together with the `font` and `surround` filters.
pub struct StyleFormatter {
    tera: Tera,
}

impl StyleFormatter {
    /// Compiles the output pattern
    ///
    /// # Errors
    /// `TemplateRenderError` if the pattern is not a valid Tera template
    pub fn new(pattern: &str) -> Result<Self> {
        let mut tera = Tera::default();
        tera.register_filter("font", font::create_font_filter(&FONTS));
        tera.register_filter("surround", surround::create_surround_filter());
        tera.add_raw_template(TEMPLATE_NAME, &Self::pre_process_pattern(pattern))
            .map_err(render_error)?;
        Ok(Self { tera })
    }

    /// Pre-processes the pattern adding a default filter to all variables,
    /// so that unknown variables render as an empty string
    ///
    /// # Arguments
    /// * `pattern` - The output pattern to pre-process
    ///
    /// # Returns
    /// A pre-processed pattern
    fn pre_process_pattern(pattern: &str) -> String {
        TERA_VAR_REGEX
            .replace_all(pattern, |caps: &regex::Captures| {
                let content = caps[1].trim();
                match content.split_once('|') {
                    Some((var, filters)) => format!(
                        "{{{{ {} | default(value='') | {} }}}}",
                        var.trim(),
                        filters.trim()
                    ),
                    None => format!("{{{{ {} | default(value='') }}}}", content),
                }
            })
            .to_string()
    }

    /// Formats a generated style
    ///
    /// # Arguments
    /// * `style` - The generated style to render
    /// * `index` - The 1-based position of the style in the listing
    pub fn format(&self, style: &GeneratedStyle, index: usize) -> Result<String> {
        let mut context = TeraContext::new();
        context.insert("text", &style.text);
        context.insert("category", &style.category.to_string());
        context.insert("id", &style.id);
        context.insert("index", &index);
        self.tera
            .render(TEMPLATE_NAME, &context)
            .map_err(render_error)
    }
}

/// Flattens the Tera error chain into a single message
fn render_error(e: tera::Error) -> Error {
    let mut error_msg = e.to_string();
    let mut current = e.source();
    while let Some(source) = current {
        error_msg.push_str("\nCaused by: ");
        error_msg.push_str(&source.to_string());
        current = source.source();
    }
    Error::TemplateRenderError(error_msg)
}

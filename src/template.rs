//! Whole-string templates of the gamer category.
//!
//! A template is literal decorative text with placeholders:
//! - `{text}` : the styled text
//! - `{TEXT}` : the styled text in upper case
//! - `{sym}`  : a symbol drawn once per rendering from the gamer pool
//!
//! A template holds at most one text placeholder. Templates without any text
//! placeholder are literal and ignore the input; whether they take part in
//! generation is decided when building the `TemplateSet`.

use once_cell::sync::Lazy;
use rand::seq::IndexedRandom;
use rand::Rng;
use regex::Regex;

use crate::debug;
use crate::error::*;
use crate::symbols::SymbolPool;

static PLACEHOLDER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{(text|TEXT|sym)\}").unwrap());

pub const GAMER_TEMPLATES: &[&str] = &[
    "★{TEXT}★࿐ff",
    "༄MR ᭄ {text} ☯࿐",
    "BOss ᭄ {text} ★࿐",
    "☆☬ {TEXT} ☬☆",
    "꧁— {TEXT} —꧂",
    "☯{TEXT}☯࿐",
    "亗AB ♕ {TEXT} ࿐",
    "༄᭄{text}࿐",
    "TN ᭄ {text} ࿐★018 ind",
    "MR ╳ {text} BOss",
    "R O M A N",
    "BS~{text}™",
    "꧁ 👑 {text} 👑 ꧂",
    "༒ ⚔️ {text} ⚔️ ༒",
    "༄ᶦᶰᵈ᭄ {text} ࿐",
    "𓆩 {text} 𓆪",
    "亗 {text} 亗",
    "『 {text} 』",
    "꧁༺ {text} ༻꧂",
    "꧁ ☬ {TEXT} ☬ ꧂",
    "⚔️ {text} ⚔️",
    "🔥 {text} 🔥",
    "{sym} {text} {sym}",
    "༄ᶦᶰᵈ᭄ {text} ࿐",
    "╰‿╯ {text} ╰‿╯",
    "꧁ 𓊈𒆜 {text} 𒆜𓊉 ꧂",
    "꧁— {text} —꧂",
];

static BUILTIN_TEMPLATES: Lazy<TemplateSet> =
    Lazy::new(|| TemplateSet::parse(GAMER_TEMPLATES, false).unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Text,
    UpperText,
    Symbol,
}

/// A parsed template ready to be rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

impl Template {
    /// Parses a template string.
    ///
    /// # Errors
    /// `TemplateParseError` if the template holds more than one text placeholder
    pub fn parse(source: &str) -> Result<Self> {
        let mut segments = Vec::new();
        let mut last = 0;
        let mut text_slots = 0;

        for caps in PLACEHOLDER_REGEX.captures_iter(source) {
            let (Some(whole), Some(kind)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            if whole.start() > last {
                segments.push(Segment::Literal(source[last..whole.start()].to_string()));
            }
            segments.push(match kind.as_str() {
                "text" => Segment::Text,
                "TEXT" => Segment::UpperText,
                _ => Segment::Symbol,
            });
            if matches!(kind.as_str(), "text" | "TEXT") {
                text_slots += 1;
            }
            last = whole.end();
        }
        if last < source.len() {
            segments.push(Segment::Literal(source[last..].to_string()));
        }

        if text_slots > 1 {
            return Err(Error::TemplateParseError {
                template: source.to_string(),
                cause: format!("found {} text placeholders, at most one is allowed", text_slots),
            });
        }

        Ok(Template {
            source: source.to_string(),
            segments,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// A literal template does not depend on the input text
    pub fn is_literal(&self) -> bool {
        !self
            .segments
            .iter()
            .any(|s| matches!(s, Segment::Text | Segment::UpperText))
    }

    pub fn uses_symbol(&self) -> bool {
        self.segments.contains(&Segment::Symbol)
    }

    /// Renders the template with the styled text and the symbol used for every `{sym}`
    pub fn render(&self, styled: &str, symbol: &str) -> String {
        let mut result = String::with_capacity(self.source.len() + styled.len() * 2);
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => result.push_str(text),
                Segment::Text => result.push_str(styled),
                Segment::UpperText => result.push_str(&styled.to_uppercase()),
                Segment::Symbol => result.push_str(symbol),
            }
        }
        result
    }
}

/// The ordered, non-empty list of gamer templates
#[derive(Debug, Clone)]
pub struct TemplateSet {
    templates: Vec<Template>,
}

impl TemplateSet {
    /// Builds the set, dropping literal templates unless `allow_literal` is set.
    ///
    /// # Errors
    /// `EmptyTemplateSet` if no template remains
    pub fn new(templates: Vec<Template>, allow_literal: bool) -> Result<Self> {
        let templates: Vec<Template> = templates
            .into_iter()
            .filter(|t| {
                let keep = allow_literal || !t.is_literal();
                if !keep {
                    debug!("Skipping literal gamer template {:?}", t.source());
                }
                keep
            })
            .collect();

        if templates.is_empty() {
            return Err(Error::EmptyTemplateSet);
        }
        Ok(TemplateSet { templates })
    }

    /// Parses every source and builds the set
    pub fn parse<S: AsRef<str>>(sources: &[S], allow_literal: bool) -> Result<Self> {
        let templates = sources
            .iter()
            .map(|s| Template::parse(s.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Self::new(templates, allow_literal)
    }

    /// The built-in gamer templates, literal ones excluded
    pub fn builtin() -> Self {
        BUILTIN_TEMPLATES.clone()
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Renders one randomly chosen template, drawing a gamer symbol only when the template needs one
    pub fn render_random<R: Rng + ?Sized>(
        &self,
        styled: &str,
        symbols: &SymbolPool,
        rng: &mut R,
    ) -> String {
        // Never empty once constructed
        let Some(template) = self.templates.choose(rng) else {
            return styled.to_string();
        };
        let symbol = if template.uses_symbol() {
            symbols.draw(rng)
        } else {
            ""
        };
        template.render(styled, symbol)
    }
}

impl Default for TemplateSet {
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
    fn test_parse_and_render() {
        let template = Template::parse("꧁ {text} ꧂").unwrap();
        assert!(!template.is_literal());
        assert!(!template.uses_symbol());
        assert_eq!(template.render("Zed", "★"), "꧁ Zed ꧂");
    }

    #[test]
    fn test_upper_placeholder() {
        let template = Template::parse("☆☬ {TEXT} ☬☆").unwrap();
        assert_eq!(template.render("Zed", ""), "☆☬ ZED ☬☆");
        // Decorative letters without case mapping stay as they are
        assert_eq!(template.render("𝐙𝐞𝐝", ""), "☆☬ 𝐙𝐞𝐝 ☬☆");
    }

    #[test]
    fn test_symbol_is_reused() {
        let template = Template::parse("{sym} {text} {sym}").unwrap();
        assert!(template.uses_symbol());
        assert_eq!(template.render("Zed", "亗"), "亗 Zed 亗");
    }

    #[test]
    fn test_literal_template() {
        let template = Template::parse("R O M A N").unwrap();
        assert!(template.is_literal());
        assert_eq!(template.render("Zed", "★"), "R O M A N");
    }

    #[test]
    fn test_unknown_braces_are_literal() {
        let template = Template::parse("{name} {text} {}").unwrap();
        assert_eq!(template.render("Zed", ""), "{name} Zed {}");
    }

    #[test]
    fn test_two_text_placeholders_fail() {
        let result = Template::parse("{text} and {TEXT}");
        assert!(matches!(result, Err(Error::TemplateParseError { .. })));
    }

    #[test]
    fn test_literal_templates_are_configurable() {
        let sources = ["R O M A N", "🔥 {text} 🔥"];
        let without = TemplateSet::parse(&sources, false).unwrap();
        assert_eq!(without.len(), 1);
        let with = TemplateSet::parse(&sources, true).unwrap();
        assert_eq!(with.len(), 2);
    }

    #[test]
    fn test_empty_set_fails() {
        let empty: [&str; 0] = [];
        assert!(matches!(
            TemplateSet::parse(&empty, true),
            Err(Error::EmptyTemplateSet)
        ));
        assert!(matches!(
            TemplateSet::parse(&["R O M A N"], false),
            Err(Error::EmptyTemplateSet)
        ));
    }

    #[test]
    fn test_builtin_templates() {
        for source in GAMER_TEMPLATES {
            assert!(Template::parse(source).is_ok(), "template {:?}", source);
        }
        let set = TemplateSet::builtin();
        assert_eq!(set.len(), GAMER_TEMPLATES.len() - 1);
        assert!(set.templates().iter().all(|t| !t.is_literal()));
    }

    #[test]
    fn test_builtin_keeps_every_parameterized_template() {
        let set = TemplateSet::builtin();
        let sources: Vec<&str> = set.templates().iter().map(Template::source).collect();
        let expected: Vec<&str> = GAMER_TEMPLATES
            .iter()
            .copied()
            .filter(|s| *s != "R O M A N")
            .collect();
        assert_eq!(sources, expected);
        // Repeated entries keep their extra weight in the draw
        assert_eq!(sources.iter().filter(|s| **s == "༄ᶦᶰᵈ᭄ {text} ࿐").count(), 2);
        assert_eq!(sources[0], "★{TEXT}★࿐ff");
    }

    #[test]
    fn test_render_random_contains_text() {
        let set = TemplateSet::builtin();
        let symbols = SymbolPool::new("gamer", vec!["★"]).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..300 {
            let rendered = set.render_random("zed", &symbols, &mut rng);
            assert!(rendered.contains("zed") || rendered.contains("ZED"));
        }
    }
}

//! Custom mode: one font map plus a prefix and a suffix symbol chosen by the user.

use crate::config::MainConfig;
use crate::error::*;
use crate::fonts::FontRegistry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomStyle {
    pub font: Option<String>,
    pub prefix: String,
    pub suffix: String,
}

impl CustomStyle {
    pub fn new(font: Option<String>, prefix: &str, suffix: &str) -> Self {
        CustomStyle {
            font,
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
        }
    }

    /// The configured prefix and suffix without any font
    pub fn from_config(config: &MainConfig) -> Self {
        Self::new(
            None,
            &config.defaults.custom_prefix,
            &config.defaults.custom_suffix,
        )
    }

    /// Checks the selected font exists in the registry
    pub fn validate(&self, fonts: &FontRegistry) -> Result<()> {
        match &self.font {
            Some(name) if fonts.get(name).is_none() => Err(Error::UnknownFont(name.clone())),
            _ => Ok(()),
        }
    }

    /// Renders `prefix + transformed text + suffix`. The text is used as given.
    pub fn preview(&self, fonts: &FontRegistry, text: &str) -> String {
        format!(
            "{}{}{}",
            self.prefix,
            fonts.transform(text, self.font.as_deref()),
            self.suffix
        )
    }
}

impl Default for CustomStyle {
    fn default() -> Self {
        Self::from_config(&MainConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts::FONTS;

    #[test]
    fn test_default_preview() {
        let custom = CustomStyle::default();
        assert_eq!(custom.preview(&FONTS, "Your Name"), "🏹Your Name🏹");
    }

    #[test]
    fn test_font_preview() {
        let custom = CustomStyle::new(Some("fullwidth".to_string()), "꧁", "꧂");
        assert_eq!(custom.preview(&FONTS, "Zed"), "꧁Ｚｅｄ꧂");
    }

    #[test]
    fn test_text_is_not_trimmed() {
        let custom = CustomStyle::new(None, "<", ">");
        assert_eq!(custom.preview(&FONTS, " Zed "), "< Zed >");
    }

    #[test]
    fn test_validate_font() {
        assert!(CustomStyle::new(Some("bold".to_string()), "", "")
            .validate(&FONTS)
            .is_ok());
        assert!(CustomStyle::new(None, "", "").validate(&FONTS).is_ok());
        let result = CustomStyle::new(Some("nope".to_string()), "", "").validate(&FONTS);
        assert!(matches!(result, Err(Error::UnknownFont(name)) if name == "nope"));
    }
}

//! Theme tokens, JSON loading, and the context provider that installs the stylesheet.

use leptos::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::stylesheet;

/// Errors raised while loading a theme document.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// The document is not valid theme JSON.
    #[error("theme parse failed: {0}")]
    Parse(#[from] serde_json::Error),
    /// A colour token holds something that is not a CSS colour.
    #[error("theme color `{name}` has invalid value `{value}`")]
    InvalidColor {
        /// Token name, as spelled in the document.
        name: &'static str,
        /// Rejected value.
        value: String,
    },
}

/// Colour tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct ThemeColors {
    pub primary: String,
    pub primary_medium: String,
    pub primary_lightest: String,
    pub secondary: String,
    pub secondary_medium: String,
    pub secondary_lightest: String,
    pub white: String,
    pub black: String,
    pub grey: String,
    pub dark_grey: String,
    pub medium_grey: String,
    pub light_grey: String,
    pub error: String,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            primary: "#0b6bcb".to_string(),
            primary_medium: "#0a5aab".to_string(),
            primary_lightest: "#e7f1fb".to_string(),
            secondary: "#f28c28".to_string(),
            secondary_medium: "#d97818".to_string(),
            secondary_lightest: "#fdf1e5".to_string(),
            white: "#ffffff".to_string(),
            black: "#1b1b1f".to_string(),
            grey: "#8a8f98".to_string(),
            dark_grey: "#4a4e57".to_string(),
            medium_grey: "#c9ccd2".to_string(),
            light_grey: "#f1f2f4".to_string(),
            error: "#d93025".to_string(),
        }
    }
}

impl ThemeColors {
    fn entries(&self) -> [(&'static str, &str); 13] {
        [
            ("primary", &self.primary),
            ("primaryMedium", &self.primary_medium),
            ("primaryLightest", &self.primary_lightest),
            ("secondary", &self.secondary),
            ("secondaryMedium", &self.secondary_medium),
            ("secondaryLightest", &self.secondary_lightest),
            ("white", &self.white),
            ("black", &self.black),
            ("grey", &self.grey),
            ("darkGrey", &self.dark_grey),
            ("mediumGrey", &self.medium_grey),
            ("lightGrey", &self.light_grey),
            ("error", &self.error),
        ]
    }
}

/// Font-size tokens, as CSS lengths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct FontSizes {
    pub small: String,
    pub medium: String,
    pub large: String,
}

impl Default for FontSizes {
    fn default() -> Self {
        Self {
            small: "12px".to_string(),
            medium: "14px".to_string(),
            large: "18px".to_string(),
        }
    }
}

/// Numeric font-weight tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct FontWeights {
    pub regular: u16,
    pub semi_bold: u16,
    pub bold: u16,
}

impl Default for FontWeights {
    fn default() -> Self {
        Self {
            regular: 400,
            semi_bold: 600,
            bold: 700,
        }
    }
}

/// Corner radii in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct Radii {
    pub button: u16,
    pub field: u16,
}

impl Default for Radii {
    fn default() -> Self {
        Self { button: 5, field: 4 }
    }
}

/// Complete design-token set consumed by every component.
///
/// Every section is optional in JSON; missing tokens keep their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Theme {
    /// Colour tokens.
    pub colors: ThemeColors,
    /// Font sizes.
    pub font_sizes: FontSizes,
    /// Font weights.
    pub font_weights: FontWeights,
    /// Corner radii.
    pub radii: Radii,
}

impl Theme {
    /// Parses and validates a theme document.
    pub fn from_json(raw: &str) -> Result<Self, ThemeError> {
        let theme: Theme = serde_json::from_str(raw)?;
        theme.validate()?;
        Ok(theme)
    }

    /// Like [`Theme::from_json`], falling back to the default theme with a warning.
    pub fn from_json_or_default(raw: &str) -> Self {
        match Self::from_json(raw) {
            Ok(theme) => theme,
            Err(err) => {
                logging::warn!("{err}; using default theme");
                Self::default()
            }
        }
    }

    /// Checks that every colour token is a plausible CSS colour.
    pub fn validate(&self) -> Result<(), ThemeError> {
        for (name, value) in self.colors.entries() {
            if !is_css_color(value) {
                return Err(ThemeError::InvalidColor {
                    name,
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }
}

fn is_css_color(value: &str) -> bool {
    let value = value.trim();
    if let Some(hex) = value.strip_prefix('#') {
        return matches!(hex.len(), 3 | 4 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit());
    }
    for prefix in ["rgb(", "rgba(", "hsl(", "hsla("] {
        if let Some(body) = value.strip_prefix(prefix) {
            return body.ends_with(')') && body.len() > 1;
        }
    }
    !value.is_empty() && value.chars().all(|c| c.is_ascii_alphabetic())
}

/// Theme from context, or the default theme outside a [`ThemeProvider`].
pub fn use_theme() -> Theme {
    use_context::<Theme>().unwrap_or_default()
}

#[component]
/// Provides `theme` to descendants and mounts the generated stylesheet.
pub fn ThemeProvider(
    /// Theme to install. Defaults to [`Theme::default`].
    #[prop(optional)]
    theme: Option<Theme>,
    children: Children,
) -> impl IntoView {
    let theme = theme.unwrap_or_default();
    let css = stylesheet::render(&theme);
    provide_context(theme);
    view! {
        <style data-ui-kind="theme-stylesheet">{css}</style>
        {children()}
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn partial_document_keeps_defaults_for_missing_tokens() {
        let theme = Theme::from_json(r##"{ "colors": { "primary": "#112233" } }"##)
            .expect("partial theme");

        assert_eq!(theme.colors.primary, "#112233");
        assert_eq!(theme.colors.error, ThemeColors::default().error);
        assert_eq!(theme.font_weights, FontWeights::default());
    }

    #[test]
    fn camel_case_keys_map_to_tokens() {
        let theme = Theme::from_json(
            r#"{ "colors": { "darkGrey": "rgb(10, 10, 10)" }, "fontWeights": { "semiBold": 500 } }"#,
        )
        .expect("camel case theme");

        assert_eq!(theme.colors.dark_grey, "rgb(10, 10, 10)");
        assert_eq!(theme.font_weights.semi_bold, 500);
    }

    #[test]
    fn invalid_color_is_rejected_with_token_name() {
        let err = Theme::from_json(r##"{ "colors": { "error": "#12345z" } }"##)
            .expect_err("bad colour");

        match err {
            ThemeError::InvalidColor { name, value } => {
                assert_eq!(name, "error");
                assert_eq!(value, "#12345z");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            Theme::from_json("{ not json"),
            Err(ThemeError::Parse(_))
        ));
    }

    #[test]
    fn fallback_loader_returns_default_on_error() {
        assert_eq!(Theme::from_json_or_default("42"), Theme::default());
    }

    #[test]
    fn keyword_and_functional_colors_are_accepted() {
        assert!(is_css_color("transparent"));
        assert!(is_css_color("hsla(120, 50%, 50%, 0.3)"));
        assert!(!is_css_color("12px"));
        assert!(!is_css_color(""));
    }

    #[test]
    fn default_theme_validates() {
        Theme::default().validate().expect("default theme is valid");
    }
}

//! Ordered CSS rule-sets shared by inline styles and the generated stylesheet.

use std::fmt::Write as _;

/// An ordered list of CSS declarations with an optional hover block.
///
/// Setting a property that is already present replaces its value in place, so
/// the last writer wins the same way later declarations win in a stylesheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleRules {
    declarations: Vec<(&'static str, String)>,
    hover: Vec<(&'static str, String)>,
}

impl StyleRules {
    /// Empty rule-set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`StyleRules::set`].
    pub fn with(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }

    /// Builder form of [`StyleRules::set_hover`].
    pub fn with_hover(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.set_hover(property, value);
        self
    }

    /// Sets `property` in the base block.
    pub fn set(&mut self, property: &'static str, value: impl Into<String>) {
        upsert(&mut self.declarations, property, value.into());
    }

    /// Sets `property` in the hover block.
    pub fn set_hover(&mut self, property: &'static str, value: impl Into<String>) {
        upsert(&mut self.hover, property, value.into());
    }

    /// Applies every declaration of `other` on top of `self`.
    pub fn extend(&mut self, other: StyleRules) {
        for (property, value) in other.declarations {
            self.set(property, value);
        }
        for (property, value) in other.hover {
            self.set_hover(property, value);
        }
    }

    /// Value of `property` in the base block.
    pub fn get(&self, property: &str) -> Option<&str> {
        lookup(&self.declarations, property)
    }

    /// Value of `property` in the hover block.
    pub fn hover(&self, property: &str) -> Option<&str> {
        lookup(&self.hover, property)
    }

    /// `true` when neither block holds a declaration.
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty() && self.hover.is_empty()
    }

    /// Base declarations rendered for a `style=` attribute. Hover rules are dropped.
    pub fn to_inline(&self) -> String {
        let mut out = String::new();
        for (property, value) in &self.declarations {
            let _ = write!(out, "{property}: {value}; ");
        }
        out.truncate(out.trim_end().len());
        out
    }

    /// Stylesheet block for `selector`, followed by its `:hover` block when present.
    pub fn to_block(&self, selector: &str) -> String {
        let mut out = String::new();
        if !self.declarations.is_empty() {
            push_block(&mut out, selector, &self.declarations);
        }
        if !self.hover.is_empty() {
            push_block(&mut out, &format!("{selector}:hover"), &self.hover);
        }
        out
    }
}

fn upsert(list: &mut Vec<(&'static str, String)>, property: &'static str, value: String) {
    match list.iter_mut().find(|(existing, _)| *existing == property) {
        Some(entry) => entry.1 = value,
        None => list.push((property, value)),
    }
}

fn lookup<'a>(list: &'a [(&'static str, String)], property: &str) -> Option<&'a str> {
    list.iter()
        .find(|(existing, _)| *existing == property)
        .map(|(_, value)| value.as_str())
}

fn push_block(out: &mut String, selector: &str, declarations: &[(&'static str, String)]) {
    let _ = writeln!(out, "{selector} {{");
    for (property, value) in declarations {
        let _ = writeln!(out, "  {property}: {value};");
    }
    out.push_str("}\n");
}

/// Caller-facing spacing and sizing props, expressed in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Spacing {
    /// Left margin.
    pub margin_left: Option<u16>,
    /// Right margin.
    pub margin_right: Option<u16>,
    /// Fixed width.
    pub width: Option<u16>,
    /// Maximum width.
    pub max_width: Option<u16>,
}

impl Spacing {
    /// Left margin only.
    pub fn left(value: u16) -> Self {
        Self {
            margin_left: Some(value),
            ..Self::default()
        }
    }

    /// Right margin only.
    pub fn right(value: u16) -> Self {
        Self {
            margin_right: Some(value),
            ..Self::default()
        }
    }

    /// Spacing as a rule-set; unset props emit nothing.
    pub fn rules(self) -> StyleRules {
        let mut rules = StyleRules::new();
        let props = [
            ("margin-left", self.margin_left),
            ("margin-right", self.margin_right),
            ("width", self.width),
            ("max-width", self.max_width),
        ];
        for (property, value) in props {
            if let Some(value) = value {
                rules.set(property, px(value));
            }
        }
        rules
    }
}

pub(crate) fn px(value: u16) -> String {
    format!("{value}px")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn later_declaration_replaces_earlier_value_in_place() {
        let rules = StyleRules::new()
            .with("border", "none")
            .with("color", "black")
            .with("border", "1px solid red");

        assert_eq!(rules.to_inline(), "border: 1px solid red; color: black;");
    }

    #[test]
    fn block_output_includes_hover_section_only_when_present() {
        let plain = StyleRules::new().with("padding", "0");
        assert_eq!(plain.to_block(".a"), ".a {\n  padding: 0;\n}\n");

        let hovered = plain.clone().with_hover("text-decoration", "underline");
        assert_eq!(
            hovered.to_block(".a"),
            ".a {\n  padding: 0;\n}\n.a:hover {\n  text-decoration: underline;\n}\n"
        );
    }

    #[test]
    fn inline_output_drops_hover_rules() {
        let rules = StyleRules::new()
            .with("color", "red")
            .with_hover("color", "blue");
        assert_eq!(rules.to_inline(), "color: red;");
        assert_eq!(rules.hover("color"), Some("blue"));
    }

    #[test]
    fn extend_overlays_other_rules() {
        let mut base = StyleRules::new().with("padding", "10px 20px").with("border", "none");
        base.extend(StyleRules::new().with("padding", "0").with_hover("color", "red"));

        assert_eq!(base.get("padding"), Some("0"));
        assert_eq!(base.get("border"), Some("none"));
        assert_eq!(base.hover("color"), Some("red"));
    }

    #[test]
    fn spacing_emits_only_supplied_props() {
        let spacing = Spacing {
            margin_right: Some(5),
            max_width: Some(320),
            ..Spacing::default()
        };
        assert_eq!(spacing.rules().to_inline(), "margin-right: 5px; max-width: 320px;");
        assert!(Spacing::default().rules().is_empty());
    }
}

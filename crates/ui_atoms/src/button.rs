//! Pressable control with variant/palette styling and optional icon decoration.

use leptos::ev::MouseEvent;
use leptos::*;

use crate::primitives::{bool_token, inline_style, palette_token, Text, TextSize};
use crate::style::px;
use crate::{Icon, Spacing, StyleRules, Theme};

/// Horizontal gap between a button icon and its label, in pixels.
pub const ICON_GAP_PX: u16 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Named style rule-sets for [`Button`].
pub enum ButtonVariant {
    /// Borderless link-like button.
    Text,
    /// Filled button.
    Contained,
    /// Bordered button on a transparent background.
    Outlined,
    /// White button with a grey border. Ignores the palette.
    Neutral,
    /// 56px circular floating action button.
    Fab,
    /// Pill-shaped floating action button with a label.
    FabWithText,
}

impl Default for ButtonVariant {
    fn default() -> Self {
        Self::Text
    }
}

impl From<&str> for ButtonVariant {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl ButtonVariant {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Text,
        Self::Contained,
        Self::Outlined,
        Self::Neutral,
        Self::Fab,
        Self::FabWithText,
    ];

    /// Resolves a variant name. Unrecognized names resolve to [`ButtonVariant::Text`].
    pub fn from_name(name: &str) -> Self {
        match name.trim() {
            "text" => Self::Text,
            "contained" => Self::Contained,
            "outlined" => Self::Outlined,
            "neutral" => Self::Neutral,
            "fab" => Self::Fab,
            "fabWithText" | "fab-with-text" => Self::FabWithText,
            other => {
                logging::debug_warn!("unknown button variant `{other}`, using `text`");
                Self::Text
            }
        }
    }

    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Contained => "contained",
            Self::Outlined => "outlined",
            Self::Neutral => "neutral",
            Self::Fab => "fab",
            Self::FabWithText => "fab-with-text",
        }
    }

    /// Whether the palette changes this variant's rules.
    pub fn uses_palette(self) -> bool {
        !matches!(self, Self::Neutral)
    }

    /// Rules contributed by the variant and palette, applied on top of [`base_rules`].
    pub fn rules(self, palette: Option<Palette>, theme: &Theme) -> StyleRules {
        let colors = &theme.colors;
        let accent = palette.filter(|_| self.uses_palette()).map(|palette| palette.accent(theme));

        match self {
            Self::Text => {
                let mut rules = StyleRules::new()
                    .with("border", "none")
                    .with("background", "none")
                    .with("color", colors.dark_grey.as_str())
                    .with("padding", "0")
                    .with_hover("text-decoration", "underline");
                if let Some(accent) = accent {
                    rules.set("color", accent.strong);
                }
                rules
            }
            Self::Contained => {
                let mut rules = StyleRules::new()
                    .with("border", "none")
                    .with("font-weight", theme.font_weights.semi_bold.to_string());
                if let Some(accent) = accent {
                    rules.set("color", colors.white.as_str());
                    rules.set("background", accent.strong);
                    rules.set_hover("background", accent.medium);
                }
                rules
            }
            Self::Outlined => {
                let mut rules = StyleRules::new();
                if let Some(accent) = accent {
                    rules.set("border", format!("1px solid {}", accent.strong));
                    rules.set("color", accent.strong);
                    rules.set("background", "none");
                    rules.set_hover("background", accent.lightest);
                }
                rules
            }
            Self::Neutral => StyleRules::new()
                .with("background", colors.white.as_str())
                .with("color", colors.black.as_str())
                .with("border", format!("1px solid {}", colors.medium_grey)),
            Self::Fab => {
                let mut rules = StyleRules::new()
                    .with("border-radius", "28px")
                    .with("border", "none")
                    .with("height", "56px")
                    .with("max-height", "none")
                    .with("width", "56px")
                    .with("color", colors.white.as_str());
                if let Some(accent) = accent {
                    rules.set("background", accent.strong);
                }
                rules
            }
            Self::FabWithText => {
                let mut rules = StyleRules::new()
                    .with("border-radius", "21px")
                    .with("border", "none")
                    .with("padding", "14px 18px")
                    .with("color", colors.white.as_str());
                if let Some(accent) = accent {
                    rules.set("background", accent.strong);
                }
                rules
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Accent colour family selected within a variant.
pub enum Palette {
    /// Brand accent.
    Primary,
    /// Secondary accent.
    Secondary,
}

impl Palette {
    /// Every palette.
    pub const ALL: [Self; 2] = [Self::Primary, Self::Secondary];

    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
        }
    }

    fn accent(self, theme: &Theme) -> Accent<'_> {
        let colors = &theme.colors;
        match self {
            Self::Primary => Accent {
                strong: &colors.primary,
                medium: &colors.primary_medium,
                lightest: &colors.primary_lightest,
            },
            Self::Secondary => Accent {
                strong: &colors.secondary,
                medium: &colors.secondary_medium,
                lightest: &colors.secondary_lightest,
            },
        }
    }

    pub(crate) fn color(self, theme: &Theme) -> &str {
        self.accent(theme).strong
    }
}

struct Accent<'a> {
    strong: &'a str,
    medium: &'a str,
    lightest: &'a str,
}

/// Rules shared by every variant.
pub fn base_rules(theme: &Theme) -> StyleRules {
    StyleRules::new()
        .with("border-radius", px(theme.radii.button))
        .with("display", "flex")
        .with("align-items", "center")
        .with("justify-content", "center")
        .with("padding", "10px 20px")
        .with("max-height", "42px")
        .with("cursor", "pointer")
}

/// Base rules with the variant/palette rules layered on top.
pub fn resolve_rules(variant: ButtonVariant, palette: Option<Palette>, theme: &Theme) -> StyleRules {
    let mut rules = base_rules(theme);
    rules.extend(variant.rules(palette, theme));
    rules
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Interior arrangement of a [`Button`].
pub enum ButtonLayout {
    /// Leading icon alone, no text element.
    IconOnly,
    /// Icon, gap, text.
    LeadingIcon,
    /// Text, gap, icon.
    TrailingIcon,
    /// Text alone. May be empty.
    TextOnly,
}

impl ButtonLayout {
    /// Picks the layout; a leading icon wins over a trailing one.
    pub fn select(has_prefix: bool, has_suffix: bool, has_children: bool) -> Self {
        match (has_prefix, has_suffix, has_children) {
            (true, _, false) => Self::IconOnly,
            (true, _, true) => Self::LeadingIcon,
            (false, true, _) => Self::TrailingIcon,
            (false, false, _) => Self::TextOnly,
        }
    }

    /// Whether a text element is mounted.
    pub fn has_text(self) -> bool {
        !matches!(self, Self::IconOnly)
    }

    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::IconOnly => "icon-only",
            Self::LeadingIcon => "leading-icon",
            Self::TrailingIcon => "trailing-icon",
            Self::TextOnly => "text-only",
        }
    }
}

#[component]
/// Pressable control. Styling comes from the stylesheet installed by [`crate::ThemeProvider`],
/// keyed on the `data-ui-variant` and `data-ui-palette` attributes.
pub fn Button(
    #[prop(into, default = ButtonVariant::Text)] variant: ButtonVariant,
    #[prop(optional)] palette: Option<Palette>,
    #[prop(optional, into)] prefix: Option<ViewFn>,
    #[prop(optional, into)] sufix: Option<ViewFn>,
    #[prop(optional)] spacing: Spacing,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let layout = ButtonLayout::select(prefix.is_some(), sufix.is_some(), children.is_some());
    let (leading, trailing) = match layout {
        ButtonLayout::IconOnly | ButtonLayout::LeadingIcon => (prefix, None),
        ButtonLayout::TrailingIcon => (None, sufix),
        ButtonLayout::TextOnly => (None, None),
    };
    let leading_spacing = if layout.has_text() {
        Spacing::right(ICON_GAP_PX)
    } else {
        Spacing::default()
    };

    let leading = leading.map(|icon| {
        view! { <Icon cursor="pointer" spacing=leading_spacing>{icon.run()}</Icon> }
    });
    let label = layout.has_text().then(|| {
        view! {
            <Text cursor="pointer" size=TextSize::Medium>
                {children.map(|children| children())}
            </Text>
        }
    });
    let trailing = trailing.map(|icon| {
        view! { <Icon cursor="pointer" spacing=Spacing::left(ICON_GAP_PX)>{icon.run()}</Icon> }
    });

    view! {
        <button
            type="button"
            class="ui-button"
            style=inline_style(spacing, None)
            aria-label=move || {
                let label = aria_label.get();
                (!label.is_empty()).then_some(label)
            }
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-variant=variant.token()
            data-ui-palette=palette_token(palette)
            data-ui-layout=layout.token()
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {leading}
            {label}
            {trailing}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::{opening_tag, render};
    use crate::{Glyph, IconGlyph};

    #[test]
    fn prefix_without_children_is_icon_only() {
        let layout = ButtonLayout::select(true, false, false);
        assert_eq!(layout, ButtonLayout::IconOnly);
        assert!(!layout.has_text());
    }

    #[test]
    fn layout_selection_covers_every_combination() {
        let cases = [
            ((false, false, false), ButtonLayout::TextOnly),
            ((false, false, true), ButtonLayout::TextOnly),
            ((false, true, false), ButtonLayout::TrailingIcon),
            ((false, true, true), ButtonLayout::TrailingIcon),
            ((true, false, false), ButtonLayout::IconOnly),
            ((true, false, true), ButtonLayout::LeadingIcon),
            ((true, true, false), ButtonLayout::IconOnly),
            ((true, true, true), ButtonLayout::LeadingIcon),
        ];
        for ((prefix, suffix, children), expected) in cases {
            assert_eq!(
                ButtonLayout::select(prefix, suffix, children),
                expected,
                "prefix={prefix} suffix={suffix} children={children}"
            );
        }
    }

    #[test]
    fn outlined_primary_is_bordered_in_primary_color() {
        let theme = Theme::default();
        let rules = resolve_rules(ButtonVariant::Outlined, Some(Palette::Primary), &theme);

        assert_eq!(
            rules.get("border"),
            Some(format!("1px solid {}", theme.colors.primary).as_str())
        );
        assert_eq!(rules.get("color"), Some(theme.colors.primary.as_str()));
        assert_eq!(rules.get("background"), Some("none"));
        assert_eq!(rules.hover("background"), Some(theme.colors.primary_lightest.as_str()));
    }

    #[test]
    fn unknown_variant_name_falls_back_to_text_rules() {
        let theme = Theme::default();
        let bogus = ButtonVariant::from_name("bogus");

        assert_eq!(bogus, ButtonVariant::Text);
        assert_eq!(
            resolve_rules(bogus, Some(Palette::Primary), &theme),
            resolve_rules(ButtonVariant::Text, Some(Palette::Primary), &theme)
        );
        assert_eq!(ButtonVariant::from(""), ButtonVariant::Text);
    }

    #[test]
    fn every_token_round_trips_through_from_name() {
        for variant in ButtonVariant::ALL {
            assert_eq!(ButtonVariant::from_name(variant.token()), variant);
        }
        assert_eq!(ButtonVariant::from_name("fabWithText"), ButtonVariant::FabWithText);
    }

    #[test]
    fn text_variant_takes_palette_color_and_underlines_on_hover() {
        let theme = Theme::default();
        let plain = ButtonVariant::Text.rules(None, &theme);
        let secondary = ButtonVariant::Text.rules(Some(Palette::Secondary), &theme);

        assert_eq!(plain.get("color"), Some(theme.colors.dark_grey.as_str()));
        assert_eq!(secondary.get("color"), Some(theme.colors.secondary.as_str()));
        assert_eq!(secondary.hover("text-decoration"), Some("underline"));
        assert_eq!(resolve_rules(ButtonVariant::Text, None, &theme).get("padding"), Some("0"));
    }

    #[test]
    fn contained_primary_fills_with_accent_and_darkens_on_hover() {
        let theme = Theme::default();
        let rules = ButtonVariant::Contained.rules(Some(Palette::Primary), &theme);

        assert_eq!(rules.get("background"), Some(theme.colors.primary.as_str()));
        assert_eq!(rules.get("color"), Some(theme.colors.white.as_str()));
        assert_eq!(rules.get("font-weight"), Some("600"));
        assert_eq!(rules.hover("background"), Some(theme.colors.primary_medium.as_str()));
    }

    #[test]
    fn neutral_ignores_palette() {
        let theme = Theme::default();
        assert!(!ButtonVariant::Neutral.uses_palette());
        assert_eq!(
            ButtonVariant::Neutral.rules(Some(Palette::Primary), &theme),
            ButtonVariant::Neutral.rules(None, &theme)
        );
    }

    #[test]
    fn fab_overrides_base_geometry() {
        let theme = Theme::default();
        let fab = resolve_rules(ButtonVariant::Fab, Some(Palette::Secondary), &theme);

        assert_eq!(fab.get("border-radius"), Some("28px"));
        assert_eq!(fab.get("max-height"), Some("none"));
        assert_eq!(fab.get("width"), Some("56px"));
        assert_eq!(fab.get("background"), Some(theme.colors.secondary.as_str()));

        let fab_text = resolve_rules(ButtonVariant::FabWithText, None, &theme);
        assert_eq!(fab_text.get("padding"), Some("14px 18px"));
        assert_eq!(fab_text.get("background"), None);
    }

    #[test]
    fn outlined_without_palette_keeps_only_base_rules() {
        let theme = Theme::default();
        assert!(ButtonVariant::Outlined.rules(None, &theme).is_empty());
        assert_eq!(
            resolve_rules(ButtonVariant::Outlined, None, &theme),
            base_rules(&theme)
        );
    }

    #[test]
    fn rendered_icon_only_button_has_no_text_element() {
        let html = render(|| {
            view! {
                <Button aria_label="Open store" prefix=|| view! { <Glyph glyph=IconGlyph::Store /> } />
            }
        });

        let button = opening_tag(&html, "data-ui-kind=\"button\"").expect("button tag");
        assert!(button.contains("data-ui-layout=\"icon-only\""), "{button}");
        assert!(html.contains("data-ui-kind=\"icon\""), "{html}");
        assert!(html.contains("data-ui-glyph=\"store\""), "{html}");
        assert!(!html.contains("data-ui-kind=\"text\""), "{html}");
    }

    #[test]
    fn rendered_leading_icon_button_keeps_its_label() {
        let html = render(|| {
            view! {
                <Button prefix=|| view! { <Glyph glyph=IconGlyph::Store /> }>"Shop"</Button>
            }
        });

        let button = opening_tag(&html, "data-ui-kind=\"button\"").expect("button tag");
        assert!(button.contains("data-ui-layout=\"leading-icon\""), "{button}");
        let icon_at = html.find("data-ui-kind=\"icon\"").expect("icon element");
        let text_at = html.find("data-ui-kind=\"text\"").expect("text element");
        assert!(icon_at < text_at, "{html}");
        assert!(html.contains("Shop"));
    }

    #[test]
    fn rendered_trailing_icon_follows_the_label() {
        let html = render(|| {
            view! {
                <Button sufix=|| view! { <Glyph glyph=IconGlyph::Visibility /> }>"Preview"</Button>
            }
        });

        let text_at = html.find("data-ui-kind=\"text\"").expect("text element");
        let icon_at = html.find("data-ui-kind=\"icon\"").expect("icon element");
        assert!(text_at < icon_at, "{html}");
    }

    #[test]
    fn rendered_variant_and_palette_attributes() {
        let html = render(|| {
            view! { <Button variant="outlined" palette=Palette::Primary>"Save"</Button> }
        });
        let button = opening_tag(&html, "data-ui-kind=\"button\"").expect("button tag");
        assert!(button.contains("data-ui-variant=\"outlined\""), "{button}");
        assert!(button.contains("data-ui-palette=\"primary\""), "{button}");
        assert!(button.contains("data-ui-layout=\"text-only\""), "{button}");
    }

    #[test]
    fn rendered_unknown_variant_uses_text_token() {
        let html = render(|| view! { <Button variant="bogus">"Odd"</Button> });
        let button = opening_tag(&html, "data-ui-kind=\"button\"").expect("button tag");
        assert!(button.contains("data-ui-variant=\"text\""), "{button}");
    }
}

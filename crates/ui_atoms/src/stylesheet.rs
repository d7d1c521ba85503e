//! Stylesheet generation from a [`Theme`].
//!
//! Components only emit `data-ui-*` attributes; every visual rule lives in the
//! sheet produced here and mounted by [`crate::ThemeProvider`].

use crate::button::resolve_rules;
use crate::input::{container_rules, plain_input_rules};
use crate::primitives::{palette_token, TextSize};
use crate::style::px;
use crate::{BorderTone, ButtonVariant, DisplayMode, Palette, StyleRules, Theme};

/// Full stylesheet for every component state.
pub fn render(theme: &Theme) -> String {
    let mut css = String::new();
    push_buttons(&mut css, theme);
    push_inputs(&mut css, theme);
    push_text(&mut css, theme);
    push_icons(&mut css, theme);
    css
}

/// Selector for a button with the given variant and palette.
pub fn button_selector(variant: ButtonVariant, palette: Option<Palette>) -> String {
    format!(
        "[data-ui-kind=\"button\"][data-ui-variant=\"{}\"][data-ui-palette=\"{}\"]",
        variant.token(),
        palette_token(palette)
    )
}

fn push_buttons(css: &mut String, theme: &Theme) {
    let palettes = [None, Some(Palette::Primary), Some(Palette::Secondary)];
    for variant in ButtonVariant::ALL {
        for palette in palettes {
            let rules = resolve_rules(variant, palette, theme);
            css.push_str(&rules.to_block(&button_selector(variant, palette)));
        }
    }
    css.push_str(
        &StyleRules::new()
            .with("cursor", "not-allowed")
            .with("opacity", "0.6")
            .to_block("[data-ui-kind=\"button\"][data-ui-disabled=\"true\"]"),
    );
}

fn push_inputs(css: &mut String, theme: &Theme) {
    let colors = &theme.colors;

    for tone in BorderTone::ALL {
        for disabled in [false, true] {
            let selector = format!(
                "[data-ui-kind=\"input-container\"][data-ui-state=\"{}\"][data-ui-disabled=\"{disabled}\"]",
                tone.token()
            );
            css.push_str(&container_rules(tone, disabled, theme).to_block(&selector));
        }
    }
    css.push_str(
        &StyleRules::new()
            .with("color", colors.primary.as_str())
            .to_block("[data-ui-kind=\"input-container\"][data-ui-state=\"focused\"] svg"),
    );

    for mode in DisplayMode::ALL.into_iter().filter(|mode| mode.is_boxed()) {
        let mut rules = StyleRules::new().with("border", "none").with("flex", "1");
        if mode == DisplayMode::Prefixed {
            rules.set("margin-left", px(16));
        }
        let selector = format!("[data-ui-kind=\"input\"][data-ui-slot=\"{}\"]", mode.token());
        css.push_str(&rules.to_block(&selector));
    }

    let plain = format!(
        "[data-ui-kind=\"input\"][data-ui-slot=\"{}\"]",
        DisplayMode::Plain.token()
    );
    css.push_str(&plain_input_rules(false, theme).to_block(&plain));
    css.push_str(
        &StyleRules::new()
            .with("border-color", colors.primary.as_str())
            .to_block(&format!("{plain}:focus")),
    );
    css.push_str(
        &plain_input_rules(true, theme).to_block(&format!("{plain}[data-ui-error=\"true\"]")),
    );
    css.push_str(
        &StyleRules::new()
            .with("background", colors.light_grey.as_str())
            .to_block(&format!("{plain}:disabled")),
    );
    css.push_str(
        &StyleRules::new()
            .with("color", colors.grey.as_str())
            .with("font-size", theme.font_sizes.medium.as_str())
            .to_block("[data-ui-kind=\"input\"]::placeholder"),
    );

    css.push_str(
        &StyleRules::new()
            .with("color", colors.error.as_str())
            .with("font-size", theme.font_sizes.small.as_str())
            .with("margin-top", px(4))
            .to_block("[data-ui-kind=\"input-error-message\"]"),
    );
}

fn push_text(css: &mut String, theme: &Theme) {
    let sizes = &theme.font_sizes;
    for size in TextSize::ALL {
        let value = match size {
            TextSize::Small => &sizes.small,
            TextSize::Medium => &sizes.medium,
            TextSize::Large => &sizes.large,
        };
        let selector = format!("[data-ui-kind=\"text\"][data-ui-size=\"{}\"]", size.token());
        css.push_str(&StyleRules::new().with("font-size", value.as_str()).to_block(&selector));
    }
}

fn push_icons(css: &mut String, theme: &Theme) {
    css.push_str(
        &StyleRules::new()
            .with("display", "inline-flex")
            .with("align-items", "center")
            .to_block("[data-ui-kind=\"icon\"]"),
    );
    for palette in Palette::ALL {
        let selector = format!(
            "[data-ui-kind=\"icon\"][data-ui-palette=\"{}\"]",
            palette.token()
        );
        css.push_str(
            &StyleRules::new()
                .with("color", palette.color(theme))
                .to_block(&selector),
        );
    }
}

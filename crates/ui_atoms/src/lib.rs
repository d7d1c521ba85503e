//! Themed Leptos building blocks for application screens.
//!
//! The crate owns the [`Button`] and [`InputField`] controls, the [`Icon`],
//! [`Flex`] and [`Text`] primitives they compose, and the theme layer that
//! turns design tokens into a stylesheet. Components emit a stable
//! `data-ui-*` attribute contract; [`ThemeProvider`] mounts the matching CSS.
//!
//! Selection logic is exposed as plain functions ([`DisplayMode::select`],
//! [`ButtonLayout::select`], [`ButtonVariant::rules`]) so render decisions can
//! be checked without a DOM.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod button;
mod icon;
mod input;
mod primitives;
mod state;
mod style;
pub mod stylesheet;
mod theme;

#[cfg(test)]
mod test_support;

pub use button::{
    base_rules, resolve_rules, Button, ButtonLayout, ButtonVariant, Palette, ICON_GAP_PX,
};
pub use icon::{Glyph, Icon, IconGlyph};
pub use input::{
    container_rules, error_slot, plain_input_rules, BorderTone, DisplayMode, InputField,
    NativeAutoComplete,
};
pub use primitives::{Flex, FlexDirection, InputErrorMessage, Text, TextSize};
pub use state::{FocusFlag, RevealFlag};
pub use style::{Spacing, StyleRules};
pub use theme::{
    use_theme, FontSizes, FontWeights, Radii, Theme, ThemeColors, ThemeError, ThemeProvider,
};

/// Convenience imports for screens composing the component set.
pub mod prelude {
    pub use crate::{
        use_theme, Button, ButtonVariant, Flex, FlexDirection, Glyph, Icon, IconGlyph,
        InputErrorMessage, InputField, NativeAutoComplete, Palette, Spacing, Text, TextSize,
        Theme, ThemeProvider,
    };
}

//! Layout and text primitives the higher-level controls compose.

use leptos::*;

use crate::{Palette, Spacing};

mod layout;
mod text;

pub use layout::Flex;
pub use text::{InputErrorMessage, Text};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Main axis of a [`Flex`] container.
pub enum FlexDirection {
    /// Horizontal.
    Row,
    /// Vertical.
    Column,
}

impl Default for FlexDirection {
    fn default() -> Self {
        Self::Row
    }
}

impl FlexDirection {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Row => "row",
            Self::Column => "column",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Theme font-size steps for [`Text`].
pub enum TextSize {
    /// Small text.
    Small,
    /// Body text.
    Medium,
    /// Large text.
    Large,
}

impl Default for TextSize {
    fn default() -> Self {
        Self::Medium
    }
}

impl TextSize {
    /// Every size, smallest first.
    pub const ALL: [Self; 3] = [Self::Small, Self::Medium, Self::Large];

    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

pub(crate) fn palette_token(palette: Option<Palette>) -> &'static str {
    palette.map_or("none", Palette::token)
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

pub(crate) fn inline_style(spacing: Spacing, cursor: Option<&'static str>) -> Option<String> {
    let mut rules = spacing.rules();
    if let Some(cursor) = cursor {
        rules.set("cursor", cursor);
    }
    (!rules.is_empty()).then(|| rules.to_inline())
}

//! Icon wrapper and the built-in glyph set.

use leptos::*;

use crate::primitives::{inline_style, palette_token};
use crate::{Palette, Spacing};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Built-in 24×24 glyphs.
pub enum IconGlyph {
    /// Open eye.
    Visibility,
    /// Struck-through eye.
    VisibilityOff,
    /// Storefront.
    Store,
}

impl IconGlyph {
    /// Every glyph, in declaration order.
    pub const ALL: [Self; 3] = [Self::Visibility, Self::VisibilityOff, Self::Store];

    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Visibility => "visibility",
            Self::VisibilityOff => "visibility-off",
            Self::Store => "store",
        }
    }

    fn path(self) -> &'static str {
        match self {
            Self::Visibility => {
                "M12 4.5C7 4.5 2.73 7.61 1 12c1.73 4.39 6 7.5 11 7.5s9.27-3.11 11-7.5c-1.73-4.39-6-7.5-11-7.5zM12 17c-2.76 0-5-2.24-5-5s2.24-5 5-5 5 2.24 5 5-2.24 5-5 5zm0-8c-1.66 0-3 1.34-3 3s1.34 3 3 3 3-1.34 3-3-1.34-3-3-3z"
            }
            Self::VisibilityOff => {
                "M12 7c2.76 0 5 2.24 5 5 0 .65-.13 1.26-.36 1.83l2.92 2.92c1.51-1.26 2.7-2.89 3.43-4.75-1.73-4.39-6-7.5-11-7.5-1.4 0-2.74.25-3.98.7l2.16 2.16C10.74 7.13 11.35 7 12 7zM2 4.27l2.28 2.28.46.46C3.08 8.3 1.78 10.02 1 12c1.73 4.39 6 7.5 11 7.5 1.55 0 3.03-.3 4.38-.84l.42.42L19.73 22 21 20.73 3.27 3 2 4.27zM7.53 9.8l1.55 1.55c-.05.21-.08.43-.08.65 0 1.66 1.34 3 3 3 .22 0 .44-.03.65-.08l1.55 1.55c-.67.33-1.41.53-2.2.53-2.76 0-5-2.24-5-5 0-.79.2-1.53.53-2.2zm4.31-.78l3.15 3.15.02-.16c0-1.66-1.34-3-3-3l-.17.01z"
            }
            Self::Store => {
                "M20 4H4v2h16V4zm1 10v-2l-1-5H4l-1 5v2h1v6h10v-6h4v6h2v-6h1zm-9 4H6v-4h6v4z"
            }
        }
    }
}

#[component]
/// Inline SVG rendering of a built-in glyph. Inherits the surrounding text colour.
pub fn Glyph(
    #[prop(into)] glyph: MaybeSignal<IconGlyph>,
    #[prop(default = 24)] size: u16,
) -> impl IntoView {
    view! {
        <svg
            viewBox="0 0 24 24"
            width=size
            height=size
            fill="currentColor"
            aria-hidden="true"
            focusable="false"
            data-ui-glyph=move || glyph.get().token()
        >
            <path d=move || glyph.get().path()></path>
        </svg>
    }
}

#[component]
/// Wrapper that sizes, colours and spaces an icon element supplied as children.
pub fn Icon(
    #[prop(optional)] color: Option<Palette>,
    #[prop(optional)] cursor: Option<&'static str>,
    #[prop(optional)] spacing: Spacing,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class="ui-icon"
            style=inline_style(spacing, cursor)
            data-ui-primitive="true"
            data-ui-kind="icon"
            data-ui-palette=palette_token(color)
        >
            {children()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_tokens_and_paths_are_distinct() {
        for (index, glyph) in IconGlyph::ALL.iter().enumerate() {
            for other in &IconGlyph::ALL[index + 1..] {
                assert_ne!(glyph.token(), other.token());
                assert_ne!(glyph.path(), other.path());
            }
            assert!(glyph.path().starts_with('M'));
        }
    }
}

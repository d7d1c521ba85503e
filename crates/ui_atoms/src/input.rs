//! Text-entry control with decoration, password-reveal, and inline error handling.

use leptos::*;

use crate::primitives::{bool_token, FlexDirection, InputErrorMessage};
use crate::state::{FocusFlag, RevealFlag};
use crate::style::px;
use crate::{Button, ButtonVariant, Flex, Glyph, Palette, Spacing, StyleRules, Theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Mutually exclusive render modes for [`InputField`].
pub enum DisplayMode {
    /// Bordered container, decoration after the text box.
    Suffixed,
    /// Bordered container, decoration before the text box.
    Prefixed,
    /// Bordered container with a trailing reveal control.
    PasswordMasked,
    /// Unboxed text field.
    Plain,
}

impl DisplayMode {
    /// Every mode, highest precedence first.
    pub const ALL: [Self; 4] = [Self::Suffixed, Self::Prefixed, Self::PasswordMasked, Self::Plain];

    /// Precedence is suffix, then prefix, then password, then plain. A decoration
    /// therefore disables password masking.
    pub fn select(has_suffix: bool, has_prefix: bool, input_type: &str) -> Self {
        if has_suffix {
            Self::Suffixed
        } else if has_prefix {
            Self::Prefixed
        } else if input_type == "password" {
            Self::PasswordMasked
        } else {
            Self::Plain
        }
    }

    /// Whether the field sits inside the bordered container.
    pub fn is_boxed(self) -> bool {
        !matches!(self, Self::Plain)
    }

    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Suffixed => "suffixed",
            Self::Prefixed => "prefixed",
            Self::PasswordMasked => "password",
            Self::Plain => "plain",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Border state of the bordered input container.
pub enum BorderTone {
    /// Neutral border.
    Idle,
    /// Focused border.
    Focused,
    /// Error border.
    Error,
}

impl BorderTone {
    /// Every tone.
    pub const ALL: [Self; 3] = [Self::Idle, Self::Focused, Self::Error];

    /// Error wins over focus; a disabled container never shows focus.
    pub fn resolve(error: bool, focused: bool, disabled: bool) -> Self {
        if error {
            Self::Error
        } else if focused && !disabled {
            Self::Focused
        } else {
            Self::Idle
        }
    }

    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Focused => "focused",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Browser autocomplete hint forwarded to the `<input>`.
pub enum NativeAutoComplete {
    /// Let the browser autofill.
    On,
    /// Ask the browser not to autofill.
    Disabled,
}

impl NativeAutoComplete {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Disabled => "off",
        }
    }
}

/// Message to mount beneath the field, or `None` when nothing is mounted.
pub fn error_slot(error_form: bool, error_message: &str) -> Option<String> {
    error_form.then(|| error_message.to_string())
}

/// Rules for the bordered container.
pub fn container_rules(tone: BorderTone, disabled: bool, theme: &Theme) -> StyleRules {
    let colors = &theme.colors;
    let mut rules = StyleRules::new()
        .with("display", "flex")
        .with("align-items", "center")
        .with("padding", "10px 12px")
        .with("border", format!("1px solid {}", colors.medium_grey))
        .with("border-radius", px(theme.radii.field));
    rules.set(
        "background",
        if disabled {
            colors.light_grey.as_str()
        } else {
            colors.white.as_str()
        },
    );
    match tone {
        BorderTone::Idle => {}
        BorderTone::Focused => rules.set("border-color", colors.primary.as_str()),
        BorderTone::Error => rules.set("border-color", colors.error.as_str()),
    }
    rules
}

/// Rules for the unboxed field used by [`DisplayMode::Plain`].
pub fn plain_input_rules(error: bool, theme: &Theme) -> StyleRules {
    let colors = &theme.colors;
    let mut rules = StyleRules::new()
        .with("padding", "10px 12px")
        .with("font-family", "inherit")
        .with("border", format!("1px solid {}", colors.medium_grey))
        .with("border-radius", px(theme.radii.field));
    if error {
        rules.set("border-color", colors.error.as_str());
    }
    rules
}

struct FieldAttrs {
    name: Option<String>,
    id: Option<String>,
    placeholder: Option<String>,
    aria_label: Option<String>,
    autocomplete: Option<NativeAutoComplete>,
    node_ref: NodeRef<html::Input>,
    value: MaybeSignal<String>,
    disabled: MaybeSignal<bool>,
    error_form: MaybeSignal<bool>,
    on_input: Option<Callback<leptos::ev::Event>>,
}

fn field_input(attrs: FieldAttrs, mode: DisplayMode, input_type: Signal<&'static str>) -> View {
    let FieldAttrs {
        name,
        id,
        placeholder,
        aria_label,
        autocomplete,
        node_ref,
        value,
        disabled,
        error_form,
        on_input,
    } = attrs;

    view! {
        <input
            class="ui-input"
            name=name
            id=id
            placeholder=placeholder
            aria-label=aria_label
            aria-invalid=move || bool_token(error_form.get())
            node_ref=node_ref
            autocomplete=autocomplete.map(NativeAutoComplete::token)
            type=move || input_type.get()
            prop:value=move || value.get()
            disabled=move || disabled.get()
            data-testid="input"
            data-ui-primitive="true"
            data-ui-kind="input"
            data-ui-slot=mode.token()
            data-ui-error=move || bool_token(error_form.get())
            on:input=move |ev| {
                if let Some(on_input) = on_input.as_ref() {
                    on_input.call(ev);
                }
            }
        />
    }
    .into_view()
}

/// Masked field plus the trailing control that flips `reveal`.
fn reveal_contents(attrs: FieldAttrs, reveal: RwSignal<RevealFlag>) -> View {
    let disabled = attrs.disabled;
    view! {
        <>
            {field_input(
                attrs,
                DisplayMode::PasswordMasked,
                Signal::derive(move || reveal.get().input_type()),
            )}
            <Button
                variant=ButtonVariant::Text
                palette=Palette::Primary
                spacing=Spacing::right(5)
                disabled
                aria_label=Signal::derive(move || reveal.get().control_label().to_string())
                prefix=move || view! {
                    <Glyph glyph=Signal::derive(move || reveal.get().glyph()) size=22 />
                }
                on_click=Callback::new(move |_| {
                    if !disabled.get_untracked() {
                        reveal.update(RevealFlag::toggle);
                    }
                })
            />
        </>
    }
    .into_view()
}

#[component]
/// Text-entry control.
///
/// The render mode is fixed when the component is created: a `sufix` or
/// `prefix` decoration selects the bordered container with that decoration,
/// otherwise `input_type="password"` selects the bordered container with a
/// reveal control, otherwise a plain field is rendered. While `error_form`
/// holds, an [`InputErrorMessage`] with `error_message` is mounted beneath
/// the field.
pub fn InputField(
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] error_form: MaybeSignal<bool>,
    #[prop(optional, into)] error_message: MaybeSignal<String>,
    #[prop(optional, into)] sufix: Option<ViewFn>,
    #[prop(optional, into)] prefix: Option<ViewFn>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] native_auto_complete: Option<NativeAutoComplete>,
    #[prop(optional)] width: Option<u16>,
    #[prop(optional)] max_width: Option<u16>,
    #[prop(optional)] node_ref: NodeRef<html::Input>,
    #[prop(optional)] on_input: Option<Callback<leptos::ev::Event>>,
) -> impl IntoView {
    let mode = DisplayMode::select(sufix.is_some(), prefix.is_some(), input_type);
    let sizing = Spacing {
        width,
        max_width,
        ..Spacing::default()
    }
    .rules();
    let sizing = (!sizing.is_empty()).then(|| sizing.to_inline());

    let attrs = FieldAttrs {
        name,
        id,
        placeholder,
        aria_label,
        autocomplete: native_auto_complete,
        node_ref,
        value,
        disabled,
        error_form,
        on_input,
    };

    let field = if mode.is_boxed() {
        let focus = create_rw_signal(FocusFlag::default());
        let reveal = create_rw_signal(RevealFlag::default());
        let tone = move || {
            BorderTone::resolve(error_form.get(), focus.get().is_focused(), disabled.get())
        };

        let contents = match mode {
            DisplayMode::Suffixed => view! {
                <>
                    {field_input(attrs, mode, Signal::derive(move || input_type))}
                    {sufix.map(|decoration| decoration.run())}
                </>
            }
            .into_view(),
            DisplayMode::Prefixed => view! {
                <>
                    {prefix.map(|decoration| decoration.run())}
                    {field_input(attrs, mode, Signal::derive(move || input_type))}
                </>
            }
            .into_view(),
            _ => reveal_contents(attrs, reveal),
        };

        view! {
            <div
                class="ui-input-container"
                style=sizing
                data-ui-primitive="true"
                data-ui-kind="input-container"
                data-ui-mode=mode.token()
                data-ui-state=move || tone().token()
                data-ui-disabled=move || bool_token(disabled.get())
                data-ui-revealed=move || {
                    (mode == DisplayMode::PasswordMasked)
                        .then(|| bool_token(reveal.get().is_revealed()))
                }
                on:click=move |_| focus.update(FocusFlag::focus)
                on:focusin=move |_| focus.update(FocusFlag::focus)
                on:focusout=move |_| focus.update(FocusFlag::blur)
            >
                {contents}
            </div>
        }
        .into_view()
    } else {
        view! {
            <div class="ui-input-plain" style=sizing data-ui-mode=mode.token()>
                {field_input(attrs, mode, Signal::derive(move || input_type))}
            </div>
        }
        .into_view()
    };

    view! {
        <Flex direction=FlexDirection::Column ui_slot="input-field">
            {field}
            {move || {
                error_slot(error_form.get(), &error_message.get())
                    .map(|message| view! { <InputErrorMessage message /> })
            }}
        </Flex>
    }
}

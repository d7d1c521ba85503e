//! Browser gallery for the `ui_atoms` component set.
//!
//! Renders every button variant and palette, each input display mode, and a
//! small sign-in form that drives the inline error slot, all under the theme
//! loaded from `theme.json`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use leptos::*;
use serde::{Deserialize, Serialize};
use ui_atoms::prelude::*;

const THEME_JSON: &str = include_str!("../theme.json");

const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct SignInForm {
    email: String,
    #[serde(skip_serializing, default)]
    password: String,
    submitted: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct FormErrors {
    email: Option<&'static str>,
    password: Option<&'static str>,
}

impl FormErrors {
    fn is_empty(self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

fn validate(form: &SignInForm) -> FormErrors {
    let email = form.email.trim();
    FormErrors {
        email: if email.is_empty() {
            Some("Required")
        } else if !email.contains('@') {
            Some("Enter a valid email address")
        } else {
            None
        },
        password: if form.password.is_empty() {
            Some("Required")
        } else if form.password.chars().count() < MIN_PASSWORD_LEN {
            Some("Use at least 8 characters")
        } else {
            None
        },
    }
}

fn variant_label(variant: ButtonVariant) -> &'static str {
    match variant {
        ButtonVariant::Text => "Text",
        ButtonVariant::Contained => "Contained",
        ButtonVariant::Outlined => "Outlined",
        ButtonVariant::Neutral => "Neutral",
        ButtonVariant::Fab => "+",
        ButtonVariant::FabWithText => "Fab with text",
    }
}

#[component]
/// Gallery root. Uses `theme.json` unless a theme is supplied.
pub fn ShowcaseApp(#[prop(optional)] theme: Option<Theme>) -> impl IntoView {
    let theme = theme.unwrap_or_else(|| Theme::from_json_or_default(THEME_JSON));
    let page = Spacing {
        max_width: Some(720),
        ..Spacing::default()
    };

    view! {
        <ThemeProvider theme>
            <Flex direction=FlexDirection::Column gap=32 spacing=page>
                <ButtonGallery />
                <InputGallery />
                <SignInDemo />
                <ThemeSwatches />
            </Flex>
        </ThemeProvider>
    }
}

#[component]
fn ButtonGallery() -> impl IntoView {
    let clicks = create_rw_signal(0_u32);
    let count = Callback::new(move |_| clicks.update(|value| *value += 1));

    view! {
        <Flex direction=FlexDirection::Column gap=12>
            <Text size=TextSize::Large>"Buttons"</Text>
            {ButtonVariant::ALL
                .into_iter()
                .map(|variant| {
                    view! {
                        <Flex gap=12>
                            <Button variant on_click=count>{variant_label(variant)}</Button>
                            {Palette::ALL
                                .into_iter()
                                .map(move |palette| {
                                    view! {
                                        <Button variant palette on_click=count>
                                            {variant_label(variant)}
                                        </Button>
                                    }
                                })
                                .collect_view()}
                        </Flex>
                    }
                })
                .collect_view()}
            <Flex gap=12>
                <Button
                    variant="fab"
                    palette=Palette::Primary
                    aria_label="Open store"
                    prefix=|| view! { <Glyph glyph=IconGlyph::Store /> }
                    on_click=count
                />
                <Button
                    variant="contained"
                    palette=Palette::Primary
                    prefix=|| view! { <Glyph glyph=IconGlyph::Store size=18 /> }
                    on_click=count
                >
                    "Shop"
                </Button>
                <Button
                    variant="outlined"
                    palette=Palette::Primary
                    sufix=|| view! { <Glyph glyph=IconGlyph::Visibility size=18 /> }
                    on_click=count
                >
                    "Preview"
                </Button>
                <Button variant="bogus" on_click=count>"Unknown variant"</Button>
                <Button variant="neutral" disabled=true>"Disabled"</Button>
            </Flex>
            <Text size=TextSize::Small>{move || format!("Clicks: {}", clicks.get())}</Text>
        </Flex>
    }
}

#[component]
fn InputGallery() -> impl IntoView {
    view! {
        <Flex direction=FlexDirection::Column gap=12>
            <Text size=TextSize::Large>"Inputs"</Text>
            <InputField name="plain" placeholder="Plain field" />
            <InputField
                name="search"
                placeholder="Prefixed field"
                prefix=|| view! {
                    <Icon color=Palette::Primary>
                        <Glyph glyph=IconGlyph::Store size=20 />
                    </Icon>
                }
            />
            <InputField
                name="secret-note"
                placeholder="Suffixed field"
                sufix=|| view! { <Glyph glyph=IconGlyph::Visibility size=20 /> }
            />
            <InputField name="passphrase" placeholder="Password field" input_type="password" />
            <InputField
                name="locked"
                placeholder="Disabled field"
                disabled=true
                native_auto_complete=NativeAutoComplete::Disabled
            />
            <InputField
                name="required"
                placeholder="Field with error"
                error_form=true
                error_message="Required"
            />
        </Flex>
    }
}

#[component]
fn SignInDemo() -> impl IntoView {
    let form = create_rw_signal(SignInForm::default());
    let errors = Signal::derive(move || validate(&form.get()));
    let submitted = move || form.get().submitted;

    let submit = Callback::new(move |_| {
        form.update(|value| value.submitted = true);
        if errors.get_untracked().is_empty() {
            logging::log!("sign-in form accepted for {}", form.get_untracked().email.trim());
        }
    });

    let snapshot = move || match serde_json::to_string_pretty(&form.get()) {
        Ok(serialized) => serialized,
        Err(err) => {
            logging::warn!("sign-in form serialize failed: {err}");
            String::new()
        }
    };

    let column = Spacing {
        max_width: Some(360),
        ..Spacing::default()
    };

    view! {
        <Flex direction=FlexDirection::Column gap=12 spacing=column>
            <Text size=TextSize::Large>"Sign in"</Text>
            <InputField
                name="email"
                placeholder="Email"
                input_type="email"
                native_auto_complete=NativeAutoComplete::On
                value=Signal::derive(move || form.get().email)
                error_form=Signal::derive(move || submitted() && errors.get().email.is_some())
                error_message=Signal::derive(move || errors.get().email.unwrap_or_default().to_string())
                on_input=Callback::new(move |ev| {
                    let next = event_target_value(&ev);
                    form.update(|value| value.email = next);
                })
            />
            <InputField
                name="password"
                placeholder="Password"
                input_type="password"
                native_auto_complete=NativeAutoComplete::Disabled
                value=Signal::derive(move || form.get().password)
                error_form=Signal::derive(move || submitted() && errors.get().password.is_some())
                error_message=Signal::derive(move || errors.get().password.unwrap_or_default().to_string())
                on_input=Callback::new(move |ev| {
                    let next = event_target_value(&ev);
                    form.update(|value| value.password = next);
                })
            />
            <Button variant=ButtonVariant::Contained palette=Palette::Primary on_click=submit>
                "Sign in"
            </Button>
            <pre data-ui-slot="form-snapshot">{snapshot}</pre>
        </Flex>
    }
}

#[component]
fn ThemeSwatches() -> impl IntoView {
    let theme = use_theme();
    let colors = theme.colors;
    let swatches = [
        ("primary", colors.primary),
        ("secondary", colors.secondary),
        ("error", colors.error),
        ("mediumGrey", colors.medium_grey),
    ];

    view! {
        <Flex gap=12>
            {swatches
                .into_iter()
                .map(|(name, value)| {
                    let style = format!(
                        "display: inline-block; width: 24px; height: 24px; border-radius: 4px; background: {value};"
                    );
                    view! {
                        <Flex direction=FlexDirection::Column gap=4>
                            <span style=style></span>
                            <Text size=TextSize::Small>{name}</Text>
                        </Flex>
                    }
                })
                .collect_view()}
        </Flex>
    }
}

/// Mounts the gallery into `<body>`.
#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| view! { <ShowcaseApp /> })
}

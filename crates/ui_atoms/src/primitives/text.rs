use super::*;

#[component]
/// Inline text run sized from the theme's font scale.
pub fn Text(
    #[prop(default = TextSize::Medium)] size: TextSize,
    #[prop(optional)] cursor: Option<&'static str>,
    #[prop(optional)] spacing: Spacing,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class="ui-text"
            style=inline_style(spacing, cursor)
            data-ui-primitive="true"
            data-ui-kind="text"
            data-ui-size=size.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Validation message rendered beneath a field. Callers mount it only while an error is flagged.
pub fn InputErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <span
            class="ui-input-error-message"
            role="alert"
            data-ui-primitive="true"
            data-ui-kind="input-error-message"
            data-testid="input-error-message"
        >
            {message}
        </span>
    }
}

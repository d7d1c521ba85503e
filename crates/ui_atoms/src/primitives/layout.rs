use super::*;

#[component]
/// Flexbox container used to stack a field above its error message or to line up controls.
pub fn Flex(
    #[prop(default = FlexDirection::Row)] direction: FlexDirection,
    #[prop(optional)] gap: Option<u16>,
    #[prop(optional)] spacing: Spacing,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let mut rules = spacing.rules();
    rules.set("display", "flex");
    rules.set("flex-direction", direction.token());
    if let Some(gap) = gap {
        rules.set("gap", crate::style::px(gap));
    }

    view! {
        <div
            class="ui-flex"
            style=rules.to_inline()
            data-ui-primitive="true"
            data-ui-kind="flex"
            data-ui-slot=ui_slot
            data-ui-direction=direction.token()
        >
            {children()}
        </div>
    }
}

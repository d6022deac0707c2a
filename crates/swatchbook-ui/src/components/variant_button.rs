use crate::styles::{BUTTON, ButtonIntent, ButtonSize};
use gloo::console;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct VariantButtonProps {
    #[prop_or_default]
    pub children: Children,
    /// Omitted intent falls back to the table default.
    #[prop_or_default]
    pub intent: Option<ButtonIntent>,
    /// Omitted size falls back to the table default.
    #[prop_or_default]
    pub size: Option<ButtonSize>,
    #[prop_or_default]
    pub disabled: bool,
    /// Caller classes appended last so they override the table.
    #[prop_or_default]
    pub class: AttrValue,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
}

/// Button styled through the declarative variant table.
#[function_component(VariantButton)]
pub(crate) fn variant_button(props: &VariantButtonProps) -> Html {
    let mut selection: Vec<(&str, &str)> = Vec::new();
    if let Some(intent) = props.intent {
        selection.push(("intent", intent.as_value()));
    }
    if let Some(size) = props.size {
        selection.push(("size", size.as_value()));
    }
    let classes = BUTTON
        .classes_with(&selection, props.class.as_ref())
        .unwrap_or_else(|err| {
            console::error!("button variant rejected", err.to_string());
            BUTTON
                .classes_with(&[], props.class.as_ref())
                .unwrap_or_default()
        });
    html! {
        <button
            class={classes}
            disabled={props.disabled}
            onclick={props.onclick.clone()}
        >
            { for props.children.iter() }
        </button>
    }
}

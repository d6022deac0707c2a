use crate::styles::merge_button_classes;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct MergeButtonProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub active: bool,
    #[prop_or_default]
    pub disabled: bool,
    /// Caller classes appended last so they override the state fragments.
    #[prop_or_default]
    pub class: AttrValue,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
}

/// Button styled by merging a base list with state fragments, last write
/// winning per conflict group.
#[function_component(MergeButton)]
pub(crate) fn merge_button(props: &MergeButtonProps) -> Html {
    let classes = merge_button_classes(props.active, props.disabled, props.class.as_ref());
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

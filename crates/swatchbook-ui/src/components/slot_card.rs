use crate::styles::{CARD, CardTone};
use gloo::console;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SlotCardProps {
    pub title: AttrValue,
    /// Rendered inside the description slot.
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub image_url: Option<AttrValue>,
    /// Omitted tone falls back to the theme default.
    #[prop_or_default]
    pub tone: Option<CardTone>,
    /// Caller classes merged into the frame slot, winning conflicts.
    #[prop_or_default]
    pub class: AttrValue,
}

/// Card styled through the slot theme: frame, image, content, title, and
/// description resolve independently under one tone selection.
#[function_component(SlotCard)]
pub(crate) fn slot_card(props: &SlotCardProps) -> Html {
    let selection: Vec<(&str, &str)> = props
        .tone
        .map(|tone| ("tone", tone.as_value()))
        .into_iter()
        .collect();
    let resolved = CARD.resolve(&selection).unwrap_or_else(|err| {
        console::error!("card tone rejected", err.to_string());
        CARD.defaults()
    });
    html! {
        <div class={resolved.class_with("base", props.class.as_ref())}>
            {props.image_url.as_ref().map_or_else(|| html! {}, |url| html! {
                <img src={url.clone()} alt="Thumbnail" class={resolved.class("image")} />
            })}
            <div class={resolved.class("content")}>
                <h3 class={resolved.class("title")}>{props.title.clone()}</h3>
                <div class={resolved.class("description")}>
                    { for props.children.iter() }
                </div>
            </div>
        </div>
    }
}

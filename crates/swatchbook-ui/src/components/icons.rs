use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct IconProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub size: Option<AttrValue>,
}

fn size_class(size: &Option<AttrValue>) -> Option<String> {
    size.as_ref().map(|value| {
        let raw = value.as_ref();
        if raw.starts_with("size-") {
            raw.to_string()
        } else {
            format!("size-{raw}")
        }
    })
}

fn icon_svg(props: &IconProps, body: Html) -> Html {
    let mut classes = Classes::new();
    if let Some(size) = size_class(&props.size) {
        classes.push(size);
    }
    classes.extend(props.class.clone());
    let title = props.title.clone();
    let aria_hidden = title.is_none().then_some(AttrValue::from("true"));
    html! {
        <svg
            class={classes}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-linecap="round"
            stroke-linejoin="round"
            stroke-width="2"
            role="img"
            aria-hidden={aria_hidden}
            aria-label={title.clone()}
        >
            {title.map(|text| html! { <title>{text}</title> }).unwrap_or_default()}
            {body}
        </svg>
    }
}

#[function_component(IconSwatchBook)]
pub(crate) fn icon_swatch_book(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <>
            <path d="M11 17a4 4 0 0 1-8 0V5a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2Z" />
            <path d="M16.7 13H19a2 2 0 0 1 2 2v4a2 2 0 0 1-2 2H7" />
            <path d="M7 17h.01" />
            <path d="m11 8l2.3-2.3a2.4 2.4 0 0 1 3.404.004L18.6 7.6a2.4 2.4 0 0 1 .026 3.434L9.21 20.45" />
        </> },
    )
}

#[function_component(IconLayers)]
pub(crate) fn icon_layers(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <>
            <path d="M12.83 2.18a2 2 0 0 0-1.66 0L2.6 6.08a1 1 0 0 0 0 1.83l8.58 3.91a2 2 0 0 0 1.66 0l8.58-3.9a1 1 0 0 0 0-1.83Z" />
            <path d="m22 17.65l-9.17 4.16a2 2 0 0 1-1.66 0L2 17.65" />
            <path d="m22 12.65l-9.17 4.16a2 2 0 0 1-1.66 0L2 12.65" />
        </> },
    )
}

#[function_component(IconLayoutGrid)]
pub(crate) fn icon_layout_grid(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <>
            <rect x="3" y="3" width="7" height="7" rx="1" />
            <rect x="14" y="3" width="7" height="7" rx="1" />
            <rect x="14" y="14" width="7" height="7" rx="1" />
            <rect x="3" y="14" width="7" height="7" rx="1" />
        </> },
    )
}

#[function_component(IconPanelsTopLeft)]
pub(crate) fn icon_panels_top_left(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <>
            <rect x="3" y="3" width="18" height="18" rx="2" />
            <path d="M3 9h18M9 21V9" />
        </> },
    )
}

#[function_component(IconFlaskConical)]
pub(crate) fn icon_flask_conical(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <>
            <path d="M14 2v6a2 2 0 0 0 .245.96l5.51 10.08A2 2 0 0 1 18 22H6a2 2 0 0 1-1.755-2.96l5.51-10.08A2 2 0 0 0 10 8V2" />
            <path d="M6.453 15h11.094M8.5 2h7" />
        </> },
    )
}

#[function_component(IconCircleAlert)]
pub(crate) fn icon_circle_alert(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <>
            <circle cx="12" cy="12" r="10" />
            <path d="M12 8v4m0 4h.01" />
        </> },
    )
}

#[function_component(IconSquare)]
pub(crate) fn icon_square(props: &IconProps) -> Html {
    icon_svg(props, html! { <rect x="3" y="3" width="18" height="18" rx="2" /> })
}

#[function_component(IconSquareCheck)]
pub(crate) fn icon_square_check(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <>
            <rect x="3" y="3" width="18" height="18" rx="2" />
            <path d="m9 12l2 2l4-4" />
        </> },
    )
}

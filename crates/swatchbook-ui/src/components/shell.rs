use crate::app::Route;
use crate::components::icons::IconSwatchBook;
use crate::styles::nav_link_classes;
use yew::prelude::*;
use yew_router::prelude::{Link, use_route};

#[derive(Properties, PartialEq)]
pub(crate) struct PageProps {
    #[prop_or_default]
    pub children: Children,
}

/// Sticky top bar with one link per demo route. The link pointing at the
/// current route is highlighted through [`nav_link_classes`].
#[function_component(TopNav)]
pub(crate) fn top_nav() -> Html {
    let current = use_route::<Route>().unwrap_or(Route::NotFound);
    html! {
        <div class="top-0 z-10 sticky flex items-center gap-3 bg-white p-2 border-slate-100 border-b font-light text-xs">
            <IconSwatchBook size="4" />
            {nav_item(Route::Home, "Swatchbook Home", &current)}
            {nav_item(Route::Playground, "Playground", &current)}
            {nav_item(Route::ButtonMerge, "Button w/ merge", &current)}
            {nav_item(Route::ButtonVariants, "Button w/ variants", &current)}
            {nav_item(Route::CardSlots, "Card w/ slots", &current)}
        </div>
    }
}

fn nav_item(route: Route, label: &str, current: &Route) -> Html {
    let classes = nav_link_classes(*current == route);
    html! {
        <Link<Route> to={route} classes={classes!(classes)}>{label}</Link<Route>>
    }
}

/// Centered page wrapper shared by every demo route.
#[function_component(Page)]
pub(crate) fn page(props: &PageProps) -> Html {
    html! {
        <div class="flex flex-col justify-center items-center bg-white min-h-[95vh]">
            <div class="flex flex-col items-start gap-1">
                {for props.children.iter()}
            </div>
        </div>
    }
}

use crate::app::Route;
use crate::components::icons::IconSwatchBook;
use crate::components::shell::Page;
use yew::prelude::*;
use yew_router::prelude::Link;

#[function_component(HomePage)]
pub(crate) fn home_page() -> Html {
    html! {
        <Page>
            <div class="flex items-center gap-2">
                <IconSwatchBook size="6" />
                <h1 class="font-medium text-gray-900 text-xl">
                    {"Swatchbook: Yew + class composition demos"}
                </h1>
            </div>
            <p class="mt-3 mb-1 text-gray-600 text-sm">
                {"One resolver, three styling surfaces: conditional merging, a \
                  variant table, and a multi-slot theme."}
            </p>
            <p class="text-gray-600 text-sm">
                <span class="font-bold">{"Explore sample buttons: "}</span>
                {demo_link(Route::ButtonMerge, "button-merge")}
                {" and "}
                {demo_link(Route::ButtonVariants, "button-variants")}
                {", or the "}
                {demo_link(Route::CardSlots, "card-slots")}
                {" theme."}
            </p>
        </Page>
    }
}

fn demo_link(route: Route, label: &str) -> Html {
    html! {
        <Link<Route> to={route} classes={classes!("text-blue-600", "hover:underline")}>
            {label}
        </Link<Route>>
    }
}

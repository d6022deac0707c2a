//! Router host and wasm entry point for the demo shell.

use crate::components::shell::TopNav;
use crate::pages::button_merge::ButtonMergePage;
use crate::pages::button_variants::ButtonVariantsPage;
use crate::pages::card_slots::CardSlotsPage;
use crate::pages::home::HomePage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::playground::PlaygroundPage;
use yew::prelude::*;
use yew_router::prelude::*;

pub(crate) use routes::Route;

mod routes;

/// Root component: browser router, sticky navigation, route switch.
#[function_component(SwatchbookApp)]
pub(crate) fn swatchbook_app() -> Html {
    html! {
        <BrowserRouter>
            <TopNav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Playground => html! { <PlaygroundPage /> },
        Route::ButtonMerge => html! { <ButtonMergePage /> },
        Route::ButtonVariants => html! { <ButtonVariantsPage /> },
        Route::CardSlots => html! { <CardSlotsPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<SwatchbookApp>::with_root(root).render();
    } else {
        yew::Renderer::<SwatchbookApp>::new().render();
    }
}

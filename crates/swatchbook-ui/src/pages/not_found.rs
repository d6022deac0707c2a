use crate::app::Route;
use crate::components::icons::IconCircleAlert;
use crate::components::shell::Page;
use yew::prelude::*;
use yew_router::prelude::Link;

#[function_component(NotFoundPage)]
pub(crate) fn not_found_page() -> Html {
    html! {
        <Page>
            <div class="flex items-center gap-2">
                <IconCircleAlert class={classes!("text-gray-400")} size="6" />
                <h1 class="font-medium text-gray-900 text-xl">{"Page not found"}</h1>
            </div>
            <p class="mt-3 text-gray-600 text-sm">
                {"Nothing lives at this address. Head back "}
                <Link<Route> to={Route::Home} classes={classes!("text-blue-600", "hover:underline")}>
                    {"home"}
                </Link<Route>>
                {"."}
            </p>
        </Page>
    }
}

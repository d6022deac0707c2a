use crate::components::icons::{IconLayers, IconSquare, IconSquareCheck};
use crate::components::merge_button::MergeButton;
use crate::components::shell::Page;
use yew::prelude::*;

#[function_component(ButtonMergePage)]
pub(crate) fn button_merge_page() -> Html {
    let active = use_state(|| true);
    let toggle = {
        let active = active.clone();
        Callback::from(move |_| active.set(!*active))
    };
    html! {
        <Page>
            <div class="flex items-center gap-2">
                <IconLayers size="5" />
                <h1 class="font-medium text-gray-900 text-xl">
                    {"Merged button: conditional fragments, resolved."}
                </h1>
            </div>
            <p class="mb-3 text-gray-600 text-sm">
                {"State fragments join the base list and later classes win \
                  their conflict group. Click the first button to flip it."}
            </p>
            <div class="my-1 flex items-center gap-2">
                <MergeButton active={*active} onclick={toggle}>
                    {if *active {
                        html! { <IconSquareCheck class={classes!("mr-1")} size="4" /> }
                    } else {
                        html! { <IconSquare class={classes!("mr-1")} size="4" /> }
                    }}
                    {"Button w/ active"}
                </MergeButton>
                <MergeButton disabled=true>
                    <IconSquare class={classes!("mr-1")} size="4" />
                    {"Button w/o active"}
                </MergeButton>
                <MergeButton active=true class="bg-blue-600 border-blue-700 hover:bg-blue-500">
                    {"Overridden"}
                </MergeButton>
            </div>
        </Page>
    }
}

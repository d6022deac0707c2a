use crate::components::icons::{IconLayoutGrid, IconSquare, IconSquareCheck};
use crate::components::shell::Page;
use crate::components::variant_button::VariantButton;
use crate::styles::{ButtonIntent, ButtonSize};
use yew::prelude::*;

#[function_component(ButtonVariantsPage)]
pub(crate) fn button_variants_page() -> Html {
    html! {
        <Page>
            <div class="flex items-center gap-2">
                <IconLayoutGrid size="5" />
                <h1 class="font-medium text-gray-900 text-xl">
                    {"Variant button: a declared table of intents and sizes."}
                </h1>
            </div>
            <p class="mb-3 text-gray-600 text-sm">
                {"Each axis value contributes a fragment; omitted axes use \
                  their declared default before the list is resolved."}
            </p>
            <div class="my-1 flex items-center gap-2">
                <VariantButton size={ButtonSize::Sm}>
                    <IconSquareCheck class={classes!("mr-1")} size="4" />
                    {"Button w/ active"}
                </VariantButton>
                <VariantButton intent={ButtonIntent::Secondary} size={ButtonSize::Sm} disabled=true>
                    <IconSquare class={classes!("mr-1")} size="4" />
                    {"Button w/o active"}
                </VariantButton>
                <VariantButton>
                    {"Defaults"}
                </VariantButton>
            </div>
        </Page>
    }
}

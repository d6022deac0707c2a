use crate::components::icons::IconPanelsTopLeft;
use crate::components::shell::Page;
use crate::components::slot_card::SlotCard;
use crate::styles::CardTone;
use yew::prelude::*;

#[function_component(CardSlotsPage)]
pub(crate) fn card_slots_page() -> Html {
    html! {
        <Page>
            <div class="flex items-center gap-2">
                <IconPanelsTopLeft size="5" />
                <h1 class="font-medium text-gray-900 text-xl">
                    {"Card component w/ slot variants"}
                </h1>
            </div>
            <div class="gap-8 grid grid-cols-1 md:grid-cols-3">
                <SlotCard
                    title="Standard Plan"
                    image_url="https://picsum.photos/id/10/800/600"
                >
                    <p>{"Lorem ipsum dolor sit amet consectetur adipisicing elit."}</p>
                    <p class="mt-4">
                        <span class="text-gray-500 text-sm">{"$10"}</span>
                    </p>
                </SlotCard>
                <SlotCard
                    tone={CardTone::Primary}
                    title="Professional Plan"
                    image_url="https://picsum.photos/id/42/800/600"
                >
                    <p>{"Lorem ipsum dolor sit amet consectetur adipisicing elit."}</p>
                    <p class="mt-4">
                        <span class="font-medium text-blue-800">{"$29"}</span>
                    </p>
                </SlotCard>
                <SlotCard
                    tone={CardTone::Dark}
                    title="Enterprise Plan"
                    image_url="https://picsum.photos/id/20/800/600"
                >
                    <p>{"Lorem ipsum dolor sit amet consectetur adipisicing elit."}</p>
                    <p class="mt-4">
                        <span class="font-medium text-slate-300">{"Ask for Pricing"}</span>
                    </p>
                </SlotCard>
                <div class="flex justify-center md:col-span-3 mt-6">
                    <SlotCard
                        title="Special Offer (Rotated)"
                        class="border-4 border-yellow-400 max-w-lg -rotate-1 hover:rotate-0 transition-transform duration-300"
                    >
                        <p>{"Lorem ipsum dolor sit amet consectetur adipisicing elit."}</p>
                    </SlotCard>
                </div>
            </div>
        </Page>
    }
}

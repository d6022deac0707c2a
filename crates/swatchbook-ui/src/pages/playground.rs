use crate::components::icons::IconFlaskConical;
use crate::styles::BUTTON;
use swatchbook_classes::resolve;
use yew::prelude::*;

/// Inputs shown with their resolved output in the sample table.
const SAMPLES: &[&str] = &[
    "bg-white text-gray-500 bg-neutral-800",
    "p-2 text-sm p-4",
    "hover:bg-white bg-white",
    "border border-gray-200 border-4 border-yellow-400",
    "rotate-1 -rotate-1 transition-all transition-transform",
];

#[function_component(PlaygroundPage)]
pub(crate) fn playground_page() -> Html {
    // An undeclared intent is rejected at the boundary; the message is the
    // interesting output here.
    let rejected = match BUTTON.classes(&[("intent", "ghost")]) {
        Ok(classes) => classes,
        Err(err) => err.to_string(),
    };
    html! {
        <div class="flex flex-col justify-center items-center bg-white min-h-[90vh]">
            <div class="flex flex-col items-start gap-1 mx-8 md:max-w-4xl md:text-justify text-left">
                <div class="flex items-center gap-2">
                    <IconFlaskConical size="5" />
                    <h1 class="font-medium text-gray-900 text-xl">{"Playground \u{1f93d}"}</h1>
                </div>
                <div>
                    <span class="text-gray-400 text-sm">{"Resolver samples below"}</span>
                </div>
                <hr />
                <dl class="mb-3 font-mono text-xs text-left">
                    {for SAMPLES.iter().map(|sample| html! {
                        <>
                            <dt class="mt-2 text-gray-400">{*sample}</dt>
                            <dd class="text-gray-900">{resolve(sample)}</dd>
                        </>
                    })}
                    <dt class="mt-2 text-gray-400">{r#"button intent="ghost""#}</dt>
                    <dd class="text-red-600">{rejected}</dd>
                </dl>
                <div>
                    <p class="mb-3 text-gray-500 text-sm/relaxed sm:text-base/[1.7]">
                        {"Tempora omnis a dolorum laboriosam esse quisquam. Iure et \
                          placeat saepe. Ut debitis nemo doloremque praesentium \
                          officiis sed. Nam maxime quibusdam veritatis sunt iste. "}
                        <span class="text-blue-800 text-lg">{"Libero inventore"}</span>
                        {" et dolorum id. Et ex iure ut facilis. Voluptates deleniti \
                          eos non ex. Aperiam eos iure eum voluptas ut placeat \
                          praesentium quo molestiae."}
                    </p>
                </div>
            </div>
        </div>
    }
}

use swatchbook_classes::{
    Slot, SlotAxis, SlotOption, SlotTheme, VariantAxis, VariantStyles, resolve, resolve_all,
};

const BUTTON: VariantStyles = VariantStyles {
    base: "inline-flex items-center justify-center rounded-sm border px-4 py-2 \
           cursor-pointer disabled:opacity-60 disabled:cursor-default",
    axes: &[
        VariantAxis {
            name: "intent",
            default: "primary",
            options: &[
                (
                    "primary",
                    "bg-neutral-800 text-white border-neutral-900 hover:bg-neutral-700",
                ),
                ("secondary", "bg-white text-gray-500 border-gray-200"),
            ],
        },
        VariantAxis {
            name: "size",
            default: "md",
            options: &[("sm", "text-sm"), ("md", "text-md")],
        },
    ],
};

const CARD: SlotTheme = SlotTheme {
    slots: &[
        Slot {
            name: "base",
            base: "mt-4 max-w-md rounded-lg overflow-hidden shadow-md transition-all",
        },
        Slot { name: "image", base: "w-full h-48 object-cover" },
        Slot { name: "content", base: "p-6" },
        Slot { name: "title", base: "text-xl font-bold mb-2" },
        Slot { name: "description", base: "text-sm mt-2" },
    ],
    axes: &[SlotAxis {
        name: "tone",
        default: "default",
        options: &[
            SlotOption {
                value: "default",
                classes: &[
                    ("base", "bg-white"),
                    ("title", "text-gray-900"),
                    ("description", "text-gray-500"),
                ],
            },
            SlotOption {
                value: "dark",
                classes: &[
                    ("base", "bg-slate-900 shadow-xl"),
                    ("title", "text-white"),
                    ("description", "text-slate-400"),
                ],
            },
            SlotOption {
                value: "primary",
                classes: &[
                    ("base", "bg-blue-50"),
                    ("title", "text-blue-700"),
                    ("description", "text-blue-600"),
                ],
            },
        ],
    }],
};

#[test]
fn toggled_button_keeps_one_value_per_group() {
    let inactive = "bg-white text-gray-500 border-gray-200 hover:bg-gray-50";
    let active = "bg-neutral-800 text-white border-neutral-900 hover:bg-neutral-700";
    let base = "inline-flex items-center rounded-sm border px-4 py-2 text-sm font-medium";

    let merged = resolve_all(&[base, inactive, active]);
    assert!(merged.contains("bg-neutral-800"));
    assert!(merged.contains("hover:bg-neutral-700"));
    assert!(!merged.contains("bg-white"));
    assert!(!merged.contains("hover:bg-gray-50"));
    assert!(merged.contains("text-sm"));
}

#[test]
fn resolved_output_never_repeats_a_group() {
    let merged = resolve(
        "bg-white p-2 hover:bg-gray-50 bg-neutral-800 p-4 hover:bg-neutral-700 bg-black",
    );
    let backgrounds = merged
        .split_whitespace()
        .filter(|token| token.starts_with("bg-"))
        .count();
    let hovers = merged
        .split_whitespace()
        .filter(|token| token.starts_with("hover:bg-"))
        .count();
    assert_eq!(backgrounds, 1);
    assert_eq!(hovers, 1);
    assert!(merged.ends_with("bg-black"));
}

#[test]
fn button_table_matches_the_demo_presets() {
    let primary_md = BUTTON.classes(&[]).unwrap();
    assert!(primary_md.contains("bg-neutral-800"));
    assert!(primary_md.contains("hover:bg-neutral-700"));
    assert!(primary_md.contains("disabled:opacity-60"));
    assert!(primary_md.contains("text-md"));

    let secondary_sm = BUTTON
        .classes(&[("intent", "secondary"), ("size", "sm")])
        .unwrap();
    assert!(secondary_sm.contains("bg-white"));
    assert!(secondary_sm.contains("border-gray-200"));
    assert!(secondary_sm.contains("text-sm"));
    assert!(!secondary_sm.contains("bg-neutral-800"));
}

#[test]
fn button_selection_failures_name_the_offender() {
    let err = BUTTON.classes(&[("intent", "ghost")]).unwrap_err();
    assert_eq!(err.to_string(), "unknown value for variant axis intent: ghost");

    let err = BUTTON.classes(&[("tone", "primary")]).unwrap_err();
    assert_eq!(err.to_string(), "unknown variant axis: tone");
}

#[test]
fn card_tones_restyle_each_slot() {
    let default = CARD.resolve(&[]).unwrap();
    assert!(default.class("base").contains("bg-white"));
    assert_eq!(default.class("content"), "p-6");
    assert_eq!(default.class("image"), "w-full h-48 object-cover");

    let dark = CARD.resolve(&[("tone", "dark")]).unwrap();
    let dark_base = dark.class("base");
    assert!(dark_base.contains("bg-slate-900"));
    assert!(dark_base.contains("shadow-xl"));
    assert!(!dark_base.contains("shadow-md"));
    assert!(dark.class("title").contains("text-white"));

    let primary = CARD.resolve(&[("tone", "primary")]).unwrap();
    assert!(primary.class("base").contains("bg-blue-50"));
    assert!(primary.class("description").contains("text-blue-600"));
}

#[test]
fn card_override_widens_and_tilts_the_frame() {
    let resolved = CARD.resolve(&[]).unwrap();
    let framed = resolved.class_with(
        "base",
        "border-4 border-yellow-400 max-w-lg -rotate-1 hover:rotate-0 \
         transition-transform duration-300",
    );
    assert!(framed.contains("max-w-lg"));
    assert!(!framed.contains("max-w-md"));
    assert!(framed.contains("border-4"));
    assert!(framed.contains("-rotate-1"));
    assert!(framed.contains("hover:rotate-0"));
    assert!(framed.contains("transition-transform"));
    assert!(!framed.contains("transition-all"));
}

#[test]
fn resolution_is_idempotent_over_demo_output() {
    let first = BUTTON.classes_with(&[("size", "sm")], "w-full").unwrap();
    assert_eq!(resolve(&first), first);

    let card = CARD.resolve(&[("tone", "dark")]).unwrap();
    let base = card.class_with("base", "border-4 border-yellow-400");
    assert_eq!(resolve(&base), base);
}

#[test]
fn empty_inputs_resolve_to_empty_output() {
    assert_eq!(resolve(""), "");
    assert_eq!(resolve_all(&[]), "");
    assert_eq!(resolve_all(&["", "  ", ""]), "");
}

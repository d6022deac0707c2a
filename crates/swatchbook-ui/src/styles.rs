//! Class tables and composition helpers shared across the demo pages.
//!
//! Everything here is plain data and pure string composition so the tables
//! stay testable on native targets; the wasm-only components render whatever
//! these helpers produce.

use swatchbook_classes::{
    Slot, SlotAxis, SlotOption, SlotTheme, VariantAxis, VariantStyles, resolve_all,
};

/// Classes every merge-demo button carries regardless of state.
pub const MERGE_BUTTON_BASE: &str =
    "inline-flex items-center rounded-sm border px-4 py-2 text-sm font-medium cursor-pointer";

/// State fragment for a selected merge-demo button.
pub const MERGE_BUTTON_ACTIVE: &str =
    "bg-neutral-800 text-white border-neutral-900 hover:bg-neutral-700";

/// State fragment for an unselected merge-demo button.
pub const MERGE_BUTTON_INACTIVE: &str = "bg-white text-gray-500 border-gray-200 hover:bg-gray-50";

/// Fragment applied on top of either state while the button is disabled.
pub const MERGE_BUTTON_DISABLED: &str = "opacity-60 cursor-default";

/// Variant table for the declarative button demo.
pub const BUTTON: VariantStyles = VariantStyles {
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

/// Slot theme for the card demo: one axis (`tone`) restyling five slots.
pub const CARD: SlotTheme = SlotTheme {
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

/// Intent axis values for [`BUTTON`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonIntent {
    /// Filled emphasis styling.
    Primary,
    /// Quiet outline styling.
    Secondary,
}

impl ButtonIntent {
    /// Axis value this intent selects in [`BUTTON`].
    #[must_use]
    pub const fn as_value(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
        }
    }
}

/// Size axis values for [`BUTTON`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonSize {
    /// Compact text.
    Sm,
    /// Default text.
    Md,
}

impl ButtonSize {
    /// Axis value this size selects in [`BUTTON`].
    #[must_use]
    pub const fn as_value(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
        }
    }
}

/// Tone axis values for [`CARD`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardTone {
    /// Light background, dark text.
    Default,
    /// Slate background, light text.
    Dark,
    /// Blue-tinted accent styling.
    Primary,
}

impl CardTone {
    /// Axis value this tone selects in [`CARD`].
    #[must_use]
    pub const fn as_value(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Dark => "dark",
            Self::Primary => "primary",
        }
    }
}

/// Final class string for a merge-demo button in the given state, with
/// caller classes appended last so they win conflicts.
#[must_use]
pub fn merge_button_classes(active: bool, disabled: bool, extra: &str) -> String {
    let state = if active { MERGE_BUTTON_ACTIVE } else { MERGE_BUTTON_INACTIVE };
    let disabled_state = if disabled { MERGE_BUTTON_DISABLED } else { "" };
    resolve_all(&[MERGE_BUTTON_BASE, state, disabled_state, extra])
}

/// Class string for a top navigation link, highlighted when it points at
/// the current route.
#[must_use]
pub fn nav_link_classes(active: bool) -> String {
    let highlight = if active { "font-bold text-blue-600" } else { "" };
    resolve_all(&["text-gray-700 hover:text-blue-600 hover:underline", highlight])
}

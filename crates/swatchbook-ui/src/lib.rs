#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Swatchbook demo front-end.
//! This crate holds the Yew shell plus the class tables the demo pages
//! render; all class composition goes through `swatchbook-classes`.

pub mod styles;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
mod pages;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;

#[cfg(test)]
mod tests {
    use crate::styles::{BUTTON, CARD, merge_button_classes};
    use swatchbook_classes::resolve;

    #[test]
    fn demo_surfaces_produce_conflict_free_strings() {
        let surfaces = [
            merge_button_classes(true, false, ""),
            merge_button_classes(false, true, "w-full"),
            BUTTON.classes(&[("intent", "secondary")]).unwrap_or_default(),
        ];
        for classes in surfaces {
            assert_eq!(resolve(&classes), classes, "unstable surface: {classes}");
        }
    }

    #[test]
    fn card_theme_and_button_table_agree_on_defaults() {
        let button = BUTTON.classes(&[]).unwrap();
        assert!(button.contains("bg-neutral-800"));

        let card = CARD.defaults();
        assert!(card.class("base").contains("bg-white"));
        assert!(card.class("description").contains("text-gray-500"));
    }
}

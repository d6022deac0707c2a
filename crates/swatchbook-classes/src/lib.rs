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
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Utility-class composition for Tailwind-styled components.
//!
//! Layout: `groups.rs` (conflict-group classification), `merge.rs`
//! (last-write-wins resolution of ordered class lists), `variants.rs`
//! (declarative variant axes over a base fragment), `slots.rs` (variant
//! axes spanning multiple named slots).

pub mod groups;
pub mod merge;
pub mod slots;
pub mod variants;

pub use groups::{GroupKey, group_of};
pub use merge::{resolve, resolve_all};
pub use slots::{ResolvedSlots, Slot, SlotAxis, SlotOption, SlotTheme};
pub use variants::{VariantAxis, VariantError, VariantStyles};

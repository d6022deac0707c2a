//! Conflict-group classification for utility class tokens.
//!
//! Two tokens conflict when they set the same CSS property (two background
//! colors, two horizontal paddings). Classification runs a
//! longest-matching-prefix lookup against a fixed table of known utility
//! prefixes; tokens the table does not recognize belong to no group and are
//! always preserved by the merger.

use std::sync::LazyLock;

/// Stable identifier for a conflict group (e.g. `"bg"`, `"font-size"`).
///
/// Group keys carry no meaning beyond equality: two tokens with the same key
/// are mutually exclusive in a resolved class string.
pub type GroupKey = &'static str;

/// Known utility prefixes and the group each one maps into.
///
/// Entries ending in `-` match any continuation (`"bg-"` covers `bg-white`
/// and `bg-slate-900/40`). Entries without a trailing `-` match the bare
/// token or a continuation starting with `-` or `/` (`"shadow"` covers
/// `shadow`, `shadow-md`, and `shadow-[...]`; `"text-sm"` covers
/// `text-sm/relaxed` but not `text-smoke`). Where one utility family shares
/// a spelling with another, the longer entry wins: `text-xl` is a font size
/// while `text-gray-900` falls through to the text-color catch-all, and
/// `border-4` is a border width while `border-gray-200` is a border color.
const PREFIX_TABLE: &[(&str, GroupKey)] = &[
    // Layout.
    ("block", "display"),
    ("inline", "display"),
    ("flex", "display"),
    ("grid", "display"),
    ("hidden", "display"),
    ("static", "position"),
    ("fixed", "position"),
    ("absolute", "position"),
    ("relative", "position"),
    ("sticky", "position"),
    ("inset-", "inset"),
    ("top-", "top"),
    ("right-", "right"),
    ("bottom-", "bottom"),
    ("left-", "left"),
    ("z-", "z"),
    // Flex and grid.
    ("flex-row", "flex-direction"),
    ("flex-col", "flex-direction"),
    ("flex-wrap", "flex-wrap"),
    ("flex-nowrap", "flex-wrap"),
    ("flex-1", "flex"),
    ("flex-auto", "flex"),
    ("flex-initial", "flex"),
    ("flex-none", "flex"),
    ("grid-cols-", "grid-cols"),
    ("grid-rows-", "grid-rows"),
    ("col-span-", "col-span"),
    ("row-span-", "row-span"),
    ("items-", "items"),
    ("justify-", "justify"),
    ("gap-x-", "gap-x"),
    ("gap-y-", "gap-y"),
    ("gap-", "gap"),
    ("space-x-", "space-x"),
    ("space-y-", "space-y"),
    // Spacing.
    ("p-", "p"),
    ("px-", "px"),
    ("py-", "py"),
    ("pt-", "pt"),
    ("pr-", "pr"),
    ("pb-", "pb"),
    ("pl-", "pl"),
    ("m-", "m"),
    ("mx-", "mx"),
    ("my-", "my"),
    ("mt-", "mt"),
    ("mr-", "mr"),
    ("mb-", "mb"),
    ("ml-", "ml"),
    // Sizing.
    ("w-", "w"),
    ("min-w-", "min-w"),
    ("max-w-", "max-w"),
    ("h-", "h"),
    ("min-h-", "min-h"),
    ("max-h-", "max-h"),
    ("size-", "size"),
    // Typography.
    ("text-xs", "font-size"),
    ("text-sm", "font-size"),
    ("text-md", "font-size"),
    ("text-base", "font-size"),
    ("text-lg", "font-size"),
    ("text-xl", "font-size"),
    ("text-2xl", "font-size"),
    ("text-3xl", "font-size"),
    ("text-4xl", "font-size"),
    ("text-5xl", "font-size"),
    ("text-6xl", "font-size"),
    ("text-7xl", "font-size"),
    ("text-8xl", "font-size"),
    ("text-9xl", "font-size"),
    ("text-left", "text-align"),
    ("text-center", "text-align"),
    ("text-right", "text-align"),
    ("text-justify", "text-align"),
    ("text-start", "text-align"),
    ("text-end", "text-align"),
    ("text-", "text-color"),
    ("font-thin", "font-weight"),
    ("font-extralight", "font-weight"),
    ("font-light", "font-weight"),
    ("font-normal", "font-weight"),
    ("font-medium", "font-weight"),
    ("font-semibold", "font-weight"),
    ("font-bold", "font-weight"),
    ("font-extrabold", "font-weight"),
    ("font-black", "font-weight"),
    ("font-sans", "font-family"),
    ("font-serif", "font-family"),
    ("font-mono", "font-family"),
    ("leading-", "leading"),
    ("tracking-", "tracking"),
    ("underline", "text-decoration"),
    ("overline", "text-decoration"),
    ("line-through", "text-decoration"),
    ("no-underline", "text-decoration"),
    ("italic", "font-style"),
    ("not-italic", "font-style"),
    // Backgrounds and borders.
    ("bg-", "bg"),
    ("border", "border-w"),
    ("border-0", "border-w"),
    ("border-2", "border-w"),
    ("border-4", "border-w"),
    ("border-8", "border-w"),
    ("border-x", "border-w-x"),
    ("border-y", "border-w-y"),
    ("border-t", "border-w-t"),
    ("border-r", "border-w-r"),
    ("border-b", "border-w-b"),
    ("border-l", "border-w-l"),
    ("border-", "border-color"),
    ("rounded", "rounded"),
    // Effects, transforms, interactivity.
    ("shadow", "shadow"),
    ("opacity-", "opacity"),
    ("object-contain", "object-fit"),
    ("object-cover", "object-fit"),
    ("object-fill", "object-fit"),
    ("object-none", "object-fit"),
    ("object-scale-down", "object-fit"),
    ("object-", "object-position"),
    ("overflow-x-", "overflow-x"),
    ("overflow-y-", "overflow-y"),
    ("overflow-", "overflow"),
    ("transition", "transition"),
    ("duration-", "duration"),
    ("ease-", "ease"),
    ("delay-", "delay"),
    ("rotate-", "rotate"),
    ("scale-", "scale"),
    ("translate-x-", "translate-x"),
    ("translate-y-", "translate-y"),
    ("cursor-", "cursor"),
];

/// Table entries ordered longest-first so the first match is the longest.
static ORDERED: LazyLock<Vec<(&'static str, GroupKey)>> = LazyLock::new(|| {
    let mut entries = PREFIX_TABLE.to_vec();
    entries.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(b.0)));
    entries
});

/// Classify a bare utility token (no variant prefixes) into its conflict
/// group, or `None` when the token is unrecognized and never conflicts.
#[must_use]
pub fn group_of(base: &str) -> Option<GroupKey> {
    ORDERED
        .iter()
        .find(|&&(prefix, _)| matches_prefix(base, prefix))
        .map(|&(_, group)| group)
}

/// Prefix match with a token boundary: open-ended entries (trailing `-`)
/// match any continuation, closed entries only the bare token or a `-`/`/`
/// continuation.
fn matches_prefix(base: &str, prefix: &str) -> bool {
    let Some(rest) = base.strip_prefix(prefix) else {
        return false;
    };
    prefix.ends_with('-') || rest.is_empty() || rest.starts_with('-') || rest.starts_with('/')
}

//! Last-write-wins resolution of ordered utility class lists.
//!
//! [`resolve`] takes whitespace-separated tokens in application order and
//! drops every token that a later token overrides. Two tokens override each
//! other only when they carry the same variant prefix chain and classify
//! into the same conflict group; `hover:bg-white` never displaces
//! `bg-white`, and unrecognized tokens are always kept.

use std::collections::{HashMap, HashSet};

use crate::groups::{GroupKey, group_of};

/// Identity under which conflicting tokens displace each other: the verbatim
/// variant prefix chain plus the conflict group of the bare utility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct ConflictKey<'a> {
    variants: &'a str,
    group: GroupKey,
}

/// Resolve an ordered utility class list into a conflict-free class string.
///
/// Later tokens win within their conflict group, surviving tokens keep their
/// original relative order, and repeated identical tokens collapse to one
/// occurrence. The result is idempotent: resolving a resolved string changes
/// nothing.
///
/// ```
/// use swatchbook_classes::resolve;
///
/// assert_eq!(resolve("bg-white text-gray-500 bg-black"), "text-gray-500 bg-black");
/// assert_eq!(resolve("p-2 text-sm p-4"), "text-sm p-4");
/// assert_eq!(resolve("hover:bg-white bg-white"), "hover:bg-white bg-white");
/// ```
#[must_use]
pub fn resolve(classes: &str) -> String {
    let tokens: Vec<&str> = classes.split_whitespace().collect();
    let mut slots: Vec<Option<&str>> = tokens.iter().copied().map(Some).collect();
    let mut winners: HashMap<ConflictKey<'_>, usize> = HashMap::new();
    let mut literals: HashSet<&str> = HashSet::new();

    for (index, &token) in tokens.iter().enumerate() {
        if let Some(key) = conflict_key(token) {
            if let Some(previous) = winners.insert(key, index) {
                slots[previous] = None;
            }
        } else if !literals.insert(token) {
            // Ungrouped tokens never displace anything; exact repeats
            // collapse to the first occurrence.
            slots[index] = None;
        }
    }

    let surviving: Vec<&str> = slots.into_iter().flatten().collect();
    surviving.join(" ")
}

/// Resolve the concatenation of several class fragments.
///
/// Fragments are joined in order before resolution, so later fragments
/// override earlier ones exactly as later tokens do within one string.
#[must_use]
pub fn resolve_all(fragments: &[&str]) -> String {
    resolve(&fragments.join(" "))
}

/// Conflict identity of a single token, or `None` when its bare utility is
/// unrecognized.
fn conflict_key(token: &str) -> Option<ConflictKey<'_>> {
    let split = variant_split(token);
    let (variants, base) = token.split_at(split);
    // Negative utilities set the same property as their positive spelling.
    let bare = base.strip_prefix('-').unwrap_or(base);
    group_of(bare).map(|group| ConflictKey { variants, group })
}

/// Byte offset of the bare utility within `token`: one past the last `:`
/// that sits outside brackets, or zero when the token has no variant
/// prefixes. Colons inside `[...]` or `(...)` belong to arbitrary values
/// (`lg:bg-[url(http://x)]` splits after `lg:`).
fn variant_split(token: &str) -> usize {
    let mut depth = 0_u32;
    let mut split = 0;
    for (offset, ch) in token.char_indices() {
        match ch {
            '[' | '(' => depth += 1,
            ']' | ')' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => split = offset + 1,
            _ => {}
        }
    }
    split
}

#[cfg(test)]
mod tests {
    use super::{resolve, resolve_all, variant_split};

    #[test]
    fn later_token_wins_within_a_group() {
        assert_eq!(resolve("bg-white bg-black"), "bg-black");
        assert_eq!(resolve("text-gray-500 text-white"), "text-white");
    }

    #[test]
    fn winner_keeps_the_later_position() {
        assert_eq!(resolve("p-2 text-sm p-4"), "text-sm p-4");
        assert_eq!(resolve("bg-white p-2 bg-black p-4"), "bg-black p-4");
    }

    #[test]
    fn distinct_groups_never_interact() {
        assert_eq!(resolve("p-2 px-4"), "p-2 px-4");
        assert_eq!(resolve("text-sm text-gray-500"), "text-sm text-gray-500");
        assert_eq!(resolve("border border-gray-200"), "border border-gray-200");
    }

    #[test]
    fn variant_prefixes_are_distinct_groups() {
        assert_eq!(resolve("hover:bg-white bg-white"), "hover:bg-white bg-white");
        assert_eq!(resolve("hover:bg-white hover:bg-black"), "hover:bg-black");
        assert_eq!(
            resolve("sm:text-lg md:text-lg sm:text-xl"),
            "md:text-lg sm:text-xl"
        );
    }

    #[test]
    fn stacked_variants_match_verbatim_only() {
        assert_eq!(resolve("sm:hover:p-2 sm:hover:p-4"), "sm:hover:p-4");
        assert_eq!(
            resolve("sm:hover:p-2 hover:sm:p-4"),
            "sm:hover:p-2 hover:sm:p-4"
        );
    }

    #[test]
    fn bracketed_variant_prefixes_form_their_own_chain() {
        assert_eq!(
            resolve("[&.active]:font-bold [&.active]:font-medium"),
            "[&.active]:font-medium"
        );
        assert_eq!(
            resolve("font-light [&.active]:font-bold"),
            "font-light [&.active]:font-bold"
        );
    }

    #[test]
    fn unrecognized_tokens_pass_through_in_order() {
        assert_eq!(resolve("app-shell bg-white lorem"), "app-shell bg-white lorem");
        assert_eq!(resolve("app-shell app-shell"), "app-shell");
    }

    #[test]
    fn identical_tokens_collapse() {
        assert_eq!(resolve("rounded-sm rounded-sm"), "rounded-sm");
        assert_eq!(resolve("hover:underline hover:underline"), "hover:underline");
    }

    #[test]
    fn resolution_is_idempotent() {
        let cases = [
            "bg-white text-gray-500 bg-black p-2 p-4",
            "hover:bg-white bg-white sm:text-lg sm:text-xl",
            "app-shell border border-4 border-yellow-400",
            "font-light [&.active]:font-bold [&.active]:font-medium",
            "",
        ];
        for case in cases {
            let once = resolve(case);
            assert_eq!(resolve(&once), once, "resolving twice changed {case:?}");
        }
    }

    #[test]
    fn whitespace_only_input_is_empty() {
        assert_eq!(resolve(""), "");
        assert_eq!(resolve("   \t \n "), "");
    }

    #[test]
    fn negative_utilities_share_the_positive_group() {
        assert_eq!(resolve("rotate-1 -rotate-1"), "-rotate-1");
        assert_eq!(resolve("-rotate-1 hover:rotate-0"), "-rotate-1 hover:rotate-0");
    }

    #[test]
    fn border_width_upgrades_displace_the_default() {
        assert_eq!(
            resolve("border border-gray-200 border-4 border-yellow-400"),
            "border-4 border-yellow-400"
        );
    }

    #[test]
    fn fragments_join_before_resolution() {
        assert_eq!(
            resolve_all(&["bg-white p-2", "bg-black", "p-4"]),
            "bg-black p-4"
        );
        assert_eq!(resolve_all(&[]), "");
        assert_eq!(resolve_all(&["", "bg-white", ""]), "bg-white");
    }

    #[test]
    fn colons_inside_brackets_stay_with_the_base() {
        assert_eq!(variant_split("bg-[url(http://x)]"), 0);
        assert_eq!(variant_split("lg:bg-[url(http://x)]"), 3);
        assert_eq!(variant_split("[&.active]:font-bold"), 11);
        assert_eq!(variant_split("sm:hover:p-2"), 9);
        assert_eq!(variant_split("p-2"), 0);
    }

    #[test]
    fn slash_modifiers_resolve_with_their_family() {
        assert_eq!(resolve("text-sm text-sm/relaxed"), "text-sm/relaxed");
        assert_eq!(
            resolve("sm:text-base sm:text-base/[1.7]"),
            "sm:text-base/[1.7]"
        );
    }
}

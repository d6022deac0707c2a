//! Variant axes over multiple named slots.
//!
//! Components with several styled regions (a card's frame, image, title)
//! declare a [`SlotTheme`]: each slot carries base classes, and each axis
//! value contributes per-slot additions. Resolving a selection once yields a
//! [`ResolvedSlots`] view that hands out the final class string per slot.

use crate::merge::resolve_all;
use crate::variants::VariantError;

/// One named styled region and the classes it always carries.
#[derive(Debug, Clone, Copy)]
pub struct Slot {
    /// Slot name (`"base"`, `"title"`).
    pub name: &'static str,
    /// Classes the slot carries under every axis value.
    pub base: &'static str,
}

/// One declared value of a slot axis and its per-slot class additions.
#[derive(Debug, Clone, Copy)]
pub struct SlotOption {
    /// Value name (`"dark"`, `"primary"`).
    pub value: &'static str,
    /// `(slot, fragment)` pairs this value adds. Slots not listed keep
    /// their base classes unchanged.
    pub classes: &'static [(&'static str, &'static str)],
}

impl SlotOption {
    fn fragment(&self, slot: &str) -> Option<&'static str> {
        self.classes
            .iter()
            .find(|(name, _)| *name == slot)
            .map(|&(_, fragment)| fragment)
    }
}

/// One named axis of a slot theme.
#[derive(Debug, Clone, Copy)]
pub struct SlotAxis {
    /// Axis name (`"tone"`).
    pub name: &'static str,
    /// Value applied when the selection omits this axis. Must appear in
    /// `options`.
    pub default: &'static str,
    /// Declared values with their per-slot additions.
    pub options: &'static [SlotOption],
}

impl SlotAxis {
    fn option(&self, value: &str) -> Option<&'static SlotOption> {
        self.options.iter().find(|option| option.value == value)
    }
}

/// Slots plus the axes that refine them.
#[derive(Debug, Clone, Copy)]
pub struct SlotTheme {
    /// Styled regions in rendering order.
    pub slots: &'static [Slot],
    /// Axes in the order their additions apply.
    pub axes: &'static [SlotAxis],
}

impl SlotTheme {
    /// Resolve a selection of `(axis, value)` pairs into a per-slot view.
    ///
    /// Omitted axes take their declared default; naming the same axis twice
    /// keeps the later pair. A default missing from its own `options`
    /// contributes nothing rather than failing.
    ///
    /// # Errors
    ///
    /// Returns [`VariantError`] when the selection names an axis or value
    /// the theme does not declare.
    pub fn resolve(&self, selection: &[(&str, &str)]) -> Result<ResolvedSlots<'_>, VariantError> {
        for &(axis, value) in selection {
            let Some(declared) = self.axes.iter().find(|a| a.name == axis) else {
                return Err(VariantError::UnknownAxis { axis: axis.to_owned() });
            };
            if declared.option(value).is_none() {
                return Err(VariantError::UnknownValue {
                    axis: axis.to_owned(),
                    value: value.to_owned(),
                });
            }
        }

        let picks = self
            .axes
            .iter()
            .filter_map(|axis| {
                let value = selection
                    .iter()
                    .rev()
                    .find(|(name, _)| *name == axis.name)
                    .map_or(axis.default, |&(_, value)| value);
                axis.option(value)
            })
            .collect();
        Ok(ResolvedSlots { theme: self, picks })
    }

    /// Per-slot view with every axis at its declared default.
    ///
    /// Serves as a rendering fallback when a selection was rejected; a
    /// default missing from its own axis contributes nothing rather than
    /// failing.
    #[must_use]
    pub fn defaults(&self) -> ResolvedSlots<'_> {
        let picks = self
            .axes
            .iter()
            .filter_map(|axis| axis.option(axis.default))
            .collect();
        ResolvedSlots { theme: self, picks }
    }
}

/// A resolved selection: hands out the merged class string for each slot.
#[derive(Debug, Clone)]
pub struct ResolvedSlots<'a> {
    theme: &'a SlotTheme,
    picks: Vec<&'a SlotOption>,
}

impl ResolvedSlots<'_> {
    /// Final class string for `slot`: its base classes, then each picked
    /// axis value's addition for it, conflict-resolved. Unknown slot names
    /// yield an empty string.
    #[must_use]
    pub fn class(&self, slot: &str) -> String {
        self.class_with(slot, "")
    }

    /// Like [`class`](Self::class), with caller classes appended last so
    /// they win conflicts against the theme.
    #[must_use]
    pub fn class_with(&self, slot: &str, extra: &str) -> String {
        let Some(declared) = self.theme.slots.iter().find(|s| s.name == slot) else {
            return String::new();
        };
        let mut fragments = vec![declared.base];
        for pick in &self.picks {
            if let Some(fragment) = pick.fragment(slot) {
                fragments.push(fragment);
            }
        }
        fragments.push(extra);
        resolve_all(&fragments)
    }
}

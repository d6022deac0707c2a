//! Declarative variant axes over a base class list.
//!
//! A [`VariantStyles`] pairs a base fragment with named axes (`intent`,
//! `size`), each axis mapping values to class fragments and naming a
//! default. Selecting values yields the merged class string; asking for an
//! axis or value the table does not declare is a configuration error, not a
//! silent fallback.

use thiserror::Error;

use crate::merge::resolve_all;

/// Rejected variant selection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VariantError {
    /// The selection named an axis the style table does not declare.
    #[error("unknown variant axis: {axis}")]
    UnknownAxis {
        /// Axis name as given by the caller.
        axis: String,
    },
    /// The selection named a value the axis does not declare.
    #[error("unknown value for variant axis {axis}: {value}")]
    UnknownValue {
        /// Axis the value was given for.
        axis: String,
        /// Value as given by the caller.
        value: String,
    },
}

/// One named variant axis: its values, their class fragments, and the value
/// applied when a selection leaves the axis out.
#[derive(Debug, Clone, Copy)]
pub struct VariantAxis {
    /// Axis name (`"intent"`, `"size"`).
    pub name: &'static str,
    /// Value applied when the selection omits this axis. Must appear in
    /// `options`.
    pub default: &'static str,
    /// Declared values and the class fragment each contributes.
    pub options: &'static [(&'static str, &'static str)],
}

impl VariantAxis {
    /// Class fragment for `value`, or `None` when the axis does not declare
    /// it.
    #[must_use]
    pub fn fragment(&self, value: &str) -> Option<&'static str> {
        self.options
            .iter()
            .find(|(candidate, _)| *candidate == value)
            .map(|&(_, fragment)| fragment)
    }
}

/// Base class list plus the variant axes that refine it.
#[derive(Debug, Clone, Copy)]
pub struct VariantStyles {
    /// Classes every rendering carries, before axis fragments.
    pub base: &'static str,
    /// Axes in the order their fragments apply.
    pub axes: &'static [VariantAxis],
}

impl VariantStyles {
    /// Merged class string for a selection of `(axis, value)` pairs.
    ///
    /// Omitted axes take their declared default; naming the same axis twice
    /// keeps the later pair. Axis fragments apply in declaration order after
    /// the base, then the whole list is conflict-resolved.
    ///
    /// # Errors
    ///
    /// Returns [`VariantError`] when the selection names an axis or value
    /// the table does not declare.
    pub fn classes(&self, selection: &[(&str, &str)]) -> Result<String, VariantError> {
        self.classes_with(selection, "")
    }

    /// Like [`classes`](Self::classes), with caller classes appended after
    /// the axis fragments so they win conflicts against the table.
    ///
    /// # Errors
    ///
    /// Returns [`VariantError`] when the selection names an axis or value
    /// the table does not declare.
    pub fn classes_with(
        &self,
        selection: &[(&str, &str)],
        extra: &str,
    ) -> Result<String, VariantError> {
        for &(axis, value) in selection {
            let Some(declared) = self.axes.iter().find(|a| a.name == axis) else {
                return Err(VariantError::UnknownAxis { axis: axis.to_owned() });
            };
            if declared.fragment(value).is_none() {
                return Err(VariantError::UnknownValue {
                    axis: axis.to_owned(),
                    value: value.to_owned(),
                });
            }
        }

        let mut fragments = vec![self.base];
        for axis in self.axes {
            let value = selection
                .iter()
                .rev()
                .find(|(name, _)| *name == axis.name)
                .map_or(axis.default, |&(_, value)| value);
            if let Some(fragment) = axis.fragment(value) {
                fragments.push(fragment);
            }
        }
        fragments.push(extra);
        Ok(resolve_all(&fragments))
    }
}

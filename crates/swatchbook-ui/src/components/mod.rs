pub(crate) mod icons;
pub(crate) mod merge_button;
pub(crate) mod shell;
pub(crate) mod slot_card;
pub(crate) mod variant_button;

pub(crate) mod button_merge;
pub(crate) mod button_variants;
pub(crate) mod card_slots;
pub(crate) mod home;
pub(crate) mod not_found;
pub(crate) mod playground;

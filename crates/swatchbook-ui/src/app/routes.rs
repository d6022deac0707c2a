//! Routing definitions for the Swatchbook demo shell.
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Home,
    #[at("/playground")]
    Playground,
    #[at("/button-merge")]
    ButtonMerge,
    #[at("/button-variants")]
    ButtonVariants,
    #[at("/card-slots")]
    CardSlots,
    #[not_found]
    #[at("/404")]
    NotFound,
}

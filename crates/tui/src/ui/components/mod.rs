//! UI components: registration form, roster table, notices and hints.

pub mod common;
pub mod component;
pub mod form;
pub mod hint_bar;
pub mod notices;
pub mod roster;

pub(crate) use component::Component;
pub use form::FormComponent;
pub use hint_bar::HintBarComponent;
pub use notices::NoticesComponent;
pub use roster::RosterComponent;

pub use breadcrumbs::{Breadcrumb, Breadcrumbs};
pub use button::SimpleButton;
pub use initialized::Initialized;
pub use loading_spinner::LoadingSpinner;
pub use page::BasePageContainer;

mod breadcrumbs;
mod button;
mod initialized;
mod loading_spinner;
mod page;

pub const NON_BREAKING_SPACE: &str = "\u{a0}";

#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[allow(dead_code)]
pub enum ButtonState {
    #[default]
    Enabled,
    Loading,
    Disabled,
    Hidden,
}

#[derive(Clone, Copy, Debug)]
#[allow(dead_code)]
pub enum ButtonColor {
    Danger,
    Info,
    Light,
    Success,
    White,
}

impl ButtonColor {

    pub fn as_class(&self) -> &'static str {
        match self {
            ButtonColor::Danger => "is-danger",
            ButtonColor::Info => "is-info",
            ButtonColor::Light => "is-light",
            ButtonColor::Success => "is-success",
            ButtonColor::White => "is-white",
        }
    }
}

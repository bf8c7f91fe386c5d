//! UI components for the Folio shell.

mod contact_form;
mod contact_overlay;
mod hero;
mod mobile_menu;
mod nav_header;
pub mod portfolio;
mod social_dropdown;
mod splash;

pub use contact_form::ContactFormView;
pub use contact_overlay::ContactOverlay;
pub use hero::Hero;
pub use mobile_menu::MobileMenu;
pub use nav_header::NavHeader;
pub use social_dropdown::SocialDropdown;
pub use splash::Splash;

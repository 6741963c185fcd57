//! Page components for the application.
//!
//! Each page is a Leptos component rendered by the route outlet. The pages
//! carry no behavior of their own beyond linking to each other.

pub mod aac;
pub mod login;
pub mod not_found;
pub mod signup;

// Re-export all page components for convenient access
pub use aac::AacInterface;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use signup::SignUpPage;

/// The views the route table dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Login,
    SignUp,
    AacInterface,
}

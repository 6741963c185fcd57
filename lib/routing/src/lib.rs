//! Client-side routing for the aac-portal application.
//!
//! This crate provides:
//! - A validated, immutable route table (`Route`, `RouteTable`)
//! - Swappable navigation guards (`AllowAll`, `RequireAuth`, `RedirectIf`)
//! - The `Navigator`, which runs guards and tracks the active route
//! - Router configuration (`RouterConfig`, `FallbackPolicy`)
//!
//! # Example
//!
//! ```
//! use aac_portal_routing::{AllowAll, Navigator, Route, RouteTable};
//!
//! let table = RouteTable::new(vec![
//!     Route::new("/", "login", "LoginPage"),
//!     Route::new("/signup", "signup", "SignUpPage"),
//! ])
//! .expect("routes are unique");
//!
//! let navigator = Navigator::builder(table).guard(AllowAll).build();
//! let navigation = navigator.navigate("/signup").expect("navigation succeeds");
//!
//! assert!(navigation.proceeded());
//! assert_eq!(navigation.view(), Some(&"SignUpPage"));
//! ```

pub mod config;
pub mod error;
pub mod guard;
pub mod navigation;
pub mod navigator;
pub mod route;

// Re-export main types at crate root
pub use config::{FallbackPolicy, RouterConfig};
pub use error::RoutingError;
pub use guard::{AllowAll, GuardDecision, NavigationGuard, RedirectIf, RequireAuth, SessionStatus};
pub use navigation::{Navigation, NavigationRequest, NavigationState, Resolution, RouteLocation};
pub use navigator::{Navigator, NavigatorBuilder};
pub use route::{Route, RouteName, RouteTable};

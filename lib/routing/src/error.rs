//! Error types for the routing crate.
//!
//! Errors are designed for layered context using rootcause:
//! - Route table validation failures surface while building the router
//! - Navigation failures surface from `Navigator::navigate`

use std::fmt;

/// Errors from building a route table or resolving a navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutingError {
    /// A route path does not start with `/`.
    InvalidPath { path: String },
    /// Two routes share the same path.
    DuplicatePath { path: String },
    /// Two routes share the same name.
    DuplicateName { name: String },
    /// No route carries the requested name.
    UnknownRoute { name: String },
    /// A navigation or redirect target could not be parsed.
    InvalidTarget { target: String, reason: String },
    /// Redirects did not settle within the configured number of hops.
    RedirectLoop { target: String, hops: usize },
}

impl fmt::Display for RoutingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPath { path } => {
                write!(f, "route path '{path}' must start with '/'")
            }
            Self::DuplicatePath { path } => {
                write!(f, "duplicate route path: {path}")
            }
            Self::DuplicateName { name } => {
                write!(f, "duplicate route name: {name}")
            }
            Self::UnknownRoute { name } => {
                write!(f, "no route named '{name}'")
            }
            Self::InvalidTarget { target, reason } => {
                write!(f, "invalid navigation target '{target}': {reason}")
            }
            Self::RedirectLoop { target, hops } => {
                write!(
                    f,
                    "navigation to '{target}' exceeded {hops} redirects"
                )
            }
        }
    }
}

impl std::error::Error for RoutingError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_path_display() {
        let err = RoutingError::DuplicatePath {
            path: "/aac".to_string(),
        };
        assert!(err.to_string().contains("duplicate route path"));
        assert!(err.to_string().contains("/aac"));
    }

    #[test]
    fn invalid_target_display() {
        let err = RoutingError::InvalidTarget {
            target: "signup".to_string(),
            reason: "not absolute".to_string(),
        };
        assert!(err.to_string().contains("signup"));
        assert!(err.to_string().contains("not absolute"));
    }

    #[test]
    fn redirect_loop_display() {
        let err = RoutingError::RedirectLoop {
            target: "/aac".to_string(),
            hops: 8,
        };
        assert!(err.to_string().contains("/aac"));
        assert!(err.to_string().contains('8'));
    }
}

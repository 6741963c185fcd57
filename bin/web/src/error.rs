//! Domain error types for application startup.
//!
//! Mount failures are not recovered from: the page is left without a
//! mounted application and the error is reported to the host page.

use std::fmt;

/// Errors from bootstrapping and mounting the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MountError {
    /// Configuration could not be loaded.
    Config { details: String },
    /// The router could not be built from the route table.
    RouterInstall { details: String },
    /// Mount was attempted before a router was installed.
    RouterNotInstalled,
    /// The page has no window or document.
    NoDocument,
    /// No element carries the reserved host id.
    HostElementMissing { id: String },
}

impl fmt::Display for MountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config { details } => {
                write!(f, "failed to load configuration: {details}")
            }
            Self::RouterInstall { details } => {
                write!(f, "failed to install router: {details}")
            }
            Self::RouterNotInstalled => {
                write!(f, "cannot mount an application without a router")
            }
            Self::NoDocument => write!(f, "no document available to mount into"),
            Self::HostElementMissing { id } => {
                write!(f, "host element '#{id}' not found")
            }
        }
    }
}

impl std::error::Error for MountError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_element_missing_display() {
        let err = MountError::HostElementMissing {
            id: "app".to_string(),
        };
        assert!(err.to_string().contains("'#app'"));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn router_install_display() {
        let err = MountError::RouterInstall {
            details: "duplicate route path: /".to_string(),
        };
        assert!(err.to_string().contains("install router"));
        assert!(err.to_string().contains("duplicate route path"));
    }
}

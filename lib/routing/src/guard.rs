//! Navigation guards.
//!
//! A guard runs before every navigation and decides whether it proceeds, is
//! redirected, or is blocked. Guards are strategies: the navigator holds them
//! as trait objects so a policy can be swapped without touching the router.
//!
//! - [`AllowAll`]: traces the destination and always proceeds
//! - [`RequireAuth`]: redirects unauthenticated users away from protected routes
//! - [`RedirectIf`]: redirects whenever a predicate over the request holds

use crate::navigation::NavigationRequest;
use crate::route::RouteName;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

/// A guard's verdict on a navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Let the navigation continue.
    Proceed,
    /// Abandon this target and navigate to another one instead.
    Redirect(String),
    /// Abandon the navigation and keep the active route.
    Block(String),
}

/// Interception point invoked before a navigation completes.
pub trait NavigationGuard: Send + Sync {
    /// Decides the fate of a navigation.
    fn check(&self, request: &NavigationRequest) -> GuardDecision;

    /// Name used in diagnostics.
    fn name(&self) -> &'static str {
        "guard"
    }
}

/// Pass-through guard.
///
/// Traces the fully-qualified destination and proceeds. It never inspects
/// `from`, never redirects and never blocks.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl NavigationGuard for AllowAll {
    fn check(&self, request: &NavigationRequest) -> GuardDecision {
        info!("Navigating to: {}", request.to().full_path());
        GuardDecision::Proceed
    }

    fn name(&self) -> &'static str {
        "allow_all"
    }
}

/// Source of the current authentication state.
pub trait SessionStatus: Send + Sync {
    /// Returns true if the current user is signed in.
    fn is_authenticated(&self) -> bool;
}

/// Redirects unauthenticated navigations to protected routes.
///
/// Navigations to routes not marked protected, and to the login path itself,
/// always proceed.
pub struct RequireAuth {
    session: Arc<dyn SessionStatus>,
    protected: HashSet<RouteName>,
    login_path: String,
}

impl RequireAuth {
    /// Creates a guard that sends unauthenticated users to `login_path`.
    #[must_use]
    pub fn new(session: Arc<dyn SessionStatus>, login_path: impl Into<String>) -> Self {
        Self {
            session,
            protected: HashSet::new(),
            login_path: login_path.into(),
        }
    }

    /// Marks a route as requiring authentication.
    #[must_use]
    pub fn protect(mut self, name: impl Into<RouteName>) -> Self {
        self.protected.insert(name.into());
        self
    }

    /// Returns true if the named route requires authentication.
    #[must_use]
    pub fn is_protected(&self, name: &RouteName) -> bool {
        self.protected.contains(name)
    }
}

impl fmt::Debug for RequireAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequireAuth")
            .field("protected", &self.protected)
            .field("login_path", &self.login_path)
            .finish_non_exhaustive()
    }
}

impl NavigationGuard for RequireAuth {
    fn check(&self, request: &NavigationRequest) -> GuardDecision {
        let to = request.to();
        if to.path() == self.login_path {
            return GuardDecision::Proceed;
        }
        let protected = to.name().is_some_and(|name| self.is_protected(name));
        if protected && !self.session.is_authenticated() {
            debug!(
                target_path = %to.full_path(),
                login_path = %self.login_path,
                "unauthenticated navigation to protected route"
            );
            return GuardDecision::Redirect(self.login_path.clone());
        }
        GuardDecision::Proceed
    }

    fn name(&self) -> &'static str {
        "require_auth"
    }
}

type Predicate = dyn Fn(&NavigationRequest) -> bool + Send + Sync;

/// Redirects to a fixed target whenever a predicate holds.
pub struct RedirectIf {
    predicate: Box<Predicate>,
    target: String,
}

impl RedirectIf {
    /// Creates a guard redirecting to `target` when `predicate` returns true.
    #[must_use]
    pub fn new<F>(predicate: F, target: impl Into<String>) -> Self
    where
        F: Fn(&NavigationRequest) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Box::new(predicate),
            target: target.into(),
        }
    }

    /// Redirects navigations that match no route.
    #[must_use]
    pub fn unmatched(target: impl Into<String>) -> Self {
        Self::new(|request| !request.to().is_matched(), target)
    }
}

impl fmt::Debug for RedirectIf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedirectIf")
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}

impl NavigationGuard for RedirectIf {
    fn check(&self, request: &NavigationRequest) -> GuardDecision {
        // Never redirect a request onto itself.
        if (self.predicate)(request) && request.to().full_path() != self.target {
            GuardDecision::Redirect(self.target.clone())
        } else {
            GuardDecision::Proceed
        }
    }

    fn name(&self) -> &'static str {
        "redirect_if"
    }
}

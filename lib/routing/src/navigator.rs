//! The navigator: route resolution, guard execution and the active route.
//!
//! The navigator is built once at startup and shared by reference with
//! everything that renders or triggers navigation. Navigations are
//! serialized: the active resolution is read before the guards run and
//! committed after they have all proceeded.

use crate::config::{FallbackPolicy, RouterConfig};
use crate::error::RoutingError;
use crate::guard::{AllowAll, GuardDecision, NavigationGuard};
use crate::navigation::{
    Navigation, NavigationRequest, NavigationState, Resolution, RouteLocation,
};
use crate::route::{Route, RouteTable};
use aac_portal_core::{Location, Result};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, instrument, warn};

/// Builder for a [`Navigator`].
pub struct NavigatorBuilder<V> {
    table: RouteTable<V>,
    guards: Vec<Arc<dyn NavigationGuard>>,
    config: RouterConfig,
}

impl<V> NavigatorBuilder<V> {
    /// Registers a guard. Guards run in registration order.
    #[must_use]
    pub fn guard(mut self, guard: impl NavigationGuard + 'static) -> Self {
        self.guards.push(Arc::new(guard));
        self
    }

    /// Registers an already shared guard.
    #[must_use]
    pub fn shared_guard(mut self, guard: Arc<dyn NavigationGuard>) -> Self {
        self.guards.push(guard);
        self
    }

    /// Sets the router configuration.
    #[must_use]
    pub fn config(mut self, config: RouterConfig) -> Self {
        self.config = config;
        self
    }

    /// Builds the navigator.
    ///
    /// If no guard was registered, [`AllowAll`] is installed so every
    /// navigation is still traced.
    #[must_use]
    pub fn build(mut self) -> Navigator<V> {
        info!(routes = self.table.len(), "Creating router...");
        if self.guards.is_empty() {
            self.guards.push(Arc::new(AllowAll));
        }
        debug!(
            guards = ?self.guards.iter().map(|g| g.name()).collect::<Vec<_>>(),
            base_url = %self.config.base_url,
            "router guards installed"
        );
        info!("Router created.");

        Navigator {
            table: self.table,
            guards: self.guards,
            config: self.config,
            current: Mutex::new(None),
        }
    }
}

/// Resolves navigations against a route table through a chain of guards.
pub struct Navigator<V> {
    table: RouteTable<V>,
    guards: Vec<Arc<dyn NavigationGuard>>,
    config: RouterConfig,
    current: Mutex<Option<Resolution<V>>>,
}

impl<V> Navigator<V> {
    /// Starts building a navigator over `table`.
    #[must_use]
    pub fn builder(table: RouteTable<V>) -> NavigatorBuilder<V> {
        NavigatorBuilder {
            table,
            guards: Vec::new(),
            config: RouterConfig::default(),
        }
    }

    /// Returns the route table.
    #[must_use]
    pub fn table(&self) -> &RouteTable<V> {
        &self.table
    }

    /// Returns the router configuration.
    #[must_use]
    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Looks up the route for an in-app path without navigating.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<&Route<V>> {
        self.table.match_path(path)
    }

    /// Returns the history-mode browser URL for an in-app path.
    #[must_use]
    pub fn href(&self, full_path: &str) -> String {
        self.config.base_url.join(full_path)
    }

    fn lock(&self) -> MutexGuard<'_, Option<Resolution<V>>> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<V: Clone> Navigator<V> {
    /// Returns the active resolution, absent before the first navigation.
    #[must_use]
    pub fn current(&self) -> Option<Resolution<V>> {
        self.lock().clone()
    }

    /// Navigates to a target such as `/aac?board=2`.
    ///
    /// The base URL is stripped from the target if present. Every registered
    /// guard runs once per hop, including for unmatched paths.
    ///
    /// # Errors
    ///
    /// Returns an error if the target (or a redirect target) cannot be
    /// parsed, or if redirects exceed `max_redirects`.
    #[instrument(skip(self))]
    pub fn navigate(&self, target: &str) -> Result<Navigation<V>, RoutingError> {
        let location = self.parse_browser_target(target)?;
        self.navigate_location(location)
    }

    /// Navigates to the route with the given name.
    ///
    /// # Errors
    ///
    /// Returns an error if no route has that name, or if the navigation
    /// itself fails.
    pub fn navigate_named(&self, name: &str) -> Result<Navigation<V>, RoutingError> {
        let route = self
            .table
            .by_name(name)
            .ok_or_else(|| RoutingError::UnknownRoute {
                name: name.to_string(),
            })?;
        let location = self.parse_in_app_target(route.path())?;
        self.navigate_location(location)
    }

    fn navigate_location(
        &self,
        location: Location,
    ) -> Result<Navigation<V>, RoutingError> {
        let from = self.lock().as_ref().map(Resolution::route_location);
        let original = NavigationRequest::new(self.route_location(location), from.clone());

        let mut request = original.clone();
        let mut redirects = Vec::new();

        loop {
            match self.run_guards(&request) {
                GuardDecision::Proceed => {}
                GuardDecision::Redirect(target) => {
                    let next =
                        self.follow_redirect(&original, &request, &target, &mut redirects)?;
                    request = NavigationRequest::new(self.route_location(next), from.clone());
                    continue;
                }
                GuardDecision::Block(reason) => {
                    warn!(
                        target_path = %request.to().full_path(),
                        %reason,
                        "navigation blocked"
                    );
                    return Ok(Navigation::new(
                        original,
                        NavigationState::Blocked { reason },
                        redirects,
                        self.current(),
                    ));
                }
            }

            let location = request.to().location().clone();
            let resolution = match self.table.match_path(location.path()) {
                Some(route) => Resolution::Matched {
                    location,
                    route: route.clone(),
                },
                None => match &self.config.fallback {
                    FallbackPolicy::NotFound => {
                        warn!(path = %location.path(), "no route matches");
                        Resolution::Unmatched { location }
                    }
                    FallbackPolicy::Redirect { to } => {
                        let next =
                            self.follow_redirect(&original, &request, to, &mut redirects)?;
                        request = NavigationRequest::new(self.route_location(next), from.clone());
                        continue;
                    }
                },
            };

            *self.lock() = Some(resolution.clone());

            let state = if redirects.is_empty() {
                NavigationState::Proceeding
            } else {
                NavigationState::Redirected {
                    to: resolution.location().clone(),
                }
            };
            return Ok(Navigation::new(original, state, redirects, Some(resolution)));
        }
    }

    fn run_guards(&self, request: &NavigationRequest) -> GuardDecision {
        for guard in &self.guards {
            let decision = guard.check(request);
            debug!(guard = guard.name(), ?decision, "guard decided");
            if decision != GuardDecision::Proceed {
                return decision;
            }
        }
        GuardDecision::Proceed
    }

    fn follow_redirect(
        &self,
        original: &NavigationRequest,
        request: &NavigationRequest,
        target: &str,
        redirects: &mut Vec<Location>,
    ) -> Result<Location, RoutingError> {
        redirects.push(request.to().location().clone());
        if redirects.len() > self.config.max_redirects {
            return Err(RoutingError::RedirectLoop {
                target: original.to().full_path(),
                hops: self.config.max_redirects,
            }
            .into());
        }
        debug!(
            from = %request.to().full_path(),
            to = target,
            "redirecting navigation"
        );
        self.parse_in_app_target(target)
    }

    /// Parses a browser path, which may still carry the base URL.
    fn parse_browser_target(&self, target: &str) -> Result<Location, RoutingError> {
        let stripped = self.config.base_url.strip(target);
        Self::parse_location(target, &stripped)
    }

    /// Parses a path already relative to the base URL: route paths and
    /// redirect targets.
    fn parse_in_app_target(&self, target: &str) -> Result<Location, RoutingError> {
        Self::parse_location(target, target)
    }

    fn parse_location(target: &str, in_app: &str) -> Result<Location, RoutingError> {
        Location::parse(in_app).map_err(|e| {
            RoutingError::InvalidTarget {
                target: target.to_string(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    fn route_location(&self, location: Location) -> RouteLocation {
        let name = self
            .table
            .match_path(location.path())
            .map(|route| route.name().clone());
        RouteLocation::new(location, name)
    }
}

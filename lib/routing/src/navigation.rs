//! Navigation requests and their outcomes.

use crate::route::{Route, RouteName};
use aac_portal_core::Location;

/// A location together with the name of the route it matched, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteLocation {
    location: Location,
    name: Option<RouteName>,
}

impl RouteLocation {
    /// Creates a route location.
    #[must_use]
    pub fn new(location: Location, name: Option<RouteName>) -> Self {
        Self { location, name }
    }

    /// Returns the parsed location.
    #[must_use]
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Returns the path component.
    #[must_use]
    pub fn path(&self) -> &str {
        self.location.path()
    }

    /// Returns `path[?query][#hash]`.
    #[must_use]
    pub fn full_path(&self) -> String {
        self.location.full_path()
    }

    /// Returns the matched route name.
    #[must_use]
    pub fn name(&self) -> Option<&RouteName> {
        self.name.as_ref()
    }

    /// Returns true if a route matched this location.
    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.name.is_some()
    }
}

/// An in-flight navigation handed to the guards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    to: RouteLocation,
    from: Option<RouteLocation>,
}

impl NavigationRequest {
    /// Creates a navigation request.
    #[must_use]
    pub fn new(to: RouteLocation, from: Option<RouteLocation>) -> Self {
        Self { to, from }
    }

    /// Returns the navigation target.
    #[must_use]
    pub fn to(&self) -> &RouteLocation {
        &self.to
    }

    /// Returns the active location, absent on the initial navigation.
    #[must_use]
    pub fn from(&self) -> Option<&RouteLocation> {
        self.from.as_ref()
    }

    /// Returns true if this is the first navigation of the application.
    #[must_use]
    pub fn is_initial(&self) -> bool {
        self.from.is_none()
    }
}

/// How a navigation settled.
///
/// A navigation is pending only while the navigator runs the guards; every
/// [`Navigation`] handed out has already settled into one of these states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationState {
    /// The navigation completed at the requested location.
    Proceeding,
    /// The navigation completed after one or more redirects.
    Redirected { to: Location },
    /// A guard rejected the navigation; the active route is unchanged.
    Blocked { reason: String },
}

/// What the router settled on for a location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<V> {
    /// A route matched.
    Matched { location: Location, route: Route<V> },
    /// No route matched and the fallback policy kept the location.
    Unmatched { location: Location },
}

impl<V> Resolution<V> {
    /// Returns the resolved location.
    #[must_use]
    pub fn location(&self) -> &Location {
        match self {
            Self::Matched { location, .. } | Self::Unmatched { location } => location,
        }
    }

    /// Returns the matched route.
    #[must_use]
    pub fn route(&self) -> Option<&Route<V>> {
        match self {
            Self::Matched { route, .. } => Some(route),
            Self::Unmatched { .. } => None,
        }
    }

    /// Returns the view to render, if a route matched.
    #[must_use]
    pub fn view(&self) -> Option<&V> {
        self.route().map(Route::view)
    }

    /// Returns the location paired with the matched route name.
    #[must_use]
    pub fn route_location(&self) -> RouteLocation {
        RouteLocation::new(
            self.location().clone(),
            self.route().map(|route| route.name().clone()),
        )
    }
}

/// The record of a resolved navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation<V> {
    request: NavigationRequest,
    state: NavigationState,
    redirects: Vec<Location>,
    resolution: Option<Resolution<V>>,
}

impl<V> Navigation<V> {
    pub(crate) fn new(
        request: NavigationRequest,
        state: NavigationState,
        redirects: Vec<Location>,
        resolution: Option<Resolution<V>>,
    ) -> Self {
        Self {
            request,
            state,
            redirects,
            resolution,
        }
    }

    /// Returns the request as originally issued.
    #[must_use]
    pub fn request(&self) -> &NavigationRequest {
        &self.request
    }

    /// Returns the terminal state.
    #[must_use]
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// Returns the locations that were redirected away from, in order.
    #[must_use]
    pub fn redirects(&self) -> &[Location] {
        &self.redirects
    }

    /// Returns the active resolution after this navigation.
    ///
    /// For a blocked navigation this is the resolution that was already
    /// active, which is absent if nothing has been resolved yet.
    #[must_use]
    pub fn resolution(&self) -> Option<&Resolution<V>> {
        self.resolution.as_ref()
    }

    /// Returns the view to render after this navigation.
    #[must_use]
    pub fn view(&self) -> Option<&V> {
        self.resolution.as_ref().and_then(Resolution::view)
    }

    /// Returns true if the navigation was not blocked.
    #[must_use]
    pub fn proceeded(&self) -> bool {
        matches!(
            self.state,
            NavigationState::Proceeding | NavigationState::Redirected { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(target: &str) -> Location {
        Location::parse(target).expect("valid location")
    }

    #[test]
    fn request_without_from_is_initial() {
        let request = NavigationRequest::new(
            RouteLocation::new(location("/"), Some("login".into())),
            None,
        );
        assert!(request.is_initial());
        assert!(request.to().is_matched());
        assert_eq!(request.to().full_path(), "/");
    }

    #[test]
    fn matched_resolution_exposes_view_and_name() {
        let resolution = Resolution::Matched {
            location: location("/aac#top"),
            route: Route::new("/aac", "aac", 7_u8),
        };
        assert_eq!(resolution.view(), Some(&7));
        let route_location = resolution.route_location();
        assert_eq!(
            route_location.name().map(RouteName::as_str),
            Some("aac")
        );
        assert_eq!(route_location.full_path(), "/aac#top");
    }

    #[test]
    fn unmatched_resolution_has_no_view() {
        let resolution: Resolution<u8> = Resolution::Unmatched {
            location: location("/unknown"),
        };
        assert!(resolution.view().is_none());
        assert!(!resolution.route_location().is_matched());
    }

    #[test]
    fn only_blocked_navigation_has_not_proceeded() {
        let request = NavigationRequest::new(RouteLocation::new(location("/aac"), None), None);
        let settled = |state| Navigation::<u8>::new(request.clone(), state, Vec::new(), None);

        assert!(settled(NavigationState::Proceeding).proceeded());
        assert!(settled(NavigationState::Redirected { to: location("/") }).proceeded());
        assert!(
            !settled(NavigationState::Blocked {
                reason: "locked".to_string()
            })
            .proceeded()
        );
    }
}

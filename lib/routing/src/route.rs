//! Routes and the route table.
//!
//! A route associates an absolute path with a unique name and a view. The
//! table is validated once on construction and never changes afterwards.

use crate::error::RoutingError;
use rootcause::prelude::Report;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Unique symbolic name of a route.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteName(String);

impl RouteName {
    /// Creates a route name from a string.
    #[must_use]
    pub fn new(name: String) -> Self {
        Self(name)
    }

    /// Returns the route name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RouteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for RouteName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for RouteName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl PartialEq<str> for RouteName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for RouteName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A static association between a path, a name and a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route<V> {
    path: String,
    name: RouteName,
    view: V,
}

impl<V> Route<V> {
    /// Creates a new route.
    #[must_use]
    pub fn new(path: impl Into<String>, name: impl Into<RouteName>, view: V) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            view,
        }
    }

    /// Returns the route's path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the route's name.
    #[must_use]
    pub fn name(&self) -> &RouteName {
        &self.name
    }

    /// Returns the view rendered for this route.
    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }
}

/// An ordered, validated set of routes.
///
/// Paths are matched exactly, in table order; the first match wins.
#[derive(Debug, Clone)]
pub struct RouteTable<V> {
    routes: Vec<Route<V>>,
}

impl<V> RouteTable<V> {
    /// Builds a route table.
    ///
    /// # Errors
    ///
    /// Returns an error if any path is not absolute, or if two routes share a
    /// path or a name.
    pub fn new(routes: Vec<Route<V>>) -> Result<Self, Report<RoutingError>> {
        let mut paths = HashSet::new();
        let mut names = HashSet::new();

        for route in &routes {
            if !route.path.starts_with('/') {
                return Err(RoutingError::InvalidPath {
                    path: route.path.clone(),
                }
                .into());
            }
            if !paths.insert(route.path.as_str()) {
                return Err(RoutingError::DuplicatePath {
                    path: route.path.clone(),
                }
                .into());
            }
            if !names.insert(route.name.as_str()) {
                return Err(RoutingError::DuplicateName {
                    name: route.name.to_string(),
                }
                .into());
            }
        }

        Ok(Self { routes })
    }

    /// Returns the first route whose path equals `path` exactly.
    #[must_use]
    pub fn match_path(&self, path: &str) -> Option<&Route<V>> {
        self.routes.iter().find(|route| route.path == path)
    }

    /// Returns the route with the given name.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&Route<V>> {
        self.routes.iter().find(|route| route.name == name)
    }

    /// Iterates the routes in table order.
    pub fn iter(&self) -> impl Iterator<Item = &Route<V>> {
        self.routes.iter()
    }

    /// Returns the number of routes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns true if the table has no routes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RouteTable<&'static str> {
        RouteTable::new(vec![
            Route::new("/", "login", "LoginPage"),
            Route::new("/signup", "signup", "SignUpPage"),
            Route::new("/aac", "aac", "AACInterface"),
        ])
        .expect("routes should be valid")
    }

    #[test]
    fn match_path_is_exact() {
        let table = table();
        assert_eq!(
            table.match_path("/signup").map(|r| *r.view()),
            Some("SignUpPage")
        );
        assert!(table.match_path("/signup/").is_none());
        assert!(table.match_path("/SIGNUP").is_none());
        assert!(table.match_path("/unknown").is_none());
    }

    #[test]
    fn by_name_finds_route() {
        let table = table();
        let route = table.by_name("aac").expect("aac route exists");
        assert_eq!(route.path(), "/aac");
        assert!(table.by_name("admin").is_none());
    }

    #[test]
    fn iter_preserves_table_order() {
        let names: Vec<_> = table().iter().map(|r| r.name().to_string()).collect();
        assert_eq!(names, vec!["login", "signup", "aac"]);
    }

    #[test]
    fn duplicate_path_is_rejected() {
        let err = RouteTable::new(vec![
            Route::new("/", "login", ()),
            Route::new("/", "home", ()),
        ])
        .expect_err("duplicate path");
        assert!(err.to_string().contains("duplicate route path"));
    }

    #[test]
    fn duplicate_name_is_rejected() {
        let err = RouteTable::new(vec![
            Route::new("/", "login", ()),
            Route::new("/login", "login", ()),
        ])
        .expect_err("duplicate name");
        assert!(err.to_string().contains("duplicate route name"));
    }

    #[test]
    fn relative_path_is_rejected() {
        let err = RouteTable::new(vec![Route::new("aac", "aac", ())]).expect_err("relative path");
        assert!(err.to_string().contains("must start with '/'"));
    }

    #[test]
    fn empty_table_is_allowed() {
        let table: RouteTable<()> = RouteTable::new(Vec::new()).expect("empty table");
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
    }
}

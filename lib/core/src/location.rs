//! In-app locations and the deployment base path.
//!
//! A [`Location`] is the target of a client-side navigation: an absolute path
//! plus optional query and fragment. A [`BasePath`] is the prefix the
//! application is served under, used to translate between browser paths and
//! in-app paths.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error returned when a navigation target cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseLocationError {
    /// The target does not start with `/`.
    NotAbsolute { target: String },
    /// The target points outside the application (scheme or authority).
    External { target: String },
}

impl fmt::Display for ParseLocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAbsolute { target } => {
                write!(f, "navigation target '{target}' is not an absolute path")
            }
            Self::External { target } => {
                write!(f, "navigation target '{target}' leaves the application")
            }
        }
    }
}

impl std::error::Error for ParseLocationError {}

/// A parsed in-app navigation target.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    path: String,
    query: Option<String>,
    hash: Option<String>,
}

impl Location {
    /// The application root, `/`.
    #[must_use]
    pub fn root() -> Self {
        Self {
            path: "/".to_string(),
            query: None,
            hash: None,
        }
    }

    /// Parses a target such as `/aac?board=2#top`.
    ///
    /// An empty path component normalizes to `/`.
    ///
    /// # Errors
    ///
    /// Returns an error if the target is relative or external.
    pub fn parse(target: &str) -> Result<Self, ParseLocationError> {
        let (rest, hash) = match target.split_once('#') {
            Some((rest, hash)) => (rest, Some(hash)),
            None => (target, None),
        };
        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (rest, None),
        };
        Self::build(target, path, query, hash)
    }

    /// Builds a location from browser-style parts.
    ///
    /// `search` and `hash` may carry their leading `?` and `#`.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is relative or external.
    pub fn from_parts(path: &str, search: &str, hash: &str) -> Result<Self, ParseLocationError> {
        let query = search.strip_prefix('?').unwrap_or(search);
        let hash = hash.strip_prefix('#').unwrap_or(hash);
        Self::build(path, path, Some(query), Some(hash))
    }

    fn build(
        target: &str,
        path: &str,
        query: Option<&str>,
        hash: Option<&str>,
    ) -> Result<Self, ParseLocationError> {
        if path.starts_with("//") || path.contains("://") {
            return Err(ParseLocationError::External {
                target: target.to_string(),
            });
        }
        let path = if path.is_empty() {
            "/".to_string()
        } else if path.starts_with('/') {
            path.to_string()
        } else {
            return Err(ParseLocationError::NotAbsolute {
                target: target.to_string(),
            });
        };

        Ok(Self {
            path,
            query: query.filter(|q| !q.is_empty()).map(str::to_string),
            hash: hash.filter(|h| !h.is_empty()).map(str::to_string),
        })
    }

    /// Returns the path component, always starting with `/`.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the query string without the leading `?`.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Returns the fragment without the leading `#`.
    #[must_use]
    pub fn hash(&self) -> Option<&str> {
        self.hash.as_deref()
    }

    /// Returns `path[?query][#hash]`.
    #[must_use]
    pub fn full_path(&self) -> String {
        let mut full = self.path.clone();
        if let Some(query) = &self.query {
            full.push('?');
            full.push_str(query);
        }
        if let Some(hash) = &self.hash {
            full.push('#');
            full.push_str(hash);
        }
        full
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_path())
    }
}

impl FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// The base URL the application is deployed under.
///
/// Always starts and ends with `/`; the default is the site root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct BasePath(String);

impl BasePath {
    /// Creates a normalized base path.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim().trim_matches('/');
        if trimmed.is_empty() {
            Self("/".to_string())
        } else {
            Self(format!("/{trimmed}/"))
        }
    }

    /// Returns the base path as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the application is served from the site root.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }

    /// Converts a browser path into an in-app path.
    ///
    /// Paths outside the base are returned unchanged.
    #[must_use]
    pub fn strip<'a>(&self, href: &'a str) -> std::borrow::Cow<'a, str> {
        use std::borrow::Cow;

        if self.is_root() {
            return Cow::Borrowed(href);
        }
        let bare = self.0.trim_end_matches('/');
        match href.strip_prefix(bare) {
            Some(rest) if rest.is_empty() => Cow::Borrowed("/"),
            Some(rest) if rest.starts_with('/') => Cow::Borrowed(rest),
            Some(rest) if rest.starts_with('?') || rest.starts_with('#') => {
                Cow::Owned(format!("/{rest}"))
            }
            _ => Cow::Borrowed(href),
        }
    }

    /// Converts an in-app path into a history-mode browser URL.
    #[must_use]
    pub fn join(&self, full_path: &str) -> String {
        if self.is_root() {
            return full_path.to_string();
        }
        let bare = self.0.trim_end_matches('/');
        if full_path == "/" {
            self.0.clone()
        } else {
            format!("{bare}{full_path}")
        }
    }
}

impl Default for BasePath {
    fn default() -> Self {
        Self::new("/")
    }
}

impl fmt::Display for BasePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for BasePath {
    fn from(s: String) -> Self {
        Self::new(&s)
    }
}

impl From<&str> for BasePath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<BasePath> for String {
    fn from(base: BasePath) -> Self {
        base.0
    }
}

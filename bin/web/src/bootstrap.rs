//! Application bootstrap: create, install the router, mount.
//!
//! Startup runs three ordered steps with no rollback:
//! 1. create the [`Application`]
//! 2. install the router into it
//! 3. locate the host element and mount the application tree
//!
//! The document is reached through [`MountTarget`], implemented for the
//! browser in `browser.rs`.

use crate::app::routes;
use crate::config::AppConfig;
use crate::error::MountError;
use crate::pages::Page;
use aac_portal_routing::{NavigationGuard, Navigator};
use rootcause::prelude::Report;
use std::sync::Arc;
use tracing::info;

/// The navigator specialized to this application's pages.
pub type PortalNavigator = Navigator<Page>;

/// The root application object.
///
/// Created once per page load and handed to the component tree as context.
#[derive(Clone)]
pub struct Application {
    config: Arc<AppConfig>,
    navigator: Option<Arc<PortalNavigator>>,
}

impl Application {
    /// Creates an application with no router installed.
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
            navigator: None,
        }
    }

    /// Installs the router.
    pub fn use_router(&mut self, navigator: PortalNavigator) {
        self.navigator = Some(Arc::new(navigator));
    }

    /// Returns the installed router.
    #[must_use]
    pub fn navigator(&self) -> Option<&Arc<PortalNavigator>> {
        self.navigator.as_ref()
    }

    /// Returns the application configuration.
    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns the browser URL for an in-app path.
    #[must_use]
    pub fn href(&self, full_path: &str) -> String {
        match &self.navigator {
            Some(navigator) => navigator.href(full_path),
            None => self.config.router.base_url.join(full_path),
        }
    }
}

impl std::fmt::Debug for Application {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Application")
            .field("config", &self.config)
            .field("router_installed", &self.navigator.is_some())
            .finish()
    }
}

/// A document the application can be mounted into.
pub trait MountTarget {
    /// The element type that hosts the application.
    type Host;
    /// Whatever the mount leaves behind.
    type Handle;

    /// Finds the element with the given id.
    fn find_host(&self, id: &str) -> Option<Self::Host>;

    /// Renders the application into `host`.
    fn mount(&self, host: Self::Host, app: Application) -> Self::Handle;
}

/// A mounted application.
#[derive(Debug)]
pub struct Mounted<H> {
    app: Application,
    handle: H,
}

impl<H> Mounted<H> {
    /// Returns the mounted application.
    #[must_use]
    pub fn app(&self) -> &Application {
        &self.app
    }

    /// Returns the mount handle.
    #[must_use]
    pub fn handle(&self) -> &H {
        &self.handle
    }
}

/// Runs the startup sequence.
pub struct Bootstrapper {
    config: AppConfig,
    guards: Vec<Arc<dyn NavigationGuard>>,
}

impl Bootstrapper {
    /// Creates a bootstrapper for the given configuration.
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            guards: Vec::new(),
        }
    }

    /// Adds a navigation guard. Without one the router allows everything.
    #[must_use]
    pub fn with_guard(mut self, guard: impl NavigationGuard + 'static) -> Self {
        self.guards.push(Arc::new(guard));
        self
    }

    /// Creates the application, installs the router and mounts.
    ///
    /// # Errors
    ///
    /// Returns an error if the route table is invalid or the host element
    /// is missing. Nothing is undone on failure.
    pub fn run<T: MountTarget>(
        self,
        target: &T,
    ) -> Result<Mounted<T::Handle>, Report<MountError>> {
        info!("Creating application...");
        let mut app = Application::new(self.config);

        info!("Using router...");
        let table = routes().map_err(|e| MountError::RouterInstall {
            details: e.to_string(),
        })?;
        let navigator = self
            .guards
            .into_iter()
            .fold(Navigator::builder(table), |builder, guard| {
                builder.shared_guard(guard)
            })
            .config(app.config().router.clone())
            .build();
        app.use_router(navigator);

        let handle = mount(target, app.clone())?;
        info!("Application mounted.");

        Ok(Mounted { app, handle })
    }
}

/// Mounts an application into the element carrying its configured id.
///
/// # Errors
///
/// Returns an error if no router is installed or the host element is
/// missing.
pub fn mount<T: MountTarget>(
    target: &T,
    app: Application,
) -> Result<T::Handle, Report<MountError>> {
    if app.navigator().is_none() {
        return Err(MountError::RouterNotInstalled.into());
    }

    let id = app.config().mount_id.clone();
    info!("Mounting application to #{id}...");
    let host = target
        .find_host(&id)
        .ok_or(MountError::HostElementMissing { id })?;

    Ok(target.mount(host, app))
}

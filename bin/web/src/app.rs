//! Main Leptos application component and routing.
//!
//! The route table lives here; the `Navigator` from `aac-portal-routing`
//! resolves every browser location against it and runs the navigation
//! guards before the outlet renders a page.

use crate::bootstrap::{Application, PortalNavigator};
use crate::pages::{AacInterface, LoginPage, NotFoundPage, Page, SignUpPage};
use aac_portal_core::Location;
use aac_portal_routing::{Navigation, Resolution, Route, RouteTable, RoutingError};
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::NavigateOptions;
use leptos_router::components::Router;
use leptos_router::hooks::{use_location, use_navigate};
use rootcause::prelude::Report;
use tracing::error;

/// Builds the application's route table.
///
/// # Errors
///
/// Returns an error if the table fails validation.
pub fn routes() -> Result<RouteTable<Page>, Report<RoutingError>> {
    RouteTable::new(vec![
        Route::new("/", "login", Page::Login),
        Route::new("/signup", "signup", Page::SignUp),
        Route::new("/aac", "aac", Page::AacInterface),
    ])
}

/// What the outlet shows for a location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Nothing resolved yet.
    Blank,
    /// A routed page.
    Page(Page),
    /// No route matched the path.
    NotFound { path: String },
    /// The navigation itself failed.
    Failed { message: String },
}

/// The outlet's reaction to a browser location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// What to render.
    pub screen: Screen,
    /// Browser URL to replace the current one with, after a redirect or a
    /// blocked navigation.
    pub replace_url: Option<String>,
}

/// Navigates to `target` and decides what the outlet renders.
pub fn resolve_screen(navigator: &PortalNavigator, target: &str) -> Outcome {
    match navigator.navigate(target) {
        Ok(navigation) => outcome_of(navigator, &navigation),
        Err(report) => {
            error!(target_path = target, error = %report, "navigation failed");
            failed(report.to_string())
        }
    }
}

fn failed(message: String) -> Outcome {
    Outcome {
        screen: Screen::Failed { message },
        replace_url: None,
    }
}

fn outcome_of(navigator: &PortalNavigator, navigation: &Navigation<Page>) -> Outcome {
    let screen = match navigation.resolution() {
        Some(Resolution::Matched { route, .. }) => Screen::Page(*route.view()),
        Some(Resolution::Unmatched { location }) => Screen::NotFound {
            path: location.full_path(),
        },
        None => Screen::Blank,
    };

    let settled_elsewhere = !navigation.redirects().is_empty() || !navigation.proceeded();
    let replace_url = navigation
        .resolution()
        .filter(|_| settled_elsewhere)
        .map(|resolution| navigator.href(&resolution.location().full_path()));

    Outcome {
        screen,
        replace_url,
    }
}

/// The main application component.
#[component]
pub fn App(app: Application) -> impl IntoView {
    provide_meta_context();
    provide_context(app);

    view! {
        <Title text="AAC Portal"/>
        <Router>
            <main class="container">
                <RouteOutlet/>
            </main>
        </Router>
    }
}

/// Renders the page for the current browser location.
#[component]
fn RouteOutlet() -> impl IntoView {
    let app = expect_context::<Application>();
    let location = use_location();
    let navigate = use_navigate();

    let outcome = Memo::new(move |_| {
        let browser = Location::from_parts(
            &location.pathname.get(),
            &location.search.get(),
            &location.hash.get(),
        );
        match (app.navigator(), browser) {
            (Some(navigator), Ok(browser)) => resolve_screen(navigator, &browser.full_path()),
            (Some(_), Err(e)) => failed(e.to_string()),
            (None, _) => failed("router not installed".to_string()),
        }
    });

    Effect::new(move || {
        if let Some(url) = outcome.with(|outcome| outcome.replace_url.clone()) {
            navigate(
                &url,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    move || match outcome.with(|outcome| outcome.screen.clone()) {
        Screen::Page(Page::Login) => view! { <LoginPage/> }.into_any(),
        Screen::Page(Page::SignUp) => view! { <SignUpPage/> }.into_any(),
        Screen::Page(Page::AacInterface) => view! { <AacInterface/> }.into_any(),
        Screen::NotFound { path } => view! { <NotFoundPage path=path/> }.into_any(),
        Screen::Failed { message } => view! { <p class="error">{message}</p> }.into_any(),
        Screen::Blank => view! { <div></div> }.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aac_portal_routing::{
        FallbackPolicy, GuardDecision, NavigationGuard, NavigationRequest, Navigator,
        RouterConfig,
    };

    fn navigator() -> PortalNavigator {
        Navigator::builder(routes().expect("routes are valid")).build()
    }

    struct LockBoard;

    impl NavigationGuard for LockBoard {
        fn check(&self, request: &NavigationRequest) -> GuardDecision {
            if request.to().path() == "/aac" {
                GuardDecision::Block("locked".to_string())
            } else {
                GuardDecision::Proceed
            }
        }
    }

    #[test]
    fn route_table_has_three_named_routes() {
        let table = routes().expect("routes are valid");
        let entries: Vec<_> = table
            .iter()
            .map(|route| (route.path(), route.name().as_str(), *route.view()))
            .collect();
        assert_eq!(
            entries,
            vec![
                ("/", "login", Page::Login),
                ("/signup", "signup", Page::SignUp),
                ("/aac", "aac", Page::AacInterface),
            ]
        );
    }

    #[test]
    fn each_path_renders_its_page() {
        let navigator = navigator();
        for (path, page) in [
            ("/", Page::Login),
            ("/signup", Page::SignUp),
            ("/aac", Page::AacInterface),
        ] {
            let outcome = resolve_screen(&navigator, path);
            assert_eq!(outcome.screen, Screen::Page(page));
            assert_eq!(outcome.replace_url, None);
        }
    }

    #[test]
    fn unknown_path_renders_not_found() {
        let outcome = resolve_screen(&navigator(), "/unknown?x=1");
        assert_eq!(
            outcome.screen,
            Screen::NotFound {
                path: "/unknown?x=1".to_string()
            }
        );
    }

    #[test]
    fn fallback_redirect_replaces_url() {
        let navigator = Navigator::builder(routes().expect("routes are valid"))
            .config(RouterConfig {
                base_url: "/portal/".into(),
                fallback: FallbackPolicy::Redirect {
                    to: "/".to_string(),
                },
                ..RouterConfig::default()
            })
            .build();

        let outcome = resolve_screen(&navigator, "/portal/unknown");
        assert_eq!(outcome.screen, Screen::Page(Page::Login));
        assert_eq!(outcome.replace_url.as_deref(), Some("/portal/"));
    }

    #[test]
    fn blocked_navigation_restores_previous_url() {
        let navigator = Navigator::builder(routes().expect("routes are valid"))
            .guard(LockBoard)
            .build();

        resolve_screen(&navigator, "/signup");
        let outcome = resolve_screen(&navigator, "/aac");
        assert_eq!(outcome.screen, Screen::Page(Page::SignUp));
        assert_eq!(outcome.replace_url.as_deref(), Some("/signup"));
    }

    #[test]
    fn invalid_target_renders_failure() {
        let outcome = resolve_screen(&navigator(), "aac");
        assert!(matches!(outcome.screen, Screen::Failed { .. }));
    }

    #[test]
    fn browser_parts_reach_navigator_under_base_url() {
        let navigator = Navigator::builder(routes().expect("routes are valid"))
            .config(RouterConfig {
                base_url: "/portal/".into(),
                ..RouterConfig::default()
            })
            .build();
        let browser =
            Location::from_parts("/portal/unknown", "board=2", "#top").expect("valid location");

        let outcome = resolve_screen(&navigator, &browser.full_path());
        assert_eq!(
            outcome.screen,
            Screen::NotFound {
                path: "/unknown?board=2#top".to_string()
            }
        );
    }
}

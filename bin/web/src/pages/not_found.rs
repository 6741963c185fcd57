//! Fallback page for paths that match no route.

use crate::bootstrap::Application;
use leptos::prelude::*;
use leptos_router::components::A;

/// Rendered when a navigation matches no route.
#[component]
pub fn NotFoundPage(path: String) -> impl IntoView {
    let app = expect_context::<Application>();

    view! {
        <div class="not-found-page">
            <h1>"Page not found."</h1>
            <p>"Nothing lives at " <code>{path}</code> "."</p>
            <A href=app.href("/")>"Back to login"</A>
        </div>
    }
}

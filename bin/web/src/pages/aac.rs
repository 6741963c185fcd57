//! AAC interface page component.

use crate::bootstrap::Application;
use leptos::prelude::*;
use leptos_router::components::A;

/// The communication board.
#[component]
pub fn AacInterface() -> impl IntoView {
    let app = expect_context::<Application>();

    view! {
        <div class="aac-page">
            <header>
                <h1>"AAC Interface"</h1>
                <A href=app.href("/")>"Log out"</A>
            </header>
            <section class="aac-board"></section>
        </div>
    }
}

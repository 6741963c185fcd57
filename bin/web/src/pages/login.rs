//! Login page component.

use crate::bootstrap::Application;
use leptos::prelude::*;
use leptos_router::components::A;

/// Login page, served at the application root.
#[component]
pub fn LoginPage() -> impl IntoView {
    let app = expect_context::<Application>();

    view! {
        <div class="login-page">
            <div class="auth-box">
                <h1>"Log in"</h1>
                <p>"Continue to your communication board."</p>
                <A href=app.href("/aac")>"Open AAC interface"</A>
                <p>
                    "No account yet? "
                    <A href=app.href("/signup")>"Sign up"</A>
                </p>
            </div>
        </div>
    }
}

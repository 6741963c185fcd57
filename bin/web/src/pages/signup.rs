//! Sign-up page component.

use crate::bootstrap::Application;
use leptos::prelude::*;
use leptos_router::components::A;

/// Sign-up page.
#[component]
pub fn SignUpPage() -> impl IntoView {
    let app = expect_context::<Application>();

    view! {
        <div class="signup-page">
            <div class="auth-box">
                <h1>"Sign up"</h1>
                <p>"Create an account to save your boards."</p>
                <p>
                    "Already registered? "
                    <A href=app.href("/")>"Log in"</A>
                </p>
            </div>
        </div>
    }
}

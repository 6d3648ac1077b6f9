//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;
use wasm_bindgen::JsValue;

use crate::components::Toast;
use crate::pages::{Dashboard, Login};
use crate::state::global::{provide_global_state, GlobalState, SESSION_CHECK_INTERVAL_MS};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Uncaught errors are logged, never shown to the user
    for event in ["error", "unhandledrejection"] {
        let _ = window_event_listener_untyped(event, move |e| {
            web_sys::console::error_2(&JsValue::from_str("Unhandled error:"), &JsValue::from(e));
        });
    }

    // Sessions can expire while the dashboard stays open
    let state_for_check = state.clone();
    gloo_timers::callback::Interval::new(SESSION_CHECK_INTERVAL_MS, move || {
        state_for_check.ensure_session();
    })
    .forget();

    // Theme class on <body>
    let theme = state.theme;
    create_effect(move |_| {
        let class = theme.get().body_class();
        if let Some(body) = document().body() {
            body.set_class_name(class);
        }
    });

    view! {
        <Router>
            <Routes>
                <Route path="/" view=Home />
                <Route path="/login" view=LoginGate />
                <Route path="/*any" view=NotFound />
            </Routes>

            // Toast notifications
            <Toast />
        </Router>
    }
}

/// Dashboard, or a redirect to the login form without a session
#[component]
fn Home() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let authenticated = state.authenticated;

    view! {
        <Show
            when=move || authenticated.get()
            fallback=|| view! { <Redirect path="/login" /> }
        >
            <Dashboard />
        </Show>
    }
}

/// Login form, or straight to the dashboard with a valid session
#[component]
fn LoginGate() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let authenticated = state.authenticated;

    view! {
        <Show
            when=move || !authenticated.get()
            fallback=|| view! { <Redirect path="/" /> }
        >
            <Login />
        </Show>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🦷"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Go to Dashboard"
            </A>
        </div>
    }
}

//! Login Page
//!
//! Username/password form with "remember me". A valid session never sees
//! this page; the router sends it straight to the dashboard.

use gloo_timers::future::TimeoutFuture;
use leptos::*;

use sterling::session::FocusField;
use sterling::LoginOutcome;

use crate::components::InlineLoading;
use crate::state::global::GlobalState;

/// Time the success toast stays up before the dashboard replaces the form
const REDIRECT_DELAY_MS: u32 = 1000;

/// Login page component
#[component]
pub fn Login() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let prefill = state.login_prefill();

    let (username, set_username) = create_signal(prefill.username.clone());
    let (password, set_password) = create_signal(String::new());
    let (remember, set_remember) = create_signal(prefill.remember_me);
    let loading = state.loading;
    let state_for_username = state.clone();
    let state_for_password = state.clone();

    let username_ref = create_node_ref::<html::Input>();
    let password_ref = create_node_ref::<html::Input>();

    // Remembered users start on the password field
    let focus = prefill.focus;
    create_effect(move |_| {
        let input = match focus {
            FocusField::Username => username_ref.get(),
            FocusField::Password => password_ref.get(),
        };
        if let Some(input) = input {
            let _ = input.focus();
        }
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let state = state.clone();
        let user = username.get_untracked();
        let pass = password.get_untracked();
        let remember_me = remember.get_untracked();

        spawn_local(async move {
            match state.submit_login(&user, &pass, remember_me).await {
                LoginOutcome::Success { .. } => {
                    TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                    state.enter_dashboard();
                }
                LoginOutcome::Failure {
                    clear_password: true,
                    ..
                } => {
                    set_password.set(String::new());
                    if let Some(input) = password_ref.get_untracked() {
                        let _ = input.focus();
                    }
                }
                LoginOutcome::Failure { .. } => {}
            }
        });
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-900 text-white px-4">
            <div class="w-full max-w-md bg-gray-800 rounded-xl shadow-lg p-8">
                <div class="text-center mb-8">
                    <i class="fas fa-tooth text-4xl text-primary-400" />
                    <h1 class="text-2xl font-bold mt-3">"Sterling Dental Clinic"</h1>
                    <p class="text-gray-400 mt-1">"Sign in to the clinic dashboard"</p>
                </div>

                <form on:submit=on_submit class="space-y-5">
                    <div>
                        <label for="username" class="block text-sm text-gray-400 mb-1">"Username"</label>
                        <input
                            id="username"
                            type="text"
                            autocomplete="username"
                            class="w-full bg-gray-700 rounded-lg px-4 py-2 focus:outline-none focus:ring-2 focus:ring-primary-500"
                            node_ref=username_ref
                            prop:value=username
                            on:input=move |ev| {
                                state_for_username.clear_notice();
                                set_username.set(event_target_value(&ev));
                            }
                        />
                    </div>

                    <div>
                        <label for="password" class="block text-sm text-gray-400 mb-1">"Password"</label>
                        <input
                            id="password"
                            type="password"
                            autocomplete="current-password"
                            class="w-full bg-gray-700 rounded-lg px-4 py-2 focus:outline-none focus:ring-2 focus:ring-primary-500"
                            node_ref=password_ref
                            prop:value=password
                            on:input=move |ev| {
                                state_for_password.clear_notice();
                                set_password.set(event_target_value(&ev));
                            }
                        />
                    </div>

                    <label class="flex items-center space-x-2 text-sm text-gray-300">
                        <input
                            id="rememberMe"
                            type="checkbox"
                            prop:checked=remember
                            on:change=move |ev| set_remember.set(event_target_checked(&ev))
                        />
                        <span>"Remember me"</span>
                    </label>

                    <button
                        type="submit"
                        class="w-full py-3 bg-primary-600 hover:bg-primary-700 disabled:opacity-60 rounded-lg font-medium transition-colors"
                        disabled=move || loading.get()
                    >
                        {move || {
                            if loading.get() {
                                view! {
                                    <span class="flex items-center justify-center space-x-2">
                                        <InlineLoading />
                                        <span>"Signing in..."</span>
                                    </span>
                                }.into_view()
                            } else {
                                view! { <span>"Login"</span> }.into_view()
                            }
                        }}
                    </button>
                </form>
            </div>
        </div>
    }
}

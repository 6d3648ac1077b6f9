//! Toast Notification Component
//!
//! Shows the current notice; the global state dismisses it on a timer.

use leptos::*;

use sterling::Severity;

use crate::state::global::GlobalState;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let notice = state.notice;

    view! {
        <div class="fixed bottom-6 right-4 z-50 space-y-2">
            {move || {
                notice.get().map(|n| view! {
                    <ToastMessage message=n.message severity=n.severity />
                })
            }}
        </div>
    }
}

#[component]
fn ToastMessage(
    #[prop(into)]
    message: String,
    severity: Severity,
) -> impl IntoView {
    let bg_class = match severity {
        Severity::Success => "bg-green-600",
        Severity::Error => "bg-red-600",
        Severity::Info => "bg-blue-600",
    };

    view! {
        <div class=format!(
            "notification notification-{} flex items-center space-x-3 {} text-white px-4 py-3 \
             rounded-lg shadow-lg transform transition-all duration-300 ease-out animate-slide-in",
            severity, bg_class
        )>
            <i class=format!("fas {}", severity.icon()) />
            <span class="text-sm font-medium">{message}</span>
        </div>
    }
}

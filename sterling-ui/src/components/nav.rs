//! Navigation Component
//!
//! Sidebar with the clinic logo and one entry per dashboard section.

use leptos::*;

use sterling::Section;

use crate::state::global::GlobalState;

/// Sidebar navigation component
#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <aside class="sidebar w-64 bg-gray-800 border-r border-gray-700 min-h-screen">
            // Logo and brand
            <div class="flex items-center space-x-3 h-16 px-6">
                <i class="fas fa-tooth text-2xl text-primary-400" />
                <span class="text-xl font-bold text-white">"Sterling Dental"</span>
            </div>

            <nav class="px-3 py-4 space-y-1">
                {Section::ALL
                    .into_iter()
                    .map(|section| view! { <NavLink section=section /> })
                    .collect_view()}
            </nav>
        </aside>
    }
}

/// Individual sidebar entry
#[component]
fn NavLink(section: Section) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let active = state.active_section;

    view! {
        <a
            href=format!("#{}", section.id())
            data-section=section.id()
            class=move || {
                if active.get() == section {
                    "nav-item active flex items-center space-x-3 px-4 py-2 rounded-lg bg-gray-700 text-white"
                } else {
                    "nav-item flex items-center space-x-3 px-4 py-2 rounded-lg text-gray-300 \
                     hover:text-white hover:bg-gray-700 transition-colors"
                }
            }
            on:click=move |_| state.navigate_to(section)
        >
            <i class=format!("fas {} w-5", section.icon()) />
            <span>{section.title()}</span>
        </a>
    }
}

//! Dashboard Page
//!
//! Sidebar, header and whichever section is active.

use gloo_timers::future::TimeoutFuture;
use leptos::*;

use sterling::dashboard::{
    count_up_frame, format_currency, group_thousands, AppointmentPeriod, AppointmentStats,
    RevenuePeriod, RevenueSeries,
};
use sterling::Section;

use crate::components::Sidebar;
use crate::pages::sections::{Appointments, Patients, Placeholder, Services, Staff};
use crate::state::global::GlobalState;

const COUNT_UP_MS: u32 = 1500;
const COUNT_UP_FRAMES: u32 = 60;

/// Dashboard shell
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let active = state.active_section;

    // Deep link: "#patients" opens that section
    if let Ok(hash) = window().location().hash() {
        let id = hash.trim_start_matches('#');
        if !id.is_empty() {
            let _ = state.navigate_to_id(id);
        }
    }

    view! {
        <div class="min-h-screen bg-gray-900 text-white flex">
            <Sidebar />

            <div class="flex-1 flex flex-col">
                <Header />

                <main class="flex-1 px-8 py-6">
                    {move || match active.get() {
                        Section::Dashboard => view! { <Overview /> }.into_view(),
                        Section::Appointments => view! { <Appointments /> }.into_view(),
                        Section::Patients => view! { <Patients /> }.into_view(),
                        Section::Services => view! { <Services /> }.into_view(),
                        Section::Staff => view! { <Staff /> }.into_view(),
                        other => view! { <Placeholder section=other /> }.into_view(),
                    }}
                </main>
            </div>
        </div>
    }
}

/// Page title, theme toggle and logout
#[component]
fn Header() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let active = state.active_section;
    let theme = state.theme;

    let state_for_theme = state.clone();
    let state_for_logout = state;

    view! {
        <header class="h-16 flex items-center justify-between px-8 bg-gray-800 border-b border-gray-700">
            <h1 class="page-title text-2xl font-semibold">{move || active.get().title()}</h1>

            <div class="flex items-center space-x-3">
                <button
                    class="theme-toggle p-2 rounded-lg hover:bg-gray-700"
                    on:click=move |_| state_for_theme.toggle_theme()
                >
                    <i class=move || format!("fas {}", theme.get().toggle_icon()) />
                </button>
                <button
                    class="px-4 py-2 rounded-lg bg-gray-700 hover:bg-gray-600 text-sm"
                    on:click=move |_| state_for_logout.logout()
                >
                    <i class="fas fa-sign-out-alt mr-2" />
                    "Logout"
                </button>
            </div>
        </header>
    }
}

/// Dashboard overview: stat cards, appointments and revenue
#[component]
fn Overview() -> impl IntoView {
    let today = AppointmentStats::for_period(AppointmentPeriod::Today);
    let revenue = RevenueSeries::for_period(RevenuePeriod::default());

    view! {
        <div class="space-y-8">
            <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-4 gap-6">
                <StatCard label="Today's Appointments" icon="fa-calendar-day" target={u64::from(today.total())} />
                <StatCard label="Total Patients" icon="fa-users" target=1248 />
                <StatCard label="Monthly Revenue" icon="fa-dollar-sign" target={revenue.this_month as u64} prefix="$" />
                <StatCard label="Pending Appointments" icon="fa-clock" target={u64::from(today.pending)} />
            </div>

            <div class="grid grid-cols-1 xl:grid-cols-2 gap-6">
                <AppointmentsCard />
                <RevenueCard />
            </div>
        </div>
    }
}

/// Stat card whose figure counts up from zero when shown
#[component]
fn StatCard(
    label: &'static str,
    icon: &'static str,
    target: u64,
    #[prop(default = "")]
    prefix: &'static str,
) -> impl IntoView {
    let (value, set_value) = create_signal(0u64);

    spawn_local(async move {
        for frame in 1..=COUNT_UP_FRAMES {
            TimeoutFuture::new(COUNT_UP_MS / COUNT_UP_FRAMES).await;
            let shown = count_up_frame(target, frame, COUNT_UP_FRAMES);
            // Card gone: stop animating
            if set_value.try_set(shown).is_some() {
                break;
            }
        }
    });

    view! {
        <div class="stat-card bg-gray-800 rounded-xl p-6 flex items-center space-x-4">
            <i class=format!("fas {} text-2xl text-primary-400", icon) />
            <div>
                <p class="text-gray-400 text-sm">{label}</p>
                <p class="stat-number text-2xl font-bold">
                    {move || format!("{}{}", prefix, group_thousands(value.get()))}
                </p>
            </div>
        </div>
    }
}

#[component]
fn AppointmentsCard() -> impl IntoView {
    let (period, set_period) = create_signal(AppointmentPeriod::Today);
    let stats = move || AppointmentStats::for_period(period.get());

    let periods = [
        (AppointmentPeriod::Today, "Today"),
        (AppointmentPeriod::Week, "Week"),
        (AppointmentPeriod::Month, "Month"),
    ];

    view! {
        <section class="appointments-card bg-gray-800 rounded-xl p-6">
            <div class="flex items-center justify-between mb-4">
                <h2 class="text-xl font-semibold">"Appointments"</h2>
                <div class="flex space-x-1">
                    {periods.into_iter().map(|(p, label)| view! {
                        <button
                            class=move || if period.get() == p {
                                "px-3 py-1 rounded-lg text-sm bg-primary-600"
                            } else {
                                "px-3 py-1 rounded-lg text-sm bg-gray-700 hover:bg-gray-600"
                            }
                            on:click=move |_| set_period.set(p)
                        >
                            {label}
                        </button>
                    }).collect_view()}
                </div>
            </div>

            <p class="text-gray-400 mb-4">{move || format!("{} total", stats().total())}</p>
            <ul class="space-y-2">
                {move || stats().chart_slices().into_iter().map(|(label, count)| view! {
                    <li class="flex justify-between">
                        <span class="text-gray-300">{label}</span>
                        <span class="stat-value font-medium">{count}</span>
                    </li>
                }).collect_view()}
            </ul>
        </section>
    }
}

#[component]
fn RevenueCard() -> impl IntoView {
    let (period, set_period) = create_signal(RevenuePeriod::SixMonths);
    let series = create_memo(move |_| RevenueSeries::for_period(period.get()));

    view! {
        <section class="revenue-card bg-gray-800 rounded-xl p-6">
            <div class="flex items-center justify-between mb-4">
                <h2 class="text-xl font-semibold">"Revenue"</h2>
                <select
                    class="bg-gray-700 rounded-lg px-3 py-1 text-sm"
                    on:change=move |ev| {
                        if let Ok(p) = event_target_value(&ev).parse() {
                            set_period.set(p);
                        }
                    }
                >
                    <option value="6m" selected=true>"Last 6 months"</option>
                    <option value="year">"This year"</option>
                    <option value="all">"All time"</option>
                </select>
            </div>

            <div class="grid grid-cols-3 gap-4 mb-6">
                <Figure label="This Month" value=Signal::derive(move || series.with(|s| s.this_month)) />
                <Figure label="Last Month" value=Signal::derive(move || series.with(|s| s.last_month)) />
                <Figure label="Average" value=Signal::derive(move || series.with(|s| s.average)) />
            </div>

            <ul class="space-y-1 text-sm">
                {move || series.with(|s| {
                    s.labels.iter().cloned().zip(s.values.iter().copied()).map(|(label, value)| view! {
                        <li class="flex justify-between">
                            <span class="text-gray-400">{label}</span>
                            <span>{format_currency(value)}</span>
                        </li>
                    }).collect_view()
                })}
            </ul>
        </section>
    }
}

#[component]
fn Figure(label: &'static str, value: Signal<f64>) -> impl IntoView {
    view! {
        <div>
            <p class="text-gray-400 text-xs">{label}</p>
            <p class="text-lg font-semibold">{move || format_currency(value.get())}</p>
        </div>
    }
}

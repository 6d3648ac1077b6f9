//! Section Pages
//!
//! Content for the sidebar sections other than the overview.

use chrono::Utc;
use leptos::*;

use sterling::calendar::{CalendarMonth, DAY_HEADERS};
use sterling::dashboard::{
    booking_message, filter_rows, staff_edit_message, staff_schedule_message, ServiceKind, STAFF,
};
use sterling::Section;

use crate::state::global::GlobalState;

/// Patient row as listed in the patients table
#[derive(Clone, Debug, PartialEq)]
struct PatientRow {
    id: &'static str,
    name: &'static str,
    phone: &'static str,
    last_visit: &'static str,
    treatment: &'static str,
}

impl PatientRow {
    /// Text the search box matches against
    fn search_text(&self) -> String {
        format!("{} {} {} {}", self.id, self.name, self.phone, self.treatment)
    }
}

static PATIENTS: [PatientRow; 5] = [
    PatientRow { id: "P001", name: "Sarah Johnson", phone: "(555) 123-4567", last_visit: "2025-01-10", treatment: "Cleaning" },
    PatientRow { id: "P002", name: "Michael Chen", phone: "(555) 234-5678", last_visit: "2025-01-08", treatment: "Root Canal" },
    PatientRow { id: "P003", name: "Emily Davis", phone: "(555) 345-6789", last_visit: "2025-01-05", treatment: "Whitening" },
    PatientRow { id: "P004", name: "Robert Wilson", phone: "(555) 456-7890", last_visit: "2024-12-20", treatment: "Crown" },
    PatientRow { id: "P005", name: "Lisa Anderson", phone: "(555) 567-8901", last_visit: "2024-12-15", treatment: "Braces Check" },
];

/// Appointment calendar with month paging
#[component]
pub fn Appointments() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let today = Utc::now().date_naive();
    let month = create_rw_signal(CalendarMonth::containing(today));

    let step = move |forward: bool| {
        let current = month.get_untracked();
        let moved = if forward {
            current.next(today)
        } else {
            current.prev(today)
        };
        match moved {
            Ok(m) => month.set(m),
            Err(e) => state.show_error(&e.to_string()),
        }
    };
    let step_back = step.clone();

    view! {
        <section class="bg-gray-800 rounded-xl p-6 max-w-2xl">
            <div class="flex items-center justify-between mb-4">
                <button class="p-2 rounded-lg hover:bg-gray-700" on:click=move |_| step_back(false)>
                    <i class="fas fa-chevron-left" />
                </button>
                <h2 class="text-xl font-semibold">{move || month.with(|m| m.title())}</h2>
                <button class="p-2 rounded-lg hover:bg-gray-700" on:click=move |_| step(true)>
                    <i class="fas fa-chevron-right" />
                </button>
            </div>

            <div class="grid grid-cols-7 gap-1 text-center">
                {DAY_HEADERS.iter().map(|d| view! {
                    <div class="calendar-day-header text-gray-400 text-sm py-2">{*d}</div>
                }).collect_view()}

                {move || month.with(|m| {
                    let highlighted = m.today;
                    m.cells().into_iter().map(|cell| match cell {
                        Some(day) if highlighted == Some(day) => view! {
                            <div class="calendar-day today bg-primary-600 rounded-lg py-2">{day}</div>
                        }.into_view(),
                        Some(day) => view! {
                            <div class="calendar-day rounded-lg py-2 hover:bg-gray-700">{day}</div>
                        }.into_view(),
                        None => view! { <div class="calendar-day empty" /> }.into_view(),
                    }).collect_view()
                })}
            </div>
        </section>
    }
}

/// Patients table with live search
#[component]
pub fn Patients() -> impl IntoView {
    let (query, set_query) = create_signal(String::new());

    let visible = move || {
        let texts: Vec<String> = PATIENTS.iter().map(PatientRow::search_text).collect();
        query.with(|q| filter_rows(&texts, q))
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <div class="flex items-center justify-between mb-4">
                <h2 class="text-xl font-semibold">"Patients"</h2>
                <input
                    id="patientSearch"
                    type="search"
                    placeholder="Search patients..."
                    class="bg-gray-700 rounded-lg px-4 py-2 text-sm"
                    prop:value=query
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                />
            </div>

            <table class="w-full text-left text-sm">
                <thead class="text-gray-400">
                    <tr>
                        <th class="py-2">"ID"</th>
                        <th>"Name"</th>
                        <th>"Phone"</th>
                        <th>"Last Visit"</th>
                        <th>"Treatment"</th>
                    </tr>
                </thead>
                <tbody id="patientsTableBody">
                    {move || visible().into_iter().filter_map(|i| PATIENTS.get(i)).map(|p| view! {
                        <tr class="border-t border-gray-700">
                            <td class="py-2">{p.id}</td>
                            <td>{p.name}</td>
                            <td>{p.phone}</td>
                            <td>{p.last_visit}</td>
                            <td>{p.treatment}</td>
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>
        </section>
    }
}

/// Service catalog with booking buttons
#[component]
pub fn Services() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-6">
            {ServiceKind::ALL.into_iter().map(|kind| {
                let state = state.clone();
                view! {
                    <div class="service-card bg-gray-800 rounded-xl p-6" data-service=kind.id()>
                        <h3 class="text-lg font-semibold mb-4">{kind.name()}</h3>
                        <button
                            class="px-4 py-2 rounded-lg bg-primary-600 hover:bg-primary-700 text-sm"
                            on:click=move |_| state.show_info(&booking_message(kind.id()))
                        >
                            <i class="fas fa-calendar-plus mr-2" />
                            "Book"
                        </button>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

/// Staff cards with schedule and edit actions
#[component]
pub fn Staff() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-4 gap-6">
            {STAFF.into_iter().map(|member| {
                let state_for_schedule = state.clone();
                let state_for_edit = state.clone();
                view! {
                    <div class="staff-card bg-gray-800 rounded-xl p-6 text-center" data-staff=member.id>
                        <i class="fas fa-user-md text-4xl text-primary-400 mb-3" />
                        <h3 class="text-lg font-semibold mb-4">{member.name}</h3>
                        <div class="flex justify-center space-x-2">
                            <button
                                class="px-3 py-1 rounded-lg bg-gray-700 hover:bg-gray-600 text-sm"
                                on:click=move |_| state_for_schedule.show_info(&staff_schedule_message(member.id))
                            >
                                "Schedule"
                            </button>
                            <button
                                class="px-3 py-1 rounded-lg bg-gray-700 hover:bg-gray-600 text-sm"
                                on:click=move |_| state_for_edit.show_info(&staff_edit_message(member.id))
                            >
                                "Edit"
                            </button>
                        </div>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

/// Section whose content is not built yet
#[component]
pub fn Placeholder(section: Section) -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-xl p-12 text-center">
            <i class=format!("fas {} text-5xl text-gray-500 mb-4", section.icon()) />
            <h2 class="text-2xl font-semibold mb-2">{section.title()}</h2>
            <p class="text-gray-400">{format!("{} management is coming soon.", section.title())}</p>
        </section>
    }
}

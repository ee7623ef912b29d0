use std::fmt::Display;

use dioxus::prelude::*;

use store::format::{format_inr, or_dash};
use store::ledger::recent_people;
use store::{DashboardStats, Person};
use ui::components::{EmptyState, Loading, PersonCell, StatCard};
use ui::{use_api, use_ui_config, PageHeader};

use crate::Route;

#[derive(Clone, Debug, Default, PartialEq)]
struct DashboardData {
    stats: DashboardStats,
    recent: Vec<Person>,
}

/// Combine the two dashboard fetches.
///
/// The aggregate endpoint is optional: if it fails the counts come from the
/// people list. If the people list itself fails the page shows zeros.
fn assemble<E: Display>(
    people: Result<Vec<Person>, E>,
    stats: Result<DashboardStats, E>,
    recent: usize,
) -> DashboardData {
    let people = match people {
        Ok(people) => people,
        Err(e) => {
            tracing::error!("Error fetching dashboard data: {e}");
            return DashboardData::default();
        }
    };
    let stats = stats.unwrap_or_else(|e| {
        tracing::warn!("Dashboard stats unavailable ({e}); counting from list");
        DashboardStats::fallback(&people)
    });
    DashboardData {
        stats,
        recent: recent_people(&people, recent),
    }
}

#[component]
pub fn Dashboard() -> Element {
    let api = use_api();
    let recent = use_ui_config().recent_students;

    let data = use_resource(move || {
        let api = api.clone();
        async move {
            let (people, stats) = futures::join!(api.list_people(), api.dashboard_stats());
            assemble(people, stats, recent)
        }
    });

    let snapshot = data.cloned();
    let stats = snapshot
        .as_ref()
        .map(|d| d.stats.clone())
        .unwrap_or_default();

    rsx! {
        div {
            class: "main-container",
            PageHeader {
                title: "Dashboard",
                subtitle: "Welcome to Music Academy Management System",
            }

            div {
                class: "stats-container",
                StatCard { value: "{stats.total_students}", label: "Total Students" }
                StatCard { value: "{stats.total_teachers}", label: "Teachers", tone: "success" }
                StatCard { value: format_inr(stats.pending_amount), label: "Pending Payments", tone: "warning" }
                StatCard { value: format_inr(stats.total_revenue), label: "Total Revenue", tone: "info" }
            }

            h2 { class: "section-title", "Quick Actions" }
            div {
                class: "quick-actions",
                Link { class: "quick-action", to: Route::AddStudent { from: String::new() }, "👤 Add Student" }
                Link {
                    class: "quick-action payment",
                    to: Route::RecordPayment { student: String::new(), from: String::new() },
                    "💰 Record Payment"
                }
                Link { class: "quick-action students", to: Route::StudentList {}, "📋 View Students" }
                Link { class: "quick-action payments", to: Route::PaymentsList {}, "📊 View Payments" }
            }

            div {
                class: "table-container",
                div {
                    class: "table-header",
                    h2 { class: "table-title", "Recent Students" }
                    Link { class: "back-link", to: Route::StudentList {}, "View All →" }
                }

                match snapshot {
                    None => rsx! { Loading {} },
                    Some(data) if data.recent.is_empty() => rsx! {
                        EmptyState {
                            icon: "📋",
                            title: "No students yet",
                            message: "Add your first student to get started",
                            Link { class: "btn-add", to: Route::AddStudent { from: String::new() }, "+ Add Student" }
                        }
                    },
                    Some(data) => rsx! {
                        table {
                            class: "students-table",
                            thead {
                                tr {
                                    th { "Student" }
                                    th { "Email" }
                                    th { "Phone" }
                                    th { "Action" }
                                }
                            }
                            tbody {
                                for person in data.recent {
                                    tr {
                                        key: "{person.user_id}",
                                        td { PersonCell { name: person.display_name().to_string(), id: person.user_id } }
                                        td { "{or_dash(&person.email)}" }
                                        td { "{or_dash(&person.phone)}" }
                                        td {
                                            Link {
                                                class: "action-btn view",
                                                to: Route::StudentProfile { id: person.user_id, from: "dashboard".to_string() },
                                                "View"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    },
                }
            }
        }
    }
}

/// `/dashboard` renders the same page as `/`.
#[component]
pub fn DashboardAlias() -> Element {
    rsx! { Dashboard {} }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(id: i64, student: bool, teacher: bool) -> Person {
        Person {
            user_id: id,
            name: format!("P{id}"),
            is_student: student,
            is_teacher: teacher,
            ..Default::default()
        }
    }

    #[test]
    fn test_prefers_backend_stats() {
        let backend = DashboardStats {
            total_students: 40,
            total_teachers: 4,
            total_payments: 90,
            total_revenue: 120000.0,
            pending_amount: 5000.0,
            overdue_amount: 700.0,
        };
        let data = assemble::<String>(
            Ok(vec![person(1, true, false)]),
            Ok(backend.clone()),
            5,
        );
        assert_eq!(data.stats, backend);
    }

    #[test]
    fn test_falls_back_when_stats_fail() {
        let people = vec![person(1, true, false), person(2, false, true), person(3, true, true)];
        let data = assemble(Ok(people), Err("503"), 5);
        assert_eq!(data.stats.total_students, 2);
        assert_eq!(data.stats.total_teachers, 2);
        assert_eq!(data.stats.total_revenue, 0.0);
        assert_eq!(data.stats.pending_amount, 0.0);
        assert_eq!(
            data.recent.iter().map(|p| p.user_id).collect::<Vec<_>>(),
            vec![3, 2, 1]
        );
    }

    #[test]
    fn test_people_failure_shows_zeros() {
        let data = assemble(Err("connection refused"), Ok(DashboardStats::default()), 5);
        assert_eq!(data, DashboardData::default());
    }

    #[test]
    fn test_recent_two_students_most_recent_first() {
        let data = assemble::<&str>(
            Ok(vec![person(1, true, false), person(2, true, false)]),
            Err("down"),
            5,
        );
        assert_eq!(
            data.recent.iter().map(|p| p.user_id).collect::<Vec<_>>(),
            vec![2, 1]
        );
    }
}

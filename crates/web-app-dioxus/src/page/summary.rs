use dioxus::prelude::*;

use fitlog_domain::RecordService;

use crate::{
    Dispatcher,
    component::element::{ErrorMessage, NoData},
};

#[component]
pub fn SummaryPage() -> Element {
    let dispatcher = use_context::<Dispatcher>();
    let summary = dispatcher.service.read().get_summary();

    match summary {
        Ok(summary) if summary.is_empty() => rsx! { NoData {} },
        Ok(summary) => rsx! {
            div {
                class: "table-container",
                table {
                    class: "table is-fullwidth is-hoverable",
                    thead {
                        tr {
                            th { "Exercise" }
                            th { class: "has-text-right", "Entries" }
                            th { "Latest" }
                        }
                    }
                    tbody {
                        for exercise in summary {
                            tr {
                                key: "{exercise.name}",
                                td { "{exercise.name}" }
                                td { class: "has-text-right", "{exercise.count}" }
                                td {
                                    "{exercise.latest.sets} × {exercise.latest.repetitions} at {exercise.latest.measurement} {exercise.latest.unit}"
                                }
                            }
                        }
                    }
                }
            }
        },
        Err(err) => rsx! { ErrorMessage { message: err.to_string() } },
    }
}

use dioxus::prelude::*;

use fitlog_domain as domain;

use crate::{Dispatcher, component::element::Pill, page::weekday_name};

#[component]
pub fn BrowsePage() -> Element {
    let dispatcher = use_context::<Dispatcher>();
    let (today, days) = {
        let controller = dispatcher.controller.read();
        (
            controller.today(),
            controller
                .program()
                .days()
                .map(|(weekday, day)| (weekday, day.clone()))
                .collect::<Vec<_>>(),
        )
    };

    rsx! {
        for (weekday, day) in days {
            div {
                key: "{weekday}",
                class: "box browse-day",
                class: if weekday == today { "is-today" },
                div {
                    class: "is-flex is-justify-content-space-between",
                    h2 { class: "title is-6 mb-2", "{weekday_name(weekday)}" }
                    Pill { text: day.category().to_string(), is_highlighted: weekday == today }
                }
                match &day {
                    domain::DayEntry::Training(_) => rsx! {
                        ul {
                            for entry in day.entries() {
                                li {
                                    key: "{entry.details().name}",
                                    class: if entry.is_read_only() { "has-text-grey" },
                                    "{entry.details().name}"
                                }
                            }
                        }
                    },
                    domain::DayEntry::Rest(rest) => rsx! {
                        p { class: "is-size-7", "{rest.description}" }
                    },
                }
            }
        }
    }
}

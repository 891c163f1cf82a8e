use dioxus::prelude::*;

use fitlog_domain as domain;

use crate::{
    Dispatcher,
    component::element::{BackNavigation, CtaLink, Heading, ListOfPills},
};

#[component]
pub fn WorkoutPage() -> Element {
    let dispatcher = use_context::<Dispatcher>();
    let day = dispatcher.controller.read().today_entry().clone();

    rsx! {
        BackNavigation { onclick: move |_| dispatcher.dispatch(domain::Action::Back) }
        Heading { title: day.category().to_string() }
        for entry in day.entries() {
            WorkoutCard { key: "{entry.details().name}", entry: entry.clone() }
        }
    }
}

#[component]
fn WorkoutCard(entry: domain::ProgramEntry) -> Element {
    let dispatcher = use_context::<Dispatcher>();
    let details = entry.details().clone();
    let name = details.name.clone();

    rsx! {
        div {
            class: "card workout-card mb-4",
            class: if entry.is_read_only() { "is-read-only" },
            div {
                class: "card-content",
                div {
                    class: "media",
                    div {
                        class: "media-left",
                        figure {
                            class: "image is-96x96",
                            img { src: "{details.image}", alt: "{details.alt}" }
                        }
                    }
                    div {
                        class: "media-content",
                        p { class: "title is-6", "{details.name}" }
                        p { class: "is-size-7", "{details.description}" }
                    }
                }
                ListOfPills { pills: details.tags.iter().map(|tag| domain::capitalize(tag)).collect::<Vec<_>>() }
                if !entry.is_read_only() {
                    CtaLink {
                        text: "Add data",
                        onclick: move |_| dispatcher.dispatch(domain::Action::AddData(name.clone())),
                    }
                }
            }
        }
    }
}

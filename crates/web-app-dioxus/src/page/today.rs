use dioxus::prelude::*;

use fitlog_domain as domain;

use crate::{
    Dispatcher,
    component::element::{CtaButton, Heading, ListOfPills},
    page::weekday_name,
};

#[component]
pub fn WorkoutPreview() -> Element {
    let dispatcher = use_context::<Dispatcher>();
    let (today, day) = {
        let controller = dispatcher.controller.read();
        (controller.today(), controller.today_entry().clone())
    };

    rsx! {
        Heading { title: weekday_name(today).to_string(), subtitle: "Today's workout".to_string() }
        div {
            class: "card workout-preview",
            div {
                class: "card-image",
                figure {
                    class: "image is-16by9",
                    img { src: "{day.image()}", alt: "{day.alt()}" }
                }
            }
            div {
                class: "card-content",
                p { class: "title is-5", "{day.category()}" }
                if let domain::DayEntry::Rest(rest) = &day {
                    p { class: "block", "{rest.description}" }
                }
                ListOfPills { pills: day.tags().into_iter().collect::<Vec<_>>() }
                CtaButton {
                    text: "Start workout",
                    icon: "play".to_string(),
                    onclick: move |_| dispatcher.dispatch(domain::Action::StartWorkout),
                }
            }
        }
    }
}

use dioxus::prelude::*;
use strum::Display;

use fitlog_domain as domain;

#[derive(Display, Clone, Copy, PartialEq)]
pub enum Color {
    #[strum(to_string = "primary")]
    Primary,
    #[strum(to_string = "link")]
    Link,
    #[strum(to_string = "info")]
    Info,
    #[strum(to_string = "success")]
    Success,
    #[strum(to_string = "danger")]
    Danger,
}

#[component]
pub fn Pill(text: String, is_highlighted: Option<bool>) -> Element {
    rsx! {
        span {
            class: "tag is-rounded",
            class: if is_highlighted.unwrap_or_default() { "is-primary" },
            "{text}"
        }
    }
}

#[component]
pub fn ListOfPills(pills: Vec<String>) -> Element {
    rsx! {
        div {
            class: "tags",
            for pill in pills {
                Pill { key: "{pill}", text: pill.clone() }
            }
        }
    }
}

#[component]
pub fn Heading(title: String, subtitle: Option<String>) -> Element {
    rsx! {
        div {
            class: "block has-text-centered",
            h1 { class: "title is-5", "{title}" }
            if let Some(subtitle) = subtitle {
                p { class: "subtitle is-6", "{subtitle}" }
            }
        }
    }
}

#[component]
pub fn Icon(name: String, is_small: Option<bool>) -> Element {
    rsx! {
        span {
            class: "icon",
            class: if is_small.unwrap_or_default() { "is-small" },
            i { class: "fas fa-{name}" }
        }
    }
}

#[component]
pub fn CtaButton(
    text: String,
    icon: Option<String>,
    onclick: Option<EventHandler<MouseEvent>>,
) -> Element {
    rsx! {
        button {
            class: "button cta is-primary is-fullwidth",
            onclick: move |evt| {
                if let Some(event_handler) = onclick {
                    event_handler.call(evt);
                }
            },
            if let Some(icon) = icon {
                Icon { name: icon }
            }
            span { "{text}" }
        }
    }
}

#[component]
pub fn CtaLink(text: String, onclick: EventHandler<MouseEvent>) -> Element {
    rsx! {
        a {
            class: "cta-link has-text-link",
            onclick,
            span { "{text}" }
            Icon { name: "plus", is_small: true }
        }
    }
}

#[component]
pub fn BackNavigation(onclick: EventHandler<MouseEvent>) -> Element {
    rsx! {
        a {
            class: "back-navigation is-size-6",
            onclick,
            Icon { name: "chevron-left" }
            span { "Back" }
        }
    }
}

#[component]
pub fn LoadingWheel() -> Element {
    rsx! {
        div {
            class: "loading-wheel is-size-4 has-text-centered",
            i { class: "fas fa-spinner fa-pulse" }
        }
    }
}

#[component]
pub fn Message(children: Element, color: Color) -> Element {
    rsx! {
        div {
            class: "message my-2 is-{color}",
            div {
                class: "message-body p-2",
                {children}
            }
        }
    }
}

/// Transient feedback next to the mounted section. The loading state is shown in place of the
/// triggering button instead.
#[component]
pub fn FeedbackBubble(feedback: Option<domain::Feedback>) -> Element {
    let (color, message) = match feedback {
        Some(domain::Feedback::Success(message)) => (Color::Success, message),
        Some(domain::Feedback::Danger(message)) => (Color::Danger, message),
        Some(domain::Feedback::Info(message)) => (Color::Info, message),
        Some(domain::Feedback::Loading) | None => return rsx! {},
    };
    rsx! {
        div {
            class: "feedback-bubble",
            role: "status",
            Message { color, "{message}" }
        }
    }
}

#[component]
pub fn ErrorMessage(message: String) -> Element {
    rsx! {
        div {
            class: "message is-danger mx-2",
            div {
                class: "message-body has-text-dark",
                "{message}"
            }
        }
    }
}

#[component]
pub fn NoData() -> Element {
    rsx! {
        div {
            class: "block is-size-7 has-text-centered has-text-grey-light mb-6",
            "No data"
        }
    }
}

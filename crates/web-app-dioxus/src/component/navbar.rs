use dioxus::prelude::*;
use log::{error, info};
use strum::IntoEnumIterator;

use fitlog_domain as domain;
use fitlog_web_app as web_app;

use crate::{Dispatcher, component::element::Icon};

#[component]
pub fn Navigation() -> Element {
    let dispatcher = use_context::<Dispatcher>();
    let (active, heading) = {
        let controller = dispatcher.controller.read();
        (controller.active_nav_item(), controller.heading().to_string())
    };
    let mut menu_visible = use_signal(|| false);

    rsx! {
        nav {
            class: "navbar is-fixed-top is-primary has-shadow has-text-weight-bold",
            role: "navigation",
            div {
                class: "container",
                div {
                    class: "navbar-brand is-flex-grow-1",
                    div { class: "navbar-item is-size-5", "{heading}" }
                    div { class: "mx-auto" }
                    a {
                        aria_expanded: menu_visible(),
                        aria_label: "menu",
                        class: "navbar-burger ml-0",
                        class: if menu_visible() { "is-active" },
                        role: "button",
                        onclick: move |_| { *menu_visible.write() = !menu_visible() },
                        span { aria_hidden: "true" }
                        span { aria_hidden: "true" }
                        span { aria_hidden: "true" }
                        span { aria_hidden: "true" }
                    }
                }
                div {
                    class: "navbar-menu is-flex-grow-0",
                    class: if menu_visible() { "is-active" },
                    div {
                        class: "navbar-end",
                        for item in domain::NavItem::iter() {
                            a {
                                key: "{item}",
                                class: "navbar-item",
                                class: if item == active { "is-active" },
                                onclick: move |_| {
                                    *menu_visible.write() = false;
                                    dispatcher.dispatch(domain::Action::Navigate(item));
                                },
                                Icon { name: icon(item).to_string() }
                                "{item}"
                            }
                        }
                        hr { class: "navbar-divider" }
                        a {
                            class: "navbar-item",
                            onclick: move |_| {
                                *menu_visible.write() = false;
                                match web_app::service_worker::post(
                                    &web_app::service_worker::Message::UpdateCache,
                                ) {
                                    Ok(()) => info!("requested offline cache update"),
                                    Err(err) => error!("failed to update offline cache: {err}"),
                                }
                            },
                            Icon { name: "rotate".to_string() }
                            "Update offline data"
                        }
                    }
                }
            }
        }
    }
}

fn icon(item: domain::NavItem) -> &'static str {
    match item {
        domain::NavItem::Today => "calendar-day",
        domain::NavItem::Summary => "chart-simple",
        domain::NavItem::Browse => "list",
    }
}

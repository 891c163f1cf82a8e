#![warn(clippy::pedantic)]
#![allow(clippy::too_many_lines)]

use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex},
};

use chrono::{Datelike, Local};
use dioxus::{core::Task, prelude::*};
use gloo_timers::future::TimeoutFuture;
use log::{debug, error};

use fitlog_domain as domain;
use fitlog_storage::local_storage::LocalStorage;
use fitlog_web_app as web_app;

use component::{element::FeedbackBubble, navbar::Navigation};
use page::{
    browse::BrowsePage, exercise::ExerciseForm, summary::SummaryPage, today::WorkoutPreview,
    workout::WorkoutPage,
};

mod component;
mod page;

fn main() {
    init_logging();
    set_panic_hook();
    dioxus::launch(App);
}

fn init_logging() {
    let _ = web_app::log::init(Arc::new(Mutex::new(LocalStorage)));
}

fn set_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        error!("{info}");
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("main"))
            .map(|el| {
                el.set_inner_html(&format!("
                    <section class=\"section\">
                        <div class=\"container\">
                            <div class=\"message is-danger\">
                                <div class=\"message-header\">
                                    <p>Something went wrong</p>
                                </div>
                                <div class=\"message-body\">
                                    <div class=\"block\">
                                        The application stopped unexpectedly. Your saved data is not affected.
                                    </div>
                                    <div class=\"block\">
                                        <pre>{info}</pre>
                                    </div>
                                    <div class=\"block field is-grouped is-grouped-centered\">
                                        <button class=\"button\" onclick=\"location.reload()\">
                                            <span class=\"icon\">
                                                <i class=\"fa fa-arrow-rotate-right\"></i>
                                            </span>
                                            <span>Reload page</span>
                                        </button>
                                    </div>
                                </div>
                            </div>
                        </div>
                    </section>
                "));
                Some(())
            });
    }));
}

/// Routes user actions into the controller and arms the timers it requests.
#[derive(Clone, Copy)]
pub struct Dispatcher {
    pub controller: Signal<domain::Controller>,
    pub service: Signal<domain::Service<LocalStorage>>,
    tasks: Signal<BTreeMap<domain::TimerID, Task>>,
}

impl Dispatcher {
    pub fn dispatch(self, action: domain::Action) {
        let mut controller = self.controller;
        let timers = controller.write().handle(action, &*self.service.read());
        self.disarm_cancelled_timers();
        for timer in timers {
            self.arm(timer);
        }
    }

    fn arm(self, timer: domain::Timer) {
        let mut tasks = self.tasks;
        let mut controller = self.controller;
        let delay = u32::try_from(timer.delay.as_millis()).unwrap_or(u32::MAX);
        let task = spawn(async move {
            TimeoutFuture::new(delay).await;
            tasks.write().remove(&timer.id);
            if controller.write().elapse(timer.id) {
                self.disarm_cancelled_timers();
            }
        });
        tasks.write().insert(timer.id, task);
    }

    fn disarm_cancelled_timers(self) {
        let mut tasks = self.tasks;
        let controller = self.controller.read();
        tasks.write().retain(|id, task| {
            if controller.is_pending(*id) {
                true
            } else {
                debug!("disarming timer {id}");
                task.cancel();
                false
            }
        });
    }
}

#[component]
fn App() -> Element {
    let controller = use_signal(|| {
        domain::Controller::new(domain::Program::new(), Local::now().weekday())
    });
    let service = use_signal(|| domain::Service::new(LocalStorage, domain::Program::new()));
    let tasks = use_signal(BTreeMap::new);
    use_context_provider(|| Dispatcher {
        controller,
        service,
        tasks,
    });

    use_effect(move || web_app::document::set_page_state(controller.read().page()));

    use_future(|| async {
        if let Err(err) =
            web_app::service_worker::register(web_app::service_worker::SCRIPT_URL).await
        {
            error!("{err}");
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: "/assets/main.css" }

        Navigation {}
        main {
            class: "container is-max-desktop px-3 py-4",
            MainSection {}
        }
    }
}

#[component]
fn MainSection() -> Element {
    let dispatcher = use_context::<Dispatcher>();
    let (mounted, feedback) = {
        let controller = dispatcher.controller.read();
        (controller.section().cloned(), controller.feedback().cloned())
    };

    let Some(mounted) = mounted else {
        return rsx! {};
    };
    let marker = mounted.marker();

    rsx! {
        section {
            class: "{marker}",
            {match mounted {
                domain::Section::WorkoutPreview => rsx! { WorkoutPreview {} },
                domain::Section::Workout => rsx! { WorkoutPage {} },
                domain::Section::ExerciseForm(name) => rsx! { ExerciseForm { name } },
                domain::Section::Summary => rsx! { SummaryPage {} },
                domain::Section::Browse => rsx! { BrowsePage {} },
            }}
        }
        FeedbackBubble { feedback }
    }
}

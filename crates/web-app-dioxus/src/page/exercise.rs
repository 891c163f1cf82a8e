use dioxus::prelude::*;

use fitlog_domain::{self as domain, RecordService};

use crate::{
    Dispatcher,
    component::{
        element::{BackNavigation, CtaButton, ErrorMessage, Heading, LoadingWheel},
        form::FormField,
    },
};

#[component]
pub fn ExerciseForm(name: domain::Name) -> Element {
    let dispatcher = use_context::<Dispatcher>();
    let mut form = use_signal(domain::RecordForm::default);
    let (is_saving, is_loading) = {
        let controller = dispatcher.controller.read();
        (
            controller.is_saving(),
            matches!(controller.feedback(), Some(domain::Feedback::Loading)),
        )
    };
    let latest = dispatcher
        .service
        .read()
        .get_latest_record(name.as_ref())
        .map(|record| record.as_ref().map(describe));

    let errors = {
        let service = dispatcher.service.read();
        let form = form.read();
        [
            field_error(&form.sets, |value| service.validate_sets(value).map(|_| ())),
            field_error(&form.repetitions, |value| {
                service.validate_repetitions(value).map(|_| ())
            }),
            field_error(&form.measurement, |value| {
                service.validate_measurement(value).map(|_| ())
            }),
            field_error(&form.unit, |value| service.validate_unit(value).map(|_| ())),
        ]
    };
    let [sets_error, repetitions_error, measurement_error, unit_error] = errors;

    rsx! {
        BackNavigation { onclick: move |_| dispatcher.dispatch(domain::Action::Back) }
        Heading { title: name.to_string() }
        div {
            class: "block has-text-centered is-size-7",
            match latest {
                Ok(Some(record)) => rsx! { "Last entry: {record}" },
                Ok(None) => rsx! { "No previous entries" },
                Err(err) => rsx! { ErrorMessage { message: err.to_string() } },
            }
        }
        form {
            class: "exercise-data-form",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                dispatcher.dispatch(domain::Action::Save(form.read().clone()));
            },
            FormField {
                label: "Sets",
                name: "sets",
                inputmode: "numeric".to_string(),
                value: form.read().sets.clone(),
                error: sets_error,
                oninput: move |evt: FormEvent| form.write().sets = evt.value(),
            }
            FormField {
                label: "Repetitions",
                name: "repetitions",
                inputmode: "numeric".to_string(),
                value: form.read().repetitions.clone(),
                error: repetitions_error,
                oninput: move |evt: FormEvent| form.write().repetitions = evt.value(),
            }
            FormField {
                label: "Measurement",
                name: "measurement",
                inputmode: "decimal".to_string(),
                value: form.read().measurement.clone(),
                error: measurement_error,
                oninput: move |evt: FormEvent| form.write().measurement = evt.value(),
            }
            FormField {
                label: "Unit",
                name: "unit",
                placeholder: domain::DEFAULT_UNIT.to_string(),
                value: form.read().unit.clone(),
                error: unit_error,
                oninput: move |evt: FormEvent| form.write().unit = evt.value(),
            }
            div {
                class: "field",
                if is_loading {
                    LoadingWheel {}
                } else if !is_saving {
                    CtaButton {
                        text: "Save",
                        icon: "floppy-disk".to_string(),
                    }
                }
            }
        }
    }
}

fn describe(record: &domain::Record) -> String {
    format!(
        "{} × {} at {} {} ({})",
        record.sets,
        record.repetitions,
        record.measurement,
        record.unit,
        record.date.format("%Y-%m-%d")
    )
}

/// Validation message of a field, once the field has been filled in.
fn field_error(
    value: &str,
    validate: impl Fn(&str) -> Result<(), domain::ValidationError>,
) -> Option<String> {
    if value.trim().is_empty() {
        return None;
    }
    validate(value).err().map(|err| err.to_string())
}

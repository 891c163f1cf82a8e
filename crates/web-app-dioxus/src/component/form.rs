use dioxus::prelude::*;

#[component]
pub fn FormField(
    label: String,
    name: String,
    inputmode: Option<String>,
    placeholder: Option<String>,
    value: String,
    error: Option<String>,
    oninput: EventHandler<FormEvent>,
) -> Element {
    let error = error.filter(|error| !error.is_empty());
    rsx! {
        div {
            class: "field",
            label { class: "label", r#for: "{name}", "{label}" }
            div {
                class: "control",
                input {
                    class: "input",
                    class: if error.is_some() { "is-danger" },
                    id: "{name}",
                    name: "{name}",
                    r#type: "text",
                    inputmode: if let Some(inputmode) = inputmode { inputmode },
                    placeholder: if let Some(placeholder) = placeholder { placeholder },
                    value: "{value}",
                    oninput: move |evt| oninput.call(evt),
                }
            }
            if let Some(ref error) = error {
                p { class: "help is-danger", "{error}" }
            }
        }
    }
}

use wasm_bindgen_futures::JsFuture;

pub const SCRIPT_URL: &str = "/service-worker.js";

#[derive(serde::Serialize)]
#[serde(tag = "task", content = "content")]
pub enum Message {
    UpdateCache,
}

/// Registers the offline cache worker.
#[allow(clippy::missing_errors_doc)]
pub async fn register(script_url: &str) -> Result<(), String> {
    let Some(window) = web_sys::window() else {
        return Err("failed to get window".to_string());
    };
    let promise = window.navigator().service_worker().register(script_url);
    match JsFuture::from(promise).await {
        Ok(_) => Ok(()),
        Err(err) => Err(format!("failed to register service worker: {err:?}")),
    }
}

#[allow(clippy::missing_errors_doc)]
pub fn post(message: &Message) -> Result<(), String> {
    let Some(window) = web_sys::window() else {
        return Err("failed to get window".to_string());
    };
    let Some(service_worker) = window.navigator().service_worker().controller() else {
        return Err("failed to get service worker".to_string());
    };
    let json_message = serde_wasm_bindgen::to_value(message)
        .map_err(|err| format!("failed to prepare message for service worker: {err}"))?;
    service_worker
        .post_message(&json_message)
        .map_err(|err| format!("failed to post message to service worker: {err:?}"))
}

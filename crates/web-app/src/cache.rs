//! Offline cache policy
//!
//! The service worker (`public/service-worker.js` of the Dioxus app) precaches [`ASSETS`] under
//! [`CACHE_NAME`] on installation, answers fetches from the cache with a network fallback and
//! deletes every other cache on activation. The tests below fail if the worker script and these
//! constants diverge.
//!
//! Every asset must exist in the deployed app, as a single missing asset aborts the installation.

pub const CACHE_NAME: &str = "fitlog-cache-v1";

pub const ASSETS: [&str; 3] = ["/", "/index.html", "/assets/main.css"];

#![warn(clippy::pedantic)]

pub mod cache;
pub mod document;
pub mod log;
pub mod service_worker;

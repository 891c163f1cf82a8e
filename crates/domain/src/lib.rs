#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod controller;
mod error;
mod form;
mod name;
mod page;
mod program;
mod record;
mod service;

pub use controller::{
    Action, Controller, Feedback, INFO_MESSAGE_DURATION, LOADING_DURATION, NO_WORKOUT_MESSAGE,
    RETRY_DELAY, SAVE_FAILED_MESSAGE, SUCCESS_MESSAGE, SUCCESS_MESSAGE_DURATION, TIME_UNIT, Timer,
    TimerID,
};
pub use error::{CreateError, ReadError, StorageError, ValidationError};
pub use form::{RecordForm, RecordInput};
pub use name::{Name, NameError};
pub use page::{NavItem, Page, Render, Renderer, Section};
pub use program::{
    DayEntry, Entry, Program, ProgramEntry, REST_DAY_CATEGORY, RestDay, TrainingDay,
};
pub use record::{
    DEFAULT_UNIT, ExerciseSummary, Measurement, MeasurementError, Record, RecordRepository,
    RecordService, Reps, RepsError, Sets, SetsError, Unit, UnitError,
};
pub use service::Service;

/// Uppercases the first character and lowercases the rest.
#[must_use]
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

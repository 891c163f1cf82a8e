//! Application controller
//!
//! The controller owns the whole state of a page session: the program, the mounted section, the
//! navigation bar, the heading, the transient feedback and the pending timers. User interactions
//! are fed in as [`Action`]s. Delayed effects are requested as [`Timer`]s, which the caller arms
//! and reports back through [`Controller::elapse`]. A timer that is no longer pending must be
//! disarmed by the caller and is ignored if it fires anyway.

use std::{collections::BTreeMap, time::Duration};

use chrono::Weekday;
use derive_more::Display;
use log::{debug, error, warn};

use crate::{
    CreateError, DayEntry, Name, NavItem, Page, Program, RecordForm, RecordService,
    Render, Renderer, Section, capitalize,
};

pub const TIME_UNIT: Duration = Duration::from_millis(1000);
pub const LOADING_DURATION: Duration = TIME_UNIT;
pub const SUCCESS_MESSAGE_DURATION: Duration = Duration::from_millis(2000);
pub const RETRY_DELAY: Duration = Duration::from_millis(2000);
pub const INFO_MESSAGE_DURATION: Duration = Duration::from_millis(2000);

pub const SUCCESS_MESSAGE: &str = "Data has been successfully saved";
pub const SAVE_FAILED_MESSAGE: &str = "Data could not be saved";
pub const NO_WORKOUT_MESSAGE: &str = "No workout scheduled today";

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Navigate(NavItem),
    StartWorkout,
    AddData(Name),
    Back,
    Save(RecordForm),
}

/// Transient indicator shown next to the mounted section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Loading,
    Success(String),
    Danger(String),
    Info(String),
}

#[derive(Display, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerID(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    pub id: TimerID,
    pub delay: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerEvent {
    ShowSuccess,
    ReturnToWorkout,
    ReshowForm,
    DismissFeedback,
}

#[derive(Debug, Clone)]
pub struct Controller {
    program: Program,
    today: Weekday,
    renderer: Renderer,
    active: NavItem,
    heading: String,
    feedback: Option<Feedback>,
    timers: BTreeMap<TimerID, TimerEvent>,
    next_timer_id: u64,
}

impl Controller {
    #[must_use]
    pub fn new(program: Program, today: Weekday) -> Self {
        let mut renderer = Renderer::new();
        renderer.render(Section::WorkoutPreview);
        Self {
            program,
            today,
            renderer,
            active: NavItem::Today,
            heading: capitalize(Page::Today.as_ref()),
            feedback: None,
            timers: BTreeMap::new(),
            next_timer_id: 0,
        }
    }

    #[must_use]
    pub fn program(&self) -> &Program {
        &self.program
    }

    #[must_use]
    pub fn today(&self) -> Weekday {
        self.today
    }

    #[must_use]
    pub fn today_entry(&self) -> &DayEntry {
        self.program.day(self.today)
    }

    #[must_use]
    pub fn page(&self) -> Page {
        self.renderer.page()
    }

    #[must_use]
    pub fn section(&self) -> Option<&Section> {
        self.renderer.mounted()
    }

    #[must_use]
    pub fn active_nav_item(&self) -> NavItem {
        self.active
    }

    #[must_use]
    pub fn heading(&self) -> &str {
        &self.heading
    }

    #[must_use]
    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    /// A record has been saved and the form awaits the return to the workout page.
    #[must_use]
    pub fn is_saving(&self) -> bool {
        matches!(self.feedback, Some(Feedback::Loading | Feedback::Success(_)))
    }

    #[must_use]
    pub fn is_pending(&self, id: TimerID) -> bool {
        self.timers.contains_key(&id)
    }

    /// Applies a user action and returns the timers to be armed.
    pub fn handle<S: RecordService>(&mut self, action: Action, records: &S) -> Vec<Timer> {
        match action {
            Action::Navigate(item) => {
                self.navigate(item);
                vec![]
            }
            Action::StartWorkout => self.start_workout(),
            Action::AddData(name) => {
                self.add_data(name, records);
                vec![]
            }
            Action::Back => {
                self.back();
                vec![]
            }
            Action::Save(form) => self.save(&form, records),
        }
    }

    /// Applies the effect of an elapsed timer. Returns false if the timer was cancelled.
    pub fn elapse(&mut self, id: TimerID) -> bool {
        let Some(event) = self.timers.remove(&id) else {
            debug!("ignoring cancelled timer {id}");
            return false;
        };

        match event {
            TimerEvent::ShowSuccess => {
                self.feedback = Some(Feedback::Success(SUCCESS_MESSAGE.to_string()));
            }
            TimerEvent::ReturnToWorkout => self.show(Section::Workout),
            TimerEvent::ReshowForm | TimerEvent::DismissFeedback => self.feedback = None,
        }

        true
    }

    fn navigate(&mut self, item: NavItem) {
        self.active = item;
        self.show(item.section());
        self.heading = capitalize(item.as_ref());
    }

    fn start_workout(&mut self) -> Vec<Timer> {
        if self.page() != Page::Today {
            return vec![];
        }

        if self.today_entry().is_training() {
            self.show(Section::Workout);
            vec![]
        } else {
            self.cancel_timers();
            self.feedback = Some(Feedback::Info(NO_WORKOUT_MESSAGE.to_string()));
            vec![self.schedule(INFO_MESSAGE_DURATION, TimerEvent::DismissFeedback)]
        }
    }

    fn add_data<S: RecordService>(&mut self, name: Name, records: &S) {
        if self.page() != Page::Workout {
            warn!("ignoring request to add data outside of workout page");
            return;
        }

        match records.validate_name(name.as_ref()) {
            Ok(name) => self.show(Section::ExerciseForm(name)),
            Err(err) => warn!("ignoring request to add data: {err}"),
        }
    }

    fn back(&mut self) {
        match self.page() {
            Page::Workout => self.show(Section::WorkoutPreview),
            Page::Exercise => self.show(Section::Workout),
            Page::Today | Page::Summary | Page::Browse => {}
        }
    }

    fn save<S: RecordService>(&mut self, form: &RecordForm, records: &S) -> Vec<Timer> {
        let Some(Section::ExerciseForm(name)) = self.renderer.mounted().cloned() else {
            warn!("ignoring save outside of exercise form");
            return vec![];
        };

        if self.is_saving() {
            warn!("ignoring save of already saved record for \"{name}\"");
            return vec![];
        }

        self.cancel_timers();

        let result = match form.extract() {
            Ok(input) => records.create_record(
                name.as_ref(),
                input.sets,
                input.repetitions,
                input.measurement,
                &input.unit,
            ),
            Err(err) => {
                error!("invalid input for \"{name}\": {err}");
                Err(CreateError::Validation(err))
            }
        };

        match result {
            Ok(_) => {
                self.feedback = Some(Feedback::Loading);
                vec![
                    self.schedule(LOADING_DURATION, TimerEvent::ShowSuccess),
                    self.schedule(
                        LOADING_DURATION + SUCCESS_MESSAGE_DURATION,
                        TimerEvent::ReturnToWorkout,
                    ),
                ]
            }
            Err(err) => {
                self.feedback = Some(Feedback::Danger(match err {
                    CreateError::Validation(err) => err.to_string(),
                    CreateError::Storage(_) => SAVE_FAILED_MESSAGE.to_string(),
                }));
                vec![self.schedule(RETRY_DELAY, TimerEvent::ReshowForm)]
            }
        }
    }

    fn show(&mut self, section: Section) {
        self.cancel_timers();
        self.feedback = None;
        if self.renderer.render(section) == Render::Unchanged {
            debug!("section of page {} already mounted", self.page());
        }
    }

    fn schedule(&mut self, delay: Duration, event: TimerEvent) -> Timer {
        let id = TimerID(self.next_timer_id);
        self.next_timer_id += 1;
        self.timers.insert(id, event);
        Timer { id, delay }
    }

    fn cancel_timers(&mut self) {
        if !self.timers.is_empty() {
            debug!("cancelling {} pending timers", self.timers.len());
            self.timers.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::{Service, tests::repository::InMemoryRepository};

    use super::*;

    fn service() -> Service<InMemoryRepository> {
        Service::new(InMemoryRepository::default(), Program::new())
    }

    fn name(name: &str) -> Name {
        Name::new(name).unwrap()
    }

    fn form(sets: &str, repetitions: &str, measurement: &str, unit: &str) -> RecordForm {
        RecordForm {
            sets: sets.to_string(),
            repetitions: repetitions.to_string(),
            measurement: measurement.to_string(),
            unit: unit.to_string(),
        }
    }

    fn controller_on_exercise_form(exercise: &str) -> Controller {
        let service = service();
        let mut controller = Controller::new(Program::new(), Weekday::Mon);
        controller.handle(Action::StartWorkout, &service);
        controller.handle(Action::AddData(name(exercise)), &service);
        controller
    }

    #[test]
    fn test_controller_initial_state() {
        let controller = Controller::new(Program::new(), Weekday::Mon);
        assert_eq!(controller.page(), Page::Today);
        assert_eq!(controller.section(), Some(&Section::WorkoutPreview));
        assert_eq!(controller.active_nav_item(), NavItem::Today);
        assert_eq!(controller.heading(), "Today");
        assert_eq!(controller.feedback(), None);
        assert_eq!(controller.today_entry().category(), "Upper Body - Push");
    }

    #[test]
    fn test_controller_start_workout_on_training_day() {
        let service = service();
        let mut controller = Controller::new(Program::new(), Weekday::Tue);
        assert_eq!(controller.handle(Action::StartWorkout, &service), vec![]);
        assert_eq!(controller.page(), Page::Workout);
        assert_eq!(controller.section(), Some(&Section::Workout));
    }

    #[rstest]
    #[case(Weekday::Wed)]
    #[case(Weekday::Sun)]
    fn test_controller_start_workout_on_rest_day(#[case] today: Weekday) {
        let service = service();
        let mut controller = Controller::new(Program::new(), today);
        let timers = controller.handle(Action::StartWorkout, &service);

        assert_eq!(controller.page(), Page::Today);
        assert_eq!(
            controller.feedback(),
            Some(&Feedback::Info(NO_WORKOUT_MESSAGE.to_string()))
        );
        assert_eq!(timers.len(), 1);
        assert_eq!(timers[0].delay, 2 * TIME_UNIT);

        assert!(controller.elapse(timers[0].id));
        assert_eq!(controller.feedback(), None);
        assert_eq!(controller.page(), Page::Today);
    }

    #[test]
    fn test_controller_navigate() {
        let service = service();
        let mut controller = Controller::new(Program::new(), Weekday::Mon);

        controller.handle(Action::Navigate(NavItem::Summary), &service);
        assert_eq!(controller.page(), Page::Summary);
        assert_eq!(controller.active_nav_item(), NavItem::Summary);
        assert_eq!(controller.heading(), "Summary");

        controller.handle(Action::Navigate(NavItem::Browse), &service);
        assert_eq!(controller.page(), Page::Browse);
        assert_eq!(controller.section(), Some(&Section::Browse));
        assert_eq!(controller.active_nav_item(), NavItem::Browse);
        assert_eq!(controller.heading(), "Browse");

        controller.handle(Action::Navigate(NavItem::Today), &service);
        assert_eq!(controller.page(), Page::Today);
        assert_eq!(controller.active_nav_item(), NavItem::Today);
        assert_eq!(controller.heading(), "Today");
    }

    #[test]
    fn test_controller_add_data() {
        let controller = controller_on_exercise_form("Plank");
        assert_eq!(controller.page(), Page::Exercise);
        assert_eq!(
            controller.section(),
            Some(&Section::ExerciseForm(name("Plank")))
        );
    }

    #[test]
    fn test_controller_add_data_outside_of_workout_page() {
        let service = service();
        let mut controller = Controller::new(Program::new(), Weekday::Mon);
        controller.handle(Action::AddData(name("Plank")), &service);
        assert_eq!(controller.page(), Page::Today);
    }

    #[test]
    fn test_controller_add_data_for_read_only_entry() {
        let service = service();
        let mut controller = Controller::new(Program::new(), Weekday::Mon);
        controller.handle(Action::StartWorkout, &service);
        controller.handle(Action::AddData(name("Warm up")), &service);
        assert_eq!(controller.page(), Page::Workout);
    }

    #[test]
    fn test_controller_add_data_for_unknown_exercise() {
        let service = service();
        let mut controller = Controller::new(Program::new(), Weekday::Mon);
        controller.handle(Action::StartWorkout, &service);
        controller.handle(Action::AddData(name("Nonexistent Move")), &service);
        assert_eq!(controller.page(), Page::Workout);
        assert_eq!(controller.section(), Some(&Section::Workout));
    }

    #[test]
    fn test_controller_back() {
        let service = service();
        let mut controller = controller_on_exercise_form("Plank");

        controller.handle(Action::Back, &service);
        assert_eq!(controller.page(), Page::Workout);

        controller.handle(Action::Back, &service);
        assert_eq!(controller.page(), Page::Today);

        controller.handle(Action::Back, &service);
        assert_eq!(controller.page(), Page::Today);
    }

    #[test]
    fn test_controller_save() {
        let service = service();
        let mut controller = controller_on_exercise_form("Barbell Bench Press");

        let timers = controller.handle(Action::Save(form("4", "10", "60", "kg")), &service);

        assert_eq!(controller.feedback(), Some(&Feedback::Loading));
        assert_eq!(
            timers.iter().map(|t| t.delay).collect::<Vec<_>>(),
            vec![TIME_UNIT, 3 * TIME_UNIT]
        );
        assert_eq!(service.get_records("Barbell Bench Press").unwrap().len(), 1);

        assert!(controller.elapse(timers[0].id));
        assert_eq!(
            controller.feedback(),
            Some(&Feedback::Success(SUCCESS_MESSAGE.to_string()))
        );
        assert_eq!(controller.page(), Page::Exercise);

        assert!(controller.elapse(timers[1].id));
        assert_eq!(controller.feedback(), None);
        assert_eq!(controller.page(), Page::Workout);
    }

    #[test]
    fn test_controller_save_missing_field() {
        let service = service();
        let mut controller = controller_on_exercise_form("Plank");

        let timers = controller.handle(Action::Save(form("3", "", "0", "")), &service);

        assert_eq!(
            controller.feedback(),
            Some(&Feedback::Danger(
                "Please fill in all the required fields".to_string()
            ))
        );
        assert_eq!(timers.len(), 1);
        assert_eq!(timers[0].delay, RETRY_DELAY);
        assert!(service.get_records("Plank").unwrap().is_empty());

        assert!(controller.elapse(timers[0].id));
        assert_eq!(controller.feedback(), None);
        assert_eq!(
            controller.section(),
            Some(&Section::ExerciseForm(name("Plank")))
        );
    }

    #[test]
    fn test_controller_save_ignored_until_return_to_workout() {
        let service = service();
        let mut controller = controller_on_exercise_form("Barbell Bench Press");

        let timers = controller.handle(Action::Save(form("4", "10", "60", "kg")), &service);

        assert_eq!(
            controller.handle(Action::Save(form("4", "10", "60", "kg")), &service),
            vec![]
        );
        assert_eq!(controller.feedback(), Some(&Feedback::Loading));
        assert!(controller.is_saving());

        assert!(controller.elapse(timers[0].id));
        assert!(controller.is_saving());
        assert_eq!(
            controller.handle(Action::Save(form("4", "10", "60", "kg")), &service),
            vec![]
        );
        assert_eq!(
            controller.feedback(),
            Some(&Feedback::Success(SUCCESS_MESSAGE.to_string()))
        );
        assert!(controller.is_pending(timers[1].id));
        assert_eq!(service.get_records("Barbell Bench Press").unwrap().len(), 1);

        assert!(controller.elapse(timers[1].id));
        assert_eq!(controller.page(), Page::Workout);
        assert!(!controller.is_saving());
    }

    #[test]
    fn test_controller_save_retry_after_failure() {
        let service = service();
        let mut controller = controller_on_exercise_form("Plank");

        controller.handle(Action::Save(form("3", "", "0", "")), &service);
        let timers = controller.handle(Action::Save(form("3", "1", "45", "s")), &service);

        assert_eq!(timers.len(), 2);
        assert_eq!(controller.feedback(), Some(&Feedback::Loading));
        assert_eq!(service.get_records("Plank").unwrap().len(), 1);
    }

    #[test]
    fn test_controller_save_storage_failure() {
        let service = Service::new(InMemoryRepository::unavailable(), Program::new());
        let mut controller = controller_on_exercise_form("Plank");

        controller.handle(Action::Save(form("3", "1", "0", "s")), &service);

        assert_eq!(
            controller.feedback(),
            Some(&Feedback::Danger(SAVE_FAILED_MESSAGE.to_string()))
        );
        assert_eq!(controller.page(), Page::Exercise);
    }

    #[test]
    fn test_controller_save_outside_of_exercise_form() {
        let service = service();
        let mut controller = Controller::new(Program::new(), Weekday::Mon);

        let timers = controller.handle(Action::Save(form("4", "10", "60", "kg")), &service);

        assert_eq!(timers, vec![]);
        assert_eq!(controller.feedback(), None);
    }

    #[test]
    fn test_controller_navigation_cancels_timers() {
        let service = service();
        let mut controller = controller_on_exercise_form("Plank");

        let timers = controller.handle(Action::Save(form("3", "1", "45", "s")), &service);
        assert!(timers.iter().all(|t| controller.is_pending(t.id)));

        controller.handle(Action::Navigate(NavItem::Summary), &service);
        assert!(timers.iter().all(|t| !controller.is_pending(t.id)));

        assert!(!controller.elapse(timers[0].id));
        assert!(!controller.elapse(timers[1].id));
        assert_eq!(controller.page(), Page::Summary);
        assert_eq!(controller.feedback(), None);
    }

    #[test]
    fn test_controller_repeated_info_message_replaces_timer() {
        let service = service();
        let mut controller = Controller::new(Program::new(), Weekday::Wed);

        let first = controller.handle(Action::StartWorkout, &service);
        let second = controller.handle(Action::StartWorkout, &service);

        assert!(!controller.is_pending(first[0].id));
        assert!(controller.is_pending(second[0].id));
        assert!(!controller.elapse(first[0].id));
        assert!(controller.feedback().is_some());
        assert!(controller.elapse(second[0].id));
        assert!(controller.feedback().is_none());
    }
}

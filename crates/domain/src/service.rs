use chrono::Utc;
use log::{debug, error};

use crate::{
    CreateError, ExerciseSummary, Name, Program, ReadError, Record, RecordRepository,
    RecordService, ValidationError,
};

pub struct Service<R> {
    repository: R,
    program: Program,
}

impl<R> Service<R> {
    pub fn new(repository: R, program: Program) -> Self {
        Self {
            repository,
            program,
        }
    }
}

macro_rules! log_on_error {
    ($result: expr, $action: literal, $entity: literal) => {{
        let result = $result;
        if let Err(ref err) = result {
            error!("failed to {} {}: {err}", $action, $entity);
        }
        result
    }};
}

impl<R: RecordRepository> Service<R> {
    fn read_records(&self, name: &str) -> Result<Vec<Record>, ReadError> {
        // Names outside of the program cannot have records.
        let Ok(name) = self.program.validate_exercise_name(name) else {
            return Ok(vec![]);
        };
        Ok(self.repository.read_records(&name)?)
    }

    fn append_record(
        &self,
        name: &str,
        sets: u32,
        repetitions: u32,
        measurement: f32,
        unit: &str,
    ) -> Result<Record, CreateError> {
        let name = self.program.validate_exercise_name(name)?;
        let record = Record::new(Utc::now(), sets, repetitions, measurement, unit)?;

        let mut records = self.repository.read_records(&name)?;
        if records.is_empty() {
            debug!("no records found for \"{name}\", initializing new records");
        }
        records.push(record.clone());
        self.repository.write_records(&name, &records)?;

        Ok(record)
    }
}

impl<R: RecordRepository> RecordService for Service<R> {
    fn get_records(&self, name: &str) -> Result<Vec<Record>, ReadError> {
        log_on_error!(self.read_records(name), "get", "records")
    }

    fn create_record(
        &self,
        name: &str,
        sets: u32,
        repetitions: u32,
        measurement: f32,
        unit: &str,
    ) -> Result<Record, CreateError> {
        log_on_error!(
            self.append_record(name, sets, repetitions, measurement, unit),
            "create",
            "record"
        )
    }

    fn get_summary(&self) -> Result<Vec<ExerciseSummary>, ReadError> {
        log_on_error!(
            self.program
                .exercises()
                .filter_map(|exercise| {
                    match self.repository.read_records(&exercise.name) {
                        Ok(mut records) => records.pop().map(|latest| {
                            Ok(ExerciseSummary {
                                name: exercise.name.clone(),
                                count: records.len() + 1,
                                latest,
                            })
                        }),
                        Err(err) => Some(Err(ReadError::from(err))),
                    }
                })
                .collect::<Result<Vec<_>, _>>(),
            "get",
            "summary"
        )
    }

    fn validate_name(&self, name: &str) -> Result<Name, ValidationError> {
        self.program.validate_exercise_name(name)
    }
}

use chrono::{DateTime, Utc};
use derive_more::{Display, Into};

use crate::{CreateError, Name, ReadError, StorageError, ValidationError};

pub const DEFAULT_UNIT: &str = "kg";

pub trait RecordRepository {
    fn read_records(&self, name: &Name) -> Result<Vec<Record>, StorageError>;
    fn write_records(&self, name: &Name, records: &[Record]) -> Result<(), StorageError>;
}

pub trait RecordService {
    /// Records of an exercise in the order they were created.
    ///
    /// An exercise without records yields an empty sequence.
    fn get_records(&self, name: &str) -> Result<Vec<Record>, ReadError>;

    /// Appends a new record to the records of a known exercise.
    fn create_record(
        &self,
        name: &str,
        sets: u32,
        repetitions: u32,
        measurement: f32,
        unit: &str,
    ) -> Result<Record, CreateError>;

    /// Number of records and latest record of every exercise with records, in program order.
    fn get_summary(&self) -> Result<Vec<ExerciseSummary>, ReadError>;

    fn get_latest_record(&self, name: &str) -> Result<Option<Record>, ReadError> {
        Ok(self.get_records(name)?.pop())
    }

    /// Exercise name that is known to the program.
    fn validate_name(&self, name: &str) -> Result<Name, ValidationError>;

    fn validate_sets(&self, sets: &str) -> Result<Sets, ValidationError> {
        Ok(Sets::try_from(sets)?)
    }

    fn validate_repetitions(&self, repetitions: &str) -> Result<Reps, ValidationError> {
        Ok(Reps::try_from(repetitions)?)
    }

    fn validate_measurement(&self, measurement: &str) -> Result<Measurement, ValidationError> {
        Ok(Measurement::try_from(measurement)?)
    }

    /// A blank unit falls back to the default unit.
    fn validate_unit(&self, unit: &str) -> Result<Unit, ValidationError> {
        if unit.trim().is_empty() {
            return Ok(Unit::default());
        }
        Ok(Unit::new(unit)?)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub date: DateTime<Utc>,
    pub sets: Sets,
    pub repetitions: Reps,
    pub measurement: Measurement,
    pub unit: Unit,
}

impl Record {
    pub fn new(
        date: DateTime<Utc>,
        sets: u32,
        repetitions: u32,
        measurement: f32,
        unit: &str,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            date,
            sets: Sets::new(sets),
            repetitions: Reps::new(repetitions),
            measurement: Measurement::new(measurement)?,
            unit: Unit::new(unit)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseSummary {
    pub name: Name,
    pub count: usize,
    pub latest: Record,
}

#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Sets(u32);

impl Sets {
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }
}

impl TryFrom<&str> for Sets {
    type Error = SetsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<u32>() {
            Ok(parsed_value) => Ok(Sets::new(parsed_value)),
            Err(_) => Err(SetsError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SetsError {
    #[error("Sets must be a non-negative integer")]
    ParseError,
}

#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Reps(u32);

impl Reps {
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }
}

impl TryFrom<&str> for Reps {
    type Error = RepsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<u32>() {
            Ok(parsed_value) => Ok(Reps::new(parsed_value)),
            Err(_) => Err(RepsError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RepsError {
    #[error("Reps must be a non-negative integer")]
    ParseError,
}

/// Weight, distance or duration of a record, interpreted according to its unit.
#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Measurement(f32);

impl Measurement {
    pub fn new(value: f32) -> Result<Self, MeasurementError> {
        if !value.is_finite() || value < 0.0 {
            return Err(MeasurementError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Measurement {
    type Error = MeasurementError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.replace(',', ".").trim().parse::<f32>() {
            Ok(parsed_value) => Measurement::new(parsed_value),
            Err(_) => Err(MeasurementError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum MeasurementError {
    #[error("Measurement must be a non-negative number")]
    OutOfRange,
    #[error("Measurement must be a decimal number")]
    ParseError,
}

#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub struct Unit(String);

impl Unit {
    pub fn new(unit: &str) -> Result<Self, UnitError> {
        let trimmed_unit = unit.trim();

        if trimmed_unit.is_empty() {
            return Err(UnitError::Empty);
        }

        Ok(Self(trimmed_unit.to_string()))
    }
}

impl Default for Unit {
    fn default() -> Self {
        Self(DEFAULT_UNIT.to_string())
    }
}

impl AsRef<str> for Unit {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum UnitError {
    #[error("Unit must not be empty")]
    Empty,
}

use crate::{MeasurementError, NameError, RepsError, SetsError, UnitError};

#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(thiserror::Error, Debug)]
pub enum CreateError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<ReadError> for CreateError {
    fn from(value: ReadError) -> Self {
        match value {
            ReadError::Storage(storage) => CreateError::Storage(storage),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("local storage is not available, data will not persist")]
    Unavailable,
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Please fill in all the required fields")]
    MissingField,
    #[error(transparent)]
    Name(#[from] NameError),
    #[error("Exercise \"{0}\" does not exist in the program")]
    UnknownExercise(String),
    #[error(transparent)]
    Sets(#[from] SetsError),
    #[error(transparent)]
    Reps(#[from] RepsError),
    #[error(transparent)]
    Measurement(#[from] MeasurementError),
    #[error(transparent)]
    Unit(#[from] UnitError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_error_from_read_error() {
        assert!(matches!(
            CreateError::from(ReadError::Storage(StorageError::Unavailable)),
            CreateError::Storage(StorageError::Unavailable)
        ));
        assert!(matches!(
            CreateError::from(ReadError::Storage(StorageError::Other("foo".into()))),
            CreateError::Storage(StorageError::Other(error)) if error.to_string() == "foo"
        ));
    }

    #[test]
    fn test_validation_error_display() {
        assert_eq!(
            ValidationError::UnknownExercise("Nonexistent Move".to_string()).to_string(),
            "Exercise \"Nonexistent Move\" does not exist in the program"
        );
        assert_eq!(
            ValidationError::from(NameError::Empty).to_string(),
            "Name must not be empty"
        );
    }
}

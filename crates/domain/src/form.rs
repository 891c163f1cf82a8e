use crate::{DEFAULT_UNIT, Measurement, Reps, Sets, ValidationError};

/// Raw values of the record form, in the order of the form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordForm {
    pub sets: String,
    pub repetitions: String,
    pub measurement: String,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordInput {
    pub sets: u32,
    pub repetitions: u32,
    pub measurement: f32,
    pub unit: String,
}

impl RecordForm {
    /// Extracts the four record values from the form.
    ///
    /// The numeric fields are required. A blank unit falls back to the default unit.
    pub fn extract(&self) -> Result<RecordInput, ValidationError> {
        if [&self.sets, &self.repetitions, &self.measurement]
            .iter()
            .any(|value| value.trim().is_empty())
        {
            return Err(ValidationError::MissingField);
        }

        let unit = self.unit.trim();

        Ok(RecordInput {
            sets: Sets::try_from(self.sets.as_str())?.into(),
            repetitions: Reps::try_from(self.repetitions.as_str())?.into(),
            measurement: Measurement::try_from(self.measurement.as_str())?.into(),
            unit: if unit.is_empty() {
                DEFAULT_UNIT.to_string()
            } else {
                unit.to_string()
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::{MeasurementError, RepsError, SetsError};

    use super::*;

    fn form(sets: &str, repetitions: &str, measurement: &str, unit: &str) -> RecordForm {
        RecordForm {
            sets: sets.to_string(),
            repetitions: repetitions.to_string(),
            measurement: measurement.to_string(),
            unit: unit.to_string(),
        }
    }

    #[rstest]
    #[case::complete(
        form("4", "10", "60", "lbs"),
        Ok(RecordInput { sets: 4, repetitions: 10, measurement: 60.0, unit: "lbs".to_string() })
    )]
    #[case::default_unit(
        form("3", "12", "22.5", "  "),
        Ok(RecordInput { sets: 3, repetitions: 12, measurement: 22.5, unit: "kg".to_string() })
    )]
    #[case::missing_sets(form("", "10", "60", "kg"), Err(ValidationError::MissingField))]
    #[case::missing_repetitions(form("4", " ", "60", "kg"), Err(ValidationError::MissingField))]
    #[case::missing_measurement(form("4", "10", "", ""), Err(ValidationError::MissingField))]
    #[case::invalid_sets(
        form("four", "10", "60", "kg"),
        Err(ValidationError::Sets(SetsError::ParseError))
    )]
    #[case::invalid_repetitions(
        form("4", "ten", "60", "kg"),
        Err(ValidationError::Reps(RepsError::ParseError))
    )]
    #[case::invalid_measurement(
        form("4", "10", "-5", "kg"),
        Err(ValidationError::Measurement(MeasurementError::OutOfRange))
    )]
    #[case::large_values(
        form("120", "1000", "10000", "m"),
        Ok(RecordInput { sets: 120, repetitions: 1000, measurement: 10000.0, unit: "m".to_string() })
    )]
    fn test_record_form_extract(
        #[case] form: RecordForm,
        #[case] expected: Result<RecordInput, ValidationError>,
    ) {
        assert_eq!(form.extract(), expected);
    }
}

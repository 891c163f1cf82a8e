use std::collections::VecDeque;

use chrono::{DateTime, SecondsFormat, Utc};
use fitlog_domain as domain;
use fitlog_web_app::log;
use gloo_storage::{Storage, errors::StorageError as GlooStorageError};
use serde::{Deserialize, Serialize};

const KEY_LOG: &str = "log";
const LOG_CAPACITY: usize = 100;

/// Browser `localStorage`, holding one JSON array of records per exercise name.
pub struct LocalStorage;

impl LocalStorage {
    fn check_availability() -> Result<(), domain::StorageError> {
        match web_sys::window().map(|window| window.local_storage()) {
            Some(Ok(Some(_))) => Ok(()),
            _ => Err(domain::StorageError::Unavailable),
        }
    }

    fn read<T: for<'de> Deserialize<'de>>(
        key: &str,
        default: T,
    ) -> Result<T, domain::StorageError> {
        Self::check_availability()?;
        match gloo_storage::LocalStorage::get(key) {
            Ok(value) => Ok(value),
            Err(GlooStorageError::KeyNotFound(_)) => Ok(default),
            Err(err) => Err(domain::StorageError::Other(Box::new(err))),
        }
    }

    fn write<T: Serialize>(key: &str, value: T) -> Result<(), domain::StorageError> {
        Self::check_availability()?;
        gloo_storage::LocalStorage::set(key, value)
            .map_err(|err| domain::StorageError::Other(Box::new(err)))
    }
}

impl domain::RecordRepository for LocalStorage {
    fn read_records(
        &self,
        name: &domain::Name,
    ) -> Result<Vec<domain::Record>, domain::StorageError> {
        Self::read::<Vec<Record>>(name.as_ref(), vec![])?
            .into_iter()
            .map(|record| {
                domain::Record::try_from(record)
                    .map_err(|err| domain::StorageError::Other(Box::new(err)))
            })
            .collect()
    }

    fn write_records(
        &self,
        name: &domain::Name,
        records: &[domain::Record],
    ) -> Result<(), domain::StorageError> {
        Self::write(
            name.as_ref(),
            records.iter().map(Record::from).collect::<Vec<_>>(),
        )
    }
}

impl log::Repository for LocalStorage {
    fn read_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        Self::read(KEY_LOG, VecDeque::new()).map_err(|err| log::Error::Unknown(err.to_string()))
    }

    fn write_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        let mut entries = self.read_entries()?;
        entries.push_front(entry);
        entries.truncate(LOG_CAPACITY);
        Self::write(KEY_LOG, entries).map_err(|err| log::Error::Unknown(err.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Record {
    date: String,
    sets: u32,
    repetitions: u32,
    measurement: f32,
    unit: String,
}

impl From<&domain::Record> for Record {
    fn from(value: &domain::Record) -> Self {
        Self {
            date: value.date.to_rfc3339_opts(SecondsFormat::Millis, true),
            sets: value.sets.into(),
            repetitions: value.repetitions.into(),
            measurement: value.measurement.into(),
            unit: value.unit.to_string(),
        }
    }
}

impl TryFrom<Record> for domain::Record {
    type Error = RecordError;

    fn try_from(value: Record) -> Result<Self, Self::Error> {
        Ok(domain::Record::new(
            DateTime::parse_from_rfc3339(&value.date)?.with_timezone(&Utc),
            value.sets,
            value.repetitions,
            value.measurement,
            &value.unit,
        )?)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum RecordError {
    #[error("invalid record date: {0}")]
    Date(#[from] chrono::ParseError),
    #[error("invalid record: {0}")]
    Validation(#[from] domain::ValidationError),
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    fn record() -> domain::Record {
        domain::Record::new(
            Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap(),
            4,
            10,
            60.0,
            "kg",
        )
        .unwrap()
    }

    #[test]
    fn test_record_from() {
        assert_eq!(
            Record::from(&record()),
            Record {
                date: "2024-01-01T10:00:00.000Z".to_string(),
                sets: 4,
                repetitions: 10,
                measurement: 60.0,
                unit: "kg".to_string(),
            }
        );
    }

    #[test]
    fn test_record_try_from() {
        assert_eq!(
            domain::Record::try_from(Record::from(&record())).unwrap(),
            record()
        );
    }

    #[rstest]
    #[case::date_without_time("2024-01-01", 60.0, "kg")]
    #[case::malformed_date("yesterday", 60.0, "kg")]
    #[case::negative_measurement("2024-01-01T10:00:00.000Z", -60.0, "kg")]
    #[case::empty_unit("2024-01-01T10:00:00.000Z", 60.0, "")]
    fn test_record_try_from_invalid(
        #[case] date: &str,
        #[case] measurement: f32,
        #[case] unit: &str,
    ) {
        assert!(
            domain::Record::try_from(Record {
                date: date.to_string(),
                sets: 4,
                repetitions: 10,
                measurement,
                unit: unit.to_string(),
            })
            .is_err()
        );
    }

    #[test]
    fn test_record_try_from_large_values() {
        let record = domain::Record::try_from(Record {
            date: "2024-01-01T10:00:00.000Z".to_string(),
            sets: 150,
            repetitions: 2500,
            measurement: 42195.0,
            unit: "meters on the track".to_string(),
        })
        .unwrap();
        assert_eq!(u32::from(record.sets), 150);
        assert_eq!(u32::from(record.repetitions), 2500);
        assert_eq!(record.unit.as_ref(), "meters on the track");
    }

    #[test]
    fn test_record_serde() {
        let serialized = json!([Record::from(&record())]);
        assert_eq!(
            serialized,
            json!([{
                "date": "2024-01-01T10:00:00.000Z",
                "sets": 4,
                "repetitions": 10,
                "measurement": 60.0,
                "unit": "kg"
            }])
        );
        let deserialized: Vec<Record> = serde_json::from_value(serialized).unwrap();
        assert_eq!(deserialized, vec![Record::from(&record())]);
    }

    #[test]
    fn test_record_deserialize_other_time_zone() {
        let deserialized: Record = serde_json::from_value(json!({
            "date": "2024-01-01T11:00:00+01:00",
            "sets": 4,
            "repetitions": 10,
            "measurement": 60,
            "unit": "kg"
        }))
        .unwrap();
        assert_eq!(domain::Record::try_from(deserialized).unwrap(), record());
    }

    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    mod wasm {
        use domain::RecordRepository;
        use fitlog_web_app::log::{Entry, Repository};
        use pretty_assertions::assert_eq;
        use wasm_bindgen_test::wasm_bindgen_test;

        use super::*;

        fn name(name: &str) -> domain::Name {
            domain::Name::new(name).unwrap()
        }

        fn entry(message: &str) -> Entry {
            Entry {
                time: "Jan 01 10:00:00".to_string(),
                level: ::log::Level::Info,
                message: message.to_string(),
            }
        }

        #[wasm_bindgen_test]
        fn test_read_records_without_records() {
            gloo_storage::LocalStorage::clear();

            assert_eq!(LocalStorage.read_records(&name("Plank")).unwrap(), vec![]);
        }

        #[wasm_bindgen_test]
        fn test_write_records() {
            gloo_storage::LocalStorage::clear();

            LocalStorage
                .write_records(&name("Barbell Bench Press"), &[record()])
                .unwrap();

            assert_eq!(
                LocalStorage
                    .read_records(&name("Barbell Bench Press"))
                    .unwrap(),
                vec![record()]
            );
            assert_eq!(
                gloo_storage::LocalStorage::get::<serde_json::Value>("Barbell Bench Press")
                    .unwrap(),
                json!([{
                    "date": "2024-01-01T10:00:00.000Z",
                    "sets": 4,
                    "repetitions": 10,
                    "measurement": 60.0,
                    "unit": "kg"
                }])
            );
        }

        #[wasm_bindgen_test]
        fn test_read_records_corrupt_data() {
            gloo_storage::LocalStorage::clear();
            gloo_storage::LocalStorage::set("Plank", "no records").unwrap();

            assert!(matches!(
                LocalStorage.read_records(&name("Plank")),
                Err(domain::StorageError::Other(_))
            ));
        }

        #[wasm_bindgen_test]
        fn test_write_entry() {
            gloo_storage::LocalStorage::clear();

            for i in 0..=LOG_CAPACITY {
                LocalStorage.write_entry(entry(&i.to_string())).unwrap();
            }

            let entries = LocalStorage.read_entries().unwrap();
            assert_eq!(entries.len(), LOG_CAPACITY);
            assert_eq!(entries[0].message, LOG_CAPACITY.to_string());
            assert_eq!(entries[LOG_CAPACITY - 1].message, "1");
        }
    }
}

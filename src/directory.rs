// src/directory.rs

use chrono::NaiveDate;
use std::collections::HashMap;

/// One successfully parsed dataset line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonRecord {
    pub id: i64,
    pub name: String,
    pub birthday: NaiveDate,
}

/// What the directory stores per id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub birthday: NaiveDate,
}

/// In-memory id → person mapping, built once per run and only read afterwards.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PersonDirectory {
    people: HashMap<i64, Person>,
}

impl PersonDirectory {
    /// Insert a record, replacing any earlier one with the same id.
    pub(crate) fn insert(&mut self, record: PersonRecord) {
        self.people.insert(
            record.id,
            Person {
                name: record.name,
                birthday: record.birthday,
            },
        );
    }

    pub fn get(&self, id: i64) -> Option<&Person> {
        self.people.get(&id)
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = i64> + '_ {
        self.people.keys().copied()
    }
}

//! Log records and their attached fields

use chrono::{DateTime, Local};
use std::fmt;

use crate::Level;

/// Ordered set of named values attached to a record.
///
/// Values are stringified when inserted. Re-inserting a key replaces the
/// value and keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fields {
    entries: Vec<(String, String)>,
}

impl Fields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a field
    pub fn insert(&mut self, key: impl Into<String>, value: impl fmt::Display) {
        let key = key.into();
        let value = value.to_string();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Builder form of [`Fields::insert`]
    pub fn with(mut self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        self.insert(key, value);
        self
    }

    /// Copy every field of `other` into `self`, replacing duplicates.
    pub fn extend_from(&mut self, other: &Fields) {
        for (key, value) in other.iter() {
            self.insert(key, value);
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fields in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl<K, V> FromIterator<(K, V)> for Fields
where
    K: Into<String>,
    V: fmt::Display,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = Fields::new();
        for (key, value) in iter {
            fields.insert(key, value);
        }
        fields
    }
}

/// Call site of a log statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller<'a> {
    pub file: &'a str,
    pub line: u32,
    pub function: &'a str,
}

impl fmt::Display for Caller<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} {}()", self.file, self.line, self.function)
    }
}

/// One log record as seen by the formatter.
#[derive(Debug, Clone)]
pub struct Record<'a> {
    pub level: Level,
    pub message: &'a str,
    /// `None` means "now" at render time
    pub time: Option<DateTime<Local>>,
    pub caller: Option<Caller<'a>>,
    pub fields: &'a Fields,
}

impl<'a> Record<'a> {
    pub fn new(level: Level, message: &'a str, fields: &'a Fields) -> Self {
        Self {
            level,
            message,
            time: None,
            caller: None,
            fields,
        }
    }

    pub fn with_time(mut self, time: DateTime<Local>) -> Self {
        self.time = Some(time);
        self
    }

    pub fn with_caller(mut self, caller: Caller<'a>) -> Self {
        self.caller = Some(caller);
        self
    }
}

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Composite upsert key for per-shift logs.
pub type ShiftKey = (String, NaiveDate);

pub trait ShiftKeyed {
    fn shift_key(&self) -> ShiftKey;
}

/// Ordered log with at most one entry per (shift letter, date).
///
/// Upserts replace in place; iteration keeps first-insertion order for
/// display. Serialized as the plain entry sequence.
#[derive(Debug, Clone)]
pub struct ShiftLog<T: ShiftKeyed> {
    entries: IndexMap<ShiftKey, T>,
}

impl<T: ShiftKeyed> ShiftLog<T> {
    pub fn upsert(&mut self, entry: T) -> Option<T> {
        self.entries.insert(entry.shift_key(), entry)
    }

    pub fn get(&self, key: &ShiftKey) -> Option<&T> {
        self.entries.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: ShiftKeyed> Default for ShiftLog<T> {
    fn default() -> Self {
        Self { entries: IndexMap::new() }
    }
}

impl<T: ShiftKeyed + Serialize> Serialize for ShiftLog<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.entries.values())
    }
}

impl<'de, T> Deserialize<'de> for ShiftLog<T>
where
    T: ShiftKeyed + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let entries = Vec::<T>::deserialize(deserializer)?;
        let mut log = Self::default();
        for entry in entries {
            log.upsert(entry);
        }
        Ok(log)
    }
}

//! In-memory form.

use std::collections::HashMap;

use crate::domain::ports::FormSource;

/// A form held in memory: field name to current text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    fields: HashMap<String, String>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a form with the given field values.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }

    /// Set one field, replacing any previous text.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Set a field only when a value is given.
    pub fn set_opt(&mut self, field: impl Into<String>, value: Option<impl Into<String>>) {
        if let Some(value) = value {
            self.set(field, value);
        }
    }

    /// True when every field is empty.
    pub fn is_blank(&self) -> bool {
        self.fields.values().all(String::is_empty)
    }
}

impl FormSource for FormState {
    fn value(&self, field: &str) -> String {
        self.fields.get(field).cloned().unwrap_or_default()
    }

    fn reset(&mut self) {
        for value in self.fields.values_mut() {
            value.clear();
        }
    }
}

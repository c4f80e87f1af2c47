/*
 * fields.rs
 * Copyright (c) 2025 Clerkly Contributors
 */

//! Raw field values and the schema of known input fields.
//!
//! A [`FieldMap`] is the loosely-typed boundary between whatever collects
//! user input and the engine. Unknown keys are carried but ignored by every
//! template; missing keys read as empty. A [`FieldStore`] is the mutable,
//! per-session holder that a form edits field by field and that assembly
//! reads through [`FieldStore::snapshot`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Names of the fields the templates read.
pub mod names {
    pub const CLIENT_NAME: &str = "clientName";
    pub const OPPONENT_NAME: &str = "opponentName";
    pub const OPPONENT_ADDRESS: &str = "opponentAddress";
    pub const CASE_DETAILS: &str = "caseDetails";
    pub const RELIEF_SOUGHT: &str = "reliefSought";
}

/// Schema entry for one input field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Key in the [`FieldMap`]
    pub name: &'static str,
    /// Human-readable label shown next to the input
    pub label: &'static str,
    /// Bracketed stand-in used when the field is left empty
    pub placeholder: &'static str,
    /// Required fields must be non-empty for assembly to proceed
    pub required: bool,
    /// Whether the input is a multi-line text area
    pub multiline: bool,
}

impl FieldSpec {
    const fn new(
        name: &'static str,
        label: &'static str,
        placeholder: &'static str,
        required: bool,
        multiline: bool,
    ) -> Self {
        Self {
            name,
            label,
            placeholder,
            required,
            multiline,
        }
    }
}

/// All known fields, in form order.
pub static FIELDS: [FieldSpec; 5] = [
    FieldSpec::new(names::CLIENT_NAME, "Client Name", "[Client Name]", true, false),
    FieldSpec::new(
        names::OPPONENT_NAME,
        "Opponent Name",
        "[Opponent Name]",
        false,
        false,
    ),
    FieldSpec::new(
        names::OPPONENT_ADDRESS,
        "Opponent Address",
        "[Opponent Address]",
        false,
        false,
    ),
    FieldSpec::new(
        names::CASE_DETAILS,
        "Case Details",
        "[Details of the Case]",
        true,
        true,
    ),
    FieldSpec::new(
        names::RELIEF_SOUGHT,
        "Relief Sought",
        "[Relief Sought]",
        false,
        false,
    ),
];

/// Look up the schema entry for a field name.
pub fn field_spec(name: &str) -> Option<&'static FieldSpec> {
    FIELDS.iter().find(|spec| spec.name == name)
}

/// Fields that must be filled in before a document can be assembled.
pub fn required_fields() -> impl Iterator<Item = &'static FieldSpec> {
    FIELDS.iter().filter(|spec| spec.required)
}

/// A mapping from field name to raw, possibly empty, value.
///
/// Backed by a `BTreeMap` so iteration and serialization are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldMap {
    values: BTreeMap<String, String>,
}

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a field value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Get the raw value of a field, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Get the raw value of a field, treating a missing key as empty.
    pub fn value(&self, name: &str) -> &str {
        self.get(name).unwrap_or_default()
    }

    /// Whether the field is missing or blank after trimming.
    pub fn is_blank(&self, name: &str) -> bool {
        self.value(name).trim().is_empty()
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.values.remove(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Overlay another map onto this one; values in `other` win.
    pub fn merge(&mut self, other: FieldMap) {
        self.values.extend(other.values);
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = FieldMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

/// Per-session store of the values a user has entered.
///
/// Created with every known field present and empty, mutated as input
/// arrives, and read once through [`snapshot`](FieldStore::snapshot) when a
/// document is generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldStore {
    values: FieldMap,
}

impl FieldStore {
    pub fn new() -> Self {
        Self {
            values: FIELDS.iter().map(|spec| (spec.name, "")).collect(),
        }
    }

    /// Set a field value. Names outside the schema are kept as-is.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name, value);
    }

    pub fn get(&self, name: &str) -> &str {
        self.values.value(name)
    }

    /// Reset every known field to empty and drop any others.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Take an owned copy of the current values.
    pub fn snapshot(&self) -> FieldMap {
        self.values.clone()
    }

    /// Names of required fields that are still blank, in form order.
    pub fn missing_required(&self) -> Vec<&'static str> {
        required_fields()
            .filter(|spec| self.values.is_blank(spec.name))
            .map(|spec| spec.name)
            .collect()
    }
}

impl Default for FieldStore {
    fn default() -> Self {
        Self::new()
    }
}

impl From<FieldMap> for FieldStore {
    fn from(map: FieldMap) -> Self {
        let mut store = FieldStore::new();
        store.values.merge(map);
        store
    }
}

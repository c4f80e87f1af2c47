/*
 * resolver.rs
 * Copyright (c) 2025 Clerkly Contributors
 */

//! Effective field values.
//!
//! Templates never read a [`FieldMap`] directly. Every field they reference
//! is resolved once, up front, into a [`ResolvedFields`] record: the user
//! value exactly as entered when one was given, otherwise the field's bracketed
//! placeholder. Repeated references within one document therefore always
//! agree.

use crate::error::{DraftError, DraftResult};
use crate::fields::{FieldMap, field_spec, names, required_fields};

/// Resolve the effective value of a single field.
///
/// Returns the value of `field_name` unchanged if it is present and non-empty
/// after trimming, otherwise `placeholder`. Trimming only decides emptiness;
/// surrounding and inner whitespace in a real value is kept.
pub fn resolve(fields: &FieldMap, field_name: &str, placeholder: &str) -> String {
    match fields.get(field_name) {
        Some(value) if !value.trim().is_empty() => value.to_string(),
        _ => placeholder.to_string(),
    }
}

/// Check that every required field has a non-blank value.
///
/// The error names every missing field in form order, not just the first.
pub fn validate_required(fields: &FieldMap) -> DraftResult<()> {
    let missing: Vec<String> = required_fields()
        .filter(|spec| fields.is_blank(spec.name))
        .map(|spec| spec.name.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(DraftError::MissingRequiredField { fields: missing })
    }
}

/// Effective values for every field a template may read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFields {
    pub client_name: String,
    pub opponent_name: String,
    pub opponent_address: String,
    pub case_details: String,
    pub relief_sought: String,
}

impl ResolvedFields {
    /// Resolve all known fields from a snapshot.
    pub fn resolve(fields: &FieldMap) -> Self {
        let get = |name: &str| {
            let placeholder = field_spec(name).map_or("", |spec| spec.placeholder);
            resolve(fields, name, placeholder)
        };

        Self {
            client_name: get(names::CLIENT_NAME),
            opponent_name: get(names::OPPONENT_NAME),
            opponent_address: get(names::OPPONENT_ADDRESS),
            case_details: get(names::CASE_DETAILS),
            relief_sought: get(names::RELIEF_SOUGHT),
        }
    }
}

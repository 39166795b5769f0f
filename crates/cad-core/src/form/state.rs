use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use super::field::{FieldKey, FieldValues};

/// Submission protocol status.
///
/// Only the signup state machine moves this; field edits never touch it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SubmitStatus {
    Idle,
    Validating,
    Submitting,
    Success,
    Failure { reason: String },
}

/// Aggregate state of the registration form.
///
/// There is exactly one logical owner of this value (the controller), so no
/// locking happens at this level. `errors` is a cache derived from `values`
/// and the validation schema; it is recomputed whenever the corresponding
/// value changes, never merged.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormState {
    pub values: FieldValues,
    /// Fields the user has blurred at least once.
    pub touched: BTreeSet<FieldKey>,
    pub errors: BTreeMap<FieldKey, String>,
    pub terms_accepted: bool,
    pub terms_error: Option<String>,
    pub status: SubmitStatus,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            values: FieldValues::default(),
            touched: BTreeSet::new(),
            errors: BTreeMap::new(),
            terms_accepted: false,
            terms_error: None,
            status: SubmitStatus::Idle,
        }
    }
}

impl FormState {
    /// Projection of a single field for the presentation layer.
    pub fn field_view(&self, key: FieldKey) -> FieldView {
        FieldView {
            value: self.values.value(key).to_string(),
            error: self.errors.get(&key).cloned(),
            touched: self.touched.contains(&key),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty() || self.terms_error.is_some()
    }
}

/// Per-field `(value, error, touched)` triple rendered by the presentation
/// layer, which performs no validation of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldView {
    pub value: String,
    pub error: Option<String>,
    pub touched: bool,
}

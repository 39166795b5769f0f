use serde::{Deserialize, Serialize};

/// Identifier for one input of the registration form.
///
/// The field set is closed for the lifetime of the form, so referencing an
/// unknown field is unrepresentable rather than a runtime error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKey {
    Name,
    SurName,
    Email,
    Pwd,
    RegNum,
}

impl FieldKey {
    /// Every form field, in declared order.
    pub const ALL: [FieldKey; 5] = [
        FieldKey::Name,
        FieldKey::SurName,
        FieldKey::Email,
        FieldKey::Pwd,
        FieldKey::RegNum,
    ];

    /// Wire name of the field, matching the registration payload keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKey::Name => "name",
            FieldKey::SurName => "surName",
            FieldKey::Email => "email",
            FieldKey::Pwd => "pwd",
            FieldKey::RegNum => "regNum",
        }
    }
}

/// Current raw values of the form, one string per field.
///
/// Values start empty and are only ever replaced wholesale by user edits;
/// no trimming or normalization happens here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldValues {
    pub name: String,
    pub sur_name: String,
    pub email: String,
    pub pwd: String,
    pub reg_num: String,
}

impl FieldValues {
    pub fn value(&self, key: FieldKey) -> &str {
        match key {
            FieldKey::Name => &self.name,
            FieldKey::SurName => &self.sur_name,
            FieldKey::Email => &self.email,
            FieldKey::Pwd => &self.pwd,
            FieldKey::RegNum => &self.reg_num,
        }
    }

    pub fn set(&mut self, key: FieldKey, value: String) {
        match key {
            FieldKey::Name => self.name = value,
            FieldKey::SurName => self.sur_name = value,
            FieldKey::Email => self.email = value,
            FieldKey::Pwd => self.pwd = value,
            FieldKey::RegNum => self.reg_num = value,
        }
    }

    /// Snapshot the current values for a registration call.
    pub fn payload(&self) -> RegistrationPayload {
        RegistrationPayload {
            name: self.name.clone(),
            sur_name: self.sur_name.clone(),
            email: self.email.clone(),
            pwd: self.pwd.clone(),
            reg_num: self.reg_num.clone(),
        }
    }
}

/// The five values handed to the registration service.
///
/// Produced at submit time and not retained afterwards; edits made while a
/// call is in flight never reach the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationPayload {
    pub name: String,
    pub sur_name: String,
    pub email: String,
    pub pwd: String,
    pub reg_num: String,
}

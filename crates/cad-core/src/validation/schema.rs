//! Validation schema: per-field rule lists and the bulk check.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::form::{FieldKey, FieldValues};

/// User-visible validation and gating messages.
///
/// These strings are a contract of user-visible behavior; do not reword
/// them without a product decision. The alpha message ships in English,
/// trailing space included.
pub mod messages {
    pub const NAME_REQUIRED: &str = "Nome é obrigatório";
    pub const SUR_NAME_REQUIRED: &str = "Sobrenome é obrigatório";
    pub const EMAIL_REQUIRED: &str = "Email é obrigatório";
    pub const PWD_REQUIRED: &str = "Senha é obrigatória";
    pub const REG_NUM_REQUIRED: &str = "Documento é obrigatório";
    pub const ALPHA_ONLY: &str = "Only alphabets are allowed for this field ";
    pub const EMAIL_FORMAT: &str = "Por favor insira um email válido";
    pub const PWD_TOO_SHORT: &str = "A senha deve ter pelo menos 6 caracteres";
    pub const TERMS_REQUIRED: &str = "Você deve aceitar os Termos e Condições";
}

const MIN_PWD_CHARS: usize = 6;

static ALPHA_SPACES_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z\s]+$").expect("alpha pattern must compile"));

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern must compile"));

/// Verdict of a single field validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    Invalid { message: &'static str },
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }

    pub fn message(&self) -> Option<&'static str> {
        match self {
            ValidationOutcome::Valid => None,
            ValidationOutcome::Invalid { message } => Some(message),
        }
    }
}

/// One declarative rule: a predicate plus the message reported on failure.
pub struct Rule {
    check: fn(&str) -> bool,
    message: &'static str,
}

fn is_present(value: &str) -> bool {
    // No trimming: whitespace counts as a value.
    !value.is_empty()
}

fn is_alpha_spaces(value: &str) -> bool {
    ALPHA_SPACES_RE.is_match(value)
}

fn is_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

fn has_min_pwd_len(value: &str) -> bool {
    value.chars().count() >= MIN_PWD_CHARS
}

static NAME_RULES: [Rule; 2] = [
    Rule { check: is_present, message: messages::NAME_REQUIRED },
    Rule { check: is_alpha_spaces, message: messages::ALPHA_ONLY },
];

static SUR_NAME_RULES: [Rule; 2] = [
    Rule { check: is_present, message: messages::SUR_NAME_REQUIRED },
    Rule { check: is_alpha_spaces, message: messages::ALPHA_ONLY },
];

static EMAIL_RULES: [Rule; 2] = [
    Rule { check: is_present, message: messages::EMAIL_REQUIRED },
    Rule { check: is_email, message: messages::EMAIL_FORMAT },
];

static PWD_RULES: [Rule; 2] = [
    Rule { check: is_present, message: messages::PWD_REQUIRED },
    Rule { check: has_min_pwd_len, message: messages::PWD_TOO_SHORT },
];

static REG_NUM_RULES: [Rule; 1] = [Rule {
    check: is_present,
    message: messages::REG_NUM_REQUIRED,
}];

fn rules(key: FieldKey) -> &'static [Rule] {
    match key {
        FieldKey::Name => &NAME_RULES,
        FieldKey::SurName => &SUR_NAME_RULES,
        FieldKey::Email => &EMAIL_RULES,
        FieldKey::Pwd => &PWD_RULES,
        FieldKey::RegNum => &REG_NUM_RULES,
    }
}

/// Apply a field's rules in declared order; the first failure wins, so a
/// missing value always reports the required message over a format one.
pub fn validate_field(key: FieldKey, value: &str) -> ValidationOutcome {
    for rule in rules(key) {
        if !(rule.check)(value) {
            return ValidationOutcome::Invalid { message: rule.message };
        }
    }
    ValidationOutcome::Valid
}

/// Validate every field. Fields are independent; the returned map always
/// carries an entry per key.
pub fn validate_all(values: &FieldValues) -> BTreeMap<FieldKey, ValidationOutcome> {
    FieldKey::ALL
        .iter()
        .map(|&key| (key, validate_field(key, values.value(key))))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_value_fails_required_for_every_field() {
        let expected = [
            (FieldKey::Name, messages::NAME_REQUIRED),
            (FieldKey::SurName, messages::SUR_NAME_REQUIRED),
            (FieldKey::Email, messages::EMAIL_REQUIRED),
            (FieldKey::Pwd, messages::PWD_REQUIRED),
            (FieldKey::RegNum, messages::REG_NUM_REQUIRED),
        ];
        for (key, message) in expected {
            assert_eq!(
                validate_field(key, ""),
                ValidationOutcome::Invalid { message },
                "field {} should fail required first",
                key.as_str()
            );
        }
    }

    #[test]
    fn name_rejects_digits_and_accepts_letters_with_spaces() {
        assert_eq!(
            validate_field(FieldKey::Name, "John123"),
            ValidationOutcome::Invalid { message: messages::ALPHA_ONLY }
        );
        assert_eq!(validate_field(FieldKey::Name, "John Paul"), ValidationOutcome::Valid);
        assert_eq!(validate_field(FieldKey::SurName, "da Silva"), ValidationOutcome::Valid);
    }

    #[test]
    fn email_format_is_checked_after_required() {
        assert_eq!(
            validate_field(FieldKey::Email, "not-an-email"),
            ValidationOutcome::Invalid { message: messages::EMAIL_FORMAT }
        );
        assert_eq!(validate_field(FieldKey::Email, "a@b.com"), ValidationOutcome::Valid);
        assert_eq!(
            validate_field(FieldKey::Email, "a b@c.com"),
            ValidationOutcome::Invalid { message: messages::EMAIL_FORMAT }
        );
    }

    #[test]
    fn password_length_boundary_is_six_chars() {
        assert_eq!(
            validate_field(FieldKey::Pwd, "abcde"),
            ValidationOutcome::Invalid { message: messages::PWD_TOO_SHORT }
        );
        assert_eq!(validate_field(FieldKey::Pwd, "abcdef"), ValidationOutcome::Valid);
        // Length counts characters, not bytes.
        assert_eq!(validate_field(FieldKey::Pwd, "çãõéíú"), ValidationOutcome::Valid);
    }

    #[test]
    fn reg_num_has_no_format_constraint() {
        assert_eq!(validate_field(FieldKey::RegNum, "123-ab!"), ValidationOutcome::Valid);
    }

    #[test]
    fn validate_all_returns_an_entry_for_every_field() {
        let values = FieldValues::default();
        let outcomes = validate_all(&values);
        assert_eq!(outcomes.len(), FieldKey::ALL.len());
        assert!(outcomes.values().all(|o| !o.is_valid()));
    }
}

use std::sync::LazyLock;

use regex::{Regex, RegexSet};

use super::form::FormFields;

// Letters and digits from any script are allowed in both the local part and
// the domain labels. The top-level label is alphabetic or an `xn--` punycode label.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^[\p{L}\p{N}!#$%&'*+/=?^_`{|}~.-]+@(?:[\p{L}\p{N}](?:[\p{L}\p{N}-]*[\p{L}\p{N}])?\.)+(?:\p{L}{2,}|xn--[A-Za-z0-9-]+)$"#,
    )
    .expect("email pattern is valid")
});

const MAX_LOCAL_PART_CHARS: usize = 64;
const MAX_DOMAIN_LABEL_CHARS: usize = 63;

// One pattern per required character class; a strong password matches all of them.
static PASSWORD_CLASSES: LazyLock<RegexSet> = LazyLock::new(|| {
    RegexSet::new(["[a-z]", "[A-Z]", "[0-9]", "[!@#$%^&*]"]).expect("password patterns are valid")
});

/// A single constraint on one form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Field exists and is not empty or whitespace-only.
    Present,
    /// At most this many characters.
    MaxLength(usize),
    /// Syntactically valid email address.
    Email,
    /// At least one lowercase letter, uppercase letter, digit and one of `!@#$%^&*`.
    PasswordStrength,
    /// Same submitted value as the named field.
    EqualsField(&'static str),
}

impl Rule {
    pub fn passes(&self, field: &str, fields: &FormFields) -> bool {
        let value = fields.value(field);
        match self {
            Rule::Present => !value.trim().is_empty(),
            Rule::MaxLength(max) => value.chars().count() <= *max,
            Rule::Email => is_email(value),
            Rule::PasswordStrength => PASSWORD_CLASSES.matches(value).matched_all(),
            Rule::EqualsField(other) => fields.get(field) == fields.get(other),
        }
    }
}

fn is_email(value: &str) -> bool {
    if !EMAIL_PATTERN.is_match(value) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    local.chars().count() <= MAX_LOCAL_PART_CHARS
        && !local.starts_with('.')
        && !local.ends_with('.')
        && !local.contains("..")
        && domain
            .split('.')
            .all(|label| label.chars().count() <= MAX_DOMAIN_LABEL_CHARS)
}

use std::{fmt, sync::LazyLock};

use super::{fields, form::FormFields, rules::Rule};

/// Ordered messages of every rule that failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<String>);

impl ValidationErrors {
    pub fn messages(&self) -> &[String] {
        &self.0
    }

    pub fn into_messages(self) -> Vec<String> {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, message: &str) -> bool {
        self.0.iter().any(|m| m == message)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("; "))
    }
}

#[derive(Debug, Clone)]
struct Check {
    rule: Rule,
    message: &'static str,
}

/// The rules declared for one field, in order.
#[derive(Debug, Clone)]
pub struct FieldRules {
    field: &'static str,
    checks: Vec<Check>,
}

impl FieldRules {
    pub fn new(field: &'static str) -> Self {
        Self {
            field,
            checks: Vec::new(),
        }
    }

    pub fn rule(mut self, rule: Rule, message: &'static str) -> Self {
        self.checks.push(Check { rule, message });
        self
    }

    pub fn present(self, message: &'static str) -> Self {
        self.rule(Rule::Present, message)
    }

    pub fn max_length(self, max: usize, message: &'static str) -> Self {
        self.rule(Rule::MaxLength(max), message)
    }

    fn failures<'a>(&'a self, form: &'a FormFields) -> impl Iterator<Item = &'static str> + 'a {
        self.checks
            .iter()
            .filter(|check| !check.rule.passes(self.field, form))
            .map(|check| check.message)
    }
}

/// A declarative set of field rules evaluated against a submitted form.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    fields: Vec<FieldRules>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, rules: FieldRules) -> Self {
        self.fields.push(rules);
        self
    }

    /// Check every rule of every field, collecting all failure messages in
    /// declaration order.
    pub fn evaluate(&self, form: &FormFields) -> Result<(), ValidationErrors> {
        let messages: Vec<String> = self
            .fields
            .iter()
            .flat_map(|rules| rules.failures(form))
            .map(str::to_owned)
            .collect();

        if messages.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(messages))
        }
    }

    /// Rules for the registration form.
    pub fn registration() -> &'static RuleSet {
        &REGISTRATION
    }

    /// Rules for the login form: presence only.
    pub fn login() -> &'static RuleSet {
        &LOGIN
    }
}

static REGISTRATION: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new()
        .field(
            FieldRules::new(fields::FIRST_NAME)
                .present("Please provide a value for First Name")
                .max_length(50, "First Name must not be more than 50 characters long"),
        )
        .field(
            FieldRules::new(fields::LAST_NAME)
                .present("Please provide a value for Last Name")
                .max_length(50, "Last Name must not be more than 50 characters long"),
        )
        .field(
            FieldRules::new(fields::EMAIL_ADDRESS)
                .present("Please provide a value for Email Address")
                .max_length(
                    255,
                    "Email Address must not be more than 255 characters long",
                )
                .rule(Rule::Email, "Email Address is not a valid email"),
        )
        .field(
            FieldRules::new(fields::PASSWORD)
                .present("Please provide a value for Password")
                .max_length(50, "Password must not be more than 50 characters long")
                .rule(
                    Rule::PasswordStrength,
                    "Password must contain at least 1 lowercase letter, uppercase letter, number, and special character (i.e. \"!@#$%^&*\")",
                ),
        )
        .field(
            FieldRules::new(fields::CONFIRM_PASSWORD)
                .present("Please provide a value for Confirm Password")
                .max_length(
                    50,
                    "Confirm Password must not be more than 50 characters long",
                )
                .rule(
                    Rule::EqualsField(fields::PASSWORD),
                    "Confirm Password does not match Password",
                ),
        )
});

static LOGIN: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new()
        .field(
            FieldRules::new(fields::EMAIL_ADDRESS)
                .present("Please provide a value for Email Address"),
        )
        .field(FieldRules::new(fields::PASSWORD).present("Please provide a value for Password"))
});

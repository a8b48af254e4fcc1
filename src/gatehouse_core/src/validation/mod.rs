//! Declarative per-field form validation.
//!
//! A [`RuleSet`] is an ordered list of fields, each with an ordered list of
//! rules. Evaluation never stops early: every rule of every field is checked
//! and each failure contributes its message, in declaration order.

mod form;
mod rule_set;
mod rules;

pub use form::FormFields;
pub use rule_set::{FieldRules, RuleSet, ValidationErrors};
pub use rules::Rule;

/// Form field names shared by the register and login forms.
pub mod fields {
    pub const FIRST_NAME: &str = "firstName";
    pub const LAST_NAME: &str = "lastName";
    pub const EMAIL_ADDRESS: &str = "emailAddress";
    pub const PASSWORD: &str = "password";
    pub const CONFIRM_PASSWORD: &str = "confirmPassword";
}

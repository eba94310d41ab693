//! Field-spec driven form capture
//!
//! One engine serves every form in the portal. A form is a static table of
//! [`FieldSpec`]s; [`FormState`] holds the typed values, the focused field
//! and the inline errors, and [`FormState::submit`] turns it into a
//! [`FormOutcome`].

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use sacco_core::Error;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid regex pattern")
});

/// How a field is edited and what a valid value looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Rendered masked
    Secret,
    Email,
    /// Whole currency units, greater than zero
    Amount,
    /// Whole number of months, greater than zero
    Months,
    /// `YYYY-MM-DD`
    Date,
    /// One of a fixed set of options, picked with Left/Right
    Choice(&'static [&'static str]),
    Path,
}

impl FieldKind {
    /// Check a non-empty value. Returns the inline error message on failure.
    fn check(&self, value: &str) -> Option<&'static str> {
        match self {
            FieldKind::Text | FieldKind::Secret | FieldKind::Path => None,
            FieldKind::Email => {
                (!EMAIL_REGEX.is_match(value)).then_some("Please input a valid email!")
            }
            FieldKind::Amount => match value.parse::<u64>() {
                Ok(amount) if amount > 0 => None,
                _ => Some("Please enter a positive amount!"),
            },
            FieldKind::Months => match value.parse::<u32>() {
                Ok(months) if months > 0 => None,
                _ => Some("Please enter a whole number of months!"),
            },
            FieldKind::Date => NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .is_err()
                .then_some("Please use the YYYY-MM-DD format!"),
            FieldKind::Choice(options) => (!options.iter().any(|option| *option == value))
                .then_some("Please pick one of the options!"),
        }
    }

    pub fn is_choice(&self) -> bool {
        matches!(self, FieldKind::Choice(_))
    }
}

/// Declarative description of one form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Key of the captured value
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Shown when a required field is left empty
    pub required_message: &'static str,
    pub placeholder: &'static str,
    /// Heading rendered above this field
    pub section: Option<&'static str>,
}

impl FieldSpec {
    pub const fn required(
        name: &'static str,
        label: &'static str,
        kind: FieldKind,
        required_message: &'static str,
    ) -> Self {
        Self {
            name,
            label,
            kind,
            required: true,
            required_message,
            placeholder: "",
            section: None,
        }
    }

    pub const fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub const fn section(mut self, section: &'static str) -> Self {
        self.section = Some(section);
        self
    }

    /// Validate a raw value against this spec.
    pub fn validate(&self, value: &str) -> Option<&'static str> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return self.required.then_some(self.required_message);
        }
        self.kind.check(trimmed)
    }
}

/// A violated field with its message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl From<FieldError> for Error {
    fn from(err: FieldError) -> Self {
        Error::validation(err.field, err.message)
    }
}

/// Values captured from a valid submission, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    entries: Vec<(&'static str, String)>,
}

impl FormValues {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries.iter().map(|(key, value)| (*key, value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    Valid(FormValues),
    Invalid(Vec<FieldError>),
}

/// Editable state of one form.
#[derive(Debug, Clone)]
pub struct FormState {
    fields: &'static [FieldSpec],
    values: Vec<String>,
    errors: Vec<Option<&'static str>>,
    focused: usize,
}

impl FormState {
    pub fn new(fields: &'static [FieldSpec]) -> Self {
        Self {
            fields,
            values: vec![String::new(); fields.len()],
            errors: vec![None; fields.len()],
            focused: 0,
        }
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    pub fn focused_spec(&self) -> Option<&'static FieldSpec> {
        self.fields.get(self.focused)
    }

    pub fn value(&self, index: usize) -> &str {
        self.values.get(index).map(String::as_str).unwrap_or("")
    }

    pub fn value_of(&self, name: &str) -> Option<&str> {
        let index = self.index_of(name)?;
        Some(self.value(index))
    }

    /// Inline error of field `index`, if any.
    pub fn error(&self, index: usize) -> Option<&'static str> {
        self.errors.get(index).copied().flatten()
    }

    /// Every standing inline error, in field order.
    pub fn errors(&self) -> Vec<FieldError> {
        self.fields
            .iter()
            .zip(&self.errors)
            .filter_map(|(spec, error)| {
                error.map(|message| FieldError {
                    field: spec.name,
                    message,
                })
            })
            .collect()
    }

    pub fn has_errors(&self) -> bool {
        self.errors.iter().any(Option::is_some)
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|spec| spec.name == name)
    }

    /// Overwrite a field by name. Returns `false` for an unknown name.
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) -> bool {
        let Some(index) = self.index_of(name) else {
            return false;
        };
        self.values[index] = value.into();
        self.revalidate(index);
        true
    }

    pub fn focus(&mut self, index: usize) {
        if index < self.fields.len() {
            self.focused = index;
        }
    }

    pub fn next_field(&mut self) {
        if !self.fields.is_empty() {
            self.focused = (self.focused + 1) % self.fields.len();
        }
    }

    pub fn prev_field(&mut self) {
        if !self.fields.is_empty() {
            self.focused = (self.focused + self.fields.len() - 1) % self.fields.len();
        }
    }

    /// Type a character into the focused field. Ignored on choice fields.
    pub fn insert_char(&mut self, c: char) {
        if self.focused_kind().is_some_and(|kind| kind.is_choice()) {
            return;
        }
        if let Some(value) = self.values.get_mut(self.focused) {
            value.push(c);
            self.revalidate(self.focused);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(value) = self.values.get_mut(self.focused) {
            value.pop();
            self.revalidate(self.focused);
        }
    }

    pub fn clear_field(&mut self) {
        if let Some(value) = self.values.get_mut(self.focused) {
            value.clear();
            self.revalidate(self.focused);
        }
    }

    /// Step the focused choice field through its options.
    pub fn cycle_choice(&mut self, forward: bool) {
        let Some(FieldKind::Choice(options)) = self.focused_kind() else {
            return;
        };
        if options.is_empty() {
            return;
        }

        let current = options
            .iter()
            .position(|option| *option == self.values[self.focused]);
        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => options.len() - 1,
            (Some(i), true) => (i + 1) % options.len(),
            (Some(i), false) => (i + options.len() - 1) % options.len(),
        };
        self.values[self.focused] = options[next].to_string();
        self.revalidate(self.focused);
    }

    /// Validate every field.
    ///
    /// Valid: returns the trimmed values and resets the form. Invalid:
    /// records one inline error per violated field and keeps the values.
    pub fn submit(&mut self) -> FormOutcome {
        for index in 0..self.fields.len() {
            self.errors[index] = self.fields[index].validate(&self.values[index]);
        }

        let errors = self.errors();
        if !errors.is_empty() {
            if let Some(first) = self.errors.iter().position(Option::is_some) {
                self.focused = first;
            }
            return FormOutcome::Invalid(errors);
        }

        let entries = self
            .fields
            .iter()
            .zip(&self.values)
            .map(|(spec, value)| {
                let value = match spec.kind {
                    FieldKind::Secret => value.clone(),
                    _ => value.trim().to_string(),
                };
                (spec.name, value)
            })
            .collect();
        self.reset();
        FormOutcome::Valid(FormValues { entries })
    }

    pub fn reset(&mut self) {
        self.values.iter_mut().for_each(String::clear);
        self.errors.iter_mut().for_each(|e| *e = None);
        self.focused = 0;
    }

    fn focused_kind(&self) -> Option<FieldKind> {
        self.focused_spec().map(|spec| spec.kind)
    }

    // A flagged field is re-checked on every edit so its annotation clears
    // as soon as it is corrected. Unflagged fields wait for submit.
    fn revalidate(&mut self, index: usize) {
        if self.errors[index].is_some() {
            self.errors[index] = self.fields[index].validate(&self.values[index]);
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Field tables
// ─────────────────────────────────────────────────────────────────

pub const GENDER_OPTIONS: &[&str] = &["Male", "Female", "Other"];

pub static LOGIN_FIELDS: &[FieldSpec] = &[
    FieldSpec::required(
        "username",
        "Username",
        FieldKind::Text,
        "Please input your username!",
    ),
    FieldSpec::required(
        "password",
        "Password",
        FieldKind::Secret,
        "Please input your password!",
    ),
];

pub static LOAN_APPLICATION_FIELDS: &[FieldSpec] = &[
    FieldSpec::required(
        "borrowerName",
        "Borrower Name",
        FieldKind::Text,
        "Please enter the borrower name!",
    )
    .placeholder("Enter your full name")
    .section("Personal Information"),
    FieldSpec::required(
        "borrowerID",
        "ID/Passport Number",
        FieldKind::Text,
        "Please enter your ID or Passport number!",
    )
    .placeholder("Enter your ID or Passport number"),
    FieldSpec::required(
        "contactNumber",
        "Contact Number",
        FieldKind::Text,
        "Please enter a valid contact number!",
    )
    .placeholder("Enter your contact number"),
    FieldSpec::required(
        "email",
        "Email Address",
        FieldKind::Email,
        "Please enter a valid email address!",
    )
    .placeholder("Enter your email address"),
    FieldSpec::required(
        "loanAmount",
        "Loan Amount",
        FieldKind::Amount,
        "Please enter the loan amount!",
    )
    .placeholder("Enter loan amount"),
    FieldSpec::required(
        "loanTerm",
        "Loan Term (Months)",
        FieldKind::Months,
        "Please enter the loan term!",
    )
    .placeholder("Enter loan term in months"),
    FieldSpec::required(
        "purpose",
        "Loan Purpose",
        FieldKind::Text,
        "Please specify the loan purpose!",
    )
    .placeholder("Enter loan purpose"),
    FieldSpec::required(
        "nextOfKinName",
        "Next of Kin Name",
        FieldKind::Text,
        "Please enter the next of kin name!",
    )
    .placeholder("Enter next of kin's full name")
    .section("Next of Kin Information"),
    FieldSpec::required(
        "nextOfKinContact",
        "Next of Kin Contact",
        FieldKind::Text,
        "Please enter next of kin contact!",
    )
    .placeholder("Enter next of kin's contact number"),
    FieldSpec::required(
        "borrowerAddress",
        "Address",
        FieldKind::Text,
        "Please enter your address!",
    )
    .placeholder("Enter your address"),
    FieldSpec::required(
        "borrowerCity",
        "City",
        FieldKind::Text,
        "Please enter your city!",
    )
    .placeholder("Enter your city"),
];

pub static PROFILE_FIELDS: &[FieldSpec] = &[
    FieldSpec::required(
        "fullName",
        "Full Name",
        FieldKind::Text,
        "Please input your name!",
    ),
    FieldSpec::required(
        "email",
        "Email",
        FieldKind::Email,
        "Please input your email!",
    ),
    FieldSpec::required(
        "phoneNumber",
        "Phone Number",
        FieldKind::Text,
        "Please input your phone number!",
    ),
    FieldSpec::required(
        "address",
        "Address",
        FieldKind::Text,
        "Please input your address!",
    ),
    FieldSpec::required(
        "dob",
        "Date of Birth",
        FieldKind::Date,
        "Please input your date of birth!",
    )
    .placeholder("YYYY-MM-DD"),
    FieldSpec::required(
        "gender",
        "Gender",
        FieldKind::Choice(GENDER_OPTIONS),
        "Please select your gender!",
    ),
    FieldSpec::required(
        "jobTitle",
        "Job Title",
        FieldKind::Text,
        "Please input your job title!",
    ),
];

pub static UPLOAD_FIELDS: &[FieldSpec] = &[FieldSpec::required(
    "path",
    "Image File",
    FieldKind::Path,
    "Please choose an image file!",
)
.placeholder("/path/to/avatar.png")];

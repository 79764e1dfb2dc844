//! Client-side redeclaration of the form validation schemas.
//!
//! Each form declares a [`Schema`]: an ordered list of fields with the rules
//! that run on submit, after coercion. Validation failures map field name to
//! a message rendered inline next to the input; any failure blocks the HTTP
//! call.

use std::collections::BTreeMap;

use crate::models;

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

/// Snapshot of a form's raw input state, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormValues {
    values: BTreeMap<&'static str, FieldValue>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.values.insert(name, FieldValue::Text(value.into()));
        self
    }

    pub fn with_flag(mut self, name: &'static str, value: bool) -> Self {
        self.values.insert(name, FieldValue::Flag(value));
        self
    }

    pub fn text(&self, name: &str) -> &str {
        match self.values.get(name) {
            Some(FieldValue::Text(value)) => value,
            _ => "",
        }
    }

    pub fn flag(&self, name: &str) -> bool {
        matches!(self.values.get(name), Some(FieldValue::Flag(true)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rule {
    Required,
    MinLen(usize),
    /// Tolerates empty input (submitted as null); non-empty must parse.
    Number,
    /// Must parse as a number strictly greater than zero.
    Positive,
    /// Tolerates empty input; non-empty must parse as an integer >= min.
    IntMin(i32),
    IsDate,
    OneOf(&'static [&'static str]),
    Email,
    /// Checkbox that must be literally true.
    MustAccept,
}

pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub rules: &'static [Rule],
}

pub struct Schema {
    pub fields: &'static [FieldSpec],
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    errors: BTreeMap<&'static str, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn remove(&mut self, field: &str) {
        self.errors.remove(field);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }
}

impl Schema {
    pub fn validate(&self, values: &FormValues) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        for field in self.fields {
            if let Some(message) = check_field(field, values) {
                errors.insert(field.name, message);
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validation scoped to a single field, for on-change feedback.
    pub fn validate_field(&self, name: &str, values: &FormValues) -> Option<String> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .and_then(|f| check_field(f, values))
    }
}

fn check_field(field: &FieldSpec, values: &FormValues) -> Option<String> {
    for rule in field.rules {
        let text = values.text(field.name);
        let trimmed = text.trim();
        let failure = match rule {
            Rule::Required => trimmed
                .is_empty()
                .then(|| format!("{} is required", field.label)),
            Rule::MinLen(min) => (trimmed.chars().count() < *min)
                .then(|| format!("{} must be at least {} characters", field.label, min)),
            Rule::Number => coerce_number(text)
                .is_err()
                .then(|| format!("{} must be a number", field.label)),
            Rule::Positive => match coerce_number(text) {
                Ok(Some(n)) if n > 0.0 => None,
                _ => Some(format!("{} must be a positive number", field.label)),
            },
            Rule::IntMin(min) => match coerce_int(text) {
                Ok(None) => None,
                Ok(Some(n)) if n >= *min => None,
                _ => Some(format!("{} must be a whole number of at least {}", field.label, min)),
            },
            Rule::IsDate => crate::utils::parse_form_date(text)
                .is_none()
                .then(|| format!("{} must be a valid date", field.label)),
            Rule::OneOf(allowed) => (!allowed.contains(&trimmed))
                .then(|| format!("Select a valid {}", field.label)),
            Rule::Email => (!is_email(trimmed))
                .then(|| "Please enter a valid email address".to_string()),
            Rule::MustAccept => {
                (!values.flag(field.name)).then(|| "You must agree to the terms".to_string())
            }
        };
        if failure.is_some() {
            return failure;
        }
    }
    None
}

fn is_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

/// Numeric inputs render the empty string for "no value"; submission coerces
/// to `None` rather than zero.
pub fn coerce_number(raw: &str) -> Result<Option<f64>, ()> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed.parse::<f64>().map(Some).map_err(|_| ())
}

pub fn coerce_int(raw: &str) -> Result<Option<i32>, ()> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed.parse::<i32>().map(Some).map_err(|_| ())
}

/// Register profile numbers fall back to a default instead of failing.
pub fn coerce_int_or(raw: &str, default: i32) -> i32 {
    raw.trim().parse::<i32>().unwrap_or(default)
}

pub fn coerce_float_or(raw: &str, default: f64) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(default)
}

// Catalogue label lists for one-of rules. The enum `all()` lists are the
// source of truth; these mirror them for use in static schemas.

pub const METRIC_TYPE_LABELS: &[&str] = &["Strength", "Endurance", "Speed", "Flexibility", "Power"];

pub const MEAL_TYPE_LABELS: &[&str] = &[
    "Breakfast",
    "Morning Snack",
    "Lunch",
    "Afternoon Snack",
    "Dinner",
    "Evening Snack",
    "Pre-Workout",
    "Post-Workout",
    "Supplement",
];

pub const SEVERITY_LABELS: &[&str] = &["Mild", "Moderate", "Severe"];

pub const INJURY_STATUS_LABELS: &[&str] = &["Active", "Recovered"];

pub const LOGIN_SCHEMA: Schema = Schema {
    fields: &[
        FieldSpec {
            name: "username",
            label: "Username",
            rules: &[Rule::Required, Rule::MinLen(3)],
        },
        FieldSpec {
            name: "password",
            label: "Password",
            rules: &[Rule::Required, Rule::MinLen(6)],
        },
    ],
};

pub const REGISTER_SCHEMA: Schema = Schema {
    fields: &[
        FieldSpec {
            name: "username",
            label: "Username",
            rules: &[Rule::Required, Rule::MinLen(3)],
        },
        FieldSpec {
            name: "password",
            label: "Password",
            rules: &[Rule::Required, Rule::MinLen(6)],
        },
        FieldSpec {
            name: "name",
            label: "Name",
            rules: &[Rule::Required, Rule::MinLen(2)],
        },
        FieldSpec {
            name: "agree_terms",
            label: "Terms",
            rules: &[Rule::MustAccept],
        },
    ],
};

pub const PERFORMANCE_SCHEMA: Schema = Schema {
    fields: &[
        FieldSpec {
            name: "metric_type",
            label: "Metric type",
            rules: &[Rule::OneOf(METRIC_TYPE_LABELS)],
        },
        FieldSpec {
            name: "value",
            label: "Value",
            rules: &[Rule::Required, Rule::Number],
        },
        FieldSpec {
            name: "unit",
            label: "Unit",
            rules: &[Rule::Required],
        },
        FieldSpec {
            name: "date",
            label: "Date",
            rules: &[Rule::IsDate],
        },
    ],
};

pub const NUTRITION_SCHEMA: Schema = Schema {
    fields: &[
        FieldSpec {
            name: "meal_type",
            label: "Meal type",
            rules: &[Rule::OneOf(MEAL_TYPE_LABELS)],
        },
        FieldSpec {
            name: "food_items",
            label: "Food items",
            rules: &[Rule::Required, Rule::MinLen(3)],
        },
        FieldSpec {
            name: "calories",
            label: "Calories",
            rules: &[Rule::IntMin(0)],
        },
        FieldSpec {
            name: "protein",
            label: "Protein",
            rules: &[Rule::IntMin(0)],
        },
        FieldSpec {
            name: "date",
            label: "Date",
            rules: &[Rule::IsDate],
        },
    ],
};

pub const INJURY_SCHEMA: Schema = Schema {
    fields: &[
        FieldSpec {
            name: "injury_type",
            label: "Injury type",
            rules: &[Rule::OneOf(models::INJURY_TYPES)],
        },
        FieldSpec {
            name: "body_part",
            label: "Body part",
            rules: &[Rule::OneOf(models::BODY_PARTS)],
        },
        FieldSpec {
            name: "severity",
            label: "Severity",
            rules: &[Rule::OneOf(SEVERITY_LABELS)],
        },
        FieldSpec {
            name: "status",
            label: "Status",
            rules: &[Rule::OneOf(INJURY_STATUS_LABELS)],
        },
        FieldSpec {
            name: "date_occurred",
            label: "Date occurred",
            rules: &[Rule::IsDate],
        },
    ],
};

pub const FINANCE_SCHEMA: Schema = Schema {
    fields: &[
        FieldSpec {
            name: "category",
            label: "Category",
            rules: &[Rule::OneOf(models::FINANCE_CATEGORIES)],
        },
        FieldSpec {
            name: "amount",
            label: "Amount",
            rules: &[Rule::Required, Rule::Positive],
        },
        FieldSpec {
            name: "date",
            label: "Date",
            rules: &[Rule::IsDate],
        },
    ],
};

pub const PROFILE_SCHEMA: Schema = Schema {
    fields: &[
        FieldSpec {
            name: "name",
            label: "Name",
            rules: &[Rule::Required, Rule::MinLen(2)],
        },
        FieldSpec {
            name: "username",
            label: "Username",
            rules: &[Rule::Required, Rule::MinLen(2)],
        },
        FieldSpec {
            name: "email",
            label: "Email",
            rules: &[Rule::Required, Rule::Email],
        },
    ],
};

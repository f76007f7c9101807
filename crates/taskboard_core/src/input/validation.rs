//! Field-level validation rules.

/// Raw field value under validation.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

impl FieldValue {
    fn is_blank(&self) -> bool {
        match self {
            Self::Text(value) => value.trim().is_empty(),
            Self::Number(value) => value.is_nan(),
        }
    }
}

/// One value plus the rules it must satisfy.
///
/// Length rules only apply to text; range rules only apply to numbers.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Validatable {
    pub value: Option<FieldValue>,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Validatable {
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            value: Some(FieldValue::Text(value.into())),
            ..Self::default()
        }
    }

    pub fn number(value: f64) -> Self {
        Self {
            value: Some(FieldValue::Number(value)),
            ..Self::default()
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub fn max_length(mut self, max: Option<usize>) -> Self {
        self.max_length = max;
        self
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }
}

/// Returns whether `input` satisfies all of its rules.
pub fn validate(input: &Validatable) -> bool {
    let Some(value) = input.value.as_ref() else {
        return !input.required;
    };
    if input.required && value.is_blank() {
        return false;
    }
    match value {
        FieldValue::Text(text) => {
            let length = text.chars().count();
            input.min_length.map_or(true, |min| length >= min)
                && input.max_length.map_or(true, |max| length <= max)
        }
        // NaN fails every comparison, so a non-numeric entry is always rejected
        // by a range rule.
        FieldValue::Number(number) => {
            input.min.map_or(true, |min| *number >= min)
                && input.max.map_or(true, |max| *number <= max)
        }
    }
}

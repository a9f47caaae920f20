//! Validation rules for metadata fields

/// Validation rules for a field
/// Copy trait for efficient passing
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    /// Inclusive lower bound for numeric fields
    pub min: Option<f64>,
    /// Inclusive upper bound for numeric fields
    pub max: Option<f64>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    /// Replaces every generated message for this field
    pub custom_error: Option<&'static str>,
}

impl ValidationRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            min: None,
            max: None,
            min_length: None,
            max_length: None,
            custom_error: None,
        }
    }

    /// Create validation rules for required field
    pub const fn required() -> Self {
        Self {
            required: true,
            min: None,
            max: None,
            min_length: None,
            max_length: None,
            custom_error: None,
        }
    }

    /// Check if field is required
    pub const fn is_required(&self) -> bool {
        self.required
    }

    fn fail(&self, message: String) -> Result<(), String> {
        Err(self.custom_error.map(str::to_string).unwrap_or(message))
    }

    /// Validate a string value against the rules
    pub fn validate_string(&self, value: &str, field_label: &str) -> Result<(), String> {
        if self.required && value.trim().is_empty() {
            return self.fail(format!("{} is required", field_label));
        }

        let len = value.chars().count();

        if let Some(min) = self.min_length {
            if len < min {
                return self.fail(format!(
                    "{} must contain at least {} characters",
                    field_label, min
                ));
            }
        }

        if let Some(max) = self.max_length {
            if len > max {
                return self.fail(format!(
                    "{} must not exceed {} characters",
                    field_label, max
                ));
            }
        }

        Ok(())
    }

    /// Validate a numeric value against required/min/max rules.
    /// `None` stands for an empty or unparsable input.
    pub fn validate_number(&self, value: Option<f64>, field_label: &str) -> Result<(), String> {
        let Some(value) = value else {
            if self.required {
                return self.fail(format!("{} is required", field_label));
            }
            return Ok(());
        };

        if !value.is_finite() {
            return self.fail(format!("{} must be a number", field_label));
        }

        if let Some(min) = self.min {
            if value < min {
                return self.fail(format!("{} must be at least {}", field_label, min));
            }
        }

        if let Some(max) = self.max {
            if value > max {
                return self.fail(format!("{} must be at most {}", field_label, max));
            }
        }

        Ok(())
    }
}

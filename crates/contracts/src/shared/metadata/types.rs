//! Core metadata types for aggregates
//!
//! All types use 'static lifetimes for zero-cost compile-time constants.

use super::validation::ValidationRules;

// ============================================================================
// Entity-level metadata
// ============================================================================

/// Metadata for an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityMetadataInfo {
    pub ui: EntityUiMetadata,
}

/// UI metadata for entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityUiMetadata {
    pub element_name: &'static str,
    pub list_name: &'static str,
    pub icon: Option<&'static str>,
}

// ============================================================================
// Field-level metadata
// ============================================================================

/// Metadata for a single field
/// Copy trait enabled for efficient passing by value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldMetadata {
    /// Wire name of the field, also used as the input element id
    pub name: &'static str,
    pub ui: FieldUiMetadata,
    pub validation: ValidationRules,
}

impl FieldMetadata {
    /// Check if field is optional
    pub fn is_optional(&self) -> bool {
        !self.validation.required
    }

    /// Run the string rules with this field's label
    pub fn validate_string(&self, value: &str) -> Result<(), String> {
        self.validation.validate_string(value, self.ui.label)
    }

    /// Run the numeric rules with this field's label
    pub fn validate_number(&self, value: Option<f64>) -> Result<(), String> {
        self.validation.validate_number(value, self.ui.label)
    }
}

/// UI metadata for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldUiMetadata {
    pub label: &'static str,
    pub placeholder: Option<&'static str>,
    /// "text" (default), "textarea" or "number"
    pub widget: Option<&'static str>,
    /// `step` attribute for number widgets
    pub step: Option<&'static str>,
}

impl FieldUiMetadata {
    pub fn widget(&self) -> &'static str {
        self.widget.unwrap_or("text")
    }
}

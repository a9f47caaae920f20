//! Editable state of the Product form.
//!
//! Plain data, no reactive types: the view model keeps a `ProductFormState`
//! inside a signal and every mutation goes through the methods below.

use contracts::domain::a001_product::aggregate::ProductDto;
use contracts::domain::a001_product::metadata::{
    DESCRIPTION, FIELDS, NAME, PRICE, STOCK_QUANTITY,
};
use contracts::shared::metadata::FieldMetadata;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductField {
    Name,
    Description,
    Price,
    StockQuantity,
}

impl ProductField {
    pub const ALL: [ProductField; 4] = [
        ProductField::Name,
        ProductField::Description,
        ProductField::Price,
        ProductField::StockQuantity,
    ];

    pub fn metadata(self) -> &'static FieldMetadata {
        let index = match self {
            Self::Name => NAME,
            Self::Description => DESCRIPTION,
            Self::Price => PRICE,
            Self::StockQuantity => STOCK_QUANTITY,
        };
        &FIELDS[index]
    }

    /// Element id of the field's input
    pub fn input_id(self) -> &'static str {
        self.metadata().name
    }

    pub fn label(self) -> &'static str {
        self.metadata().ui.label
    }
}

/// Current values of the form. Numeric fields keep the text as typed so the
/// input is never rewritten while the user edits it.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFormValues {
    pub name: String,
    pub description: String,
    pub price: String,
    pub stock_quantity: String,
}

impl Default for ProductFormValues {
    fn default() -> Self {
        Self::from(&ProductDto::default())
    }
}

impl From<&ProductDto> for ProductFormValues {
    fn from(dto: &ProductDto) -> Self {
        Self {
            name: dto.name.clone(),
            description: dto.description.clone(),
            price: dto.price.to_string(),
            stock_quantity: dto.stock_quantity.to_string(),
        }
    }
}

impl ProductFormValues {
    /// Text shown in the field's input
    pub fn display(&self, field: ProductField) -> String {
        match field {
            ProductField::Name => self.name.clone(),
            ProductField::Description => self.description.clone(),
            ProductField::Price => self.price.clone(),
            ProductField::StockQuantity => self.stock_quantity.clone(),
        }
    }

    /// Parsed price; `None` when empty or not a finite number
    pub fn price_value(&self) -> Option<f64> {
        parse_price(&self.price)
    }

    /// Parsed stock quantity; `None` when empty or not an integer
    pub fn stock_quantity_value(&self) -> Option<i64> {
        parse_quantity(&self.stock_quantity)
    }

    fn set(&mut self, field: ProductField, raw: &str) {
        let slot = match field {
            ProductField::Name => &mut self.name,
            ProductField::Description => &mut self.description,
            ProductField::Price => &mut self.price,
            ProductField::StockQuantity => &mut self.stock_quantity,
        };
        *slot = raw.to_string();
    }

    fn check(&self, field: ProductField) -> Result<(), String> {
        let meta = field.metadata();
        match field {
            ProductField::Name => meta.validate_string(&self.name),
            ProductField::Description => meta.validate_string(&self.description),
            ProductField::Price => meta.validate_number(self.price_value()),
            ProductField::StockQuantity => {
                meta.validate_number(self.stock_quantity_value().map(|q| q as f64))
            }
        }
    }
}

fn parse_price(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|p| p.is_finite())
}

fn parse_quantity(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldStatus {
    pub touched: bool,
    pub valid: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProductFormFlags {
    pub name: FieldStatus,
    pub description: FieldStatus,
    pub price: FieldStatus,
    pub stock_quantity: FieldStatus,
}

impl ProductFormFlags {
    pub fn get(&self, field: ProductField) -> FieldStatus {
        match field {
            ProductField::Name => self.name,
            ProductField::Description => self.description,
            ProductField::Price => self.price,
            ProductField::StockQuantity => self.stock_quantity,
        }
    }

    fn get_mut(&mut self, field: ProductField) -> &mut FieldStatus {
        match field {
            ProductField::Name => &mut self.name,
            ProductField::Description => &mut self.description,
            ProductField::Price => &mut self.price,
            ProductField::StockQuantity => &mut self.stock_quantity,
        }
    }

    pub fn all_valid(&self) -> bool {
        ProductField::ALL.iter().all(|f| self.get(*f).valid)
    }
}

/// Recompute per-field validity from `values`. Touched flags are carried over.
pub fn validate(values: &ProductFormValues, flags: &ProductFormFlags) -> ProductFormFlags {
    let mut next = *flags;
    for field in ProductField::ALL {
        next.get_mut(field).valid = values.check(field).is_ok();
    }
    next
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Editing,
    Closed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductFormState {
    values: ProductFormValues,
    flags: ProductFormFlags,
    edit_mode: bool,
    phase: FormPhase,
}

impl Default for ProductFormState {
    fn default() -> Self {
        Self::new(None)
    }
}

impl ProductFormState {
    /// Fresh form state, patched from `existing` when editing.
    pub fn new(existing: Option<&ProductDto>) -> Self {
        let values = existing.map(ProductFormValues::from).unwrap_or_default();
        let flags = validate(&values, &ProductFormFlags::default());
        Self {
            values,
            flags,
            edit_mode: existing.is_some(),
            phase: FormPhase::Editing,
        }
    }

    pub fn values(&self) -> &ProductFormValues {
        &self.values
    }

    pub fn status(&self, field: ProductField) -> FieldStatus {
        self.flags.get(field)
    }

    pub fn is_edit_mode(&self) -> bool {
        self.edit_mode
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Store raw input text for `field` and mark it touched.
    pub fn set_field(&mut self, field: ProductField, raw: &str) {
        if self.phase == FormPhase::Closed {
            log::debug!("product form closed, ignoring edit of {:?}", field);
            return;
        }
        self.values.set(field, raw);
        self.flags.get_mut(field).touched = true;
        self.flags = validate(&self.values, &self.flags);
    }

    /// Mark `field` touched without changing its value (input lost focus).
    pub fn mark_touched(&mut self, field: ProductField) {
        if self.phase == FormPhase::Closed {
            return;
        }
        self.flags.get_mut(field).touched = true;
    }

    pub fn is_submittable(&self) -> bool {
        self.flags.all_valid()
    }

    /// Message to show under `field`; only touched fields report errors.
    pub fn error_message(&self, field: ProductField) -> Option<String> {
        let status = self.status(field);
        if !status.touched || status.valid {
            return None;
        }
        self.values.check(field).err()
    }

    /// Copy of the current values, if every field is valid.
    pub fn snapshot(&self) -> Option<ProductDto> {
        if !self.is_submittable() {
            return None;
        }
        Some(ProductDto {
            name: self.values.name.clone(),
            description: self.values.description.clone(),
            price: self.values.price_value()?,
            stock_quantity: self.values.stock_quantity_value()?,
        })
    }

    /// Close the form with its values. Returns `None` and leaves the state
    /// untouched while the form is invalid or already closed.
    pub fn submit(&mut self) -> Option<ProductDto> {
        if self.phase == FormPhase::Closed {
            log::debug!("product form closed, ignoring submit");
            return None;
        }
        let payload = self.snapshot()?;
        self.phase = FormPhase::Closed;
        Some(payload)
    }

    /// Close the form without values. Returns `false` if already closed.
    pub fn cancel(&mut self) -> bool {
        if self.phase == FormPhase::Closed {
            log::debug!("product form closed, ignoring cancel");
            return false;
        }
        self.phase = FormPhase::Closed;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, description: &str, price: f64, stock_quantity: i64) -> ProductDto {
        ProductDto {
            name: name.to_string(),
            description: description.to_string(),
            price,
            stock_quantity,
        }
    }

    fn filled() -> ProductFormState {
        ProductFormState::new(Some(&product("Widget", "", 9.99, 5)))
    }

    #[test]
    fn test_defaults_without_product() {
        let form = ProductFormState::new(None);
        let values = form.values();
        assert_eq!(values.name, "");
        assert_eq!(values.description, "");
        assert_eq!(values.price, "0");
        assert_eq!(values.price_value(), Some(0.0));
        assert_eq!(values.stock_quantity, "0");
        assert_eq!(values.stock_quantity_value(), Some(0));
        assert!(!form.is_edit_mode());
        assert_eq!(form.phase(), FormPhase::Editing);
    }

    #[test]
    fn test_initial_flags_untouched_but_validated() {
        let form = ProductFormState::new(None);
        for field in ProductField::ALL {
            assert!(!form.status(field).touched);
        }
        assert!(!form.status(ProductField::Name).valid);
        assert!(form.status(ProductField::Description).valid);
        assert!(!form.status(ProductField::Price).valid);
        assert!(form.status(ProductField::StockQuantity).valid);
        assert!(form.error_message(ProductField::Name).is_none());
    }

    #[test]
    fn test_prepopulated_from_existing() {
        let form = ProductFormState::new(Some(&product("Gadget", "desc", 19.99, 10)));
        assert!(form.is_edit_mode());
        assert_eq!(form.values().name, "Gadget");
        assert_eq!(form.values().description, "desc");
        assert_eq!(form.values().price, "19.99");
        assert_eq!(form.values().price_value(), Some(19.99));
        assert_eq!(form.values().stock_quantity_value(), Some(10));
        assert!(ProductField::ALL.iter().all(|f| !form.status(*f).touched));
    }

    #[test]
    fn test_malformed_existing_stays_blocked() {
        let form = ProductFormState::new(Some(&product("Gadget", "", 0.0, 3)));
        assert!(!form.is_submittable());
    }

    #[test]
    fn test_scenario_a_defaults_do_not_submit() {
        let mut form = ProductFormState::new(None);
        assert!(!form.is_submittable());
        assert_eq!(form.submit(), None);
        assert_eq!(form.phase(), FormPhase::Editing);
    }

    #[test]
    fn test_scenario_b_fill_and_submit() {
        let mut form = ProductFormState::new(None);
        form.set_field(ProductField::Name, "Widget");
        form.set_field(ProductField::Price, "9.99");
        form.set_field(ProductField::StockQuantity, "5");
        assert!(form.is_submittable());
        assert_eq!(form.submit(), Some(product("Widget", "", 9.99, 5)));
        assert_eq!(form.phase(), FormPhase::Closed);
    }

    #[test]
    fn test_scenario_c_edit_and_submit_unchanged() {
        let gadget = product("Gadget", "desc", 19.99, 10);
        let mut form = ProductFormState::new(Some(&gadget));
        assert_eq!(form.submit(), Some(gadget));
    }

    #[test]
    fn test_scenario_d_cancel_from_any_state() {
        let mut invalid = ProductFormState::new(None);
        assert!(invalid.cancel());
        assert_eq!(invalid.phase(), FormPhase::Closed);
        assert_eq!(invalid.submit(), None);

        let mut valid = filled();
        assert!(valid.cancel());
        assert_eq!(valid.submit(), None);
    }

    #[test]
    fn test_valid_products_round_trip_through_form() {
        let products = [
            product("A", "", 0.01, 0),
            product("Long name", "with description", 1_000_000.0, i64::MAX),
            product(" x ", "", 12.5, 1),
        ];
        for p in products {
            let mut form = ProductFormState::new(Some(&p));
            assert_eq!(form.submit(), Some(p));
        }
    }

    #[test]
    fn test_empty_name_blocks_submit() {
        let mut form = filled();
        form.set_field(ProductField::Name, "");
        assert!(!form.is_submittable());
        form.set_field(ProductField::Name, "   ");
        assert!(!form.is_submittable());
        assert_eq!(
            form.error_message(ProductField::Name),
            Some("Name is required".to_string())
        );
    }

    #[test]
    fn test_price_below_minimum_blocks_submit() {
        for raw in ["0", "0.009", "-5", "", "abc", "NaN", "inf"] {
            let mut form = filled();
            form.set_field(ProductField::Price, raw);
            assert!(!form.is_submittable(), "price {:?} accepted", raw);
            assert_eq!(
                form.error_message(ProductField::Price),
                Some("Price must be greater than 0".to_string())
            );
        }
        let mut form = filled();
        form.set_field(ProductField::Price, " 0.01 ");
        assert!(form.is_submittable());
    }

    #[test]
    fn test_negative_or_missing_stock_blocks_submit() {
        for raw in ["-1", "", "2.5", "many"] {
            let mut form = filled();
            form.set_field(ProductField::StockQuantity, raw);
            assert!(!form.is_submittable(), "stock {:?} accepted", raw);
        }
        let mut form = filled();
        form.set_field(ProductField::StockQuantity, "0");
        assert!(form.is_submittable());
    }

    #[test]
    fn test_description_is_always_valid() {
        let mut form = filled();
        form.set_field(ProductField::Description, "");
        assert!(form.status(ProductField::Description).valid);
        assert!(form.error_message(ProductField::Description).is_none());
    }

    #[test]
    fn test_set_field_marks_only_that_field_touched() {
        let mut form = ProductFormState::new(None);
        form.set_field(ProductField::Price, "3");
        assert!(form.status(ProductField::Price).touched);
        assert!(!form.status(ProductField::Name).touched);
        assert!(form.error_message(ProductField::Name).is_none());
    }

    #[test]
    fn test_blur_reveals_message_without_changing_value() {
        let mut form = ProductFormState::new(None);
        form.mark_touched(ProductField::Name);
        assert_eq!(form.values().name, "");
        assert_eq!(
            form.error_message(ProductField::Name),
            Some("Name is required".to_string())
        );
    }

    #[test]
    fn test_repeated_invalid_submit_never_emits() {
        let mut form = ProductFormState::new(None);
        form.set_field(ProductField::Name, "Widget");
        let before = form.clone();
        for _ in 0..5 {
            assert_eq!(form.submit(), None);
        }
        assert_eq!(form, before);
    }

    #[test]
    fn test_closed_form_ignores_edits() {
        let mut form = filled();
        assert!(form.submit().is_some());
        form.set_field(ProductField::Name, "");
        form.mark_touched(ProductField::Price);
        assert_eq!(form.values().name, "Widget");
        assert!(!form.status(ProductField::Price).touched);
        assert_eq!(form.submit(), None);
        assert!(!form.cancel());
    }

    #[test]
    fn test_display_values() {
        let mut form = filled();
        assert_eq!(form.values().display(ProductField::Price), "9.99");
        assert_eq!(form.values().display(ProductField::StockQuantity), "5");
        form.set_field(ProductField::Price, "");
        assert_eq!(form.values().display(ProductField::Price), "");
    }

    #[test]
    fn test_numeric_input_text_kept_as_typed() {
        for raw in ["19.", "0.10", "", "1e2", "-0"] {
            let mut form = filled();
            form.set_field(ProductField::Price, raw);
            assert_eq!(form.values().display(ProductField::Price), raw);
            form.set_field(ProductField::StockQuantity, raw);
            assert_eq!(form.values().display(ProductField::StockQuantity), raw);
        }
    }

    #[test]
    fn test_partial_price_text_parses_on_submit() {
        let mut form = filled();
        form.set_field(ProductField::Price, "19.");
        assert_eq!(form.values().price_value(), Some(19.0));
        form.set_field(ProductField::Price, "19.5");
        assert_eq!(form.submit().map(|p| p.price), Some(19.5));
    }

    #[test]
    fn test_field_metadata_mapping() {
        assert_eq!(ProductField::StockQuantity.input_id(), "stockQuantity");
        assert_eq!(ProductField::Price.label(), "Price");
        assert_eq!(ProductField::Description.metadata().ui.widget(), "textarea");
    }
}

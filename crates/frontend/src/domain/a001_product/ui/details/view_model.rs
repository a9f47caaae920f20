use super::form::{ProductField, ProductFormState};
use contracts::domain::a001_product::aggregate::ProductDto;
use leptos::prelude::*;

/// ViewModel for Product details form
#[derive(Clone, Copy)]
pub struct ProductDetailsViewModel {
    pub form: RwSignal<ProductFormState>,
}

impl ProductDetailsViewModel {
    /// The product is read once; later changes on the caller side do not
    /// reach an open form.
    pub fn new(product: Option<ProductDto>) -> Self {
        Self {
            form: RwSignal::new(ProductFormState::new(product.as_ref())),
        }
    }

    pub fn is_edit_mode(&self) -> impl Fn() -> bool + Copy + 'static {
        let form = self.form;
        move || form.with(|f| f.is_edit_mode())
    }

    pub fn is_form_valid(&self) -> impl Fn() -> bool + Copy + 'static {
        let form = self.form;
        move || form.with(|f| f.is_submittable())
    }

    pub fn value(&self, field: ProductField) -> String {
        self.form.with(|f| f.values().display(field))
    }

    pub fn error(&self, field: ProductField) -> Option<String> {
        self.form.with(|f| f.error_message(field))
    }

    pub fn set_field(&self, field: ProductField, raw: String) {
        self.form.update(|f| f.set_field(field, &raw));
    }

    pub fn touch(&self, field: ProductField) {
        self.form.update(|f| f.mark_touched(field));
    }

    /// Emit the form values through `on_saved` if the form is valid
    pub fn save_command(&self, on_saved: Callback<ProductDto>) {
        // Signal is released before the callback runs, so it may read the form.
        let payload = self.form.try_update(|f| f.submit()).flatten();
        match payload {
            Some(product) => {
                log::debug!("product form saved: {}", product.name);
                on_saved.run(product);
            }
            None => {
                let invalid: Vec<&str> = self.form.with_untracked(|f| {
                    ProductField::ALL
                        .into_iter()
                        .filter(|field| !f.status(*field).valid)
                        .map(|field| field.input_id())
                        .collect()
                });
                log::debug!("product form submit blocked, invalid fields: {:?}", invalid);
            }
        }
    }

    pub fn cancel_command(&self, on_cancel: Callback<()>) {
        let cancelled = self.form.try_update(|f| f.cancel()).unwrap_or(false);
        if cancelled {
            log::debug!("product form cancelled");
            on_cancel.run(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Outcomes {
        saved: RwSignal<Vec<ProductDto>>,
        cancelled: RwSignal<usize>,
        on_saved: Callback<ProductDto>,
        on_cancel: Callback<()>,
    }

    fn outcomes() -> Outcomes {
        let saved = RwSignal::new(Vec::new());
        let cancelled = RwSignal::new(0usize);
        Outcomes {
            saved,
            cancelled,
            on_saved: Callback::new(move |p: ProductDto| saved.update(|v| v.push(p))),
            on_cancel: Callback::new(move |_: ()| cancelled.update(|n| *n += 1)),
        }
    }

    fn in_owner(test: impl FnOnce()) {
        let owner = Owner::new();
        owner.with(test);
    }

    fn gadget() -> ProductDto {
        ProductDto {
            name: "Gadget".to_string(),
            description: "desc".to_string(),
            price: 19.99,
            stock_quantity: 10,
        }
    }

    #[test]
    fn test_save_fires_once_for_filled_form() {
        in_owner(|| {
            let out = outcomes();
            let vm = ProductDetailsViewModel::new(None);
            vm.set_field(ProductField::Name, "Widget".to_string());
            vm.set_field(ProductField::Price, "9.99".to_string());
            vm.set_field(ProductField::StockQuantity, "5".to_string());
            vm.save_command(out.on_saved);

            let expected = ProductDto {
                name: "Widget".to_string(),
                description: String::new(),
                price: 9.99,
                stock_quantity: 5,
            };
            assert_eq!(out.saved.get_untracked(), vec![expected]);
            assert_eq!(out.cancelled.get_untracked(), 0);
        });
    }

    #[test]
    fn test_save_fires_once_for_existing_product() {
        in_owner(|| {
            let out = outcomes();
            let vm = ProductDetailsViewModel::new(Some(gadget()));
            vm.save_command(out.on_saved);
            assert_eq!(out.saved.get_untracked(), vec![gadget()]);
        });
    }

    #[test]
    fn test_blocked_save_fires_nothing() {
        in_owner(|| {
            let out = outcomes();
            let vm = ProductDetailsViewModel::new(None);
            vm.save_command(out.on_saved);
            vm.save_command(out.on_saved);
            assert!(out.saved.get_untracked().is_empty());
            assert_eq!(out.cancelled.get_untracked(), 0);
        });
    }

    #[test]
    fn test_cancel_fires_only_on_cancel() {
        in_owner(|| {
            let out = outcomes();
            let vm = ProductDetailsViewModel::new(Some(gadget()));
            vm.cancel_command(out.on_cancel);
            assert_eq!(out.cancelled.get_untracked(), 1);
            assert!(out.saved.get_untracked().is_empty());
        });
    }

    #[test]
    fn test_nothing_fires_after_close() {
        in_owner(|| {
            let out = outcomes();
            let vm = ProductDetailsViewModel::new(Some(gadget()));
            vm.save_command(out.on_saved);
            vm.save_command(out.on_saved);
            vm.cancel_command(out.on_cancel);
            assert_eq!(out.saved.get_untracked().len(), 1);
            assert_eq!(out.cancelled.get_untracked(), 0);

            let out = outcomes();
            let vm = ProductDetailsViewModel::new(None);
            vm.cancel_command(out.on_cancel);
            vm.cancel_command(out.on_cancel);
            vm.set_field(ProductField::Name, "Widget".to_string());
            vm.save_command(out.on_saved);
            assert_eq!(out.cancelled.get_untracked(), 1);
            assert!(out.saved.get_untracked().is_empty());
        });
    }

    #[test]
    fn test_off_step_price_still_saves() {
        in_owner(|| {
            let out = outcomes();
            let mut product = gadget();
            product.price = 0.015;
            let vm = ProductDetailsViewModel::new(Some(product.clone()));
            assert!(vm.is_form_valid()());
            vm.save_command(out.on_saved);
            assert_eq!(out.saved.get_untracked(), vec![product]);
        });
    }

    #[test]
    fn test_value_keeps_typed_text() {
        in_owner(|| {
            let vm = ProductDetailsViewModel::new(Some(gadget()));
            vm.set_field(ProductField::Price, "19.".to_string());
            assert_eq!(vm.value(ProductField::Price), "19.");
            assert!(vm.is_form_valid()());
        });
    }
}

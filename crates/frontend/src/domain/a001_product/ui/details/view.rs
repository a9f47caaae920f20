use super::form::ProductField;
use super::view_model::ProductDetailsViewModel;
use crate::shared::components::ui::{Button, Input, Textarea};
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::domain::a001_product::aggregate::ProductDto;
use contracts::domain::a001_product::metadata::ENTITY_METADATA;
use leptos::ev::{MouseEvent, SubmitEvent};
use leptos::prelude::*;

#[component]
pub fn ProductDetails(
    product: Option<ProductDto>,
    on_saved: Callback<ProductDto>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = ProductDetailsViewModel::new(product);
    let is_edit_mode = vm.is_edit_mode();
    let is_form_valid = vm.is_form_valid();

    let title = Signal::derive(move || {
        let action = if is_edit_mode() { "Edit" } else { "Add" };
        format!("{} {}", action, ENTITY_METADATA.ui.element_name)
    });
    let cancel = Callback::new(move |_: ()| vm.cancel_command(on_cancel));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.save_command(on_saved);
    };

    view! {
        <Modal title=title on_close=cancel>
            <form class="details-form product-details" novalidate=true on:submit=on_submit>
                {field_input(vm, ProductField::Name)}
                {field_input(vm, ProductField::Description)}
                {field_input(vm, ProductField::Price)}
                {field_input(vm, ProductField::StockQuantity)}

                <div class="details-actions">
                    <Button
                        variant="secondary"
                        on_click=Callback::new(move |_: MouseEvent| cancel.run(()))
                    >
                        {icon("cancel")}
                        {"Cancel"}
                    </Button>
                    <Button
                        button_type="submit"
                        disabled=Signal::derive(move || !is_form_valid())
                    >
                        {icon("save")}
                        {move || if is_edit_mode() { "Update" } else { "Create" }}
                    </Button>
                </div>
            </form>
        </Modal>
    }
}

/// Input widget for `field`, chosen from its metadata
fn field_input(vm: ProductDetailsViewModel, field: ProductField) -> AnyView {
    let meta = field.metadata();
    let value = Signal::derive(move || vm.value(field));
    let on_input = Callback::new(move |raw: String| vm.set_field(field, raw));
    let on_blur = Callback::new(move |_: ()| vm.touch(field));

    match meta.ui.widget() {
        "textarea" => view! {
            <Textarea
                id=field.input_id()
                label=meta.ui.label
                placeholder=meta.ui.placeholder.map(str::to_string)
                value=value
                on_input=on_input
                on_blur=on_blur
            />
        }
        .into_any(),
        widget => view! {
            <Input
                id=field.input_id()
                label=meta.ui.label
                placeholder=meta.ui.placeholder.map(str::to_string)
                input_type=widget
                step=meta.ui.step.map(str::to_string)
                required=meta.validation.is_required()
                value=value
                on_input=on_input
                on_blur=on_blur
                error=Signal::derive(move || vm.error(field))
            />
        }
        .into_any(),
    }
}

use crate::domain::a001_product::ui::details::ProductDetails;
use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use contracts::domain::a001_product::aggregate::ProductDto;
use contracts::domain::a001_product::metadata::ENTITY_METADATA;
use leptos::ev::MouseEvent;
use leptos::prelude::*;

/// Which form is open: `Some(None)` adds, `Some(Some(p))` edits `p`
type OpenForm = Option<Option<ProductDto>>;

fn sample_product() -> ProductDto {
    ProductDto {
        name: "Gadget".to_string(),
        description: "desc".to_string(),
        price: 19.99,
        stock_quantity: 10,
    }
}

#[component]
pub fn App() -> impl IntoView {
    let open = RwSignal::<OpenForm>::new(None);
    let last_outcome = RwSignal::new(String::from("-"));

    let on_saved = Callback::new(move |product: ProductDto| {
        log::info!("product saved: {:?}", product);
        last_outcome.set(format!(
            "Saved: {} ({:.2} x {})",
            product.name, product.price, product.stock_quantity
        ));
        open.set(None);
    });
    let on_cancel = Callback::new(move |_: ()| {
        log::info!("product form cancelled");
        last_outcome.set("Cancelled".to_string());
        open.set(None);
    });

    view! {
        <div class="page products-page">
            <div class="page-header">
                <h1>{icon(ENTITY_METADATA.ui.icon.unwrap_or_default())}{ENTITY_METADATA.ui.list_name}</h1>
                <Button on_click=Callback::new(move |_: MouseEvent| open.set(Some(None)))>
                    {icon("plus")}
                    {"Add product"}
                </Button>
                <Button
                    variant="secondary"
                    on_click=Callback::new(move |_: MouseEvent| open.set(Some(Some(sample_product()))))
                >
                    {icon("edit")}
                    {"Edit product"}
                </Button>
            </div>
            <p class="last-outcome">{move || last_outcome.get()}</p>
            {move || open.get().map(|product| view! {
                <ProductDetails product=product on_saved=on_saved on_cancel=on_cancel />
            })}
        </div>
    }
}

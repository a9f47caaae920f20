use crate::shared::metadata::{
    EntityMetadataInfo, EntityUiMetadata, FieldMetadata, FieldUiMetadata, ValidationRules,
};

/// Entity metadata for Product aggregate
pub const ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo {
    ui: EntityUiMetadata {
        element_name: "Product",
        list_name: "Products",
        icon: Some("products"),
    },
};

/// Field metadata array, in form order
pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata {
        name: "name",
        ui: FieldUiMetadata {
            label: "Name",
            placeholder: Some("Enter product name"),
            widget: None,
            step: None,
        },
        validation: ValidationRules {
            required: true,
            min: None,
            max: None,
            min_length: None,
            max_length: None,
            custom_error: Some("Name is required"),
        },
    },
    FieldMetadata {
        name: "description",
        ui: FieldUiMetadata {
            label: "Description",
            placeholder: Some("Optional description"),
            widget: Some("textarea"),
            step: None,
        },
        validation: ValidationRules::none(),
    },
    FieldMetadata {
        name: "price",
        ui: FieldUiMetadata {
            label: "Price",
            placeholder: None,
            widget: Some("number"),
            step: Some("0.01"),
        },
        validation: ValidationRules {
            required: true,
            min: Some(0.01),
            max: None,
            min_length: None,
            max_length: None,
            custom_error: Some("Price must be greater than 0"),
        },
    },
    FieldMetadata {
        name: "stockQuantity",
        ui: FieldUiMetadata {
            label: "Stock Quantity",
            placeholder: None,
            widget: Some("number"),
            step: Some("1"),
        },
        validation: ValidationRules {
            required: true,
            min: Some(0.0),
            max: None,
            min_length: None,
            max_length: None,
            custom_error: Some("Stock quantity is required and must be at least 0"),
        },
    },
];

pub const NAME: usize = 0;
pub const DESCRIPTION: usize = 1;
pub const PRICE: usize = 2;
pub const STOCK_QUANTITY: usize = 3;

use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Product record created or edited by the product form.
///
/// Deserialization is lenient: a missing field keeps its default value, so a
/// partial record still opens in the form and is validated there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProductDto {
    pub name: String,

    #[serde(deserialize_with = "null_as_default")]
    pub description: String,

    pub price: f64,

    #[serde(rename = "stockQuantity")]
    pub stock_quantity: i64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

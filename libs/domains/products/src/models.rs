use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

/// Number of fractional digits a price may carry
pub const PRICE_SCALE: u32 = 2;

/// Maximum length of a single size label
pub const MAX_SIZE_LEN: usize = 20;

/// Custom validator for prices: strictly positive with at most two decimal places
pub fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if price.is_sign_negative() || price.is_zero() {
        return Err(ValidationError::new("price_not_positive")
            .with_message(Cow::Borrowed("Price must be greater than 0")));
    }
    if price.round_dp(PRICE_SCALE) != *price {
        return Err(ValidationError::new("price_precision")
            .with_message(Cow::Borrowed("Price must have at most 2 decimal places")));
    }
    Ok(())
}

/// Custom validator for size labels
fn validate_sizes(sizes: &[String]) -> Result<(), ValidationError> {
    let invalid = sizes
        .iter()
        .any(|size| size.is_empty() || size.chars().count() > MAX_SIZE_LEN);

    if invalid {
        return Err(ValidationError::new("invalid_size").with_message(Cow::Borrowed(
            "Each size must be between 1 and 20 characters",
        )));
    }
    Ok(())
}

/// Full product record, as returned by the detail endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Store-assigned identifier
    pub id: i32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Unit price, two decimal places
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 25.99)]
    pub price: Decimal,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizes: Option<Vec<String>>,
}

/// Reduced projection used by the listing endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductSummary {
    pub id: i32,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 25.99)]
    pub price: Decimal,
    pub category: String,
}

/// DTO for creating a new product
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 25.99)]
    #[validate(custom(function = "validate_price"))]
    pub price: Decimal,
    #[validate(length(min = 1, max = 100))]
    pub category: String,
    #[serde(default)]
    #[validate(custom(function = "validate_sizes"))]
    pub sizes: Option<Vec<String>>,
}

/// DTO for partial updates. Validated the same way as creation but not
/// exposed by any route.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProduct {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    #[schema(value_type = Option<f64>)]
    #[validate(custom(function = "validate_price"))]
    pub price: Option<Decimal>,
    #[validate(length(min = 1, max = 100))]
    pub category: Option<String>,
    #[validate(custom(function = "validate_sizes"))]
    pub sizes: Option<Vec<String>>,
}

/// Query filters for listing products
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
pub struct ProductFilter {
    /// Exact, case-sensitive category match. Empty means no filter.
    pub category: Option<String>,
}

impl ProductFilter {
    /// Category to filter on, treating an empty value as absent
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }
}

impl Product {
    /// Build a product from a creation DTO and an assigned id
    pub fn new(id: i32, input: CreateProduct) -> Self {
        Self {
            id,
            name: input.name,
            description: input.description,
            price: input.price,
            category: input.category,
            sizes: input.sizes,
        }
    }
}

impl From<Product> for ProductSummary {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            category: product.category,
        }
    }
}

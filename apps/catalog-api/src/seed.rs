//! Sample catalog for local development (`SEED_SAMPLE_DATA=true`).

use domain_products::{CreateProduct, ProductRepository, ProductResult, ProductService};
use rust_decimal::Decimal;
use tracing::info;

fn sample(
    name: &str,
    description: &str,
    cents: i64,
    category: &str,
    sizes: &[&str],
) -> CreateProduct {
    CreateProduct {
        name: name.to_string(),
        description: Some(description.to_string()),
        price: Decimal::new(cents, 2),
        category: category.to_string(),
        sizes: Some(sizes.iter().map(|s| s.to_string()).collect()),
    }
}

pub fn sample_products() -> Vec<CreateProduct> {
    vec![
        sample(
            "Cotton T-Shirt",
            "Classic crew neck in organic cotton",
            2599,
            "T-Shirts",
            &["S", "M", "L", "XL"],
        ),
        sample(
            "V-Neck T-Shirt",
            "Lightweight jersey with a relaxed fit",
            2299,
            "T-Shirts",
            &["XS", "S", "M", "L"],
        ),
        sample(
            "Slim Fit Jeans",
            "Stretch denim, dark indigo wash",
            5999,
            "Jeans",
            &["28", "30", "32", "34", "36"],
        ),
        sample(
            "Wool Blend Coat",
            "Single-breasted coat with notch lapels",
            18900,
            "Outerwear",
            &["S", "M", "L"],
        ),
        sample(
            "Canvas Sneakers",
            "Low-top sneakers with rubber sole",
            6450,
            "Shoes",
            &["40", "41", "42", "43", "44"],
        ),
    ]
}

/// Insert the sample catalog unless products already exist.
///
/// Returns the number of products created.
pub async fn seed_sample_data<R: ProductRepository>(
    service: &ProductService<R>,
) -> ProductResult<usize> {
    if !service.list_all_products().await?.is_empty() {
        info!("Products table is not empty, skipping sample data");
        return Ok(0);
    }

    let products = sample_products();
    let count = products.len();
    for product in products {
        service.create_product(product).await?;
    }

    info!(count, "Inserted sample products");
    Ok(count)
}

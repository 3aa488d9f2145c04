use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_CATEGORY: &str = "Geral";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub average_price: f64,
    pub barcode: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

static SEED_PRODUCTS: LazyLock<Vec<Product>> = LazyLock::new(|| {
    vec![
        seed(1, "Leite Integral", "Laticínios", 4.50, "7891000100103"),
        seed(2, "Arroz Branco 5kg", "Mercearia", 24.90, "7891000200201"),
        seed(3, "Detergente Neutro", "Limpeza", 2.89, "7891000300308"),
    ]
});

/// Built-in catalog entries that every installation starts with.
pub fn seed_products() -> &'static [Product] {
    SEED_PRODUCTS.as_slice()
}

fn seed(n: u128, name: &str, category: &str, average_price: f64, barcode: &str) -> Product {
    Product {
        id: Uuid::from_u128(n),
        name: name.to_string(),
        category: category.to_string(),
        average_price,
        barcode: barcode.to_string(),
        image: None,
    }
}

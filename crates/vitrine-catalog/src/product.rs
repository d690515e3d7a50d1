//! Product records
//!
//! Field names mirror the storefront API's camelCase wire shape. Image and
//! price are nullable on the wire and stay optional here.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub entity_id: u64,
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub add_to_cart_url: Option<String>,
    #[serde(default)]
    pub default_image: Option<Image>,
    #[serde(default)]
    pub prices: Option<Prices>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prices {
    #[serde(default)]
    pub price: Option<Money>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    pub value: f64,
    pub currency_code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_wire_shape() {
        let json = r#"{
            "entityId": 7,
            "name": "Shirt",
            "path": "/shirt/",
            "addToCartUrl": "/cart.php?action=add&product_id=7",
            "defaultImage": { "url": "https://cdn.example.com/shirt.jpg" },
            "prices": { "price": { "value": 24.5, "currencyCode": "USD" } }
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.entity_id, 7);
        assert_eq!(product.default_image.unwrap().url, "https://cdn.example.com/shirt.jpg");
        let money = product.prices.unwrap().price.unwrap();
        assert_eq!(money.currency_code, "USD");
        assert_eq!(money.value, 24.5);
    }

    #[test]
    fn test_nullable_fields_default_to_none() {
        let json = r#"{ "entityId": 1, "name": "Bare", "path": "/bare/" }"#;
        let product: Product = serde_json::from_str(json).unwrap();

        assert!(product.add_to_cart_url.is_none());
        assert!(product.default_image.is_none());
        assert!(product.prices.is_none());
    }
}

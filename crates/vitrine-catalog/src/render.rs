//! Placeholder template rendering
//!
//! Designer templates name product fields in `{braces}`. Substitution goes
//! through a typed field map built per product: the two nested fields
//! (`defaultImage`, `prices`) are resolved to flat strings up front, then
//! every placeholder is replaced in one generic pass. Placeholders that
//! name no known field are left verbatim.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::product::Product;

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{(\w+)\}").expect("placeholder pattern"));

fn placeholder_values(product: &Product) -> BTreeMap<&'static str, String> {
    let mut values = BTreeMap::new();
    values.insert("entityId", product.entity_id.to_string());
    values.insert("name", product.name.clone());
    values.insert("path", product.path.clone());
    values.insert(
        "addToCartUrl",
        product.add_to_cart_url.clone().unwrap_or_default(),
    );
    values.insert(
        "defaultImage",
        product
            .default_image
            .as_ref()
            .map(|image| image.url.clone())
            .unwrap_or_default(),
    );
    // An absent price renders as nothing rather than a placeholder value.
    values.insert(
        "prices",
        product
            .prices
            .as_ref()
            .and_then(|prices| prices.price.as_ref())
            .map(|money| format!("{} {}", money.currency_code, money.value))
            .unwrap_or_default(),
    );
    values
}

/// Render one product through the template.
pub fn render_product(template: &str, product: &Product) -> String {
    let values = placeholder_values(product);
    PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| {
            let name = caps.get(1).map_or("", |m| m.as_str());
            match values.get(name) {
                Some(value) => value.clone(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Render every product and concatenate the fragments in input order.
pub fn render_products(template: &str, products: &[Product]) -> String {
    products
        .iter()
        .map(|product| render_product(template, product))
        .collect()
}

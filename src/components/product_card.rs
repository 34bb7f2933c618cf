//! Product card and capped product-list rendering.

#[cfg(test)]
#[path = "product_card_test.rs"]
mod product_card_test;

use leptos::prelude::*;

use crate::net::types::Product;
use crate::util::price::format_price;

/// Most product cards rendered from one reply.
pub const MAX_LIST_PRODUCTS: usize = 3;

/// Most feature badges rendered on one card.
pub const MAX_FEATURE_BADGES: usize = 2;

/// Leading slice of products that actually renders.
#[must_use]
pub fn visible_products(products: &[Product]) -> &[Product] {
    &products[..products.len().min(MAX_LIST_PRODUCTS)]
}

/// Leading slice of feature badges that actually renders.
#[must_use]
pub fn visible_features(features: &[String]) -> &[String] {
    &features[..features.len().min(MAX_FEATURE_BADGES)]
}

/// Card for a single recommended product.
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let features = visible_features(&product.features).to_vec();

    view! {
        <div class="shopchat-product">
            <h4 class="shopchat-product__title">{product.title.clone()}</h4>
            {product
                .description
                .clone()
                .map(|description| {
                    view! { <p class="shopchat-product__description">{description}</p> }
                })}
            <span class="shopchat-product__price">{format_price(product.price)}</span>
            {(!features.is_empty())
                .then(|| {
                    view! {
                        <div class="shopchat-product__features">
                            {features
                                .into_iter()
                                .map(|feature| {
                                    view! { <span class="shopchat-product__feature">{feature}</span> }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                })}
        </div>
    }
}

/// Vertical list of product cards, capped at [`MAX_LIST_PRODUCTS`].
#[component]
pub fn ProductList(products: Vec<Product>) -> impl IntoView {
    view! {
        <div class="shopchat-product-list">
            {visible_products(&products)
                .iter()
                .cloned()
                .map(|product| view! { <ProductCard product/> })
                .collect::<Vec<_>>()}
        </div>
    }
}

use super::*;

fn product(id: &str) -> Product {
    Product {
        id: id.to_owned(),
        title: format!("Product {id}"),
        price: 10.0,
        description: None,
        features: Vec::new(),
    }
}

#[test]
fn visible_products_caps_at_three_in_order() {
    let products = ["a", "b", "c", "d", "e"].map(product).to_vec();
    let visible = visible_products(&products);
    assert_eq!(visible.len(), MAX_LIST_PRODUCTS);
    assert_eq!(visible[0].id, "a");
    assert_eq!(visible[2].id, "c");
}

#[test]
fn visible_products_keeps_short_lists_intact() {
    let products = ["a", "b"].map(product).to_vec();
    assert_eq!(visible_products(&products).len(), 2);
    assert!(visible_products(&[]).is_empty());
}

#[test]
fn visible_features_caps_at_two() {
    let features = ["memory foam", "washable", "hypoallergenic"]
        .map(str::to_owned)
        .to_vec();
    let visible = visible_features(&features);
    assert_eq!(visible.len(), MAX_FEATURE_BADGES);
    assert_eq!(visible[0], "memory foam");
}

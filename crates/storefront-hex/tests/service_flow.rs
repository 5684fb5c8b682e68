use std::sync::Arc;

use storefront_hex::application::shop_service::ShopService;
use storefront_hex::errors::AppError;
use storefront_repo::InMemoryCatalog;
use storefront_types::domain::customer::Customer;
use storefront_types::domain::error::ShopError;
use storefront_types::domain::order::{Order, OrderStatus};
use storefront_types::domain::product::Product;

fn product(id: i64, name: &str, price: f64, stock: i64) -> Product {
    Product::new(id, name, price, "", stock).unwrap()
}

// Browse, fill the cart, check out, confirm.
#[test]
fn checkout_flow_produces_confirmed_summary() {
    let catalog = InMemoryCatalog::new(vec![
        product(1, "Laptop", 1299.99, 10),
        product(2, "Phone", 999.99, 20),
    ])
    .unwrap();
    let mut svc = ShopService::new(catalog, Customer::new(1, "Alice").unwrap());

    assert_eq!(svc.browse_products().len(), 2);
    svc.add_to_cart(1).unwrap();
    svc.add_to_cart(2).unwrap();
    assert_eq!(format!("{:.2}", svc.view_cart().total), "2299.98");

    let order = svc.place_order().unwrap();
    assert_eq!(order.status(), OrderStatus::Confirmed);
    let summary = order.generate_order_summary();
    assert!(summary.contains("Order ID: 1"));
    assert!(summary.contains("Customer: Alice (ID: 1)"));
    assert!(summary.contains("Total Amount: $2299.98"));
    assert!(summary.contains("Status: CONFIRMED"));
    assert!(svc.view_cart().is_empty());
}

// The same scenario driven directly against the domain types.
#[test]
fn construct_then_confirm_order() {
    let mut alice = Customer::new(1, "Alice").unwrap();
    alice
        .add_to_cart(Arc::new(product(1, "Laptop", 1299.99, 10)))
        .unwrap();
    alice
        .add_to_cart(Arc::new(product(2, "Phone", 999.99, 20)))
        .unwrap();
    assert!((alice.calculate_cart_total() - 2299.98).abs() < 1e-9);

    let mut order = Order::new(1, &alice, alice.shopping_cart()).unwrap();
    assert_eq!(order.status(), OrderStatus::Cancelled);
    order.update_status_str("CONFIRMED").unwrap();

    alice.clear_cart();
    assert!((order.total_amount() - 2299.98).abs() < 1e-9);

    let summary = order.generate_order_summary();
    assert!(summary.contains("Order ID: 1"));
    assert!(summary.contains("Total Amount: $2299.98"));
    assert!(summary.contains("Status: CONFIRMED"));
}

#[test]
fn out_of_stock_product_leaves_cart_unchanged() {
    let catalog = InMemoryCatalog::new(vec![
        product(1, "Laptop", 1299.99, 10),
        product(2, "Retired", 10.0, 0),
    ])
    .unwrap();
    let mut svc = ShopService::new(catalog, Customer::new(1, "Alice").unwrap());
    svc.add_to_cart(1).unwrap();

    let res = svc.add_to_cart(2);
    assert!(matches!(res, Err(AppError::Shop(ShopError::OutOfStock(ref n))) if n == "Retired"));
    assert_eq!(svc.customer().cart_size(), 1);
}

#[test]
fn full_cart_rejects_eleventh_product() {
    let products = (1..=11)
        .map(|id| product(id, &format!("Item {id}"), 1.5, 3))
        .collect();
    let catalog = InMemoryCatalog::new(products).unwrap();
    let mut svc = ShopService::new(catalog, Customer::new(1, "Alice").unwrap());

    for id in 1..=10 {
        svc.add_to_cart(id).unwrap();
    }
    let res = svc.add_to_cart(11);
    assert!(matches!(
        res,
        Err(AppError::Shop(ShopError::CartFull { max: 10 }))
    ));
    assert_eq!(svc.customer().cart_size(), 10);
    assert_eq!(svc.view_cart().total, 15.0);
}

use storefront_hex::config::Config;
use storefront_hex::inbound::console::{ConsoleMenu, MenuConfig};
use storefront_repo::build_catalog;
use storefront_types::domain::order::OrderStatus;

#[test]
fn config_values_reach_the_session() {
    let config = Config::from_lookup(|key: &str| match key {
        "SHOP_CUSTOMER_ID" => Some("7".into()),
        "SHOP_FIRST_ORDER_ID" => Some("100".into()),
        _ => None,
    })
    .expect("config");
    let catalog = build_catalog().expect("build catalog");

    let mut out = Vec::new();
    let svc = ConsoleMenu::new(
        catalog,
        MenuConfig::from(&config),
        "Dana\n2\n3\n4\n5\n".as_bytes(),
        &mut out,
    )
    .run()
    .expect("session");
    assert_eq!(svc.customer().customer_id(), 7);

    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("Customer[ID=7, Name='Dana', Cart Items=0]"));
    assert!(out.contains("Order ID: 100"));
    assert!(out.contains("Customer: Dana (ID: 7)"));
    assert!(out.contains(&format!("Status: {}", OrderStatus::Confirmed)));
}

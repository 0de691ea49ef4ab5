//! Read-through cache and write-through mutation semantics.

mod common;

use std::sync::Arc;
use std::sync::atomic::Ordering;

use common::MockApi;
use lading_engine::metrics;
use lading_engine::store::DataStore;
use shared::models::ShipmentUpdate;

#[tokio::test]
async fn refresh_survives_missing_customer_endpoint() {
    let api = Arc::new(MockApi::new());
    api.shipments
        .lock()
        .unwrap()
        .push(common::shipment("s-1", "INV-1", &["C1"]));
    api.expenses
        .lock()
        .unwrap()
        .push(common::expense("e-1", "INV-1", 150_000.0));
    api.fail_customer_fetch.store(true, Ordering::SeqCst);

    let store = DataStore::new(api);
    store.refresh_all().await.unwrap();

    let snapshot = store.snapshot().await.unwrap();
    assert_eq!(snapshot.shipments.len(), 1);
    assert_eq!(snapshot.expenses.len(), 1);
    // The soft dependency degraded to an empty list.
    assert!(snapshot.customer_records.is_empty());

    // The rest of the view still renders from the snapshot.
    assert_eq!(
        metrics::net_value(&snapshot.shipments[0], &snapshot.expenses),
        300_000_000.0 + 150_000.0
    );
}

#[tokio::test]
async fn reads_are_served_from_cache() {
    let api = Arc::new(MockApi::new());
    api.shipments
        .lock()
        .unwrap()
        .push(common::shipment("s-1", "INV-1", &["C1"]));

    let store = DataStore::new(api.clone());
    store.shipments().await.unwrap();
    store.shipments().await.unwrap();
    assert_eq!(api.shipment_fetches.load(Ordering::SeqCst), 1);

    store.invalidate_all().await;
    store.shipments().await.unwrap();
    assert_eq!(api.shipment_fetches.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn failed_delete_leaves_cache_untouched() {
    let api = Arc::new(MockApi::new());
    api.shipments
        .lock()
        .unwrap()
        .push(common::shipment("s-1", "INV-1", &["C1"]));

    let store = DataStore::new(api.clone());
    store.refresh_all().await.unwrap();

    api.fail_deletes.store(true, Ordering::SeqCst);
    assert!(store.delete_shipment("s-1").await.is_err());
    assert_eq!(store.shipments().await.unwrap().len(), 1);

    api.fail_deletes.store(false, Ordering::SeqCst);
    store.delete_shipment("s-1").await.unwrap();
    assert!(store.shipments().await.unwrap().is_empty());
}

#[tokio::test]
async fn update_patches_cached_shipment() {
    let api = Arc::new(MockApi::new());
    api.shipments
        .lock()
        .unwrap()
        .push(common::shipment("s-1", "INV-1", &["C1"]));

    let store = DataStore::new(api);
    store.refresh_all().await.unwrap();

    let update = ShipmentUpdate {
        invoice_number: "INV-1".to_string(),
        bl_number: "BL-INV-1".to_string(),
        goods_name: "Rice 15%".to_string(),
        shipping_line: "ONE".to_string(),
        arrival_port: "Cat Lai".to_string(),
        net_weight: 24_000.0,
        total_value_vnd: 280_000_000.0,
        eta: None,
    };
    store.update_shipment("s-1", &update).await.unwrap();

    let cached = store.shipments().await.unwrap();
    assert_eq!(cached[0].goods_name, "Rice 15%");
    assert_eq!(cached[0].total_value_vnd, 280_000_000.0);
}

#[tokio::test]
async fn pagination_appends_until_short_page() {
    let api = Arc::new(MockApi::new());
    {
        let mut shipments = api.shipments.lock().unwrap();
        for i in 0..5 {
            shipments.push(common::shipment(
                &format!("s-{}", i),
                &format!("INV-{}", i),
                &["C1"],
            ));
        }
    }

    let store = DataStore::new(api).with_page_limit(2);

    assert!(store.load_shipments_page(1).await.unwrap());
    assert_eq!(store.shipments().await.unwrap().len(), 2);

    assert!(store.load_shipments_page(2).await.unwrap());
    assert_eq!(store.shipments().await.unwrap().len(), 4);

    // The short page signals the end of the collection.
    assert!(!store.load_shipments_page(3).await.unwrap());
    assert_eq!(store.shipments().await.unwrap().len(), 5);
}

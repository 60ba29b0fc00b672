mod common;

use brandhub_error::brand::BrandError;
use brandhub_models::domain::prelude::{Brand, Contact};
use brandhub_utils::media::encode_data_uri;
use common::*;
use std::sync::Arc;

#[tokio::test]
async fn test_cafe_a_scenario() {
    let h = harness().await;
    let alice = register(&h.auth, ALICE).await;
    register(&h.auth, BOB).await;

    let mut brand = cafe_a();
    let id = h.brands.create(&mut brand, ALICE).await.unwrap();
    assert_eq!(brand.id, Some(id));
    assert_eq!(brand.added_by, Some(alice));

    let fetched = h.brands.get_by_id(id).await.unwrap();
    assert_eq!(fetched.name, "Cafe A");
    assert_eq!(fetched.products.len(), 1);
    assert_eq!(fetched.products[0].name, "Latte");
    assert_eq!(fetched.products[0].price.low_end, 120);
    assert_eq!(fetched.products[0].price.high_end, 150);
    assert_eq!(fetched.products[0].price.currency, "USD");
    assert_eq!(fetched.contacts, vec![Contact::new("phone", "+1-555")]);

    assert_eq!(h.brands.get_id_by_name("Cafe A").await.unwrap(), Some(id));
    assert_eq!(h.brands.get_id_by_name("Cafe B").await.unwrap(), None);

    let before = row_counts(&h.db).await;
    let mut hijack = fetched.clone();
    hijack.name = "Bob's Cafe".into();
    hijack.contacts.clear();
    let err = h.brands.update(id, &hijack, BOB).await.unwrap_err();
    assert!(matches!(err, BrandError::PermissionDenied { brand_id, .. } if brand_id == id));

    assert_eq!(row_counts(&h.db).await, before);
    assert_eq!(h.brands.get_by_id(id).await.unwrap(), fetched);
}

#[tokio::test]
async fn test_full_aggregate_round_trips() {
    let h = harness().await;
    register(&h.auth, ALICE).await;

    let mut brand = full_brand("Bakery");
    let id = h.brands.create(&mut brand, ALICE).await.unwrap();

    let fetched = h.brands.get_by_id(id).await.unwrap();
    assert_eq!(fetched, brand);
    assert_eq!(
        fetched.products[0].images,
        vec![encode_data_uri(PNG), encode_data_uri(JPEG)]
    );
    assert!(fetched.products[1].images[0].starts_with("data:image/jpeg;base64,"));

    assert_eq!(h.brands.get_by_name("Bakery").await.unwrap(), fetched);
    assert_eq!(
        row_counts(&h.db).await,
        RowCounts {
            brands: 1,
            contacts: 2,
            brand_contacts: 2,
            owners: 2,
            brand_owners: 2,
            statistics: 1,
            prices: 2,
            products: 2,
            media: 3,
        }
    );
}

#[tokio::test]
async fn test_empty_collections_round_trip() {
    let h = harness().await;
    register(&h.auth, ALICE).await;

    let mut brand = Brand {
        name: "Bare".into(),
        ..Default::default()
    };
    let id = h.brands.create(&mut brand, ALICE).await.unwrap();

    let fetched = h.brands.get_by_id(id).await.unwrap();
    assert_eq!(fetched, brand);
    assert!(fetched.owners.is_empty());
    assert!(fetched.contacts.is_empty());
    assert!(fetched.statistics.is_empty());
    assert!(fetched.products.is_empty());
}

#[tokio::test]
async fn test_failed_media_save_leaves_no_rows() {
    let h = harness_with_media(Arc::new(FailingMediaStore::new(1))).await;
    register(&h.auth, ALICE).await;

    let mut brand = full_brand("Bakery");
    let err = h.brands.create(&mut brand, ALICE).await.unwrap_err();
    assert!(matches!(err, BrandError::Media(_)));
    assert!(brand.id.is_none());
    assert_eq!(row_counts(&h.db).await, RowCounts::default());
    assert_eq!(h.brands.get_id_by_name("Bakery").await.unwrap(), None);
    assert!(matches!(
        h.brands.get_by_id(1).await,
        Err(BrandError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_failed_media_save_rolls_back_update() {
    // three saves succeed, enough for the create and nothing more
    let h = harness_with_media(Arc::new(FailingMediaStore::new(3))).await;
    register(&h.auth, ALICE).await;

    let mut brand = full_brand("Bakery");
    let id = h.brands.create(&mut brand, ALICE).await.unwrap();
    let before = row_counts(&h.db).await;
    assert_eq!(before.media, 3);

    let mut replacement = full_brand("Bakery Renamed");
    replacement.owners.pop();
    replacement.contacts.pop();
    let err = h.brands.update(id, &replacement, ALICE).await.unwrap_err();
    assert!(matches!(err, BrandError::Media(_)));

    assert_eq!(row_counts(&h.db).await, before);
    assert_eq!(h.brands.get_id_by_name("Bakery").await.unwrap(), Some(id));
    assert_eq!(h.brands.get_id_by_name("Bakery Renamed").await.unwrap(), None);
}

#[tokio::test]
async fn test_malformed_image_is_rejected_before_writing() {
    let h = harness().await;
    register(&h.auth, ALICE).await;

    let mut brand = cafe_a();
    brand.products[0].images.push("%%% not base64 %%%".into());
    let err = h.brands.create(&mut brand, ALICE).await.unwrap_err();
    assert!(matches!(err, BrandError::MalformedInput(_)));
    assert_eq!(row_counts(&h.db).await, RowCounts::default());
}

#[tokio::test]
async fn test_invalid_fields_are_malformed_input() {
    let h = harness().await;
    register(&h.auth, ALICE).await;

    let mut brand = cafe_a();
    brand.products[0].price.low_end = 500;
    assert!(matches!(
        h.brands.create(&mut brand, ALICE).await,
        Err(BrandError::MalformedInput(_))
    ));
}

#[tokio::test]
async fn test_unknown_creator_is_not_found() {
    let h = harness().await;
    let mut brand = cafe_a();
    assert!(matches!(
        h.brands.create(&mut brand, "ghost@example.com").await,
        Err(BrandError::NotFound(_))
    ));
    assert_eq!(row_counts(&h.db).await, RowCounts::default());
}

#[tokio::test]
async fn test_update_replaces_children_without_orphans() {
    let h = harness().await;
    let alice = register(&h.auth, ALICE).await;

    let mut brand = full_brand("Bakery");
    let id = h.brands.create(&mut brand, ALICE).await.unwrap();

    let mut replacement = cafe_a();
    replacement.name = "Bakery & Cafe".into();
    replacement.is_open = false;
    h.brands.update(id, &replacement, ALICE).await.unwrap();

    let fetched = h.brands.get_by_id(id).await.unwrap();
    assert_eq!(fetched.id, Some(id));
    assert_eq!(fetched.added_by, Some(alice));
    assert_eq!(fetched.name, "Bakery & Cafe");
    assert!(!fetched.is_open);
    assert!(fetched.owners.is_empty());
    assert!(fetched.statistics.is_empty());
    assert_eq!(fetched.contacts, replacement.contacts);
    assert_eq!(fetched.products, replacement.products);

    assert_eq!(
        row_counts(&h.db).await,
        RowCounts {
            brands: 1,
            contacts: 1,
            brand_contacts: 1,
            owners: 0,
            brand_owners: 0,
            statistics: 0,
            prices: 1,
            products: 1,
            media: 0,
        }
    );
    assert_eq!(h.brands.get_id_by_name("Bakery").await.unwrap(), None);
    assert_eq!(
        h.brands.get_id_by_name("Bakery & Cafe").await.unwrap(),
        Some(id)
    );
}

#[tokio::test]
async fn test_update_leaves_other_brands_alone() {
    let h = harness().await;
    register(&h.auth, ALICE).await;

    let mut first = full_brand("First");
    let first_id = h.brands.create(&mut first, ALICE).await.unwrap();
    let mut second = full_brand("Second");
    let second_id = h.brands.create(&mut second, ALICE).await.unwrap();

    let mut replacement = cafe_a();
    replacement.name = "First".into();
    h.brands.update(first_id, &replacement, ALICE).await.unwrap();

    assert_eq!(h.brands.get_by_id(second_id).await.unwrap(), second);
}

#[tokio::test]
async fn test_update_missing_brand_is_not_found() {
    let h = harness().await;
    register(&h.auth, ALICE).await;
    assert!(matches!(
        h.brands.update(404, &cafe_a(), ALICE).await,
        Err(BrandError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_duplicate_name_is_rejected_atomically() {
    let h = harness().await;
    register(&h.auth, ALICE).await;

    let mut first = cafe_a();
    h.brands.create(&mut first, ALICE).await.unwrap();
    let before = row_counts(&h.db).await;

    let mut second = full_brand("Cafe A");
    let err = h.brands.create(&mut second, ALICE).await.unwrap_err();
    assert!(matches!(err, BrandError::Storage(_)));
    assert!(second.id.is_none());
    assert_eq!(row_counts(&h.db).await, before);
}

#[tokio::test]
async fn test_missing_brand_is_not_found() {
    let h = harness().await;
    assert!(matches!(
        h.brands.get_by_id(1).await,
        Err(BrandError::NotFound(_))
    ));
    assert!(matches!(
        h.brands.get_by_name("nothing").await,
        Err(BrandError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_listings() {
    let h = harness().await;
    register(&h.auth, ALICE).await;
    register(&h.auth, BOB).await;

    let mut open = cafe_a();
    let open_id = h.brands.create(&mut open, ALICE).await.unwrap();
    let mut closed = full_brand("Bakery");
    h.brands.create(&mut closed, ALICE).await.unwrap();
    let mut bobs = Brand {
        name: "Bob's".into(),
        is_open: true,
        ..Default::default()
    };
    h.brands.create(&mut bobs, BOB).await.unwrap();

    let names: Vec<String> = h
        .brands
        .list_open()
        .await
        .unwrap()
        .into_iter()
        .map(|b| b.name)
        .collect();
    assert_eq!(names, vec!["Cafe A".to_string(), "Bob's".to_string()]);

    let mine = h.brands.list_by_creator(ALICE).await.unwrap();
    assert_eq!(mine.len(), 2);
    assert_eq!(mine[0].id, Some(open_id));
    assert_eq!(mine[1], closed);

    assert!(matches!(
        h.brands.list_by_creator("ghost@example.com").await,
        Err(BrandError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_delete_is_creator_only_and_complete() {
    let h = harness().await;
    register(&h.auth, ALICE).await;
    register(&h.auth, BOB).await;

    let mut brand = full_brand("Bakery");
    let id = h.brands.create(&mut brand, ALICE).await.unwrap();
    let before = row_counts(&h.db).await;

    assert!(matches!(
        h.brands.delete(id, BOB).await,
        Err(BrandError::PermissionDenied { .. })
    ));
    assert_eq!(row_counts(&h.db).await, before);

    h.brands.delete(id, ALICE).await.unwrap();
    assert_eq!(row_counts(&h.db).await, RowCounts::default());
    assert!(matches!(
        h.brands.get_by_id(id).await,
        Err(BrandError::NotFound(_))
    ));
}

mod common;

use brandhub_error::storage::StorageError;
use brandhub_models::{
    entities::prelude::{
        BrandContact, ContactActiveModel, MediaActiveModel, Price, PriceModel, Product,
        ProductActiveModel, Media,
    },
    enums::contact::ContactKind,
};
use brandhub_repository::{
    builder::{build_update, exec_update},
    BrandRepository, ContactRepository, MediaRepository, PriceRepository, ProductRepository,
    UserRepository,
};
use common::{price, seed_brand, seed_user, setup_db};
use sea_orm::{EntityTrait, PaginatorTrait, Set};

fn contact(kind: ContactKind, link: &str) -> ContactActiveModel {
    ContactActiveModel {
        kind: Set(kind),
        link: Set(link.to_string()),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_contacts_are_linked_in_input_order() {
    let db = setup_db().await;
    let user = seed_user(&db, "a@x.com").await;
    let brand = seed_brand(&db, "Cafe A", user).await;

    let ids = ContactRepository::create_for_brand(
        brand,
        vec![
            contact(ContactKind::Phone, "+1-555"),
            contact(ContactKind::Email, "cafe@x.com"),
            contact(ContactKind::Telegram, "@cafe"),
        ],
        &db,
    )
    .await
    .unwrap();
    assert_eq!(ids.len(), 3);
    assert!(ids.windows(2).all(|w| w[0] < w[1]));

    let stored = ContactRepository::find_by_brand(brand, &db).await.unwrap();
    let links: Vec<&str> = stored.iter().map(|c| c.link.as_str()).collect();
    assert_eq!(links, vec!["+1-555", "cafe@x.com", "@cafe"]);
    assert_eq!(stored[0].kind, ContactKind::Phone);
    assert_eq!(BrandContact::find().count(&db).await.unwrap(), 3);
}

#[tokio::test]
async fn test_empty_child_batches_are_no_ops() {
    let db = setup_db().await;
    let user = seed_user(&db, "a@x.com").await;
    let brand = seed_brand(&db, "Cafe A", user).await;

    let ids = ContactRepository::create_for_brand(brand, Vec::new(), &db)
        .await
        .unwrap();
    assert!(ids.is_empty());
    assert!(PriceRepository::create_many(Vec::new(), &db)
        .await
        .unwrap()
        .is_empty());
    assert_eq!(BrandContact::find().count(&db).await.unwrap(), 0);
}

#[tokio::test]
async fn test_delete_by_brand_leaves_other_brands_alone() {
    let db = setup_db().await;
    let user = seed_user(&db, "a@x.com").await;
    let first = seed_brand(&db, "Cafe A", user).await;
    let second = seed_brand(&db, "Cafe B", user).await;

    ContactRepository::create_for_brand(first, vec![contact(ContactKind::Phone, "1")], &db)
        .await
        .unwrap();
    ContactRepository::create_for_brand(second, vec![contact(ContactKind::Mail, "2")], &db)
        .await
        .unwrap();

    assert_eq!(ContactRepository::delete_by_brand(first, &db).await.unwrap(), 1);
    assert!(ContactRepository::find_by_brand(first, &db)
        .await
        .unwrap()
        .is_empty());
    assert_eq!(ContactRepository::find_by_brand(second, &db).await.unwrap().len(), 1);
    // the join row went with its contact
    assert_eq!(BrandContact::find().count(&db).await.unwrap(), 1);
}

#[tokio::test]
async fn test_batched_update_rewrites_each_row() {
    let db = setup_db().await;
    let user = seed_user(&db, "a@x.com").await;
    let brand = seed_brand(&db, "Cafe A", user).await;

    let ids = PriceRepository::create_many(
        vec![price(brand, 1, 2), price(brand, 3, 4), price(brand, 5, 6)],
        &db,
    )
    .await
    .unwrap();

    let stmt = build_update(
        vec![price(brand, 10, 20), price(brand, 30, 40), price(brand, 50, 60)],
        &ids,
    )
    .unwrap()
    .unwrap();
    assert_eq!(exec_update(&stmt, &db).await.unwrap(), 3);

    let stored: Vec<PriceModel> = Price::find().all(&db).await.unwrap();
    let ranges: Vec<(i32, i32)> = stored.iter().map(|p| (p.low_end, p.high_end)).collect();
    assert_eq!(ranges, vec![(10, 20), (30, 40), (50, 60)]);
}

#[tokio::test]
async fn test_removing_prices_cascades_to_products_and_media() {
    let db = setup_db().await;
    let user = seed_user(&db, "a@x.com").await;
    let brand = seed_brand(&db, "Cafe A", user).await;

    let price_ids = PriceRepository::create_many(vec![price(brand, 120, 150)], &db)
        .await
        .unwrap();
    let product_ids = ProductRepository::create_many(
        vec![ProductActiveModel {
            brand_id: Set(brand),
            price_id: Set(price_ids[0]),
            name: Set("Latte".to_string()),
            description: Set(String::new()),
            ..Default::default()
        }],
        &db,
    )
    .await
    .unwrap();
    MediaRepository::create_many(
        vec![MediaActiveModel {
            product_id: Set(product_ids[0]),
            path: Set("abc".to_string()),
            ..Default::default()
        }],
        &db,
    )
    .await
    .unwrap();

    let joined = ProductRepository::find_by_brand_with_price(brand, &db)
        .await
        .unwrap();
    assert_eq!(joined.len(), 1);
    assert_eq!(joined[0].1.as_ref().map(|p| p.low_end), Some(120));

    PriceRepository::delete_by_brand(brand, &db).await.unwrap();
    assert_eq!(Product::find().count(&db).await.unwrap(), 0);
    assert_eq!(Media::find().count(&db).await.unwrap(), 0);
}

#[tokio::test]
async fn test_brand_lookups() {
    let db = setup_db().await;
    let user = seed_user(&db, "a@x.com").await;
    let brand = seed_brand(&db, "Cafe A", user).await;

    assert_eq!(
        BrandRepository::find_id_by_name("Cafe A", &db).await.unwrap(),
        Some(brand)
    );
    assert_eq!(
        BrandRepository::find_id_by_name("Nope", &db).await.unwrap(),
        None
    );
    assert_eq!(
        BrandRepository::find_added_by(brand, &db).await.unwrap(),
        Some(Some(user))
    );
    assert_eq!(BrandRepository::find_added_by(999, &db).await.unwrap(), None);
    assert_eq!(
        BrandRepository::find_ids_by_creator(user, &db).await.unwrap(),
        vec![brand]
    );
    assert_eq!(BrandRepository::find_open(&db).await.unwrap().len(), 1);
    assert_eq!(
        UserRepository::find_id_by_email("a@x.com", &db).await.unwrap(),
        Some(user)
    );
}

#[tokio::test]
async fn test_duplicate_brand_name_is_a_storage_fault() {
    let db = setup_db().await;
    let user = seed_user(&db, "a@x.com").await;
    seed_brand(&db, "Cafe A", user).await;

    let err = BrandRepository::create(
        brandhub_models::entities::prelude::BrandActiveModel {
            name: Set("Cafe A".to_string()),
            description: Set(String::new()),
            location: Set(String::new()),
            is_open: Set(false),
            added_by: Set(Some(user)),
            created_at: Set(Some(chrono::Utc::now())),
            ..Default::default()
        },
        &db,
    )
    .await
    .unwrap_err();
    assert!(matches!(err, StorageError::DBError(_)));
}

#[tokio::test]
async fn test_deleting_a_user_keeps_their_brands() {
    let db = setup_db().await;
    let user = seed_user(&db, "a@x.com").await;
    let brand = seed_brand(&db, "Cafe A", user).await;

    UserRepository::delete(user, &db).await.unwrap();
    assert_eq!(
        BrandRepository::find_added_by(brand, &db).await.unwrap(),
        Some(None)
    );
}

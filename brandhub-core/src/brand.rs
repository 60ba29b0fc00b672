use brandhub_error::{brand::BrandError, storage::StorageError, BrandResult};
use brandhub_models::{
    domain::prelude::{Brand, Contact, Owner, Price, Product, Statistic},
    entities::prelude::{BrandModel, MediaActiveModel},
    CredentialVerifier, MediaStore,
};
use brandhub_repository::{
    BrandRepository, ContactRepository, MediaRepository, OwnerRepository, PriceRepository,
    ProductRepository, StatisticRepository,
};
use brandhub_utils::media::{decode_inline_image, encode_data_uri};
use sea_orm::{
    ActiveValue::Set, ConnectionTrait, DatabaseConnection, DatabaseTransaction, TransactionTrait,
};
use std::{collections::HashMap, sync::Arc};
use tracing::{debug, info, instrument, warn};
use validator::Validate;

/// Decoded image bytes, one list per product in input order.
type ProductImages = Vec<Vec<Vec<u8>>>;

/// Persists and reads brand aggregates.
///
/// Writes run inside one transaction: either every row of the aggregate lands or none does.
/// Blobs already handed to the media store are not reclaimed on rollback.
#[derive(Clone)]
pub struct BrandService {
    db: DatabaseConnection,
    media: Arc<dyn MediaStore>,
    credentials: Arc<dyn CredentialVerifier>,
}

impl BrandService {
    pub fn new(
        db: DatabaseConnection,
        media: Arc<dyn MediaStore>,
        credentials: Arc<dyn CredentialVerifier>,
    ) -> Self {
        Self {
            db,
            media,
            credentials,
        }
    }

    /// Write a new aggregate owned by `email` and stamp its id and creator on `brand`.
    #[instrument(name = "create-brand", skip(self, brand), fields(name = %brand.name))]
    pub async fn create(&self, brand: &mut Brand, email: &str) -> BrandResult<i32> {
        brand.validate()?;
        let images = decode_images(&brand.products)?;
        let user_id = self.resolve_user(email).await?;

        let txn = self.db.begin().await?;
        let written = async {
            let id = BrandRepository::create(brand.to_active_model(user_id), &txn).await?;
            self.create_children(id, &*brand, images, &txn).await?;
            Ok::<_, BrandError>(id)
        }
        .await;

        let id = match written {
            Ok(id) => id,
            Err(e) => {
                rollback(txn, &e).await;
                return Err(e);
            }
        };
        txn.commit().await?;

        brand.id = Some(id);
        brand.added_by = Some(user_id);
        info!(brand_id = id, user_id, "Brand created");
        Ok(id)
    }

    /// Replace the aggregate `id` with `brand`. Only its creator may do so.
    ///
    /// Core fields are rewritten in place, so `id`, creator and creation time survive.
    /// Every child collection is dropped and written again from `brand`.
    #[instrument(name = "update-brand", skip(self, brand))]
    pub async fn update(&self, id: i32, brand: &Brand, email: &str) -> BrandResult<()> {
        brand.validate()?;
        let images = decode_images(&brand.products)?;
        self.authorize(id, email).await?;

        let txn = self.db.begin().await?;
        let written = async {
            BrandRepository::update_core(id, brand.to_update_model(id), &txn).await?;
            self.delete_children(id, &txn).await?;
            self.create_children(id, brand, images, &txn).await
        }
        .await;

        if let Err(e) = written {
            rollback(txn, &e).await;
            return Err(e);
        }
        txn.commit().await?;
        info!(brand_id = id, "Brand updated");
        Ok(())
    }

    /// Remove the aggregate `id` and all of its children. Only its creator may do so.
    #[instrument(name = "delete-brand", skip(self))]
    pub async fn delete(&self, id: i32, email: &str) -> BrandResult<()> {
        self.authorize(id, email).await?;

        let txn = self.db.begin().await?;
        let removed = async {
            self.delete_children(id, &txn).await?;
            BrandRepository::delete(id, &txn).await?;
            Ok::<_, BrandError>(())
        }
        .await;

        if let Err(e) = removed {
            rollback(txn, &e).await;
            return Err(e);
        }
        txn.commit().await?;
        info!(brand_id = id, "Brand deleted");
        Ok(())
    }

    /// The full aggregate with every image rendered as a data URI.
    #[instrument(name = "get-brand", skip(self))]
    pub async fn get_by_id(&self, id: i32) -> BrandResult<Brand> {
        let model = BrandRepository::find_by_id(id, &self.db)
            .await?
            .ok_or_else(|| BrandError::NotFound(format!("brand {id}")))?;
        self.hydrate(model).await
    }

    #[instrument(name = "get-brand-by-name", skip(self))]
    pub async fn get_by_name(&self, name: &str) -> BrandResult<Brand> {
        let model = BrandRepository::find_by_name(name, &self.db)
            .await?
            .ok_or_else(|| BrandError::NotFound(format!("brand {name:?}")))?;
        self.hydrate(model).await
    }

    /// `None` when no brand carries `name`.
    pub async fn get_id_by_name(&self, name: &str) -> BrandResult<Option<i32>> {
        Ok(BrandRepository::find_id_by_name(name, &self.db).await?)
    }

    /// Every brand flagged open, fully hydrated.
    #[instrument(name = "list-open-brands", skip(self))]
    pub async fn list_open(&self) -> BrandResult<Vec<Brand>> {
        let models = BrandRepository::find_open(&self.db).await?;
        let mut brands = Vec::with_capacity(models.len());
        for model in models {
            brands.push(self.hydrate(model).await?);
        }
        Ok(brands)
    }

    /// Every brand created by `email`, fully hydrated.
    #[instrument(name = "list-brands-by-creator", skip(self))]
    pub async fn list_by_creator(&self, email: &str) -> BrandResult<Vec<Brand>> {
        let user_id = self.resolve_user(email).await?;
        let ids = BrandRepository::find_ids_by_creator(user_id, &self.db).await?;
        let mut brands = Vec::with_capacity(ids.len());
        for id in ids {
            brands.push(self.get_by_id(id).await?);
        }
        Ok(brands)
    }

    async fn resolve_user(&self, email: &str) -> BrandResult<i32> {
        self.credentials
            .resolve_user_id(email)
            .await?
            .ok_or_else(|| BrandError::NotFound(format!("user {email}")))
    }

    /// Fails unless `email` created brand `id`. Runs before any write.
    async fn authorize(&self, id: i32, email: &str) -> BrandResult<i32> {
        let user_id = self.resolve_user(email).await?;
        let added_by = BrandRepository::find_added_by(id, &self.db)
            .await?
            .ok_or_else(|| BrandError::NotFound(format!("brand {id}")))?;
        if added_by != Some(user_id) {
            warn!(brand_id = id, user_id, "Rejected change by non-creator");
            return Err(BrandError::PermissionDenied {
                brand_id: id,
                requester: user_id,
            });
        }
        Ok(user_id)
    }

    /// Contacts, owners, statistics, then prices, products and their media.
    async fn create_children<C>(
        &self,
        brand_id: i32,
        brand: &Brand,
        images: ProductImages,
        db: &C,
    ) -> BrandResult<()>
    where
        C: ConnectionTrait,
    {
        let contacts = brand.contacts.iter().map(Contact::to_active_model).collect();
        ContactRepository::create_for_brand(brand_id, contacts, db).await?;

        let owners = brand.owners.iter().map(Owner::to_active_model).collect();
        OwnerRepository::create_for_brand(brand_id, owners, db).await?;

        let statistics = brand
            .statistics
            .iter()
            .map(|s| s.to_active_model(brand_id))
            .collect();
        StatisticRepository::create_many(statistics, db).await?;

        let prices = brand
            .products
            .iter()
            .map(|p| p.price.to_active_model(brand_id))
            .collect();
        let price_ids = PriceRepository::create_many(prices, db).await?;

        let products = brand
            .products
            .iter()
            .zip(&price_ids)
            .map(|(p, price_id)| p.to_active_model(brand_id, *price_id))
            .collect();
        let product_ids = ProductRepository::create_many(products, db).await?;

        let mut media = Vec::with_capacity(brand.image_count());
        for (product_id, payloads) in product_ids.iter().zip(images) {
            for bytes in payloads {
                let path = self.media.save(bytes).await?;
                media.push(MediaActiveModel {
                    product_id: Set(*product_id),
                    path: Set(path),
                    ..Default::default()
                });
            }
        }
        MediaRepository::create_many(media, db).await?;

        debug!(
            brand_id,
            contacts = brand.contacts.len(),
            owners = brand.owners.len(),
            statistics = brand.statistics.len(),
            products = product_ids.len(),
            "Children written"
        );
        Ok(())
    }

    /// Owners and contacts go explicitly; prices take products and media with them.
    async fn delete_children<C>(&self, brand_id: i32, db: &C) -> BrandResult<()>
    where
        C: ConnectionTrait,
    {
        let owners = OwnerRepository::delete_by_brand(brand_id, db).await?;
        let contacts = ContactRepository::delete_by_brand(brand_id, db).await?;
        let products = ProductRepository::delete_by_brand(brand_id, db).await?;
        let prices = PriceRepository::delete_by_brand(brand_id, db).await?;
        let statistics = StatisticRepository::delete_by_brand(brand_id, db).await?;
        debug!(
            brand_id,
            owners, contacts, products, prices, statistics, "Children deleted"
        );
        Ok(())
    }

    async fn hydrate(&self, model: BrandModel) -> BrandResult<Brand> {
        let id = model.id;
        let mut brand = Brand::from(model);

        brand.owners = OwnerRepository::find_by_brand(id, &self.db)
            .await?
            .into_iter()
            .map(Owner::from)
            .collect();
        brand.contacts = ContactRepository::find_by_brand(id, &self.db)
            .await?
            .into_iter()
            .map(Contact::from)
            .collect();
        brand.statistics = StatisticRepository::find_by_brand(id, &self.db)
            .await?
            .into_iter()
            .map(Statistic::from)
            .collect();

        let rows = ProductRepository::find_by_brand_with_price(id, &self.db).await?;
        let product_ids = rows.iter().map(|(p, _)| p.id).collect();
        let mut images: HashMap<i32, Vec<String>> = HashMap::new();
        for media in MediaRepository::find_by_products(product_ids, &self.db).await? {
            let bytes = self.media.load(&media.path).await?;
            images
                .entry(media.product_id)
                .or_default()
                .push(encode_data_uri(&bytes));
        }

        let mut products = Vec::with_capacity(rows.len());
        for (product, price) in rows {
            let price = price.ok_or_else(|| {
                BrandError::Storage(StorageError::EntityNotFound(format!(
                    "price of product {}",
                    product.id
                )))
            })?;
            let product_images = images.remove(&product.id).unwrap_or_default();
            products.push(Product::from_parts(
                product,
                Price::from(price),
                product_images,
            ));
        }
        brand.products = products;
        Ok(brand)
    }
}

fn decode_images(products: &[Product]) -> BrandResult<ProductImages> {
    products
        .iter()
        .map(|product| {
            product
                .images
                .iter()
                .enumerate()
                .map(|(i, payload)| {
                    decode_inline_image(payload).map_err(|e| {
                        BrandError::MalformedInput(format!(
                            "image {i} of product {:?}: {e}",
                            product.name
                        ))
                    })
                })
                .collect()
        })
        .collect()
}

async fn rollback(txn: DatabaseTransaction, cause: &BrandError) {
    warn!("Rolling back brand write: {cause}");
    if let Err(e) = txn.rollback().await {
        warn!("Rollback failed: {e}");
    }
}

use crate::builder::insert_returning;
use brandhub_error::StorageResult;
use brandhub_models::entities::prelude::{Price, PriceActiveModel, PriceColumn};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};

pub struct PriceRepository;

impl PriceRepository {
    /// Returns the generated ids, `ids[i]` belonging to `prices[i]`.
    pub async fn create_many<C>(prices: Vec<PriceActiveModel>, db: &C) -> StorageResult<Vec<i32>>
    where
        C: ConnectionTrait,
    {
        insert_returning(prices, db).await
    }

    /// Removing a price cascades to its product and that product's media.
    pub async fn delete_by_brand<C>(brand_id: i32, db: &C) -> StorageResult<u64>
    where
        C: ConnectionTrait,
    {
        Ok(Price::delete_many()
            .filter(PriceColumn::BrandId.eq(brand_id))
            .exec(db)
            .await?
            .rows_affected)
    }
}

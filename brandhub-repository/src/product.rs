use crate::builder::insert_returning;
use brandhub_error::StorageResult;
use brandhub_models::entities::prelude::{
    Price, PriceModel, Product, ProductActiveModel, ProductColumn, ProductModel,
};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};

pub struct ProductRepository;

impl ProductRepository {
    pub async fn create_many<C>(
        products: Vec<ProductActiveModel>,
        db: &C,
    ) -> StorageResult<Vec<i32>>
    where
        C: ConnectionTrait,
    {
        insert_returning(products, db).await
    }

    /// Products of a brand joined with their price, in insertion order.
    pub async fn find_by_brand_with_price<C>(
        brand_id: i32,
        db: &C,
    ) -> StorageResult<Vec<(ProductModel, Option<PriceModel>)>>
    where
        C: ConnectionTrait,
    {
        Ok(Product::find()
            .find_also_related(Price)
            .filter(ProductColumn::BrandId.eq(brand_id))
            .order_by_asc(ProductColumn::Id)
            .all(db)
            .await?)
    }

    pub async fn delete_by_brand<C>(brand_id: i32, db: &C) -> StorageResult<u64>
    where
        C: ConnectionTrait,
    {
        Ok(Product::delete_many()
            .filter(ProductColumn::BrandId.eq(brand_id))
            .exec(db)
            .await?
            .rows_affected)
    }
}

use crate::builder::insert_returning;
use brandhub_error::StorageResult;
use brandhub_models::entities::prelude::{Media, MediaActiveModel, MediaColumn, MediaModel};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};

pub struct MediaRepository;

impl MediaRepository {
    pub async fn create_many<C>(media: Vec<MediaActiveModel>, db: &C) -> StorageResult<Vec<i32>>
    where
        C: ConnectionTrait,
    {
        insert_returning(media, db).await
    }

    /// Media rows of the given products, ordered by product then insertion.
    pub async fn find_by_products<C>(product_ids: Vec<i32>, db: &C) -> StorageResult<Vec<MediaModel>>
    where
        C: ConnectionTrait,
    {
        if product_ids.is_empty() {
            return Ok(Vec::new());
        }
        Ok(Media::find()
            .filter(MediaColumn::ProductId.is_in(product_ids))
            .order_by_asc(MediaColumn::ProductId)
            .order_by_asc(MediaColumn::Id)
            .all(db)
            .await?)
    }
}

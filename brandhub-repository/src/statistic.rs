use crate::builder::insert_returning;
use brandhub_error::StorageResult;
use brandhub_models::entities::prelude::{
    Statistic, StatisticActiveModel, StatisticColumn, StatisticModel,
};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};

pub struct StatisticRepository;

impl StatisticRepository {
    pub async fn create_many<C>(
        statistics: Vec<StatisticActiveModel>,
        db: &C,
    ) -> StorageResult<Vec<i32>>
    where
        C: ConnectionTrait,
    {
        insert_returning(statistics, db).await
    }

    pub async fn find_by_brand<C>(brand_id: i32, db: &C) -> StorageResult<Vec<StatisticModel>>
    where
        C: ConnectionTrait,
    {
        Ok(Statistic::find()
            .filter(StatisticColumn::BrandId.eq(brand_id))
            .order_by_asc(StatisticColumn::Id)
            .all(db)
            .await?)
    }

    pub async fn delete_by_brand<C>(brand_id: i32, db: &C) -> StorageResult<u64>
    where
        C: ConnectionTrait,
    {
        Ok(Statistic::delete_many()
            .filter(StatisticColumn::BrandId.eq(brand_id))
            .exec(db)
            .await?
            .rows_affected)
    }
}

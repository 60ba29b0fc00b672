//! Repository for the brand core row.

use crate::builder::{build_update, exec_update};
use brandhub_error::{storage::StorageError, StorageResult};
use brandhub_models::entities::prelude::{Brand, BrandActiveModel, BrandColumn, BrandModel};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect};

pub struct BrandRepository;

impl BrandRepository {
    /// Insert the core row and return its generated id.
    pub async fn create<C>(brand: BrandActiveModel, db: &C) -> StorageResult<i32>
    where
        C: ConnectionTrait,
    {
        Ok(Brand::insert(brand).exec(db).await?.last_insert_id)
    }

    /// Rewrite the core columns set on `brand`; columns left `NotSet` keep their values.
    pub async fn update_core<C>(id: i32, brand: BrandActiveModel, db: &C) -> StorageResult<()>
    where
        C: ConnectionTrait,
    {
        let Some(stmt) = build_update(vec![brand], &[id])? else {
            return Ok(());
        };
        if exec_update(&stmt, db).await? == 0 {
            return Err(StorageError::EntityNotFound(format!("brand {id}")));
        }
        Ok(())
    }

    pub async fn delete<C>(id: i32, db: &C) -> StorageResult<u64>
    where
        C: ConnectionTrait,
    {
        Ok(Brand::delete_by_id(id).exec(db).await?.rows_affected)
    }

    pub async fn find_by_id<C>(id: i32, db: &C) -> StorageResult<Option<BrandModel>>
    where
        C: ConnectionTrait,
    {
        Ok(Brand::find_by_id(id).one(db).await?)
    }

    pub async fn find_by_name<C>(name: &str, db: &C) -> StorageResult<Option<BrandModel>>
    where
        C: ConnectionTrait,
    {
        Ok(Brand::find()
            .filter(BrandColumn::Name.eq(name))
            .one(db)
            .await?)
    }

    pub async fn find_id_by_name<C>(name: &str, db: &C) -> StorageResult<Option<i32>>
    where
        C: ConnectionTrait,
    {
        Ok(Brand::find()
            .select_only()
            .column(BrandColumn::Id)
            .filter(BrandColumn::Name.eq(name))
            .into_tuple::<i32>()
            .one(db)
            .await?)
    }

    /// Creator of brand `id`. The outer `None` means the brand does not exist.
    pub async fn find_added_by<C>(id: i32, db: &C) -> StorageResult<Option<Option<i32>>>
    where
        C: ConnectionTrait,
    {
        Ok(Brand::find_by_id(id)
            .select_only()
            .column(BrandColumn::AddedBy)
            .into_tuple::<Option<i32>>()
            .one(db)
            .await?)
    }

    pub async fn find_open<C>(db: &C) -> StorageResult<Vec<BrandModel>>
    where
        C: ConnectionTrait,
    {
        Ok(Brand::find()
            .filter(BrandColumn::IsOpen.eq(true))
            .order_by_asc(BrandColumn::Id)
            .all(db)
            .await?)
    }

    pub async fn find_ids_by_creator<C>(user_id: i32, db: &C) -> StorageResult<Vec<i32>>
    where
        C: ConnectionTrait,
    {
        Ok(Brand::find()
            .select_only()
            .column(BrandColumn::Id)
            .filter(BrandColumn::AddedBy.eq(user_id))
            .order_by_asc(BrandColumn::Id)
            .into_tuple::<i32>()
            .all(db)
            .await?)
    }
}

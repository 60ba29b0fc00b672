use crate::builder::{build_link, insert_returning};
use brandhub_error::StorageResult;
use brandhub_models::entities::{
    brand_owner::Relation as BrandOwnerRelation,
    prelude::{
        BrandOwner, BrandOwnerActiveModel, BrandOwnerColumn, Owner, OwnerActiveModel,
        OwnerColumn, OwnerModel,
    },
};
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait,
};

/// Owners carry no brand column; a brand reaches them through `brand_owners`.
pub struct OwnerRepository;

impl OwnerRepository {
    /// Insert `owners` and link each one to `brand_id`. Returns the owner ids in input order.
    pub async fn create_for_brand<C>(
        brand_id: i32,
        owners: Vec<OwnerActiveModel>,
        db: &C,
    ) -> StorageResult<Vec<i32>>
    where
        C: ConnectionTrait,
    {
        let ids = insert_returning(owners, db).await?;
        if let Some(link) = build_link::<BrandOwnerActiveModel>(brand_id, &ids) {
            link.exec(db).await?;
        }
        Ok(ids)
    }

    pub async fn find_by_brand<C>(brand_id: i32, db: &C) -> StorageResult<Vec<OwnerModel>>
    where
        C: ConnectionTrait,
    {
        Ok(Owner::find()
            .join(JoinType::InnerJoin, BrandOwnerRelation::Owner.def().rev())
            .filter(BrandOwnerColumn::BrandId.eq(brand_id))
            .order_by_asc(OwnerColumn::Id)
            .all(db)
            .await?)
    }

    /// Delete every owner linked to `brand_id` together with its join rows.
    pub async fn delete_by_brand<C>(brand_id: i32, db: &C) -> StorageResult<u64>
    where
        C: ConnectionTrait,
    {
        let ids: Vec<i32> = BrandOwner::find()
            .select_only()
            .column(BrandOwnerColumn::OwnerId)
            .filter(BrandOwnerColumn::BrandId.eq(brand_id))
            .into_tuple()
            .all(db)
            .await?;
        if ids.is_empty() {
            return Ok(0);
        }
        Ok(Owner::delete_many()
            .filter(OwnerColumn::Id.is_in(ids))
            .exec(db)
            .await?
            .rows_affected)
    }
}

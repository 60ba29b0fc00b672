use crate::builder::{build_link, insert_returning};
use brandhub_error::StorageResult;
use brandhub_models::entities::{
    brand_contact::Relation as BrandContactRelation,
    prelude::{
        BrandContact, BrandContactActiveModel, BrandContactColumn, Contact, ContactActiveModel,
        ContactColumn, ContactModel,
    },
};
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait,
};

/// Contacts are shared rows reachable from a brand only through `brand_contacts`.
pub struct ContactRepository;

impl ContactRepository {
    /// Insert `contacts` and link each one to `brand_id`. Returns the contact ids in input order.
    pub async fn create_for_brand<C>(
        brand_id: i32,
        contacts: Vec<ContactActiveModel>,
        db: &C,
    ) -> StorageResult<Vec<i32>>
    where
        C: ConnectionTrait,
    {
        let ids = insert_returning(contacts, db).await?;
        if let Some(link) = build_link::<BrandContactActiveModel>(brand_id, &ids) {
            link.exec(db).await?;
        }
        Ok(ids)
    }

    pub async fn find_by_brand<C>(brand_id: i32, db: &C) -> StorageResult<Vec<ContactModel>>
    where
        C: ConnectionTrait,
    {
        Ok(Contact::find()
            .join(JoinType::InnerJoin, BrandContactRelation::Contact.def().rev())
            .filter(BrandContactColumn::BrandId.eq(brand_id))
            .order_by_asc(ContactColumn::Id)
            .all(db)
            .await?)
    }

    /// Delete every contact linked to `brand_id`; the join rows go with them.
    pub async fn delete_by_brand<C>(brand_id: i32, db: &C) -> StorageResult<u64>
    where
        C: ConnectionTrait,
    {
        let ids: Vec<i32> = BrandContact::find()
            .select_only()
            .column(BrandContactColumn::ContactId)
            .filter(BrandContactColumn::BrandId.eq(brand_id))
            .into_tuple()
            .all(db)
            .await?;
        if ids.is_empty() {
            return Ok(0);
        }
        Ok(Contact::delete_many()
            .filter(ContactColumn::Id.is_in(ids))
            .exec(db)
            .await?
            .rows_affected)
    }
}

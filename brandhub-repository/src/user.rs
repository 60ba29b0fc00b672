use brandhub_error::StorageResult;
use brandhub_models::{
    domain::prelude::NewUser,
    entities::prelude::{User, UserActiveModel, UserColumn, UserModel},
};
use chrono::Utc;
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter,
    QuerySelect, Set,
};

pub struct UserRepository;

impl UserRepository {
    pub async fn create<C>(user: NewUser, db: &C) -> StorageResult<i32>
    where
        C: ConnectionTrait,
    {
        let mut active: UserActiveModel = user.into_active_model();
        active.created_at = Set(Some(Utc::now()));
        Ok(User::insert(active).exec(db).await?.last_insert_id)
    }

    pub async fn delete<C>(id: i32, db: &C) -> StorageResult<u64>
    where
        C: ConnectionTrait,
    {
        Ok(User::delete_by_id(id).exec(db).await?.rows_affected)
    }

    pub async fn find_by_email<C>(email: &str, db: &C) -> StorageResult<Option<UserModel>>
    where
        C: ConnectionTrait,
    {
        Ok(User::find()
            .filter(UserColumn::Email.eq(email))
            .one(db)
            .await?)
    }

    pub async fn find_id_by_email<C>(email: &str, db: &C) -> StorageResult<Option<i32>>
    where
        C: ConnectionTrait,
    {
        Ok(User::find()
            .select_only()
            .column(UserColumn::Id)
            .filter(UserColumn::Email.eq(email))
            .into_tuple::<i32>()
            .one(db)
            .await?)
    }

    pub async fn exists_by_email<C>(email: &str, db: &C) -> StorageResult<bool>
    where
        C: ConnectionTrait,
    {
        Ok(User::find()
            .filter(UserColumn::Email.eq(email))
            .count(db)
            .await?
            > 0)
    }
}

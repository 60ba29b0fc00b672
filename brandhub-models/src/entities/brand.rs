//! `SeaORM` Entity for the brand aggregate root.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "brands")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub description: String,
    pub location: String,
    pub is_open: bool,
    /// Creator; nulled when the user row is removed.
    pub added_by: Option<i32>,
    pub created_at: Option<DateTimeUtc>,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AddedBy",
        to = "super::user::Column::Id",
        on_delete = "SetNull"
    )]
    User,
    #[sea_orm(has_many = "super::statistic::Entity")]
    Statistic,
    #[sea_orm(has_many = "super::product::Entity")]
    Product,
    #[sea_orm(has_many = "super::price::Entity")]
    Price,
    #[sea_orm(has_many = "super::brand_contact::Entity")]
    BrandContact,
    #[sea_orm(has_many = "super::brand_owner::Entity")]
    BrandOwner,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::statistic::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Statistic.def()
    }
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl Related<super::price::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Price.def()
    }
}

impl Related<super::contact::Entity> for Entity {
    fn to() -> RelationDef {
        super::brand_contact::Relation::Contact.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::brand_contact::Relation::Brand.def().rev())
    }
}

impl Related<super::owner::Entity> for Entity {
    fn to() -> RelationDef {
        super::brand_owner::Relation::Owner.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::brand_owner::Relation::Brand.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

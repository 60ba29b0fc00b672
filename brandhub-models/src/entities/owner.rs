use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "owners")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub surname: String,
    pub fathername: String,
    pub bio_info: String,
    pub history_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::history::Entity",
        from = "Column::HistoryId",
        to = "super::history::Column::Id",
        on_delete = "SetNull"
    )]
    History,
    #[sea_orm(has_many = "super::brand_owner::Entity")]
    BrandOwner,
}

impl Related<super::history::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::History.def()
    }
}

impl Related<super::brand::Entity> for Entity {
    fn to() -> RelationDef {
        super::brand_owner::Relation::Brand.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::brand_owner::Relation::Owner.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

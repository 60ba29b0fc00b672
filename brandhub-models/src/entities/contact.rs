use crate::enums::contact::ContactKind;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "contacts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub kind: ContactKind,
    pub link: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::brand_contact::Entity")]
    BrandContact,
}

impl Related<super::brand::Entity> for Entity {
    fn to() -> RelationDef {
        super::brand_contact::Relation::Brand.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::brand_contact::Relation::Contact.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

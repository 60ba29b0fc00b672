use super::{brand::Brands, owner::Owners};
use crate::initializer::BHInitializer;
use brandhub_macros::TableInitializer;
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden, TableInitializer)]
#[initializer(
    order = super::INIT_BRAND_OWNER_ORDER,
    create_table = create_brand_owners_table,
    create_indexes = create_brand_owners_indexes
)]
pub enum BrandOwners {
    Table,
    Id,
    BrandId,
    OwnerId,
}

fn create_brand_owners_table(_: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(BrandOwners::Table)
        .if_not_exists()
        .col(pk_auto(BrandOwners::Id))
        .col(ColumnDef::new(BrandOwners::BrandId).integer().not_null())
        .col(ColumnDef::new(BrandOwners::OwnerId).integer().not_null())
        .foreign_key(
            ForeignKey::create()
                .name("fk_brand_owners_brand")
                .from(BrandOwners::Table, BrandOwners::BrandId)
                .to(Brands::Table, Brands::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_brand_owners_owner")
                .from(BrandOwners::Table, BrandOwners::OwnerId)
                .to(Owners::Table, Owners::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

fn create_brand_owners_indexes(_: DatabaseBackend) -> Option<Vec<IndexCreateStatement>> {
    Some(vec![
        Index::create()
            .name("idx_brand_owners_brand_id")
            .table(BrandOwners::Table)
            .col(BrandOwners::BrandId)
            .if_not_exists()
            .to_owned(),
        Index::create()
            .name("idx_brand_owners_owner_id")
            .table(BrandOwners::Table)
            .col(BrandOwners::OwnerId)
            .if_not_exists()
            .to_owned(),
    ])
}

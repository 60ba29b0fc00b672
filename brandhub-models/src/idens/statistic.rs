use super::brand::Brands;
use crate::initializer::BHInitializer;
use brandhub_macros::TableInitializer;
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden, TableInitializer)]
#[initializer(
    order = super::INIT_STATISTIC_ORDER,
    create_table = create_statistics_table,
    create_indexes = create_statistics_indexes
)]
pub enum Statistics {
    Table,
    Id,
    BrandId,
    Name,
    Description,
    StartPeriod,
    EndPeriod,
    Value,
}

fn create_statistics_table(_: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(Statistics::Table)
        .if_not_exists()
        .col(pk_auto(Statistics::Id))
        .col(ColumnDef::new(Statistics::BrandId).integer().not_null())
        .col(ColumnDef::new(Statistics::Name).string_len(50).not_null())
        .col(
            ColumnDef::new(Statistics::Description)
                .string_len(200)
                .not_null()
                .default(""),
        )
        .col(ColumnDef::new(Statistics::StartPeriod).date().not_null())
        .col(ColumnDef::new(Statistics::EndPeriod).date().not_null())
        .col(ColumnDef::new(Statistics::Value).double().not_null())
        .foreign_key(
            ForeignKey::create()
                .name("fk_statistics_brand")
                .from(Statistics::Table, Statistics::BrandId)
                .to(Brands::Table, Brands::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

fn create_statistics_indexes(_: DatabaseBackend) -> Option<Vec<IndexCreateStatement>> {
    Some(vec![Index::create()
        .name("idx_statistics_brand_id")
        .table(Statistics::Table)
        .col(Statistics::BrandId)
        .if_not_exists()
        .to_owned()])
}

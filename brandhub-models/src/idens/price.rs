use super::brand::Brands;
use crate::initializer::BHInitializer;
use brandhub_macros::TableInitializer;
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden, TableInitializer)]
#[initializer(
    order = super::INIT_PRICE_ORDER,
    create_table = create_prices_table,
    create_indexes = create_prices_indexes
)]
pub enum Prices {
    Table,
    Id,
    BrandId,
    LowEnd,
    HighEnd,
    Currency,
}

fn create_prices_table(_: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(Prices::Table)
        .if_not_exists()
        .col(pk_auto(Prices::Id))
        .col(ColumnDef::new(Prices::BrandId).integer().not_null())
        .col(ColumnDef::new(Prices::LowEnd).integer().not_null())
        .col(ColumnDef::new(Prices::HighEnd).integer().not_null())
        .col(
            ColumnDef::new(Prices::Currency)
                .string_len(20)
                .not_null()
                .comment("Currency code"),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_prices_brand")
                .from(Prices::Table, Prices::BrandId)
                .to(Brands::Table, Brands::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

fn create_prices_indexes(_: DatabaseBackend) -> Option<Vec<IndexCreateStatement>> {
    Some(vec![Index::create()
        .name("idx_prices_brand_id")
        .table(Prices::Table)
        .col(Prices::BrandId)
        .if_not_exists()
        .to_owned()])
}

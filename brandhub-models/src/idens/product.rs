use super::{brand::Brands, price::Prices};
use crate::initializer::BHInitializer;
use brandhub_macros::TableInitializer;
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden, TableInitializer)]
#[initializer(
    order = super::INIT_PRODUCT_ORDER,
    create_table = create_products_table,
    create_indexes = create_products_indexes
)]
pub enum Products {
    Table,
    Id,
    BrandId,
    PriceId,
    Name,
    Description,
}

fn create_products_table(_: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(Products::Table)
        .if_not_exists()
        .col(pk_auto(Products::Id))
        .col(ColumnDef::new(Products::BrandId).integer().not_null())
        .col(ColumnDef::new(Products::PriceId).integer().not_null())
        .col(ColumnDef::new(Products::Name).string_len(50).not_null())
        .col(
            ColumnDef::new(Products::Description)
                .string_len(200)
                .not_null()
                .default(""),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_products_brand")
                .from(Products::Table, Products::BrandId)
                .to(Brands::Table, Brands::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_products_price")
                .from(Products::Table, Products::PriceId)
                .to(Prices::Table, Prices::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

fn create_products_indexes(_: DatabaseBackend) -> Option<Vec<IndexCreateStatement>> {
    Some(vec![
        Index::create()
            .name("uk_products_brand_name")
            .table(Products::Table)
            .col(Products::BrandId)
            .col(Products::Name)
            .unique()
            .if_not_exists()
            .to_owned(),
        Index::create()
            .name("idx_products_price_id")
            .table(Products::Table)
            .col(Products::PriceId)
            .if_not_exists()
            .to_owned(),
    ])
}

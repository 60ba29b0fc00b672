use super::product::Products;
use crate::initializer::BHInitializer;
use brandhub_macros::TableInitializer;
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden, TableInitializer)]
#[initializer(
    order = super::INIT_MEDIA_ORDER,
    create_table = create_media_table,
    create_indexes = create_media_indexes
)]
pub enum Media {
    Table,
    Id,
    ProductId,
    Path,
}

fn create_media_table(_: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(Media::Table)
        .if_not_exists()
        .col(pk_auto(Media::Id))
        .col(ColumnDef::new(Media::ProductId).integer().not_null())
        .col(
            ColumnDef::new(Media::Path)
                .string_len(255)
                .not_null()
                .comment("Media store reference"),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_media_product")
                .from(Media::Table, Media::ProductId)
                .to(Products::Table, Products::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

fn create_media_indexes(_: DatabaseBackend) -> Option<Vec<IndexCreateStatement>> {
    Some(vec![Index::create()
        .name("idx_media_product_id")
        .table(Media::Table)
        .col(Media::ProductId)
        .if_not_exists()
        .to_owned()])
}

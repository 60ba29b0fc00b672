use super::user::Users;
use crate::initializer::BHInitializer;
use brandhub_macros::TableInitializer;
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden, TableInitializer)]
#[initializer(
    order = super::INIT_BRAND_ORDER,
    create_table = create_brands_table,
    create_indexes = create_brands_indexes
)]
pub enum Brands {
    Table,
    Id,
    Name,
    Description,
    Location,
    IsOpen,
    AddedBy,
    CreatedAt,
    UpdatedAt,
}

fn create_brands_table(_: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(Brands::Table)
        .if_not_exists()
        .col(pk_auto(Brands::Id))
        .col(
            ColumnDef::new(Brands::Name)
                .string_len(50)
                .not_null()
                .unique_key()
                .comment("Brand name, unique across brands"),
        )
        .col(
            ColumnDef::new(Brands::Description)
                .string_len(200)
                .not_null()
                .default(""),
        )
        .col(
            ColumnDef::new(Brands::Location)
                .string_len(50)
                .not_null()
                .default("")
                .comment("City"),
        )
        .col(
            ColumnDef::new(Brands::IsOpen)
                .boolean()
                .not_null()
                .default(false)
                .comment("Visible in the public listing"),
        )
        .col(
            ColumnDef::new(Brands::AddedBy)
                .integer()
                .null()
                .comment("Creator user id"),
        )
        .col(
            ColumnDef::new(Brands::CreatedAt)
                .timestamp_with_time_zone()
                .default(Expr::current_timestamp()),
        )
        .col(
            ColumnDef::new(Brands::UpdatedAt)
                .timestamp_with_time_zone()
                .default(Expr::current_timestamp()),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_brands_added_by")
                .from(Brands::Table, Brands::AddedBy)
                .to(Users::Table, Users::Id)
                .on_delete(ForeignKeyAction::SetNull),
        )
        .to_owned()
}

fn create_brands_indexes(_: DatabaseBackend) -> Option<Vec<IndexCreateStatement>> {
    Some(vec![
        Index::create()
            .name("idx_brands_added_by")
            .table(Brands::Table)
            .col(Brands::AddedBy)
            .if_not_exists()
            .to_owned(),
        Index::create()
            .name("idx_brands_is_open")
            .table(Brands::Table)
            .col(Brands::IsOpen)
            .if_not_exists()
            .to_owned(),
    ])
}

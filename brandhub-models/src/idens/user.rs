use crate::initializer::BHInitializer;
use brandhub_macros::TableInitializer;
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden, TableInitializer)]
#[initializer(order = super::INIT_USER_ORDER, create_table = create_users_table)]
pub enum Users {
    Table,
    Id,
    Email,
    Password,
    Name,
    Surname,
    CreatedAt,
}

fn create_users_table(_: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(Users::Table)
        .if_not_exists()
        .col(pk_auto(Users::Id))
        .col(
            ColumnDef::new(Users::Email)
                .string_len(50)
                .not_null()
                .unique_key()
                .comment("Login email"),
        )
        .col(
            ColumnDef::new(Users::Password)
                .string_len(200)
                .not_null()
                .comment("bcrypt hash"),
        )
        .col(ColumnDef::new(Users::Name).string_len(50).not_null())
        .col(ColumnDef::new(Users::Surname).string_len(50).not_null())
        .col(
            ColumnDef::new(Users::CreatedAt)
                .timestamp_with_time_zone()
                .default(Expr::current_timestamp()),
        )
        .to_owned()
}

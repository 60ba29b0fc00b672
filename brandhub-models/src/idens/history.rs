use crate::initializer::BHInitializer;
use brandhub_macros::TableInitializer;
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden, TableInitializer)]
#[initializer(order = super::INIT_HISTORY_ORDER, create_table = create_history_table)]
pub enum History {
    Table,
    Id,
}

fn create_history_table(_: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(History::Table)
        .if_not_exists()
        .col(pk_auto(History::Id))
        .to_owned()
}

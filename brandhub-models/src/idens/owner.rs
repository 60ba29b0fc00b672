use super::history::History;
use crate::initializer::BHInitializer;
use brandhub_macros::TableInitializer;
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden, TableInitializer)]
#[initializer(order = super::INIT_OWNER_ORDER, create_table = create_owners_table)]
pub enum Owners {
    Table,
    Id,
    Name,
    Surname,
    Fathername,
    BioInfo,
    HistoryId,
}

fn create_owners_table(_: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(Owners::Table)
        .if_not_exists()
        .col(pk_auto(Owners::Id))
        .col(ColumnDef::new(Owners::Name).string_len(50).not_null())
        .col(
            ColumnDef::new(Owners::Surname)
                .string_len(50)
                .not_null()
                .default(""),
        )
        .col(
            ColumnDef::new(Owners::Fathername)
                .string_len(50)
                .not_null()
                .default("")
                .comment("Patronymic"),
        )
        .col(
            ColumnDef::new(Owners::BioInfo)
                .string_len(200)
                .not_null()
                .default(""),
        )
        .col(ColumnDef::new(Owners::HistoryId).integer().null())
        .foreign_key(
            ForeignKey::create()
                .name("fk_owners_history")
                .from(Owners::Table, Owners::HistoryId)
                .to(History::Table, History::Id)
                .on_delete(ForeignKeyAction::SetNull),
        )
        .to_owned()
}

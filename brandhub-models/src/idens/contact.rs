use crate::initializer::BHInitializer;
use brandhub_macros::TableInitializer;
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden, TableInitializer)]
#[initializer(order = super::INIT_CONTACT_ORDER, create_table = create_contacts_table)]
pub enum Contacts {
    Table,
    Id,
    Kind,
    Link,
}

fn create_contacts_table(_: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(Contacts::Table)
        .if_not_exists()
        .col(pk_auto(Contacts::Id))
        .col(
            ColumnDef::new(Contacts::Kind)
                .string_len(20)
                .not_null()
                .comment("phone, email, telegram, whatsapp, mail or other"),
        )
        .col(ColumnDef::new(Contacts::Link).string_len(100).not_null())
        .to_owned()
}

use super::{brand::Brands, contact::Contacts};
use crate::initializer::BHInitializer;
use brandhub_macros::TableInitializer;
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden, TableInitializer)]
#[initializer(
    order = super::INIT_BRAND_CONTACT_ORDER,
    create_table = create_brand_contacts_table,
    create_indexes = create_brand_contacts_indexes
)]
pub enum BrandContacts {
    Table,
    Id,
    BrandId,
    ContactId,
}

fn create_brand_contacts_table(_: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(BrandContacts::Table)
        .if_not_exists()
        .col(pk_auto(BrandContacts::Id))
        .col(ColumnDef::new(BrandContacts::BrandId).integer().not_null())
        .col(ColumnDef::new(BrandContacts::ContactId).integer().not_null())
        .foreign_key(
            ForeignKey::create()
                .name("fk_brand_contacts_brand")
                .from(BrandContacts::Table, BrandContacts::BrandId)
                .to(Brands::Table, Brands::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_brand_contacts_contact")
                .from(BrandContacts::Table, BrandContacts::ContactId)
                .to(Contacts::Table, Contacts::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

fn create_brand_contacts_indexes(_: DatabaseBackend) -> Option<Vec<IndexCreateStatement>> {
    Some(vec![
        Index::create()
            .name("idx_brand_contacts_brand_id")
            .table(BrandContacts::Table)
            .col(BrandContacts::BrandId)
            .if_not_exists()
            .to_owned(),
        Index::create()
            .name("idx_brand_contacts_contact_id")
            .table(BrandContacts::Table)
            .col(BrandContacts::ContactId)
            .if_not_exists()
            .to_owned(),
    ])
}

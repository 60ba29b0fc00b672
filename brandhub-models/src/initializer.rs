use crate::idens;
use sea_orm::{
    sea_query::{IndexCreateStatement, TableCreateStatement, TableDropStatement},
    DatabaseBackend,
};

/// Schema contribution of one table: how to create it, index it and drop it.
pub trait BHInitializer: Send + Sync {
    fn order(&self) -> i32;

    fn name(&self) -> &str;

    fn has_update_col(&self) -> bool;

    fn to_create_table_stmt(&self, backend: DatabaseBackend) -> TableCreateStatement;

    fn to_drop_table_stmt(&self, backend: DatabaseBackend) -> TableDropStatement;

    fn to_create_indexes_stmt(&self, backend: DatabaseBackend)
        -> Option<Vec<IndexCreateStatement>>;
}

/// All table initializers, sorted so that referenced tables are created first.
pub fn initializers() -> Vec<Box<dyn BHInitializer>> {
    let mut initializers: Vec<Box<dyn BHInitializer>> = vec![
        Box::new(idens::user::Users::Table),
        Box::new(idens::history::History::Table),
        Box::new(idens::brand::Brands::Table),
        Box::new(idens::contact::Contacts::Table),
        Box::new(idens::owner::Owners::Table),
        Box::new(idens::statistic::Statistics::Table),
        Box::new(idens::price::Prices::Table),
        Box::new(idens::product::Products::Table),
        Box::new(idens::media::Media::Table),
        Box::new(idens::brand_contact::BrandContacts::Table),
        Box::new(idens::brand_owner::BrandOwners::Table),
    ];

    initializers.sort_by_key(|init| init.order());
    initializers
}

mod initializer;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derives the `BHInitializer` trait for a schema identifier enum.
///
/// ```ignore
/// #[derive(DeriveIden, TableInitializer)]
/// #[initializer(order = super::INIT_BRAND_ORDER, create_table = create_brand_table)]
/// pub enum Brand { Table, Id, Name }
/// ```
#[proc_macro_derive(TableInitializer, attributes(initializer))]
pub fn derive_table_initializer(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match initializer::expand_derive_table_initializer(input) {
        Ok(ts) => ts.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

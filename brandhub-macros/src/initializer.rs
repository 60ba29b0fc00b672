use darling::FromAttributes;
use heck::ToSnakeCase;
use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Error, Result};

/// Attribute arguments for #[initializer(...)]
#[derive(FromAttributes, Debug)]
#[darling(attributes(initializer))]
struct InitializerOpts {
    /// Table name, defaults to the snake-cased enum name
    #[darling(default)]
    name: Option<String>,
    #[darling(default)]
    order: Option<syn::Path>,
    create_table: syn::Path,
    #[darling(default)]
    create_indexes: Option<syn::Path>,
}

pub(crate) fn expand_derive_table_initializer(input: DeriveInput) -> Result<TokenStream> {
    let enum_data = match &input.data {
        Data::Enum(enum_data) => enum_data,
        _ => {
            return Err(Error::new_spanned(
                &input,
                "TableInitializer can only be derived for enums",
            ))
        }
    };

    let opts = InitializerOpts::from_attributes(&input.attrs)
        .map_err(|e| Error::new_spanned(&input, e.to_string()))?;

    let ident = &input.ident;
    let name = opts
        .name
        .clone()
        .unwrap_or_else(|| input.ident.to_string().to_snake_case());
    let order = opts
        .order
        .as_ref()
        .map(|p| quote!(#p))
        .unwrap_or_else(|| quote!(0));
    let has_update_col = enum_data.variants.iter().any(|v| v.ident == "UpdatedAt");
    let create_table_fn = &opts.create_table;
    let create_indexes_impl = match &opts.create_indexes {
        Some(create_fn) => quote!(#create_fn(backend)),
        None => quote!(None),
    };

    Ok(quote! {
        impl BHInitializer for #ident {
            fn order(&self) -> i32 {
                #order
            }

            fn name(&self) -> &str {
                #name
            }

            fn has_update_col(&self) -> bool {
                #has_update_col
            }

            fn to_create_table_stmt(
                &self,
                backend: sea_orm::DatabaseBackend,
            ) -> sea_orm::sea_query::TableCreateStatement {
                #create_table_fn(backend)
            }

            fn to_drop_table_stmt(
                &self,
                _: sea_orm::DatabaseBackend,
            ) -> sea_orm::sea_query::TableDropStatement {
                sea_orm::sea_query::Table::drop()
                    .table(Self::Table)
                    .if_exists()
                    .to_owned()
            }

            fn to_create_indexes_stmt(
                &self,
                backend: sea_orm::DatabaseBackend,
            ) -> Option<Vec<sea_orm::sea_query::IndexCreateStatement>> {
                #create_indexes_impl
            }
        }
    })
}

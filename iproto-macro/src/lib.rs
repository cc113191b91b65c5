use proc_macro::TokenStream;

use quote::quote;
use syn::{ItemStruct, parse, parse_macro_input};
use syn::parse::Parser;

/// Adds a `request_id: u32` field to a request struct and implements
/// `RequestIdentity` over that field.
///
/// Constructors of the annotated struct must initialize the field, usually
/// with `UNASSIGNED_REQUEST_ID`.
#[proc_macro_attribute]
pub fn add_request_id(args: TokenStream, input: TokenStream) -> TokenStream {
    let mut item_struct = parse_macro_input!(input as ItemStruct);
    let _ = parse_macro_input!(args as parse::Nothing);

    match item_struct.fields {
        syn::Fields::Named(ref mut fields) => {
            let field = syn::Field::parse_named
                .parse2(quote! { pub(crate) request_id: u32 });
            match field {
                Ok(field) => fields.named.push(field),
                Err(err) => return err.to_compile_error().into(),
            }
        }
        _ => {
            return syn::Error::new_spanned(
                &item_struct.ident,
                "add_request_id only supports structs with named fields",
            ).to_compile_error().into();
        }
    }

    let name = &item_struct.ident;
    let (impl_generics, type_generics, where_clause) = item_struct.generics.split_for_impl();

    return quote! {
        #item_struct

        impl #impl_generics ::iproto::net::request::request::RequestIdentity for #name #type_generics #where_clause {
            fn get_request_id(&self) -> u32 {
                return self.request_id;
            }

            fn set_request_id(&mut self, request_id: u32) {
                self.request_id = request_id;
            }
        }
    }.into();
}

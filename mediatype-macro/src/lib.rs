extern crate proc_macro;

use proc_macro::TokenStream;
use quote::quote;

/// Expands a media type literal into its normalized pieces,
/// `(type, subtype, &[(name, value), ..])`.
///
/// Only meant to be called through `mediatype::media_type!`.
#[proc_macro]
pub fn media_type_parts(tokens: TokenStream) -> TokenStream {
    let lit_str = syn::parse_macro_input!(tokens as syn::LitStr);

    let mime = match mediatype_parse::parse(&lit_str.value()) {
        Ok(mime) => mime,
        Err(err) => {
            let msg = format!("invalid MediaType: {}", err);
            return syn::Error::new(lit_str.span(), msg).to_compile_error().into();
        }
    };

    let type_: &str = &mime.type_;
    let subtype: &str = &mime.subtype;
    let names = mime.params.iter().map(|(name, _)| name);
    let values = mime.params.iter().map(|(_, value)| value);

    let out = quote! {
        (#type_, #subtype, &[#((#names, #values)),*])
    };
    out.into()
}

use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::parse::Parser;

/// Generate a color model from a struct with exactly three component fields.
///
/// The fields are made public and the model gets a `new` constructor,
/// `to_components` and conversions from and to `Components`. Type parameters
/// on the struct are treated as tags and stored in `PhantomData` fields.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as syn::ItemStruct);
    expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(mut model: syn::ItemStruct) -> syn::Result<TokenStream2> {
    let [first, second, third] = component_names(&model)?;

    for field in model.fields.iter_mut() {
        field.vis = syn::Visibility::Public(Default::default());
    }
    model
        .attrs
        .push(syn::parse_quote!(#[derive(Clone, Copy, Debug, PartialEq)]));

    let tags = add_tag_fields(&mut model)?;

    let name = &model.ident;
    let (impl_gen, type_gen, where_clause) = model.generics.split_for_impl();

    Ok(quote! {
        #model

        impl #impl_gen #name #type_gen #where_clause {
            /// Create a new model from its three components.
            pub fn new(
                #first: crate::color::Component,
                #second: crate::color::Component,
                #third: crate::color::Component,
            ) -> Self {
                Self {
                    #first,
                    #second,
                    #third,
                    #(#tags: ::std::marker::PhantomData,)*
                }
            }

            /// The three components of this model, in declaration order.
            pub fn to_components(&self) -> crate::color::Components {
                crate::color::Components(self.#first, self.#second, self.#third)
            }
        }

        impl #impl_gen From<crate::color::Components> for #name #type_gen #where_clause {
            fn from(components: crate::color::Components) -> Self {
                Self::new(components.0, components.1, components.2)
            }
        }

        impl #impl_gen From<#name #type_gen> for crate::color::Components #where_clause {
            fn from(model: #name #type_gen) -> Self {
                model.to_components()
            }
        }
    })
}

fn component_names(model: &syn::ItemStruct) -> syn::Result<[syn::Ident; 3]> {
    let names = match &model.fields {
        syn::Fields::Named(named) => named
            .named
            .iter()
            .filter_map(|field| field.ident.clone())
            .collect::<Vec<_>>(),
        _ => vec![],
    };

    names.try_into().map_err(|_| {
        syn::Error::new_spanned(
            &model.ident,
            "models must have exactly 3 named fields, one for each component of the color",
        )
    })
}

/// Add a `PhantomData` field for every type parameter and return the names of
/// the new fields.
fn add_tag_fields(model: &mut syn::ItemStruct) -> syn::Result<Vec<syn::Ident>> {
    let tags = model
        .generics
        .type_params()
        .map(|param| param.ident.clone())
        .collect::<Vec<_>>();

    let syn::Fields::Named(named) = &mut model.fields else {
        return Ok(vec![]);
    };

    let mut fields = Vec::with_capacity(tags.len());
    for tag in tags {
        let field = syn::Ident::new(&format!("_{}", tag.to_string().to_lowercase()), Span::call_site());
        named.named.push(
            syn::Field::parse_named.parse2(quote!(#field: ::std::marker::PhantomData<#tag>))?,
        );
        fields.push(field);
    }

    Ok(fields)
}

//! Implementation of the `#[derive(Lenses)]` macro.
//!
//! For every named field this generates a lens constructor
//! (`{field}_lens()`) on the struct itself and a navigation method on a
//! `{Struct}Lenses` extension trait that is blanket-implemented for every
//! `lenspath::Navigate<Struct>`.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::ext::IdentExt;
use syn::{
    Data, DeriveInput, Field, Fields, FieldsNamed, Ident, LitStr, Type, parse_macro_input,
    parse_quote,
};

/// Main implementation of the Lenses derive macro.
pub fn derive_lenses_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// One field, with the names generated for it.
struct Accessor<'a> {
    field: &'a Ident,
    field_type: &'a Type,
    label: String,
    constructor: Ident,
    method: Ident,
}

impl<'a> Accessor<'a> {
    fn from_field(field: &'a Field) -> syn::Result<Self> {
        let Some(ident) = field.ident.as_ref() else {
            return Err(syn::Error::new_spanned(field, "expected a named field"));
        };
        Ok(Self {
            field: ident,
            field_type: &field.ty,
            label: ident.unraw().to_string(),
            constructor: format_ident!("{}_lens", ident),
            method: navigation_name(field, ident)?,
        })
    }
}

/// Reads `#[lens(rename = "...")]`, defaulting to the field name.
fn navigation_name(field: &Field, ident: &Ident) -> syn::Result<Ident> {
    let mut name = ident.clone();
    for attribute in &field.attrs {
        if !attribute.path().is_ident("lens") {
            continue;
        }
        attribute.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                let value: LitStr = meta.value()?.parse()?;
                name = value.parse()?;
                Ok(())
            } else {
                Err(meta.error("unsupported lens attribute, expected `rename = \"...\"`"))
            }
        })?;
    }
    Ok(name)
}

fn named_fields(input: &DeriveInput) -> syn::Result<&FieldsNamed> {
    match &input.data {
        Data::Struct(data_struct) => match &data_struct.fields {
            Fields::Named(named) => Ok(named),
            Fields::Unnamed(_) => Err(syn::Error::new_spanned(
                &input.ident,
                "Lenses can only be derived for structs with named fields, not tuple structs.",
            )),
            Fields::Unit => Err(syn::Error::new_spanned(
                &input.ident,
                "Lenses cannot be derived for unit structs (structs with no fields).",
            )),
        },
        Data::Enum(_) => Err(syn::Error::new_spanned(
            &input.ident,
            "Lenses can only be derived for structs, not enums.",
        )),
        Data::Union(_) => Err(syn::Error::new_spanned(
            &input.ident,
            "Lenses cannot be derived for unions.",
        )),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let accessors = named_fields(input)?
        .named
        .iter()
        .map(Accessor::from_field)
        .collect::<syn::Result<Vec<_>>>()?;

    for (position, accessor) in accessors.iter().enumerate() {
        if let Some(earlier) = accessors[..position]
            .iter()
            .find(|earlier| earlier.method == accessor.method)
        {
            return Err(syn::Error::new_spanned(
                accessor.field,
                format!(
                    "navigation method `{}` is already generated for field `{}`",
                    accessor.method, earlier.label
                ),
            ));
        }
    }

    let name = &input.ident;
    let visibility = &input.vis;
    let (impl_generics, type_generics, where_clause) = input.generics.split_for_impl();
    let navigate = quote!(::lenspath::Navigate<#name #type_generics>);

    let constructors = accessors
        .iter()
        .map(|accessor| lens_constructor(&accessors, accessor));
    let methods = accessors
        .iter()
        .map(|accessor| navigation_method(name, &input.generics, &accessors, accessor));

    let trait_name = format_ident!("{}Lenses", name);
    let trait_doc = format!(
        "Field navigation for lenses and optionals focused on a [`{name}`].\n\n\
         Generated by `#[derive(Lenses)]`."
    );

    let mut blanket_generics = input.generics.clone();
    blanket_generics
        .params
        .push(parse_quote!(__Navigator: #navigate));
    let (blanket_impl_generics, _, _) = blanket_generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics #name #type_generics #where_clause {
            #(#constructors)*
        }

        #[doc = #trait_doc]
        #visibility trait #trait_name #impl_generics: #navigate #where_clause {
            #(#methods)*
        }

        impl #blanket_impl_generics #trait_name #type_generics for __Navigator #where_clause {}
    })
}

/// Bounds every generated item needs: the focus is `'static` and every
/// other field can be cloned into the rebuilt struct.
fn bounds(accessors: &[Accessor<'_>], target: &Accessor<'_>) -> TokenStream2 {
    let target_type = target.field_type;
    let clones = accessors
        .iter()
        .filter(|accessor| accessor.field != target.field)
        .map(|accessor| {
            let field_type = accessor.field_type;
            quote!(#field_type: ::core::clone::Clone)
        });
    quote!(#target_type: 'static, #(#clones,)*)
}

fn lens_constructor(accessors: &[Accessor<'_>], target: &Accessor<'_>) -> TokenStream2 {
    let Accessor {
        field,
        field_type,
        label,
        constructor,
        ..
    } = target;
    let bounds = bounds(accessors, target);
    let copies = accessors
        .iter()
        .filter(|accessor| accessor.field != target.field)
        .map(|accessor| {
            let other = accessor.field;
            quote!(#other: ::core::clone::Clone::clone(&source.#other))
        });
    let doc = format!("Returns a lens focusing on the `{label}` field.");

    quote! {
        #[doc = #doc]
        #[inline]
        #[must_use]
        pub fn #constructor() -> ::lenspath::Lens<Self, #field_type>
        where
            Self: 'static,
            #bounds
        {
            ::lenspath::Lens::named(
                #label,
                |source: &Self| &source.#field,
                |source: &Self, value: #field_type| Self {
                    #field: value,
                    #(#copies,)*
                },
            )
        }
    }
}

fn navigation_method(
    name: &Ident,
    generics: &syn::Generics,
    accessors: &[Accessor<'_>],
    target: &Accessor<'_>,
) -> TokenStream2 {
    let Accessor {
        field_type,
        label,
        constructor,
        method,
        ..
    } = target;
    let (_, type_generics, _) = generics.split_for_impl();
    let navigate = quote!(::lenspath::Navigate<#name #type_generics>);
    let bounds = bounds(accessors, target);
    let doc = format!("Navigates to the `{label}` field.");

    quote! {
        #[doc = #doc]
        #[inline]
        #[must_use]
        fn #method(self) -> <Self as #navigate>::Output<#field_type>
        where
            #name #type_generics: 'static,
            #bounds
        {
            <Self as #navigate>::then(self, <#name #type_generics>::#constructor())
        }
    }
}

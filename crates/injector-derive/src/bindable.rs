//! Bindable derive macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    Attribute, Data, DeriveInput, Expr, ExprLit, GenericArgument, Index, Lit, LitStr, Member,
    Meta, PathArguments, Type, WherePredicate, parse_macro_input, parse_quote,
};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Direction {
    Injection,
    Infection,
}

impl Direction {
    fn from_attr(attr: &Attribute) -> Option<Self> {
        if attr.path().is_ident("injection") {
            Some(Self::Injection)
        } else if attr.path().is_ident("infection") {
            Some(Self::Infection)
        } else {
            None
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Injection => "injection",
            Self::Infection => "infection",
        }
    }
}

struct Tag {
    direction: Direction,
    key: LitStr,
}

pub fn derive_bindable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(mut input: DeriveInput) -> syn::Result<TokenStream2> {
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Bindable can only be derived for structs",
        ));
    };

    let generic = input.generics.type_params().next().is_some();
    let mut entries = Vec::new();
    let mut bounds: Vec<WherePredicate> = Vec::new();

    for (index, field) in data.fields.iter().enumerate() {
        let Some(tag) = field_tag(&field.attrs)? else {
            continue;
        };

        let (member, name) = match &field.ident {
            Some(ident) => (Member::Named(ident.clone()), ident.to_string()),
            None => (Member::Unnamed(Index::from(index)), index.to_string()),
        };
        let (constructor, value_ty) = match option_inner(&field.ty) {
            Some(inner) => (quote!(optional), inner),
            None => (quote!(new), &field.ty),
        };
        let direction = match tag.direction {
            Direction::Injection => quote!(injection),
            Direction::Infection => quote!(infection),
        };
        let key = &tag.key;

        entries.push(quote! {
            ::injector::FieldBinding::#constructor(#name, &mut self.#member).#direction(#key)
        });
        if generic {
            bounds.push(parse_quote!(#value_ty: ::injector::Opaque + ::core::clone::Clone));
        }
    }

    if !bounds.is_empty() {
        input
            .generics
            .make_where_clause()
            .predicates
            .extend(bounds);
    }

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::injector::Bindable for #ident #ty_generics #where_clause {
            fn bindings(&mut self) -> ::std::vec::Vec<::injector::FieldBinding<'_>> {
                ::std::vec![#(#entries),*]
            }
        }
    })
}

/// Reads the single `injection`/`infection` attribute of a field, if any.
fn field_tag(attrs: &[Attribute]) -> syn::Result<Option<Tag>> {
    let mut found: Option<Tag> = None;

    for attr in attrs {
        let Some(direction) = Direction::from_attr(attr) else {
            continue;
        };
        let key = tag_key(attr, direction)?;

        if let Some(previous) = &found {
            let message = if previous.direction == direction {
                format!("duplicate `{}` attribute", direction.name())
            } else {
                "a field cannot carry both `injection` and `infection`".to_string()
            };
            return Err(syn::Error::new_spanned(attr, message));
        }
        found = Some(Tag { direction, key });
    }

    Ok(found)
}

/// Accepts `#[tag = "key"]` and `#[tag("key")]`.
fn tag_key(attr: &Attribute, direction: Direction) -> syn::Result<LitStr> {
    let name = direction.name();
    let key = match &attr.meta {
        Meta::NameValue(meta) => match &meta.value {
            Expr::Lit(ExprLit {
                lit: Lit::Str(lit), ..
            }) => lit.clone(),
            other => {
                return Err(syn::Error::new_spanned(
                    other,
                    format!("`{name}` key must be a string literal"),
                ));
            }
        },
        Meta::List(_) => attr.parse_args::<LitStr>()?,
        Meta::Path(_) => {
            return Err(syn::Error::new_spanned(
                attr,
                format!("`{name}` needs a registry key, e.g. #[{name} = \"key\"]"),
            ));
        }
    };

    if key.value().is_empty() {
        return Err(syn::Error::new_spanned(
            &key,
            format!("`{name}` key must not be empty"),
        ));
    }
    Ok(key)
}

/// Inner type of an `Option<T>` field.
fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(path) = ty else {
        return None;
    };
    if path.qself.is_some() {
        return None;
    }
    let segment = path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first() {
        Some(GenericArgument::Type(inner)) if args.args.len() == 1 => Some(inner),
        _ => None,
    }
}

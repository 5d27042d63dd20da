//! A derive macro for implementing `bindery::Bind` and `bindery::BindField` on structs
//! with named fields.
use darling::{
    FromDeriveInput, FromField,
    util::{Flag, Ignored},
};
use proc_macro::TokenStream;
use quote::{quote, quote_spanned};
use syn::{DeriveInput, Ident, Type, parse_macro_input, spanned::Spanned};

const SKIP_MARKER: &str = "-";

#[derive(FromDeriveInput)]
struct BindInput {
    data: darling::ast::Data<Ignored, ParsedField>,
    generics: syn::Generics,
    ident: Ident,
}

// Nested meta for `#[bind(form = "...", uri = "...", flatten, skip)]`
#[derive(FromField)]
#[darling(attributes(bind))]
struct ParsedField {
    ident: Option<Ident>,
    ty: Type,
    vis: syn::Visibility,
    form: Option<String>,
    uri: Option<String>,
    flatten: Flag,
    skip: Flag,
}

impl ParsedField {
    fn validate(&self) -> Result<(), darling::Error> {
        if self.skip.is_present()
            && (self.flatten.is_present() || self.form.is_some() || self.uri.is_some())
        {
            return Err(self.error(
                "`skip` excludes the field from binding in every namespace, it can't be combined \
                with other `#[bind(..)]` options.",
            ));
        }
        let is_named = |annotation: &Option<String>| {
            annotation.is_some() && !is_skip_marker(annotation)
        };
        if self.flatten.is_present() && (is_named(&self.form) || is_named(&self.uri)) {
            return Err(self.error(
                "A flattened field is not looked up by key, its `form` and `uri` annotations can \
                only be `\"-\"`, to skip it in that namespace.",
            ));
        }
        Ok(())
    }

    fn error(&self, msg: &str) -> darling::Error {
        let e = darling::Error::custom(msg);
        match &self.ident {
            Some(ident) => e.with_span(ident),
            None => e,
        }
    }

    /// Whether the annotations exclude the field in every namespace.
    fn is_always_skipped(&self) -> bool {
        self.skip.is_present() || (is_skip_marker(&self.form) && is_skip_marker(&self.uri))
    }

    /// The statement binding this field, if the field is bound at all.
    fn binding_step(&self) -> Option<proc_macro2::TokenStream> {
        let ident = self.ident.as_ref()?;
        if self.is_always_skipped() {
            return None;
        }
        // Flattened members are reachable whatever the visibility of the field holding them.
        if !self.flatten.is_present() && !matches!(self.vis, syn::Visibility::Public(_)) {
            return None;
        }

        let name = ident.to_string();
        let form = annotation_tokens(&self.form);
        let uri = annotation_tokens(&self.uri);
        let walk = if self.flatten.is_present() {
            quote! { ::bindery::__private::embedded }
        } else {
            quote! { ::bindery::__private::field }
        };
        // Only the call is spanned on the field type, so that unsatisfied trait bounds point
        // at it. Everything else keeps the call-site span.
        let ty_span = self.ty.span();
        let args = quote! { &mut self.#ident, &__META, __source, __namespace };
        let call = quote_spanned! { ty_span => #walk(#args) };
        Some(quote! {
            {
                const __META: ::bindery::FieldMeta = ::bindery::FieldMeta::new(#name, #form, #uri);
                __is_set |= #call?;
            }
        })
    }
}

fn is_skip_marker(annotation: &Option<String>) -> bool {
    annotation
        .as_deref()
        .is_some_and(|a| a.split(',').next() == Some(SKIP_MARKER))
}

fn annotation_tokens(annotation: &Option<String>) -> proc_macro2::TokenStream {
    match annotation {
        Some(a) => quote! { ::core::option::Option::Some(#a) },
        None => quote! { ::core::option::Option::None },
    }
}

pub(super) fn derive_bind(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match _derive_bind(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.write_errors().into(),
    }
}

fn _derive_bind(input: DeriveInput) -> Result<proc_macro2::TokenStream, darling::Error> {
    let input = BindInput::from_derive_input(&input)?;
    reject_invalid_inputs(&input)?;

    let struct_ident = &input.ident;
    let fields = input
        .data
        .take_struct()
        // This should never panic, since we reject unsupported shapes earlier on.
        .expect("`Bind` can only be derived for structs with named fields.");

    let mut errors = darling::Error::accumulator();
    for field in fields.iter() {
        if let Err(e) = field.validate() {
            errors.push(e);
        }
    }
    errors.finish()?;

    let steps = fields.iter().filter_map(ParsedField::binding_step);

    Ok(quote! {
        #[automatically_derived]
        impl ::bindery::Bind for #struct_ident {
            fn bind_fields(
                &mut self,
                __source: &::bindery::SourceMap,
                __namespace: ::bindery::Namespace,
            ) -> ::core::result::Result<bool, ::bindery::BindError> {
                #[allow(unused_mut)]
                let mut __is_set = false;
                #(#steps)*
                ::core::result::Result::Ok(__is_set)
            }
        }

        #[automatically_derived]
        impl ::bindery::BindField for #struct_ident {
            fn bind_field(
                &mut self,
                _key: &str,
                source: &::bindery::SourceMap,
                namespace: ::bindery::Namespace,
            ) -> ::core::result::Result<bool, ::bindery::BindError> {
                ::bindery::Bind::bind_fields(self, source, namespace)
            }
        }
    })
}

fn reject_invalid_inputs(input: &BindInput) -> Result<(), darling::Error> {
    let struct_ident = &input.ident;
    let has_named_fields = match &input.data {
        darling::ast::Data::Struct(fields) => matches!(fields.style, darling::ast::Style::Struct),
        darling::ast::Data::Enum(_) => false,
    };
    if !has_named_fields {
        return Err(darling::Error::custom(format!(
            "`#[derive(Bind)]` can only be applied to structs with named fields, `{struct_ident}` is not one.",
        ))
        .with_span(struct_ident));
    }
    // Reject structs with generic type parameters.
    if input.generics.type_params().next().is_some() {
        return Err(darling::Error::custom(format!(
            "`#[derive(Bind)]` can't be applied to structs with generic type parameters, such as `{struct_ident}`. \
            Use concrete types, or implement `bindery::Bind` for `{struct_ident}` by hand.",
        ))
        .with_span(struct_ident));
    }
    // Bound values are always owned, there is nothing a lifetime could borrow from.
    if input.generics.lifetimes().next().is_some() {
        return Err(darling::Error::custom(format!(
            "`#[derive(Bind)]` can't be applied to structs with generic lifetimes, such as `{struct_ident}`. \
            Use owned types (e.g. `String` instead of `&str`) for its fields.",
        ))
        .with_span(struct_ident));
    }
    if input.generics.const_params().next().is_some() {
        return Err(darling::Error::custom(format!(
            "`#[derive(Bind)]` can't be applied to structs with const generic parameters, such as `{struct_ident}`.",
        ))
        .with_span(struct_ident));
    }
    Ok(())
}

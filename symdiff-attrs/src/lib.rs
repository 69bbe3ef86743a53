mod error_kind;

use error_kind::ErrorKindTarget;
use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;

/// Derives the [`ErrorKind`] trait for the given struct.
///
/// The information of the error is customized using the `error` attribute:
/// ```ignore
/// use symdiff_attrs::ErrorKind;
/// use symdiff_error::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(
///     message = format!("unknown function `{}`", self.name),
///     labels = ["this function"],
///     help = "the supported functions are `sin`, `cos`, `tan`, `ln`, `log` and `exp`",
/// )]
/// pub struct UnknownFunction {
///     pub name: String,
/// }
/// ```
///
/// The following tags are available:
///
/// | Tag       | Description                                                                     |
/// | --------- | ------------------------------------------------------------------------------- |
/// | `message` | **Required.** The message displayed at the top of the error.                    |
/// | `labels`  | An array of label texts, one per span of the error, in the same order.         |
/// | `help`    | Optional help text for the error, describing what the user can do to fix it.    |
///
/// Each tag accepts an expression that is evaluated inside a method of the struct, so `self` and
/// its fields can be used in the expression.
///
/// The derived implementation refers to the trait as `ErrorKind` (the trait must be in scope),
/// and to the `ariadne` and `symdiff_error` crates by name.
///
/// [`ErrorKind`]: https://docs.rs/symdiff-error
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let target = parse_macro_input!(item as ErrorKindTarget);
    let name = &target.name;
    let (impl_generics, ty_generics, where_clause) = target.generics.split_for_impl();
    quote! {
        impl #impl_generics ErrorKind for #name #ty_generics #where_clause {
            fn as_any(&self) -> &dyn std::any::Any {
                self
            }

            #target
        }
    }.into()
}

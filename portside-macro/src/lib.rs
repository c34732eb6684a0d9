use proc_macro::TokenStream;

mod injectable;

/// Derive macro for populating a struct's marked fields from the DI container
///
/// Fields carrying an `#[inject("serviceName")]` marker become injection
/// points; everything else is left alone. Marked fields must be
/// `Option<Arc<T>>` so an unresolved or skipped field stays `None`.
///
/// # Example
/// ```ignore
/// use portside::prelude::*;
///
/// #[derive(Default, Injectable)]
/// pub struct AppServices {
///     #[inject("accountService")]
///     accounts: Option<Arc<AccountService>>,
/// }
/// ```
#[proc_macro_derive(Injectable, attributes(inject))]
pub fn derive_injectable(input: TokenStream) -> TokenStream {
    injectable::derive_injectable(input)
}

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, LitStr};

pub fn derive_injectable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let expanded = generate_injectable_impl(&input);
    TokenStream::from(expanded)
}

fn generate_injectable_impl(input: &DeriveInput) -> TokenStream2 {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    // Only structs with named fields have somewhere to hang a marker
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => panic!("#[derive(Injectable)] only supports structs with named fields"),
        },
        _ => panic!("#[derive(Injectable)] can only be applied to structs"),
    };

    // One injection point per marked field, in declaration order
    let points = fields.iter().filter_map(|field| {
        let marker = field
            .attrs
            .iter()
            .find(|attr| attr.path().is_ident("inject"))?;
        let service: LitStr = marker
            .parse_args()
            .expect("#[inject] expects a service name, e.g. #[inject(\"accountService\")]");
        let field_name = field.ident.as_ref()?;
        let field_label = LitStr::new(&field_name.to_string(), field_name.span());

        Some(quote! {
            ::portside::di::InjectionPoint::new(#field_label, #service, &mut self.#field_name)
        })
    });

    quote! {
        impl #impl_generics ::portside::di::Injectable for #struct_name #ty_generics #where_clause {
            fn injection_points(&mut self) -> ::std::vec::Vec<::portside::di::InjectionPoint<'_>> {
                vec![
                    #(#points),*
                ]
            }
        }
    }
}

//! Expansion of `curry!`.
//!
//! Accepted forms are a closure, `curry!(|a: T, b: U| body)`, or a path with
//! a literal arity, `curry!(path::to::function, 2)`. Both expand to a
//! `Curried::fixed` value whose adapter unpacks the argument slice by index:
//!
//! ```text
//! let __curlew_function = <closure or path>;
//! ::curlew::compose::Curried::fixed(ARITY, move |__curlew_arguments: &[_]| {
//!     __curlew_function(Clone::clone(&__curlew_arguments[0]), ...)
//! })
//! ```
//!
//! `Curried` only invokes the adapter once exactly `ARITY` arguments are
//! bound, so the indices stay in bounds.

use proc_macro::TokenStream;
use proc_macro2::{Literal, TokenStream as TokenStream2};
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::{ExprClosure, LitInt, Path, Token, parse_macro_input};

enum CurryTarget {
    Closure(ExprClosure),
    Path { path: Path, arity: LitInt },
}

impl Parse for CurryTarget {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.peek(Token![|]) || input.peek(Token![move]) || input.peek(Token![||]) {
            let closure: ExprClosure = input.parse()?;
            let _: Option<Token![,]> = input.parse()?;
            return Ok(Self::Closure(closure));
        }

        if input.is_empty() {
            return Err(input.error("curry! expects a closure or `path, arity`"));
        }

        let path: Path = input.parse()?;
        if input.is_empty() {
            return Err(syn::Error::new_spanned(
                path,
                "curry! cannot see the arity of a named function; write curry!(name, arity)",
            ));
        }
        let _: Token![,] = input.parse()?;
        let arity: LitInt = input.parse()?;
        let _: Option<Token![,]> = input.parse()?;
        Ok(Self::Path { path, arity })
    }
}

pub fn curry_impl(input: TokenStream) -> TokenStream {
    let target = parse_macro_input!(input as CurryTarget);

    let expanded = match target {
        CurryTarget::Closure(closure) => generate_curry_from_closure(&closure),
        CurryTarget::Path { path, arity } => match arity.base10_parse::<usize>() {
            Ok(0) => syn::Error::new_spanned(arity, "curry! arity must be at least 1").to_compile_error(),
            Ok(count) => generate_curried_value(count, &quote! { #path }),
            Err(error) => error.to_compile_error(),
        },
    };

    TokenStream::from(expanded)
}

fn generate_curry_from_closure(closure: &ExprClosure) -> TokenStream2 {
    let argument_count = closure.inputs.len();

    if argument_count == 0 {
        return syn::Error::new_spanned(closure, "curry! needs a closure that takes arguments")
            .to_compile_error();
    }

    generate_curried_value(argument_count, &quote! { #closure })
}

fn generate_curried_value(argument_count: usize, function_expression: &TokenStream2) -> TokenStream2 {
    let arity = Literal::usize_unsuffixed(argument_count);

    let forwarded_arguments: Vec<_> = (0..argument_count)
        .map(|index| {
            let index = Literal::usize_unsuffixed(index);
            quote! { ::core::clone::Clone::clone(&__curlew_arguments[#index]) }
        })
        .collect();

    quote! {
        {
            let __curlew_function = #function_expression;
            ::curlew::compose::Curried::fixed(
                {
                    const ARITY: ::core::num::NonZeroUsize =
                        match ::core::num::NonZeroUsize::new(#arity) {
                            ::core::option::Option::Some(arity) => arity,
                            ::core::option::Option::None => panic!("curry! arity must be non-zero"),
                        };
                    ARITY
                },
                move |__curlew_arguments: &[_]| {
                    __curlew_function(#(#forwarded_arguments),*)
                },
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1)]
    #[case(3)]
    #[case(6)]
    fn generated_code_forwards_every_argument(#[case] arity: usize) {
        let generated = generate_curried_value(arity, &quote! { function }).to_string();

        assert_eq!(generated.matches("__curlew_arguments [").count(), arity);
        assert!(generated.contains("Curried :: fixed"));
    }

    #[rstest]
    #[case(quote! { |a: i32, b: i32| a + b }, true)]
    #[case(quote! { move |x: u8| x }, true)]
    #[case(quote! { std::cmp::max, 2 }, false)]
    #[case(quote! { max, 2, }, false)]
    fn both_input_forms_parse(#[case] tokens: TokenStream2, #[case] is_closure: bool) {
        let target: CurryTarget = syn::parse2(tokens).unwrap();
        assert_eq!(matches!(target, CurryTarget::Closure(_)), is_closure);
    }

    #[rstest]
    #[case(quote! {})]
    #[case(quote! { max })]
    #[case(quote! { max, arity })]
    fn malformed_input_is_rejected(#[case] tokens: TokenStream2) {
        assert!(syn::parse2::<CurryTarget>(tokens).is_err());
    }

    #[rstest]
    fn closure_without_arguments_is_rejected() {
        let closure: ExprClosure = syn::parse_quote! { || 42 };
        let generated = generate_curry_from_closure(&closure).to_string();

        assert!(generated.contains("compile_error"));
    }
}

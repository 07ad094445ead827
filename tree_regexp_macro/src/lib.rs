//! Crate with proc_macros for [tree_regexp](https://crates.io/crates/tree_regexp). Not usable as a standalone crate.

use proc_macro::TokenStream as TokenStream1;
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::parse::{Parse, ParseStream};

mod error;
mod group_scan;
mod str_lit;

pub(crate) use error::*;
pub(crate) use str_lit::*;

/// The pattern of a `tree_regexp!` invocation
struct Pattern(StrLit);

impl Parse for Pattern {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.is_empty() {
            let msg = "Missing parameter: pattern";
            return Err(syn::Error::new(Span::call_site(), msg));
        }
        let pattern = input.parse::<StrLit>()?;
        // allow a trailing comma, but nothing else
        if input.peek(syn::Token![,]) {
            input.parse::<syn::Token![,]>()?;
        }
        if !input.is_empty() {
            let msg = "tree_regexp! takes exactly one parameter: the pattern";
            return Err(input.error(msg));
        }
        Ok(Pattern(pattern))
    }
}

#[proc_macro]
pub fn tree_regexp(input: TokenStream1) -> TokenStream1 {
    let input = syn::parse_macro_input!(input as Pattern);
    match tree_regexp_internal(input.0) {
        Ok(res) => res.into(),
        Err(err) => err.into(),
    }
}

fn tree_regexp_internal(pattern: StrLit) -> Result<TokenStream> {
    check_pattern(&pattern)?;

    let text = pattern.text();
    Ok(quote!({
        ::tree_regexp::lazy_static::lazy_static! {
            static ref TREE_REGEXP: ::tree_regexp::TreeRegexp = match ::tree_regexp::TreeRegexp::new(#text) {
                ::core::result::Result::Ok(tree_regexp) => tree_regexp,
                ::core::result::Result::Err(err) => ::core::panic!("{}", err),
            };
        }
        &*TREE_REGEXP
    }))
}

/// Checks that `TreeRegexp::new` will accept the pattern, pointing at the offending part of the literal if it won't:
/// the pattern has to be a valid regex, its groups have to be well-formed, and the scanned groups have to be the ones
/// that the regex engine sees.
fn check_pattern(pattern: &StrLit) -> Result<()> {
    let text = pattern.text();
    let hir = match regex_syntax::Parser::new().parse(text) {
        Ok(hir) => hir,
        Err(err) => return Err(regex_error(pattern, err)),
    };

    let scanned = match group_scan::count_groups(text) {
        Ok(count) => count,
        Err(failure) => {
            let end = text[failure.offset..]
                .chars()
                .next()
                .map_or(failure.offset, |c| failure.offset + c.len_utf8());
            return Err(pattern.error(failure.message, failure.offset..end));
        }
    };
    let compiled = hir.properties().explicit_captures_len();
    if scanned != compiled {
        let msg = format!(
            "found {} capture groups in the pattern, but the regex engine reports {}",
            scanned, compiled
        );
        return Err(pattern.error(&msg, 0..text.len()));
    }
    Ok(())
}

fn regex_error(pattern: &StrLit, err: regex_syntax::Error) -> Error {
    let located = match &err {
        regex_syntax::Error::Parse(e) => Some((e.kind().to_string(), e.span())),
        regex_syntax::Error::Translate(e) => Some((e.kind().to_string(), e.span())),
        _ => None,
    };
    let Some((message, span)) = located else {
        return Error::new(pattern.span(), format!("invalid pattern: {}", err));
    };
    pattern.error(&message, span.start.offset..span.end.offset)
}

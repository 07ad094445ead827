use std::fmt::Write;

use proc_macro2::{Literal, Span};
use syn::{parse::ParseBuffer, LitStr};
use unicode_width::UnicodeWidthStr;

use crate::Error;

/// A wrapper around a string literal
pub struct StrLit {
    /// The content of the string, with all escapes resolved
    text: String,
    /// Offset of the content in the source code of the literal, if the content appears there verbatim. This is the
    /// case for raw strings and for strings without escapes.
    content_offset: Option<usize>,
    span_provider: Literal,
}

impl StrLit {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Generates a crate::Error with the given message that points at `range` (a byte range in `text`).
    pub fn error(&self, message: &str, range: std::ops::Range<usize>) -> Error {
        // subspan allows pointing at a span that is not the whole string, but it only works in nightly
        let span = self.content_offset.and_then(|offset| {
            self.span_provider
                .subspan(offset + range.start..offset + range.end)
        });
        if let Some(span) = span {
            return Error::new(span, message);
        }

        // Workaround for stable: print a copy of the entire pattern into the error message
        // and manually underline the desired section.
        let mut m = String::new();
        writeln!(m, "{}:", message).unwrap();

        let text_prefix = "At ";
        writeln!(m, "{}{}", text_prefix, self.text).unwrap();

        // Add the line with the error squiggles
        let start = text_prefix.width() + self.text[..range.start].width();
        let len = self.text[range].width().max(1);
        m.extend(std::iter::repeat(' ').take(start));
        m.extend(std::iter::repeat('^').take(len));

        Error::new(self.span(), m)
    }

    pub fn span(&self) -> Span {
        self.span_provider.span()
    }
}

impl syn::parse::Parse for StrLit {
    fn parse(input: &ParseBuffer<'_>) -> syn::Result<Self> {
        let lit: LitStr = input.parse()?;
        let text = lit.value();

        // the full string with any ", r", r#", ... prefix and suffix
        let source = lit.token().to_string();
        let prefix_length = source.find('"').map(|i| i + 1);
        let content_offset = prefix_length.filter(|&start| {
            let end = start + text.len();
            source.get(start..end) == Some(text.as_str())
        });

        // lit has to be parsed as `syn::LitStr` to access the content as a string. But in order to
        // call subspan, we need it as a `proc_macro2::Literal`.
        let mut span_provider = lit.token();
        span_provider.set_span(lit.span());

        Ok(Self {
            text,
            content_offset,
            span_provider,
        })
    }
}

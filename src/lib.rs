#![deny(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
    rustdoc::missing_crate_level_docs,
    rustdoc::invalid_codeblock_attributes,
    rustdoc::bare_urls
)]

#![doc = include_str!("../Readme.md")]
//! # How the Tree is Built
//!
//! Regex engines number their capture groups by the position of the opening parenthesis, which is exactly a pre-order
//! traversal of the nesting of the groups:
//! ```text
//! ( a ( b ) ( c ( d ) ) ) ( e )
//! 1     2     3   4       5
//! ```
//! So when a [`TreeRegexp`] is created, the pattern is scanned once to find the nesting of the capture groups (the
//! [`GroupBuilder`] tree). The scanner only looks at the characters that affect groups: parentheses, `?` right after
//! an opening parenthesis, character classes (`[...]`, in which parentheses are just text), backslash escapes and,
//! once verbose mode is turned on with `(?x)`, `#` comments. Groups starting with `?` are not capture groups, except
//! for named groups like `(?P<name>...)`.
//!
//! On every match, the flat list of captures reported by the regex engine is then zipped back onto that tree to form
//! the [`Group`] tree. A group that did not participate in the match still takes up its slot in the list, so the shape
//! of the tree is always the same, no matter which groups matched.
//!
//! # Compile-Time Patterns
//!
//! Patterns that are known at compile time can use the [`tree_regexp!`] macro, which checks the pattern during
//! compilation and only compiles it once at runtime:
//! ```
//! use tree_regexp::tree_regexp;
//!
//! let group = tree_regexp!(r"^(\d+)-(\d+)$").match_str("10-20").unwrap();
//! assert_eq!(group.values(), [Some("10"), Some("20")]);
//! ```
//! Errors in the pattern are reported as compiler errors:
//! ```compile_fail
//! # use tree_regexp::tree_regexp;
//! let tree_regexp = tree_regexp!(r"^(\d+-(\d+)$");
//! ```
//! ```text
//! error: unclosed group:
//!        At ^(\d+-(\d+)$
//!            ^
//! ```

mod macros;
pub use macros::*;

mod error;
pub use error::*;

mod group;
pub use group::*;

mod group_builder;
pub use group_builder::*;

mod matcher;
mod scanner;

mod tree_regexp;
pub use crate::tree_regexp::*;

#[doc(hidden)]
pub use lazy_static;
#[doc(hidden)]
pub use regex;

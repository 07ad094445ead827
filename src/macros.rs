//! A file with the macro re-exports to separate the documentation from the crate root docs

/// A Macro to compile a [`TreeRegexp`](crate::TreeRegexp) from a pattern that is known at compile time.
///
/// ## Signature
/// ```ignore
/// tree_regexp!(pattern: <literal>) -> &'static TreeRegexp
/// ```
///
/// ## Parameters
/// * `pattern`: A literal string. No const or static allowed, just like with [`format!()`](std::format). Raw strings
///   (`r"..."`) are recommended to avoid having to escape every backslash twice.
///
/// ## Details
/// The pattern is checked during compilation, so any unbalanced parentheses, unclosed character classes or other
/// invalid regex syntax are reported as compiler errors that point into the pattern.
///
/// The macro returns a reference to a `TreeRegexp` in a `static` variable, so the pattern is only compiled once, no
/// matter how often the macro invocation is evaluated. The `TreeRegexp` uses the default [`Flags`](crate::Flags).
/// Flags can still be set inline in the pattern, e.g. `(?i)` for case insensitivity.
///
/// ## Examples
/// ```
/// use tree_regexp::tree_regexp;
///
/// fn parse_version(input: &str) -> Option<(u32, u32, Option<u32>)> {
///     let group = tree_regexp!(r"^(\d+)\.(\d+)(?:\.(\d+))?$").match_str(input)?;
///     let major = group.get(0)?.value()?.parse().ok()?;
///     let minor = group.get(1)?.value()?.parse().ok()?;
///     let patch = match group.get(2)?.value() {
///         Some(patch) => Some(patch.parse().ok()?),
///         None => None,
///     };
///     Some((major, minor, patch))
/// }
///
/// assert_eq!(parse_version("1.2.3"), Some((1, 2, Some(3))));
/// assert_eq!(parse_version("1.2"), Some((1, 2, None)));
/// assert_eq!(parse_version("1"), None);
/// ```
///
/// Case insensitivity through an inline flag:
/// ```
/// # use tree_regexp::tree_regexp;
/// let group = tree_regexp!(r"(?i)^(HELLO) (world)$").match_str("hello WORLD").unwrap();
/// assert_eq!(group.values(), [Some("hello"), Some("WORLD")]);
/// ```
pub use tree_regexp_macro::tree_regexp;

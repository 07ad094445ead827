use regex::{Regex, RegexBuilder};

use crate::{matcher, scanner, Error, Group, GroupBuilder};

/// A compiled regex that returns its captures as a tree.
///
/// The capture groups of a regular regex are reported as a flat list, even though they can be nested inside of each
/// other. A `TreeRegexp` scans the pattern once for the structure of its capture groups (see [`GroupBuilder`]) and
/// uses that structure to turn every match into a [`Group`] tree.
///
/// ```
/// use tree_regexp::TreeRegexp;
///
/// let tree_regexp = TreeRegexp::new(r"^from \((\d+),(\d+)\) to \((\d+),(\d+)\)$").unwrap();
/// let group = tree_regexp.match_str("from (1,2) to (3,4)").unwrap();
/// assert_eq!(group.num_children(), 4);
///
/// // nesting the coordinates makes them show up as pairs
/// let tree_regexp = TreeRegexp::new(r"^from \(((\d+),(\d+))\) to \(((\d+),(\d+))\)$").unwrap();
/// let group = tree_regexp.match_str("from (1,2) to (3,4)").unwrap();
/// assert_eq!(group.num_children(), 2);
/// assert_eq!(group.children()[0].value(), Some("1,2"));
/// assert_eq!(group.children()[0].values(), [Some("1"), Some("2")]);
/// assert_eq!(group.children()[1].values(), [Some("3"), Some("4")]);
/// ```
///
/// A `TreeRegexp` is immutable after construction and can be shared between threads. Every match creates a new,
/// independent `Group` tree.
#[derive(Debug, Clone)]
pub struct TreeRegexp {
    regex: Regex,
    group_builder: GroupBuilder,
}

impl TreeRegexp {
    /// Compiles a pattern with the default [`Flags`].
    ///
    /// Fails if the groups of the pattern are malformed, or if the pattern is not a valid regex.
    ///
    /// ```
    /// # use tree_regexp::{Error, TreeRegexp};
    /// assert!(TreeRegexp::new(r"(a(?:b)?)(c)").is_ok());
    ///
    /// let err = TreeRegexp::new(r"(a(b)").unwrap_err();
    /// assert!(matches!(err, Error::MalformedPattern(_)));
    ///
    /// let err = TreeRegexp::new(r"a{2,1}").unwrap_err();
    /// assert!(matches!(err, Error::PatternCompile(_)));
    /// ```
    pub fn new(pattern: &str) -> Result<Self, Error> {
        Self::builder(pattern).build()
    }

    /// Creates a [`TreeRegexpBuilder`] to compile the pattern with custom [`Flags`].
    ///
    /// ```
    /// # use tree_regexp::TreeRegexp;
    /// let tree_regexp = TreeRegexp::builder("HELLO").case_insensitive(true).build().unwrap();
    /// assert_eq!(tree_regexp.match_str("hello").unwrap().value(), Some("hello"));
    /// ```
    pub fn builder(pattern: &str) -> TreeRegexpBuilder {
        TreeRegexpBuilder {
            pattern: pattern.to_owned(),
            flags: Flags::default(),
        }
    }

    /// Creates a `TreeRegexp` from an already compiled [`Regex`]. The flags of the regex are kept as they are.
    pub fn from_regex(regex: Regex) -> Result<Self, Error> {
        let group_builder = scanner::scan(regex.as_str())?;
        Self::assemble(regex, group_builder)
    }

    fn assemble(regex: Regex, group_builder: GroupBuilder) -> Result<Self, Error> {
        let scanned = group_builder.capture_count();
        let compiled = regex.captures_len() - 1; // group 0 is the entire match
        if scanned != compiled {
            return Err(Error::GroupCountMismatch { scanned, compiled });
        }
        Ok(Self {
            regex,
            group_builder,
        })
    }

    /// Matches the input against the pattern.
    ///
    /// Returns the tree of matched values, or `None` if the input does not match.
    ///
    /// ```
    /// # use tree_regexp::TreeRegexp;
    /// let tree_regexp = TreeRegexp::new(r"(a(?:b)?)(c)").unwrap();
    /// let group = tree_regexp.match_str("ac").unwrap();
    /// assert_eq!(group.value(), Some("ac"));
    /// assert_eq!(group.children()[0].value(), Some("a"));
    /// assert_eq!(group.children()[1].value(), Some("c"));
    ///
    /// assert!(tree_regexp.match_str("xyz").is_none());
    /// ```
    pub fn match_str<'input>(&self, input: &'input str) -> Option<Group<'input>> {
        let captures = matcher::captures(&self.regex, input)?;
        debug_assert_eq!(captures.len(), self.group_builder.capture_count());
        Some(self.group_builder.build(&captures))
    }

    /// Same as [`match_str`](Self::match_str), but for input that is not yet known to be text.
    ///
    /// Returns [`Error::InvalidInput`] if the input is not valid UTF-8. An input that does not match is still
    /// `Ok(None)`.
    ///
    /// ```
    /// # use tree_regexp::{Error, TreeRegexp};
    /// let tree_regexp = TreeRegexp::new(r"(\w+)").unwrap();
    /// let group = tree_regexp.match_bytes(b"hi").unwrap().unwrap();
    /// assert_eq!(group.value(), Some("hi"));
    ///
    /// assert!(tree_regexp.match_bytes(b"!!").unwrap().is_none());
    /// assert!(matches!(tree_regexp.match_bytes(b"\xff"), Err(Error::InvalidInput(_))));
    /// ```
    pub fn match_bytes<'input>(&self, input: &'input [u8]) -> Result<Option<Group<'input>>, Error> {
        let input = std::str::from_utf8(input)?;
        Ok(self.match_str(input))
    }

    /// Returns `true` if the input matches the pattern, without building a [`Group`] tree.
    pub fn is_match(&self, input: &str) -> bool {
        self.regex.is_match(input)
    }

    /// The structure of the capture groups in the pattern.
    pub fn group_builder(&self) -> &GroupBuilder {
        &self.group_builder
    }

    /// The compiled regex.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// The pattern that this `TreeRegexp` was compiled from.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl std::str::FromStr for TreeRegexp {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl std::fmt::Display for TreeRegexp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The flags that a [`TreeRegexp`] can be compiled with. All flags are off by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct Flags {
    /// Letters match both upper and lower case (`i`).
    pub case_insensitive: bool,
    /// `^` and `$` match at the start and end of every line instead of only the whole input (`m`).
    pub multi_line: bool,
    /// `.` also matches `\n` (`s`).
    pub dot_matches_new_line: bool,
}

/// A builder to compile a [`TreeRegexp`] with custom [`Flags`]. Created by [`TreeRegexp::builder`].
#[derive(Debug, Clone)]
pub struct TreeRegexpBuilder {
    pattern: String,
    flags: Flags,
}

impl TreeRegexpBuilder {
    /// Sets the case-insensitive flag.
    pub fn case_insensitive(mut self, yes: bool) -> Self {
        self.flags.case_insensitive = yes;
        self
    }
    /// Sets the multi-line flag.
    pub fn multi_line(mut self, yes: bool) -> Self {
        self.flags.multi_line = yes;
        self
    }
    /// Sets the flag that allows `.` to match `\n`.
    pub fn dot_matches_new_line(mut self, yes: bool) -> Self {
        self.flags.dot_matches_new_line = yes;
        self
    }
    /// Replaces all flags at once.
    pub fn flags(mut self, flags: Flags) -> Self {
        self.flags = flags;
        self
    }

    /// Compiles the pattern.
    ///
    /// The groups of the pattern are scanned before handing it to the regex engine, so an unbalanced pattern is
    /// reported as [`Error::MalformedPattern`] rather than [`Error::PatternCompile`].
    pub fn build(&self) -> Result<TreeRegexp, Error> {
        let group_builder = scanner::scan(&self.pattern)?;
        let regex = RegexBuilder::new(&self.pattern)
            .case_insensitive(self.flags.case_insensitive)
            .multi_line(self.flags.multi_line)
            .dot_matches_new_line(self.flags.dot_matches_new_line)
            .build()?;
        TreeRegexp::assemble(regex, group_builder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags() {
        let tree_regexp = TreeRegexp::builder(r"^(b)$").build().unwrap();
        assert!(tree_regexp.match_str("a\nb").is_none());

        let mut flags = Flags::default();
        flags.multi_line = true;
        let tree_regexp = TreeRegexp::builder(r"^(b)$").flags(flags).build().unwrap();
        let group = tree_regexp.match_str("a\nb").unwrap();
        assert_eq!(group.children()[0].start(), Some(2));

        let tree_regexp = TreeRegexp::builder(r"a(.)c").build().unwrap();
        assert!(!tree_regexp.is_match("a\nc"));
        let tree_regexp = TreeRegexp::builder(r"a(.)c")
            .dot_matches_new_line(true)
            .build()
            .unwrap();
        let group = tree_regexp.match_str("a\nc").unwrap();
        assert_eq!(group.children()[0].value(), Some("\n"));
    }

    #[test]
    fn from_regex_keeps_flags() {
        let regex = RegexBuilder::new("(HELLO)")
            .case_insensitive(true)
            .build()
            .unwrap();
        let tree_regexp = TreeRegexp::from_regex(regex).unwrap();
        assert_eq!(tree_regexp.as_str(), "(HELLO)");
        assert_eq!(tree_regexp.group_builder().children()[0].source(), "HELLO");
        let group = tree_regexp.match_str("say hello").unwrap();
        assert_eq!(group.values(), [Some("hello")]);
        assert_eq!(group.start(), Some(4));
    }

    #[test]
    fn scan_errors_come_before_compile_errors() {
        let err = TreeRegexp::new("a)").unwrap_err();
        match err {
            Error::MalformedPattern(e) => assert_eq!(e.offset(), 1),
            e => panic!("unexpected error: {}", e),
        }
    }

    #[test]
    fn group_count_mismatch() {
        // a nested class is closed by the inner `]` for the scanner, but not for the regex crate
        let err = TreeRegexp::new(r"[a[b]()]").unwrap_err();
        assert!(
            matches!(err, Error::GroupCountMismatch { scanned: 1, compiled: 0 }),
            "{:?}",
            err
        );
    }

    #[test]
    fn send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TreeRegexp>();
        assert_send_sync::<Group<'static>>();
    }

    #[test]
    fn parse_from_str() {
        let tree_regexp: TreeRegexp = "(a)|(b)".parse().unwrap();
        assert_eq!(tree_regexp.to_string(), "(a)|(b)");
        let group = tree_regexp.match_str("b").unwrap();
        assert_eq!(group.values(), [None, Some("b")]);
    }
}

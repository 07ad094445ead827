//! Error types used by the crate. The most important one is [`Error`], which is returned when constructing a
//! [`TreeRegexp`](crate::TreeRegexp).

use std::error; // can't use `Error` directly because of naming conflict; can't alias because that would show up in docs
use std::fmt::{self, Display};

use unicode_width::UnicodeWidthStr;

/// The Error returned when a [`TreeRegexp`](crate::TreeRegexp) can't be constructed, or when the input to
/// [`match_bytes`](crate::TreeRegexp::match_bytes) is not text.
///
/// Note that an input that simply does not match the pattern is **not** an error. Matching returns `None` in that
/// case.
#[derive(Debug)]
pub enum Error {
    /// The group structure of the pattern could not be scanned, e.g. because of an unbalanced parenthesis.
    MalformedPattern(ScanError),
    /// The regex engine rejected the pattern. Contains the unchanged error of the engine.
    PatternCompile(regex::Error),
    /// The number of capture groups found while scanning the pattern differs from the number of groups reported by
    /// the regex engine.
    ///
    /// This indicates pattern syntax that is interpreted differently by the scanner and by the engine, like nested
    /// character classes that contain parentheses.
    GroupCountMismatch {
        /// Number of capture groups found by scanning the pattern
        scanned: usize,
        /// Number of capture groups reported by the regex engine (excluding the implicit group 0)
        compiled: usize,
    },
    /// The input could not be decoded as UTF-8.
    InvalidInput(std::str::Utf8Error),
}

impl error::Error for Error {
    /// Returns the underlying error, if there is one.
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::MalformedPattern(err) => Some(err),
            Error::PatternCompile(err) => Some(err),
            Error::GroupCountMismatch { .. } => None,
            Error::InvalidInput(err) => Some(err),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MalformedPattern(e) => e.fmt(f),
            Error::PatternCompile(e) => write!(f, "tree_regexp: Invalid regex: {}", e),
            Error::GroupCountMismatch { scanned, compiled } => write!(
                f,
                "tree_regexp: Found {} capture groups in the pattern, but the regex engine reports {}",
                scanned, compiled
            ),
            Error::InvalidInput(e) => write!(f, "tree_regexp: Input is not valid UTF-8: {}", e),
        }
    }
}

impl From<ScanError> for Error {
    fn from(err: ScanError) -> Self {
        Error::MalformedPattern(err)
    }
}

impl From<regex::Error> for Error {
    fn from(err: regex::Error) -> Self {
        Error::PatternCompile(err)
    }
}

impl From<std::str::Utf8Error> for Error {
    fn from(err: std::str::Utf8Error) -> Self {
        Error::InvalidInput(err)
    }
}

/// The reason why the group structure of a pattern could not be scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanErrorKind {
    /// A `)` without a matching `(`
    UnmatchedClose,
    /// A `(` that is never closed
    UnclosedGroup,
    /// A `[` that is never closed
    UnterminatedClass,
    /// A `\` at the very end of the pattern
    DanglingEscape,
}

impl Display for ScanErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ScanErrorKind::UnmatchedClose => "unopened group",
            ScanErrorKind::UnclosedGroup => "unclosed group",
            ScanErrorKind::UnterminatedClass => "unclosed character class",
            ScanErrorKind::DanglingEscape => "incomplete escape sequence",
        })
    }
}

/// Error returned by the group scanner if the parentheses, character classes or escapes in a pattern are not
/// balanced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanError {
    kind: ScanErrorKind,
    offset: usize,
    pattern: String,
}

impl ScanError {
    pub(crate) fn new(kind: ScanErrorKind, offset: usize, pattern: &str) -> Self {
        Self {
            kind,
            offset,
            pattern: pattern.to_owned(),
        }
    }

    /// What went wrong
    pub fn kind(&self) -> ScanErrorKind {
        self.kind
    }

    /// The byte offset in the pattern of the character that caused the error.
    ///
    /// For unclosed groups and classes, this is the offset of the opening `(` or `[`.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The pattern that was scanned
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // same layout as the errors of the regex crate: the pattern, followed by a line that points at the position
        let column = self.pattern[..self.offset].width();
        writeln!(f, "tree_regexp: Malformed pattern:")?;
        writeln!(f, "    {}", self.pattern)?;
        writeln!(f, "    {:>width$}", "^", width = column + 1)?;
        write!(f, "error: {}", self.kind)
    }
}

impl error::Error for ScanError {}

//! Adapter between the regex engine and the tree zipper.

use std::ops::Range;

use regex::Regex;

/// The text matched by a single group, together with its position in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Capture<'input> {
    text: &'input str,
    start: usize,
}

impl<'input> Capture<'input> {
    pub(crate) fn new(input: &'input str, span: Range<usize>) -> Self {
        Self {
            start: span.start,
            text: &input[span],
        }
    }

    pub(crate) fn text(&self) -> &'input str {
        self.text
    }

    pub(crate) fn span(&self) -> Range<usize> {
        self.start..self.start + self.text.len()
    }
}

/// The result of a successful match: the entire match, and one entry per capture group in the order of their opening
/// parenthesis. Groups that did not participate in the match are `None`.
#[derive(Debug)]
pub(crate) struct FlatCaptures<'input> {
    whole: Capture<'input>,
    groups: Vec<Option<Capture<'input>>>,
}

impl<'input> FlatCaptures<'input> {
    pub(crate) fn new(whole: Capture<'input>, groups: Vec<Option<Capture<'input>>>) -> Self {
        Self { whole, groups }
    }

    pub(crate) fn whole(&self) -> Capture<'input> {
        self.whole
    }

    /// The capture of the group at `index`, where 0 is the first explicit capture group.
    pub(crate) fn group(&self, index: usize) -> Option<Capture<'input>> {
        self.groups.get(index).copied().flatten()
    }

    pub(crate) fn len(&self) -> usize {
        self.groups.len()
    }
}

/// Runs `regex` on `input`. Returns `None` if the input does not match.
///
/// The capture locations are allocated per call, so a `Regex` can be shared between threads.
pub(crate) fn captures<'input>(regex: &Regex, input: &'input str) -> Option<FlatCaptures<'input>> {
    let captures = regex.captures(input)?;
    let mut groups = captures
        .iter()
        .map(|m| m.map(|m| Capture::new(input, m.range())));
    // group 0 always participates in a successful match
    let whole = groups.next().flatten()?;
    Some(FlatCaptures::new(whole, groups.collect()))
}

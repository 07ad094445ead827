use std::ops::Range;

use crate::matcher::Capture;

/// The values matched by a pattern, arranged in a tree that has the same shape as the
/// [`GroupBuilder`](crate::GroupBuilder) tree of the pattern.
///
/// Returned by [`TreeRegexp::match_str`](crate::TreeRegexp::match_str). The root is the entire match, its children are
/// the top-level capture groups, and so on.
///
/// ## Groups that did not participate
///
/// Capture groups that are optional, like `(x)?`, or part of an alternation, like `(x)|y`, might not match any text
/// at all (or as the regex crate calls it: "did not participate in the match"). Their [`value()`](Self::value) is
/// `None`, which is different from an empty match (`Some("")`). The group still has all of its children, which
/// usually didn't participate either.
///
/// ```
/// # use tree_regexp::TreeRegexp;
/// let tree_regexp = TreeRegexp::new(r"^(\d+)(px|em)?( (\d+)x)?$").unwrap();
///
/// let group = tree_regexp.match_str("12").unwrap();
/// assert_eq!(group.value(), Some("12"));
/// assert_eq!(group.num_children(), 3);
/// assert_eq!(group.children()[0].value(), Some("12"));
/// assert_eq!(group.children()[1].value(), None);
///
/// let repeat = &group.children()[2];
/// assert_eq!(repeat.value(), None);
/// assert_eq!(repeat.num_children(), 1); // (\d+) is still there
/// assert_eq!(repeat.children()[0].value(), None);
/// ```
///
/// ## Lifetime Parameter
/// The lifetime parameter (`'input`) is the lifetime of the input string that was matched. All values borrow from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group<'input> {
    value: Option<&'input str>,
    span: Option<Range<usize>>,
    children: Vec<Group<'input>>,
}

impl<'input> Group<'input> {
    pub(crate) fn new(capture: Option<Capture<'input>>, children: Vec<Group<'input>>) -> Self {
        Self {
            value: capture.map(|c| c.text()),
            span: capture.map(|c| c.span()),
            children,
        }
    }

    /// The text matched by this group, or `None` if the group did not participate in the match.
    pub fn value(&self) -> Option<&'input str> {
        self.value
    }

    /// The byte offset in the input where [`value()`](Self::value) starts.
    pub fn start(&self) -> Option<usize> {
        self.span.as_ref().map(|span| span.start)
    }

    /// The byte offset in the input where [`value()`](Self::value) ends.
    pub fn end(&self) -> Option<usize> {
        self.span.as_ref().map(|span| span.end)
    }

    /// The byte range of [`value()`](Self::value) in the input.
    pub fn span(&self) -> Option<Range<usize>> {
        self.span.clone()
    }

    /// The groups directly inside of this group.
    pub fn children(&self) -> &[Group<'input>] {
        &self.children
    }

    /// Returns the number of children, i.e. the number of capture groups directly inside of this group in the
    /// pattern. This does not depend on whether the children participated in the match.
    pub fn num_children(&self) -> usize {
        self.children.len()
    }

    /// Returns the child at the given index, or `None` if there is no such child.
    pub fn get(&self, index: usize) -> Option<&Group<'input>> {
        self.children.get(index)
    }

    /// The values that this group contributes as arguments: its own value if it has no children, otherwise the values
    /// of its children.
    ///
    /// ```
    /// # use tree_regexp::TreeRegexp;
    /// let tree_regexp = TreeRegexp::new(r"(\d+),(\d+)|(origin)").unwrap();
    /// let group = tree_regexp.match_str("3,4").unwrap();
    /// assert_eq!(group.values(), [Some("3"), Some("4"), None]);
    ///
    /// let first = &group.children()[0];
    /// assert_eq!(first.values(), [Some("3")]);
    /// ```
    pub fn values(&self) -> Vec<Option<&'input str>> {
        if self.children.is_empty() {
            vec![self.value]
        } else {
            self.children.iter().map(|child| child.value).collect()
        }
    }
}

impl std::fmt::Display for Group<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.value.unwrap_or_default())
    }
}

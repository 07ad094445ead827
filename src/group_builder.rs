use std::ops::Range;

use crate::{matcher::FlatCaptures, Group};

/// The structure of the capture groups in a pattern, arranged in a tree that mirrors their nesting.
///
/// This is created once when constructing a [`TreeRegexp`](crate::TreeRegexp) and accessible through
/// [`TreeRegexp::group_builder`](crate::TreeRegexp::group_builder). The root of the tree is an implicit group that
/// spans the entire pattern. Its children are the top-level capture groups.
///
/// Non-capturing groups like `(?:...)` do not show up in the tree. Any capture groups inside of them are attached to
/// the next capture group around them instead.
///
/// ```
/// # use tree_regexp::TreeRegexp;
/// let tree_regexp = TreeRegexp::new(r"(\d+) (?:in (\w+(s)?))?").unwrap();
/// let root = tree_regexp.group_builder();
/// assert_eq!(root.source(), r"(\d+) (?:in (\w+(s)?))?");
///
/// let sources: Vec<&str> = root.children().iter().map(|g| g.source()).collect();
/// assert_eq!(sources, [r"\d+", r"\w+(s)?"]);
/// assert_eq!(root.children()[1].children()[0].source(), "s");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupBuilder {
    source: String,
    span: Range<usize>,
    name: Option<String>,
    children: Vec<GroupBuilder>,
}

impl GroupBuilder {
    pub(crate) fn new(
        pattern: &str,
        span: Range<usize>,
        name: Option<String>,
        children: Vec<GroupBuilder>,
    ) -> Self {
        Self {
            source: pattern[span.clone()].to_owned(),
            span,
            name,
            children,
        }
    }

    /// The part of the pattern between the parentheses of this group.
    ///
    /// For the root, this is the entire pattern.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The byte range of [`source()`](Self::source) in the pattern.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// The name of the group, if it was written as `(?P<name>...)` or `(?<name>...)`.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The capture groups directly inside of this group, in the order of their opening parenthesis.
    pub fn children(&self) -> &[GroupBuilder] {
        &self.children
    }

    /// The number of capture groups inside of this group, at any depth.
    pub fn capture_count(&self) -> usize {
        self.children
            .iter()
            .map(|child| 1 + child.capture_count())
            .sum()
    }

    /// Iterates over all capture groups inside of this group in pre-order, which is the order in which the regex
    /// engine numbers them.
    pub fn iter(&self) -> impl Iterator<Item = &GroupBuilder> + '_ {
        self.children
            .iter()
            .flat_map(|child| std::iter::once(child).chain(child.iter_boxed()))
    }

    // recursive `impl Trait` types can't be named, so the recursion goes through a trait object
    fn iter_boxed(&self) -> Box<dyn Iterator<Item = &GroupBuilder> + '_> {
        Box::new(self.iter())
    }

    /// Combines this tree with the result of a match into a tree of matched values.
    ///
    /// `self` is treated as the root: its value is the entire match, and its descendants take the flat captures in
    /// pre-order.
    pub(crate) fn build<'input>(&self, captures: &FlatCaptures<'input>) -> Group<'input> {
        let (children, _) = self.build_children(captures, 0);
        Group::new(Some(captures.whole()), children)
    }

    /// Builds the group for the capture at `index` and everything below it. Returns the group and the index of the
    /// next unused capture.
    fn build_at<'input>(
        &self,
        captures: &FlatCaptures<'input>,
        index: usize,
    ) -> (Group<'input>, usize) {
        // a group that did not participate still has to consume the slots of its children
        let value = captures.group(index);
        let (children, next) = self.build_children(captures, index + 1);
        (Group::new(value, children), next)
    }

    fn build_children<'input>(
        &self,
        captures: &FlatCaptures<'input>,
        next: usize,
    ) -> (Vec<Group<'input>>, usize) {
        let init = (Vec::with_capacity(self.children.len()), next);
        self.children
            .iter()
            .fold(init, |(mut groups, next), child| {
                let (group, next) = child.build_at(captures, next);
                groups.push(group);
                (groups, next)
            })
    }
}

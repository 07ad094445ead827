//! The group scanner: a single left-to-right pass over the pattern text that finds all capturing groups and their
//! nesting, without interpreting anything else about the regex.

use std::iter::Peekable;
use std::str::CharIndices;

use crate::{GroupBuilder, ScanError, ScanErrorKind};

/// A group that has been opened, but not yet closed.
struct Frame {
    capturing: bool,
    /// Offset of the opening `(`
    open: usize,
    name: Option<String>,
    /// Verbose mode (`x` flag) is active inside of this group
    verbose: bool,
    /// Capture groups that were closed while this frame was open
    children: Vec<GroupBuilder>,
}

impl Frame {
    fn root() -> Self {
        Self {
            capturing: true,
            open: 0,
            name: None,
            verbose: false,
            children: Vec::new(),
        }
    }
}

/// Scans `pattern` and returns the implicit root group, whose children are the top-level capture groups.
pub(crate) fn scan(pattern: &str) -> Result<GroupBuilder, ScanError> {
    let mut stack = vec![Frame::root()];
    // offset of the `[` of the character class we are currently in
    let mut class_start: Option<usize> = None;
    // offset of the `\` if the current character is escaped
    let mut escape: Option<usize> = None;

    let mut chars = pattern.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if escape.take().is_some() {
            continue;
        }
        let verbose = stack.last().map_or(false, |frame| frame.verbose);
        match c {
            '\\' => escape = Some(i),
            '#' if verbose => {
                // comment until the end of the line, even inside of a character class
                for (_, c) in chars.by_ref() {
                    if c == '\n' {
                        break;
                    }
                }
            }
            '[' if class_start.is_none() => {
                class_start = Some(i);
                // a `]` at the very start of a class (`[]...]` or `[^]...]`) is a literal
                skip_space(&mut chars, verbose);
                chars.next_if(|&(_, c)| c == '^');
                skip_space(&mut chars, verbose);
                chars.next_if(|&(_, c)| c == ']');
            }
            ']' if class_start.is_some() => class_start = None,
            _ if class_start.is_some() => {}
            '(' => {
                let rest = &pattern[i + 1..];
                let (capturing, name) = group_kind(rest);
                let mut group_verbose = verbose;
                match verbose_flag(rest) {
                    Some((flag, true)) => group_verbose = flag,
                    Some((flag, false)) => {
                        // `(?x)` applies to the rest of the surrounding group
                        if let Some(parent) = stack.last_mut() {
                            parent.verbose = flag;
                        }
                    }
                    None => {}
                }
                stack.push(Frame {
                    capturing,
                    open: i,
                    name,
                    verbose: group_verbose,
                    children: Vec::new(),
                });
            }
            ')' => {
                let frame = match stack.pop() {
                    Some(frame) if !stack.is_empty() => frame,
                    _ => return Err(ScanError::new(ScanErrorKind::UnmatchedClose, i, pattern)),
                };
                let Some(parent) = stack.last_mut() else {
                    unreachable!("the root frame is never popped");
                };
                if frame.capturing {
                    let start = frame.open + 1;
                    parent.children.push(GroupBuilder::new(
                        pattern,
                        start..i,
                        frame.name,
                        frame.children,
                    ));
                } else {
                    // captures inside of a non-capturing group belong to the next capturing group around it
                    parent.children.extend(frame.children);
                }
            }
            _ => {}
        }
    }

    if let Some(offset) = escape {
        return Err(ScanError::new(ScanErrorKind::DanglingEscape, offset, pattern));
    }
    if let Some(offset) = class_start {
        return Err(ScanError::new(ScanErrorKind::UnterminatedClass, offset, pattern));
    }
    let root = match stack.pop() {
        Some(frame) if stack.is_empty() => frame,
        Some(frame) => return Err(ScanError::new(ScanErrorKind::UnclosedGroup, frame.open, pattern)),
        None => unreachable!("the root frame is never popped"),
    };
    Ok(GroupBuilder::new(pattern, 0..pattern.len(), None, root.children))
}

/// Verbose mode ignores whitespace.
fn skip_space(chars: &mut Peekable<CharIndices>, verbose: bool) {
    while verbose && chars.next_if(|&(_, c)| c.is_whitespace()).is_some() {}
}

/// Decides whether the group whose content starts with `rest` is capturing, and extracts its name if it has one.
///
/// Any group starting with `?` is non-capturing (`(?:`, `(?i)`, `(?i:`, lookarounds), except for named groups
/// (`(?P<name>` and `(?<name>`), which are numbered like every other capture group.
fn group_kind(rest: &str) -> (bool, Option<String>) {
    let Some(modifier) = rest.strip_prefix('?') else {
        return (true, None);
    };
    let Some(named) = modifier
        .strip_prefix("P<")
        .or_else(|| modifier.strip_prefix('<'))
    else {
        return (false, None);
    };
    if named.starts_with('=') || named.starts_with('!') {
        // lookbehind
        return (false, None);
    }
    let name = named.find('>').map(|end| named[..end].to_owned());
    (true, name)
}

/// For inline flag groups like `(?x)` or `(?i-x:...)`, returns the verbose mode that they set, and whether it only
/// applies to the inside of the group (`:`) instead of the rest of the surrounding group (`)`).
fn verbose_flag(rest: &str) -> Option<(bool, bool)> {
    let flags = rest.strip_prefix('?')?;
    let end = flags.find(|c: char| !(c.is_ascii_alphabetic() || c == '-'))?;
    let scoped = match flags[end..].chars().next() {
        Some(':') => true,
        Some(')') => false,
        _ => return None,
    };
    let mut enable = true;
    let mut verbose = None;
    for c in flags[..end].chars() {
        match c {
            '-' => enable = false,
            'x' => verbose = Some(enable),
            _ => {}
        }
    }
    verbose.map(|verbose| (verbose, scoped))
}

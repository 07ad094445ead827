//! Compile-time version of the group scanner in `tree_regexp`. It only counts the capture groups, but has to accept
//! and reject exactly the same patterns, since `TreeRegexp::new` panics in the generated code otherwise.

use std::iter::Peekable;
use std::str::CharIndices;

/// A pattern that `TreeRegexp::new` would reject as malformed.
pub struct ScanFailure {
    pub message: &'static str,
    pub offset: usize,
}

impl ScanFailure {
    fn new(message: &'static str, offset: usize) -> Self {
        Self { message, offset }
    }
}

struct Frame {
    capturing: bool,
    open: usize,
    verbose: bool,
}

/// Returns the number of capture groups in `pattern`.
pub fn count_groups(pattern: &str) -> Result<usize, ScanFailure> {
    let mut stack = vec![Frame {
        capturing: true,
        open: 0,
        verbose: false,
    }];
    let mut count = 0;
    let mut class_start: Option<usize> = None;
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
                for (_, c) in chars.by_ref() {
                    if c == '\n' {
                        break;
                    }
                }
            }
            '[' if class_start.is_none() => {
                class_start = Some(i);
                skip_space(&mut chars, verbose);
                chars.next_if(|&(_, c)| c == '^');
                skip_space(&mut chars, verbose);
                chars.next_if(|&(_, c)| c == ']');
            }
            ']' if class_start.is_some() => class_start = None,
            _ if class_start.is_some() => {}
            '(' => {
                let rest = &pattern[i + 1..];
                let mut group_verbose = verbose;
                match verbose_flag(rest) {
                    Some((flag, true)) => group_verbose = flag,
                    Some((flag, false)) => {
                        if let Some(parent) = stack.last_mut() {
                            parent.verbose = flag;
                        }
                    }
                    None => {}
                }
                stack.push(Frame {
                    capturing: is_capturing(rest),
                    open: i,
                    verbose: group_verbose,
                });
            }
            ')' => match stack.pop() {
                Some(frame) if !stack.is_empty() => {
                    if frame.capturing {
                        count += 1;
                    }
                }
                _ => return Err(ScanFailure::new("unopened group", i)),
            },
            _ => {}
        }
    }

    if let Some(offset) = escape {
        return Err(ScanFailure::new("incomplete escape sequence", offset));
    }
    if let Some(offset) = class_start {
        return Err(ScanFailure::new("unclosed character class", offset));
    }
    match stack.len() {
        1 => Ok(count),
        _ => {
            let open = stack.last().map_or(0, |frame| frame.open);
            Err(ScanFailure::new("unclosed group", open))
        }
    }
}

fn skip_space(chars: &mut Peekable<CharIndices>, verbose: bool) {
    while verbose && chars.next_if(|&(_, c)| c.is_whitespace()).is_some() {}
}

fn is_capturing(rest: &str) -> bool {
    let Some(modifier) = rest.strip_prefix('?') else {
        return true;
    };
    match modifier.strip_prefix("P<").or_else(|| modifier.strip_prefix('<')) {
        Some(named) => !named.starts_with('=') && !named.starts_with('!'),
        None => false,
    }
}

/// `(?x)` => `Some((true, false))`, `(?-x:` => `Some((false, true))`
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

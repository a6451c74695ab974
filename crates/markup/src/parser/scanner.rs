//! Bracket scanner for markup expressions.
//!
//! Finds the balanced `(...)` or `{...}` expression that starts at a given
//! byte offset.

/// A balanced expression found by [`scan_enclosed`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Enclosed<'a> {
    /// The expression, from the opening bracket through the matching close.
    pub expression: &'a str,
    /// Byte offset just past the closing bracket.
    pub end: usize,
}

/// Scan the bracketed expression starting at byte offset `start`.
///
/// The character at `start` picks the bracket family: `(` closes with `)`,
/// anything else closes with `}`. A bracket directly preceded by `\` does not
/// change the depth. Returns `None` if the input ends before the depth gets
/// back to zero, or if `start` is not inside the input.
///
/// # Examples
///
/// ```
/// use markup::parser::scan_enclosed;
///
/// let input = "$({hover,a,b}) rest";
/// let found = scan_enclosed(input, 1).unwrap();
/// assert_eq!(found.expression, "({hover,a,b})");
/// assert_eq!(&input[found.end..], " rest");
///
/// assert!(scan_enclosed("$(open", 1).is_none());
/// ```
pub fn scan_enclosed(input: &str, start: usize) -> Option<Enclosed<'_>> {
    let rest = input.get(start..)?;
    let mut chars = rest.char_indices();
    let (_, opener) = chars.next()?;

    let (open, close) = if opener == '(' { ('(', ')') } else { ('{', '}') };

    let mut depth = 1usize;
    let mut prev = opener;

    for (offset, c) in chars {
        let escaped = prev == '\\';
        prev = c;
        if escaped {
            continue;
        }

        if c == close {
            depth -= 1;
            if depth == 0 {
                let end = start + offset + c.len_utf8();
                return Some(Enclosed {
                    expression: &input[start..end],
                    end,
                });
            }
        } else if c == open {
            depth += 1;
        }
    }

    None
}

/// Returns true if `c` opens a markup expression after the trigger.
pub fn is_opener(c: char) -> bool {
    matches!(c, '(' | '{')
}

//! Single pass string algorithms built on top of [`Stack`]
//!
//! Bracket checks, path canonicalization, parenthesis repair and the
//! infix to postfix pipeline. Every function owns its stacks for the
//! duration of the call and keeps no state between calls.

use log::debug;

use crate::{Error, Result, Stack};

const OPENERS: [char; 3] = ['(', '[', '{'];
const CLOSERS: [char; 3] = [')', ']', '}'];
const OPERATORS: [char; 6] = ['+', '-', '*', '/', '%', '^'];

fn opener_idx(c: char) -> Option<usize> {
    OPENERS.iter().position(|&o| o == c)
}

fn is_closer(c: char) -> bool {
    CLOSERS.contains(&c)
}

/// Closing counterpart of an opening bracket
fn closer_of(opener: char) -> Option<char> {
    opener_idx(opener).map(|i| CLOSERS[i])
}

/// Checks that every `(`, `[` and `{` is closed by its own kind, in order
///
/// Any character that is not an opener is treated as a closer,
/// so letters make the input unbalanced.
pub fn is_balanced_parentheses(parentheses: &str) -> bool {
    let mut open = Stack::new();
    for c in parentheses.chars() {
        if opener_idx(c).is_some() {
            open.push(c);
            continue;
        }

        match open.pop() {
            Ok(opener) if closer_of(opener) == Some(c) => {}
            _ => return false,
        }
    }

    open.is_empty()
}

/// Simplifies a unix style path
///
/// The result starts with `/`, has no trailing `/`, no `.` or `..` segments
/// and no repeated separators. `..` at the root stays at the root.
/// Whatever precedes the first `/` is ignored.
pub fn canonical_path_formatter(path: &str) -> String {
    let mut segments = Stack::new();
    for segment in path.split('/').skip(1) {
        match segment {
            ".." => {
                let _ = segments.pop();
            }
            "" | " " | "." => {}
            s => segments.push(s),
        }
    }

    format!("/{}", segments.into_vec().join("/"))
}

/// Per opener kind counter of how many openers were matched back to back
#[derive(Debug, Default)]
struct OpenerCounts([usize; 3]);

impl OpenerCounts {
    fn reset(&mut self) {
        self.0 = [0; 3];
    }

    fn max(&self) -> usize {
        self.0.iter().copied().max().unwrap_or(0)
    }
}

/// Returns 1 if the expression wraps something in needless brackets, 0 otherwise
///
/// A bracket pair is redundant when nothing between it contains an operator
/// (`(a)`, `(7)`) or when two pairs close back to back with nothing else in
/// between (`((a+b))`). The input is expected to be balanced.
///
/// # Note
///
/// The counters are reset by every token that is not an opener, so
/// patterns such as `(a+(b))` are flagged through the "no operator" rule only.
/// Operators dangling inside a group (`(2-)`) count as operators.
pub fn is_redundant_parentheses(expression: &str) -> i32 {
    let mut bucket = Stack::new();
    let mut counts = OpenerCounts::default();

    for c in expression.chars() {
        if !is_closer(c) {
            bucket.push(c);
            counts.reset();
            continue;
        }

        let mut last = None;
        let mut found_operator = false;
        while last.and_then(opener_idx).is_none() {
            let Ok(item) = bucket.pop() else { break };
            match opener_idx(item) {
                Some(i) => counts.0[i] += 1,
                None => counts.reset(),
            }
            if OPERATORS.contains(&item) {
                found_operator = true;
            }
            last = Some(item);
        }

        if !found_operator {
            return 1;
        }

        // a closer without any opener left behind matches nothing
        let matched = last.and_then(opener_idx).map_or(0, |i| counts.0[i]);
        if matched > 1 {
            return 1;
        }
    }

    if counts.max() > 1 { 1 } else { 0 }
}

/// Drops the fewest `(` and `)` needed to make the string balanced
///
/// Every other character is kept in place.
pub fn minimum_remove_to_valid_parentheses(invalid: &str) -> String {
    let chars: Vec<char> = invalid.chars().collect();
    let mut kept = vec![false; chars.len()];
    let mut unmatched = Stack::new();

    for (i, &c) in chars.iter().enumerate() {
        match c {
            '(' => unmatched.push(i),
            ')' => {
                if let Ok(open) = unmatched.pop() {
                    kept[open] = true;
                    kept[i] = true;
                }
            }
            _ => {}
        }
    }

    chars
        .iter()
        .zip(kept)
        .filter(|&(c, keep)| keep || !matches!(*c, '(' | ')'))
        .map(|(c, _)| *c)
        .collect()
}

/// Length of the longest run of matched parentheses
///
/// Any character that is not `(` is treated as `)`.
pub fn longest_valid_parentheses(parentheses: &str) -> usize {
    let mut valid = vec![false; parentheses.chars().count()];
    let mut unmatched = Stack::new();

    for (i, c) in parentheses.chars().enumerate() {
        if c == '(' {
            unmatched.push(i);
        } else if let Ok(open) = unmatched.pop() {
            valid[open] = true;
            valid[i] = true;
        }
    }

    let mut longest = 0;
    let mut run = 0;
    for is_valid in valid {
        if is_valid {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 0;
        }
    }
    longest
}

fn priority(op: char) -> i8 {
    match op {
        '^' => 3,
        '*' | '/' => 2,
        '+' | '-' => 1,
        _ => -1,
    }
}

fn is_right_associative(op: char) -> bool {
    op == '^'
}

fn is_infix_operator(c: char) -> bool {
    matches!(c, '^' | '*' | '/' | '+' | '-')
}

/// Converts an infix expression of single character operands to postfix
///
/// Supports `+ - * / ^` and round brackets. `^` is right associative.
/// Whitespace is skipped.
///
/// ```
/// use collections::expression::infix_to_postfix;
///
/// assert_eq!(infix_to_postfix("0-1+(3*3)/7"), "01-33*7/+");
/// ```
pub fn infix_to_postfix(expression: &str) -> String {
    let mut output = String::with_capacity(expression.len());
    let mut bucket: Stack<char> = Stack::new();

    for c in expression.chars().filter(|c| !c.is_whitespace()) {
        match c {
            '(' => bucket.push(c),
            ')' => {
                while let Ok(top) = bucket.pop() {
                    if top == '(' {
                        break;
                    }
                    output.push(top);
                }
            }
            op if is_infix_operator(op) => {
                let should_push = match bucket.peek() {
                    Err(_) => true,
                    Ok(&top) => {
                        priority(top) < priority(op)
                            || (priority(top) == priority(op) && is_right_associative(top))
                    }
                };

                if !should_push {
                    loop {
                        let top = match bucket.peek() {
                            Ok(&top) if top != '(' && priority(top) >= priority(op) => top,
                            _ => break,
                        };
                        output.push(top);
                        let _ = bucket.pop();
                    }
                }
                bucket.push(op);
            }
            operand => output.push(operand),
        }
    }

    while let Ok(top) = bucket.pop() {
        if top != '(' {
            output.push(top);
        }
    }

    output
}

/// Evaluates a tokenized postfix expression
///
/// Operands are integers, operators are `+ - * / ^`. The first operand popped
/// for an operator is its right hand side. Division is real division.
/// An operator that finds fewer than two operands is skipped, and the value on
/// top of the stack at the end is the result.
pub fn evaluate_postfix_expression<S: AsRef<str>>(tokens: &[S]) -> Result<f64> {
    let mut operands: Stack<f64> = Stack::new();

    for token in tokens {
        let token: &str = token.as_ref();
        let op: fn(f64, f64) -> f64 = match token.trim() {
            "+" => |a, b| a + b,
            "-" => |a, b| a - b,
            "*" => |a, b| a * b,
            "/" => |a, b| a / b,
            "^" => f64::powf,
            operand => {
                let value: i64 = operand
                    .parse()
                    .map_err(|_| Error::InvalidToken(operand.to_string()))?;
                operands.push(value as f64);
                continue;
            }
        };

        if operands.len() < 2 {
            debug!(target: "evaluate_postfix", "skipping {token:?}, not enough operands");
            continue;
        }
        let b = operands.pop()?;
        let a = operands.pop()?;
        operands.push(op(a, b));
    }

    operands
        .peek()
        .copied()
        .map_err(|_| Error::EmptyContainer { op: "evaluate" })
}

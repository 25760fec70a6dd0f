use collections::expression;
use log::debug;

use crate::{Error, Result, orders};

/// Runs one `<command> <argument>` line and renders its result
///
/// Known commands are `balanced`, `path`, `redundant`, `repair`, `longest`,
/// `postfix`, `eval` (space separated tokens) and `orders` (space separated
/// items).
pub fn execute(line: &str) -> Result<String> {
    let line = line.trim();
    let (cmd, arg) = match line.split_once(char::is_whitespace) {
        Some((cmd, arg)) => (cmd, arg.trim()),
        None => (line, ""),
    };
    debug!(target: "command", "cmd: {cmd:?}, arg: {arg:?}");

    let name = match cmd {
        "balanced" => "balanced",
        "path" => "path",
        "redundant" => "redundant",
        "repair" => "repair",
        "longest" => "longest",
        "postfix" => "postfix",
        "eval" => "eval",
        "orders" => "orders",
        other => return Err(Error::UnknownCommand(other.to_string())),
    };
    if arg.is_empty() {
        return Err(Error::MissingArgument(name));
    }

    let out = match name {
        "balanced" => expression::is_balanced_parentheses(arg).to_string(),
        "path" => expression::canonical_path_formatter(arg),
        "redundant" => expression::is_redundant_parentheses(arg).to_string(),
        "repair" => expression::minimum_remove_to_valid_parentheses(arg),
        "longest" => expression::longest_valid_parentheses(arg).to_string(),
        "postfix" => expression::infix_to_postfix(arg),
        "eval" => {
            let tokens: Vec<&str> = arg.split_whitespace().collect();
            expression::evaluate_postfix_expression(&tokens)?.to_string()
        }
        _ => orders::ordering_system(arg.split_whitespace(), orders::SERVE_INTERVAL)?.join(", "),
    };
    Ok(out)
}

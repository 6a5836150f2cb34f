//! Built-in tools.
//!
//! Each tool is a plain synchronous function over the resolved argument
//! map, returning its result as text. Tool failures are reported in the
//! result text, never as process errors, so the model sees them like any
//! other tool output.

pub use {calc::evaluate, clock::time_in, text::analyze};

use serde_json::{Map, Value};

mod calc;
mod clock;
mod text;

/// Evaluate the `expression` argument as arithmetic.
pub fn calculator(args: &Map<String, Value>) -> String {
    let Some(expression) = args.get("expression").and_then(Value::as_str) else {
        return "calculator error: missing 'expression' argument".to_owned();
    };
    match calc::evaluate(expression) {
        Ok(result) => format!("{expression} = {}", calc::format_number(result)),
        Err(e) => format!("could not evaluate '{expression}': {e}"),
    }
}

/// Report the current time in the `timezone` argument (default UTC).
pub fn current_time(args: &Map<String, Value>) -> String {
    let timezone = args
        .get("timezone")
        .and_then(Value::as_str)
        .unwrap_or("UTC");
    clock::time_in(timezone)
}

/// Analyze the `text` argument for counts and keyword sentiment.
pub fn text_analyzer(args: &Map<String, Value>) -> String {
    let Some(text) = args.get("text").and_then(Value::as_str) else {
        return "text_analyzer error: missing 'text' argument".to_owned();
    };
    text::analyze(text)
}

//! The `<0|1>,<text>` line format
//!
//! One record per line: the completion flag as a decimal integer, a comma,
//! then the text verbatim. Only the first comma delimits, so text may
//! contain further commas. There is no escaping; a text containing a
//! newline will not survive a round-trip.

use tracing::warn;

use super::model::Task;
use super::store::TaskList;

/// Parse a whole file body. Lines that are empty or have no comma are
/// skipped with a warning; parsing never fails.
pub fn parse(content: &str) -> TaskList {
    let mut tasks = TaskList::new();

    for (lineno, line) in content.lines().enumerate() {
        match parse_line(line) {
            Some(task) => tasks.push(task),
            None => {
                if !line.is_empty() {
                    warn!("skipping malformed line {}: no delimiter", lineno + 1);
                }
            }
        }
    }

    tasks
}

/// Parse a single record line. Returns `None` for an empty line or a line
/// without a comma.
pub fn parse_line(line: &str) -> Option<Task> {
    let (flag, text) = line.split_once(',')?;
    Some(Task::new(atoi_prefix(flag) != 0, text))
}

/// Render the whole list, one line per record, each terminated by `\n`.
pub fn render(tasks: &TaskList) -> String {
    let mut out = String::new();

    for task in tasks.iter() {
        out.push(if task.done { '1' } else { '0' });
        out.push(',');
        out.push_str(&task.text);
        out.push('\n');
    }

    out
}

/// C `atoi` semantics: skip leading whitespace, accept an optional sign,
/// then the longest run of decimal digits. Anything else yields 0.
fn atoi_prefix(s: &str) -> i64 {
    let s = s.trim_start();
    let mut chars = s.chars().peekable();

    let mut sign = 1i64;
    if let Some(&c) = chars.peek() {
        if c == '+' || c == '-' {
            if c == '-' {
                sign = -1;
            }
            chars.next();
        }
    }

    let mut value = 0i64;
    for c in chars {
        match c.to_digit(10) {
            Some(d) => value = value.saturating_mul(10).saturating_add(d as i64),
            None => break,
        }
    }

    sign.saturating_mul(value)
}

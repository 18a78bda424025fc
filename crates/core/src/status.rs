//! Console status text

/// Marker printed in front of a passing check or step
pub const PASS_MARKER: &str = "✅";

/// Marker printed in front of a failing check or step
pub const FAIL_MARKER: &str = "❌";

pub fn marker(success: bool) -> &'static str {
    if success {
        PASS_MARKER
    } else {
        FAIL_MARKER
    }
}

/// "✅ <task> succeeded." or "❌ <task> failed."
pub fn status_line(task: &str, success: bool) -> String {
    if success {
        format!("{} {} succeeded.", PASS_MARKER, task)
    } else {
        format!("{} {} failed.", FAIL_MARKER, task)
    }
}

/// Print a status line preceded by a blank line
pub fn report(task: &str, success: bool) {
    println!("\n{}", status_line(task, success));
}

//! Cycle status display formatting

use crate::services::CycleStatus;

/// Format the cycle status for terminal display
pub fn format_cycle_status(status: &CycleStatus) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Salary cycle: {} to {} (end exclusive)\n",
        status.window.start.format("%Y-%m-%d"),
        status.window.end.format("%Y-%m-%d")
    ));
    output.push_str(&format!(
        "Days left:    {} of {}\n",
        status.days_left,
        status.window.days_total()
    ));
    output.push('\n');

    output.push_str(&format!("Budget:       {:>12}\n", status.budget.to_string()));
    output.push_str(&format!(
        "Spent:        {:>12}  ({} expense{})\n",
        status.spent.to_string(),
        status.expense_count,
        if status.expense_count == 1 { "" } else { "s" }
    ));
    output.push_str(&format!(
        "Remaining:    {:>12}\n",
        status.remaining.to_string()
    ));

    if status.remaining.is_negative() {
        output.push_str("\nWarning: you have overspent this cycle's budget.\n");
    }

    output
}

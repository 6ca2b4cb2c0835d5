use crate::stack::SwapStack;

/// Print every parked branch with its position, oldest first
pub fn run(stack: &SwapStack) {
    for line in format_entries(&stack.stack()) {
        println!("{line}");
    }
}

fn format_entries(entries: &[String]) -> Vec<String> {
    entries
        .iter()
        .enumerate()
        .map(|(index, branch)| format!("{index}: {branch}"))
        .collect()
}

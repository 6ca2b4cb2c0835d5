use crate::cli::output::Output;
use crate::errors::Result;
use crate::stack::SwapStack;

/// Park the current branch and switch to `branch`, or only park when empty
pub fn run(stack: &mut SwapStack, branch: &str) -> Result<()> {
    stack.swap(branch)?;

    if branch.is_empty() {
        Output::success(format!("Current branch parked ({} on stack)", stack.len()));
        Output::tip("Run with --list to see parked branches");
    } else {
        Output::success(format!("Switched to '{branch}'"));
        Output::sub_item(format!("{} branches parked", stack.len()));
    }
    Ok(())
}

/// Park the current branch and switch to the parked branch at `index`
pub fn restore(stack: &mut SwapStack, index: usize) -> Result<()> {
    let target = stack.stack().get(index).cloned();
    stack.swap_from_stack(index)?;

    if let Some(branch) = target {
        Output::success(format!("Switched to '{branch}'"));
    }
    Output::sub_item(format!("{} branches parked", stack.len()));
    Ok(())
}

use console::style;
use std::fmt::Display;

/// Centralized output formatting utilities for consistent CLI presentation
pub struct Output;

impl Output {
    /// Print a success message with checkmark
    pub fn success<T: Display>(message: T) {
        println!("{} {}", style("✓").green(), message);
    }

    /// Print a sub-item with arrow prefix
    pub fn sub_item<T: Display>(message: T) {
        println!("  {} {}", style("→").dim(), message);
    }

    /// Print a tip/suggestion
    pub fn tip<T: Display>(message: T) {
        println!("{} {}", style("TIP:").cyan(), style(message).dim());
    }
}

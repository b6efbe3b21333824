use colored::*;
use console::Term;
use dialoguer::{ theme::ColorfulTheme, Confirm, Select };
use indicatif::{ ProgressBar, ProgressStyle };
use std::time::Duration;
use textwrap::wrap;

use crate::models::common::WorkflowExecutionStatus;
use crate::models::property::Property;
use crate::models::record::RecordField;
use crate::traits::workflow::SettingsIssue;

/// UI theme for consistent appearance
pub fn get_theme() -> ColorfulTheme {
    ColorfulTheme::default()
}

fn terminal_width() -> usize {
    Term::stdout().size().1 as usize
}

/// Print a section header
pub fn print_header(title: &str) {
    let title = format!(" {} ", title);
    println!("\n{}\n", title.bold().white().on_blue());
}

/// Print text with proper wrapping
pub fn print_text(text: &str) {
    let width = terminal_width();
    for line in text.lines() {
        for wrapped_line in wrap(line, width.saturating_sub(10).max(20)) {
            println!("{}", wrapped_line);
        }
    }
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "ERROR:".red().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "WARNING:".yellow().bold(), message);
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "SUCCESS:".green().bold(), message);
}

/// Print information
pub fn print_info(message: &str) {
    println!("{} {}", "INFO:".blue().bold(), message);
}

/// Print a formatted result
pub fn print_result(label: &str, value: &str) {
    println!("{}: {}", label.bold(), value);
}

/// Print the contact properties as an aligned table
pub fn print_properties(properties: &[Property]) {
    let label_width = properties.iter().map(|p| p.label.len()).max().unwrap_or(5).max(5);
    let name_width = properties.iter().map(|p| p.name.len()).max().unwrap_or(4).max(4);

    println!(
        "{}  {}  {}",
        format!("{:<width$}", "Label", width = label_width).bold(),
        format!("{:<width$}", "Name", width = name_width).bold(),
        "Group".bold()
    );
    for property in properties {
        println!(
            "{}  {}  {}",
            format!("{:<width$}", property.label, width = label_width),
            format!("{:<width$}", property.name, width = name_width).cyan(),
            property.group_name.as_deref().unwrap_or("-").dimmed()
        );
    }
}

/// Print workflow status with color
pub fn print_workflow_status(status: &WorkflowExecutionStatus) {
    match status {
        WorkflowExecutionStatus::Completed => println!("{}", "✓ Completed".green().bold()),
        WorkflowExecutionStatus::Failed => println!("{}", "✗ Failed".red().bold()),
        WorkflowExecutionStatus::NotConfigured => {
            println!("{}", "? Not configured".yellow().bold())
        }
    }
}

/// Print settings issues, one per line
pub fn print_settings_issues(issues: &[SettingsIssue]) {
    for issue in issues {
        println!("  {} {}", "-".red(), issue);
    }
}

/// Interactive selection of the HubSpot property for a form field.
/// Returns `None` when the administrator skips the field.
pub fn select_property<'a>(
    field: &RecordField,
    properties: &'a [Property]
) -> std::io::Result<Option<&'a Property>> {
    let mut items = vec!["(skip this field)".to_string()];
    items.extend(properties.iter().map(|p| format!("{} ({})", p.label, p.name)));

    let selection = Select::with_theme(&get_theme())
        .with_prompt(format!("HubSpot property for '{}'", field.display_name()))
        .default(0)
        .items(&items)
        .interact()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

    Ok(selection.checked_sub(1).map(|index| &properties[index]))
}

/// Confirm an action with the user
pub fn confirm_action(prompt: &str) -> std::io::Result<bool> {
    Confirm::with_theme(&get_theme())
        .with_prompt(prompt)
        .default(true)
        .interact()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
}

/// Display a spinner while waiting for an operation to complete
pub fn spinner_with_message(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

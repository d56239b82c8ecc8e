//! Terminal text for the menu loop.
//!
//! Styling only; nothing here touches store state.

use colored::Colorize;
use reminder_core::{core_version, Record};

const RULE: &str = "=======================================================";
const SEPARATOR: &str = "-------------------------------------------------------";

pub fn header() -> String {
    format!(
        "{}\n{}\n{}\n",
        RULE.cyan(),
        format!("      TASK & EVENT REMINDER SYSTEM (v{})", core_version()).bold(),
        RULE.cyan()
    )
}

pub fn main_menu() -> String {
    format!(
        "\n{}\n   {} Add New Reminder\n   {} View All Reminders\n   {} Delete a Reminder\n   {} Mark as Done/Pending\n   {}\n\n{}\n",
        "   MAIN MENU".bold(),
        "1.".green(),
        "2.".green(),
        "3.".green(),
        "4.".green(),
        "5. Exit".red(),
        RULE
    )
}

pub fn section(title: &str) -> String {
    format!("\n{}\n", format!("[ {title} ]").bold())
}

pub fn separator() -> &'static str {
    SEPARATOR
}

/// One listing block; `position` is recomputed by the caller per listing.
pub fn record_block(position: usize, record: &Record) -> String {
    let status = if record.is_completed() {
        "[ COMPLETED ]".green()
    } else {
        "[ PENDING ]".red()
    };
    format!(
        " ID: {} | Date: {}\n {}\n Desc: {}\n Status: {}\n{}\n",
        position.to_string().bold(),
        record.due_date(),
        record.title().cyan(),
        record.details(),
        status,
        SEPARATOR
    )
}

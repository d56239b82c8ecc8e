//! Interactive menu loop over a reminder store.
//!
//! # Responsibility
//! - Read menu choices and field input, dispatch to store operations.
//! - Turn malformed input and rejected positions into messages and prompts.
//!
//! # Invariants
//! - Malformed input never reaches the store.
//! - Due dates are re-prompted until they match the pattern.
//! - End of input behaves like Exit.

use crate::render;
use colored::Colorize;
use log::debug;
use reminder_core::{DueDate, RecordRepository, ReminderStore, DUE_DATE_FORMAT};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{self, BufRead, Write};

/// Non-numeric or unknown input at a numeric prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedInput(pub String);

impl Display for MalformedInput {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "malformed input `{}`", self.0)
    }
}

impl Error for MalformedInput {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    ViewAll,
    Delete,
    ToggleStatus,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Result<Self, MalformedInput> {
        match input.trim() {
            "1" => Ok(Self::Add),
            "2" => Ok(Self::ViewAll),
            "3" => Ok(Self::Delete),
            "4" => Ok(Self::ToggleStatus),
            "5" => Ok(Self::Exit),
            other => Err(MalformedInput(other.to_string())),
        }
    }
}

/// Parses a user-supplied 1-based ID; range is checked by the store.
pub fn parse_position(input: &str) -> Result<i64, MalformedInput> {
    let trimmed = input.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| MalformedInput(trimmed.to_string()))
}

enum Flow {
    Continue,
    Exit,
}

/// Menu loop bound to an input and an output stream.
pub struct Console<I, O> {
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> Console<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    /// Runs until Exit is chosen or input ends.
    pub fn run<R: RecordRepository>(&mut self, store: &mut ReminderStore<R>) -> io::Result<()> {
        loop {
            write!(self.output, "{}{}", render::header(), render::main_menu())?;
            let Some(line) = self.prompt("Select Option: ")? else {
                return Ok(());
            };

            let choice = match MenuChoice::parse(&line) {
                Ok(choice) => choice,
                Err(_) => {
                    debug!("event=menu_input module=cli status=ignored reason=malformed");
                    continue;
                }
            };

            let flow = match choice {
                MenuChoice::Add => self.add(store)?,
                MenuChoice::ViewAll => self.view_all(store)?,
                MenuChoice::Delete => self.delete(store)?,
                MenuChoice::ToggleStatus => self.toggle(store)?,
                MenuChoice::Exit => Flow::Exit,
            };
            if let Flow::Exit = flow {
                return Ok(());
            }
        }
    }

    fn add<R: RecordRepository>(&mut self, store: &mut ReminderStore<R>) -> io::Result<Flow> {
        write!(self.output, "{}", render::section("CREATE NEW REMINDER"))?;

        let Some(title) = self.prompt("Enter Title: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(details) = self.prompt("Enter Details: ")? else {
            return Ok(Flow::Exit);
        };
        let due_date = loop {
            let Some(raw) = self.prompt(&format!("Enter Date ({DUE_DATE_FORMAT}): "))? else {
                return Ok(Flow::Exit);
            };
            match DueDate::parse(raw) {
                Ok(due_date) => break due_date,
                Err(_) => writeln!(
                    self.output,
                    "{}",
                    ">> Invalid date format! Try again.".red()
                )?,
            }
        };

        store.add(title, details, due_date);
        writeln!(
            self.output,
            "\n{}",
            ">> SUCCESS! Reminder saved to file.".green()
        )?;
        self.pause()
    }

    fn view_all<R: RecordRepository>(&mut self, store: &ReminderStore<R>) -> io::Result<Flow> {
        write!(self.output, "{}", render::section("YOUR LIST"))?;

        if store.is_empty() {
            writeln!(self.output, "\n{}", "   (List is empty)".red())?;
            return self.pause();
        }

        writeln!(self.output, "{}", render::separator())?;
        for (position, record) in store.list() {
            write!(self.output, "{}", render::record_block(position, record))?;
        }
        self.pause()
    }

    fn toggle<R: RecordRepository>(&mut self, store: &mut ReminderStore<R>) -> io::Result<Flow> {
        write!(self.output, "{}", render::section("CHANGE STATUS"))?;
        if store.is_empty() {
            writeln!(self.output, "{}", "List is empty.".red())?;
            return self.pause();
        }

        let Some(position) = self.prompt_position("Enter ID to toggle: ")? else {
            return Ok(Flow::Exit);
        };
        match store.toggle(position) {
            Ok(_) => writeln!(self.output, "{}", ">> Status Updated & Saved!".green())?,
            Err(_) => writeln!(self.output, "{}", ">> Invalid ID!".red())?,
        }
        self.pause()
    }

    fn delete<R: RecordRepository>(&mut self, store: &mut ReminderStore<R>) -> io::Result<Flow> {
        write!(self.output, "{}", render::section("DELETE REMINDER"))?;
        if store.is_empty() {
            writeln!(self.output, "{}", "List is empty.".red())?;
            return self.pause();
        }

        let Some(position) = self.prompt_position("Enter ID to delete: ")? else {
            return Ok(Flow::Exit);
        };
        match store.delete(position) {
            Ok(_) => writeln!(self.output, "{}", ">> Deleted & Saved.".red())?,
            Err(_) => writeln!(self.output, "{}", ">> Invalid ID!".red())?,
        }
        self.pause()
    }

    fn prompt_position(&mut self, message: &str) -> io::Result<Option<i64>> {
        loop {
            let Some(line) = self.prompt(message)? else {
                return Ok(None);
            };
            match parse_position(&line) {
                Ok(position) => return Ok(Some(position)),
                Err(_) => {
                    debug!("event=position_input module=cli status=reprompt reason=malformed");
                    writeln!(self.output, "{}", ">> Please enter a numeric ID.".red())?;
                }
            }
        }
    }

    fn pause(&mut self) -> io::Result<Flow> {
        write!(
            self.output,
            "\n{}",
            ">> Press Enter to continue...".yellow()
        )?;
        match self.read_line()? {
            Some(_) => Ok(Flow::Continue),
            None => Ok(Flow::Exit),
        }
    }

    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Reads one line without its terminator; `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        while line.ends_with(['\n', '\r']) {
            line.pop();
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_position, Console, MalformedInput, MenuChoice};
    use reminder_core::{DueDate, Record, RecordRepository, ReminderStore, RepoResult};
    use std::cell::RefCell;
    use std::io::Cursor;

    #[derive(Default)]
    struct MemoryRepo {
        saved: RefCell<Vec<Record>>,
    }

    impl RecordRepository for MemoryRepo {
        fn load_records(&self) -> RepoResult<Vec<Record>> {
            Ok(self.saved.borrow().clone())
        }

        fn save_records(&self, records: &[Record]) -> RepoResult<()> {
            *self.saved.borrow_mut() = records.to_vec();
            Ok(())
        }
    }

    fn store_with(titles: &[&str]) -> ReminderStore<MemoryRepo> {
        let mut store = ReminderStore::open(MemoryRepo::default());
        for title in titles {
            store.add(*title, "", DueDate::parse("01-01-2026").unwrap());
        }
        store
    }

    fn run(store: &mut ReminderStore<MemoryRepo>, input: &str) -> String {
        let mut output = Vec::new();
        Console::new(Cursor::new(input.as_bytes()), &mut output)
            .run(store)
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn menu_choice_parses_known_options_only() {
        assert_eq!(MenuChoice::parse(" 1 "), Ok(MenuChoice::Add));
        assert_eq!(MenuChoice::parse("5"), Ok(MenuChoice::Exit));
        assert_eq!(
            MenuChoice::parse("abc"),
            Err(MalformedInput("abc".to_string()))
        );
        assert!(MenuChoice::parse("9").is_err());
    }

    #[test]
    fn parse_position_accepts_signed_numbers() {
        assert_eq!(parse_position("2"), Ok(2));
        assert_eq!(parse_position("-1"), Ok(-1));
        assert!(parse_position("two").is_err());
    }

    #[test]
    fn add_reprompts_until_date_is_valid() {
        let mut store = store_with(&[]);
        let output = run(&mut store, "1\nMeeting\nStandup\n5-3-25\n01-01-2026\n\n5\n");

        assert!(output.contains("Invalid date format! Try again."));
        assert!(output.contains("SUCCESS! Reminder saved to file."));
        assert_eq!(store.len(), 1);
        let record = store.get(1).unwrap();
        assert_eq!(record.title(), "Meeting");
        assert_eq!(record.details(), "Standup");
        assert_eq!(record.due_date(), "01-01-2026");
        assert_eq!(store.repository().saved.borrow().len(), 1);
    }

    #[test]
    fn malformed_menu_input_redraws_menu() {
        let mut store = store_with(&["keep"]);
        let output = run(&mut store, "abc\n9\n5\n");

        assert_eq!(output.matches("MAIN MENU").count(), 3);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn toggle_reprompts_on_malformed_id_and_reports_invalid_id() {
        let mut store = store_with(&["only"]);
        let output = run(&mut store, "4\nx\n7\n\n4\n1\n\n5\n");

        assert_eq!(output.matches("Enter ID to toggle: ").count(), 3);
        assert!(output.contains(">> Invalid ID!"));
        assert!(output.contains(">> Status Updated & Saved!"));
        assert!(store.get(1).unwrap().is_completed());
    }

    #[test]
    fn delete_removes_selected_record() {
        let mut store = store_with(&["one", "two", "three"]);
        let output = run(&mut store, "3\n2\n\n5\n");

        assert!(output.contains(">> Deleted & Saved."));
        let titles: Vec<&str> = store.list().map(|(_, record)| record.title()).collect();
        assert_eq!(titles, vec!["one", "three"]);
    }

    #[test]
    fn empty_list_messages() {
        let mut store = store_with(&[]);
        let output = run(&mut store, "2\n\n4\n\n3\n\n5\n");

        assert!(output.contains("(List is empty)"));
        assert_eq!(output.matches("List is empty.").count(), 2);
        assert!(!output.contains("Enter ID"));
    }

    #[test]
    fn view_all_lists_positions_in_order() {
        let mut store = store_with(&["first", "second"]);
        store.toggle(2).unwrap();
        let output = run(&mut store, "2\n\n5\n");

        let first = output.find("first").unwrap();
        let second = output.find("second").unwrap();
        assert!(first < second);
        assert!(output.contains("[ PENDING ]"));
        assert!(output.contains("[ COMPLETED ]"));
    }

    #[test]
    fn end_of_input_exits_cleanly() {
        let mut store = store_with(&[]);
        run(&mut store, "");
        run(&mut store, "1\nhalf-typed title\n");
        assert!(store.is_empty());
    }
}

//! Interactive console menu.
//!
//! Thin glue over the service layer: reads raw strings, dispatches to the
//! service, and prints results. Carries no invariants of its own. Generic
//! over the input and output streams so tests can drive it with in-memory
//! buffers instead of a terminal.

use crate::error::CatalogError;
use crate::services::ContactService;
use std::io::{self, BufRead, Write};

/// Menu loop over a [`ContactService`].
pub struct Menu<'a, R, W> {
    service: &'a ContactService,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    /// Create a menu reading from `input` and writing to `output`.
    pub fn new(service: &'a ContactService, input: R, output: W) -> Self {
        Self {
            service,
            input,
            output,
        }
    }

    /// Run the loop until the exit option is chosen or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        tracing::info!("Application started");
        loop {
            self.show_menu()?;
            let Some(choice) = self.read_line()? else {
                break;
            };
            match choice.as_str() {
                "1" => self.add_contact()?,
                "2" => self.list_contacts()?,
                "3" => self.search_contacts()?,
                "4" => self.filter_by_tag()?,
                "5" => break,
                other => {
                    writeln!(self.output, "Invalid choice. Try again.")?;
                    tracing::warn!("Invalid menu input: {}", other);
                }
            }
        }
        tracing::info!("Application exited");
        Ok(())
    }

    fn show_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n--- Contact Catalog ---")?;
        writeln!(self.output, "1. Add Contact")?;
        writeln!(self.output, "2. List Contacts")?;
        writeln!(self.output, "3. Search by Name or Email")?;
        writeln!(self.output, "4. Filter by Tag")?;
        writeln!(self.output, "5. Exit")?;
        write!(self.output, "Choose an option: ")?;
        self.output.flush()
    }

    /// Read one line, `None` on end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn prompt(&mut self, label: &str) -> io::Result<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        Ok(self.read_line()?.unwrap_or_default())
    }

    fn add_contact(&mut self) -> io::Result<()> {
        let name = self.prompt("Enter Name: ")?;
        let email = self.prompt("Enter Email: ")?;
        let tags = self.prompt("Enter Tags (comma separated): ")?;

        match self.service.add_contact(&name, &email, &tags) {
            Ok(_) => writeln!(self.output, "Contact added successfully!")?,
            Err(err @ CatalogError::DuplicateEmail(_)) => {
                tracing::warn!("Duplicate email detected");
                writeln!(self.output, "{}", err)?;
            }
            Err(err @ CatalogError::InvalidEmail(_)) => {
                tracing::warn!("Invalid email input");
                writeln!(self.output, "{}", err)?;
            }
            Err(err @ CatalogError::EmptyName) => {
                tracing::warn!("Validation failed");
                writeln!(self.output, "{}", err)?;
            }
        }
        Ok(())
    }

    fn list_contacts(&mut self) -> io::Result<()> {
        let contacts = self.service.list_contacts();
        writeln!(self.output, "\n--- All Contacts ---")?;

        if contacts.is_empty() {
            writeln!(self.output, "No contacts found.")?;
            return Ok(());
        }

        for contact in contacts {
            writeln!(self.output, "{}", contact)?;
        }
        Ok(())
    }

    fn search_contacts(&mut self) -> io::Result<()> {
        let term = self.prompt("Enter search term: ")?;

        let results = self.service.search(&term);
        writeln!(self.output, "\n--- Search Results ---")?;

        if results.is_empty() {
            writeln!(self.output, "No matching contacts found.")?;
            return Ok(());
        }

        for contact in results {
            writeln!(self.output, "{}", contact)?;
        }
        Ok(())
    }

    fn filter_by_tag(&mut self) -> io::Result<()> {
        let tag = self.prompt("Enter tag: ")?;

        let results = self.service.filter_by_tag(&tag);
        writeln!(self.output, "\n--- Filtered by Tag ---")?;

        if results.is_empty() {
            writeln!(self.output, "No contacts found with that tag.")?;
            return Ok(());
        }

        for contact in results {
            writeln!(self.output, "{}", contact)?;
        }
        Ok(())
    }
}

// src/contact_export/exporter.rs
use crate::error::Result;
use crate::web_crawler::types::ContactBook;
use std::io::Write;
use tracing::info;

pub struct ContactExporter;

impl ContactExporter {
    pub fn new() -> Self {
        Self
    }

    /// Phone-only output: header plus one sorted number per row,
    /// appended to whatever is already in the file.
    pub fn export_phones(&self, book: &ContactBook, filename: &str) -> Result<()> {
        ensure_parent_dir(filename)?;

        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(filename)?;

        writeln!(file, "Phone Numbers")?;
        for phone in &book.phone_numbers {
            writeln!(file, "{}", phone)?;
        }

        info!(
            "Saved {} unique phone numbers to {}",
            book.phone_numbers.len(),
            filename
        );
        Ok(())
    }

    /// Phone+email output, overwritten each run. The two columns are
    /// independent sorted lists padded to equal length; a phone and an
    /// email sharing a row are not related.
    pub fn export_contacts(&self, book: &ContactBook, filename: &str) -> Result<()> {
        ensure_parent_dir(filename)?;

        let mut file = std::fs::File::create(filename)?;

        writeln!(file, "Phone Numbers,Email Addresses")?;

        let phones: Vec<&String> = book.phone_numbers.iter().collect();
        let emails: Vec<&String> = book.email_addresses.iter().collect();
        let rows = phones.len().max(emails.len());

        for i in 0..rows {
            writeln!(
                file,
                "{},{}",
                phones.get(i).map(|s| s.as_str()).unwrap_or(""),
                emails.get(i).map(|s| s.as_str()).unwrap_or("")
            )?;
        }

        info!(
            "Saved {} phone numbers and {} email addresses to {}",
            phones.len(),
            emails.len(),
            filename
        );
        Ok(())
    }
}

impl Default for ContactExporter {
    fn default() -> Self {
        Self::new()
    }
}

fn ensure_parent_dir(filename: &str) -> Result<()> {
    if let Some(parent) = std::path::Path::new(filename).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

//! Read side of the on-disk journal layout.
//!
//! A journal is a flat directory of month files named `"{Month} {Year}.txt"`
//! (e.g. `October 2026.txt`). Each file holds that month's entries separated
//! by a line containing only `--`. This module never writes; it only finds
//! month files and splits them into entries for the converter.

use crate::error::UrnalError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const MONTH_FILE_EXTENSION: &str = ".txt";

/// Split a month file into its entries.
pub fn split_entries<'a>(text: &'a str, delimiter: &str) -> Vec<&'a str> {
    text.split(delimiter).collect()
}

/// Calendar month, ordered January → December.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// English month name as used in file names.
    pub fn name(self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }

    /// Exact, case-sensitive match on the English name.
    pub fn from_name(name: &str) -> Option<Month> {
        Month::ALL.into_iter().find(|m| m.name() == name)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A month file's identity, parsed from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthFile {
    pub month: Month,
    pub year: u32,
}

impl MonthFile {
    /// Parse `"October 2026.txt"`. Returns `None` for anything else.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let stem = name.strip_suffix(MONTH_FILE_EXTENSION)?;
        let (month, year) = stem.split_once(' ')?;
        Some(Self {
            month: Month::from_name(month)?,
            year: year.parse().ok()?,
        })
    }

    pub fn file_name(&self) -> String {
        format!("{} {}{}", self.month, self.year, MONTH_FILE_EXTENSION)
    }
}

/// Path of the file holding `month`/`year` entries under `dir`.
pub fn month_path(dir: impl AsRef<Path>, month: Month, year: u32) -> PathBuf {
    dir.as_ref().join(MonthFile { month, year }.file_name())
}

/// The months present for one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearGroup {
    pub year: u32,
    /// Calendar order.
    pub months: Vec<Month>,
}

/// List the month files in `dir`, newest year first.
///
/// Files that do not follow the `"{Month} {Year}.txt"` pattern are skipped.
pub fn scan_journal(dir: impl AsRef<Path>) -> Result<Vec<YearGroup>, UrnalError> {
    let dir = dir.as_ref();
    let metadata = std::fs::metadata(dir).map_err(|e| UrnalError::from_read(dir, e))?;
    if !metadata.is_dir() {
        return Err(UrnalError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let mut years: BTreeMap<u32, BTreeSet<Month>> = BTreeMap::new();
    for entry in std::fs::read_dir(dir).map_err(|e| UrnalError::from_read(dir, e))? {
        let entry = entry.map_err(|e| UrnalError::from_read(dir, e))?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if !name.ends_with(MONTH_FILE_EXTENSION) {
            continue;
        }
        match MonthFile::from_file_name(name) {
            Some(file) => {
                years.entry(file.year).or_default().insert(file.month);
            }
            None => warn!("Skipping unrecognised journal file: {}", name),
        }
    }

    let groups: Vec<YearGroup> = years
        .into_iter()
        .rev()
        .map(|(year, months)| YearGroup {
            year,
            months: months.into_iter().collect(),
        })
        .collect();
    debug!("Found {} years in {}", groups.len(), dir.display());
    Ok(groups)
}

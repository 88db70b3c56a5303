use std::fmt;
use std::str::FromStr;

use crate::domain::error::AppError;

/// Zero-based worksheet coordinate parsed from A1 notation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRef {
    pub row: u32,
    pub column: u32,
}

impl CellRef {
    /// Build a reference from a column label ("D") and a one-based row (71)
    pub fn from_parts(column: &str, row: u32) -> Result<Self, AppError> {
        if row == 0 {
            return Err(AppError::ParseError(format!(
                "Row numbers start at 1, got {}{}",
                column, row
            )));
        }
        Ok(Self {
            row: row - 1,
            column: column_index(column)?,
        })
    }

    /// (row, column) pair as used by worksheet ranges
    pub fn position(&self) -> (u32, u32) {
        (self.row, self.column)
    }
}

impl FromStr for CellRef {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let split = trimmed
            .find(|c: char| c.is_ascii_digit())
            .ok_or_else(|| AppError::ParseError(format!("Missing row in cell reference: {}", s)))?;
        let (letters, digits) = trimmed.split_at(split);
        let row = digits
            .parse::<u32>()
            .map_err(|_| AppError::ParseError(format!("Invalid row in cell reference: {}", s)))?;
        Self::from_parts(letters, row)
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut label = Vec::new();
        let mut n = self.column + 1;
        while n > 0 {
            let rem = (n - 1) % 26;
            label.push((b'A' + rem as u8) as char);
            n = (n - 1) / 26;
        }
        let column: String = label.into_iter().rev().collect();
        write!(f, "{}{}", column, self.row + 1)
    }
}

fn column_index(letters: &str) -> Result<u32, AppError> {
    if letters.is_empty() || !letters.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(AppError::ParseError(format!(
            "Invalid column in cell reference: {:?}",
            letters
        )));
    }
    let index = letters
        .chars()
        .map(|c| c.to_ascii_uppercase() as u32 - 'A' as u32 + 1)
        .fold(0u32, |acc, v| acc * 26 + v);
    Ok(index - 1)
}

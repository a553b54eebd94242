//! Filename token patterns.
//!
//! Well-file names are underscore-delimited tokens matched by content, so
//! `plate2_60mgml_A12_edge.txt` and `A12_plate2_edge_60mgml.txt` describe the
//! same capture.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Well label: one uppercase row letter followed by the column, e.g. `A12` or `A01`
    pub static ref WELL_TOKEN: Regex = Regex::new(r"^([A-Z])(\d+)$").expect("valid well pattern");
    /// Plate tag, e.g. `plate2`
    pub static ref PLATE_TOKEN: Regex = Regex::new(r"^plate(\d+)$").expect("valid plate pattern");
    /// Concentration tag in mg/mL, e.g. `60mgml`
    pub static ref CONCENTRATION_TOKEN: Regex =
        Regex::new(r"^(\d+)mgml$").expect("valid concentration pattern");
    /// Edge capture qualifier
    pub static ref EDGE_TOKEN: Regex = Regex::new(r"^edge$").expect("valid edge pattern");
}

/// Meaning of one underscore-delimited token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Well label split into row letter and column
    Well {
        /// Row letter
        row: char,
        /// Column number
        column: u32,
    },
    /// `plate<N>`
    Plate(u32),
    /// `<N>mgml`
    Concentration(u32),
    /// `edge`
    Edge,
    /// Anything else (dates, operator initials, `multiwell`, ...)
    Other,
}

impl Token {
    /// Classify a token. `Err` carries the token when its number overflows.
    pub fn classify(token: &str) -> Result<Token, String> {
        let number = |digits: &str| digits.parse::<u32>().map_err(|_| token.to_string());

        if let Some(caps) = WELL_TOKEN.captures(token) {
            let row = caps[1].chars().next().ok_or_else(|| token.to_string())?;
            return Ok(Token::Well {
                row,
                column: number(&caps[2])?,
            });
        }
        if let Some(caps) = PLATE_TOKEN.captures(token) {
            return Ok(Token::Plate(number(&caps[1])?));
        }
        if let Some(caps) = CONCENTRATION_TOKEN.captures(token) {
            return Ok(Token::Concentration(number(&caps[1])?));
        }
        if EDGE_TOKEN.is_match(token) {
            return Ok(Token::Edge);
        }
        Ok(Token::Other)
    }
}

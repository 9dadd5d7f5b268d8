use chrono::NaiveDate;
use hotel_core::BookingId;
use std::io::{BufRead, Write};

use crate::error::InputError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Line-oriented prompts over any reader/writer pair
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `  > label: ` and read one line without its line ending
    pub fn ask(&mut self, label: &str) -> Result<String, InputError> {
        write!(self.output, "  > {}: ", label)?;
        self.read_line()
    }

    /// Read a line with no label (confirmation prompts print their own text)
    pub fn read_line(&mut self) -> Result<String, InputError> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputError::Eof);
        }
        Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
    }

    pub fn ask_room_number(&mut self, label: &str) -> Result<u32, InputError> {
        let raw = self.ask(label)?;
        parse_room_number(&raw)
    }

    pub fn ask_date(&mut self, label: &str) -> Result<NaiveDate, InputError> {
        let raw = self.ask(label)?;
        parse_date(&raw)
    }

    pub fn ask_booking_id(&mut self, label: &str) -> Result<BookingId, InputError> {
        let raw = self.ask(label)?;
        BookingId::parse(&raw).map_err(|_| InputError::BlankBookingId)
    }
}

pub fn parse_room_number(raw: &str) -> Result<u32, InputError> {
    raw.trim()
        .parse()
        .map_err(|_| InputError::InvalidNumber(raw.trim().to_string()))
}

/// Strict `YYYY-MM-DD`
pub fn parse_date(raw: &str) -> Result<NaiveDate, InputError> {
    let trimmed = raw.trim();
    let shaped = trimmed.len() == 10
        && trimmed.char_indices().all(|(i, c)| match i {
            4 | 7 => c == '-',
            _ => c.is_ascii_digit(),
        });
    if !shaped {
        return Err(InputError::InvalidDate(trimmed.to_string()));
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| InputError::InvalidDate(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date(" 2025-12-25 ").unwrap(),
            NaiveDate::from_ymd_opt(2025, 12, 25).unwrap()
        );
        assert!(parse_date("2025-2-5").is_err());
        assert!(parse_date("2025/12/25").is_err());
        assert!(parse_date("2025-02-30").is_err());
        assert!(parse_date("").is_err());
        assert_eq!(
            parse_date("2025-02-30").unwrap_err().to_string(),
            "Invalid date: 2025-02-30. Use yyyy-MM-dd (e.g. 2025-12-25)"
        );
    }

    #[test]
    fn test_parse_room_number() {
        assert_eq!(parse_room_number(" 301 ").unwrap(), 301);
        assert!(matches!(parse_room_number("abc"), Err(InputError::InvalidNumber(_))));
        assert!(parse_room_number("-1").is_err());
        assert_eq!(
            parse_room_number(" 1o1 ").unwrap_err().to_string(),
            "Invalid room number: 1o1"
        );
    }

    #[test]
    fn test_prompter_reads_lines_and_eof() {
        let input = Cursor::new("Maria\r\nbk1001\n");
        let mut prompter = Prompter::new(input, Vec::new());

        assert_eq!(prompter.ask("Guest name").unwrap(), "Maria");
        assert_eq!(prompter.ask_booking_id("Booking ID").unwrap().as_str(), "BK1001");
        assert!(matches!(prompter.ask("Email"), Err(InputError::Eof)));

        let out = String::from_utf8(prompter.into_output()).unwrap();
        assert_eq!(out, "  > Guest name:   > Booking ID:   > Email: ");
    }
}

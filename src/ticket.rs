//! The "lucky ticket" check
//!
//! A ticket number is lucky when the digits of its first half add up to
//! the same value as the digits of its second half, e.g. `385916`.

use crate::error::TicketError;

pub fn is_lucky(ticket: &str) -> Result<bool, TicketError> {
    if ticket.is_empty() {
        return Err(TicketError::Empty);
    }
    let digits = ticket
        .chars()
        .map(|c| c.to_digit(10).ok_or(TicketError::NotADigit(c)))
        .collect::<Result<Vec<u32>, _>>()?;
    if digits.len() % 2 != 0 {
        return Err(TicketError::OddLength(digits.len()));
    }

    let (first, last) = digits.split_at(digits.len() / 2);
    Ok(first.iter().sum::<u32>() == last.iter().sum::<u32>())
}

//!  Skybook Booking Agent
//!
//!  Copyright (C) 2026  Mamy Ratsimbazafy
//!
//!  This program is free software: you can redistribute it and/or modify
//!  it under the terms of the GNU Affero General Public License as published by
//!  the Free Software Foundation, either version 3 of the License, or
//!  (at your option) any later version.
//!
//!  This program is distributed in the hope that it will be useful,
//!  but WITHOUT ANY WARRANTY; without even the implied warranty of
//!  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//!  GNU Affero General Public License for more details.
//!
//!  You should have received a copy of the GNU Affero General Public License
//!  along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! # Results Parser
//!
//! Side-effect free extraction of the booking token from a search reply and
//! of the confirmation code from a booking reply.
//!
//! A field counts as present when it holds a string or a number. `null`,
//! booleans, arrays and objects are treated like a missing field.

use crate::booking_payload::{BookingToken, ConfirmationCode};
use crate::error::ResponseFormatError;
use serde_json::Value;

/// `data[0].booking_token` of a search reply. Later results are ignored.
pub fn extract_booking_token(body: &str) -> Result<BookingToken, ResponseFormatError> {
    let reply: Value = serde_json::from_str(body)?;

    let first = reply
        .get("data")
        .and_then(Value::as_array)
        .and_then(|results| results.first())
        .ok_or(ResponseFormatError::MissingField("data"))?;

    first
        .get("booking_token")
        .filter(|token| token.is_string() || token.is_number())
        .cloned()
        .map(BookingToken::new)
        .ok_or(ResponseFormatError::MissingField("booking_token"))
}

/// `pnr` of a booking reply.
pub fn extract_confirmation_code(body: &str) -> Result<ConfirmationCode, ResponseFormatError> {
    let reply: Value = serde_json::from_str(body)?;

    match reply.get("pnr") {
        Some(Value::String(code)) => Ok(ConfirmationCode::new(code.as_str())),
        Some(Value::Number(code)) => Ok(ConfirmationCode::new(code.to_string())),
        _ => Err(ResponseFormatError::MissingField("pnr")),
    }
}

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

//! # Booking Errors
//!
//! Every failure of a search-and-book run. Each variant displays exactly one
//! user-facing message; the underlying cause stays reachable through
//! `std::error::Error::source` for the debug log.

use std::time::Duration;
use thiserror::Error;

/// Failure of a single run, from argument validation to the booking reply.
#[derive(Debug, Error)]
pub enum BookingError {
    #[error("Please provide the codes for departure and arrival airports")]
    InvalidAirportCode(String),

    #[error("Please specify the date in the format \"YYYY-MM-DD\"")]
    InvalidDateFormat(String),

    #[error("Could not find the flight. Got no response from the server.")]
    SearchUnreachable(#[source] TransportError),

    #[error("Search failed. Server's reply has unexpected format.")]
    SearchResponseMalformed(#[source] ResponseFormatError),

    #[error("Could not book the flight. Got no response from the server.")]
    BookingUnreachable(#[source] TransportError),

    #[error("Booking failed. Server's reply has unexpected format.")]
    BookingResponseMalformed(#[source] ResponseFormatError),

    #[error("Could not set up the HTTP client.")]
    ClientSetup(#[source] wreq::Error),
}

/// No usable reply came back from the server.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Http(#[from] wreq::Error),

    #[error("no reply within {0:?}")]
    TimedOut(Duration),
}

/// A reply came back but does not carry the expected field.
#[derive(Debug, Error)]
pub enum ResponseFormatError {
    #[error("reply is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("reply has no usable `{0}`")]
    MissingField(&'static str),
}

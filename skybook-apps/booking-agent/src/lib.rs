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

// Library for skybook-booking-agent
// Search a flight and book it for a single passenger

mod booking_client;
mod booking_payload;
pub mod error;
mod results_parser;
mod search_query_builder;

pub use booking_client::{
    ClientConfig, DEFAULT_BOOKING_URL, DEFAULT_SEARCH_URL, DEFAULT_TIMEOUT_SECS,
    FlightBookingClient,
};
pub use booking_payload::{
    BookingPayload, BookingToken, ConfirmationCode, DEFAULT_CURRENCY, Passenger,
};
pub use error::{BookingError, ResponseFormatError, TransportError};
pub use results_parser::{extract_booking_token, extract_confirmation_code};
pub use search_query_builder::{
    SearchParameters, SearchRequest, SearchRequestBuilder, SortBy, TripType,
};

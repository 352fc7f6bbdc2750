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

//! # Search Query Builder
//!
//! Side-effect free validation of the raw search input and its mapping to
//! the flight-search query parameters.

use crate::error::BookingError;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

static AIRPORT_CODE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z]+$").unwrap());
// chrono alone accepts unpadded fields such as `2024-6-1`.
static ISO_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap());

/// Fixed: only the first search result is ever booked.
const RESULT_LIMIT: &str = "1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TripType {
    #[default]
    OneWay,
    Return {
        nights: u32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    Cheapest,
    Fastest,
}

/// A validated search. Built once per run through [`SearchRequest::builder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    from_airport: String,
    to_airport: String,
    depart_date: NaiveDate,
    trip_type: TripType,
    bags: u32,
    sort_by: SortBy,
}

impl SearchRequest {
    pub fn builder(
        from_airport: impl Into<String>,
        to_airport: impl Into<String>,
        depart_date: impl Into<String>,
    ) -> SearchRequestBuilder {
        SearchRequestBuilder {
            from_airport: from_airport.into(),
            to_airport: to_airport.into(),
            depart_date: depart_date.into(),
            trip_type: TripType::OneWay,
            bags: 0,
            sort_by: SortBy::Cheapest,
        }
    }

    pub fn from_airport(&self) -> &str {
        &self.from_airport
    }

    pub fn to_airport(&self) -> &str {
        &self.to_airport
    }

    pub fn depart_date(&self) -> NaiveDate {
        self.depart_date
    }

    pub fn trip_type(&self) -> TripType {
        self.trip_type
    }

    pub fn bags(&self) -> u32 {
        self.bags
    }

    pub fn sort_by(&self) -> SortBy {
        self.sort_by
    }

    /// Map the request to the provider's query parameters.
    ///
    /// The single departure date fills both ends of the outbound window,
    /// always formatted day/month/year.
    pub fn to_search_parameters(&self) -> SearchParameters {
        let date = self.depart_date.format("%d/%m/%Y").to_string();

        let mut params = SearchParameters::default();
        params.push("flyFrom", self.from_airport.clone());
        params.push("to", self.to_airport.clone());
        params.push("dateFrom", date.clone());
        params.push("dateTo", date);
        params.push("limit", RESULT_LIMIT.to_string());

        if let TripType::Return { nights } = self.trip_type {
            params.push("typeFlight", "return".to_string());
            params.push("daysInDestinationFrom", nights.to_string());
            params.push("daysInDestinationTo", nights.to_string());
        }

        // Cheapest is the provider's default ordering, so it has no key.
        if self.sort_by == SortBy::Fastest {
            params.push("sort", "duration".to_string());
        }

        params
    }
}

#[derive(Debug, Clone)]
pub struct SearchRequestBuilder {
    from_airport: String,
    to_airport: String,
    depart_date: String,
    trip_type: TripType,
    bags: u32,
    sort_by: SortBy,
}

impl SearchRequestBuilder {
    pub fn trip_type(mut self, trip_type: TripType) -> Self {
        self.trip_type = trip_type;
        self
    }

    pub fn bags(mut self, bags: u32) -> Self {
        self.bags = bags;
        self
    }

    pub fn sort_by(mut self, sort_by: SortBy) -> Self {
        self.sort_by = sort_by;
        self
    }

    pub fn build(self) -> Result<SearchRequest, BookingError> {
        validate_airport_codes(&self.from_airport, &self.to_airport)?;
        let depart_date = parse_iso_date(&self.depart_date)?;

        Ok(SearchRequest {
            from_airport: self.from_airport,
            to_airport: self.to_airport,
            depart_date,
            trip_type: self.trip_type,
            bags: self.bags,
            sort_by: self.sort_by,
        })
    }
}

fn validate_airport_codes(from_airport: &str, to_airport: &str) -> Result<(), BookingError> {
    for code in [from_airport, to_airport] {
        if !AIRPORT_CODE_RE.is_match(code) {
            return Err(BookingError::InvalidAirportCode(code.to_string()));
        }
    }
    Ok(())
}

/// Parse a strict `YYYY-MM-DD` calendar date.
fn parse_iso_date(s: &str) -> Result<NaiveDate, BookingError> {
    if !ISO_DATE_RE.is_match(s) {
        return Err(BookingError::InvalidDateFormat(s.to_string()));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| BookingError::InvalidDateFormat(s.to_string()))
}

/// Ordered provider query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParameters {
    entries: Vec<(&'static str, String)>,
}

impl SearchParameters {
    fn push(&mut self, key: &'static str, value: String) {
        self.entries.push((key, value));
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Percent-encoded `key=value&...` string, in insertion order.
    pub fn to_query_string(&self) -> String {
        self.entries
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

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

//! # Booking Payload
//!
//! JSON body of the booking request: one passenger, bag count, currency and
//! the token of the itinerary found by the search.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_CURRENCY: &str = "CZK";

/// Passenger record in the booking provider's wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Passenger {
    pub title: String,
    pub first_name: String,
    pub last_name: String,
    pub birthday: NaiveDate,
    pub nationality: String,
    #[serde(rename = "documentID")]
    pub document_id: String,
    pub email: String,
    pub phone: String,
}

impl Default for Passenger {
    fn default() -> Self {
        Self {
            title: "Mrs".to_string(),
            first_name: "Elena".to_string(),
            last_name: "Bondarenko".to_string(),
            birthday: NaiveDate::from_ymd_opt(1983, 7, 7).unwrap_or_default(),
            nationality: "RU".to_string(),
            document_id: "53111111".to_string(),
            email: "elleno@yandex.ru".to_string(),
            phone: "+7 9031111111".to_string(),
        }
    }
}

/// Opaque token naming the itinerary to book.
///
/// Sent back exactly as the search reply carried it, string or number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BookingToken(Value);

impl BookingToken {
    pub fn new(token: impl Into<Value>) -> Self {
        Self(token.into())
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn as_str(&self) -> Option<&str> {
        self.0.as_str()
    }
}

/// Booking confirmation code (PNR).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationCode(String);

impl ConfirmationCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ConfirmationCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingPayload {
    pub bags: u32,
    pub passengers: Vec<Passenger>,
    pub currency: String,
    pub booking_token: BookingToken,
}

impl BookingPayload {
    pub fn new(
        bags: u32,
        passenger: Passenger,
        currency: impl Into<String>,
        booking_token: BookingToken,
    ) -> Self {
        Self {
            bags,
            passengers: vec![passenger],
            currency: currency.into(),
            booking_token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_wire_format() {
        let payload = BookingPayload::new(
            2,
            Passenger::default(),
            DEFAULT_CURRENCY,
            BookingToken::new("abc123"),
        );

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            json!({
                "bags": 2,
                "passengers": [{
                    "title": "Mrs",
                    "firstName": "Elena",
                    "lastName": "Bondarenko",
                    "birthday": "1983-07-07",
                    "nationality": "RU",
                    "documentID": "53111111",
                    "email": "elleno@yandex.ru",
                    "phone": "+7 9031111111"
                }],
                "currency": "CZK",
                "booking_token": "abc123"
            })
        );
    }

    #[test]
    fn test_numeric_token_stays_numeric() {
        let payload = BookingPayload::new(
            0,
            Passenger::default(),
            DEFAULT_CURRENCY,
            BookingToken::new(987654321u64),
        );

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["booking_token"], json!(987654321u64));
        assert_eq!(payload.booking_token.as_str(), None);
    }

    #[test]
    fn test_passenger_from_json() {
        let passenger: Passenger = serde_json::from_value(json!({
            "title": "Mr",
            "firstName": "Jan",
            "lastName": "Novak",
            "birthday": "1990-01-31",
            "nationality": "CZ",
            "documentID": "X1234567",
            "email": "jan@example.com",
            "phone": "+420 123456789"
        }))
        .unwrap();

        assert_eq!(passenger.first_name, "Jan");
        assert_eq!(passenger.document_id, "X1234567");
        assert_eq!(
            passenger.birthday,
            NaiveDate::from_ymd_opt(1990, 1, 31).unwrap()
        );
    }

    #[test]
    fn test_passenger_rejects_bad_birthday() {
        let result: Result<Passenger, _> = serde_json::from_value(json!({
            "title": "Mr",
            "firstName": "Jan",
            "lastName": "Novak",
            "birthday": "31/01/1990",
            "nationality": "CZ",
            "documentID": "X1234567",
            "email": "jan@example.com",
            "phone": "+420 123456789"
        }));
        assert!(result.is_err());
    }
}

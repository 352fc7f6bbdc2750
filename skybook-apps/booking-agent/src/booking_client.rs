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

//! # Flight Booking Client
//!
//! Effectful (time, network) operations: one search request, then one
//! booking request. Nothing is retried; the first failure ends the run.

use crate::booking_payload::{
    BookingPayload, BookingToken, ConfirmationCode, DEFAULT_CURRENCY, Passenger,
};
use crate::error::{BookingError, TransportError};
use crate::results_parser::{extract_booking_token, extract_confirmation_code};
use crate::search_query_builder::{SearchParameters, SearchRequest};
use std::sync::Arc;
use std::time::{Duration, Instant};
use wreq::redirect::Policy;

pub const DEFAULT_SEARCH_URL: &str = "https://api.skypicker.com/flights";
pub const DEFAULT_BOOKING_URL: &str = "http://128.199.48.38:8080/booking";
pub const DEFAULT_TIMEOUT_SECS: u64 = 7;

/// Endpoints, per-request time bounds and the traveller to book for.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub search_url: String,
    pub booking_url: String,
    pub search_timeout: Duration,
    pub booking_timeout: Duration,
    pub passenger: Passenger,
    pub currency: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            search_url: DEFAULT_SEARCH_URL.to_string(),
            booking_url: DEFAULT_BOOKING_URL.to_string(),
            search_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            booking_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            passenger: Passenger::default(),
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

#[derive(Clone)]
pub struct FlightBookingClient {
    client: Arc<wreq::Client>,
    config: ClientConfig,
}

impl FlightBookingClient {
    pub fn new(config: ClientConfig) -> Result<Self, BookingError> {
        let client = wreq::Client::builder()
            .redirect(Policy::default())
            .connect_timeout(config.search_timeout.min(config.booking_timeout))
            .build()
            .map_err(BookingError::ClientSetup)?;
        Ok(Self {
            client: Arc::new(client),
            config,
        })
    }

    /// Full search URL for `params`.
    pub fn search_url(&self, params: &SearchParameters) -> String {
        let endpoint = &self.config.search_url;
        let separator = if !endpoint.contains('?') {
            "?"
        } else if endpoint.ends_with('?') || endpoint.ends_with('&') {
            ""
        } else {
            "&"
        };
        format!("{}{}{}", endpoint, separator, params.to_query_string())
    }
}

impl FlightBookingClient {
    pub async fn search(&self, params: &SearchParameters) -> Result<BookingToken, BookingError> {
        let url = self.search_url(params);
        tracing::debug!("[search] GET {}", url);

        let start = Instant::now();
        let request = self.client.get(url);
        let body = fetch_body(request, self.config.search_timeout)
            .await
            .map_err(|e| {
                tracing::debug!("[search] no reply after {:?}: {}", start.elapsed(), e);
                BookingError::SearchUnreachable(e)
            })?;
        tracing::debug!(
            "[search] reply read in {:?}: {} bytes",
            start.elapsed(),
            body.len()
        );

        extract_booking_token(&body).map_err(|e| {
            let preview = body.chars().take(300).collect::<String>();
            tracing::debug!("[search] {}. Body preview: {}", e, preview);
            BookingError::SearchResponseMalformed(e)
        })
    }

    pub fn build_booking_payload(
        &self,
        request: &SearchRequest,
        token: BookingToken,
    ) -> BookingPayload {
        BookingPayload::new(
            request.bags(),
            self.config.passenger.clone(),
            self.config.currency.clone(),
            token,
        )
    }

    pub async fn book(&self, payload: &BookingPayload) -> Result<ConfirmationCode, BookingError> {
        tracing::debug!(
            "[book] POST {} (bags={}, currency={})",
            self.config.booking_url,
            payload.bags,
            payload.currency
        );

        let start = Instant::now();
        let request = self
            .client
            .post(&self.config.booking_url)
            .header("Content-Type", "application/json")
            .json(payload);
        let body = fetch_body(request, self.config.booking_timeout)
            .await
            .map_err(|e| {
                tracing::debug!("[book] no reply after {:?}: {}", start.elapsed(), e);
                BookingError::BookingUnreachable(e)
            })?;
        tracing::debug!(
            "[book] reply read in {:?}: {} bytes",
            start.elapsed(),
            body.len()
        );

        extract_confirmation_code(&body).map_err(|e| {
            let preview = body.chars().take(300).collect::<String>();
            tracing::debug!("[book] {}. Body preview: {}", e, preview);
            BookingError::BookingResponseMalformed(e)
        })
    }

    /// Search, then book the first result.
    pub async fn search_and_book(
        &self,
        request: &SearchRequest,
    ) -> Result<ConfirmationCode, BookingError> {
        let overall_start = Instant::now();
        let params = request.to_search_parameters();

        let token = self.search(&params).await?;
        tracing::info!(
            "Found a {} -> {} flight on {}",
            request.from_airport(),
            request.to_airport(),
            request.depart_date()
        );

        let payload = self.build_booking_payload(request, token);
        let code = self.book(&payload).await?;
        tracing::info!("Booked as {} in {:?}", code, overall_start.elapsed());
        Ok(code)
    }
}

/// Send `request` and read the whole body, both within `limit`.
///
/// The HTTP status is only logged: the reply body alone decides success.
async fn fetch_body(
    request: wreq::RequestBuilder,
    limit: Duration,
) -> Result<String, TransportError> {
    let exchange = async {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            tracing::debug!("HTTP Status: {}", status.as_u16());
        } else {
            tracing::warn!(
                "HTTP Status: {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            );
        }
        response.text().await
    };

    match tokio::time::timeout(limit, exchange).await {
        Ok(Ok(body)) => Ok(body),
        Ok(Err(e)) => Err(TransportError::Http(e)),
        Err(_) => Err(TransportError::TimedOut(limit)),
    }
}

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

//! CLI that searches a flight and books the first result.
//!
//! # Examples
//!
//! ```bash
//! # One-way, cheapest, no bags
//! skybook-book --from PRG --to LHR --date 2024-06-01
//!
//! # Return after 5 nights, fastest, two bags
//! skybook-book --from PRG --to LHR --date 2024-06-01 --return 5 --fastest --bags 2
//!
//! # Book for someone else
//! skybook-book --from PRG --to LHR --date 2024-06-01 --passenger jan.json --currency EUR
//! ```
//!
//! On success the confirmation code is the only thing written to stdout.

use anyhow::{Context, Result};
use clap::Parser;
use skybook_booking_agent::{
    BookingError, ClientConfig, DEFAULT_BOOKING_URL, DEFAULT_CURRENCY, DEFAULT_SEARCH_URL,
    DEFAULT_TIMEOUT_SECS, FlightBookingClient, Passenger, SearchRequest, SortBy, TripType,
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

/// CLI arguments
#[derive(Parser, Debug)]
#[command(name = "skybook-book")]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Departure airport code (e.g., PRG)
    #[arg(long)]
    from: String,

    /// Arrival airport code (e.g., LHR)
    #[arg(long)]
    to: String,

    /// Departure date (YYYY-MM-DD)
    #[arg(long)]
    date: String,

    /// One-way flight (default)
    #[arg(long, conflicts_with = "return_nights")]
    one_way: bool,

    /// Return flight, with the number of nights at the destination
    #[arg(long = "return", value_name = "NIGHTS")]
    return_nights: Option<u32>,

    /// Number of bags
    #[arg(long, default_value_t = 0)]
    bags: u32,

    /// Book the cheapest flight (default)
    #[arg(long, conflicts_with = "fastest")]
    cheapest: bool,

    /// Book the fastest flight
    #[arg(long)]
    fastest: bool,

    /// JSON file with the passenger to book for
    #[arg(long, value_name = "FILE")]
    passenger: Option<PathBuf>,

    /// Currency of the booking
    #[arg(long, default_value = DEFAULT_CURRENCY)]
    currency: String,

    /// Flight search endpoint
    #[arg(long, default_value = DEFAULT_SEARCH_URL)]
    search_url: String,

    /// Booking endpoint
    #[arg(long, default_value = DEFAULT_BOOKING_URL)]
    booking_url: String,

    /// Search request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    search_timeout: u64,

    /// Booking request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    booking_timeout: u64,

    /// Print the search URL without making any request
    #[arg(long)]
    dry_run: bool,

    /// Verbose output (on stderr)
    #[arg(short, long, default_value = "false")]
    verbose: bool,
}

impl CliArgs {
    fn trip_type(&self) -> TripType {
        match (self.one_way, self.return_nights) {
            (false, Some(nights)) => TripType::Return { nights },
            _ => TripType::OneWay,
        }
    }

    fn sort_by(&self) -> SortBy {
        if self.fastest && !self.cheapest {
            SortBy::Fastest
        } else {
            SortBy::Cheapest
        }
    }
}

/// Configure logging based on verbosity level. stdout is kept for the result.
fn setup_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_timer(tracing_subscriber::fmt::time::ChronoUtc::rfc_3339())
        .with_writer(std::io::stderr)
        .init();
}

async fn load_passenger(path: &Path) -> Result<Passenger> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read passenger file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Invalid passenger record in {}", path.display()))
}

async fn run(args: CliArgs) -> Result<String> {
    let request = SearchRequest::builder(&args.from, &args.to, &args.date)
        .trip_type(args.trip_type())
        .bags(args.bags)
        .sort_by(args.sort_by())
        .build()?;

    tracing::info!(
        "Parsed request: {} -> {} on {} ({:?}, {:?}, {} bags)",
        request.from_airport(),
        request.to_airport(),
        request.depart_date(),
        request.trip_type(),
        request.sort_by(),
        request.bags()
    );

    let passenger = match &args.passenger {
        Some(path) => load_passenger(path).await?,
        None => Passenger::default(),
    };

    let config = ClientConfig {
        search_url: args.search_url,
        booking_url: args.booking_url,
        search_timeout: Duration::from_secs(args.search_timeout),
        booking_timeout: Duration::from_secs(args.booking_timeout),
        passenger,
        currency: args.currency,
    };
    let client = FlightBookingClient::new(config)?;

    if args.dry_run {
        return Ok(client.search_url(&request.to_search_parameters()));
    }

    let code = client.search_and_book(&request).await?;
    Ok(code.to_string())
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        // --help and --version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };
    setup_logging(args.verbose);
    tracing::debug!("Args: {:?}", args);

    match run(args).await {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!("Run failed: {:?}", e);
            match e.downcast_ref::<BookingError>() {
                Some(booking_error) => eprintln!("{}", booking_error),
                None => eprintln!("Error: {:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}

//! The Traxo API client.

use std::fmt::Display;

use reqwest::header;
use serde_json::Value;
use tracing::debug;

use crate::credentials::Credentials;
use crate::error::{Error, Result};
use crate::models::{Member, Trip, TripOEmbed};
use crate::options::{PastTripsQuery, StreamQuery, TripQuery, TripsQuery};
use crate::query::ParameterSet;

const API_URL: &str = "https://api.traxo.com/v2/";

/// Client for the Traxo travel-tracking API.
///
/// All methods take `&self`; credentials are immutable and every call builds
/// its own parameter set, so one client can be shared across tasks. The
/// client imposes no retry, caching or timeout policy of its own.
#[derive(Debug)]
pub struct TraxoClient {
    http: reqwest::Client,
    credentials: Credentials,
    base_url: String,
}

impl TraxoClient {
    pub fn new(credentials: Credentials) -> Self {
        Self::with_base_url(credentials, API_URL)
    }

    /// Point the client at a different API root (staging, mock server).
    pub fn with_base_url(credentials: Credentials, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self {
            http: reqwest::Client::new(),
            credentials,
            base_url,
        }
    }

    /// Build a client from `TRAXO_ACCESS_TOKEN` (required) plus
    /// `TRAXO_CONSUMER_KEY` / `TRAXO_CONSUMER_SECRET` (optional).
    pub fn from_env() -> Result<Self> {
        let access_token = std::env::var("TRAXO_ACCESS_TOKEN")
            .map_err(|_| Error::MissingEnv("TRAXO_ACCESS_TOKEN"))?;
        let consumer_key = std::env::var("TRAXO_CONSUMER_KEY").unwrap_or_default();
        let consumer_secret = std::env::var("TRAXO_CONSUMER_SECRET").unwrap_or_default();
        Ok(Self::new(Credentials::new(
            consumer_key,
            consumer_secret,
            access_token,
        )))
    }

    /// `GET me` - the authenticated member's profile.
    pub async fn member(&self) -> Result<Member> {
        let json = self.get_json("me", &ParameterSet::new()).await?;
        Member::from_json(json)
    }

    /// `GET stream` - the member's activity stream, as raw JSON.
    pub async fn stream(&self, options: &StreamQuery) -> Result<Value> {
        self.get_json("stream", &options.to_params()).await
    }

    /// `GET trips` - upcoming trips (defaults to `start=today` when no
    /// options are given).
    pub async fn trips(&self, options: &TripsQuery) -> Result<Vec<Trip>> {
        let json = self.get_json("trips", &options.to_params()).await?;
        Trip::from_json_array(json)
    }

    /// `GET trips/{id}` - a single trip.
    pub async fn trip(&self, trip_id: impl Display, options: &TripQuery) -> Result<Trip> {
        let path = format!("trips/{trip_id}");
        let json = self.get_json(&path, &options.to_params()).await?;
        Trip::from_json(json)
    }

    /// `GET trips/current` - the trip in progress, if any.
    pub async fn current_trip(&self, options: &TripQuery) -> Result<Trip> {
        let json = self.get_json("trips/current", &options.to_params()).await?;
        Trip::from_json(json)
    }

    /// `GET trips/past` - completed trips.
    pub async fn past_trips(&self, options: &PastTripsQuery) -> Result<Vec<Trip>> {
        let json = self.get_json("trips/past", &options.to_params()).await?;
        Trip::from_json_array(json)
    }

    /// `GET trips/oembed/{id}` - an embeddable document for a trip.
    pub async fn trip_oembed(&self, trip_id: impl Display) -> Result<TripOEmbed> {
        let path = format!("trips/oembed/{trip_id}");
        let json = self.get_json(&path, &ParameterSet::new()).await?;
        TripOEmbed::from_json(json)
    }

    /// Issue an authenticated GET and return the parsed JSON body.
    async fn get_json(&self, path: &str, params: &ParameterSet) -> Result<Value> {
        let url = format!("{}{}{}", self.base_url, path, params.to_query_string());
        debug!("GET {url}");

        let response = self
            .http
            .get(&url)
            .header(header::AUTHORIZATION, self.credentials.auth_header())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            debug!("GET {url} returned {status}");
            let body = response.text().await?;
            return Err(Error::Api { status, body });
        }

        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| Error::MalformedResponse(format!("invalid JSON body: {e}")))
    }
}

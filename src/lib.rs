pub mod client;
pub mod credentials;
pub mod error;
pub mod models;
pub mod options;
pub mod query;

pub use client::TraxoClient;
pub use credentials::Credentials;
pub use error::{Error, Result};
pub use models::{Member, Trip, TripOEmbed};
pub use options::{FlagValue, PastTripsQuery, StreamQuery, TripQuery, TripsQuery};
pub use query::{ParamValue, ParameterSet};

//! Meraki Dashboard API access

mod client;
mod link;
mod types;

pub(crate) use client::MerakiClient;

//! Core module - pagination and device counting, independent of the HTTP client

mod counter;
mod pages;
mod tally;

pub(crate) use counter::count_devices;
pub(crate) use pages::{Page, PageRequest, PageSource};
pub(crate) use tally::DeviceName;

#[cfg(test)]
pub(crate) use pages::testing;

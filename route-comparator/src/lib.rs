//! Bus route comparator server.
//!
//! A web application that answers: "Which bus routes take me from this
//! stop to that one, and which of them is fastest or cheapest?"

pub mod compare;
pub mod config;
pub mod domain;
pub mod estimate;
pub mod store;
pub mod web;

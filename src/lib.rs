//! # Mintfee
//!
//! Library for estimating Ethereum minting transaction costs across a range
//! of gas prices.

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod fees;
pub mod metrics;
pub mod price;
pub mod types;
pub mod version;

//! The fee estimation core.
//!
//! Pure and synchronous: gas price sequence generation, per-row cost
//! arithmetic in exact wei, and the gwei display formatter. All market data
//! comes in as an immutable [`MarketSnapshot`](crate::types::MarketSnapshot);
//! nothing here performs I/O or holds state between calls.

mod sequence;
pub use sequence::{generate_sequence, round5};

mod table;
pub use table::{compute_row, transaction_cost_wei};

mod format;
pub use format::{format_gwei, format_gwei_with};

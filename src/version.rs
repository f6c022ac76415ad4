//! Estimator version.

/// The short version information for mintfee.
pub const MINTFEE_SHORT_VERSION: &str = env!("MINTFEE_SHORT_VERSION");

/// The long version information for mintfee.
pub const MINTFEE_LONG_VERSION: &str = concat!(
    env!("MINTFEE_LONG_VERSION_0"),
    "\n",
    env!("MINTFEE_LONG_VERSION_1"),
    "\n",
    env!("MINTFEE_LONG_VERSION_2"),
    "\n",
    env!("MINTFEE_LONG_VERSION_3"),
    "\n",
    env!("MINTFEE_LONG_VERSION_4")
);

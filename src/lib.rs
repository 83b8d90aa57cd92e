//! Client library for the AfterShip v4 parcel-tracking API.
//!
//! ```no_run
//! use aftership::{Client, ClientConfig};
//!
//! # async fn run() -> aftership::Result<()> {
//! let client = Client::new(ClientConfig::new("your-aftership-api-key"))?;
//!
//! let tracking = client.tracking("1ZA2207X0444990982", "ups").await?;
//! println!("{:?} {:?}", tracking.status(), tracking.courier());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{ClientConfig, DEFAULT_ENDPOINT};
pub use crate::core::client::Client;
pub use crate::domain::{Checkpoint, Courier, Tag, Tracking};
pub use crate::utils::date::DateValue;
pub use crate::utils::error::{Error, Result};

pub mod client;
pub mod request;
pub mod response;

pub use client::Client;
pub use request::RequestExecutor;
pub use response::{decode, unwrap_data, RawResponse};

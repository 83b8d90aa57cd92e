// Domain layer: typed wrappers over the API's JSON payloads.

pub mod attributes;
pub mod checkpoint;
pub mod courier;
pub mod tag;
pub mod tracking;

pub use attributes::Attributes;
pub use checkpoint::Checkpoint;
pub use courier::Courier;
pub use tag::Tag;
pub use tracking::Tracking;

use std::fmt;

use crate::utils::error::{Error, Result};

/// Machine-readable delivery status of a tracking or checkpoint.
///
/// The set is fixed by the API
/// (https://www.aftership.com/docs/api/4/delivery-status); a tag outside it
/// is a data error, never a silent pass-through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Pending,
    InfoReceived,
    InTransit,
    OutForDelivery,
    AttemptFail,
    Delivered,
    Exception,
    Expired,
}

impl Tag {
    pub fn parse(value: &str) -> Result<Tag> {
        match value {
            "Pending" => Ok(Tag::Pending),
            "InfoReceived" => Ok(Tag::InfoReceived),
            "InTransit" => Ok(Tag::InTransit),
            "OutForDelivery" => Ok(Tag::OutForDelivery),
            "AttemptFail" => Ok(Tag::AttemptFail),
            "Delivered" => Ok(Tag::Delivered),
            "Exception" => Ok(Tag::Exception),
            "Expired" => Ok(Tag::Expired),
            other => Err(Error::MalformedResponse(format!("unknown tag {other:?}"))),
        }
    }

    /// The tag as the API spells it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Pending => "Pending",
            Tag::InfoReceived => "InfoReceived",
            Tag::InTransit => "InTransit",
            Tag::OutForDelivery => "OutForDelivery",
            Tag::AttemptFail => "AttemptFail",
            Tag::Delivered => "Delivered",
            Tag::Exception => "Exception",
            Tag::Expired => "Expired",
        }
    }

    /// Human-friendly status label for the tag.
    pub fn status(&self) -> &'static str {
        match self {
            Tag::Pending => "Pending",
            Tag::InfoReceived => "Info Received",
            Tag::InTransit => "In Transit",
            Tag::OutForDelivery => "Out for Delivery",
            Tag::AttemptFail => "Attempt Failed",
            Tag::Delivered => "Delivered",
            Tag::Exception => "Exception",
            Tag::Expired => "Expired",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

use serde_json::Value;

use crate::domain::attributes::{expect_string, Attributes, Setter};
use crate::domain::tag::Tag;
use crate::utils::date::{self, DateValue};
use crate::utils::error::Result;

/// One courier-reported event in a tracking's transit history.
///
/// Built once from the decoded `checkpoints` array and immutable afterwards.
/// Any location field may be absent; `courier` and `status` are derived
/// from `slug` and `tag`.
#[derive(Debug, Clone, Default)]
pub struct Checkpoint {
    slug: Option<String>,
    city: Option<String>,
    state: Option<String>,
    zip: Option<String>,
    country_name: Option<String>,
    country_iso3: Option<String>,
    message: Option<String>,
    tag: Option<Tag>,
    checkpoint_time: Option<DateValue>,
    created_at: Option<DateValue>,
}

impl Checkpoint {
    pub fn slug(&self) -> Option<&str> {
        self.slug.as_deref()
    }

    /// Uppercase display name of the courier, derived from `slug`.
    pub fn courier(&self) -> Option<String> {
        self.slug.as_deref().map(str::to_uppercase)
    }

    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    pub fn zip(&self) -> Option<&str> {
        self.zip.as_deref()
    }

    pub fn country_name(&self) -> Option<&str> {
        self.country_name.as_deref()
    }

    pub fn country_iso3(&self) -> Option<&str> {
        self.country_iso3.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn tag(&self) -> Option<Tag> {
        self.tag
    }

    /// Human-friendly status label, always consistent with `tag`.
    pub fn status(&self) -> Option<&'static str> {
        self.tag.map(|tag| tag.status())
    }

    /// Date and time of the event, as reported by the courier.
    pub fn checkpoint_time(&self) -> Option<DateValue> {
        self.checkpoint_time
    }

    pub fn created_at(&self) -> Option<DateValue> {
        self.created_at
    }
}

impl Attributes for Checkpoint {
    const FIELDS: &'static [(&'static str, Setter<Self>)] = &[
        ("slug", |c, v| {
            c.slug = expect_string("slug", v)?;
            Ok(())
        }),
        ("city", |c, v| {
            c.city = expect_string("city", v)?;
            Ok(())
        }),
        ("state", |c, v| {
            c.state = expect_string("state", v)?;
            Ok(())
        }),
        ("zip", |c, v| {
            c.zip = expect_string("zip", v)?;
            Ok(())
        }),
        ("country_name", |c, v| {
            c.country_name = expect_string("country_name", v)?;
            Ok(())
        }),
        ("country_iso3", |c, v| {
            c.country_iso3 = expect_string("country_iso3", v)?;
            Ok(())
        }),
        ("message", |c, v| {
            c.message = expect_string("message", v)?;
            Ok(())
        }),
        ("tag", set_tag),
        ("checkpoint_time", |c, v| {
            c.checkpoint_time = date::parse_json(v)?;
            Ok(())
        }),
        ("created_at", |c, v| {
            c.created_at = date::parse_json(v)?;
            Ok(())
        }),
    ];
}

fn set_tag(checkpoint: &mut Checkpoint, value: &Value) -> Result<()> {
    checkpoint.tag = expect_string("tag", value)?
        .map(|s| Tag::parse(&s))
        .transpose()?;
    Ok(())
}

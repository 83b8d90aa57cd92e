use serde_json::Value;

use crate::domain::attributes::{
    expect_bool, expect_f64, expect_string, expect_string_array, expect_u64, Attributes, Setter,
};
use crate::domain::checkpoint::Checkpoint;
use crate::domain::tag::Tag;
use crate::utils::date::{self, DateValue};
use crate::utils::error::{Error, Result};

/// One shipment under observation.
///
/// Built once from the `data.tracking` payload and immutable afterwards.
/// `courier` and `status` are derived from `slug` and `tag`; the checkpoint
/// history is exclusively owned and ordered as the API returned it.
#[derive(Debug, Clone, Default)]
pub struct Tracking {
    id: Option<String>,
    tracking_number: Option<String>,
    slug: Option<String>,
    active: Option<bool>,
    custom_fields: Option<Value>,
    customer_name: Option<String>,
    delivery_time: Option<u64>,
    destination_country_iso3: Option<String>,
    origin_country_iso3: Option<String>,
    emails: Vec<String>,
    smses: Vec<String>,
    expected_delivery: Option<DateValue>,
    order_id: Option<String>,
    order_id_path: Option<String>,
    shipment_package_count: Option<u64>,
    shipment_type: Option<String>,
    shipment_weight: Option<f64>,
    shipment_weight_unit: Option<String>,
    signed_by: Option<String>,
    source: Option<String>,
    tag: Option<Tag>,
    title: Option<String>,
    tracked_count: Option<u64>,
    tracking_account_number: Option<String>,
    tracking_postal_code: Option<String>,
    tracking_ship_date: Option<DateValue>,
    unique_token: Option<String>,
    created_at: Option<DateValue>,
    updated_at: Option<DateValue>,
    checkpoints: Vec<Checkpoint>,
}

impl Tracking {
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn tracking_number(&self) -> Option<&str> {
        self.tracking_number.as_deref()
    }

    /// Unique code of the courier, e.g. `ups`.
    pub fn slug(&self) -> Option<&str> {
        self.slug.as_deref()
    }

    /// Uppercase display name of the courier, derived from `slug`.
    pub fn courier(&self) -> Option<String> {
        self.slug.as_deref().map(str::to_uppercase)
    }

    /// Whether the service keeps tracking the shipment. `false` once the
    /// status is `Delivered` or `Expired`.
    pub fn active(&self) -> Option<bool> {
        self.active
    }

    pub fn custom_fields(&self) -> Option<&Value> {
        self.custom_fields.as_ref()
    }

    pub fn customer_name(&self) -> Option<&str> {
        self.customer_name.as_deref()
    }

    /// Total transit time in days.
    pub fn delivery_time(&self) -> Option<u64> {
        self.delivery_time
    }

    pub fn destination_country_iso3(&self) -> Option<&str> {
        self.destination_country_iso3.as_deref()
    }

    pub fn origin_country_iso3(&self) -> Option<&str> {
        self.origin_country_iso3.as_deref()
    }

    /// Email addresses receiving notifications.
    pub fn emails(&self) -> &[String] {
        &self.emails
    }

    /// Phone numbers receiving SMS notifications.
    pub fn smses(&self) -> &[String] {
        &self.smses
    }

    /// Expected delivery, when the courier reports one. May be a plain
    /// date, a naive datetime or a zoned datetime.
    pub fn expected_delivery(&self) -> Option<DateValue> {
        self.expected_delivery
    }

    pub fn order_id(&self) -> Option<&str> {
        self.order_id.as_deref()
    }

    pub fn order_id_path(&self) -> Option<&str> {
        self.order_id_path.as_deref()
    }

    pub fn shipment_package_count(&self) -> Option<u64> {
        self.shipment_package_count
    }

    pub fn shipment_type(&self) -> Option<&str> {
        self.shipment_type.as_deref()
    }

    pub fn shipment_weight(&self) -> Option<f64> {
        self.shipment_weight
    }

    pub fn shipment_weight_unit(&self) -> Option<&str> {
        self.shipment_weight_unit.as_deref()
    }

    pub fn signed_by(&self) -> Option<&str> {
        self.signed_by.as_deref()
    }

    /// How the tracking was added, e.g. `api`.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn tag(&self) -> Option<Tag> {
        self.tag
    }

    /// Human-friendly status label, always consistent with `tag`.
    pub fn status(&self) -> Option<&'static str> {
        self.tag.map(|tag| tag.status())
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn tracked_count(&self) -> Option<u64> {
        self.tracked_count
    }

    pub fn tracking_account_number(&self) -> Option<&str> {
        self.tracking_account_number.as_deref()
    }

    pub fn tracking_postal_code(&self) -> Option<&str> {
        self.tracking_postal_code.as_deref()
    }

    /// Ship date some couriers require, delivered in compact `YYYYMMDD`.
    pub fn tracking_ship_date(&self) -> Option<DateValue> {
        self.tracking_ship_date
    }

    /// Token for the public tracking page at
    /// `https://<username>.aftership.com/<unique_token>`.
    pub fn unique_token(&self) -> Option<&str> {
        self.unique_token.as_deref()
    }

    pub fn created_at(&self) -> Option<DateValue> {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<DateValue> {
        self.updated_at
    }

    /// The transit history, in the order the API reported it.
    pub fn checkpoints(&self) -> &[Checkpoint] {
        &self.checkpoints
    }
}

impl Attributes for Tracking {
    const FIELDS: &'static [(&'static str, Setter<Self>)] = &[
        ("id", |t, v| {
            t.id = expect_string("id", v)?;
            Ok(())
        }),
        ("tracking_number", |t, v| {
            t.tracking_number = expect_string("tracking_number", v)?;
            Ok(())
        }),
        ("slug", |t, v| {
            t.slug = expect_string("slug", v)?;
            Ok(())
        }),
        ("active", |t, v| {
            t.active = expect_bool("active", v)?;
            Ok(())
        }),
        ("custom_fields", |t, v| {
            t.custom_fields = match v {
                Value::Null => None,
                other => Some(other.clone()),
            };
            Ok(())
        }),
        ("customer_name", |t, v| {
            t.customer_name = expect_string("customer_name", v)?;
            Ok(())
        }),
        ("delivery_time", |t, v| {
            t.delivery_time = expect_u64("delivery_time", v)?;
            Ok(())
        }),
        ("destination_country_iso3", |t, v| {
            t.destination_country_iso3 = expect_string("destination_country_iso3", v)?;
            Ok(())
        }),
        ("origin_country_iso3", |t, v| {
            t.origin_country_iso3 = expect_string("origin_country_iso3", v)?;
            Ok(())
        }),
        ("emails", |t, v| {
            t.emails = expect_string_array("emails", v)?;
            Ok(())
        }),
        ("smses", |t, v| {
            t.smses = expect_string_array("smses", v)?;
            Ok(())
        }),
        ("expected_delivery", |t, v| {
            t.expected_delivery = date::parse_json(v)?;
            Ok(())
        }),
        ("order_id", |t, v| {
            t.order_id = expect_string("order_id", v)?;
            Ok(())
        }),
        ("order_id_path", |t, v| {
            t.order_id_path = expect_string("order_id_path", v)?;
            Ok(())
        }),
        ("shipment_package_count", |t, v| {
            t.shipment_package_count = expect_u64("shipment_package_count", v)?;
            Ok(())
        }),
        ("shipment_type", |t, v| {
            t.shipment_type = expect_string("shipment_type", v)?;
            Ok(())
        }),
        ("shipment_weight", |t, v| {
            t.shipment_weight = expect_f64("shipment_weight", v)?;
            Ok(())
        }),
        ("shipment_weight_unit", |t, v| {
            t.shipment_weight_unit = expect_string("shipment_weight_unit", v)?;
            Ok(())
        }),
        ("signed_by", |t, v| {
            t.signed_by = expect_string("signed_by", v)?;
            Ok(())
        }),
        ("source", |t, v| {
            t.source = expect_string("source", v)?;
            Ok(())
        }),
        ("tag", set_tag),
        ("title", |t, v| {
            t.title = expect_string("title", v)?;
            Ok(())
        }),
        ("tracked_count", |t, v| {
            t.tracked_count = expect_u64("tracked_count", v)?;
            Ok(())
        }),
        ("tracking_account_number", |t, v| {
            t.tracking_account_number = expect_string("tracking_account_number", v)?;
            Ok(())
        }),
        ("tracking_postal_code", |t, v| {
            t.tracking_postal_code = expect_string("tracking_postal_code", v)?;
            Ok(())
        }),
        ("tracking_ship_date", |t, v| {
            t.tracking_ship_date = date::parse_json(v)?;
            Ok(())
        }),
        ("unique_token", |t, v| {
            t.unique_token = expect_string("unique_token", v)?;
            Ok(())
        }),
        ("created_at", |t, v| {
            t.created_at = date::parse_json(v)?;
            Ok(())
        }),
        ("updated_at", |t, v| {
            t.updated_at = date::parse_json(v)?;
            Ok(())
        }),
        ("checkpoints", set_checkpoints),
    ];
}

fn set_tag(tracking: &mut Tracking, value: &Value) -> Result<()> {
    tracking.tag = expect_string("tag", value)?
        .map(|s| Tag::parse(&s))
        .transpose()?;
    Ok(())
}

fn set_checkpoints(tracking: &mut Tracking, value: &Value) -> Result<()> {
    let items = match value {
        Value::Null => return Ok(()),
        Value::Array(items) => items,
        other => {
            return Err(Error::MalformedResponse(format!(
                "field \"checkpoints\" expected an array, got {other}"
            )))
        }
    };

    tracking.checkpoints = items.iter().map(Checkpoint::from_value).collect::<Result<_>>()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_identity_fields() {
        let tracking = Tracking::from_value(&json!({
            "id": "5457a109bb8bce546b7abafa",
            "tracking_number": "1ZA2207X0444990982",
            "slug": "ups"
        }))
        .unwrap();

        assert_eq!(tracking.id(), Some("5457a109bb8bce546b7abafa"));
        assert_eq!(tracking.tracking_number(), Some("1ZA2207X0444990982"));
        assert_eq!(tracking.slug(), Some("ups"));
    }

    #[test]
    fn test_slug_derives_courier() {
        let tracking = Tracking::from_value(&json!({"slug": "ups"})).unwrap();
        assert_eq!(tracking.courier().as_deref(), Some("UPS"));
    }

    #[test]
    fn test_tag_derives_status_for_every_known_tag() {
        let expected = [
            ("Pending", "Pending"),
            ("InfoReceived", "Info Received"),
            ("InTransit", "In Transit"),
            ("OutForDelivery", "Out for Delivery"),
            ("AttemptFail", "Attempt Failed"),
            ("Delivered", "Delivered"),
            ("Exception", "Exception"),
            ("Expired", "Expired"),
        ];

        for (tag, status) in expected {
            let tracking = Tracking::from_value(&json!({ "tag": tag })).unwrap();
            assert_eq!(tracking.status(), Some(status), "tag {tag}");
        }
    }

    #[test]
    fn test_unknown_tag_fails_construction() {
        let err = Tracking::from_value(&json!({"tag": "Levitating"})).unwrap_err();
        assert!(matches!(err, Error::MalformedResponse(_)));
    }

    #[test]
    fn test_lifecycle_timestamps() {
        let tracking = Tracking::from_value(&json!({
            "created_at": "2014-10-30T10:05:48",
            "updated_at": "2014-11-19T22:12:32+00:00"
        }))
        .unwrap();

        assert_eq!(
            tracking.created_at().unwrap().to_string(),
            "2014-10-30T10:05:48"
        );
        assert_eq!(
            tracking.updated_at().unwrap().to_string(),
            "2014-11-19T22:12:32+00:00"
        );
    }

    #[test]
    fn test_expected_delivery_may_be_a_plain_date() {
        let tracking =
            Tracking::from_value(&json!({"expected_delivery": "2014-10-30"})).unwrap();
        assert_eq!(
            tracking.expected_delivery().unwrap().to_string(),
            "2014-10-30"
        );
    }

    #[test]
    fn test_expected_delivery_empty_string_is_absent() {
        let tracking = Tracking::from_value(&json!({"expected_delivery": ""})).unwrap();
        assert_eq!(tracking.expected_delivery(), None);
    }

    #[test]
    fn test_invalid_expected_delivery_fails_construction() {
        assert!(Tracking::from_value(&json!({"expected_delivery": "soon"})).is_err());
    }

    #[test]
    fn test_tracking_ship_date_accepts_compact_form() {
        let tracking =
            Tracking::from_value(&json!({"tracking_ship_date": "20141124"})).unwrap();
        assert_eq!(
            tracking.tracking_ship_date().unwrap().to_string(),
            "2014-11-24"
        );
    }

    #[test]
    fn test_shipment_fields() {
        let tracking = Tracking::from_value(&json!({
            "shipment_package_count": 1,
            "shipment_type": "UPS SAVER",
            "shipment_weight": 0.5,
            "shipment_weight_unit": "kg",
            "signed_by": "MET CUSTOM"
        }))
        .unwrap();

        assert_eq!(tracking.shipment_package_count(), Some(1));
        assert_eq!(tracking.shipment_type(), Some("UPS SAVER"));
        assert_eq!(tracking.shipment_weight(), Some(0.5));
        assert_eq!(tracking.shipment_weight_unit(), Some("kg"));
        assert_eq!(tracking.signed_by(), Some("MET CUSTOM"));
    }

    #[test]
    fn test_checkpoints_are_constructed_in_order() {
        let tracking = Tracking::from_value(&json!({
            "checkpoints": [
                {"slug": "ups", "message": "PICKUP SCAN", "tag": "InTransit"},
                {"slug": "ups", "message": "DELIVERED", "tag": "Delivered"}
            ]
        }))
        .unwrap();

        let checkpoints = tracking.checkpoints();
        assert_eq!(checkpoints.len(), 2);
        assert_eq!(checkpoints[0].message(), Some("PICKUP SCAN"));
        assert_eq!(checkpoints[1].status(), Some("Delivered"));
    }

    #[test]
    fn test_bad_checkpoint_fails_the_whole_tracking() {
        let result = Tracking::from_value(&json!({
            "slug": "ups",
            "checkpoints": [{"tag": "Vanished"}]
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_unrecognized_field_is_ignored() {
        let tracking = Tracking::from_value(&json!({
            "slug": "ups",
            "android": [],
            "ios": [],
            "brand_new_api_field": {"nested": true}
        }))
        .unwrap();
        assert_eq!(tracking.slug(), Some("ups"));
    }

    #[test]
    fn test_notification_lists() {
        let tracking = Tracking::from_value(&json!({
            "emails": ["ops@example.com"],
            "smses": []
        }))
        .unwrap();
        assert_eq!(tracking.emails(), ["ops@example.com".to_string()]);
        assert!(tracking.smses().is_empty());
    }
}

use serde_json::{json, Map, Value};

use crate::config::ClientConfig;
use crate::core::request::RequestExecutor;
use crate::core::response;
use crate::domain::{Attributes, Courier, Tracking};
use crate::utils::error::{Error, Result};
use crate::utils::validation::validate_non_empty_string;

/// Client for the AfterShip v4 API.
///
/// ```ignore
/// let client = Client::new(ClientConfig::new("your-aftership-api-key"))?;
/// client.trackings().await?;
/// client.tracking("tracking-number", "ups").await?;
/// client.create_tracking("tracking-number", "ups", extra_fields).await?;
/// client.update_tracking("tracking-number", "ups", fields).await?;
/// client.couriers().await?;
/// ```
///
/// Each call performs exactly one request and either returns a fully
/// populated domain object or fails with a classified error. The client is
/// immutable and safe to share across tasks.
#[derive(Debug, Clone)]
pub struct Client {
    endpoint: String,
    executor: RequestExecutor,
}

impl Client {
    /// Build a client. Fails with `InvalidArgument` when the API key is
    /// empty or the endpoint is not an HTTP(S) URL.
    pub fn new(config: ClientConfig) -> Result<Client> {
        config.validate()?;
        Ok(Client {
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            executor: RequestExecutor::new(config.api_key, config.debug),
        })
    }

    /// List all trackings.
    /// https://www.aftership.com/docs/api/4/trackings/get-trackings
    pub async fn trackings(&self) -> Result<Vec<Tracking>> {
        let url = format!("{}/trackings", self.endpoint);
        self.executor
            .get(&url, |payload| {
                collect_models(response::unwrap_data(payload, "trackings")?)
            })
            .await
    }

    /// Get one tracking. A missing resource fails with
    /// `TrackingDoesNotExist` (or plain `NotFound` from older endpoints).
    /// https://www.aftership.com/docs/api/4/trackings/get-trackings-slug-tracking_number
    pub async fn tracking(&self, tracking_number: &str, courier: &str) -> Result<Tracking> {
        self.validate_call_args(tracking_number, courier)?;
        let url = self.single_tracking_url(tracking_number, courier);
        self.executor
            .get(&url, |payload| {
                Tracking::from_value(&response::unwrap_data(payload, "tracking")?)
            })
            .await
    }

    /// Create a new tracking. A duplicate fails with
    /// `TrackingAlreadyExists`. Extra fields (order id, postal code, the
    /// courier's `required_fields`) merge into the `tracking` body object.
    /// https://www.aftership.com/docs/api/4/trackings/post-trackings
    pub async fn create_tracking(
        &self,
        tracking_number: &str,
        courier: &str,
        extra_fields: Map<String, Value>,
    ) -> Result<Tracking> {
        self.validate_call_args(tracking_number, courier)?;
        let url = format!("{}/trackings", self.endpoint);

        let mut tracking = Map::new();
        tracking.insert("tracking_number".to_string(), json!(tracking_number));
        tracking.insert("slug".to_string(), json!(courier));
        tracking.extend(extra_fields);
        let body = json!({ "tracking": tracking });

        self.executor
            .post(&url, &body, |payload| {
                Tracking::from_value(&response::unwrap_data(payload, "tracking")?)
            })
            .await
    }

    /// Update an existing tracking.
    /// https://www.aftership.com/docs/api/4/trackings/put-trackings-slug-tracking_number
    pub async fn update_tracking(
        &self,
        tracking_number: &str,
        courier: &str,
        fields: Map<String, Value>,
    ) -> Result<Tracking> {
        self.validate_call_args(tracking_number, courier)?;
        let url = self.single_tracking_url(tracking_number, courier);
        let body = json!({ "tracking": fields });

        self.executor
            .put(&url, &body, |payload| {
                Tracking::from_value(&response::unwrap_data(payload, "tracking")?)
            })
            .await
    }

    /// List the activated couriers.
    /// https://www.aftership.com/docs/api/4/couriers/get-couriers
    pub async fn couriers(&self) -> Result<Vec<Courier>> {
        let url = format!("{}/couriers", self.endpoint);
        self.executor
            .get(&url, |payload| {
                collect_models(response::unwrap_data(payload, "couriers")?)
            })
            .await
    }

    fn single_tracking_url(&self, tracking_number: &str, courier: &str) -> String {
        format!("{}/trackings/{courier}/{tracking_number}", self.endpoint)
    }

    fn validate_call_args(&self, tracking_number: &str, courier: &str) -> Result<()> {
        validate_non_empty_string("tracking_number", tracking_number)?;
        validate_non_empty_string("courier", courier)?;
        Ok(())
    }
}

fn collect_models<T: Attributes>(items: Value) -> Result<Vec<T>> {
    match items {
        Value::Array(items) => items.iter().map(T::from_value).collect(),
        other => Err(Error::MalformedResponse(format!(
            "expected a JSON array, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use httpmock::prelude::*;

    fn client(server: &MockServer) -> Client {
        Client::new(ClientConfig::new("test-api-key").with_endpoint(server.base_url())).unwrap()
    }

    #[test]
    fn test_client_requires_an_api_key() {
        let err = Client::new(ClientConfig::new("")).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_trailing_slash_in_endpoint_is_stripped() {
        let client = Client::new(
            ClientConfig::new("key").with_endpoint("http://localhost:3000/"),
        )
        .unwrap();
        assert_eq!(
            client.single_tracking_url("ABC", "ups"),
            "http://localhost:3000/trackings/ups/ABC"
        );
    }

    #[tokio::test]
    async fn test_empty_arguments_fail_without_a_request() {
        let server = MockServer::start();
        let client = client(&server);

        let err = client.tracking("", "ups").await.unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));

        let err = client.tracking("ABC123", "").await.unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));

        let err = client
            .create_tracking("", "ups", Map::new())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));

        let err = client
            .update_tracking("ABC123", " ", Map::new())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn test_trackings_maps_each_element() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/trackings");
            then.status(200).json_body(serde_json::json!({
                "meta": {"code": 200},
                "data": {"trackings": [{"slug": "ups"}, {"slug": "usps"}]}
            }));
        });

        let trackings = client(&server).trackings().await.unwrap();
        assert_eq!(trackings.len(), 2);
        assert_eq!(trackings[0].courier().as_deref(), Some("UPS"));
        assert_eq!(trackings[1].slug(), Some("usps"));
    }

    #[tokio::test]
    async fn test_tracking_builds_the_single_resource_url() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/trackings/ups/1ZA2207X0444990982");
            then.status(200).json_body(serde_json::json!({
                "meta": {"code": 200},
                "data": {"tracking": {"slug": "ups", "tag": "Delivered"}}
            }));
        });

        let tracking = client(&server)
            .tracking("1ZA2207X0444990982", "ups")
            .await
            .unwrap();

        mock.assert();
        assert_eq!(tracking.status(), Some("Delivered"));
    }
}

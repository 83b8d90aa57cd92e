use thiserror::Error;

/// Errors surfaced by the AfterShip client.
///
/// The API kinds mirror the documented AfterShip v4 meta codes
/// (https://www.aftership.com/docs/api/4/errors). Every failed call returns
/// exactly one of these; nothing is retried internally.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Bad request: {0}")]
    BadRequest(String), // 400

    #[error("Invalid JSON data: {0}")]
    InvalidJsonData(String), // 4001, 4002

    #[error("Tracking already exists: {0}")]
    TrackingAlreadyExists(String), // 4003

    #[error("Tracking does not exist: {0}")]
    TrackingDoesNotExist(String), // 4004

    #[error("Tracking number invalid: {0}")]
    TrackingNumberInvalid(String), // 4005

    #[error("Tracking object required: {0}")]
    TrackingObjectRequired(String), // 4006

    #[error("Tracking number required: {0}")]
    TrackingNumberRequired(String), // 4007

    #[error("Field invalid: {0}")]
    FieldInvalid(String), // 4008

    #[error("Field required: {0}")]
    FieldRequired(String), // 4009

    #[error("Slug invalid: {0}")]
    SlugInvalid(String), // 4010

    #[error("Courier field invalid: {0}")]
    CourierFieldInvalid(String), // 4011

    #[error("Courier not detected: {0}")]
    CourierNotDetected(String), // 4012

    #[error("Retrack not allowed: {0}")]
    RetrackNotAllowed(String), // 4013, 4016

    #[error("Notification required: {0}")]
    NotificationRequired(String), // 4014

    #[error("Id invalid: {0}")]
    IdInvalid(String), // 4015

    #[error("Unauthorized: {0}")]
    Unauthorized(String), // 401

    #[error("Forbidden: {0}")]
    Forbidden(String), // 403

    #[error("Not found: {0}")]
    NotFound(String), // 404

    #[error("Too many requests: {0}")]
    TooManyRequests(String), // 429

    #[error("Internal error: {0}")]
    InternalError(String), // 500, 502, 503, 504

    #[error("Unknown error (code {code}): {message}")]
    UnknownError { code: u64, message: String },

    #[error("{url} cannot be reached")]
    Timeout { url: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Meta codes that mean the response carries a usable payload.
pub const SUCCESS_CODES: [u64; 2] = [200, 201];

impl Error {
    /// Pick the error for an AfterShip meta code. Codes outside the table
    /// classify as `UnknownError`; this never fails.
    pub fn for_meta_code(code: u64, message: String) -> Error {
        match code {
            400 => Error::BadRequest(message),
            4001 | 4002 => Error::InvalidJsonData(message),
            4003 => Error::TrackingAlreadyExists(message),
            4004 => Error::TrackingDoesNotExist(message),
            4005 => Error::TrackingNumberInvalid(message),
            4006 => Error::TrackingObjectRequired(message),
            4007 => Error::TrackingNumberRequired(message),
            4008 => Error::FieldInvalid(message),
            4009 => Error::FieldRequired(message),
            4010 => Error::SlugInvalid(message),
            4011 => Error::CourierFieldInvalid(message),
            4012 => Error::CourierNotDetected(message),
            4013 | 4016 => Error::RetrackNotAllowed(message),
            4014 => Error::NotificationRequired(message),
            4015 => Error::IdInvalid(message),
            401 => Error::Unauthorized(message),
            403 => Error::Forbidden(message),
            404 => Error::NotFound(message),
            429 => Error::TooManyRequests(message),
            500 | 502 | 503 | 504 => Error::InternalError(message),
            _ => Error::UnknownError { code, message },
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

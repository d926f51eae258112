//! Declarative endpoint descriptors
//!
//! A [`Requestable`] describes a request by its parts. [`Requestable::url_request`]
//! resolves those parts against a [`NetworkConfig`] into exactly one
//! [`HttpRequest`]:
//!
//! - the URL is `base_url` joined with `path`, or `path` verbatim for full paths
//! - endpoint query pairs come first, then the configuration's
//! - endpoint headers overwrite configuration headers with the same name
//! - an encodable parameter override replaces the raw parameter map entirely

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use planets_domain::HttpMethod;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;
use url::Url;
use uuid::Uuid;

use super::NetworkConfig;
use super::decoder::{JsonResponseDecoder, ResponseDecoder};
use crate::ports::HttpRequest;

/// Failure to build an `HttpRequest` from an endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestGenerationError {
    /// Base URL and path do not form a valid absolute URL.
    #[error("invalid URL {url}: {reason}")]
    InvalidUrl {
        /// The URL that failed to parse
        url: String,
        /// Parser message
        reason: String,
    },

    /// The encodable parameter override could not be turned into a map.
    #[error("invalid encodable parameters: {0}")]
    Encodable(String),

    /// The body could not be serialized.
    #[error("failed to encode body: {0}")]
    Body(String),
}

/// How body parameters are serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BodyEncoding {
    /// A JSON object.
    #[default]
    JsonSerializationData,
    /// Percent-encoded `key=value` pairs joined by `&`.
    StringEncodingAscii,
}

impl BodyEncoding {
    /// Content type matching the encoding.
    #[must_use]
    pub const fn content_type(self) -> &'static str {
        match self {
            Self::JsonSerializationData => "application/json",
            Self::StringEncodingAscii => "application/x-www-form-urlencoded",
        }
    }
}

/// Query or body parameters of an endpoint.
///
/// Holds a raw parameter map and an optional override produced from any
/// `Serialize` value. When the override is set it is used on its own and
/// the raw map is ignored; the two are never merged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestParameters {
    raw: Map<String, Value>,
    encodable: Option<Result<Map<String, Value>, String>>,
}

impl RequestParameters {
    /// Creates empty parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a raw parameter, replacing any previous value for `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.raw.insert(key.into(), value.into());
    }

    /// Sets the encodable override from a value serializing to a JSON object.
    ///
    /// A value that does not serialize to an object is remembered as
    /// invalid and fails request generation later.
    pub fn set_encodable<T: Serialize + ?Sized>(&mut self, value: &T) {
        let encoded = match serde_json::to_value(value) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(other) => Err(format!("expected an object, got {other}")),
            Err(error) => Err(error.to_string()),
        };
        self.encodable = Some(encoded);
    }

    /// Returns true when an encodable override is set.
    #[must_use]
    pub const fn has_encodable(&self) -> bool {
        self.encodable.is_some()
    }

    /// Returns the effective parameters: the override if present, else the raw map.
    ///
    /// # Errors
    ///
    /// Returns `RequestGenerationError::Encodable` if the override is invalid.
    pub fn resolve(&self) -> Result<Cow<'_, Map<String, Value>>, RequestGenerationError> {
        match &self.encodable {
            Some(Ok(map)) => Ok(Cow::Borrowed(map)),
            Some(Err(reason)) => Err(RequestGenerationError::Encodable(reason.clone())),
            None => Ok(Cow::Borrowed(&self.raw)),
        }
    }
}

/// Declarative description of an HTTP request.
pub trait Requestable: Send + Sync {
    /// Path relative to the base URL, or an absolute URL when [`Self::is_full_path`].
    fn path(&self) -> &str;

    /// Whether [`Self::path`] is an absolute URL.
    fn is_full_path(&self) -> bool;

    /// HTTP method.
    fn method(&self) -> HttpMethod;

    /// Endpoint-specific headers.
    fn header_parameters(&self) -> &BTreeMap<String, String>;

    /// Query parameters.
    fn query_parameters(&self) -> &RequestParameters;

    /// Body parameters.
    fn body_parameters(&self) -> &RequestParameters;

    /// Body serialization.
    fn body_encoding(&self) -> BodyEncoding;

    /// Resolves the endpoint into a concrete request.
    ///
    /// # Errors
    ///
    /// Returns a `RequestGenerationError` if the URL is invalid or the
    /// parameters cannot be encoded.
    fn url_request(&self, config: &NetworkConfig) -> Result<HttpRequest, RequestGenerationError> {
        build_request(self, config)
    }
}

/// A [`Requestable`] that also knows how to decode its response.
pub trait ResponseRequestable: Requestable {
    /// Decoded response type.
    type Response;

    /// Decoder for the response body.
    fn response_decoder(&self) -> &dyn ResponseDecoder<Self::Response>;
}

/// Immutable endpoint built with a fluent builder.
///
/// ```ignore
/// let endpoint = Endpoint::<PlanetsResponseDto>::new("planets/", HttpMethod::Get)
///     .query_parameters_encodable(&PlanetsRequestDto { page: "1".into() });
/// ```
pub struct Endpoint<R> {
    path: String,
    is_full_path: bool,
    method: HttpMethod,
    header_parameters: BTreeMap<String, String>,
    query_parameters: RequestParameters,
    body_parameters: RequestParameters,
    body_encoding: BodyEncoding,
    response_decoder: Arc<dyn ResponseDecoder<R>>,
}

impl<R: DeserializeOwned + 'static> Endpoint<R> {
    /// Creates an endpoint whose response is decoded as JSON.
    #[must_use]
    pub fn new(path: impl Into<String>, method: HttpMethod) -> Self {
        Self::with_decoder(path, method, JsonResponseDecoder)
    }
}

impl<R: 'static> Endpoint<R> {
    /// Creates an endpoint with a custom response decoder.
    #[must_use]
    pub fn with_decoder(
        path: impl Into<String>,
        method: HttpMethod,
        decoder: impl ResponseDecoder<R> + 'static,
    ) -> Self {
        Self {
            path: path.into(),
            is_full_path: false,
            method,
            header_parameters: BTreeMap::new(),
            query_parameters: RequestParameters::new(),
            body_parameters: RequestParameters::new(),
            body_encoding: BodyEncoding::default(),
            response_decoder: Arc::new(decoder),
        }
    }

    /// Treats the path as an absolute URL.
    #[must_use]
    pub const fn full_path(mut self) -> Self {
        self.is_full_path = true;
        self
    }

    /// Adds a header, overriding a configuration header of the same name.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.header_parameters.insert(name.into(), value.into());
        self
    }

    /// Adds a raw query parameter.
    #[must_use]
    pub fn query_parameter(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.query_parameters.insert(key, value);
        self
    }

    /// Sets the query parameters from a serializable value.
    #[must_use]
    pub fn query_parameters_encodable<T: Serialize + ?Sized>(mut self, value: &T) -> Self {
        self.query_parameters.set_encodable(value);
        self
    }

    /// Adds a raw body parameter.
    #[must_use]
    pub fn body_parameter(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.body_parameters.insert(key, value);
        self
    }

    /// Sets the body parameters from a serializable value.
    #[must_use]
    pub fn body_parameters_encodable<T: Serialize + ?Sized>(mut self, value: &T) -> Self {
        self.body_parameters.set_encodable(value);
        self
    }

    /// Selects the body encoding.
    #[must_use]
    pub const fn body_encoding(mut self, encoding: BodyEncoding) -> Self {
        self.body_encoding = encoding;
        self
    }
}

impl<R> fmt::Debug for Endpoint<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Endpoint")
            .field("path", &self.path)
            .field("is_full_path", &self.is_full_path)
            .field("method", &self.method)
            .field("header_parameters", &self.header_parameters)
            .field("query_parameters", &self.query_parameters)
            .field("body_parameters", &self.body_parameters)
            .field("body_encoding", &self.body_encoding)
            .finish_non_exhaustive()
    }
}

impl<R: 'static> Requestable for Endpoint<R> {
    fn path(&self) -> &str {
        &self.path
    }

    fn is_full_path(&self) -> bool {
        self.is_full_path
    }

    fn method(&self) -> HttpMethod {
        self.method
    }

    fn header_parameters(&self) -> &BTreeMap<String, String> {
        &self.header_parameters
    }

    fn query_parameters(&self) -> &RequestParameters {
        &self.query_parameters
    }

    fn body_parameters(&self) -> &RequestParameters {
        &self.body_parameters
    }

    fn body_encoding(&self) -> BodyEncoding {
        self.body_encoding
    }
}

impl<R: 'static> ResponseRequestable for Endpoint<R> {
    type Response = R;

    fn response_decoder(&self) -> &dyn ResponseDecoder<R> {
        self.response_decoder.as_ref()
    }
}

fn build_request<E: Requestable + ?Sized>(
    endpoint: &E,
    config: &NetworkConfig,
) -> Result<HttpRequest, RequestGenerationError> {
    let url = build_url(endpoint, config)?;

    let mut headers = config.headers().clone();
    for (name, value) in endpoint.header_parameters() {
        headers.retain(|existing, _| !existing.eq_ignore_ascii_case(name));
        headers.insert(name.clone(), value.clone());
    }

    let body_parameters = endpoint.body_parameters().resolve()?;
    let body = if body_parameters.is_empty() {
        None
    } else {
        let encoding = endpoint.body_encoding();
        if !headers
            .keys()
            .any(|name| name.eq_ignore_ascii_case("content-type"))
        {
            headers.insert(
                "Content-Type".to_string(),
                encoding.content_type().to_string(),
            );
        }
        Some(encode_body(&body_parameters, encoding)?)
    };

    Ok(HttpRequest {
        id: Uuid::now_v7(),
        method: endpoint.method(),
        url,
        headers,
        body,
    })
}

fn build_url<E: Requestable + ?Sized>(
    endpoint: &E,
    config: &NetworkConfig,
) -> Result<Url, RequestGenerationError> {
    let target = if endpoint.is_full_path() {
        endpoint.path().to_string()
    } else {
        let base = config.base_url().as_str();
        if base.ends_with('/') {
            format!("{base}{}", endpoint.path())
        } else {
            format!("{base}/{}", endpoint.path())
        }
    };

    let mut url = Url::parse(&target).map_err(|e| RequestGenerationError::InvalidUrl {
        url: target.clone(),
        reason: e.to_string(),
    })?;
    if url.cannot_be_a_base() {
        return Err(RequestGenerationError::InvalidUrl {
            url: target,
            reason: "not a hierarchical URL".to_string(),
        });
    }

    let query_parameters = endpoint.query_parameters().resolve()?;
    if !query_parameters.is_empty() || !config.query_parameters().is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in query_parameters.iter() {
            pairs.append_pair(key, &parameter_value(value));
        }
        for (key, value) in config.query_parameters() {
            pairs.append_pair(key, value);
        }
    }

    Ok(url)
}

fn encode_body(
    parameters: &Map<String, Value>,
    encoding: BodyEncoding,
) -> Result<Vec<u8>, RequestGenerationError> {
    match encoding {
        BodyEncoding::JsonSerializationData => serde_json::to_vec(parameters)
            .map_err(|e| RequestGenerationError::Body(e.to_string())),
        BodyEncoding::StringEncodingAscii => {
            let pairs: Vec<(&str, String)> = parameters
                .iter()
                .map(|(key, value)| (key.as_str(), parameter_value(value)))
                .collect();
            serde_urlencoded::to_string(pairs)
                .map(String::into_bytes)
                .map_err(|e| RequestGenerationError::Body(e.to_string()))
        }
    }
}

/// Renders a parameter value for a query string or form body.
fn parameter_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct MockModel {}

    #[derive(Serialize)]
    struct PageQuery {
        page: String,
    }

    fn config() -> NetworkConfig {
        NetworkConfig::new(Url::parse("https://swapi.dev/api").unwrap())
    }

    #[test]
    fn joins_base_url_and_path() {
        let endpoint = Endpoint::<MockModel>::new("planets/", HttpMethod::Get);

        let request = endpoint.url_request(&config()).unwrap();

        assert_eq!(request.url.as_str(), "https://swapi.dev/api/planets/");
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.body, None);
    }

    #[test]
    fn base_url_with_trailing_slash_is_not_doubled() {
        let config = NetworkConfig::new(Url::parse("https://swapi.dev/api/").unwrap());
        let endpoint = Endpoint::<MockModel>::new("planets/", HttpMethod::Get);

        let request = endpoint.url_request(&config).unwrap();

        assert_eq!(request.url.as_str(), "https://swapi.dev/api/planets/");
    }

    #[test]
    fn full_path_ignores_base_url() {
        let endpoint =
            Endpoint::<MockModel>::new("http://mock.test.com/items", HttpMethod::Get).full_path();

        let request = endpoint.url_request(&config()).unwrap();

        assert_eq!(request.url.as_str(), "http://mock.test.com/items");
    }

    #[test]
    fn invalid_full_path_fails_generation() {
        let endpoint = Endpoint::<MockModel>::new("not a url", HttpMethod::Get).full_path();

        let result = endpoint.url_request(&config());

        assert!(matches!(
            result,
            Err(RequestGenerationError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn endpoint_query_precedes_config_query() {
        let config = config().with_query_parameter("format", "json");
        let endpoint = Endpoint::<MockModel>::new("planets/", HttpMethod::Get)
            .query_parameter("page", "2");

        let request = endpoint.url_request(&config).unwrap();

        assert_eq!(
            request.url.as_str(),
            "https://swapi.dev/api/planets/?page=2&format=json"
        );
    }

    #[test]
    fn query_values_are_percent_encoded() {
        let endpoint = Endpoint::<MockModel>::new("planets/", HttpMethod::Get)
            .query_parameter("search", "tat ooine&x");

        let request = endpoint.url_request(&config()).unwrap();

        assert_eq!(request.url.query(), Some("search=tat+ooine%26x"));
    }

    #[test]
    fn non_string_query_values_are_rendered() {
        let endpoint = Endpoint::<MockModel>::new("planets/", HttpMethod::Get)
            .query_parameter("page", 3)
            .query_parameter("verbose", true);

        let request = endpoint.url_request(&config()).unwrap();

        assert_eq!(request.url.query(), Some("page=3&verbose=true"));
    }

    #[test]
    fn encodable_query_overrides_raw_parameters() {
        let endpoint = Endpoint::<MockModel>::new("planets/", HttpMethod::Get)
            .query_parameter("ignored", "yes")
            .query_parameters_encodable(&PageQuery {
                page: "1".to_string(),
            });

        let request = endpoint.url_request(&config()).unwrap();

        assert_eq!(request.url.query(), Some("page=1"));
    }

    #[test]
    fn encodable_that_is_not_an_object_fails_generation() {
        let endpoint = Endpoint::<MockModel>::new("planets/", HttpMethod::Get)
            .query_parameters_encodable("page=1");

        let result = endpoint.url_request(&config());

        assert!(matches!(result, Err(RequestGenerationError::Encodable(_))));
    }

    #[test]
    fn endpoint_headers_override_config_headers() {
        let config = config()
            .with_header("Accept", "text/plain")
            .with_header("X-Client", "planets");
        let endpoint = Endpoint::<MockModel>::new("planets/", HttpMethod::Get)
            .header("Accept", "application/json");

        let request = endpoint.url_request(&config).unwrap();

        assert_eq!(request.headers.get("Accept").unwrap(), "application/json");
        assert_eq!(request.headers.get("X-Client").unwrap(), "planets");
    }

    #[test]
    fn endpoint_header_replaces_config_header_of_other_case() {
        let config = config().with_header("Accept", "text/plain");
        let endpoint = Endpoint::<MockModel>::new("planets/", HttpMethod::Get)
            .header("accept", "application/json");

        let request = endpoint.url_request(&config).unwrap();

        assert_eq!(
            request.headers,
            BTreeMap::from([("accept".to_string(), "application/json".to_string())])
        );
    }

    #[test]
    fn json_body_is_serialized_with_content_type() {
        let endpoint = Endpoint::<MockModel>::new("planets/", HttpMethod::Post)
            .body_parameter("name", "Hoth")
            .body_parameter("diameter", 7200);

        let request = endpoint.url_request(&config()).unwrap();

        let body: Value = serde_json::from_slice(&request.body.unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"name": "Hoth", "diameter": 7200}));
        assert_eq!(
            request.headers.get("Content-Type").unwrap(),
            "application/json"
        );
    }

    #[test]
    fn ascii_body_is_form_encoded() {
        let endpoint = Endpoint::<MockModel>::new("planets/", HttpMethod::Post)
            .body_parameter("name", "Yavin IV")
            .body_encoding(BodyEncoding::StringEncodingAscii);

        let request = endpoint.url_request(&config()).unwrap();

        assert_eq!(request.body.unwrap(), b"name=Yavin+IV".to_vec());
        assert_eq!(
            request.headers.get("Content-Type").unwrap(),
            "application/x-www-form-urlencoded"
        );
    }

    #[test]
    fn explicit_content_type_is_kept() {
        let endpoint = Endpoint::<MockModel>::new("planets/", HttpMethod::Put)
            .header("content-type", "application/vnd.planets+json")
            .body_parameter("name", "Hoth");

        let request = endpoint.url_request(&config()).unwrap();

        assert_eq!(request.headers.len(), 1);
        assert_eq!(
            request.headers.get("content-type").unwrap(),
            "application/vnd.planets+json"
        );
    }

    #[test]
    fn encodable_body_overrides_raw_body() {
        let endpoint = Endpoint::<MockModel>::new("search", HttpMethod::Post)
            .body_parameter("ignored", 1)
            .body_parameters_encodable(&PageQuery {
                page: "4".to_string(),
            });

        let request = endpoint.url_request(&config()).unwrap();

        assert_eq!(request.body.unwrap(), br#"{"page":"4"}"#.to_vec());
    }
}

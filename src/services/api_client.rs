// ============================================================================
// API CLIENT - HTTP only (stateless)
// ============================================================================
// No UI logic here: every call returns the decoded body or an ApiError. All
// responses go through `read_json` / `read_message`, which turn non-2xx
// statuses into `ApiError::Http` carrying the server's message.
// ============================================================================

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::CONFIG;
use crate::error::ApiError;
use crate::models::{
    AuthResponse, CreatedPackage, Credentials, PackageRecord, PackageRequest, Quote, Tariff,
    TariffQuoteRequest,
};
use crate::utils::{GENERIC_ERROR_MESSAGE, PAYMENT_DONE_MESSAGE};

/// Longest plain-text body shown to the user as an error message
const MAX_PLAIN_MESSAGE_LEN: usize = 200;

#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(&CONFIG.api_url)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Attach the session token used for authenticated calls
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn payment_endpoint(&self, package_id: &str) -> String {
        self.endpoint(&format!("payment/{}", urlencoding::encode(package_id)))
    }

    fn authorization(&self) -> Result<String, ApiError> {
        self.token
            .as_deref()
            .map(|token| format!("Bearer {}", token))
            .ok_or(ApiError::MissingToken)
    }

    fn authorized(&self, builder: RequestBuilder) -> Result<RequestBuilder, ApiError> {
        Ok(builder.header("Authorization", &self.authorization()?))
    }

    pub async fn register(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
        log::info!("🔐 [API] Registering {}", credentials.email);
        let request = with_json(Request::post(&self.endpoint("register")), credentials)?;
        read_json(send(request).await?).await
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
        log::info!("🔐 [API] Logging in {}", credentials.email);
        let request = with_json(Request::post(&self.endpoint("login")), credentials)?;
        read_json(send(request).await?).await
    }

    pub async fn calculate(&self, package: &PackageRequest) -> Result<Quote, ApiError> {
        log::info!("💰 [API] Quote {} → {} ({} kg)", package.from, package.to, package.weight);
        let builder = self.authorized(Request::post(&self.endpoint("calculate")))?;
        read_json(send(with_json(builder, package)?).await?).await
    }

    pub async fn calculate_by_tariff(&self, quote: &TariffQuoteRequest) -> Result<Quote, ApiError> {
        log::info!(
            "💰 [API] Tariff quote {} for {} → {}",
            quote.tariff_code,
            quote.package.from,
            quote.package.to
        );
        let builder = self.authorized(Request::post(&self.endpoint("calculate-by-tariff")))?;
        read_json(send(with_json(builder, quote)?).await?).await
    }

    pub async fn tariffs(&self) -> Result<Vec<Tariff>, ApiError> {
        let builder = self.authorized(Request::get(&self.endpoint("tariffs")))?;
        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(response).await
    }

    pub async fn create_package(&self, package: &PackageRequest) -> Result<CreatedPackage, ApiError> {
        log::info!("📦 [API] Creating package {} → {}", package.from, package.to);
        let builder = self.authorized(Request::post(&self.endpoint("create")))?;
        read_json(send(with_json(builder, package)?).await?).await
    }

    pub async fn my_packages(&self) -> Result<Vec<PackageRecord>, ApiError> {
        let builder = self.authorized(Request::get(&self.endpoint("my/packages")))?;
        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let packages: Vec<PackageRecord> = read_json(response).await?;
        log::info!("📦 [API] {} packages received", packages.len());
        Ok(packages)
    }

    /// Pay for a package. Returns the server's confirmation text.
    pub async fn pay_for_package(&self, package_id: &str) -> Result<String, ApiError> {
        log::info!("💳 [API] Paying for package {}", package_id);
        let builder = self.authorized(Request::post(&self.payment_endpoint(package_id)))?;
        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_message(response).await
    }
}

fn with_json<T: Serialize + ?Sized>(builder: RequestBuilder, body: &T) -> Result<Request, ApiError> {
    builder
        .json(body)
        .map_err(|e| ApiError::Serialization(e.to_string()))
}

async fn send(request: Request) -> Result<Response, ApiError> {
    request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}

/// Decode a 2xx JSON body, or turn the failure into `ApiError::Http`
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(http_error(response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// Like `read_json` for endpoints answering `{message}` or plain text
async fn read_message(response: Response) -> Result<String, ApiError> {
    if !response.ok() {
        return Err(http_error(response).await);
    }
    let content_type = response.headers().get("content-type");
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))?;
    Ok(extract_message(content_type.as_deref(), &body)
        .unwrap_or_else(|| PAYMENT_DONE_MESSAGE.to_string()))
}

async fn http_error(response: Response) -> ApiError {
    let status = response.status();
    let content_type = response.headers().get("content-type");
    let body = response.text().await.unwrap_or_default();
    let message = extract_message(content_type.as_deref(), &body)
        .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string());
    log::warn!("⚠️ [API] HTTP {}: {}", status, message);
    ApiError::Http { status, message }
}

/// Pull a user-facing message out of a response body.
///
/// JSON bodies yield their `message` field, or the gateway's `error` field.
/// Other bodies are used as plain text, except that a JSON object sent with a
/// non-JSON content type (the gateway sets the header after writing the
/// status) is still read as JSON. `None` when nothing usable is found.
pub fn extract_message(content_type: Option<&str>, body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }

    let declared_json = content_type
        .map(|ct| ct.to_ascii_lowercase().contains("json"))
        .unwrap_or(false);

    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) if value.is_object() => json_message(&value),
        Ok(serde_json::Value::String(text)) => non_blank(&text),
        _ if declared_json => None,
        _ => non_blank(&truncate(body, MAX_PLAIN_MESSAGE_LEN)),
    }
}

fn json_message(value: &serde_json::Value) -> Option<String> {
    ["message", "error"]
        .iter()
        .filter_map(|key| value.get(*key).and_then(|v| v.as_str()))
        .find_map(non_blank)
}

fn non_blank(text: &str) -> Option<String> {
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max_chars).collect();
    cut.push('…');
    cut
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_join_cleanly() {
        let api = ApiClient::with_base_url("http://localhost:8228/api/");
        assert_eq!(api.endpoint("login"), "http://localhost:8228/api/login");
        assert_eq!(api.endpoint("/my/packages"), "http://localhost:8228/api/my/packages");
    }

    #[test]
    fn payment_endpoint_encodes_the_id() {
        let api = ApiClient::with_base_url("http://h/api");
        assert_eq!(api.payment_endpoint("abc-123"), "http://h/api/payment/abc-123");
        assert_eq!(api.payment_endpoint("a/b c"), "http://h/api/payment/a%2Fb%20c");
    }

    #[test]
    fn authorization_requires_a_token() {
        let api = ApiClient::with_base_url("http://h/api");
        assert_eq!(api.authorization(), Err(ApiError::MissingToken));

        let api = api.with_token(Some(String::new()));
        assert_eq!(api.authorization(), Err(ApiError::MissingToken));

        let api = api.with_token(Some("t0k".into()));
        assert_eq!(api.authorization().unwrap(), "Bearer t0k");
    }

    #[test]
    fn json_message_field_wins() {
        let msg = extract_message(
            Some("application/json; charset=utf-8"),
            r#"{"message":"Package already paid","error":"x"}"#,
        );
        assert_eq!(msg.as_deref(), Some("Package already paid"));
    }

    #[test]
    fn gateway_error_field_is_used() {
        let msg = extract_message(Some("application/json"), r#"{"error":"Calculation failed"}"#);
        assert_eq!(msg.as_deref(), Some("Calculation failed"));
    }

    #[test]
    fn json_without_message_gives_none() {
        assert_eq!(extract_message(Some("application/json"), r#"{"code":13}"#), None);
        assert_eq!(extract_message(Some("application/json"), "not json"), None);
        assert_eq!(extract_message(Some("application/json"), r#"{"message":"  "}"#), None);
    }

    #[test]
    fn plain_text_is_used_as_is() {
        let msg = extract_message(Some("text/plain; charset=utf-8"), "Payment failed\n");
        assert_eq!(msg.as_deref(), Some("Payment failed"));
    }

    #[test]
    fn json_body_with_text_content_type_is_still_json() {
        let msg = extract_message(Some("text/plain; charset=utf-8"), r#"{"error":"Unauthorized"}"#);
        assert_eq!(msg.as_deref(), Some("Unauthorized"));
    }

    #[test]
    fn empty_body_gives_none() {
        assert_eq!(extract_message(None, "   "), None);
    }

    #[test]
    fn long_plain_text_is_truncated() {
        let body = "x".repeat(500);
        let msg = extract_message(None, &body).unwrap();
        assert_eq!(msg.chars().count(), MAX_PLAIN_MESSAGE_LEN + 1);
        assert!(msg.ends_with('…'));
    }
}

//! The Fawry gateway client.
//!
//! [`FawryClient`] is configured once with an environment flag (sandbox vs.
//! production) and the merchant's secret key, and exposes the three gateway
//! operations: [`charge`](FawryClient::charge), [`refund`](FawryClient::refund),
//! and [`status`](FawryClient::status). Every operation runs the same pipeline:
//!
//! 1. validate the payload (fail-fast, before any network activity)
//! 2. compute the request signature over the operation's ordered field list
//! 3. assemble the request (JSON body for charge/refund, query string for status)
//! 4. dispatch over HTTPS and return the raw [`reqwest::Response`]
//!
//! The client does not parse gateway response bodies and never retries; both are
//! the caller's responsibility.

use crate::errors::Result;
use crate::signature;
use crate::types::{Charge, Refund, Status};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, Response};
use serde::Serialize;
use url::Url;

const PRODUCTION_BASE_URL: &str = "https://www.atfawry.com";
const SANDBOX_BASE_URL: &str = "https://atfawry.fawrystaging.com";
const API_PATH: &str = "/ECommerceWeb/Fawry/payments/";

/// A client for the Fawry payment gateway.
///
/// Immutable after construction and safe to share across threads: the only held
/// resource is a [`reqwest::Client`], which is internally reference-counted and
/// designed for concurrent reuse. There is no per-call mutable state.
///
/// # Examples
///
/// ```no_run
/// use fawry_rs::client::FawryClient;
/// use fawry_rs::types::Charge;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = FawryClient::new(true, "your-secure-key");
///
/// let charge = Charge {
///     merchant_code: "MERCH001".to_string(),
///     merchant_ref_num: "REF-100".to_string(),
///     customer_profile_id: "CUST-7".to_string(),
///     payment_method: "CARD".to_string(),
///     amount: "100.00".to_string(),
///     card_token: "tok_abc".to_string(),
///     ..Default::default()
/// };
///
/// let response = client.charge(&charge).await?;
/// println!("gateway replied: {}", response.status());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct FawryClient {
    is_sandbox: bool,
    secure_key: String,
    http_client: Client,
}

/// A payload with the computed `signature` field appended, in the flattened
/// shape the gateway expects: `{ ...payload fields, "signature": "..." }`.
#[derive(Serialize)]
struct SignedBody<'a, T: Serialize> {
    #[serde(flatten)]
    payload: &'a T,
    signature: String,
}

impl FawryClient {
    /// Creates a new gateway client.
    ///
    /// # Arguments
    ///
    /// * `is_sandbox` - Route requests to the staging environment instead of production
    /// * `secure_key` - The merchant's shared secret key. It is only ever folded
    ///   into the one-way request signature, never transmitted as a field.
    pub fn new(is_sandbox: bool, secure_key: impl Into<String>) -> Self {
        Self {
            is_sandbox,
            secure_key: secure_key.into(),
            http_client: Client::new(),
        }
    }

    /// Replaces the HTTP transport with a caller-configured one.
    ///
    /// Timeouts and other transport policy live on the [`reqwest::Client`]; this
    /// crate enforces no deadline of its own.
    pub fn with_client(mut self, client: Client) -> Self {
        self.http_client = client;
        self
    }

    /// Returns the base endpoint root for this client's environment.
    ///
    /// # Examples
    ///
    /// ```
    /// use fawry_rs::client::FawryClient;
    ///
    /// let sandbox = FawryClient::new(true, "key");
    /// assert_eq!(
    ///     sandbox.endpoint(),
    ///     "https://atfawry.fawrystaging.com/ECommerceWeb/Fawry/payments/"
    /// );
    /// ```
    pub fn endpoint(&self) -> String {
        if self.is_sandbox {
            format!("{}{}", SANDBOX_BASE_URL, API_PATH)
        } else {
            format!("{}{}", PRODUCTION_BASE_URL, API_PATH)
        }
    }

    /// Charges the customer.
    ///
    /// Covers card-token payment, direct debit, and reference-number generation
    /// for payment at a Fawry outlet, depending on the payload's
    /// `payment_method`. The payload is validated first; a validation failure is
    /// returned before anything reaches the network. On success the charge is
    /// signed, serialized to JSON, and POSTed to `{base}charge`.
    ///
    /// Returns the raw gateway response. A single attempt is made per call.
    pub async fn charge(&self, charge: &Charge) -> Result<Response> {
        charge.validate()?;

        let url = self.operation_url("charge")?;
        let signature = signature::compute(&[
            &charge.merchant_code,
            &charge.merchant_ref_num,
            &charge.customer_profile_id,
            &charge.payment_method,
            &charge.amount,
            &charge.card_token,
            &self.secure_key,
        ]);

        let body = SignedBody {
            payload: charge,
            signature,
        };
        self.send_request(Method::POST, url, Some(&body)).await
    }

    /// Refunds a previously captured payment back to the customer.
    ///
    /// Validates, signs over the refund field order, and POSTs the signed JSON
    /// body to `{base}refund`. Returns the raw gateway response.
    pub async fn refund(&self, refund: &Refund) -> Result<Response> {
        refund.validate()?;

        let url = self.operation_url("refund")?;
        let signature = signature::compute(&[
            &refund.merchant_code,
            &refund.reference_number,
            &refund.refund_amount,
            &refund.reason,
            &self.secure_key,
        ]);

        let body = SignedBody {
            payload: refund,
            signature,
        };
        self.send_request(Method::POST, url, Some(&body)).await
    }

    /// Retrieves the payment status for a previous charge request.
    ///
    /// Validates, signs over the status field order, and issues a GET to
    /// `{base}status` with `merchantCode`, `merchantRefNumber`, and `signature`
    /// as query parameters. No request body is sent. Returns the raw gateway
    /// response.
    pub async fn status(&self, status: &Status) -> Result<Response> {
        status.validate()?;

        let url = self.status_url(status)?;
        self.send_request(Method::GET, url, None::<&()>).await
    }

    fn operation_url(&self, operation: &str) -> Result<Url> {
        Ok(Url::parse(&format!("{}{}", self.endpoint(), operation))?)
    }

    /// Builds the status GET URL, signature included.
    ///
    /// The query parameter is `merchantRefNumber` while the JSON field is
    /// `merchantRefNum`; the mismatch is the gateway's documented wire format.
    fn status_url(&self, status: &Status) -> Result<Url> {
        let signature = signature::compute(&[
            &status.merchant_code,
            &status.merchant_ref_num,
            &self.secure_key,
        ]);

        let mut url = self.operation_url("status")?;
        url.query_pairs_mut()
            .append_pair("merchantCode", &status.merchant_code)
            .append_pair("merchantRefNumber", &status.merchant_ref_num)
            .append_pair("signature", &signature);
        Ok(url)
    }

    /// Shared dispatch helper for all three operations.
    ///
    /// Serializes the body (if present) to JSON, sets the JSON content-type
    /// header, executes the request on the shared transport, and returns the
    /// response untouched. Serialization, URL, and transport failures each
    /// surface as their own [`FawryError`](crate::errors::FawryError) variant;
    /// nothing is retried or swallowed.
    async fn send_request<T: Serialize>(
        &self,
        method: Method,
        url: Url,
        body: Option<&T>,
    ) -> Result<Response> {
        let mut request = self
            .http_client
            .request(method, url.clone())
            .header(CONTENT_TYPE, "application/json");

        if let Some(body) = body {
            let json = serde_json::to_value(body)?;
            request = request.json(&json);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(url = %url, "dispatching gateway request");

        let response = request.send().await?;
        Ok(response)
    }
}

//! # fawry-rs
//!
//! A Rust client for the Fawry payment gateway REST API.
//!
//! Fawry authenticates every request with a deterministic signature: the SHA-256
//! digest of an operation-specific, ordered, comma-joined list of request fields
//! ending with the merchant's secret key, encoded as lowercase hex. This crate
//! implements that signing pipeline and the three gateway operations built on it:
//!
//! - **Charge**: charge a customer by card token, direct debit, or generate a
//!   reference number to be paid at a Fawry outlet
//! - **Refund**: refund a captured payment back to the customer
//! - **Status**: query the payment status of a previous charge
//!
//! Every operation validates its payload before touching the network, signs it,
//! dispatches a single HTTPS request, and hands back the raw [`reqwest::Response`]
//! for the caller to interpret. There are no retries, no response parsing, and no
//! state beyond the shared HTTP transport.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fawry_rs::{Charge, FawryClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // true = sandbox environment
//! let client = FawryClient::new(true, "your-secure-key");
//!
//! let charge = Charge {
//!     merchant_code: "MERCH001".to_string(),
//!     merchant_ref_num: "REF-100".to_string(),
//!     customer_profile_id: "CUST-7".to_string(),
//!     payment_method: "CARD".to_string(),
//!     amount: "100.00".to_string(),
//!     card_token: "tok_abc".to_string(),
//!     ..Default::default()
//! };
//!
//! let response = client.charge(&charge).await?;
//! println!("gateway replied: {}", response.text().await?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environments
//!
//! The sandbox flag passed at construction selects the endpoint root:
//!
//! - Production: `https://www.atfawry.com/ECommerceWeb/Fawry/payments/`
//! - Sandbox: `https://atfawry.fawrystaging.com/ECommerceWeb/Fawry/payments/`
//!
//! ## Security
//!
//! The secret key only ever contributes to the one-way signature digest; it is
//! never transmitted as a request field. Signature field order is fixed per
//! operation and must match the gateway's documented order exactly, or the
//! server-side check rejects the request.

pub mod client;
pub mod errors;
pub mod signature;
pub mod types;

pub use client::FawryClient;
pub use errors::{FawryError, Result};
pub use types::{Charge, ChargeItem, Refund, Status};

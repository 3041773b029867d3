//! Example: look up the payment status of a previous charge.
//!
//! Run with:
//! ```bash
//! FAWRY_SECURE_KEY=your-key cargo run --example status -- ORDER-2024-001
//! ```

use fawry_rs::{FawryClient, Status};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let secure_key =
        std::env::var("FAWRY_SECURE_KEY").unwrap_or_else(|_| "demo-secure-key".to_string());
    let merchant_ref_num = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "ORDER-2024-001".to_string());

    let client = FawryClient::new(true, secure_key);

    let status = Status {
        merchant_code: "MERCH001".to_string(),
        merchant_ref_num,
    };

    let response = client.status(&status).await?;
    println!("status: {}", response.status());
    println!("body: {}", response.text().await?);

    Ok(())
}

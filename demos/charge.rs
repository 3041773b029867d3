//! Example: charge a customer in the sandbox environment.
//!
//! Run with:
//! ```bash
//! FAWRY_SECURE_KEY=your-key cargo run --example charge
//! ```

use fawry_rs::{Charge, ChargeItem, FawryClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let secure_key =
        std::env::var("FAWRY_SECURE_KEY").unwrap_or_else(|_| "demo-secure-key".to_string());

    let client = FawryClient::new(true, secure_key);

    let charge = Charge {
        merchant_code: "MERCH001".to_string(),
        merchant_ref_num: "ORDER-2024-001".to_string(),
        customer_profile_id: "CUST-7".to_string(),
        customer_mobile: "01012345678".to_string(),
        customer_email: "customer@example.com".to_string(),
        payment_method: "CARD".to_string(),
        amount: "150.00".to_string(),
        currency_code: "EGP".to_string(),
        card_token: "tok_demo".to_string(),
        description: "Demo order".to_string(),
        charge_items: vec![ChargeItem {
            item_id: "SKU-1".to_string(),
            description: "Widget".to_string(),
            price: "150.00".to_string(),
            quantity: 1,
        }],
    };

    let response = client.charge(&charge).await?;
    println!("status: {}", response.status());
    println!("body: {}", response.text().await?);

    Ok(())
}

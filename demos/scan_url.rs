//! URL scanning example against the live VirusTotal API.
//!
//! This example shows how to:
//! - Create a client from an API key
//! - Submit a URL and read the submission receipt
//! - Fetch an analysis by id
//! - Scan and wait for completion in one call
//!
//! Run with: VIRUSTOTAL_API_KEY=... cargo run --example scan_url

use vturl::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let api_key = std::env::var("VIRUSTOTAL_API_KEY")
        .map_err(|_| "VIRUSTOTAL_API_KEY environment variable is not set")?;

    let client = Client::new(ClientConfig::new(api_key))?;
    let url = "https://example.com";

    println!("=== vturl URL Scan Example ===\n");

    // Submit the URL and inspect the receipt
    println!("Submitting URL: {url}");
    let submission = client.scan_url(url).await?;
    println!("Analysis ID: {}", submission.analysis_id());
    println!("Analysis URL: {}", submission.self_link());

    // Fetch the analysis once; it may still be queued or in progress
    let report = client.get_analysis(submission.analysis_id()).await?;
    println!("\nCurrent status: {}", report.status());

    // Scan and wait for completion (this may take a moment)
    println!("\nScanning and waiting for completion...");
    let report = client.scan_url_and_wait(url).await?;

    let stats = report.stats();
    println!("\n=== Analysis Results ===");
    println!("Status: {}", report.status());
    if let Some(date) = report.date() {
        println!("Observed at: {date}");
    }
    println!("Harmless: {}", stats.harmless);
    println!("Malicious: {}", stats.malicious);
    println!("Suspicious: {}", stats.suspicious);
    println!("Undetected: {}", stats.undetected);

    // List any engines that flagged the URL
    for (engine, result) in report.results() {
        if result.category.is_detection() {
            println!(
                "Detection from {engine}: {}",
                result.result.as_deref().unwrap_or("unnamed threat")
            );
        }
    }

    Ok(())
}

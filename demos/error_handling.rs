//! Example demonstrating error handling.
//!
//! This example shows how to:
//! - Handle unacceptable status codes
//! - Inspect decoding failures and the raw body
//! - Widen the acceptable status range
//! - Deal with transport failures
//!
//! Run with: `cargo run --example error_handling`

use netservice::{Error, NetworkService, Resource};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct Post {
    id: u32,
    title: String,
}

const BASE: &str = "https://jsonplaceholder.typicode.com";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter("netservice=info")
        .init();

    let service = NetworkService::new()?;

    println!("=== Example 1: Handling Status Codes ===");
    let missing = Resource::get(format!("{}/posts/999999", BASE).parse()?);
    match service.perform_request_decoded::<Post>(&missing).await {
        Ok(post) => println!("Success: {:?}", post),
        Err(Error::BadStatusCode(status)) => {
            println!("Unacceptable status: {}", status);
        }
        Err(e) => println!("Other error: {}", e),
    }
    println!();

    println!("=== Example 2: Handling Decoding Errors ===");
    #[derive(Deserialize)]
    #[allow(dead_code)]
    struct WrongSchema {
        nonexistent_field: String,
    }

    let resource = Resource::get(format!("{}/posts/1", BASE).parse()?);
    match service.perform_request_decoded::<WrongSchema>(&resource).await {
        Ok(_) => println!("Unexpected success"),
        Err(Error::Decoding {
            source,
            raw_response,
        }) => {
            println!("Decoding Failed!");
            println!("  Serde error: {}", source);
            println!(
                "  Raw response (first 200 chars): {}",
                raw_response.chars().take(200).collect::<String>()
            );
        }
        Err(e) => println!("Other error: {}", e),
    }
    println!();

    println!("=== Example 3: Widening the Acceptable Range ===");
    service.set_acceptable_status_range(200..500);
    match service.perform_request(&missing).await {
        Ok(body) => println!("Accepted 404 with body: {}", String::from_utf8_lossy(&body)),
        Err(e) => println!("Error: {}", e),
    }
    service.set_acceptable_status_range(200..300);
    println!();

    println!("=== Example 4: Handling Transport Errors ===");
    let unreachable = Resource::get("https://this-domain-does-not-exist-12345.com/".parse()?);
    match service.perform_request(&unreachable).await {
        Ok(_) => println!("Unexpected success"),
        Err(Error::DataTask(e)) => {
            println!("Transport Error!");
            println!("  Error: {}", e);
        }
        Err(e) => println!("Other error: {}", e),
    }

    Ok(())
}

//! Basic example demonstrating simple GET and POST requests.
//!
//! This example shows how to:
//! - Create a service with default headers
//! - Perform GET requests and decode the body
//! - Perform POST requests with a JSON body
//! - Read the raw body without decoding
//!
//! Run with: `cargo run --example basic_call`

use netservice::{NetworkService, Resource};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct Post {
    #[serde(rename = "userId")]
    user_id: u32,
    id: u32,
    title: String,
    body: String,
}

#[derive(Debug, Serialize)]
struct NewPost {
    title: String,
    body: String,
    #[serde(rename = "userId")]
    user_id: u32,
}

const BASE: &str = "https://jsonplaceholder.typicode.com";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter("netservice=debug,basic_call=info")
        .init();

    let service = NetworkService::builder()
        .default_header("Accept", "application/json")
        .build()?;

    println!("=== GET Request Example ===");
    let resource = Resource::get(format!("{}/posts/1", BASE).parse()?);
    let post: Post = service.perform_request_decoded(&resource).await?;

    println!("Post ID: {}", post.id);
    println!("Title: {}", post.title);
    println!("Body: {}", post.body);
    println!();

    println!("=== POST Request Example ===");
    let new_post = NewPost {
        title: "My New Post".to_string(),
        body: "This is the content of my new post!".to_string(),
        user_id: 1,
    };

    let resource = Resource::post(
        format!("{}/posts", BASE).parse()?,
        serde_json::to_vec(&new_post)?,
    )
    .with_header("Content-Type", "application/json");

    let created: Post = service.perform_request_decoded(&resource).await?;
    println!("Created post ID: {}", created.id);
    println!("Title: {}", created.title);
    println!();

    println!("=== Raw Body Example ===");
    let resource = Resource::get(format!("{}/posts/1/comments", BASE).parse()?);
    let raw = service.perform_request(&resource).await?;
    println!("Raw response length: {} bytes", raw.len());

    Ok(())
}

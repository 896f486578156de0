//! AWS Lambda handler serving the pro-forma dashboard endpoint
//!
//! Accepts a wizard snapshot as the JSON body of a POST and returns the
//! dashboard data in the same shape the frontend charts consume.
//!
//! Supports Lambda Function URLs for direct HTTP access.

use daycare_simulator::input::parse_input;
use daycare_simulator::ProFormaEngine;
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

fn cors(builder: lambda_http::http::response::Builder) -> lambda_http::http::response::Builder {
    builder
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type, Authorization")
}

fn json_response<T: Serialize>(status: u16, body: &T) -> Result<Response<Body>, Error> {
    let response = cors(Response::builder())
        .status(status)
        .header("Content-Type", "application/json")
        .body(Body::Text(serde_json::to_string(body)?))?;
    Ok(response)
}

/// Lambda handler function
async fn handler(event: Request) -> Result<Response<Body>, Error> {
    let start = std::time::Instant::now();

    // Handle CORS preflight
    if event.method().as_str() == "OPTIONS" {
        return Ok(cors(Response::builder()).status(200).body(Body::Empty)?);
    }

    let body_str = match event.body() {
        Body::Text(s) => s.clone(),
        Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
        Body::Empty => "{}".to_string(),
    };

    let input = match parse_input(&body_str) {
        Ok(input) => input,
        Err(e) => {
            log::warn!("rejecting pro-forma request: {}", e);
            return json_response(400, &ErrorBody { error: e.to_string() });
        }
    };

    let result = ProFormaEngine::default().project(&input);

    log::info!(
        "pro-forma for '{}' computed in {:?}",
        input.business_name,
        start.elapsed()
    );

    json_response(200, &result)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}

#![allow(dead_code)]

use std::{
    net::SocketAddr,
    sync::{Arc, Mutex},
};

use axum::{
    extract::RawQuery,
    http::{header, HeaderMap, StatusCode},
    routing::get,
    Router,
};
use propsearch::{
    config::{create_test_config, Config},
    web::{router, AppState},
};
use tokio::net::TcpListener;

pub const UPSTREAM_TOKEN: &str = "test-token";

/// What the fake provider saw: (query string, authorization header).
pub type SeenRequests = Arc<Mutex<Vec<(String, String)>>>;

pub async fn serve(listener: TcpListener, app: Router) {
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
}

/// Fake listing provider answering every `/properties` request with `status`
/// and `body`.
pub async fn spawn_upstream(status: StatusCode, body: &str) -> (SocketAddr, SeenRequests) {
    let seen: SeenRequests = Arc::new(Mutex::new(Vec::new()));
    let body = body.to_string();

    let recorder = seen.clone();
    let app = Router::new().route(
        "/properties",
        get(move |headers: HeaderMap, RawQuery(query): RawQuery| {
            let recorder = recorder.clone();
            let body = body.clone();
            async move {
                let auth = headers
                    .get(header::AUTHORIZATION)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_string();
                recorder
                    .lock()
                    .unwrap()
                    .push((query.unwrap_or_default(), auth));
                (status, [(header::CONTENT_TYPE, "application/json")], body)
            }
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    serve(listener, app).await;
    (addr, seen)
}

/// Relay server talking to the fake provider at `upstream`. Its search
/// endpoint calls back into its own relay route.
pub async fn spawn_relay(upstream: SocketAddr) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}", addr);

    let config = Config {
        upstream_api_url: format!("http://{}/properties", upstream),
        upstream_api_token: UPSTREAM_TOKEN.to_string(),
        http_bind_address: Some(addr.to_string()),
        relay_base_url: Some(base_url.clone()),
        ..create_test_config()
    };

    serve(listener, router(AppState::new(Arc::new(config)))).await;
    base_url
}

/// Base URL of a port nothing listens on.
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

pub const CANTERBURY_BODY: &str = r#"{
  "results": [
    {
      "address": {"sa1": "11901135808", "sal": "Canterbury", "state": "NSW", "street": "12 Church Street"},
      "area_level": "suburb",
      "area_name": "Canterbury",
      "attributes": {"bathrooms": 2.0, "bedrooms": 4.0, "building_size": NaN, "description": "Family home", "garage_spaces": 1.0, "land_size": "650m²"},
      "coordinates": {"latitude": -33.9121, "longitude": 151.1182},
      "gnaf_pid": "GANSW704045191",
      "listing_date": "2024-03-02",
      "price": 1650000,
      "property_type": "House"
    },
    {
      "address": {"sa1": "11901135809", "sal": "Canterbury", "state": "NSW", "street": "3 Minter Street"},
      "area_level": "suburb",
      "area_name": "Canterbury",
      "attributes": {"bathrooms": NaN, "bedrooms": 3.0, "building_size": null, "description": "Brick cottage", "garage_spaces": NaN, "land_size": NaN},
      "coordinates": {"latitude": -33.9130, "longitude": 151.1190},
      "gnaf_pid": "GANSW704045192",
      "listing_date": "2024-02-18",
      "price": 1295000,
      "property_type": "House"
    },
    {
      "address": {"sa1": "11901135810", "sal": "Canterbury", "state": "NSW", "street": "8/20 Charles Street"},
      "area_level": "suburb",
      "area_name": "Canterbury",
      "attributes": {"bathrooms": 1.0, "bedrooms": 2.0, "building_size": null, "description": "Top floor unit", "garage_spaces": null, "land_size": null},
      "coordinates": {"latitude": -33.9111, "longitude": 151.1201},
      "gnaf_pid": "GANSW704045193",
      "listing_date": "2024-03-10",
      "price": 689000,
      "property_type": "Apartment"
    }
  ]
}"#;

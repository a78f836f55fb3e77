use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{HeaderValue, Method, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use log::{error, info};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::net::TcpListener;

use crate::{
    config::Config,
    models::{
        criteria::{PropertyTypeFilter, SearchCriteria, ALL_PROPERTY_TYPES, DEFAULT_MAX_PRICE},
        property::{ListingType, NormalizedProperty},
    },
    sample_data::{suggest_suburbs, DEFAULT_SUBURB},
    services::{filter::filter, search::PropertyService},
    upstream::UpstreamClient,
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub upstream: UpstreamClient,
    pub search: PropertyService,
}

impl AppState {
    pub fn new(config: Arc<Config>) -> AppState {
        AppState {
            upstream: UpstreamClient::new(&config),
            search: PropertyService::from_config(&config),
            config,
        }
    }
}

#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

#[derive(Deserialize, Default)]
pub struct RelayQuery {
    pub suburb: Option<String>,
    pub property_type: Option<String>,
}

#[derive(Deserialize, Default)]
pub struct SearchQuery {
    pub location: Option<String>,
    pub property_type: Option<String>,
    pub listing_type: Option<String>,
    pub min_price: Option<u64>,
    pub max_price: Option<u64>,
    pub min_bedrooms: Option<u32>,
    pub min_bathrooms: Option<u32>,
}

#[derive(Deserialize, Default)]
pub struct SuburbQuery {
    pub query: Option<String>,
}

#[derive(Serialize)]
pub struct PropertiesResponse {
    pub properties: Vec<NormalizedProperty>,
    pub total: usize,
}

#[derive(Serialize)]
pub struct SuburbsResponse {
    pub suburbs: Vec<&'static str>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/properties", get(relay_properties))
        .route("/api/search", get(search_properties))
        .route("/api/suburbs", get(list_suburbs))
        .layer(middleware::from_fn(cors_layer))
        .with_state(state)
}

pub async fn start_http_server(
    state: AppState,
    mut shutdown_rx: tokio::sync::broadcast::Receiver<()>,
) -> anyhow::Result<()> {
    let bind_addr = state.config.bind_address();

    let listener = TcpListener::bind(&bind_addr).await?;
    info!("Listening on {}", listener.local_addr()?);
    let app = router(state);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.recv().await;
        })
        .await?;

    Ok(())
}

async fn cors_layer(req: axum::http::Request<axum::body::Body>, next: Next) -> Response {
    if req.method() == Method::OPTIONS {
        let mut response = Response::new(axum::body::Body::empty());
        apply_cors_headers(response.headers_mut());
        *response.status_mut() = StatusCode::NO_CONTENT;
        response
    } else {
        let mut response = next.run(req).await;
        apply_cors_headers(response.headers_mut());
        response
    }
}

fn apply_cors_headers(headers: &mut axum::http::HeaderMap) {
    headers.insert(
        axum::http::header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        axum::http::header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("content-type"),
    );
    headers.insert(
        axum::http::header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, OPTIONS"),
    );
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/*
   Relay: forwards the search to the listing provider with credentials and
   hands back its payload. Any failure becomes a 500 with an empty result list.
*/
async fn relay_properties(
    State(state): State<AppState>,
    Query(query): Query<RelayQuery>,
) -> Response {
    let suburb = non_empty(query.suburb).unwrap_or_else(|| DEFAULT_SUBURB.to_string());
    let property_type =
        non_empty(query.property_type).unwrap_or_else(|| ALL_PROPERTY_TYPES.to_string());

    match state.upstream.fetch_properties(&suburb, &property_type).await {
        Ok(data) => Json(data).into_response(),
        Err(e) => {
            error!("Error fetching properties: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to fetch properties", "results": [] })),
            )
                .into_response()
        }
    }
}

async fn search_properties(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<ApiResponse<PropertiesResponse>>, (StatusCode, String)> {
    let defaults = SearchCriteria::default();

    let listing_type = match non_empty(query.listing_type) {
        Some(listing_type) => listing_type
            .parse::<ListingType>()
            .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?,
        None => defaults.listing_type,
    };
    let property_type_param =
        non_empty(query.property_type).unwrap_or_else(|| ALL_PROPERTY_TYPES.to_string());
    let property_type = property_type_param
        .parse::<PropertyTypeFilter>()
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    let criteria = SearchCriteria {
        listing_type,
        property_type,
        price_range: (
            query.min_price.unwrap_or(0),
            query.max_price.unwrap_or(DEFAULT_MAX_PRICE),
        ),
        min_bedrooms: query.min_bedrooms.unwrap_or(defaults.min_bedrooms),
        min_bathrooms: query.min_bathrooms.unwrap_or(defaults.min_bathrooms),
    };

    let location = non_empty(query.location).unwrap_or_else(|| DEFAULT_SUBURB.to_string());
    let results = state
        .search
        .search(&location, &property_type.to_string())
        .await;
    let properties = filter(&results, &criteria);

    Ok(Json(ApiResponse {
        data: PropertiesResponse {
            total: properties.len(),
            properties,
        },
    }))
}

async fn list_suburbs(Query(SuburbQuery { query }): Query<SuburbQuery>) -> Json<ApiResponse<SuburbsResponse>> {
    let suburbs = suggest_suburbs(query.as_deref().unwrap_or(""));
    Json(ApiResponse {
        data: SuburbsResponse { suburbs },
    })
}

use actix_web::{web, HttpResponse, Responder};
use crate::config::Settings;
use crate::core::SearchPipeline;
use crate::models::{HealthResponse, ListingsQuery, OptionResponse, SearchRequest, SearchResponse, SortKey};
use crate::routes::error_response;
use crate::services::Catalog;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub pipeline: SearchPipeline,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(catalog: Catalog, settings: Settings) -> Self {
        Self {
            catalog: Arc::new(catalog),
            pipeline: SearchPipeline::with_default_filters(),
            settings: Arc::new(settings),
        }
    }
}

/// Configure listing and catalog routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/filters", web::get().to(list_filters))
        .route("/sort-options", web::get().to(list_sort_options))
        .route("/listings", web::get().to(get_listings))
        .route("/listings/search", web::post().to(search_listings))
        .route("/listings/{id}", web::get().to(get_listing))
        .route("/receipts", web::get().to(list_receipts));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

async fn list_filters(state: web::Data<AppState>) -> impl Responder {
    let filters: Vec<OptionResponse> = state
        .pipeline
        .filters()
        .iter()
        .map(|f| OptionResponse {
            key: f.key.clone(),
            label: f.label.clone(),
        })
        .collect();

    HttpResponse::Ok().json(filters)
}

async fn list_sort_options(state: web::Data<AppState>) -> impl Responder {
    let options: Vec<OptionResponse> = state
        .catalog
        .sort_options()
        .iter()
        .map(|s| OptionResponse {
            key: s.key().to_string(),
            label: s.label().to_string(),
        })
        .collect();

    HttpResponse::Ok().json(options)
}

/// Run the search pipeline over the shared catalog
fn run_search(state: &AppState, filters: &[String], sort: Option<&str>) -> SearchResponse {
    let sort = sort.map(SortKey::from_key).unwrap_or_default();
    let result = state
        .pipeline
        .search(state.catalog.listings(), filters, sort);

    tracing::info!(
        "Search returned {} of {} listings (sort: {})",
        result.listings.len(),
        result.catalog_size,
        sort.key()
    );

    SearchResponse {
        total_results: result.listings.len(),
        listings: result.listings.into_iter().cloned().collect(),
        sort,
        applied_filters: result.applied_filters,
        ignored_filters: result.ignored_filters,
        catalog_size: result.catalog_size,
    }
}

/// Search listings
///
/// GET /api/v1/listings?filters=fenced,no-other-pets&sort=price-asc
async fn get_listings(
    state: web::Data<AppState>,
    query: web::Query<ListingsQuery>,
) -> impl Responder {
    let filters = query.filter_keys();
    HttpResponse::Ok().json(run_search(&state, &filters, query.sort.as_deref()))
}

/// Search listings with a JSON body
///
/// POST /api/v1/listings/search
///
/// Request body:
/// ```json
/// {
///   "filters": ["fenced"],
///   "sort": "rating-desc"
/// }
/// ```
async fn search_listings(
    state: web::Data<AppState>,
    req: web::Json<SearchRequest>,
) -> impl Responder {
    HttpResponse::Ok().json(run_search(&state, &req.filters, req.sort.as_deref()))
}

/// Listing detail
///
/// GET /api/v1/listings/{id}
async fn get_listing(
    state: web::Data<AppState>,
    path: web::Path<u32>,
) -> impl Responder {
    let id = path.into_inner();
    match state.catalog.find(id) {
        Some(listing) => HttpResponse::Ok().json(listing),
        None => {
            tracing::debug!("Listing {} not found", id);
            error_response(
                actix_web::http::StatusCode::NOT_FOUND,
                "not_found",
                format!("No listing with id {}", id),
            )
        }
    }
}

async fn list_receipts(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.catalog.receipts())
}

//! Application router configuration for the JSON API and the HTML pages.

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;

use crate::{
    AppState, endpoints,
    logging::logging_middleware,
    not_found::get_404_not_found,
    status::get_statuses_endpoint,
    transaction::{
        create_transaction_endpoint, create_transaction_form_endpoint, get_edit_transaction_page,
        get_new_transaction_page, get_products_endpoint, get_transaction_endpoint,
        get_transaction_page, get_transactions_endpoint, get_transactions_page,
        update_transaction_endpoint, update_transaction_form_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    // The API may be called from a client hosted elsewhere.
    let api_routes = Router::new()
        .route(endpoints::API_ROOT, get(get_api_banner))
        .route(
            endpoints::TRANSACTIONS_API,
            get(get_transactions_endpoint).post(create_transaction_endpoint),
        )
        .route(
            endpoints::TRANSACTION_API,
            get(get_transaction_endpoint).put(update_transaction_endpoint),
        )
        .route(endpoints::STATUSES_API, get(get_statuses_endpoint))
        .route(endpoints::PRODUCTS_API, get(get_products_endpoint))
        .layer(CorsLayer::permissive());

    let page_routes = Router::new()
        .route(endpoints::ROOT, get(get_transactions_page))
        .route(
            endpoints::TRANSACTIONS_FORM,
            post(create_transaction_form_endpoint),
        )
        .route(endpoints::NEW_TRANSACTION_VIEW, get(get_new_transaction_page))
        .route(
            endpoints::TRANSACTION_VIEW,
            get(get_transaction_page).put(update_transaction_form_endpoint),
        )
        .route(
            endpoints::EDIT_TRANSACTION_VIEW,
            get(get_edit_transaction_page),
        );

    api_routes
        .merge(page_routes)
        .fallback(get_404_not_found)
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state)
}

async fn get_api_banner() -> &'static str {
    "Data Demo API - Use /api/v1/data to access data"
}

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use std::path::Path;
use tower_http::{
    cors::CorsLayer, services::ServeDir, set_header::SetResponseHeaderLayer, trace::TraceLayer,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::ErrorDto,
        item::{CreateItemDto, ItemDto, UpdateItemDto},
    },
    server::{controller::item, state::AppState},
};

/// Path prefixes of the frontend source tree that must never be served.
const HIDDEN_PREFIXES: [&str; 4] = ["node_modules", "assets", "server", "src"];

#[derive(OpenApi)]
#[openapi(
    paths(
        item::list_items,
        item::create_item,
        item::update_item,
        item::patch_item,
        item::delete_item,
    ),
    components(schemas(ItemDto, CreateItemDto, UpdateItemDto, ErrorDto)),
    modifiers(&BearerAuth),
    tags((name = "item", description = "Items of the seeded `Collection` collection"))
)]
pub struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// Builds the application router.
///
/// The item API is only mounted when `state` is present, i.e. when the database is
/// enabled. Static assets are served under `/app`; every other unmatched path gets the
/// HTML 404 page.
///
/// # Arguments
/// - `state` - Application state, `None` when the database is disabled
/// - `static_dir` - Directory served under `/app`
///
/// # Returns
/// - `Router` - Router with CORS, tracing and security header layers applied
pub fn router(state: Option<AppState>, static_dir: &Path) -> Router {
    let mut router = Router::new()
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
        .nest_service("/app", ServeDir::new(static_dir));

    for prefix in HIDDEN_PREFIXES {
        router = router.route(&format!("/{prefix}/{{*path}}"), get(not_found));
    }

    if let Some(state) = state {
        router = router.merge(api_router().with_state(state));
    }

    router
        .fallback(not_found)
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("SAMEORIGIN"),
        ))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn api_router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/collection",
            get(item::list_items).post(item::create_item),
        )
        .route(
            "/api/collection/{id}",
            axum::routing::put(item::update_item)
                .patch(item::patch_item)
                .delete(item::delete_item),
        )
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Html("<h1>404 Not Found</h1>"))
}

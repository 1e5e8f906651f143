//! API Router with Swagger UI

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::{CalculationService, RateTableService};
use crate::domain::RepositoryProvider;
use crate::interfaces::http::common::{ApiResponse, PaginatedResponse, PaginationQuery};
use crate::interfaces::http::modules::calculations::{self, CalculationState};
use crate::interfaces::http::modules::health::{self, HealthState};
use crate::interfaces::http::modules::metrics::{
    http_metrics_middleware, prometheus_metrics, MetricsState,
};
use crate::interfaces::http::modules::rate_tables::{self, RateTableState};
use crate::interfaces::http::modules::request_id::request_id_middleware;

/// Application services shared by the handlers
#[derive(Clone)]
pub struct ApiServices {
    pub rate_tables: Arc<RateTableService>,
    pub calculations: Arc<CalculationService>,
}

impl ApiServices {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self {
            rate_tables: Arc::new(RateTableService::new(repos.clone())),
            calculations: Arc::new(CalculationService::new(repos)),
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        rate_tables::create_rate_table,
        rate_tables::deactivate_rate_table,
        rate_tables::list_rate_tables,
        rate_tables::get_rate_table,
        calculations::calculate,
    ),
    components(
        schemas(
            ApiResponse<String>,
            PaginatedResponse<rate_tables::RateTableResponse>,
            PaginationQuery,
            health::HealthResponse,
            health::ComponentHealth,
            rate_tables::CreateRateTableRequest,
            rate_tables::CategoryRequest,
            rate_tables::RangeRequest,
            rate_tables::CreateRateTableResponse,
            rate_tables::DeactivateRateTableResponse,
            rate_tables::RateTableResponse,
            rate_tables::CategoryResponse,
            rate_tables::RangeResponse,
            calculations::CalculationRequest,
            calculations::CalculationResponse,
            calculations::BreakdownItem,
            calculations::RangeBounds,
        )
    ),
    tags(
        (name = "Health", description = "Service health check"),
        (name = "Rate Tables", description = "Tiered rate table administration. At most one table is active."),
        (name = "Calculations", description = "Water bill calculation against the active rate table"),
    ),
    info(
        title = "Water Tariff API",
        version = "1.0.0",
        description = "Tiered water tariff tables and consumption pricing",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(
    services: ApiServices,
    health_state: HealthState,
    metrics_handle: PrometheusHandle,
) -> Router {
    let rate_table_routes = Router::new()
        .route(
            "/",
            get(rate_tables::list_rate_tables).post(rate_tables::create_rate_table),
        )
        .route(
            "/{id}",
            get(rate_tables::get_rate_table).delete(rate_tables::deactivate_rate_table),
        )
        .with_state(RateTableState {
            service: services.rate_tables,
        });

    let calculation_routes = Router::new()
        .route("/", post(calculations::calculate))
        .with_state(CalculationState {
            service: services.calculations,
        });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    Router::new()
        .route("/health", get(health::health_check))
        .with_state(health_state)
        .route("/metrics", get(prometheus_metrics))
        .with_state(MetricsState {
            handle: metrics_handle,
        })
        .nest("/api/rate-tables", rate_table_routes)
        .nest("/api/calculations", calculation_routes)
        // After routing, so the matched template is available as the path label
        .route_layer(middleware::from_fn(http_metrics_middleware))
        .merge(swagger_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::migrator::{Migrator, MigratorTrait};
    use crate::infrastructure::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use metrics_exporter_prometheus::PrometheusBuilder;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn app() -> Router {
        let db = init_database(&DatabaseConfig::in_memory()).await.unwrap();
        Migrator::up(&db, None).await.unwrap();

        let repos: Arc<dyn RepositoryProvider> = Arc::new(SeaOrmRepositoryProvider::new(db.clone()));
        let handle = PrometheusBuilder::new().build_recorder().handle();
        create_api_router(ApiServices::new(repos), HealthState::new(db), handle)
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header("content-type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let resp = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    fn overlapping_ranges() -> Value {
        json!([
            {"start": 0, "end": 10, "unitPrice": 5.00},
            {"start": 10, "unitPrice": "10.00"}
        ])
    }

    /// Every category priced `[0, 10]` @ 5.00 and `[11, ∞)` @ 10.00
    fn table_body(name: &str) -> Value {
        let ranges = json!([
            {"start": 0, "end": 10, "unitPrice": 5.00},
            {"start": 11, "unitPrice": "10.00"}
        ]);
        json!({
            "name": name,
            "categories": [
                {"category": "COMMERCIAL", "ranges": ranges},
                {"category": "industrial", "ranges": ranges},
                {"category": "Residential", "ranges": ranges},
                {"category": "PUBLICO", "ranges": ranges},
            ]
        })
    }

    #[tokio::test]
    async fn create_list_and_get() {
        let app = app().await;

        let (status, body) = send(&app, "POST", "/api/rate-tables", Some(table_body("2026"))).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["message"], "Rate table created successfully");
        assert!(body["data"]["effectiveTimestamp"].is_string());
        let id = body["data"]["id"].as_i64().unwrap();

        let (status, body) = send(&app, "GET", "/api/rate-tables?page=1&size=5", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["total"], 1);
        assert_eq!(body["data"]["totalPages"], 1);
        let item = &body["data"]["items"][0];
        assert_eq!(item["active"], true);
        assert_eq!(item["categories"][0]["category"], "COMMERCIAL");
        assert_eq!(item["categories"][0]["ranges"][0]["unitPrice"], "5.00");
        assert_eq!(item["categories"][0]["ranges"][1]["end"], Value::Null);

        let (status, body) = send(&app, "GET", &format!("/api/rate-tables/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["name"], "2026");

        let (status, body) = send(&app, "GET", "/api/rate-tables/999", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Rate table not found.");

        let (status, body) = send(
            &app,
            "GET",
            "/api/rate-tables?page=18446744073709551615&size=100",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["total"], 1);
        assert_eq!(body["data"]["items"], json!([]));
    }

    #[tokio::test]
    async fn second_active_table_is_rejected_until_deactivation() {
        let app = app().await;
        let (_, body) = send(&app, "POST", "/api/rate-tables", Some(table_body("first"))).await;
        let id = body["data"]["id"].as_i64().unwrap();

        let (status, body) = send(&app, "POST", "/api/rate-tables", Some(table_body("second"))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["data"], Value::Null);
        assert_eq!(
            body["error"],
            format!(
                "An active rate table already exists with id: {id}. Deactivate it before creating a new one."
            )
        );

        let (status, body) = send(&app, "DELETE", &format!("/api/rate-tables/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["active"], false);
        assert_eq!(body["data"]["message"], "Rate table deactivated successfully");

        let (status, body) = send(&app, "DELETE", &format!("/api/rate-tables/{id}"), None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Rate table is already inactive.");

        let (status, _) = send(&app, "POST", "/api/rate-tables", Some(table_body("second"))).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    #[tokio::test]
    async fn invalid_tables_report_the_specific_reason() {
        let app = app().await;

        let mut body = table_body("overlap");
        body["categories"][0]["ranges"] = overlapping_ranges();
        let (status, resp) = send(&app, "POST", "/api/rate-tables", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(resp["error"], "Ranges overlap.");

        let mut body = table_body("gap");
        body["categories"][1]["ranges"] = json!([
            {"start": 0, "end": 10, "unitPrice": 1},
            {"start": 15, "unitPrice": 2}
        ]);
        let (_, resp) = send(&app, "POST", "/api/rate-tables", Some(body)).await;
        assert_eq!(resp["error"], "There are gaps between ranges.");

        let body = json!({
            "name": "partial",
            "categories": [
                {"category": "COMMERCIAL", "ranges": [{"start": 0, "unitPrice": 1}]},
                {"category": "INDUSTRIAL", "ranges": [{"start": 0, "unitPrice": 1}]}
            ]
        });
        let (status, resp) = send(&app, "POST", "/api/rate-tables", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            resp["error"],
            "Rate table must contain all mandatory categories: [COMMERCIAL, INDUSTRIAL, RESIDENTIAL, PUBLIC]"
        );

        // Nothing was stored by the failed attempts
        let (_, list) = send(&app, "GET", "/api/rate-tables", None).await;
        assert_eq!(list["data"]["total"], 0);
    }

    #[tokio::test]
    async fn oversized_unit_price_is_a_validation_failure() {
        let app = app().await;

        for price in ["79228162514264337593543950335", "100000000000000000000", "100000000.00"] {
            let mut body = table_body("huge");
            body["categories"][2]["ranges"] = json!([{"start": 0, "unitPrice": price}]);

            let (status, resp) = send(&app, "POST", "/api/rate-tables", Some(body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{price}");
            assert_eq!(resp["error"], "Unit price must not exceed 99999999.99.");
        }

        let mut body = table_body("max");
        body["categories"][2]["ranges"] = json!([{"start": 0, "unitPrice": "99999999.99"}]);
        let (status, _) = send(&app, "POST", "/api/rate-tables", Some(body)).await;
        assert_eq!(status, StatusCode::CREATED);

        let (_, list) = send(&app, "GET", "/api/rate-tables", None).await;
        assert_eq!(list["data"]["total"], 1);
        // Response categories are sorted by name, so RESIDENTIAL is last.
        let residential = &list["data"]["items"][0]["categories"][3];
        assert_eq!(residential["category"], "RESIDENTIAL");
        assert_eq!(residential["ranges"][0]["unitPrice"], "99999999.99");
    }

    #[tokio::test]
    async fn blank_name_fails_request_validation() {
        let app = app().await;
        let mut body = table_body("x");
        body["name"] = json!("   ");

        let (status, resp) = send(&app, "POST", "/api/rate-tables", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(resp["error"].as_str().unwrap().starts_with("name:"));

        let (status, _) = send(
            &app,
            "POST",
            "/api/rate-tables",
            Some(json!({"name": "empty", "categories": []})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn calculates_against_active_table() {
        let app = app().await;

        let (status, resp) = send(
            &app,
            "POST",
            "/api/calculations",
            Some(json!({"category": "COMMERCIAL", "consumption": 5})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(resp["error"], "No active rate table.");

        send(&app, "POST", "/api/rate-tables", Some(table_body("2026"))).await;

        let (status, resp) = send(
            &app,
            "POST",
            "/api/calculations",
            Some(json!({"category": "comercial", "consumption": 5})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let data = &resp["data"];
        assert_eq!(data["category"], "COMMERCIAL");
        assert_eq!(data["totalConsumption"], 5);
        assert_eq!(data["totalAmount"], "25.00");
        assert_eq!(data["breakdown"][0]["unitsBilled"], 5);
        assert_eq!(data["breakdown"][0]["range"], json!({"start": 0, "end": 10}));
        assert_eq!(data["breakdown"][0]["subtotal"], "25.00");

        let (_, resp) = send(
            &app,
            "POST",
            "/api/calculations",
            Some(json!({"category": "COMERCIAL", "consumption": 15})),
        )
        .await;
        assert_eq!(resp["data"]["totalAmount"], "100.00");
        assert_eq!(resp["data"]["breakdown"][1]["unitsBilled"], 5);

        let (status, resp) = send(
            &app,
            "POST",
            "/api/calculations",
            Some(json!({"category": "INVALIDA", "consumption": 1})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(resp["error"], "Invalid category: INVALIDA");

        let (status, _) = send(
            &app,
            "POST",
            "/api/calculations",
            Some(json!({"category": "PUBLIC", "consumption": -3})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn health_and_docs_are_served() {
        let app = app().await;

        let (status, body) = send(&app, "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["database"]["status"], "ok");

        let (status, doc) = send(&app, "GET", "/api-doc/openapi.json", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(doc["paths"]["/api/rate-tables"].is_object());
        assert!(doc["paths"]["/api/calculations"].is_object());
    }
}

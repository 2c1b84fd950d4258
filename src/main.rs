//! Alpaca Paper Trading API Server
//!
//! REST API server forwarding trading and market data requests to Alpaca.

use alpaca_paper_api::api::create_router;
use alpaca_paper_api::config::Config;
use alpaca_paper_api::state::AppState;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use alpaca_paper_api::error::ErrorResponse;
use alpaca_paper_api::models::{
    CancelAllResponse, CancelOrderResponse, ClosePositionRequest, ContractType, ExerciseResponse,
    ExerciseStyle, HealthResponse, MultiLegOrderRequest, OptionLeg, OptionOrderRequest, OrderRequest,
    OrderSide, OrderType, PositionIntent, QueryOrderStatus, TimeInForce,
};

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    paths(
        alpaca_paper_api::api::handlers::health_check,
        alpaca_paper_api::api::handlers::get_account,
        alpaca_paper_api::api::handlers::get_clock,
        alpaca_paper_api::api::handlers::submit_order,
        alpaca_paper_api::api::handlers::list_orders,
        alpaca_paper_api::api::handlers::get_order,
        alpaca_paper_api::api::handlers::cancel_order,
        alpaca_paper_api::api::handlers::cancel_all_orders,
        alpaca_paper_api::api::handlers::list_positions,
        alpaca_paper_api::api::handlers::get_position,
        alpaca_paper_api::api::handlers::close_position,
        alpaca_paper_api::api::handlers::get_stock_quote,
        alpaca_paper_api::api::handlers::list_option_contracts,
        alpaca_paper_api::api::handlers::get_option_contract,
        alpaca_paper_api::api::handlers::get_option_chain,
        alpaca_paper_api::api::handlers::get_option_quote,
        alpaca_paper_api::api::handlers::get_option_snapshot,
        alpaca_paper_api::api::handlers::submit_option_order,
        alpaca_paper_api::api::handlers::submit_multi_leg_order,
        alpaca_paper_api::api::handlers::exercise_option,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorResponse,
            OrderRequest,
            OptionOrderRequest,
            OptionLeg,
            MultiLegOrderRequest,
            ClosePositionRequest,
            CancelOrderResponse,
            CancelAllResponse,
            ExerciseResponse,
            OrderSide,
            OrderType,
            TimeInForce,
            PositionIntent,
            QueryOrderStatus,
            ContractType,
            ExerciseStyle,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Account", description = "Trading account and market clock"),
        (name = "Orders", description = "Equity order management"),
        (name = "Positions", description = "Open position management"),
        (name = "Market Data", description = "Stock quotes"),
        (name = "Options", description = "Option contracts, market data and orders"),
    ),
    info(
        title = "Alpaca Paper Trading API",
        version = "0.1.0",
        description = "REST API for trading equities and options on an Alpaca paper account",
        license(name = "MIT"),
        contact(name = "Joaquin Bejar", email = "jb@taunais.com")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before anything reads the environment
    let dotenv = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = dotenv {
        debug!("No .env file loaded: {}", e);
    }

    let config = Config::from_env()?;

    // Create application state
    let state = Arc::new(AppState::from_config(&config)?);

    let host = &config.server.host;
    let port = config.server.port;

    info!("Starting Alpaca Paper Trading API on {}:{}", host, port);
    info!(
        "Swagger UI available at http://{}:{}/swagger-ui/",
        host, port
    );

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the router
    let app = create_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    // Start the server
    let addr = format!("{}:{}", host, port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

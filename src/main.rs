use poem::{listener::TcpListener, Route, Server};
use poem_openapi::OpenApiService;

use biolink_backend::api::{AdminApi, AuthApi, HealthApi, ProfileApi};
use biolink_backend::app_data::AppData;
use biolink_backend::config::init_logging;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    init_logging().expect("Failed to initialize logging");

    let database_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite://biolink.db?mode=rwc".to_string());

    let mut connect_options = ConnectOptions::new(&database_url);
    connect_options
        .connect_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .sqlx_logging(false);

    let db: DatabaseConnection = Database::connect(connect_options)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database: {}", database_url);

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    tracing::info!("Database migrations completed");

    let app_data = AppData::init(db).expect("Failed to initialize application data");

    let auth_api = AuthApi::new(app_data.account_service.clone());
    let profile_api = ProfileApi::new(
        app_data.profile_assembler.clone(),
        app_data.account_service.clone(),
    );
    let admin_api = AdminApi::new(app_data.admin_gate.clone(), app_data.admin_service.clone());

    let api_service = OpenApiService::new(
        (HealthApi, auth_api, profile_api, admin_api),
        "Biolink API",
        "1.0.0",
    )
    .server("http://localhost:3000/api");

    let ui = api_service.swagger_ui();

    let app = Route::new().nest("/api", api_service).nest("/swagger", ui);

    tracing::info!("Starting server on http://0.0.0.0:3000");
    tracing::info!("Swagger UI available at http://localhost:3000/swagger");

    Server::new(TcpListener::bind("0.0.0.0:3000")).run(app).await
}

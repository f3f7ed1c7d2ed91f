use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use internship_match::config::Settings;
use internship_match::core::Matcher;
use internship_match::routes::{self, AppState};
use internship_match::services::{ensure_dataset, Dataset};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    // Initialize logging; RUST_LOG overrides the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if settings.logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting internship recommendation service...");
    info!(
        "Current working directory: {}",
        std::env::current_dir().map(|p| p.display().to_string()).unwrap_or_default()
    );
    info!("Looking for data file at: {}", settings.data.path.display());

    // Resolve the dataset, bootstrapping sample data when allowed
    let data_path = if settings.data.bootstrap_sample {
        ensure_dataset(&settings.data.path, std::path::Path::new(".")).map_err(|e| {
            error!("Failed to provision dataset: {}", e);
            std::io::Error::new(std::io::ErrorKind::Other, e)
        })?
    } else {
        settings.data.path.clone()
    };

    let dataset = Dataset::load(&data_path).map_err(|e| {
        error!("Error loading dataset: {}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e)
    })?;

    if dataset.is_empty() {
        warn!("Dataset at {} has no rows; recommendations will be unavailable", data_path.display());
    }

    // Initialize matcher with configured weights and limits
    let weights = settings.scoring_weights();
    let options = settings.match_options();
    let matcher = Matcher::new(weights, options);

    info!("Matcher initialized with weights: {:?}, options: {:?}", weights, options);

    let app_state = AppState::new(dataset, matcher);

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);
    info!("Recommendations API: http://{}:{}/api/recommendations", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(routes::json_config())
            .app_data(routes::form_config())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}

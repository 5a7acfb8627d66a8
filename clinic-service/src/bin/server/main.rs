use std::sync::Arc;

use auth::Authenticator;
use clinic_service::config::Config;
use clinic_service::domain::animal::service::AnimalService;
use clinic_service::domain::treatment::service::TreatmentService;
use clinic_service::domain::vet::service::VetService;
use clinic_service::inbound::http::router::create_router;
use clinic_service::outbound::database::MongoContext;
use clinic_service::outbound::repositories::MongoAnimalRepository;
use clinic_service::outbound::repositories::MongoTreatmentRepository;
use clinic_service::outbound::repositories::MongoVetRepository;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "clinic_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "clinic-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        database_name = %config.database.name,
        http_port = config.server.http_port,
        token_ttl_minutes = config.jwt.expiration_minutes,
        "Configuration loaded"
    );

    let mongo = MongoContext::init(&config.database.url, &config.database.name).await?;
    tracing::info!(
        database = "mongodb",
        name = %config.database.name,
        "Database connection established"
    );

    mongo.ensure_indexes().await?;
    tracing::info!(database = "mongodb", "Database indexes ensured");

    let authenticator = Arc::new(Authenticator::with_token_ttl(
        config.jwt.secret.as_bytes(),
        chrono::Duration::minutes(config.jwt.expiration_minutes),
    ));

    let vet_repository = Arc::new(MongoVetRepository::new(&mongo));
    let animal_repository = Arc::new(MongoAnimalRepository::new(&mongo));
    let treatment_repository = Arc::new(MongoTreatmentRepository::new(&mongo));

    let vet_service = Arc::new(VetService::new(vet_repository));
    let animal_service = Arc::new(AnimalService::new(animal_repository));
    let treatment_service = Arc::new(TreatmentService::new(treatment_repository));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(
        vet_service,
        animal_service,
        treatment_service,
        authenticator,
    );

    if let Err(e) = axum::serve(http_listener, http_application).await {
        tracing::error!(error = %e, "Server error");
        return Err(e.into());
    }

    tracing::info!("Server exited successfully");
    Ok(())
}

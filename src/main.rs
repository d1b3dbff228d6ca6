use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use servicelink_match::config::Settings;
use servicelink_match::core::InterestMatcher;
use servicelink_match::routes::{self, AppState};
use servicelink_match::services::{FcmClient, ServiceAccount, SupabaseClient, SupabaseTables};
use std::sync::Arc;
use tracing::{info, warn};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&log_level))
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting ServiceLink matching service...");

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    info!("Configuration loaded successfully");

    // Initialize Supabase client when the backend is configured
    let tables = SupabaseTables {
        profiles: settings.tables.profiles,
        push_tokens: settings.tables.push_tokens,
    };

    let service_role_key = settings.supabase.service_role_key.clone();
    let supabase = match (&settings.supabase.url, &settings.supabase.service_role_key) {
        (Some(url), Some(key)) => {
            info!("Supabase client initialized");
            Some(Arc::new(SupabaseClient::new(
                url.clone(),
                key.clone(),
                tables,
            )))
        }
        _ => {
            warn!("Supabase not configured - backend endpoints will report the missing configuration");
            None
        }
    };

    // Initialize FCM client when a service account is configured
    let fcm = match settings.fcm.service_account.as_deref() {
        Some(raw) => match ServiceAccount::from_json(raw) {
            Ok(account) => {
                info!("FCM client initialized for project {}", account.project_id);
                Some(Arc::new(FcmClient::new(account)))
            }
            Err(e) => {
                warn!("Ignoring invalid FCM service account: {}", e);
                None
            }
        },
        None => {
            warn!("FCM service account not configured - push dispatch disabled");
            None
        }
    };

    // Build application state
    let app_state = AppState {
        supabase,
        fcm,
        matcher: InterestMatcher::new(),
        service_role_key,
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(routes::handle_json_payload_error))
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

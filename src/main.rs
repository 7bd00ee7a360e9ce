use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bookshop_genie::frontend::{HttpRecommendationClient, InteractionController, bookshop_page, ids};
use bookshop_genie::google_books::GoogleBooksClient;
use bookshop_genie::infrastructure::AppState;
use bookshop_genie::modules::recommender::Catalog;
use bookshop_genie::{config, server};

/// Value following `flag` on the command line
fn arg_value(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|arg| arg == flag)
        .and_then(|pos| args.get(pos + 1))
        .cloned()
}

/// Walk the page like a visitor would and print what ends up in the results
async fn ask(config: &config::Config, title: String) {
    let client = HttpRecommendationClient::new(config.api_base_url.clone());
    tracing::info!("Asking {} for books like '{}'", client.endpoint(), title);

    let controller = match InteractionController::attach(bookshop_page(), Arc::new(client)) {
        Ok(controller) => controller,
        Err(e) => {
            tracing::error!("Failed to attach page controller: {}", e);
            std::process::exit(1);
        }
    };

    controller.click(ids::OWNER_AVATAR).await;
    controller.click(ids::NEXT_DIALOGUE).await;
    controller.set_input(title);
    controller.click(ids::SUBMIT).await;

    println!("{}", controller.results().inner_html());
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bookshop_genie=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    dotenvy::dotenv().ok();

    let args: Vec<String> = std::env::args().collect();
    let config = config::Config::from_env(arg_value(&args, "--profile"));

    if let Some(title) = arg_value(&args, "--ask") {
        ask(&config, title).await;
        return;
    }

    let catalog = match Catalog::from_path(&config.catalog_path) {
        Ok(catalog) => Arc::new(catalog),
        Err(e) => {
            tracing::error!("Failed to load catalog: {}", e);
            std::process::exit(1);
        }
    };

    let lookup = match GoogleBooksClient::new(config.google_books_url.clone()) {
        Ok(lookup) => lookup,
        Err(e) => {
            tracing::error!("Failed to build Google Books client: {}", e);
            std::process::exit(1);
        }
    };

    let state = AppState::new(catalog, Arc::new(lookup));
    let app = server::build_router(state, &config.cors_allowed_origins);

    if let Err(e) = server::serve(app, config.port).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

use brigade::{api, config::Config, loader};
use std::net::SocketAddr;
use std::path::Path;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::INFO.into()),
        )
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    // Load the three feeds and open the restaurant for the day
    let restaurant = match loader::load_restaurant(
        Path::new(&config.menu_path),
        Path::new(&config.stock_path),
        Path::new(&config.tables_path),
    ) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Failed to load feeds: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!(
        ingredients = restaurant.pantry().len(),
        dishes = restaurant.menu().dish_count(),
        categories = restaurant.menu().categories().len(),
        tables = restaurant.table_capacities().len(),
        "restaurant open for the day"
    );

    // Create router
    let app = api::create_router(api::AppState::new(restaurant));

    // Bind to address
    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    tracing::info!("Server listening on {}", addr);

    // Run server
    if let Err(e) = axum::serve(listener, app).await {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    }
}

use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use route_comparator::config::AppConfig;
use route_comparator::estimate::{
    CachedMapsClient, MapsCacheConfig, MapsClient, MapsConfig, NoEstimator,
};
use route_comparator::store::load_or_sample;
use route_comparator::web::{AppState, create_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;

    // Travel times come from the Maps API when a key is configured
    let maps = match &config.maps_api_key {
        Some(key) => {
            let mut maps_config = MapsConfig::new(key);
            if let Some(url) = &config.maps_base_url {
                maps_config = maps_config.with_base_url(url);
            }
            let client = MapsClient::new(maps_config)?;
            Some(Arc::new(CachedMapsClient::new(
                client,
                &MapsCacheConfig::default(),
            )))
        }
        None => {
            warn!("GOOGLE_MAPS_API_KEY not set; travel times use the fallback formula");
            None
        }
    };

    let store = match &maps {
        Some(maps) => load_or_sample(&config.routes_file, maps.as_ref()).await,
        None => load_or_sample(&config.routes_file, &NoEstimator).await,
    };
    info!(
        routes = store.len(),
        stops = store.all_stops().len(),
        "route store ready"
    );

    let state = AppState::new(store, maps);
    let app = create_router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Route comparator listening on http://{}", config.bind_addr);
    info!("API endpoints:");
    info!("  GET  /health        - Health check");
    info!("  GET  /compare       - Compare routes (?start=&end=)");
    info!("  GET  /directions    - Transit directions (?start=&end=)");
    info!("  GET  /api/stops     - List stops");
    info!("  GET  /api/geocode   - Locate a stop (?stop=)");

    axum::serve(listener, app).await?;
    Ok(())
}

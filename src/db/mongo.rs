use mongodb::{
    bson::doc,
    options::{ClientOptions, ServerApi, ServerApiVersion},
    Client,
};
use std::sync::Arc;
use std::time::Duration;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Builds a pooled client without contacting the server.
pub async fn build_client(uri: &str, timeout: Duration) -> mongodb::error::Result<Client> {
    let mut client_options = ClientOptions::parse(uri).await?;

    client_options.app_name = Some("globetrotter-api".to_string());
    client_options.connect_timeout = Some(timeout);
    client_options.server_selection_timeout = Some(timeout);
    client_options.max_pool_size = Some(10);
    client_options.min_pool_size = Some(1);

    let server_api = ServerApi::builder().version(ServerApiVersion::V1).build();
    client_options.server_api = Some(server_api);

    Client::with_options(client_options)
}

/// Round trip to the server.
pub async fn ping(client: &Client) -> mongodb::error::Result<()> {
    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await
        .map(|_| ())
}

/// Connects and pings once. A failed ping only warns; account routes will
/// report errors until the server is reachable.
pub async fn create_mongo_client(uri: &str) -> mongodb::error::Result<Arc<Client>> {
    log::info!("Connecting to MongoDB");
    let client = build_client(uri, DEFAULT_TIMEOUT).await?;

    match ping(&client).await {
        Ok(()) => log::info!("Connected to MongoDB"),
        Err(e) => log::warn!("MongoDB ping failed, continuing without it: {}", e),
    }

    Ok(Arc::new(client))
}

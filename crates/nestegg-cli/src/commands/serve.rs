//! REST API server command

use std::path::Path;

use anyhow::Result;
use tracing::warn;

use nestegg_server::ServerConfig;

use super::open_db;

pub async fn cmd_serve(
    db_path: &Path,
    host: &str,
    port: u16,
    no_auth: bool,
    api_keys: Vec<String>,
    no_encrypt: bool,
) -> Result<()> {
    let db = open_db(db_path, no_encrypt)?;

    if no_auth {
        warn!("⚠️  Authentication disabled - do not expose to network!");
    } else if api_keys.is_empty() {
        warn!("Authentication enabled but no --api-key provided; all requests will be rejected");
    }

    let config = ServerConfig {
        require_auth: !no_auth,
        api_keys,
        ..Default::default()
    };

    nestegg_server::serve_with_config(db, host, port, config).await
}

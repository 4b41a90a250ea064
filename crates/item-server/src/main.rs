use clap::Parser;
use std::io;

use item_server::logging::init_logging;
use item_server::{run_server, ServerArgs, ServerConfig};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();
    let args = ServerArgs::parse();

    init_logging(args.debug, args.log_level.as_deref());

    if args.debug {
        tracing::debug!("Debug mode enabled");
        tracing::debug!("Server arguments: {:?}", args);
    }

    let config = ServerConfig::from(args);
    if let Err(e) = run_server(config).await {
        tracing::error!("Failed to run item server: {}", e);
        return Err(e);
    }
    Ok(())
}

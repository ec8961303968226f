use std::io::{Error, ErrorKind};

use connect_four::{ApiServer, DataProviderFactory, MemoryProvider, MemoryProviderArgs};
use log::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let args = MemoryProviderArgs::from_env();
    let data_provider = DataProviderFactory::create::<MemoryProvider>(args).map_err(|err| {
        error!("could not create the game: {}", err);
        Error::new(ErrorKind::InvalidInput, err.to_string())
    })?;

    let api = ApiServer::from_env(data_provider);
    info!("Connect four server starting on http://{}", api.get_address());
    api.start().await
}

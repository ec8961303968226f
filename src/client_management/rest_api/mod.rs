use crate::DataProvider;
use actix_files::Files;
use actix_web::{
    dev::Server,
    web::{get, post, Data, ServiceConfig},
    App, HttpServer,
};
use log::info;
use std::{
    io::{Error, ErrorKind},
    net::SocketAddr,
};

mod v1;
use v1::{get_state, get_valid_moves, make_move, reset_game};

/*
Endpoints:
* GET  /api/state        -> DataProvider::get_game_state
* GET  /api/valid-moves  -> DataProvider::get_valid_moves
* POST /api/move         -> DataProvider::drop_piece(body.column)
* POST /api/reset        -> DataProvider::reset
* GET  /                 -> static files, index.html
*/

/// Registers the api routes. The data provider has to be added as app data.
pub fn routes<T: DataProvider + 'static>(config: &mut ServiceConfig) {
    config
        .route("/api/state", get().to(get_state::<T>))
        .route("/api/valid-moves", get().to(get_valid_moves::<T>))
        .route("/api/move", post().to(make_move::<T>))
        .route("/api/reset", post().to(reset_game::<T>));
}

pub struct ApiServer<T: DataProvider> {
    pub port: u16,
    pub host: String,
    pub static_dir: String,
    pub data_provider: T,
}

impl<T: DataProvider + 'static> ApiServer<T> {
    pub const DEFAULT_PORT: u16 = 5000;
    pub const DEFAULT_HOST: &'static str = "127.0.0.1";
    pub const DEFAULT_STATIC_DIR: &'static str = "./static";

    pub fn new(host: String, port: u16, data_provider: T) -> Self {
        Self {
            port,
            host,
            static_dir: Self::DEFAULT_STATIC_DIR.to_string(),
            data_provider,
        }
    }

    // loads environment variables or uses default values if not set
    pub fn from_env(data_provider: T) -> Self {
        let port = std::env::var("API_PORT").unwrap_or_else(|_| Self::DEFAULT_PORT.to_string());
        let host = std::env::var("API_HOST").unwrap_or_else(|_| Self::DEFAULT_HOST.to_string());
        let static_dir =
            std::env::var("STATIC_DIR").unwrap_or_else(|_| Self::DEFAULT_STATIC_DIR.to_string());
        let port = port.parse::<u16>().unwrap_or(Self::DEFAULT_PORT);
        Self {
            port,
            host,
            static_dir,
            data_provider,
        }
    }

    pub fn get_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Binds the server and returns it together with the address it listens
    /// on. Useful with port 0, where the address is only known after binding.
    pub fn bind(&self) -> std::io::Result<(Server, SocketAddr)> {
        let data_provider = self.data_provider.clone();
        let static_dir = self.static_dir.clone();
        let http_server = HttpServer::new(move || {
            App::new()
                .app_data(Data::new(data_provider.clone()))
                .configure(routes::<T>)
                .service(Files::new("/", static_dir.clone()).index_file("index.html"))
        })
        .bind(self.get_address())?;

        let address = http_server
            .addrs()
            .first()
            .copied()
            .ok_or_else(|| Error::new(ErrorKind::AddrNotAvailable, "no address was bound"))?;
        info!("listening on http://{}", address);

        Ok((http_server.run(), address))
    }

    pub async fn start(&self) -> std::io::Result<()> {
        let (server, _) = self.bind()?;
        server.await
    }
}

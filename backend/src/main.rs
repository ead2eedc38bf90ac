mod config;
mod services;

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use actix_files::{Files, NamedFile};
use actix_web::dev::{fn_service, ServiceRequest, ServiceResponse};
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::{error, info, warn};

use crate::config::ServerConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let server = ServerConfig::from_env().map_err(|e| {
        error!("invalid configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;
    let client = server.client_config().map_err(|e| {
        error!("invalid client configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    let static_dir = PathBuf::from(&server.static_dir);
    let index = static_dir.join("index.html");
    if !index.exists() {
        warn!("{} not found; build the frontend with trunk first", index.display());
    }

    let url = server.url();
    if server.open_browser {
        let browser_url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(e) = webbrowser::open(&browser_url) {
                warn!("could not open a browser: {}", e);
            }
        });
    }

    info!("Serving {} at {}", static_dir.display(), url);
    info!("API base URL for the client: {}", client.api_base_url);

    let client = web::Data::new(client);
    HttpServer::new(move || {
        let index = index.clone();
        App::new()
            .app_data(client.clone())
            .service(services::app_config::configure_routes())
            .service(
                Files::new("/", &static_dir)
                    .index_file("index.html")
                    .default_handler(fn_service(move |req: ServiceRequest| {
                        let index = index.clone();
                        async move {
                            // Client-side routes all load the application shell.
                            let (req, _) = req.into_parts();
                            let file = NamedFile::open_async(index).await?;
                            let res = file.into_response(&req);
                            Ok(ServiceResponse::new(req, res))
                        }
                    })),
            )
    })
    .bind((server.host.as_str(), server.port))?
    .run()
    .await
}

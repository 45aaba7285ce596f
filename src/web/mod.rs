mod errors;
mod form;
mod render;
mod routes;
#[cfg(test)]
mod tests;

use std::sync::Arc;

use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use tracing::info;

use crate::config::Settings;
use crate::storage::{SalesFile, SalesSource};

use routes::configure;

/// Starts the order filter HTTP server and runs it until shutdown.
pub async fn start_server(settings: &Settings) -> std::io::Result<()> {
    let sales_file = SalesFile::new(&settings.dataset_path);

    info!("Serving orders from [{}] on http://{}:{}/", sales_file.path().display(), settings.host, settings.port);

    let sales: Arc<dyn SalesSource> = Arc::new(sales_file);
    let sales = web::Data::from(sales);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(sales.clone())
            .configure(configure)
    })
    .bind((settings.host.as_str(), settings.port))?
    .run()
    .await
}

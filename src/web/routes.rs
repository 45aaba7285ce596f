use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};
use tokio::task::spawn_blocking;
use tracing::{error, warn};

use crate::engine::OrderAggregator;
use crate::storage::SalesSource;
use crate::web::errors::AppError;
use crate::web::form::OrderForm;
use crate::web::render;

pub fn configure(config: &mut web::ServiceConfig) {
    config.service(
        web::resource("/")
            .route(web::get().to(show_form))
            .route(web::post().to(filter_orders))
    );
}

async fn show_form() -> Result<HttpResponse, AppError> {
    Ok(html(render::page(None, &[])?))
}

async fn filter_orders(sales: web::Data<dyn SalesSource>, form: web::Form<OrderForm>) -> Result<HttpResponse, AppError> {
    let query = form.decode()
        .inspect_err(|error| warn!("Rejected order filter request: {error}"))?;

    let sales = sales.into_inner();

    //NOTE: Reading the CSV is blocking file IO, keep it off the async workers
    let orders = spawn_blocking(move || {
        let line_items = sales.load()?;
        OrderAggregator::aggregate(&line_items, &query)
    })
    .await?
    .inspect_err(|error| error!("Order filter request failed: {error}"))?;

    Ok(html(render::page(Some(&query), &orders)?))
}

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body)
}

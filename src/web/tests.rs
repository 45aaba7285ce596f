use super::errors::AppError;
use super::form::OrderForm;
use super::routes::configure;

use std::str::FromStr;
use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use actix_web::{web, App, ResponseError};
use anyhow::{anyhow, Result};
use rust_decimal::Decimal;

use crate::engine::DataError;
use crate::models::{InputError, LineItem};
use crate::storage::{SalesFile, SalesSource};
use crate::types::OrderId;

struct MemorySales(Vec<LineItem>);

impl SalesSource for MemorySales {
    fn load(&self) -> Result<Vec<LineItem>, DataError> {
        Ok(self.0.clone())
    }
}

fn sample_sales() -> Result<MemorySales> {
    Ok(MemorySales(vec![
        LineItem::new(OrderId::new(1), Decimal::from(10), 2, Decimal::ZERO),
        LineItem::new(OrderId::new(1), Decimal::from(5), 1, Decimal::from_str("0.2")?),
        LineItem::new(OrderId::new(2), Decimal::from(100), 1, Decimal::ZERO)
    ]))
}

fn create_app_data(sales: impl SalesSource) -> web::Data<dyn SalesSource> {
    let sales: Arc<dyn SalesSource> = Arc::new(sales);
    web::Data::from(sales)
}

async fn post_form(sales: impl SalesSource, fields: &[(&str, &str)]) -> Result<(StatusCode, String)> {
    let app = actix_test::init_service(App::new().app_data(create_app_data(sales)).configure(configure)).await;
    let request = actix_test::TestRequest::post().uri("/").set_form(fields).to_request();
    let response = actix_test::call_service(&app, request).await;
    let status = response.status();
    let body = actix_test::read_body(response).await;

    Ok((status, String::from_utf8(body.to_vec())?))
}

#[actix_web::test]
async fn test_get_renders_form_without_results() -> Result<()> {
    let app = actix_test::init_service(App::new().app_data(create_app_data(sample_sales()?)).configure(configure)).await;
    let request = actix_test::TestRequest::get().uri("/").to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = String::from_utf8(actix_test::read_body(response).await.to_vec())?;

    assert!(body.contains("name=\"min_value\""));
    assert!(body.contains("name=\"max_value\""));
    assert!(body.contains("<option value=\"asc\" selected>Ascending</option>"));
    assert!(!body.contains("<table"));

    Ok(())
}

#[actix_web::test]
async fn test_post_renders_matching_orders_ascending() -> Result<()> {
    let (status, body) = post_form(sample_sales()?, &[("min_value", "20"), ("max_value", "50"), ("sort_type", "asc")]).await?;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<th>OrderID</th><th>Sum</th>"));
    assert!(body.contains("<tr><td>1</td><td>24.00</td></tr>"));
    assert!(!body.contains("<tr><td>2</td>"));
    assert!(body.contains("value=\"20\""));
    assert!(body.contains("value=\"50\""));

    Ok(())
}

#[actix_web::test]
async fn test_post_renders_rows_in_descending_order() -> Result<()> {
    let (status, body) = post_form(sample_sales()?, &[("min_value", "0"), ("max_value", "200"), ("sort_type", "desc")]).await?;

    assert_eq!(status, StatusCode::OK);

    let first = body.find("<tr><td>2</td><td>100.00</td></tr>").ok_or_else(|| anyhow!("order 2 missing from table"))?;
    let second = body.find("<tr><td>1</td><td>24.00</td></tr>").ok_or_else(|| anyhow!("order 1 missing from table"))?;

    assert!(first < second);
    assert!(body.contains("<option value=\"desc\" selected>Descending</option>"));

    Ok(())
}

#[actix_web::test]
async fn test_post_with_no_matches_renders_header_only() -> Result<()> {
    let (status, body) = post_form(sample_sales()?, &[("min_value", "500"), ("max_value", "100"), ("sort_type", "asc")]).await?;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<th>OrderID</th><th>Sum</th>"));
    assert!(!body.contains("<tr><td>"));

    Ok(())
}

#[actix_web::test]
async fn test_post_with_malformed_bound_is_a_bad_request() -> Result<()> {
    let (status, body) = post_form(sample_sales()?, &[("min_value", "twenty"), ("max_value", "50"), ("sort_type", "asc")]).await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("min_value"));

    Ok(())
}

#[actix_web::test]
async fn test_post_with_bound_beyond_decimal_range_is_a_bad_request() -> Result<()> {
    let (status, body) = post_form(sample_sales()?, &[("min_value", "0"), ("max_value", "1e30"), ("sort_type", "asc")]).await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("outside the supported range"));

    Ok(())
}

#[actix_web::test]
async fn test_post_with_unknown_direction_is_a_bad_request() -> Result<()> {
    let (status, body) = post_form(sample_sales()?, &[("min_value", "0"), ("max_value", "50"), ("sort_type", "random")]).await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("random"));

    Ok(())
}

#[actix_web::test]
async fn test_post_with_missing_field_is_a_bad_request() -> Result<()> {
    let (status, _) = post_form(sample_sales()?, &[("min_value", "0"), ("max_value", "50")]).await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);

    Ok(())
}

#[actix_web::test]
async fn test_post_with_unreadable_sales_data_is_a_server_error() -> Result<()> {
    let sales = SalesFile::new("missing_sales_transactions.csv");
    let (status, body) = post_form(sales, &[("min_value", "0"), ("max_value", "50"), ("sort_type", "asc")]).await?;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("missing_sales_transactions.csv"));

    Ok(())
}

#[test]
fn test_order_form_defaults_missing_fields_to_empty() {
    let form = OrderForm {
        min_value: "1".to_string(),
        max_value: "2".to_string(),
        ..OrderForm::default()
    };

    assert_eq!(form.decode(), Err(InputError::InvalidSortDirection(String::new())));
}

#[test]
fn test_app_error_maps_to_status_codes() {
    let input_error = AppError::from(InputError::InvalidSortDirection("up".to_string()));
    let data_error = AppError::from(DataError::Overflow { order_id: OrderId::new(1) });

    assert_eq!(input_error.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(data_error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}

use actix_web::{HttpResponse, Responder};
use serde::Serialize;

pub const SERVICE_TITLE: &str = "Item Name Extractor";
pub const SERVICE_DESCRIPTION: &str =
    "Extracts a concise product type from Spanish product descriptions.";

#[derive(Serialize)]
struct InfoResponse {
    title: &'static str,
    description: &'static str,
    version: &'static str,
}

pub async fn handler() -> impl Responder {
    HttpResponse::Ok().json(InfoResponse {
        title: SERVICE_TITLE,
        description: SERVICE_DESCRIPTION,
        version: env!("CARGO_PKG_VERSION"),
    })
}

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::state::AppState;

/// Accepts camelCase fields, plus the snake_case spelling of earlier clients.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRequest {
    pub text: String,
    #[serde(default, alias = "max_tokens")]
    pub max_tokens: Option<i64>,
    #[serde(default, alias = "use_lemmatization")]
    pub use_lemmatization: bool,
    #[serde(default, alias = "use_stemming")]
    pub use_stemming: bool,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemNameResponse {
    pub item_name: String,
}

pub async fn handler(
    state: web::Data<AppState>,
    req: web::Json<ItemRequest>,
) -> Result<HttpResponse> {
    let request = req.into_inner();
    let config = state.selection_config(
        request.max_tokens,
        request.use_lemmatization,
        request.use_stemming,
    );

    let item_name = state.extractor.extract(&request.text, &config).map_err(|e| {
        tracing::warn!("Extraction failed: {}", e);
        e
    })?;

    tracing::debug!(
        max_tokens = config.max_tokens,
        mode = ?config.representation_mode,
        "Extracted item name '{}'",
        item_name
    );

    Ok(HttpResponse::Ok().json(ItemNameResponse {
        item_name: item_name.into_string(),
    }))
}

use actix_web::http::header::ContentType;
use actix_web::{web, HttpRequest, HttpResponse};
use log::debug;
use std::sync::Arc;

use crate::models::AppState;
use crate::utils::parse_query_string;

/// Handler for config rendering
///
/// The path is ignored, only the query string is read.
pub async fn sub_handler(req: HttpRequest, app_state: web::Data<Arc<AppState>>) -> HttpResponse {
    let params = parse_query_string(req.query_string());

    match app_state.renderer.render(&params) {
        Ok(document) => HttpResponse::Ok()
            .content_type(ContentType::plaintext())
            .body(document.into_string()),
        Err(e) => {
            debug!("Rejected request: {}", e);
            HttpResponse::BadRequest()
                .content_type(ContentType::plaintext())
                .body(e.to_response_body())
        }
    }
}

/// Register the API endpoints with Actix Web
pub fn config(cfg: &mut web::ServiceConfig) {
    // any path, GET only; other methods get the resource's 405
    cfg.service(web::resource("/{tail:.*}").route(web::get().to(sub_handler)));
}

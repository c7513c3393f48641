//! HTTP routes
//!
//! Handlers parse the path and body, call [crate::Commands], translate the
//! result and serialize it. Every failure body is `{"message": "..."}`.

use actix_web::{
    error::{InternalError, JsonPayloadError, PathError},
    web::{JsonConfig, PathConfig, ServiceConfig},
    HttpRequest, HttpResponse,
};
use log::error;
use serde_json::json;

pub mod devices;
pub mod groups;
pub mod health;

/// Register every route, plus the body and path error handlers
pub fn configure(cfg: &mut ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(path_config())
        .service(health::health)
        .service(groups::list)
        .service(groups::read)
        .service(groups::device_ids)
        .service(groups::devices)
        .service(devices::read)
        .service(devices::update_color)
        .service(devices::update_rgb)
        .service(devices::update_dimmer)
        .service(devices::update_power)
        .service(devices::update_state)
        .service(devices::update_position);
}

fn bad_request(message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(json!({ "message": message }))
}

/// Malformed JSON bodies become a 400 with the usual envelope
pub fn json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
        error!("error processing request body: {}", err);
        let resp = bad_request(err.to_string());
        InternalError::from_response(err, resp).into()
    })
}

/// Non numeric ids become a 400 with the usual envelope
pub fn path_config() -> PathConfig {
    PathConfig::default().error_handler(|err: PathError, _req: &HttpRequest| {
        let resp = bad_request(err.to_string());
        InternalError::from_response(err, resp).into()
    })
}

use crate::utils::origins::OriginAllowlist;
use actix_cors::Cors;
use actix_web::http::header::{self};
use log::warn;
use std::sync::Arc;

pub fn setup_cors(allowlist: Arc<OriginAllowlist>, max_age: usize) -> Cors {
    Cors::default()
        .allowed_origin_fn(move |origin, _req_head| match origin.to_str() {
            Ok(origin_str) => {
                let allowed = allowlist.is_allowed(origin_str);
                if !allowed {
                    warn!("CORS blocked: {} is not in the allow-list", origin_str);
                }
                allowed
            }
            Err(_) => {
                warn!("CORS blocked: Missing or invalid origin");
                false
            }
        })
        .allowed_methods(vec!["GET", "POST", "PUT", "PATCH", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::AUTHORIZATION, header::ACCEPT])
        .allowed_header(header::CONTENT_TYPE)
        .supports_credentials()
        .max_age(max_age)
}

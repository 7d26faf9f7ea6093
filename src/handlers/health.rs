use crate::utils::origins::OriginAllowlist;
use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use serde_json::json;

pub async fn health(allowlist: web::Data<OriginAllowlist>) -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "allowed_origins": allowlist.len(),
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn reports_allowlist_size() {
        let allowlist = OriginAllowlist::from_config(Some("glotrade.online,localhost:3000"));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(allowlist))
                .route("/health", web::get().to(health)),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "ok");
        assert_eq!(body["allowed_origins"], 4);
        assert!(body["timestamp"].is_string());
    }
}

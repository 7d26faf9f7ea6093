use crate::utils::origins::{OriginAllowlist, OriginMatch};
use actix_web::http::header::ORIGIN;
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use log::info;
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct CheckQuery {
    origin: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct CheckResult {
    pub origin: Option<String>,
    pub allowed: bool,
    /// True when the match only succeeded after dropping a trailing slash.
    pub normalized: bool,
}

/// Reports how the allow-list judges an origin. The `origin` query parameter
/// wins over the request's own `Origin` header.
pub async fn check_origin(
    req: HttpRequest,
    allowlist: web::Data<OriginAllowlist>,
    query: web::Query<CheckQuery>,
) -> impl Responder {
    let origin = query.into_inner().origin.or_else(|| {
        req.headers()
            .get(ORIGIN)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    });

    let outcome = origin
        .as_deref()
        .map(|o| allowlist.check(o))
        .unwrap_or(OriginMatch::Denied);

    info!("Origin check: {:?} -> {:?}", origin, outcome);

    HttpResponse::Ok().json(CheckResult {
        origin,
        allowed: outcome.is_allowed(),
        normalized: outcome == OriginMatch::TrailingSlash,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use pretty_assertions::assert_eq;

    macro_rules! check_app {
        ($raw:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(OriginAllowlist::from_config($raw)))
                    .route("/cors/check", web::get().to(check_origin)),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn query_origin_is_checked() {
        let app = check_app!(Some("glotrade-ecom-web.vercel.app"));

        let req = test::TestRequest::get()
            .uri("/cors/check?origin=https%3A%2F%2Fglotrade-ecom-web.vercel.app%2F")
            .to_request();
        let result: CheckResult = test::call_and_read_body_json(&app, req).await;

        assert_eq!(
            result,
            CheckResult {
                origin: Some("https://glotrade-ecom-web.vercel.app/".to_string()),
                allowed: true,
                normalized: true,
            }
        );
    }

    #[actix_web::test]
    async fn falls_back_to_origin_header() {
        let app = check_app!(Some("localhost:3000"));

        let req = test::TestRequest::get()
            .uri("/cors/check")
            .insert_header((ORIGIN, "https://localhost:3000"))
            .to_request();
        let result: CheckResult = test::call_and_read_body_json(&app, req).await;

        assert!(result.allowed);
        assert!(!result.normalized);
    }

    #[actix_web::test]
    async fn missing_origin_is_denied() {
        let app = check_app!(None);

        let req = test::TestRequest::get().uri("/cors/check").to_request();
        let result: CheckResult = test::call_and_read_body_json(&app, req).await;

        assert_eq!(
            result,
            CheckResult {
                origin: None,
                allowed: false,
                normalized: false,
            }
        );
    }
}

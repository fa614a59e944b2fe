use actix_web::{web, HttpResponse, Result};
use chrono::Utc;

use crate::handlers::AppState;
use crate::models::{format_timestamp, HealthStatus};

/// 健康检查，不访问上游
pub async fn health_check(state: web::Data<AppState>) -> Result<HttpResponse> {
    let response = HealthStatus::ok(format_timestamp(Utc::now(), &state.timezone));
    Ok(HttpResponse::Ok().json(response))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UpstreamConfig;
    use crate::services::CoinGeckoClient;
    use actix_web::{http::StatusCode, test, App};

    #[actix_web::test]
    async fn test_health_check() {
        // 上游地址不可达也不影响健康检查
        let client = CoinGeckoClient::new(&UpstreamConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            ..UpstreamConfig::default()
        })
        .unwrap();
        let state = web::Data::new(AppState::new(client, chrono_tz::UTC));

        let app = test::init_service(App::new().app_data(state).configure(config)).await;
        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: HealthStatus = test::read_body_json(resp).await;
        assert_eq!(body.status, "ok");
        assert!(body.timestamp.ends_with('Z'));
    }
}

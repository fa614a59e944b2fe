//! TON 价格接口处理器
//!
//! ## API 列表
//! - GET / - 获取 TON 实时价格
//! - GET /api/ton/price - 同上（别名）

use actix_web::{web, HttpResponse, Result};
use chrono::Utc;

use crate::handlers::AppState;
use crate::models::{format_timestamp, ErrorResponse, TonResponse};

/// 获取 TON 实时价格
///
/// 上游任何失败均返回 500，错误信息附带原因
pub async fn get_ton_price(state: web::Data<AppState>) -> Result<HttpResponse> {
    match state.coingecko.fetch_ton_price().await {
        Ok(price) => {
            let last_updated = format_timestamp(Utc::now(), &state.timezone);
            let response = TonResponse::new(price, last_updated);
            Ok(HttpResponse::Ok().json(response))
        }
        Err(e) => {
            log::error!("获取 TON 价格失败: {}", e);
            let response = ErrorResponse::new(format!("Failed to fetch TON price: {}", e));
            Ok(HttpResponse::InternalServerError().json(response))
        }
    }
}

/// 配置 TON 相关路由
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(get_ton_price))
        .route("/api/ton/price", web::get().to(get_ton_price));
}

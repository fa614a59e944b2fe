pub mod ton;
pub mod health;

use actix_web::web;
use chrono_tz::Tz;

use crate::services::CoinGeckoClient;

/// 各请求共享的只读状态
pub struct AppState {
    /// 上游行情客户端
    pub coingecko: CoinGeckoClient,
    /// 响应时间戳使用的时区
    pub timezone: Tz,
}

impl AppState {
    pub fn new(coingecko: CoinGeckoClient, timezone: Tz) -> Self {
        Self { coingecko, timezone }
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::config)
        .configure(ton::config);
}

//! TON 价格后端服务
//!
//! 代理 CoinGecko 的 TON 行情数据，转换为简化的 JSON 格式

mod config;     // 配置加载
mod handlers;   // HTTP 请求处理器
mod models;     // 数据模型定义
mod services;   // 上游数据服务

use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;
use std::io;

use crate::config::AppConfig;
use crate::handlers::AppState;
use crate::services::CoinGeckoClient;

/// 应用程序入口
///
/// 启动 HTTP 服务器，默认监听 0.0.0.0:8000
#[actix_web::main]
async fn main() -> io::Result<()> {
    let (config, source) = AppConfig::load().map_err(|e| io::Error::other(e.to_string()))?;

    // 初始化日志系统，RUST_LOG 优先于配置文件
    env_logger::init_from_env(Env::default().default_filter_or(config.log.level.as_str()));

    match source {
        Some(path) => log::info!("从 {} 加载配置成功", path),
        None => log::info!("未找到配置文件，使用默认配置"),
    }

    let timezone = config.timezone().map_err(|e| io::Error::other(e.to_string()))?;
    let coingecko = CoinGeckoClient::new(&config.upstream)
        .map_err(|e| io::Error::other(format!("创建 HTTP 客户端失败: {}", e)))?;

    let bind_addr = config.bind_addr();
    log::info!("🚀 服务启动于 http://{}", bind_addr);
    log::info!("📊 TON 价格接口: http://{}/api/ton/price", bind_addr);
    log::info!("上游地址: {}", coingecko.endpoint());

    let state = web::Data::new(AppState::new(coingecko, timezone));

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())  // 添加请求日志中间件
            .app_data(state.clone())
            .configure(handlers::config)  // 配置路由
    });

    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(bind_addr.as_str())?.run().await
}

//! 业务逻辑服务模块
//!
//! 封装上游数据获取和处理逻辑

pub mod coingecko;  // CoinGecko 行情服务

pub use coingecko::CoinGeckoClient;

//! CoinGecko 行情接口
//!
//! 对接 https://api.coingecko.com/api/v3/simple/price ，获取 TON 的美元报价、
//! 24小时涨跌幅、市值和成交额

use anyhow::{anyhow, Result};
use reqwest::{Client, StatusCode};
use serde_json::{Map, Value};
use std::time::Duration;
use url::Url;

use crate::config::UpstreamConfig;
use crate::models::{TonPrice, TON_ID};

/// 简单报价接口路径
const SIMPLE_PRICE_PATH: &str = "simple/price";
/// 计价货币
const VS_CURRENCY: &str = "usd";

/// CoinGecko 客户端
///
/// 持有一个复用的 HTTP 客户端，超时在构建时设置
#[derive(Debug, Clone)]
pub struct CoinGeckoClient {
    client: Client,
    endpoint: Url,
}

impl CoinGeckoClient {
    /// 按配置创建客户端
    pub fn new(config: &UpstreamConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .user_agent(concat!("ton-price-backend/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            endpoint: build_endpoint(&config.base_url)?,
        })
    }

    /// 完整请求地址（含查询参数）
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// 获取 TON 最新价格
    ///
    /// 上游状态码非 200、响应不是 JSON 对象、或缺少 TON 数据时返回错误；
    /// 单个数值字段缺失不视为错误，按 0 处理
    pub async fn fetch_ton_price(&self) -> Result<TonPrice> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| anyhow!("HTTP request failed: {}", e))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(anyhow!("API returned status: {}", status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| anyhow!("JSON decode failed: {}", e))?;

        let price = parse_simple_price(&body)?;
        log::debug!("CoinGecko 返回 TON 价格: {:?}", price);
        Ok(price)
    }
}

/// 拼接 simple/price 地址和固定查询参数
fn build_endpoint(base_url: &str) -> Result<Url> {
    let base = format!("{}/", base_url.trim_end_matches('/'));
    let mut url = Url::parse(&base)
        .and_then(|u| u.join(SIMPLE_PRICE_PATH))
        .map_err(|e| anyhow!("无效的上游地址 {}: {}", base_url, e))?;

    url.query_pairs_mut()
        .append_pair("ids", TON_ID)
        .append_pair("vs_currencies", VS_CURRENCY)
        .append_pair("include_24hr_change", "true")
        .append_pair("include_market_cap", "true")
        .append_pair("include_24hr_vol", "true");

    Ok(url)
}

/// 解析上游响应
///
/// 格式: {"the-open-network": {"usd": 5.4, "usd_24h_change": -1.2, "usd_market_cap": ..., "usd_24h_vol": ...}}
///
/// 只读取第一个 JSON 值，其后的内容忽略；顶层为 null 时按空对象处理
fn parse_simple_price(body: &[u8]) -> Result<TonPrice> {
    let mut values =
        serde_json::Deserializer::from_slice(body).into_iter::<Option<Map<String, Value>>>();

    let mut payload = match values.next() {
        Some(value) => value
            .map_err(|e| anyhow!("JSON decode failed: {}", e))?
            .unwrap_or_default(),
        None => return Err(anyhow!("JSON decode failed: empty response body")),
    };

    match payload.remove(TON_ID) {
        Some(quote @ Value::Object(_)) => {
            serde_json::from_value(quote).map_err(|e| anyhow!("JSON decode failed: {}", e))
        }
        _ => Err(anyhow!("TON data not found in response")),
    }
}

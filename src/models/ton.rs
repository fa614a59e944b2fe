//! TON 行情数据模型
//!
//! 定义上游 CoinGecko 报价和对外响应的数据结构

use serde::{Deserialize, Deserializer, Serialize};

/// CoinGecko 中 TON 的资产 ID，同时作为上游响应的顶层键
pub const TON_ID: &str = "the-open-network";
/// 资产名称
pub const TON_NAME: &str = "The Open Network";
/// 资产代码
pub const TON_SYMBOL: &str = "TON";

/// TON 价格（内部使用）
///
/// 直接从上游报价对象解码，字段缺失、为 null 或非数字时取 0
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct TonPrice {
    /// 美元价格
    #[serde(rename = "usd", default, deserialize_with = "number_or_zero")]
    pub price_usd: f64,
    /// 24小时涨跌幅（百分比）
    #[serde(rename = "usd_24h_change", default, deserialize_with = "number_or_zero")]
    pub price_change_percent_24h: f64,
    /// 美元市值
    #[serde(rename = "usd_market_cap", default, deserialize_with = "number_or_zero")]
    pub market_cap_usd: f64,
    /// 24小时成交额（美元）
    #[serde(rename = "usd_24h_vol", default, deserialize_with = "number_or_zero")]
    pub volume_24h_usd: f64,
}

/// 非数字一律视为 0，不报错
fn number_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_f64().unwrap_or(0.0))
}

/// TON 价格接口响应
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TonResponse {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub price_usd: f64,
    pub price_change_percent_24h: f64,
    pub market_cap_usd: f64,
    pub volume_24h_usd: f64,
    /// 更新时间（RFC 3339）
    pub last_updated: String,
}

impl TonResponse {
    /// 由价格和时间戳组装响应
    pub fn new(price: TonPrice, last_updated: String) -> Self {
        Self {
            id: TON_ID.to_string(),
            name: TON_NAME.to_string(),
            symbol: TON_SYMBOL.to_string(),
            price_usd: price.price_usd,
            price_change_percent_24h: price.price_change_percent_24h,
            market_cap_usd: price.market_cap_usd,
            volume_24h_usd: price.volume_24h_usd,
            last_updated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_full_quote() {
        let quote = json!({
            "usd": 5.4321,
            "usd_24h_change": -1.2345678901234567,
            "usd_market_cap": 13_456_789_012.5,
            "usd_24h_vol": 234_567_890.12
        });

        let price: TonPrice = serde_json::from_value(quote).unwrap();

        assert_eq!(price.price_usd, 5.4321);
        assert_eq!(price.price_change_percent_24h, -1.2345678901234567);
        assert_eq!(price.market_cap_usd, 13_456_789_012.5);
        assert_eq!(price.volume_24h_usd, 234_567_890.12);
    }

    /// 缺失或类型错误的字段取 0
    #[test]
    fn test_decode_lenient_fields() {
        let quote = json!({
            "usd": "5.43",
            "usd_24h_change": null,
            "usd_market_cap": 1000
        });

        let price: TonPrice = serde_json::from_value(quote).unwrap();

        assert_eq!(price.price_usd, 0.0);
        assert_eq!(price.price_change_percent_24h, 0.0);
        assert_eq!(price.market_cap_usd, 1000.0);
        assert_eq!(price.volume_24h_usd, 0.0);
    }

    #[test]
    fn test_response_field_order() {
        let price = TonPrice {
            price_usd: 2.5,
            price_change_percent_24h: 0.5,
            market_cap_usd: 100.0,
            volume_24h_usd: 10.0,
        };
        let response = TonResponse::new(price, "2025-01-01T00:00:00Z".to_string());

        let body = serde_json::to_string(&response).unwrap();
        assert_eq!(
            body,
            r#"{"id":"the-open-network","name":"The Open Network","symbol":"TON","price_usd":2.5,"price_change_percent_24h":0.5,"market_cap_usd":100.0,"volume_24h_usd":10.0,"last_updated":"2025-01-01T00:00:00Z"}"#
        );
    }
}

//! 通用 API 响应模型

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// 将时间格式化为 RFC 3339（秒级精度，UTC 偏移写作 Z）
pub fn format_timestamp<Z: TimeZone>(now: DateTime<Utc>, tz: &Z) -> String
where
    Z::Offset: std::fmt::Display,
{
    now.with_timezone(tz).to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// 错误响应
///
/// 与 echo 框架的 HTTP 错误格式一致：{"message": "..."}
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// 健康检查响应
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
}

impl HealthStatus {
    pub fn ok(timestamp: String) -> Self {
        Self {
            status: "ok".to_string(),
            timestamp,
        }
    }
}

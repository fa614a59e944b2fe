//! 配置模块
//!
//! 支持从 JSON 文件加载系统配置，所有字段均有默认值

use anyhow::{anyhow, Result};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 候选配置文件路径，按顺序查找
const CONFIG_PATHS: [&str; 2] = ["config.json", "config/config.json"];

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,
    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
    /// 工作线程数（0 表示使用 CPU 核心数）
    #[serde(default)]
    pub workers: usize,
}

/// 上游 CoinGecko 接口配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// API 根地址
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// 请求超时时间（秒）
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// 连接超时时间（秒）
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

/// 响应格式配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseConfig {
    /// last_updated 使用的时区（IANA 名称）
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// 日志级别: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// 应用配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub response: ResponseConfig,
    #[serde(default)]
    pub log: LogConfig,
}

// 默认值函数
fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8000 }
fn default_base_url() -> String { "https://api.coingecko.com/api/v3".to_string() }
fn default_timeout() -> u64 { 10 }
fn default_connect_timeout() -> u64 { 10 }
fn default_timezone() -> String { "UTC".to_string() }
fn default_log_level() -> String { "info".to_string() }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: 0,
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            connect_timeout_secs: default_connect_timeout(),
        }
    }
}

impl Default for ResponseConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// 从 JSON 文件加载配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// 加载配置
    ///
    /// 返回配置及其来源文件；找不到配置文件时使用默认值。
    /// 日志系统依赖此配置初始化，所以这里不打日志，由调用方记录来源。
    pub fn load() -> Result<(Self, Option<&'static str>)> {
        Self::load_from(&CONFIG_PATHS)
    }

    /// 按顺序查找候选路径，使用第一个存在的文件
    pub fn load_from<'a>(paths: &[&'a str]) -> Result<(Self, Option<&'a str>)> {
        for &path in paths {
            if Path::new(path).exists() {
                let config = Self::from_file(path)
                    .map_err(|e| anyhow!("加载配置文件 {} 失败: {}", path, e))?;
                config.validate()?;
                return Ok((config, Some(path)));
            }
        }

        Ok((Self::default(), None))
    }

    /// 校验取值范围
    pub fn validate(&self) -> Result<()> {
        if self.upstream.timeout_secs == 0 {
            return Err(anyhow!("upstream.timeout_secs 必须大于 0"));
        }
        if self.upstream.connect_timeout_secs == 0 {
            return Err(anyhow!("upstream.connect_timeout_secs 必须大于 0"));
        }
        Ok(())
    }

    /// 获取服务器绑定地址
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// 解析响应时区
    pub fn timezone(&self) -> Result<Tz> {
        self.response
            .timezone
            .parse::<Tz>()
            .map_err(|e| anyhow!("无效的时区 {}: {}", self.response.timezone, e))
    }
}

use serde::Deserialize;
use std::fmt;

/// 待探测的镜像地址
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct MirrorTarget {
    pub url: String, // 例如: "https://api.themoviedb.org/3/configuration"
}

impl MirrorTarget {
    #[cfg(test)]
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
        }
    }
}

/// 单次探测结果
#[derive(Debug, Clone)]
pub struct ProbeResult {
    pub url: String,
    pub status: Option<u16>, // 传输层失败时为 None
    pub duration_ms: f64,
    pub success: bool,
    pub error: Option<String>,
}

impl ProbeResult {
    /// 收到响应 (任何状态码都算响应)
    pub fn responded(url: &str, status: u16, duration_ms: f64) -> Self {
        Self {
            url: url.to_string(),
            status: Some(status),
            duration_ms,
            success: status == 200,
            error: None,
        }
    }

    /// 请求未能得到响应 (超时、连接失败、DNS 解析失败等)
    pub fn failed(url: &str, duration_ms: f64, error: String) -> Self {
        let error = if error.trim().is_empty() {
            "unknown error".to_string()
        } else {
            error
        };

        Self {
            url: url.to_string(),
            status: None,
            duration_ms,
            success: false,
            error: Some(error),
        }
    }
}

impl fmt::Display for ProbeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "[{}] {:.0}ms - {}", status, self.duration_ms, self.url),
            None => write!(
                f,
                "[FAIL] {} - {}",
                self.url,
                self.error.as_deref().unwrap_or("unknown error")
            ),
        }
    }
}

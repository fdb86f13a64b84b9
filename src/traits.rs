use crate::error::Result;
use async_trait::async_trait;

/// Prober: 执行单次探测背后的 HTTP 请求
#[async_trait]
pub trait Prober: Sync + Send {
    /// 对 `url` 发起一次 GET, 返回响应状态码
    /// 任何状态码都返回 Ok; 只有无法得到完整响应时
    /// (超时、连接失败、DNS、TLS、读取响应体失败) 才返回 Err
    async fn fetch_status(&self, url: &str) -> Result<u16>;
}

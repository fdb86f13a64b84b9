use crate::config::PROBE_TIMEOUT;
use crate::error::Result;
use crate::traits::Prober;
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use std::time::Duration;

/// Probes mirrors over HTTP(S) with reqwest
pub struct HttpProber {
    client: Client,
}

impl HttpProber {
    pub fn new() -> Result<Self> {
        Self::with_timeout(PROBE_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        Self::from_builder(Client::builder(), timeout)
    }

    /// Local test servers must not be routed through a proxy from the environment
    #[cfg(test)]
    pub fn local(timeout: Duration) -> Result<Self> {
        Self::from_builder(Client::builder().no_proxy(), timeout)
    }

    fn from_builder(builder: ClientBuilder, timeout: Duration) -> Result<Self> {
        // No idle pool: every probe opens and closes its own connection
        let client = builder
            .timeout(timeout)
            .pool_max_idle_per_host(0)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Prober for HttpProber {
    async fn fetch_status(&self, url: &str) -> Result<u16> {
        let resp = self.client.get(url).send().await?;
        let status = resp.status().as_u16();

        // Drain the body so latency covers the full download
        resp.bytes().await?;

        Ok(status)
    }
}

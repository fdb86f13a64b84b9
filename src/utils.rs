use crate::config::BANNER;
use crate::error::{describe, Result};
use crate::traits::Prober;
use crate::types::{MirrorTarget, ProbeResult};
use std::io::Write;
use std::time::Instant;
use tracing::{debug, info};

/// Probe one mirror.
///
/// Transport failures are folded into the result and never returned;
/// a non-200 answer is a response like any other, just not a success.
pub async fn check_mirror<P: Prober + ?Sized>(prober: &P, url: &str) -> ProbeResult {
    let start = Instant::now();
    let outcome = prober.fetch_status(url).await;
    let duration_ms = start.elapsed().as_secs_f64() * 1000.0;

    match outcome {
        Ok(status) => {
            debug!(url, status, duration_ms, "mirror responded");
            ProbeResult::responded(url, status, duration_ms)
        }
        Err(e) => {
            let error = describe(&e);
            debug!(url, duration_ms, error = %error, "mirror unreachable");
            ProbeResult::failed(url, duration_ms, error)
        }
    }
}

/// Print the banner, then probe each target in order and print its line.
///
/// Probes run one after another; the next starts only once the previous
/// has answered or timed out. Only a failed write to `out` is an error.
pub async fn run_checks<P, W>(prober: &P, targets: &[MirrorTarget], out: &mut W) -> Result<()>
where
    P: Prober + ?Sized,
    W: Write,
{
    info!(mirrors = targets.len(), "starting mirror checks");
    writeln!(out, "{}", BANNER)?;

    let mut healthy = 0;
    for target in targets {
        let res = check_mirror(prober, &target.url).await;
        if res.success {
            healthy += 1;
        }
        writeln!(out, "{}", res)?;
    }
    out.flush()?;

    info!(mirrors = targets.len(), healthy, "mirror checks finished");
    Ok(())
}

use std::time::Duration;
use tokio::sync::watch;
use tokio::time::interval;
use tracing::{debug, warn};

/// Interval and attempt budget for a polling wait.
#[derive(Debug, Clone, Copy)]
pub struct PollConfig {
    pub interval: Duration,
    pub max_attempts: u32,
}

impl Default for PollConfig {
    /// 100 ms between probes, one minute total.
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(100),
            max_attempts: 600,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum WaitOutcome<T> {
    Found { value: T, attempts: u32 },
    TimedOut { attempts: u32 },
    Cancelled,
}

/// Probe a condition at a fixed interval until it yields a value, the
/// attempt budget runs out, or the wait is cancelled.
///
/// The probe runs once per tick (first tick fires immediately) and is
/// never evaluated again after its first success, so a success action
/// driven by the returned value runs exactly once. Sending `true` on the
/// cancel channel, or dropping its sender, stops the wait.
pub async fn poll_until<T, F>(
    config: PollConfig,
    mut cancel: watch::Receiver<bool>,
    mut probe: F,
) -> WaitOutcome<T>
where
    F: FnMut() -> Option<T>,
{
    if *cancel.borrow() {
        return WaitOutcome::Cancelled;
    }

    let mut tick = interval(config.interval);
    let mut attempts = 0u32;
    while attempts < config.max_attempts {
        tokio::select! {
            _ = tick.tick() => {
                attempts += 1;
                if let Some(value) = probe() {
                    debug!(attempts, "probe succeeded");
                    return WaitOutcome::Found { value, attempts };
                }
            }
            changed = cancel.changed() => {
                if changed.is_err() || *cancel.borrow() {
                    debug!(attempts, "wait cancelled");
                    return WaitOutcome::Cancelled;
                }
            }
        }
    }

    warn!(attempts, "probe budget exhausted");
    WaitOutcome::TimedOut { attempts }
}

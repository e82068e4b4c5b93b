//! Cache Reaper Task
//!
//! Background task that periodically removes expired cache entries.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, error, info, warn};

use crate::cache::{Cache, WeakCache};

// == Reaper Exit ==
/// Why a reaper stopped running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReaperExit {
    /// Stopped through [`ReaperHandle::stop`]
    Stopped,
    /// Every handle to the cache was dropped
    CacheDropped,
    /// The reap loop panicked; entries no longer expire
    Panicked,
    /// The task was cancelled, usually by runtime shutdown
    Cancelled,
}

// == Reaper Handle ==
/// Controls a running reaper.
///
/// Dropping the handle detaches the reaper: it keeps ticking until the cache
/// itself is dropped.
#[derive(Debug)]
pub struct ReaperHandle {
    shutdown: watch::Sender<bool>,
    task: JoinHandle<ReaperExit>,
}

impl ReaperHandle {
    /// Signals the reaper to stop and waits for it to finish.
    ///
    /// The cache stays usable afterwards; its entries simply stop expiring.
    pub async fn stop(self) -> ReaperExit {
        // Fails only if the loop already exited.
        let _ = self.shutdown.send(true);
        self.task.await.unwrap_or(ReaperExit::Cancelled)
    }

    /// Returns true once the reaper is no longer running.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

/// Spawns a reaper that scans `cache` every `period`.
///
/// Each pass removes entries older than the cache's TTL. The scan holds the
/// cache lock for the whole pass. The reaper only keeps a weak reference, so
/// it exits on its own once the last cache handle is dropped.
///
/// # Panics
/// Panics if `period` is zero or when called outside a Tokio runtime.
pub(crate) fn spawn_reaper<V>(cache: &Cache<V>, period: Duration) -> ReaperHandle
where
    V: Clone + Send + 'static,
{
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let reap_task = tokio::spawn(reap_loop(cache.downgrade(), period, shutdown_rx));

    ReaperHandle {
        shutdown: shutdown_tx,
        task: tokio::spawn(supervise(reap_task)),
    }
}

async fn reap_loop<V>(
    cache: WeakCache<V>,
    period: Duration,
    mut shutdown: watch::Receiver<bool>,
) -> ReaperExit
where
    V: Clone + Send + 'static,
{
    debug!("Starting cache reaper with interval of {:?}", period);

    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker.tick().await; // skip first immediate tick

    let mut detached = false;
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let Some(live) = cache.upgrade() else {
                    return ReaperExit::CacheDropped;
                };

                let removed = live.reap_expired();
                if removed > 0 {
                    info!(removed, "Cache reaper: removed {} expired entries", removed);
                } else {
                    debug!("Cache reaper: no expired entries found");
                }
            }
            changed = shutdown.changed(), if !detached => {
                match changed {
                    Ok(()) if *shutdown.borrow() => return ReaperExit::Stopped,
                    Ok(()) => {}
                    Err(_) => {
                        debug!("Reaper handle dropped, reaper now detached");
                        detached = true;
                    }
                }
            }
        }
    }
}

/// Waits for the reap loop and reports how it ended.
///
/// A panic inside the loop would otherwise end expiry silently.
async fn supervise(task: JoinHandle<ReaperExit>) -> ReaperExit {
    match task.await {
        Ok(exit) => {
            debug!(?exit, "Cache reaper exited");
            exit
        }
        Err(e) if e.is_panic() => {
            error!("Cache reaper panicked, cached entries will no longer expire: {}", e);
            ReaperExit::Panicked
        }
        Err(e) => {
            warn!("Cache reaper cancelled: {}", e);
            ReaperExit::Cancelled
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TTL: Duration = Duration::from_millis(100);

    #[tokio::test(start_paused = true)]
    async fn test_reaper_removes_expired_entries() {
        let (cache, reaper) = Cache::new(TTL);
        cache.put("expire_soon", "value");

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(cache.get("expire_soon"), Some("value"));

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(cache.get("expire_soon"), None, "expired entry should be reaped");

        assert_eq!(reaper.stop().await, ReaperExit::Stopped);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reaper_preserves_fresh_entries() {
        let (cache, reaper) = Cache::new(TTL);

        tokio::time::sleep(Duration::from_millis(150)).await;
        cache.put("fresh", 1u32);

        // The tick at 200ms sees an entry that is only 50ms old.
        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(cache.get("fresh"), Some(1));

        reaper.stop().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_overwrite_restarts_lifetime() {
        let (cache, reaper) = Cache::new(TTL);
        cache.put("key", "v1");

        tokio::time::sleep(Duration::from_millis(150)).await;
        cache.put("key", "v2");

        // At 200ms the original insert would be past its TTL.
        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(cache.get("key"), Some("v2"));

        reaper.stop().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_stopped_reaper_leaves_entries_in_place() {
        let (cache, reaper) = Cache::new(TTL);
        assert_eq!(reaper.stop().await, ReaperExit::Stopped);

        cache.put("key", "value");
        tokio::time::sleep(Duration::from_millis(500)).await;

        assert_eq!(cache.get("key"), Some("value"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_handle_keeps_reaping() {
        let (cache, reaper) = Cache::new(TTL);
        drop(reaper);

        cache.put("key", "value");
        tokio::time::sleep(Duration::from_millis(250)).await;

        assert_eq!(cache.get("key"), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reaper_exits_when_cache_dropped() {
        let (cache, reaper) = Cache::<String>::new(TTL);
        drop(cache);

        tokio::time::sleep(Duration::from_millis(150)).await;

        assert!(reaper.is_finished());
        assert_eq!(reaper.stop().await, ReaperExit::CacheDropped);
    }

    async fn failing_scan() -> ReaperExit {
        panic!("scan failed");
    }

    #[tokio::test]
    async fn test_supervisor_reports_panic() {
        let task = tokio::spawn(failing_scan());
        assert_eq!(supervise(task).await, ReaperExit::Panicked);
    }

    #[tokio::test]
    async fn test_supervisor_reports_cancellation() {
        let task = tokio::spawn(async {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            ReaperExit::Stopped
        });
        task.abort();
        assert_eq!(supervise(task).await, ReaperExit::Cancelled);
    }
}

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::gateway::{BackendGateway, HealthStatus};

/// Interval between probes when none is configured.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(30);

/// Probes health and readiness concurrently and combines the results.
pub async fn probe(gateway: &dyn BackendGateway) -> HealthStatus {
    let (reachable, readiness) = tokio::join!(gateway.check_health(), gateway.check_readiness());
    HealthStatus {
        reachable,
        readiness,
    }
}

/// Polls the backend on a fixed interval and publishes the latest status.
///
/// Idle until [`start`](Self::start); [`stop`](Self::stop) aborts the polling
/// task so no probe fires afterwards. Dropping the monitor stops it.
pub struct HealthMonitor {
    gateway: Arc<dyn BackendGateway>,
    interval: Duration,
    status: Arc<watch::Sender<HealthStatus>>,
    task: Option<JoinHandle<()>>,
}

impl HealthMonitor {
    pub fn new(gateway: Arc<dyn BackendGateway>, interval: Duration) -> Self {
        let (status, _) = watch::channel(HealthStatus::default());
        Self {
            gateway,
            interval,
            status: Arc::new(status),
            task: None,
        }
    }

    pub const fn is_polling(&self) -> bool {
        self.task.is_some()
    }

    /// Latest published status; unreachable until the first probe completes.
    pub fn status(&self) -> HealthStatus {
        *self.status.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<HealthStatus> {
        self.status.subscribe()
    }

    /// Starts polling, probing once right away. No-op while already polling.
    pub fn start(&mut self) {
        if self.task.is_some() {
            return;
        }

        let gateway = Arc::clone(&self.gateway);
        let status = Arc::clone(&self.status);
        let period = self.interval;

        self.task = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                // The first tick completes immediately.
                ticker.tick().await;
                let latest = probe(gateway.as_ref()).await;
                tracing::debug!(
                    reachable = latest.reachable,
                    ready = latest.is_ready(),
                    "health cycle"
                );
                status.send_replace(latest);
            }
        }));
        tracing::debug!(interval = ?period, "health monitor started");
    }

    /// Stops polling. No-op while idle.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            tracing::debug!("health monitor stopped");
        }
    }

    /// Runs a single probe outside the polling schedule and publishes it.
    pub async fn probe_once(&self) -> HealthStatus {
        let latest = probe(self.gateway.as_ref()).await;
        self.status.send_replace(latest);
        latest
    }
}

impl Drop for HealthMonitor {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::gateway::Readiness;
    use crate::gateway::testing::MockGateway;

    fn monitor(gateway: &Arc<MockGateway>) -> HealthMonitor {
        HealthMonitor::new(
            Arc::clone(gateway) as Arc<dyn BackendGateway>,
            DEFAULT_INTERVAL,
        )
    }

    #[tokio::test]
    async fn test_probe_combines_health_and_readiness() {
        let gateway = MockGateway::ready();
        let status = probe(&gateway).await;

        assert!(status.reachable);
        assert!(status.is_ready());
        assert_eq!(gateway.health_call_count(), 1);
    }

    #[tokio::test]
    async fn test_probe_of_down_backend_is_not_ready() {
        let status = probe(&MockGateway::down()).await;

        assert_eq!(status, HealthStatus::default());
        assert!(!status.is_ready());
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_probes_immediately() {
        let gateway = Arc::new(MockGateway::ready());
        let mut monitor = monitor(&gateway);
        let mut rx = monitor.subscribe();

        assert!(!monitor.status().is_ready());

        monitor.start();
        rx.changed().await.unwrap();

        assert!(monitor.is_polling());
        assert!(monitor.status().is_ready());
        assert_eq!(gateway.health_call_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_polls_on_interval() {
        let gateway = Arc::new(MockGateway::ready());
        let mut monitor = monitor(&gateway);

        monitor.start();
        tokio::time::sleep(DEFAULT_INTERVAL * 2 + Duration::from_secs(1)).await;

        // t=0, t=30, t=60
        assert_eq!(gateway.health_call_count(), 3);
        monitor.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_cancels_further_probes() {
        let gateway = Arc::new(MockGateway::ready());
        let mut monitor = monitor(&gateway);
        let mut rx = monitor.subscribe();

        monitor.start();
        rx.changed().await.unwrap();
        monitor.stop();

        tokio::time::sleep(DEFAULT_INTERVAL * 3).await;

        assert!(!monitor.is_polling());
        assert_eq!(gateway.health_call_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_while_idle_and_double_start_are_noops() {
        let gateway = Arc::new(MockGateway::ready());
        let mut monitor = monitor(&gateway);
        let mut rx = monitor.subscribe();

        monitor.stop();
        assert!(!monitor.is_polling());

        monitor.start();
        monitor.start();
        rx.changed().await.unwrap();
        tokio::time::sleep(Duration::from_secs(1)).await;

        assert_eq!(gateway.health_call_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_cycle_does_not_end_monitoring() {
        let gateway = Arc::new(MockGateway::down());
        let mut monitor = monitor(&gateway);
        let mut rx = monitor.subscribe();

        monitor.start();
        rx.changed().await.unwrap();
        assert!(!monitor.status().reachable);

        gateway.set_readiness(
            true,
            Some(Readiness {
                has_primary_model: true,
                has_search_provider: false,
            }),
        );
        rx.changed().await.unwrap();

        let status = monitor.status();
        assert!(status.reachable);
        assert!(!status.is_ready());
        assert_eq!(gateway.health_call_count(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_stops_polling() {
        let gateway = Arc::new(MockGateway::ready());
        let mut monitor = monitor(&gateway);
        let mut rx = monitor.subscribe();

        monitor.start();
        rx.changed().await.unwrap();
        drop(monitor);

        tokio::time::sleep(DEFAULT_INTERVAL * 2).await;
        assert_eq!(gateway.health_call_count(), 1);
    }

    #[tokio::test]
    async fn test_probe_once_publishes() {
        let gateway = Arc::new(MockGateway::ready());
        let monitor = monitor(&gateway);

        let status = monitor.probe_once().await;

        assert!(status.is_ready());
        assert_eq!(monitor.status(), status);
        assert!(!monitor.is_polling());
    }
}

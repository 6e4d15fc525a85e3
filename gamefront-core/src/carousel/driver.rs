//! Background task that drives a shared carousel engine's timers

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use super::engine::CarouselEngine;
use super::types::CarouselEvent;

/// Ticks a [`CarouselEngine`] on a fixed cadence and forwards its events.
///
/// Stopping the driver, or dropping every receiver, tears the engine down so
/// no timer outlives the view that owns it.
#[derive(Debug)]
pub struct CarouselDriver {
    shutdown: CancellationToken,
    handle: JoinHandle<()>,
}

impl CarouselDriver {
    pub fn spawn(
        engine: Arc<Mutex<CarouselEngine>>,
        cadence: Duration,
    ) -> (Self, mpsc::UnboundedReceiver<CarouselEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let shutdown = CancellationToken::new();
        let token = shutdown.clone();

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(cadence);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = token.cancelled() => {
                        debug!("carousel driver shutting down");
                        break;
                    }
                    _ = tx.closed() => {
                        debug!("carousel event receiver dropped");
                        break;
                    }
                    _ = interval.tick() => {
                        let events = engine.lock().tick();
                        if events.iter().any(|event| tx.send(*event).is_err()) {
                            debug!("carousel event receiver dropped");
                            break;
                        }
                    }
                }
            }

            engine.lock().teardown();
        });

        (Self { shutdown, handle }, rx)
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }

    /// Stop ticking and wait for the task to tear the engine down.
    pub async fn shutdown(self) {
        self.shutdown.cancel();
        if let Err(err) = self.handle.await {
            warn!("carousel driver task failed: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::CarouselSettings;
    use gamefront_model::{BannerSet, Game};

    fn shared_engine(n: usize) -> Arc<Mutex<CarouselEngine>> {
        let games: Vec<Game> = (0..n)
            .map(|i| Game::new(format!("g{i}"), format!("Game {i}")))
            .collect();
        let mut engine =
            CarouselEngine::with_system_clock(CarouselSettings::default());
        engine.initialize(&BannerSet::from_games(&games));
        Arc::new(Mutex::new(engine))
    }

    #[tokio::test(start_paused = true)]
    async fn forwards_auto_advance_events() {
        let engine = shared_engine(3);
        let (driver, mut rx) =
            CarouselDriver::spawn(Arc::clone(&engine), Duration::from_millis(10));

        let first = rx.recv().await;
        assert_eq!(first, Some(CarouselEvent::AutoAdvanced { real_index: 1 }));
        let second = rx.recv().await;
        assert_eq!(second, Some(CarouselEvent::AutoAdvanced { real_index: 2 }));

        driver.shutdown().await;
        assert!(engine.lock().is_torn_down());
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_tears_down_pending_timers() {
        let engine = shared_engine(4);
        let (driver, mut rx) =
            CarouselDriver::spawn(Arc::clone(&engine), Duration::from_millis(10));

        driver.shutdown().await;
        assert!(engine.lock().next_deadline().is_none());

        tokio::time::advance(Duration::from_secs(30)).await;
        assert_eq!(rx.recv().await, None);
        assert_eq!(engine.lock().real_index(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_receiver_stops_the_driver() {
        let engine = shared_engine(3);
        let (driver, rx) =
            CarouselDriver::spawn(Arc::clone(&engine), Duration::from_millis(10));
        drop(rx);

        for _ in 0..16 {
            if !driver.is_running() {
                break;
            }
            tokio::task::yield_now().await;
        }

        assert!(!driver.is_running());
        assert!(engine.lock().is_torn_down());
        assert_eq!(engine.lock().real_index(), 0);
    }
}

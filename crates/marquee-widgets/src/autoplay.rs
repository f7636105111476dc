//! Timer-driven carousel playback.
//!
//! A single tokio task owns the carousel. Ticks come from an interval
//! timer, manual selections arrive on an mpsc channel, and the active
//! index is published on a watch channel. Dropping the [`Autoplay`] handle
//! closes the event channel, which stops the task and cancels the pending
//! timer so no stale callback fires after teardown.

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use crate::carousel::Carousel;

/// Handle to a running auto-advance task.
#[derive(Debug)]
pub struct Autoplay {
    select_tx: mpsc::Sender<usize>,
    active_rx: watch::Receiver<usize>,
    task: JoinHandle<()>,
}

impl Autoplay {
    /// Spawn the playback task for `carousel`.
    pub fn spawn(mut carousel: Carousel) -> Self {
        let (select_tx, mut select_rx) = mpsc::channel::<usize>(16);
        let (active_tx, active_rx) = watch::channel(carousel.active());

        let period = carousel.interval();
        let task = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    // manual events win ties against a due tick
                    biased;

                    selected = select_rx.recv() => {
                        let Some(index) = selected else {
                            tracing::debug!("autoplay handle dropped, stopping");
                            break;
                        };
                        carousel.select(index, Instant::now());
                        let _ = active_tx.send(carousel.active());
                    }

                    _ = ticker.tick() => {
                        carousel.tick(Instant::now());
                        let _ = active_tx.send(carousel.active());
                    }
                }
            }
        });

        Self {
            select_tx,
            active_rx,
            task,
        }
    }

    /// Request a manual selection.
    pub async fn select(&self, index: usize) {
        // Ignore send errors (task already stopped)
        let _ = self.select_tx.send(index).await;
    }

    /// Latest published active index.
    pub fn active(&self) -> usize {
        *self.active_rx.borrow()
    }

    /// Subscribe to active-index updates.
    pub fn subscribe(&self) -> watch::Receiver<usize> {
        self.active_rx.clone()
    }

    /// Whether the playback task has stopped.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::CarouselConfig;
    use std::time::Duration;

    fn carousel(len: usize) -> Carousel {
        Carousel::new(
            len,
            CarouselConfig {
                interval: Duration::from_millis(3000),
                cooldown: Duration::from_millis(5000),
            },
        )
    }

    #[tokio::test(start_paused = true)]
    async fn interval_ticks_advance_the_index() {
        let autoplay = Autoplay::spawn(carousel(3));
        let mut rx = autoplay.subscribe();

        tokio::time::advance(Duration::from_millis(3000)).await;
        rx.changed().await.unwrap();

        assert_eq!(autoplay.active(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn selection_updates_and_suppresses_next_tick() {
        let autoplay = Autoplay::spawn(carousel(3));
        let mut rx = autoplay.subscribe();

        autoplay.select(2).await;
        rx.changed().await.unwrap();
        assert_eq!(autoplay.active(), 2);

        // next tick lands inside the cooldown and must not advance
        tokio::time::advance(Duration::from_millis(3000)).await;
        rx.changed().await.unwrap();
        assert_eq!(autoplay.active(), 2);

        // past the cooldown, auto-advance resumes from the selection
        tokio::time::advance(Duration::from_millis(3000)).await;
        rx.changed().await.unwrap();
        assert_eq!(autoplay.active(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_handle_stops_the_task() {
        let autoplay = Autoplay::spawn(carousel(3));
        let task = autoplay.task;

        drop(autoplay.select_tx);
        drop(autoplay.active_rx);

        task.await.unwrap();
    }
}

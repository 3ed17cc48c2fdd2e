//! Scoreboard service — drives the pseudo-live widget on a timer.
//!
//! DESIGN
//! ======
//! A single background task owns the RNG and is the only writer of the
//! shared `Scoreboard`. Handlers take read locks and clone a snapshot, so a
//! render never holds the lock across an await.

use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use crate::live::{Scoreboard, SharedScoreboard};

/// Spawn the scoreboard tick task. Returns a handle for shutdown.
pub fn spawn_scoreboard_task(live: SharedScoreboard, tick: Duration) -> JoinHandle<()> {
    info!(tick_ms = tick.as_millis(), "live scoreboard configured");
    tokio::spawn(async move {
        let mut rng = StdRng::from_os_rng();
        let mut interval = tokio::time::interval(tick);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // The first tick completes immediately; skip it so the opening
        // snapshot is a fresh 0-0.
        interval.tick().await;
        loop {
            interval.tick().await;
            let mut board = live.write().await;
            board.step(&mut rng);
            if board.finished {
                info!(
                    home = %board.home.name,
                    home_score = board.home.score,
                    away = %board.away.name,
                    away_score = board.away.score,
                    "demo match finished"
                );
            } else {
                debug!(minute = board.minute(), "scoreboard tick");
            }
        }
    })
}

/// Clone the current state for rendering.
pub async fn snapshot(live: &SharedScoreboard) -> Scoreboard {
    live.read().await.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::live;

    #[tokio::test(start_paused = true)]
    async fn task_advances_the_shared_board() {
        let board = live::shared();
        let handle = spawn_scoreboard_task(board.clone(), Duration::from_millis(100));

        let before = snapshot(&board).await;
        assert_eq!(before.minute(), 0);

        tokio::time::sleep(Duration::from_millis(350)).await;
        let after = snapshot(&board).await;
        assert!(after.minute() >= 3, "expected at least three ticks, saw {}", after.minute());

        handle.abort();
    }
}

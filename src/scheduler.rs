//! Frame driving, decoupled from any platform refresh primitive.
//!
//! The simulation core is synchronous ([`Session::advance_frame`]); this
//! module supplies an async driver built on a tokio interval for headless
//! runs. Stopping through the handle cancels the pending tick before it can
//! fire, so no frame executes after the stop is observed.

use std::time::Duration;

use tokio::{sync::watch, time};

use crate::{render::Canvas, session::Session};

/// Remote stop switch for a running [`FrameLoop`].
#[derive(Clone)]
pub struct StopHandle {
    tx: watch::Sender<bool>,
}

impl StopHandle {
    pub fn stop(&self) {
        let _ = self.tx.send(true);
    }
}

pub struct FrameLoop {
    period: Duration,
    stop_rx: watch::Receiver<bool>,
}

impl FrameLoop {
    pub fn new(frame_rate: u32) -> (Self, StopHandle) {
        let (tx, stop_rx) = watch::channel(false);
        let period = Duration::from_secs_f64(1.0 / frame_rate.max(1) as f64);
        (Self { period, stop_rx }, StopHandle { tx })
    }

    /// Starts the session and drives frames until the budget is spent or the
    /// stop handle fires, then stops the session. Returns frames driven.
    pub async fn run(
        mut self,
        session: &mut Session,
        budget: Option<u64>,
        mut canvas: Option<&mut dyn Canvas>,
    ) -> u64 {
        let mut interval = time::interval(self.period);
        interval.set_missed_tick_behavior(time::MissedTickBehavior::Skip);
        session.start();
        let mut frames = 0_u64;
        loop {
            if let Some(budget) = budget {
                if frames >= budget {
                    break;
                }
            }
            tokio::select! {
                _ = interval.tick() => {
                    session.advance_frame(canvas.as_deref_mut());
                    frames += 1;
                }
                changed = self.stop_rx.changed() => {
                    if changed.is_err() || *self.stop_rx.borrow() {
                        break;
                    }
                }
            }
        }
        session.stop();
        frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::EnvironmentalState;

    #[tokio::test]
    async fn frame_loop_respects_budget() {
        let mut session = Session::new(EnvironmentalState::default(), 1);
        let (frame_loop, _stop) = FrameLoop::new(1000);
        let frames = frame_loop.run(&mut session, Some(5), None).await;
        assert_eq!(frames, 5);
        assert_eq!(session.simulator().frame_count(), 5);
        assert!(!session.is_running());
    }

    #[tokio::test]
    async fn stop_handle_halts_the_loop() {
        let mut session = Session::new(EnvironmentalState::default(), 1);
        let (frame_loop, stop) = FrameLoop::new(1000);
        stop.stop();
        let frames = frame_loop.run(&mut session, None, None).await;
        // The stop was latched before the loop began, so at most the frame
        // racing the first tick ran.
        assert!(frames <= 1);
        assert!(!session.is_running());
    }
}

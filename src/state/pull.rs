//! Pull-to-refresh gesture state machine.
//!
//! Pure and renderer-independent: the host feeds it touch events (with an
//! already-evaluated "is at top" flag) and executes the commands it returns.
//! All distances are in CSS pixels.

/// Fraction of raw vertical displacement reported as pull distance.
pub const RESISTANCE: f64 = 0.5;

/// Pull distance is clamped to `threshold * CLAMP_FACTOR`.
pub const CLAMP_FACTOR: f64 = 1.5;

pub const DEFAULT_THRESHOLD: f64 = 80.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PullConfig {
    /// Raw (pre-resistance) displacement required to commit a refresh.
    pub threshold: f64,
    /// When false, every event is ignored and no state is kept.
    pub is_enabled: bool,
}

impl Default for PullConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            is_enabled: true,
        }
    }
}

/// One gesture session lives inside `Dragging` and is discarded on touch-end.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PullPhase {
    Idle,
    Dragging { start_y: f64, current_y: f64 },
    Refreshing,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PullEvent {
    /// Finger down. `at_top` is the injected scroll predicate: true only when
    /// both the window and the monitored container are scrolled to 0.
    TouchStart { y: f64, at_top: bool },
    TouchMove { y: f64, at_top: bool },
    TouchEnd,
    /// The refresh operation settled, successfully or not.
    RefreshSettled,
}

/// What the host must do after a transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PullCommand {
    None,
    /// The move belongs to the gesture; suppress default scrolling.
    ClaimMove,
    /// Invoke the refresh operation, then dispatch `RefreshSettled` once it
    /// settles. Returned at most once per completed gesture.
    BeginRefresh,
}

#[derive(Clone, Debug)]
pub struct PullMachine {
    config: PullConfig,
    phase: PullPhase,
    pull_distance: f64,
}

impl PullMachine {
    pub fn new(config: PullConfig) -> Self {
        Self {
            config,
            phase: PullPhase::Idle,
            pull_distance: 0.0,
        }
    }

    /// Damped, clamped pull distance; always in `[0, threshold * 1.5]`.
    pub fn pull_distance(&self) -> f64 {
        self.pull_distance
    }

    pub fn is_refreshing(&self) -> bool {
        matches!(self.phase, PullPhase::Refreshing)
    }

    pub fn phase(&self) -> PullPhase {
        self.phase
    }

    pub fn threshold(&self) -> f64 {
        self.config.threshold
    }

    /// Replaces the configuration, discarding any in-progress gesture
    /// or refresh state so callers observe `pull_distance == 0` and
    /// `is_refreshing == false` immediately.
    pub fn reconfigure(&mut self, config: PullConfig) {
        self.config = config;
        self.phase = PullPhase::Idle;
        self.pull_distance = 0.0;
    }

    pub fn dispatch(&mut self, event: PullEvent) -> PullCommand {
        if !self.config.is_enabled {
            return PullCommand::None;
        }
        match event {
            PullEvent::TouchStart { y, at_top } => {
                // A start during Refreshing must not open a nested session.
                if at_top && matches!(self.phase, PullPhase::Idle) {
                    self.phase = PullPhase::Dragging {
                        start_y: y,
                        current_y: y,
                    };
                }
                PullCommand::None
            }
            PullEvent::TouchMove { y, at_top } => {
                let PullPhase::Dragging { start_y, .. } = self.phase else {
                    return PullCommand::None;
                };
                // The commit decision at touch-end uses the last seen y even
                // when the move itself did not qualify.
                self.phase = PullPhase::Dragging {
                    start_y,
                    current_y: y,
                };
                let dy = y - start_y;
                if dy > 0.0 && at_top {
                    self.pull_distance = (dy * RESISTANCE).min(self.config.threshold * CLAMP_FACTOR);
                    PullCommand::ClaimMove
                } else {
                    PullCommand::None
                }
            }
            PullEvent::TouchEnd => {
                let PullPhase::Dragging { start_y, current_y } = self.phase else {
                    return PullCommand::None;
                };
                self.pull_distance = 0.0;
                if current_y - start_y > self.config.threshold {
                    self.phase = PullPhase::Refreshing;
                    PullCommand::BeginRefresh
                } else {
                    self.phase = PullPhase::Idle;
                    PullCommand::None
                }
            }
            PullEvent::RefreshSettled => {
                if matches!(self.phase, PullPhase::Refreshing) {
                    self.phase = PullPhase::Idle;
                }
                PullCommand::None
            }
        }
    }
}

impl Default for PullMachine {
    fn default() -> Self {
        Self::new(PullConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine() -> PullMachine {
        PullMachine::default()
    }

    fn drag(m: &mut PullMachine, from: f64, to: f64) {
        assert_eq!(
            m.dispatch(PullEvent::TouchStart {
                y: from,
                at_top: true
            }),
            PullCommand::None
        );
        m.dispatch(PullEvent::TouchMove { y: to, at_top: true });
    }

    #[test]
    fn upward_or_zero_drag_reports_no_pull() {
        for to in [100.0, 60.0, 0.0] {
            let mut m = machine();
            drag(&mut m, 100.0, to);
            assert_eq!(m.pull_distance(), 0.0);
            assert!(!m.is_refreshing());
        }
    }

    #[test]
    fn pull_distance_is_damped_while_dragging() {
        for d in [1.0, 40.0, 80.0, 160.0, 240.0] {
            let mut m = machine();
            drag(&mut m, 0.0, d);
            let expected = (d * RESISTANCE).min(DEFAULT_THRESHOLD * CLAMP_FACTOR);
            assert_eq!(m.pull_distance(), expected, "raw drag {d}");
        }
    }

    #[test]
    fn qualifying_move_claims_default_scroll() {
        let mut m = machine();
        m.dispatch(PullEvent::TouchStart {
            y: 0.0,
            at_top: true,
        });
        assert_eq!(
            m.dispatch(PullEvent::TouchMove {
                y: 30.0,
                at_top: true
            }),
            PullCommand::ClaimMove
        );
        assert_eq!(
            m.dispatch(PullEvent::TouchMove {
                y: -5.0,
                at_top: true
            }),
            PullCommand::None
        );
    }

    #[test]
    fn commit_past_threshold_begins_refresh_once() {
        let mut m = machine();
        drag(&mut m, 100.0, 220.0); // raw 120 > 80
        assert_eq!(m.dispatch(PullEvent::TouchEnd), PullCommand::BeginRefresh);
        assert_eq!(m.pull_distance(), 0.0);
        assert!(m.is_refreshing());
        // A stray second end must not fire again.
        assert_eq!(m.dispatch(PullEvent::TouchEnd), PullCommand::None);
    }

    #[test]
    fn release_below_threshold_cancels() {
        let mut m = machine();
        drag(&mut m, 100.0, 150.0); // raw 50 <= 80
        assert_eq!(m.dispatch(PullEvent::TouchEnd), PullCommand::None);
        assert_eq!(m.pull_distance(), 0.0);
        assert_eq!(m.phase(), PullPhase::Idle);
    }

    #[test]
    fn release_exactly_at_threshold_cancels() {
        let mut m = machine();
        drag(&mut m, 0.0, 80.0);
        assert_eq!(m.dispatch(PullEvent::TouchEnd), PullCommand::None);
    }

    #[test]
    fn extreme_drag_is_clamped() {
        let mut m = machine();
        drag(&mut m, 0.0, 500.0);
        assert_eq!(m.pull_distance(), 120.0); // 80 * 1.5
    }

    #[test]
    fn touch_start_during_refresh_is_ignored() {
        let mut m = machine();
        drag(&mut m, 0.0, 200.0);
        assert_eq!(m.dispatch(PullEvent::TouchEnd), PullCommand::BeginRefresh);
        m.dispatch(PullEvent::TouchStart {
            y: 10.0,
            at_top: true,
        });
        assert_eq!(m.phase(), PullPhase::Refreshing);
        // Moves and ends from that ignored touch change nothing either.
        m.dispatch(PullEvent::TouchMove {
            y: 300.0,
            at_top: true,
        });
        assert_eq!(m.pull_distance(), 0.0);
        assert_eq!(m.dispatch(PullEvent::TouchEnd), PullCommand::None);
        assert!(m.is_refreshing());
    }

    #[test]
    fn settlement_returns_to_idle_exactly_once() {
        let mut m = machine();
        drag(&mut m, 0.0, 200.0);
        m.dispatch(PullEvent::TouchEnd);
        assert!(m.is_refreshing());
        m.dispatch(PullEvent::RefreshSettled);
        assert!(!m.is_refreshing());
        assert_eq!(m.phase(), PullPhase::Idle);
        // Spurious settle while idle is a no-op.
        m.dispatch(PullEvent::RefreshSettled);
        assert_eq!(m.phase(), PullPhase::Idle);
    }

    #[test]
    fn gesture_is_rearmable_after_settlement() {
        let mut m = machine();
        drag(&mut m, 0.0, 200.0);
        m.dispatch(PullEvent::TouchEnd);
        m.dispatch(PullEvent::RefreshSettled);
        drag(&mut m, 0.0, 200.0);
        assert_eq!(m.dispatch(PullEvent::TouchEnd), PullCommand::BeginRefresh);
    }

    #[test]
    fn start_away_from_top_never_enters_dragging() {
        let mut m = machine();
        m.dispatch(PullEvent::TouchStart {
            y: 100.0,
            at_top: false,
        });
        assert_eq!(m.phase(), PullPhase::Idle);
        m.dispatch(PullEvent::TouchMove {
            y: 300.0,
            at_top: true,
        });
        assert_eq!(m.pull_distance(), 0.0);
        assert_eq!(m.dispatch(PullEvent::TouchEnd), PullCommand::None);
    }

    #[test]
    fn move_while_scrolled_keeps_distance_but_records_y() {
        let mut m = machine();
        m.dispatch(PullEvent::TouchStart {
            y: 0.0,
            at_top: true,
        });
        assert_eq!(
            m.dispatch(PullEvent::TouchMove {
                y: 200.0,
                at_top: false
            }),
            PullCommand::None
        );
        assert_eq!(m.pull_distance(), 0.0);
        // Raw displacement still decides the commit.
        assert_eq!(m.dispatch(PullEvent::TouchEnd), PullCommand::BeginRefresh);
    }

    #[test]
    fn end_and_move_without_start_are_noops() {
        let mut m = machine();
        assert_eq!(
            m.dispatch(PullEvent::TouchMove {
                y: 50.0,
                at_top: true
            }),
            PullCommand::None
        );
        assert_eq!(m.dispatch(PullEvent::TouchEnd), PullCommand::None);
        assert_eq!(m.phase(), PullPhase::Idle);
    }

    #[test]
    fn disabled_machine_ignores_everything() {
        let mut m = PullMachine::new(PullConfig {
            is_enabled: false,
            ..PullConfig::default()
        });
        m.dispatch(PullEvent::TouchStart {
            y: 0.0,
            at_top: true,
        });
        m.dispatch(PullEvent::TouchMove {
            y: 400.0,
            at_top: true,
        });
        assert_eq!(m.pull_distance(), 0.0);
        assert_eq!(m.dispatch(PullEvent::TouchEnd), PullCommand::None);
        assert_eq!(m.phase(), PullPhase::Idle);
    }

    #[test]
    fn reconfigure_zeroes_state_and_applies_new_threshold() {
        let mut m = machine();
        drag(&mut m, 0.0, 100.0);
        assert!(m.pull_distance() > 0.0);
        m.reconfigure(PullConfig {
            threshold: 150.0,
            is_enabled: true,
        });
        assert_eq!(m.pull_distance(), 0.0);
        assert_eq!(m.phase(), PullPhase::Idle);
        // The commit decision now follows the new threshold.
        drag(&mut m, 0.0, 140.0);
        assert_eq!(m.dispatch(PullEvent::TouchEnd), PullCommand::None);
        drag(&mut m, 0.0, 160.0);
        assert_eq!(m.dispatch(PullEvent::TouchEnd), PullCommand::BeginRefresh);
        assert_eq!(m.threshold(), 150.0);
    }

    #[test]
    fn disabling_via_reconfigure_discards_the_session() {
        let mut m = machine();
        drag(&mut m, 0.0, 200.0);
        m.dispatch(PullEvent::TouchEnd);
        assert!(m.is_refreshing());
        m.reconfigure(PullConfig {
            is_enabled: false,
            ..PullConfig::default()
        });
        assert!(!m.is_refreshing());
        assert_eq!(m.pull_distance(), 0.0);
        m.dispatch(PullEvent::TouchStart {
            y: 0.0,
            at_top: true,
        });
        m.dispatch(PullEvent::TouchMove {
            y: 300.0,
            at_top: true,
        });
        assert_eq!(m.pull_distance(), 0.0);
        assert_eq!(m.dispatch(PullEvent::TouchEnd), PullCommand::None);
        // A late settlement from the abandoned refresh stays a no-op.
        m.dispatch(PullEvent::RefreshSettled);
        assert_eq!(m.phase(), PullPhase::Idle);
    }

    #[test]
    fn refreshing_never_coexists_with_nonzero_distance() {
        let mut m = machine();
        for raw in [30.0, 90.0, 250.0] {
            drag(&mut m, 0.0, raw);
            m.dispatch(PullEvent::TouchEnd);
            if m.is_refreshing() {
                assert_eq!(m.pull_distance(), 0.0);
                m.dispatch(PullEvent::RefreshSettled);
            }
            assert_eq!(m.pull_distance(), 0.0);
        }
    }
}

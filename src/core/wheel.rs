// Rotation state for the wheel and the gesture/spin state machine around it.
//
// `Wheel` owns the single rotation value. Gesture handlers and the spin
// trigger call into it with the current time; it answers with what the
// view should apply (a transform, a transition and, when motion is
// released, when to come back and read the result). Nothing here touches
// the DOM or reads a clock.

use crate::constants::{
    DRAG_SETTLE_MS, DRAG_TRANSITION_CSS, MOMENTUM_TIME_CONSTANT_MS, NO_TRANSITION_CSS,
    SLICE_COUNT, SPIN_DURATION_MS, SPIN_EXTRA_TURNS, SPIN_SETTLE_BUFFER_MS, SPIN_TRANSITION_CSS,
};
use rand::Rng;

/// CSS transition applied to the wheel's transform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Transform changes show up immediately (used while dragging).
    None,
    Eased(&'static str),
}

impl Transition {
    #[inline]
    pub fn css(&self) -> &'static str {
        match *self {
            Transition::None => NO_TRANSITION_CSS,
            Transition::Eased(css) => css,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct WheelConfig {
    pub slice_count: usize,
    pub momentum_ms: f64,
    pub drag_settle_ms: f64,
    pub drag_transition: &'static str,
    pub spin_extra_turns: u32,
    pub spin_duration_ms: f64,
    pub spin_settle_buffer_ms: f64,
    pub spin_transition: &'static str,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            slice_count: SLICE_COUNT,
            momentum_ms: MOMENTUM_TIME_CONSTANT_MS,
            drag_settle_ms: DRAG_SETTLE_MS,
            drag_transition: DRAG_TRANSITION_CSS,
            spin_extra_turns: SPIN_EXTRA_TURNS,
            spin_duration_ms: SPIN_DURATION_MS,
            spin_settle_buffer_ms: SPIN_SETTLE_BUFFER_MS,
            spin_transition: SPIN_TRANSITION_CSS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettleSource {
    Drag,
    Spin,
}

/// Live drag bookkeeping. Angles are degrees, `velocity` is deg/ms.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragTracker {
    /// Pointer angle minus rotation at gesture start.
    pub start_offset: f64,
    /// Last pointer angle, unwrapped so it never jumps by a full turn.
    pub last_angle: f64,
    pub velocity: f64,
    pub last_time: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Phase {
    Idle,
    Dragging(DragTracker),
    Settling {
        source: SettleSource,
        token: u32,
        deadline: f64,
    },
    Resolved,
}

/// What the view has to do once motion is released.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SettlePlan {
    pub rotation: f64,
    pub transition: Transition,
    pub delay_ms: f64,
    pub token: u32,
    pub source: SettleSource,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Settled {
    pub rotation: f64,
    pub source: SettleSource,
}

#[derive(Clone, Debug)]
pub struct Wheel {
    config: WheelConfig,
    rotation: f64,
    phase: Phase,
    next_token: u32,
}

impl Default for Wheel {
    fn default() -> Self {
        Self::new(WheelConfig::default())
    }
}

impl Wheel {
    pub fn new(config: WheelConfig) -> Self {
        Self {
            config,
            rotation: 0.0,
            phase: Phase::Idle,
            next_token: 0,
        }
    }

    #[inline]
    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    /// Accumulated rotation in degrees; not reduced modulo 360.
    #[inline]
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging(_))
    }

    /// The spin button stays disabled only while a button spin is in flight.
    /// A spin requested mid-drag (Enter key) is refused by [`Wheel::spin`]
    /// without touching the button, since the drag ends on pointer release.
    #[inline]
    pub fn trigger_enabled(&self) -> bool {
        !matches!(
            self.phase,
            Phase::Settling {
                source: SettleSource::Spin,
                ..
            }
        )
    }

    /// Start following the pointer. Grabbing a wheel that is still coasting
    /// from a drag supersedes the pending settle; a button spin can't be
    /// grabbed.
    pub fn begin_drag(&mut self, pointer_angle: f64, now: f64) -> Option<Transition> {
        if !pointer_angle.is_finite() {
            return None;
        }
        match self.phase {
            Phase::Dragging(_)
            | Phase::Settling {
                source: SettleSource::Spin,
                ..
            } => return None,
            _ => {}
        }
        self.phase = Phase::Dragging(DragTracker {
            start_offset: pointer_angle - self.rotation,
            last_angle: pointer_angle,
            velocity: 0.0,
            last_time: now,
        });
        Some(Transition::None)
    }

    /// Follow the pointer 1:1 and sample angular velocity. Returns the new
    /// rotation, or `None` when no drag is active.
    pub fn drag_to(&mut self, pointer_angle: f64, now: f64) -> Option<f64> {
        let Phase::Dragging(mut drag) = self.phase else {
            return None;
        };
        if !pointer_angle.is_finite() {
            return None;
        }
        let angle = drag.last_angle + shortest_delta(drag.last_angle, pointer_angle);
        let dt = now - drag.last_time;
        if dt > 0.0 {
            drag.velocity = (angle - drag.last_angle) / dt;
            drag.last_time = now;
        }
        drag.last_angle = angle;
        self.rotation = angle - drag.start_offset;
        self.phase = Phase::Dragging(drag);
        Some(self.rotation)
    }

    /// Release the drag and let the wheel coast on its last velocity.
    pub fn end_drag(&mut self, now: f64) -> Option<SettlePlan> {
        let Phase::Dragging(drag) = self.phase else {
            return None;
        };
        self.rotation += drag.velocity * self.config.momentum_ms;
        let delay_ms = self.config.drag_settle_ms;
        Some(self.schedule(
            SettleSource::Drag,
            Transition::Eased(self.config.drag_transition),
            delay_ms,
            now,
        ))
    }

    /// Button spin: a random landing angle plus a fixed number of full turns.
    /// A wheel still coasting from a drag can be spun; its pending settle is
    /// superseded. Refused mid-drag and during another spin.
    pub fn spin<R: Rng>(&mut self, rng: &mut R, now: f64) -> Option<SettlePlan> {
        match self.phase {
            Phase::Dragging(_)
            | Phase::Settling {
                source: SettleSource::Spin,
                ..
            } => return None,
            _ => {}
        }
        let offset: f64 = rng.gen_range(0.0..360.0);
        self.rotation += offset + 360.0 * self.config.spin_extra_turns as f64;
        let delay_ms = self.config.spin_duration_ms + self.config.spin_settle_buffer_ms;
        Some(self.schedule(
            SettleSource::Spin,
            Transition::Eased(self.config.spin_transition),
            delay_ms,
            now,
        ))
    }

    /// Timer callback entry point. Stale tokens (a newer gesture took over)
    /// are ignored.
    pub fn settle(&mut self, token: u32) -> Option<Settled> {
        match self.phase {
            Phase::Settling {
                source, token: t, ..
            } if t == token => {
                self.phase = Phase::Resolved;
                Some(Settled {
                    rotation: self.rotation,
                    source,
                })
            }
            _ => None,
        }
    }

    /// Clock-driven alternative to [`Wheel::settle`].
    pub fn poll(&mut self, now: f64) -> Option<Settled> {
        match self.phase {
            Phase::Settling {
                token, deadline, ..
            } if now >= deadline => self.settle(token),
            _ => None,
        }
    }

    fn schedule(
        &mut self,
        source: SettleSource,
        transition: Transition,
        delay_ms: f64,
        now: f64,
    ) -> SettlePlan {
        let token = self.next_token;
        self.next_token = self.next_token.wrapping_add(1);
        self.phase = Phase::Settling {
            source,
            token,
            deadline: now + delay_ms,
        };
        SettlePlan {
            rotation: self.rotation,
            transition,
            delay_ms,
            token,
            source,
        }
    }
}

/// CSS transform for a rotation in degrees.
#[inline]
pub fn transform_css(rotation: f64) -> String {
    format!("rotate({}deg)", rotation)
}

/// Signed angular distance from `from` to `to`, in (-180, 180].
#[inline]
pub fn shortest_delta(from: f64, to: f64) -> f64 {
    let d = (to - from).rem_euclid(360.0);
    if d > 180.0 {
        d - 360.0
    } else {
        d
    }
}

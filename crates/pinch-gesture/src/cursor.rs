//! Cursor state machine
//!
//! Two states, one threshold. A pinch closing under the threshold latches
//! Hover and records an anchor; opening past it releases back to Idle and
//! classifies the midpoint displacement since the anchor:
//!
//! ```text
//!            dist <  enter
//!   Idle  ───────────────────▶  Hover   (anchor = center)
//!    ▲                            │
//!    └────────────────────────────┘
//!            dist >  enter        (emit swipe or click)
//! ```
//!
//! Updates are only applied while the midpoint is inside the activation zone
//! (`center.y < zone_max_y`).

use serde::{Deserialize, Serialize};
use tracing::debug;

use pinch_core::{GestureEvent, PinchError, PinchResult, Point, FILTERED_LEN};

use crate::{PinchPoints, PinchSample};

/// Position captured when Hover is entered
pub type Anchor = Point;

/// Cursor state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CursorState {
    #[default]
    Idle,
    Hover,
}

/// Gesture machine configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Pinch distance that enters and exits Hover, in pixels
    pub enter_threshold: f32,
    /// Midpoint displacement that turns a release into a swipe, in pixels
    pub swipe_threshold: i32,
    /// Updates apply only while `center.y` is strictly above this line
    pub zone_max_y: i32,
    /// Landmarks forming the pinch
    pub pinch_points: PinchPoints,
}

impl Default for GestureConfig {
    fn default() -> Self {
        // 640x480 reference resolution
        GestureConfig {
            enter_threshold: 30.0,
            swipe_threshold: 15,
            zone_max_y: 160,
            pinch_points: PinchPoints::default(),
        }
    }
}

impl GestureConfig {
    pub fn validate(&self) -> PinchResult<()> {
        if !self.enter_threshold.is_finite() || self.enter_threshold <= 0.0 {
            return Err(PinchError::InvalidConfig(format!(
                "enter threshold must be positive, got {}",
                self.enter_threshold
            )));
        }
        if self.swipe_threshold < 0 {
            return Err(PinchError::InvalidConfig(format!(
                "swipe threshold must not be negative, got {}",
                self.swipe_threshold
            )));
        }
        if self.pinch_points.first == self.pinch_points.second {
            return Err(PinchError::InvalidConfig(
                "pinch points must be two different landmarks".to_string(),
            ));
        }
        if self.pinch_points.required_len() > FILTERED_LEN {
            return Err(PinchError::InvalidConfig(format!(
                "pinch points {}/{} outside the filtered hand",
                self.pinch_points.first, self.pinch_points.second
            )));
        }
        Ok(())
    }

    /// Is the pinch center inside the activation zone?
    #[inline]
    pub fn in_zone(&self, center: Point) -> bool {
        center.y < self.zone_max_y
    }
}

/// Outcome of one update
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    /// Center outside the activation zone, nothing applied
    OutsideZone,
    /// Idle stayed Idle
    Waiting,
    /// Idle → Hover
    Entered { anchor: Anchor },
    /// Hover stayed Hover
    Holding,
    /// Hover → Idle with a classified event
    Released { event: GestureEvent, dx: i32, dy: i32 },
}

impl Transition {
    /// Event produced by this transition, if any
    pub fn event(&self) -> Option<GestureEvent> {
        match self {
            Transition::Released { event, .. } => Some(*event),
            _ => None,
        }
    }
}

/// Classify a release displacement. Horizontal is checked before vertical.
pub fn classify_release(dx: i32, dy: i32, threshold: i32) -> GestureEvent {
    if dx > threshold {
        GestureEvent::SwipeRight
    } else if dx < -threshold {
        GestureEvent::SwipeLeft
    } else if dy > threshold {
        GestureEvent::SwipeDown
    } else if dy < -threshold {
        GestureEvent::SwipeUp
    } else {
        GestureEvent::Click
    }
}

/// Idle/Hover machine with anchor
#[derive(Debug, Clone, Default)]
pub struct CursorMachine {
    state: CursorState,
    anchor: Option<Anchor>,
    config: GestureConfig,
}

impl CursorMachine {
    pub fn new() -> Self {
        Self::with_config(GestureConfig::default())
    }

    pub fn with_config(config: GestureConfig) -> Self {
        CursorMachine {
            state: CursorState::Idle,
            anchor: None,
            config,
        }
    }

    pub fn state(&self) -> CursorState {
        self.state
    }

    /// Anchor recorded on entering Hover
    pub fn anchor(&self) -> Option<Anchor> {
        self.anchor
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Back to Idle, dropping any anchor
    pub fn reset(&mut self) {
        self.state = CursorState::Idle;
        self.anchor = None;
    }

    /// Apply one pinch sample
    pub fn update(&mut self, sample: PinchSample) -> Transition {
        if !self.config.in_zone(sample.center) {
            return Transition::OutsideZone;
        }

        let enter = self.config.enter_threshold;
        match self.state {
            CursorState::Idle if sample.distance < enter => {
                self.state = CursorState::Hover;
                self.anchor = Some(sample.center);
                debug!(
                    x = sample.center.x,
                    y = sample.center.y,
                    distance = sample.distance,
                    "cursor hover"
                );
                Transition::Entered {
                    anchor: sample.center,
                }
            }
            CursorState::Idle => Transition::Waiting,
            CursorState::Hover if sample.distance > enter => {
                let anchor = self.anchor.take().unwrap_or(sample.center);
                let dx = sample.center.x.saturating_sub(anchor.x);
                let dy = sample.center.y.saturating_sub(anchor.y);
                let event = classify_release(dx, dy, self.config.swipe_threshold);
                self.state = CursorState::Idle;
                debug!(%event, dx, dy, "cursor release");
                Transition::Released { event, dx, dy }
            }
            CursorState::Hover => Transition::Holding,
        }
    }
}

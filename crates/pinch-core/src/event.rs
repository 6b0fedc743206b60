//! Gesture events
//!
//! Events are what consumers poll. The token strings are the external
//! contract and must not change.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::PinchError;

/// Gesture event classification
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GestureEvent {
    #[default]
    #[serde(rename = "none")]
    None,
    #[serde(rename = "click")]
    Click,
    #[serde(rename = "leftswipe")]
    SwipeLeft,
    #[serde(rename = "rightswipe")]
    SwipeRight,
    #[serde(rename = "upswipe")]
    SwipeUp,
    #[serde(rename = "downswipe")]
    SwipeDown,
}

impl GestureEvent {
    pub const ALL: [GestureEvent; 6] = [
        GestureEvent::None,
        GestureEvent::Click,
        GestureEvent::SwipeLeft,
        GestureEvent::SwipeRight,
        GestureEvent::SwipeUp,
        GestureEvent::SwipeDown,
    ];

    /// Wire token
    pub fn token(self) -> &'static str {
        match self {
            GestureEvent::None => "none",
            GestureEvent::Click => "click",
            GestureEvent::SwipeLeft => "leftswipe",
            GestureEvent::SwipeRight => "rightswipe",
            GestureEvent::SwipeUp => "upswipe",
            GestureEvent::SwipeDown => "downswipe",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.token() == token)
    }

    #[inline]
    pub fn is_none(self) -> bool {
        self == GestureEvent::None
    }

    pub fn is_swipe(self) -> bool {
        matches!(
            self,
            GestureEvent::SwipeLeft
                | GestureEvent::SwipeRight
                | GestureEvent::SwipeUp
                | GestureEvent::SwipeDown
        )
    }
}

impl fmt::Display for GestureEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for GestureEvent {
    type Err = PinchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| PinchError::UnknownGesture(s.to_string()))
    }
}

/// Polled payload sent to consumers: `{"gesture": "<token>"}`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GestureMessage {
    pub gesture: GestureEvent,
}

impl From<GestureEvent> for GestureMessage {
    fn from(gesture: GestureEvent) -> Self {
        Self { gesture }
    }
}

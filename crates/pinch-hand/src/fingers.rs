//! Finger state extraction
//!
//! The thumb is judged horizontally against its base, using the hand polarity
//! to decide which direction counts as "out". The other four fingers are open
//! when the tip sits strictly above its base on screen.

use serde::{Deserialize, Serialize};

use pinch_core::{pos, Landmark, FILTERED_LEN};

use crate::{Hand, Polarity};

/// Finger identifier, in output order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    pub const ALL: [Finger; 5] = [
        Finger::Thumb,
        Finger::Index,
        Finger::Middle,
        Finger::Ring,
        Finger::Pinky,
    ];

    /// Slot in a finger state vector
    pub fn index(self) -> usize {
        self as usize
    }

    /// (base, tip) positions in the filtered landmark list
    pub fn positions(self) -> (usize, usize) {
        match self {
            Finger::Thumb => (pos::THUMB_BASE, pos::THUMB_TIP),
            Finger::Index => (pos::INDEX_BASE, pos::INDEX_TIP),
            Finger::Middle => (pos::MIDDLE_BASE, pos::MIDDLE_TIP),
            Finger::Ring => (pos::RING_BASE, pos::RING_TIP),
            Finger::Pinky => (pos::PINKY_BASE, pos::PINKY_TIP),
        }
    }
}

/// `[thumb, index, middle, ring, pinky]`, or empty when the hand was incomplete
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FingerStates(Vec<bool>);

impl FingerStates {
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `None` for an empty vector
    pub fn is_open(&self, finger: Finger) -> Option<bool> {
        self.0.get(finger.index()).copied()
    }

    /// Number of raised fingers
    pub fn open_count(&self) -> usize {
        self.0.iter().filter(|open| **open).count()
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }

    /// As 0/1 flags
    pub fn to_bits(&self) -> Vec<u8> {
        self.0.iter().map(|open| u8::from(*open)).collect()
    }
}

impl From<[bool; 5]> for FingerStates {
    fn from(states: [bool; 5]) -> Self {
        Self(states.to_vec())
    }
}

/// Open/closed state of each finger. Fewer than ten landmarks gives an empty vector.
pub fn finger_states(landmarks: &[Landmark]) -> FingerStates {
    if landmarks.len() < FILTERED_LEN {
        return FingerStates::empty();
    }
    let Some(polarity) = Polarity::of(landmarks) else {
        return FingerStates::empty();
    };

    let mut states = Vec::with_capacity(Finger::ALL.len());

    let thumb_base = landmarks[pos::THUMB_BASE].x;
    let thumb_tip = landmarks[pos::THUMB_TIP].x;
    states.push(match polarity {
        Polarity::Right => thumb_base < thumb_tip,
        Polarity::Left => thumb_base > thumb_tip,
    });

    for finger in &Finger::ALL[1..] {
        let (base, tip) = finger.positions();
        // image y grows downward
        states.push(landmarks[base].y > landmarks[tip].y);
    }

    FingerStates(states)
}

/// Finger states of a preprocessed hand
pub fn hand_fingers(hand: &Hand) -> FingerStates {
    finger_states(&hand.landmarks)
}

/// Finger states for the first and second detected hands, empty when absent
pub fn both_hands_fingers(hands: &[Hand]) -> (FingerStates, FingerStates) {
    let first = hands.first().map(hand_fingers).unwrap_or_default();
    let second = hands.get(1).map(hand_fingers).unwrap_or_default();
    (first, second)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn reference_hand() -> Vec<Landmark> {
        vec![
            Landmark::new(3, 100, 50),
            Landmark::new(4, 120, 50),
            Landmark::new(6, 150, 60),
            Landmark::new(8, 150, 20),
            Landmark::new(10, 160, 60),
            Landmark::new(12, 160, 10),
            Landmark::new(14, 170, 60),
            Landmark::new(16, 170, 20),
            Landmark::new(18, 180, 60),
            Landmark::new(20, 180, 15),
        ]
    }

    #[test]
    fn test_reference_hand() {
        let states = finger_states(&reference_hand());
        assert_eq!(states.to_bits(), vec![0, 1, 1, 1, 1]);
        assert_eq!(states.open_count(), 4);
        assert_eq!(states.is_open(Finger::Thumb), Some(false));
        assert_eq!(states.is_open(Finger::Pinky), Some(true));
    }

    #[test]
    fn test_left_polarity_thumb_open() {
        let mut hand = reference_hand();
        hand[pos::THUMB_BASE].x = 130;
        assert_eq!(finger_states(&hand).is_open(Finger::Thumb), Some(true));
    }

    #[test]
    fn test_right_polarity_thumb() {
        let mut hand = reference_hand();
        hand[pos::THUMB_TIP].x = 200; // right of pinky tip
        hand[pos::THUMB_BASE].x = 190;
        assert_eq!(finger_states(&hand).is_open(Finger::Thumb), Some(true));

        hand[pos::THUMB_BASE].x = 210;
        assert_eq!(finger_states(&hand).is_open(Finger::Thumb), Some(false));
    }

    #[test]
    fn test_level_tip_is_closed() {
        let mut hand = reference_hand();
        hand[pos::INDEX_TIP].y = hand[pos::INDEX_BASE].y;
        assert_eq!(finger_states(&hand).is_open(Finger::Index), Some(false));
    }

    #[test]
    fn test_short_input_is_empty() {
        assert!(finger_states(&[]).is_empty());
        assert!(finger_states(&reference_hand()[..9]).is_empty());
        assert_eq!(FingerStates::empty().is_open(Finger::Index), None);
    }

    #[test]
    fn test_both_hands() {
        let full = Hand {
            landmarks: reference_hand(),
            ..Hand::default()
        };
        let (first, second) = both_hands_fingers(&[full.clone()]);
        assert_eq!(first.len(), 5);
        assert!(second.is_empty());

        let (first, second) = both_hands_fingers(&[Hand::default(), full]);
        assert!(first.is_empty());
        assert_eq!(second.open_count(), 4);

        let (first, second) = both_hands_fingers(&[]);
        assert!(first.is_empty() && second.is_empty());
    }

    proptest! {
        #[test]
        fn prop_short_lists_are_empty(
            coords in proptest::collection::vec((0i32..640, 0i32..480), 0..10)
        ) {
            let landmarks: Vec<Landmark> = coords
                .iter()
                .enumerate()
                .map(|(i, (x, y))| Landmark::new(i as u8, *x, *y))
                .collect();
            prop_assert!(finger_states(&landmarks).is_empty());
        }

        #[test]
        fn prop_full_lists_have_five(
            coords in proptest::collection::vec((0i32..640, 0i32..480), 10..12)
        ) {
            let landmarks: Vec<Landmark> = coords
                .iter()
                .enumerate()
                .map(|(i, (x, y))| Landmark::new(i as u8, *x, *y))
                .collect();
            prop_assert_eq!(finger_states(&landmarks).len(), 5);
        }
    }
}

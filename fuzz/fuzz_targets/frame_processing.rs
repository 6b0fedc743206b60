#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use pinch_core::{Frame, NormalizedPoint, RawHand};
use pinch_hand::{finger_states, is_left, preprocess_hand};
use pinch_runtime::GestureEngine;

#[derive(Debug, Arbitrary)]
struct FuzzFrame {
    width: u16,
    height: u16,
    hands: Vec<Vec<(f32, f32)>>,
}

impl FuzzFrame {
    fn into_frame(self) -> Frame {
        let hands = self
            .hands
            .into_iter()
            .map(|points| {
                RawHand::new(
                    points
                        .into_iter()
                        .map(|(x, y)| NormalizedPoint::new(x, y))
                        .collect(),
                )
            })
            .collect();
        Frame::new(self.width as u32, self.height as u32, hands)
    }
}

fuzz_target!(|frames: Vec<FuzzFrame>| {
    let mut engine = GestureEngine::new();
    for frame in frames {
        let frame = frame.into_frame();

        for raw in &frame.hands {
            let hand = preprocess_hand(raw, frame.width, frame.height);
            let fingers = finger_states(&hand.landmarks);
            assert!(fingers.is_empty() || fingers.len() == 5);
            let _ = is_left(&hand.landmarks);
        }

        let report = engine.process_frame(&frame);
        assert!(report.hands.len() <= engine.config().max_hands);
        let _ = engine.poll_gesture();
    }
});

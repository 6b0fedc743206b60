//! End-to-end tests through `GestureEngine` and `SharedEngine`

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use proptest::prelude::*;

use pinch_core::{Frame, GestureEvent, LANDMARKS_PER_HAND};
use pinch_gesture::CursorState;
use pinch_runtime::{EngineConfig, GestureEngine, SharedEngine};

use crate::scenario::GestureScript;
use crate::synth::{frame_of, to_raw, Jitter, SyntheticHand, FRAME_HEIGHT, FRAME_WIDTH};

fn run(script: GestureScript) -> Vec<GestureEvent> {
    script.run(&mut GestureEngine::new()).events
}

#[test]
fn test_finger_example_through_engine() {
    // filtered landmarks at the given pixels, the rest parked on the wrist
    let mut pixels = [(150, 100); LANDMARKS_PER_HAND];
    for (id, x, y) in [
        (3usize, 100, 50),
        (4, 120, 50),
        (6, 150, 60),
        (8, 150, 20),
        (10, 160, 60),
        (12, 160, 10),
        (14, 170, 60),
        (16, 170, 20),
        (18, 180, 60),
        (20, 180, 15),
    ] {
        pixels[id] = (x, y);
    }
    let frame = Frame::new(
        FRAME_WIDTH,
        FRAME_HEIGHT,
        vec![to_raw(&pixels, FRAME_WIDTH, FRAME_HEIGHT)],
    );

    let report = GestureEngine::new().process_frame(&frame);
    let hand = &report.hands[0];
    assert!(hand.is_left);
    assert_eq!(hand.fingers.to_bits(), vec![0, 1, 1, 1, 1]);
}

#[test]
fn test_release_classification() {
    let from = (300, 100);
    assert_eq!(run(GestureScript::new().drag(from, 40, 0, 4)), [GestureEvent::SwipeRight]);
    assert_eq!(run(GestureScript::new().drag(from, -40, 0, 4)), [GestureEvent::SwipeLeft]);
    assert_eq!(run(GestureScript::new().drag(from, 0, 40, 4)), [GestureEvent::SwipeDown]);
    assert_eq!(run(GestureScript::new().drag(from, 0, -40, 4)), [GestureEvent::SwipeUp]);
    assert_eq!(run(GestureScript::new().drag(from, 5, 3, 1)), [GestureEvent::Click]);
    // diagonal: horizontal wins
    assert_eq!(run(GestureScript::new().drag(from, 20, 40, 2)), [GestureEvent::SwipeRight]);
}

#[test]
fn test_gesture_sequence() {
    let events = run(GestureScript::new()
        .click(300, 100)
        .drag((300, 100), 50, 0, 5)
        .empty()
        .click(200, 60));
    assert_eq!(
        events,
        [GestureEvent::Click, GestureEvent::SwipeRight, GestureEvent::Click]
    );
}

#[test]
fn test_unread_event_overwritten() {
    let mut engine = GestureEngine::new();
    for frame in GestureScript::new()
        .click(300, 100)
        .drag((300, 100), 0, -40, 2)
        .frames()
    {
        engine.process_frame(frame);
    }
    assert_eq!(engine.stats().events_emitted, 2);
    assert_eq!(engine.poll_gesture(), GestureEvent::SwipeUp);
    assert_eq!(engine.poll_gesture(), GestureEvent::None);
}

#[test]
fn test_hover_survives_lost_hand() {
    let outcome = GestureScript::new()
        .pinch(300, 100)
        .empty()
        .empty()
        .release(300, 100)
        .run(&mut GestureEngine::new());
    assert_eq!(
        outcome.states,
        [
            CursorState::Hover,
            CursorState::Hover,
            CursorState::Hover,
            CursorState::Idle
        ]
    );
    assert_eq!(outcome.events, [GestureEvent::Click]);
}

#[test]
fn test_only_left_admitted_hands_drive() {
    let pinched = SyntheticHand::left(300, 100).pinched();
    for hand in [
        SyntheticHand::right(300, 100).pinched(),
        pinched.far(),
        pinched.near(),
    ] {
        let mut engine = GestureEngine::new();
        let report = engine.process_frame(&frame_of(&[hand]));
        assert!(report.driver.is_none(), "{hand:?}");
        assert_eq!(engine.cursor_state(), CursorState::Idle);
    }

    let mut engine = GestureEngine::new();
    let report = engine.process_frame(&frame_of(&[SyntheticHand::right(450, 100).pinched(), pinched]));
    assert_eq!(report.driver.map(|d| d.hand), Some(1));
    assert_eq!(engine.cursor_state(), CursorState::Hover);
}

#[test]
fn test_first_candidate_in_zone_drives() {
    // the first left hand is below the zone, so the second one drives
    let mut engine = GestureEngine::new();
    let report = engine.process_frame(&frame_of(&[
        SyntheticHand::left(150, 300).pinched(),
        SyntheticHand::left(450, 100).pinched(),
    ]));
    let driver = report.driver.unwrap();
    assert_eq!(driver.hand, 1);
    assert_eq!(engine.stats().outside_zone, 1);
}

#[test]
fn test_gate_disabled_admits_near_hand() {
    let config = EngineConfig {
        depth_gate_enabled: false,
        ..EngineConfig::reference()
    };
    let mut engine = GestureEngine::with_config(config).unwrap();
    engine.process_frame(&frame_of(&[SyntheticHand::left(300, 100).pinched().near()]));
    assert_eq!(engine.cursor_state(), CursorState::Hover);
}

#[test]
fn test_strict_band_preset() {
    // roughly 81x114 px: inside the reference band, under the strict one
    let hand = SyntheticHand::left(300, 100).pinched().with_scale(0.95);

    let mut reference = GestureEngine::with_config(EngineConfig::reference()).unwrap();
    assert!(reference.process_frame(&frame_of(&[hand])).hands[0].admitted);

    let mut strict = GestureEngine::with_config(EngineConfig::strict_band()).unwrap();
    let report = strict.process_frame(&frame_of(&[hand]));
    assert!(!report.hands[0].admitted);
    assert!(report.driver.is_none());
}

#[test]
fn test_pinch_level_reported() {
    let mut engine = GestureEngine::new();
    let closed = engine.process_frame(&frame_of(&[SyntheticHand::left(300, 100).pinched()]));
    assert_eq!(closed.driver.unwrap().level, 0.0);

    let wide = engine.process_frame(&frame_of(&[SyntheticHand::left(300, 100).with_gap(110)]));
    assert_eq!(wide.driver.unwrap().level, 50.0);
}

#[test]
fn test_shared_engine_capture_and_poller() {
    let mut script = GestureScript::new();
    for i in 0..20 {
        script = script.click(200 + i * 5, 100).empty();
    }

    let engine = SharedEngine::default();
    let done = Arc::new(AtomicBool::new(false));

    let capture = {
        let engine = engine.clone();
        let done = Arc::clone(&done);
        thread::spawn(move || {
            for frame in script.frames() {
                engine.process_frame(frame);
                thread::yield_now();
            }
            done.store(true, Ordering::Release);
        })
    };

    let poller = {
        let engine = engine.clone();
        let done = Arc::clone(&done);
        thread::spawn(move || {
            let mut seen = Vec::new();
            while !done.load(Ordering::Acquire) {
                let event = engine.poll_gesture();
                if !event.is_none() {
                    seen.push(event);
                }
                thread::yield_now();
            }
            seen
        })
    };

    capture.join().unwrap();
    let mut seen = poller.join().unwrap();
    let last = engine.poll_gesture();
    if !last.is_none() {
        seen.push(last);
    }

    let stats = engine.stats();
    assert_eq!(stats.events_emitted, 20);
    assert_eq!(stats.events_polled as usize, seen.len());
    assert!(!seen.is_empty() && seen.len() <= 20);
    assert!(seen.iter().all(|e| *e == GestureEvent::Click));
    assert_eq!(engine.cursor_state(), CursorState::Idle);
}

proptest! {
    #[test]
    fn prop_below_zone_stays_idle(
        x in 100i32..540,
        y in 160i32..360,
        gaps in prop::collection::vec(0i32..120, 1..20),
    ) {
        let mut engine = GestureEngine::new();
        for gap in gaps {
            let hand = SyntheticHand::left(x, y).with_gap(gap);
            engine.process_frame(&frame_of(&[hand]));
            prop_assert_eq!(engine.cursor_state(), CursorState::Idle);
        }
        prop_assert_eq!(engine.poll_gesture(), GestureEvent::None);
    }

    #[test]
    fn prop_one_cycle_one_event(
        seed in any::<u64>(),
        x in 150i32..450,
        y in 60i32..110,
        hold in 0usize..5,
        dx in -40i32..40,
        dy in -30i32..30,
    ) {
        let mut jitter = Jitter::new(seed, 2);
        let mut engine = GestureEngine::new();
        let mut frame = |hand: SyntheticHand| {
            Frame::new(
                FRAME_WIDTH,
                FRAME_HEIGHT,
                vec![hand.raw_jittered(FRAME_WIDTH, FRAME_HEIGHT, &mut jitter)],
            )
        };

        let start = SyntheticHand::left(x, y);
        let mut frames = vec![frame(start.pinched())];
        for _ in 0..hold {
            frames.push(frame(start.pinched()));
        }
        frames.push(frame(start.at(x + dx, y + dy).released()));

        for f in &frames {
            engine.process_frame(f);
        }
        prop_assert_eq!(engine.stats().events_emitted, 1);
        prop_assert!(!engine.poll_gesture().is_none());
        prop_assert_eq!(engine.poll_gesture(), GestureEvent::None);
        prop_assert_eq!(engine.cursor_state(), CursorState::Idle);
    }
}

#![no_main]

use libfuzzer_sys::fuzz_target;

use pinch_core::Frame;
use pinch_runtime::GestureEngine;

fuzz_target!(|data: &[u8]| {
    if let Ok(frame) = serde_json::from_slice::<Frame>(data) {
        let mut engine = GestureEngine::new();
        engine.process_frame(&frame);
        let _ = engine.poll_gesture();
    }
});

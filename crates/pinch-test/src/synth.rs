//! Synthetic hands
//!
//! Hands are laid out in pixel space around the pinch midpoint and converted
//! to normalized coordinates at the centre of each pixel, so preprocessing
//! recovers the exact pixel positions.
//!
//! At scale 1 an upright hand spans roughly 85x120 px with a closed pinch,
//! which sits inside the default depth band. [`SyntheticHand::far`] and
//! [`SyntheticHand::near`] fall below and above it.

use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;

use pinch_core::{Frame, NormalizedPoint, RawHand, LANDMARKS_PER_HAND};

/// Capture size used by the scenarios
pub const FRAME_WIDTH: u32 = 640;
pub const FRAME_HEIGHT: u32 = 480;

/// Pinch gap of a closed pinch, well under the enter threshold
pub const CLOSED_GAP: i32 = 10;
/// Pinch gap of an open pinch, well over the enter threshold
pub const OPEN_GAP: i32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handedness {
    /// Thumb tip left of the pinky tip in the image
    Left,
    /// Mirror image of `Left`
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandPose {
    /// All five fingers extended
    OpenPalm,
    /// All five fingers folded. Tips stay put, so the pinch is unchanged.
    Fist,
}

/// Parametric upright hand
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SyntheticHand {
    /// Pixel position of the pinch midpoint
    pub center: (i32, i32),
    /// Horizontal thumb tip to index tip distance in pixels
    pub gap: i32,
    /// Size multiplier for everything except the gap
    pub scale: f32,
    pub handedness: Handedness,
    pub pose: HandPose,
}

impl SyntheticHand {
    /// Open left hand with an open pinch
    pub fn left(x: i32, y: i32) -> Self {
        SyntheticHand {
            center: (x, y),
            gap: OPEN_GAP,
            scale: 1.0,
            handedness: Handedness::Left,
            pose: HandPose::OpenPalm,
        }
    }

    /// Open right hand with an open pinch
    pub fn right(x: i32, y: i32) -> Self {
        SyntheticHand {
            handedness: Handedness::Right,
            ..Self::left(x, y)
        }
    }

    pub fn pinched(self) -> Self {
        self.with_gap(CLOSED_GAP)
    }

    pub fn released(self) -> Self {
        self.with_gap(OPEN_GAP)
    }

    pub fn with_gap(mut self, gap: i32) -> Self {
        self.gap = gap;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_pose(mut self, pose: HandPose) -> Self {
        self.pose = pose;
        self
    }

    pub fn at(mut self, x: i32, y: i32) -> Self {
        self.center = (x, y);
        self
    }

    /// Too small for the default depth band
    pub fn far(self) -> Self {
        self.with_scale(0.5)
    }

    /// Too large for the default depth band
    pub fn near(self) -> Self {
        self.with_scale(2.5)
    }

    /// Pixel position of every landmark, indexed by id
    pub fn pixels(&self) -> [(i32, i32); LANDMARKS_PER_HAND] {
        let s = |v: i32| (v as f32 * self.scale).round() as i32;
        let thumb_tip_dx = -(self.gap / 2);
        let index_tip_dx = self.gap - self.gap / 2;
        let (thumb_ip_dx, pip_dy) = match self.pose {
            HandPose::OpenPalm => (thumb_tip_dx + s(15), s(40)),
            HandPose::Fist => (thumb_tip_dx - s(15), s(-20)),
        };

        // offsets relative to the pinch midpoint, left hand
        let mut offsets = [(0, s(100)); LANDMARKS_PER_HAND];
        offsets[1] = (s(-30), s(80));
        offsets[2] = (s(-40), s(60));
        offsets[3] = (thumb_ip_dx, s(30));
        offsets[4] = (thumb_tip_dx, 0);
        offsets[5] = (0, s(70));
        offsets[6] = (0, pip_dy);
        offsets[7] = (index_tip_dx, s(20));
        offsets[8] = (index_tip_dx, 0);
        offsets[9] = (s(10), s(70));
        offsets[10] = (s(10), pip_dy);
        offsets[11] = (s(10), s(10));
        offsets[12] = (s(10), s(-20));
        offsets[13] = (s(20), s(70));
        offsets[14] = (s(20), pip_dy);
        offsets[15] = (s(20), s(20));
        offsets[16] = (s(20), 0);
        offsets[17] = (s(80), s(70));
        offsets[18] = (s(80), pip_dy);
        offsets[19] = (s(80), s(25));
        offsets[20] = (s(80), s(10));

        let (cx, cy) = self.center;
        let flip = match self.handedness {
            Handedness::Left => 1,
            Handedness::Right => -1,
        };
        offsets.map(|(dx, dy)| (cx + flip * dx, cy + dy))
    }

    pub fn raw(&self, width: u32, height: u32) -> RawHand {
        to_raw(&self.pixels(), width, height)
    }

    /// Same hand with every landmark displaced by seeded noise
    pub fn raw_jittered(&self, width: u32, height: u32, jitter: &mut Jitter) -> RawHand {
        let pixels = self.pixels().map(|p| jitter.apply(p));
        to_raw(&pixels, width, height)
    }
}

/// Seeded per-landmark pixel noise
pub struct Jitter {
    rng: StdRng,
    dist: Uniform<i32>,
}

impl Jitter {
    /// Noise uniform in `-amplitude..=amplitude` on each axis
    pub fn new(seed: u64, amplitude: i32) -> Self {
        let amplitude = amplitude.abs();
        Jitter {
            rng: StdRng::seed_from_u64(seed),
            dist: Uniform::new_inclusive(-amplitude, amplitude),
        }
    }

    pub fn apply(&mut self, (x, y): (i32, i32)) -> (i32, i32) {
        (
            x + self.dist.sample(&mut self.rng),
            y + self.dist.sample(&mut self.rng),
        )
    }
}

/// Convert pixel positions to a raw hand, sampling each pixel at its centre
pub fn to_raw(pixels: &[(i32, i32)], width: u32, height: u32) -> RawHand {
    RawHand::new(
        pixels
            .iter()
            .map(|&(x, y)| {
                NormalizedPoint::new(
                    (x as f32 + 0.5) / width as f32,
                    (y as f32 + 0.5) / height as f32,
                )
            })
            .collect(),
    )
}

/// Frame of the default capture size holding `hands` in detection order
pub fn frame_of(hands: &[SyntheticHand]) -> Frame {
    Frame::new(
        FRAME_WIDTH,
        FRAME_HEIGHT,
        hands
            .iter()
            .map(|h| h.raw(FRAME_WIDTH, FRAME_HEIGHT))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pinch_core::{pos, Point};
    use pinch_hand::{finger_states, is_left, preprocess_hand, DepthGate};

    fn preprocess(hand: &SyntheticHand) -> pinch_hand::Hand {
        preprocess_hand(&hand.raw(FRAME_WIDTH, FRAME_HEIGHT), FRAME_WIDTH, FRAME_HEIGHT)
    }

    #[test]
    fn test_pixels_survive_normalization() {
        let synth = SyntheticHand::left(200, 100).pinched();
        let hand = preprocess(&synth);
        let pixels = synth.pixels();
        for landmark in &hand.landmarks {
            let (x, y) = pixels[landmark.id as usize];
            assert_eq!(landmark.point(), Point::new(x, y));
        }
    }

    #[test]
    fn test_handedness() {
        assert!(is_left(&preprocess(&SyntheticHand::left(200, 100)).landmarks));
        assert!(!is_left(&preprocess(&SyntheticHand::right(200, 100)).landmarks));
    }

    #[test]
    fn test_poses() {
        for synth in [SyntheticHand::left(200, 100), SyntheticHand::right(400, 100)] {
            let open = finger_states(&preprocess(&synth).landmarks);
            assert_eq!(open.as_slice(), &[true; 5]);

            let fist = finger_states(&preprocess(&synth.with_pose(HandPose::Fist)).landmarks);
            assert_eq!(fist.as_slice(), &[false; 5]);
        }
    }

    #[test]
    fn test_scales_against_depth_band() {
        let gate = DepthGate::default();
        let base = SyntheticHand::left(300, 200).pinched();
        assert!(gate.admits(&preprocess(&base).bbox));
        assert!(gate.admits(&preprocess(&base.released()).bbox));
        assert!(!gate.admits(&preprocess(&base.far()).bbox));
        assert!(!gate.admits(&preprocess(&base.near()).bbox));
    }

    #[test]
    fn test_pinch_points() {
        let hand = preprocess(&SyntheticHand::left(200, 100).with_gap(20));
        let thumb = hand.landmarks[pos::THUMB_TIP].point();
        let index = hand.landmarks[pos::INDEX_TIP].point();
        assert_eq!(thumb.distance(&index), 20.0);
        assert_eq!(thumb.midpoint(&index), Point::new(200, 100));
    }

    #[test]
    fn test_jitter_is_seeded() {
        let synth = SyntheticHand::left(200, 100);
        let a = synth.raw_jittered(FRAME_WIDTH, FRAME_HEIGHT, &mut Jitter::new(7, 3));
        let b = synth.raw_jittered(FRAME_WIDTH, FRAME_HEIGHT, &mut Jitter::new(7, 3));
        assert_eq!(a, b);

        let mut jitter = Jitter::new(1, 2);
        for _ in 0..100 {
            let (x, y) = jitter.apply((50, 50));
            assert!((48..=52).contains(&x) && (48..=52).contains(&y));
        }
    }
}

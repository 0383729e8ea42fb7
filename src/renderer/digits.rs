//! Seven-segment score display
//!
//! Segment bits: 0 top, 1 middle, 2 bottom, 3 upper-left, 4 upper-right,
//! 5 lower-left, 6 lower-right.

use glam::Vec2;

use super::instances::{Instance, colors};

/// x of the rightmost digit's center
const SCORE_RIGHT_X: f32 = 3.5;
/// y of the top segment
const SCORE_TOP_Y: f32 = 3.8;
const DIGIT_STEP: f32 = 0.6;
const SEGMENT_LONG: f32 = 0.4;
const SEGMENT_SHORT: f32 = 0.1;

/// Lit segments for a decimal digit. Anything above 9 is blank.
pub fn segment_mask(digit: u8) -> u8 {
    if digit > 9 {
        return 0;
    }
    let lit = [
        !matches!(digit, 1 | 4),
        !matches!(digit, 0 | 1 | 7),
        !matches!(digit, 1 | 4 | 7),
        !matches!(digit, 1 | 2 | 3 | 7),
        !matches!(digit, 5 | 6),
        matches!(digit, 0 | 2 | 6 | 8),
        digit != 2,
    ];
    lit.iter()
        .enumerate()
        .fold(0, |mask, (bit, &on)| if on { mask | (1 << bit) } else { mask })
}

/// Decimal digits, most significant first. Zero shows a single 0.
pub fn score_digits(score: u64) -> Vec<u8> {
    if score == 0 {
        return vec![0];
    }
    let mut digits = Vec::new();
    let mut rest = score;
    while rest > 0 {
        digits.push((rest % 10) as u8);
        rest /= 10;
    }
    digits.reverse();
    digits
}

/// Offset and size of each segment relative to the digit center
fn segment_rect(bit: usize) -> (Vec2, Vec2) {
    let half = SEGMENT_LONG / 2.0;
    let across = Vec2::new(SEGMENT_LONG, SEGMENT_SHORT);
    let upright = Vec2::new(SEGMENT_SHORT, SEGMENT_LONG);
    match bit {
        0 => (Vec2::new(0.0, SEGMENT_LONG), across),
        1 => (Vec2::ZERO, across),
        2 => (Vec2::new(0.0, -SEGMENT_LONG), across),
        3 => (Vec2::new(-half, half), upright),
        4 => (Vec2::new(half, half), upright),
        5 => (Vec2::new(-half, -half), upright),
        _ => (Vec2::new(half, -half), upright),
    }
}

/// Score drawn right-aligned in the top-right corner
pub fn score_instances(score: u64) -> Vec<Instance> {
    let digits = score_digits(score);
    let count = digits.len();
    let mut out = Vec::new();
    for (i, &digit) in digits.iter().enumerate() {
        let slot = (count - 1 - i) as f32;
        let center = Vec2::new(
            SCORE_RIGHT_X - slot * DIGIT_STEP,
            SCORE_TOP_Y - SEGMENT_LONG,
        );
        let mask = segment_mask(digit);
        for bit in 0..7 {
            if mask & (1 << bit) != 0 {
                let (offset, size) = segment_rect(bit);
                out.push(Instance::rect(center + offset, size, 0.0, colors::NEUTRAL));
            }
        }
    }
    out
}

/*
 * Connection Module
 *
 * This module decides which particles get joined by a line and how
 * thick that line is.
 *
 * Two pair strategies are available:
 * - Exhaustive: every unordered pair is tested
 * - Windowed: positions are sorted by distance to the origin and each
 *   particle is only tested against the next few in that order. This is an
 *   approximation: two particles can be close on screen but far apart in
 *   origin distance, and such pairs are never connected.
 */

use nannou::prelude::*;

// Smallest distance used as a divisor in the stroke formulas
pub const MIN_DISTANCE: f32 = 1e-3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PairStrategy {
    Exhaustive,
    Windowed { window: usize },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StrokePolicy {
    // |d/100 - 1| capped at 0.5
    Falloff,
    // threshold/d * 0.2 capped at 1.0
    Proximity { threshold: f32 },
}

impl StrokePolicy {
    pub const FALLOFF_MAX: f32 = 0.5;
    pub const PROXIMITY_MAX: f32 = 1.0;

    pub fn max_width(&self) -> f32 {
        match self {
            StrokePolicy::Falloff => Self::FALLOFF_MAX,
            StrokePolicy::Proximity { .. } => Self::PROXIMITY_MAX,
        }
    }

    // Proximity scales against the pair threshold, so keep it in step
    pub fn with_threshold(self, threshold: f32) -> Self {
        match self {
            StrokePolicy::Falloff => StrokePolicy::Falloff,
            StrokePolicy::Proximity { .. } => StrokePolicy::Proximity { threshold },
        }
    }

    pub fn width(&self, distance: f32) -> f32 {
        let d = if distance.is_nan() {
            MIN_DISTANCE
        } else {
            distance.max(MIN_DISTANCE)
        };

        let width = match *self {
            StrokePolicy::Falloff => (d / 100.0 - 1.0).abs(),
            StrokePolicy::Proximity { threshold } => (threshold.max(0.0) / d) * 0.2,
        };

        width.clamp(0.0, self.max_width())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: Vec2,
    pub to: Vec2,
    pub weight: f32,
}

pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

// Join a and b if they are closer than max_distance
pub fn link(a: Vec2, b: Vec2, max_distance: f32, policy: &StrokePolicy) -> Option<Segment> {
    let d = distance(a, b);
    if d < max_distance {
        Some(Segment {
            from: a,
            to: b,
            weight: policy.width(d),
        })
    } else {
        None
    }
}

impl PairStrategy {
    // The windowed strategy only makes sense on origin-sorted positions
    pub fn arrange(&self, positions: &mut [Vec2]) {
        if let PairStrategy::Windowed { .. } = self {
            positions.sort_by(|a, b| a.length().total_cmp(&b.length()));
        }
    }

    // Candidate index pairs (i, j) with i < j among n arranged positions
    pub fn pairs(&self, n: usize) -> impl Iterator<Item = (usize, usize)> {
        let window = match *self {
            PairStrategy::Exhaustive => n,
            PairStrategy::Windowed { window } => window,
        };

        (0..n).flat_map(move |i| ((i + 1)..i.saturating_add(window).min(n)).map(move |j| (i, j)))
    }

    pub fn candidate_count(&self, n: usize) -> usize {
        self.pairs(n).count()
    }

    // Arrange the positions, then collect a segment for every candidate pair
    // closer than max_distance
    pub fn segments(
        &self,
        positions: &mut [Vec2],
        max_distance: f32,
        policy: &StrokePolicy,
    ) -> Vec<Segment> {
        self.arrange(positions);

        let positions = &*positions;
        self.pairs(positions.len())
            .filter_map(|(i, j)| link(positions[i], positions[j], max_distance, policy))
            .collect()
    }
}

//! Zero-order-hold reconstruction.
//!
//! The reconstructed signal is a piecewise-constant function: each quantized
//! sample holds its value from its own instant until the next sample, and
//! the last one holds until the end of the signal. Drawing the staircase is
//! left to the renderer; [`ZohSignal::to_points`] produces the point list a
//! plain line plot needs.

use serde::{Deserialize, Serialize};

use super::quantizer::QuantizedPoint;
use super::sampler::TIME_EPSILON;
use super::signal::Point;

/// One flat step of the staircase.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoldSegment {
    pub start: f64,
    /// End of the hold: the next sample's instant, or the duration for the
    /// last segment.
    pub end: f64,
    pub value: f64,
    pub level: u32,
}

impl HoldSegment {
    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

/// Piecewise-constant reconstruction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ZohSignal {
    pub segments: Vec<HoldSegment>,
}

impl ZohSignal {
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Value held at time `t`, or `None` outside `[first start, last end]`.
    ///
    /// Segments are half-open `[start, end)` except the last, which includes
    /// its end.
    pub fn value_at(&self, t: f64) -> Option<f64> {
        let first = self.segments.first()?;
        let last = self.segments.last()?;
        if t < first.start || t > last.end {
            return None;
        }
        // Number of segments starting at or before t
        let idx = self.segments.partition_point(|s| s.start <= t);
        self.segments.get(idx.saturating_sub(1)).map(|s| s.value)
    }

    /// Staircase as a point list: each step start, a hold point just before
    /// the next step, and a final hold at the duration.
    pub fn to_points(&self) -> Vec<Point> {
        let mut points = Vec::with_capacity(self.segments.len() * 2);
        let n = self.segments.len();
        for (i, seg) in self.segments.iter().enumerate() {
            points.push(Point::new(seg.start, seg.value));
            if i + 1 < n {
                points.push(Point::new(seg.end - TIME_EPSILON, seg.value));
            } else {
                points.push(Point::new(seg.end, seg.value));
            }
        }
        points
    }

    /// Like [`to_points`](Self::to_points), but the final hold point is only
    /// emitted when the last sample lies strictly before the duration.
    pub fn to_step_points(&self) -> Vec<Point> {
        let mut points = self.to_points();
        if let Some(last) = self.segments.last() {
            if last.start >= last.end {
                points.pop();
            }
        }
        points
    }
}

/// Build the zero-order-hold staircase for `quantized` over `[0, duration]`.
pub fn reconstruct_signal(quantized: &[QuantizedPoint], duration: f64) -> ZohSignal {
    if quantized.is_empty() {
        tracing::debug!("Reconstruction skipped: no quantized samples");
        return ZohSignal::default();
    }

    let segments = quantized
        .iter()
        .enumerate()
        .map(|(i, p)| HoldSegment {
            start: p.time,
            end: quantized.get(i + 1).map_or(duration, |next| next.time),
            value: p.value,
            level: p.level,
        })
        .collect();

    ZohSignal { segments }
}

use glam::DVec2;

/// Last accepted pointer position and time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionSample {
    pub position: DVec2,
    pub timestamp_ms: f64,
}

/// Pointer speed estimate in px/ms.
///
/// There is no smoothing and no decay: after a pause the previous
/// velocity stays in place until the next qualifying move replaces it.
#[derive(Clone, Debug)]
pub struct MotionTracker {
    last: Option<MotionSample>,
    velocity: f64,
    min_interval_ms: f64,
}

impl MotionTracker {
    pub fn new(min_interval_ms: f64) -> Self {
        Self {
            last: None,
            velocity: 0.0,
            min_interval_ms,
        }
    }

    /// Feed one raw movement sample. Returns the new velocity when it was
    /// recomputed, `None` when the sample was the first one or too close
    /// to the previous one. The stored position and time always advance.
    pub fn on_move(&mut self, x: f64, y: f64, timestamp_ms: f64) -> Option<f64> {
        let position = DVec2::new(x, y);
        let recomputed = self.last.and_then(|last| {
            let dt = timestamp_ms - last.timestamp_ms;
            // also rejects NaN
            if !(dt > 0.0) || dt < self.min_interval_ms {
                return None;
            }
            Some(position.distance(last.position) / dt)
        });
        if let Some(v) = recomputed {
            self.velocity = v;
        }
        self.last = Some(MotionSample {
            position,
            timestamp_ms,
        });
        recomputed
    }

    #[inline]
    pub fn current_velocity(&self) -> f64 {
        self.velocity
    }

    #[inline]
    pub fn last_sample(&self) -> Option<MotionSample> {
        self.last
    }

    #[inline]
    pub fn min_interval_ms(&self) -> f64 {
        self.min_interval_ms
    }
}

//! Font-size zoom animation.

/// Quadratic ease-in-out: value at time `t` of a tween from `b` by `c` over
/// duration `d`.
pub fn ease_in_out_quad(b: f32, d: f32, c: f32, t: f32) -> f32 {
    if d <= 0.0 {
        return b + c;
    }
    let p = t / d;
    if p / 2.0 < 1.0 {
        c / 2.0 * p * p + b
    } else {
        -c / 2.0 * (p * (p - 2.0) - 1.0) + b
    }
}

/// Time advanced per rendered frame.
pub const FRAME_STEP: f32 = 0.5;

/// Moves a font size toward a target one frame at a time.
///
/// Each frame adds (or, zooming out, subtracts) the eased increment for the
/// elapsed time, so the change starts slowly and accelerates. The animation
/// ends on the first frame that reaches or passes the target, which it then
/// snaps to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomAnimation {
    target: f32,
    elapsed: f32,
    zoom_in: bool,
}

impl ZoomAnimation {
    pub fn new(from: f32, target: f32) -> Self {
        Self {
            target,
            elapsed: 0.0,
            zoom_in: target >= from,
        }
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Advances one frame from `size`. Returns the new size and whether the
    /// animation has finished.
    pub fn step(&mut self, size: f32) -> (f32, bool) {
        let next = if self.zoom_in {
            ease_in_out_quad(size, self.target, self.target, self.elapsed)
        } else {
            size - ease_in_out_quad(0.0, self.target, self.target, self.elapsed)
        };
        self.elapsed += FRAME_STEP;

        let done = if self.zoom_in {
            next >= self.target
        } else {
            next <= self.target
        };
        if done {
            (self.target.round(), true)
        } else {
            (next, false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(from: f32, target: f32) -> Vec<f32> {
        let mut anim = ZoomAnimation::new(from, target);
        let mut size = from;
        let mut frames = Vec::new();
        for _ in 0..1000 {
            let (next, done) = anim.step(size);
            size = next;
            frames.push(size);
            if done {
                return frames;
            }
        }
        panic!("zoom from {} to {} never finished", from, target);
    }

    #[test]
    fn ease_starts_at_begin_value() {
        assert_eq!(ease_in_out_quad(18.0, 20.0, 20.0, 0.0), 18.0);
        assert_eq!(ease_in_out_quad(0.0, 0.0, 5.0, 1.0), 5.0);
    }

    #[test]
    fn ease_second_half_approaches_begin_plus_change() {
        // at t = 2d the curve has covered the whole change
        let v = ease_in_out_quad(0.0, 10.0, 4.0, 20.0);
        assert!((v - 2.0).abs() < 1e-4, "{}", v);
    }

    #[test]
    fn zoom_in_is_monotonic_and_lands_on_target() {
        let frames = run(18.0, 20.0);
        assert!(frames.windows(2).all(|w| w[1] >= w[0]));
        assert_eq!(*frames.last().unwrap(), 20.0);
        assert!(frames.len() > 2);
    }

    #[test]
    fn zoom_out_is_monotonic_and_lands_on_target() {
        let frames = run(20.0, 18.0);
        assert!(frames.windows(2).all(|w| w[1] <= w[0]));
        assert_eq!(*frames.last().unwrap(), 18.0);
    }

    #[test]
    fn zero_distance_finishes_immediately() {
        let mut anim = ZoomAnimation::new(18.0, 18.0);
        assert_eq!(anim.step(18.0), (18.0, true));
    }
}

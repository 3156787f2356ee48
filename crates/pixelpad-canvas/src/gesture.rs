//! Two-contact gesture classification.
//!
//! Given the current positions of two contacts and their movement over the
//! current frame, decide whether the user is panning, rotating or zooming.
//! Mixed motion resolves to the single strongest signal; gestures are never
//! blended.

use pixelpad_engine::coords::Vec2;

/// A classified navigation gesture with its per-frame delta.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Gesture {
    /// Translation of the contacts' midpoint, logical px.
    Pan(Vec2),
    /// Signed rotation in degrees, clockwise positive.
    Rotate(f32),
    /// Ratio of current to previous contact distance.
    Zoom(f32),
}

/// Classification output for one frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GestureResult {
    pub gesture: Gesture,
    /// Midpoint supplied by the caller; the natural pivot for the gesture.
    pub anchor: Vec2,
}

/// Decision thresholds for [`GestureThresholds::classify`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GestureThresholds {
    /// Rotation below this many degrees counts as "no rotation".
    pub rotate_deg: f32,
    /// `|scale - 1|` below this counts as "no zoom".
    pub scale_epsilon: f32,
    /// Minimum cosine between the two movement directions for a pan.
    pub pan_direction_dot: f32,
    /// Maximum length of `movement1 - movement2` for a pan, logical px.
    pub pan_max_divergence: f32,
}

impl Default for GestureThresholds {
    fn default() -> Self {
        Self {
            rotate_deg: 3.0,
            scale_epsilon: 0.05,
            pan_direction_dot: 0.98,
            pan_max_divergence: 8.0,
        }
    }
}

/// Per-frame motion measurements of a contact pair.
#[derive(Debug, Copy, Clone, PartialEq)]
struct Motion {
    translation: Vec2,
    scale_change: f32,
    angle_deg: f32,
    move_dot: f32,
    move_diff: f32,
}

impl Motion {
    fn measure(p1: Vec2, p2: Vec2, m1: Vec2, m2: Vec2) -> Self {
        let prev1 = p1 - m1;
        let prev2 = p2 - m2;

        let translation = p1.midpoint(p2) - prev1.midpoint(prev2);

        let prev_dist = (prev1 - prev2).length();
        let curr_dist = (p1 - p2).length();
        let scale_change = if prev_dist == 0.0 { 1.0 } else { curr_dist / prev_dist };

        let angle_deg = (prev2 - prev1).signed_angle_deg(p2 - p1);

        Self {
            translation,
            scale_change,
            angle_deg,
            move_dot: m1.normalized().dot(m2.normalized()),
            move_diff: (m1 - m2).length(),
        }
    }
}

impl GestureThresholds {
    /// Classifies one frame of a two-contact gesture.
    ///
    /// `p1`/`p2` are current positions, `m1`/`m2` the movement of each contact
    /// over the frame. Pure and deterministic.
    ///
    /// Priority: clear rotation, clear zoom, coherent pan, then whichever of
    /// rotation (degrees) and zoom (`|scale - 1| * 180`) is larger. Pan is never
    /// the fallback.
    pub fn classify(&self, midpoint: Vec2, p1: Vec2, p2: Vec2, m1: Vec2, m2: Vec2) -> GestureResult {
        let m = Motion::measure(p1, p2, m1, m2);

        let angle = m.angle_deg.abs();
        let zoom = (m.scale_change - 1.0).abs();

        let no_rotation = angle < self.rotate_deg;
        let no_zoom = zoom < self.scale_epsilon;

        let gesture = if angle > self.rotate_deg && no_zoom {
            Gesture::Rotate(m.angle_deg)
        } else if zoom > self.scale_epsilon && no_rotation {
            Gesture::Zoom(m.scale_change)
        } else if m.move_dot > self.pan_direction_dot
            && m.move_diff < self.pan_max_divergence
            && no_rotation
            && no_zoom
        {
            Gesture::Pan(m.translation)
        } else if angle >= zoom * 180.0 {
            Gesture::Rotate(m.angle_deg)
        } else {
            Gesture::Zoom(m.scale_change)
        };

        GestureResult { gesture, anchor: midpoint }
    }
}

/// [`GestureThresholds::classify`] with the default thresholds.
pub fn classify(midpoint: Vec2, p1: Vec2, p2: Vec2, m1: Vec2, m2: Vec2) -> GestureResult {
    GestureThresholds::default().classify(midpoint, p1, p2, m1, m2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f32, y: f32) -> Vec2 { Vec2::new(x, y) }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    /// Classifies a move from `(prev1, prev2)` to `(p1, p2)`.
    fn step(prev1: Vec2, prev2: Vec2, p1: Vec2, p2: Vec2) -> Gesture {
        classify(p1.midpoint(p2), p1, p2, p1 - prev1, p2 - prev2).gesture
    }

    // ── clear gestures ────────────────────────────────────────────────────

    #[test]
    fn parallel_motion_is_pan() {
        let g = step(v(100.0, 100.0), v(200.0, 100.0), v(105.0, 100.0), v(205.0, 100.0));
        match g {
            Gesture::Pan(d) => {
                assert!(approx(d.x, 5.0));
                assert!(approx(d.y, 0.0));
            }
            other => panic!("expected pan, got {other:?}"),
        }
    }

    #[test]
    fn turning_about_midpoint_is_rotate() {
        let c = v(300.0, 200.0);
        let prev1 = c + v(-50.0, 0.0);
        let prev2 = c + v(50.0, 0.0);
        let p1 = prev1.rotate_about(c, 10.0);
        let p2 = prev2.rotate_about(c, 10.0);

        match step(prev1, prev2, p1, p2) {
            Gesture::Rotate(deg) => assert!(approx(deg, 10.0), "deg = {deg}"),
            other => panic!("expected rotate, got {other:?}"),
        }
    }

    #[test]
    fn counter_clockwise_turn_is_negative() {
        let c = v(0.0, 0.0);
        let prev1 = v(-40.0, 10.0);
        let prev2 = v(40.0, -10.0);
        let g = step(prev1, prev2, prev1.rotate_about(c, -8.0), prev2.rotate_about(c, -8.0));
        match g {
            Gesture::Rotate(deg) => assert!(approx(deg, -8.0), "deg = {deg}"),
            other => panic!("expected rotate, got {other:?}"),
        }
    }

    #[test]
    fn spreading_apart_is_zoom() {
        let g = step(v(250.0, 300.0), v(350.0, 300.0), v(240.0, 300.0), v(360.0, 300.0));
        match g {
            Gesture::Zoom(ratio) => assert!(approx(ratio, 1.2), "ratio = {ratio}"),
            other => panic!("expected zoom, got {other:?}"),
        }
    }

    #[test]
    fn pinching_in_is_zoom_below_one() {
        let g = step(v(0.0, 0.0), v(0.0, 200.0), v(0.0, 20.0), v(0.0, 180.0));
        assert_eq!(g, Gesture::Zoom(0.8));
    }

    // ── mixed motion ──────────────────────────────────────────────────────

    #[test]
    fn mixed_motion_prefers_stronger_zoom() {
        // 4 degrees and a 6% spread: 4 < 0.06 * 180.
        let c = v(0.0, 0.0);
        let p1 = v(-53.0, 0.0).rotate_about(c, 4.0);
        let p2 = v(53.0, 0.0).rotate_about(c, 4.0);
        match step(v(-50.0, 0.0), v(50.0, 0.0), p1, p2) {
            Gesture::Zoom(r) => assert!(approx(r, 1.06)),
            other => panic!("expected zoom, got {other:?}"),
        }
    }

    #[test]
    fn mixed_motion_prefers_stronger_rotation() {
        // 12 degrees and a 6% spread: 12 > 0.06 * 180.
        let c = v(0.0, 0.0);
        let p1 = v(-53.0, 0.0).rotate_about(c, 12.0);
        let p2 = v(53.0, 0.0).rotate_about(c, 12.0);
        match step(v(-50.0, 0.0), v(50.0, 0.0), p1, p2) {
            Gesture::Rotate(deg) => assert!(approx(deg, 12.0)),
            other => panic!("expected rotate, got {other:?}"),
        }
    }

    #[test]
    fn diverging_translation_is_never_pan() {
        // Same direction but 10px apart in speed; the fallback picks rotate/zoom.
        let g = step(v(0.0, 0.0), v(0.0, 1000.0), v(20.0, 0.0), v(10.0, 1000.0));
        assert!(!matches!(g, Gesture::Pan(_)), "{g:?}");
    }

    #[test]
    fn stationary_contacts_fall_back_to_zero_rotation() {
        let g = step(v(1.0, 1.0), v(9.0, 9.0), v(1.0, 1.0), v(9.0, 9.0));
        assert_eq!(g, Gesture::Rotate(0.0));
    }

    // ── degenerate input ──────────────────────────────────────────────────

    #[test]
    fn coincident_contacts_do_not_produce_nan() {
        let p = v(50.0, 50.0);
        let r = classify(p, p, p, Vec2::zero(), Vec2::zero());
        match r.gesture {
            Gesture::Pan(d) => assert!(d.is_finite()),
            Gesture::Rotate(a) => assert!(a.is_finite()),
            Gesture::Zoom(s) => assert!(s.is_finite()),
        }
    }

    #[test]
    fn zero_previous_distance_means_unit_scale() {
        // Contacts started on the same spot and moved apart horizontally.
        let r = classify(v(0.0, 0.0), v(-5.0, 0.0), v(5.0, 0.0), v(-5.0, 0.0), v(5.0, 0.0));
        assert!(!matches!(r.gesture, Gesture::Zoom(_)));
    }

    #[test]
    fn classification_is_deterministic() {
        let args = (v(12.0, 40.0), v(3.0, 30.0), v(21.0, 50.0), v(1.5, -2.0), v(-0.5, 4.0));
        let a = classify(args.0, args.1, args.2, args.3, args.4);
        let b = classify(args.0, args.1, args.2, args.3, args.4);
        assert_eq!(a, b);
        assert_eq!(a.anchor, args.0);
    }

    #[test]
    fn custom_thresholds_are_honored() {
        // A 2-degree turn is noise by default but clear with a 1-degree threshold.
        let c = v(0.0, 0.0);
        let prev1 = v(-50.0, 0.0);
        let prev2 = v(50.0, 0.0);
        let p1 = prev1.rotate_about(c, 2.0);
        let p2 = prev2.rotate_about(c, 2.0);
        let t = GestureThresholds { rotate_deg: 1.0, ..Default::default() };
        let r = t.classify(c, p1, p2, p1 - prev1, p2 - prev2);
        assert!(matches!(r.gesture, Gesture::Rotate(d) if approx(d, 2.0)));
    }
}

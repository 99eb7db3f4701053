//! Ambient decorative motion: floating hearts and animal glyphs.
//!
//! A `ParticleField` is generated once when its owning view mounts and is
//! immutable afterwards; re-rendering the same view must never reshuffle it.
//! Motion itself is a pure function of a particle's stored parameters and
//! elapsed time, so the rendering layer just samples positions every frame.
//! Nothing here feeds back into application state.

use std::f32::consts::TAU;

/// Hearts per batch.
pub const HEART_COUNT: usize = 15;

/// Animal glyphs per batch.
pub const GLYPH_COUNT: usize = 12;

/// Glyph set, assigned round-robin by particle index.
pub const GLYPHS: [&str; 4] = ["🐱", "🐶", "🐰", "🐦"];

/// Kind-specific visual parameters drawn at generation time.
#[derive(Debug, Clone, PartialEq)]
pub enum ParticleKind {
    /// Upward-drifting heart; fades in to `peak_opacity`, then out.
    Heart { peak_opacity: f32 },
    /// Oscillating animal emoji with a random base rotation (degrees).
    Glyph {
        emoji: &'static str,
        base_rotation: f32,
    },
}

/// One decorative particle. All fields are drawn independently and uniformly
/// from the documented ranges and never change after generation.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Unique within a generation batch; used only as a stable draw key.
    pub id: usize,
    pub kind: ParticleKind,
    /// Horizontal position, percent of the viewport width (0..=100).
    pub x: f32,
    /// Vertical position, percent of the viewport height (0..=100).
    /// Hearts ignore this: they always travel bottom to top.
    pub y: f32,
    /// Glyph font size / heart extent, in points.
    pub size: f32,
    /// Seconds for one full animation cycle.
    pub duration: f32,
    /// Seconds before the first cycle starts.
    pub delay: f32,
}

/// A fixed-size batch of particles, generated exactly once per mount.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Generate the heart batch: x 0-100 %, size 10-30, delay 0-20 s,
    /// duration 25-40 s, peak opacity 0.2-0.7.
    pub fn hearts(rng: &mut fastrand::Rng) -> Self {
        let particles = (0..HEART_COUNT)
            .map(|id| Particle {
                id,
                kind: ParticleKind::Heart {
                    peak_opacity: uniform(rng, 0.2, 0.7),
                },
                x: uniform(rng, 0.0, 100.0),
                y: 100.0,
                size: uniform(rng, 10.0, 30.0),
                duration: uniform(rng, 25.0, 40.0),
                delay: uniform(rng, 0.0, 20.0),
            })
            .collect();
        Self { particles }
    }

    /// Generate the animal-glyph batch: x,y 0-100 %, size 20-40,
    /// duration 20-40 s, delay 0-5 s, base rotation 0-360°.
    pub fn glyphs(rng: &mut fastrand::Rng) -> Self {
        let particles = (0..GLYPH_COUNT)
            .map(|id| Particle {
                id,
                kind: ParticleKind::Glyph {
                    emoji: GLYPHS[id % GLYPHS.len()],
                    base_rotation: uniform(rng, 0.0, 360.0),
                },
                x: uniform(rng, 0.0, 100.0),
                y: uniform(rng, 0.0, 100.0),
                size: uniform(rng, 20.0, 40.0),
                duration: uniform(rng, 20.0, 40.0),
                delay: uniform(rng, 0.0, 5.0),
            })
            .collect();
        Self { particles }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

fn uniform(rng: &mut fastrand::Rng, lo: f32, hi: f32) -> f32 {
    lo + rng.f32() * (hi - lo)
}

// ─── Motion sampling ─────────────────────────────────────────────────────────

/// Instantaneous state of a heart particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeartSample {
    /// Vertical travel: 1.0 at the bottom edge, -1.0 one viewport above it.
    pub y_frac: f32,
    /// Current opacity, 0.0..=peak.
    pub alpha: f32,
}

/// Sample a heart at `t` seconds since mount. `None` until its delay has
/// elapsed; afterwards the cycle repeats forever. Eased upward drift with a
/// fade-in / fade-out envelope.
pub fn heart_at(p: &Particle, t: f32) -> Option<HeartSample> {
    let ParticleKind::Heart { peak_opacity } = p.kind else {
        return None;
    };
    let local = t - p.delay;
    if local < 0.0 {
        return None;
    }
    let phase = (local % p.duration) / p.duration;
    let eased = ease_out_quad(phase);
    Some(HeartSample {
        y_frac: 1.0 - 2.0 * eased,
        alpha: peak_opacity * (1.0 - (2.0 * phase - 1.0).abs()),
    })
}

/// Instantaneous state of a glyph particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphSample {
    /// Offset from the stored position, in points.
    pub dx: f32,
    pub dy: f32,
    /// Current rotation in degrees (base ± wobble).
    pub rotation: f32,
    /// Breathing opacity, 0.1..=0.2.
    pub alpha: f32,
}

/// Sample a glyph at `t` seconds since mount. Before its delay the glyph
/// rests at its base pose; afterwards it loops a gentle oscillation of
/// translation (±20 / ±15 points), rotation (±10°) and opacity.
pub fn glyph_at(p: &Particle, t: f32) -> GlyphSample {
    let base_rotation = match p.kind {
        ParticleKind::Glyph { base_rotation, .. } => base_rotation,
        ParticleKind::Heart { .. } => 0.0,
    };
    let local = (t - p.delay).max(0.0);
    let phase = (local % p.duration) / p.duration;
    let angle = phase * TAU;
    GlyphSample {
        dx: 20.0 * angle.sin(),
        dy: 15.0 * angle.sin(),
        rotation: base_rotation + 10.0 * (2.0 * angle).sin(),
        alpha: 0.15 - 0.05 * angle.cos(),
    }
}

fn ease_out_quad(x: f32) -> f32 {
    1.0 - (1.0 - x) * (1.0 - x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heart_batch_counts_and_ranges() {
        let mut rng = fastrand::Rng::with_seed(7);
        let field = ParticleField::hearts(&mut rng);
        assert_eq!(field.len(), HEART_COUNT);
        for (i, p) in field.particles().iter().enumerate() {
            assert_eq!(p.id, i);
            assert!((0.0..=100.0).contains(&p.x));
            assert!((10.0..=30.0).contains(&p.size));
            assert!((25.0..=40.0).contains(&p.duration));
            assert!((0.0..=20.0).contains(&p.delay));
            match p.kind {
                ParticleKind::Heart { peak_opacity } => {
                    assert!((0.2..=0.7).contains(&peak_opacity));
                }
                ref other => panic!("heart batch produced {other:?}"),
            }
        }
    }

    #[test]
    fn glyph_batch_counts_ranges_and_cycle() {
        let mut rng = fastrand::Rng::with_seed(7);
        let field = ParticleField::glyphs(&mut rng);
        assert_eq!(field.len(), GLYPH_COUNT);
        for (i, p) in field.particles().iter().enumerate() {
            assert!((0.0..=100.0).contains(&p.x));
            assert!((0.0..=100.0).contains(&p.y));
            assert!((20.0..=40.0).contains(&p.size));
            assert!((20.0..=40.0).contains(&p.duration));
            assert!((0.0..=5.0).contains(&p.delay));
            match p.kind {
                ParticleKind::Glyph {
                    emoji,
                    base_rotation,
                } => {
                    assert_eq!(emoji, GLYPHS[i % GLYPHS.len()]);
                    assert!((0.0..=360.0).contains(&base_rotation));
                }
                ref other => panic!("glyph batch produced {other:?}"),
            }
        }
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let mut a = fastrand::Rng::with_seed(42);
        let mut b = fastrand::Rng::with_seed(42);
        assert_eq!(ParticleField::hearts(&mut a), ParticleField::hearts(&mut b));
        assert_eq!(ParticleField::glyphs(&mut a), ParticleField::glyphs(&mut b));
    }

    #[test]
    fn field_is_stable_across_samples() {
        // Sampling must not perturb the generated batch.
        let mut rng = fastrand::Rng::with_seed(3);
        let field = ParticleField::glyphs(&mut rng);
        let snapshot = field.clone();
        for p in field.particles() {
            let _ = glyph_at(p, 1.5);
            let _ = glyph_at(p, 30.0);
        }
        assert_eq!(field, snapshot);
    }

    #[test]
    fn heart_hidden_until_delay() {
        let p = Particle {
            id: 0,
            kind: ParticleKind::Heart { peak_opacity: 0.5 },
            x: 50.0,
            y: 100.0,
            size: 20.0,
            duration: 30.0,
            delay: 10.0,
        };
        assert!(heart_at(&p, 9.9).is_none());
        assert!(heart_at(&p, 10.0).is_some());
    }

    #[test]
    fn heart_drifts_up_and_fades_out() {
        let p = Particle {
            id: 0,
            kind: ParticleKind::Heart { peak_opacity: 0.6 },
            x: 50.0,
            y: 100.0,
            size: 20.0,
            duration: 30.0,
            delay: 0.0,
        };
        let start = heart_at(&p, 0.0).unwrap();
        let mid = heart_at(&p, 15.0).unwrap();
        let late = heart_at(&p, 29.9).unwrap();
        assert_eq!(start.y_frac, 1.0);
        assert!(mid.y_frac < start.y_frac);
        assert!(late.y_frac < mid.y_frac);
        assert!(start.alpha.abs() < 1e-5);
        assert!((mid.alpha - 0.6).abs() < 1e-5);
        assert!(late.alpha < 0.05);
    }

    #[test]
    fn glyph_rests_at_base_pose_before_delay() {
        let p = Particle {
            id: 0,
            kind: ParticleKind::Glyph {
                emoji: "🐱",
                base_rotation: 123.0,
            },
            x: 10.0,
            y: 20.0,
            size: 30.0,
            duration: 25.0,
            delay: 4.0,
        };
        let s = glyph_at(&p, 1.0);
        assert_eq!(s.dx, 0.0);
        assert_eq!(s.dy, 0.0);
        assert_eq!(s.rotation, 123.0);
        assert!((s.alpha - 0.1).abs() < 1e-5);
    }

    #[test]
    fn glyph_oscillation_stays_bounded() {
        let p = Particle {
            id: 0,
            kind: ParticleKind::Glyph {
                emoji: "🐶",
                base_rotation: 200.0,
            },
            x: 10.0,
            y: 20.0,
            size: 30.0,
            duration: 20.0,
            delay: 0.0,
        };
        for i in 0..200 {
            let s = glyph_at(&p, i as f32 * 0.37);
            assert!(s.dx.abs() <= 20.0 + 1e-4);
            assert!(s.dy.abs() <= 15.0 + 1e-4);
            assert!((s.rotation - 200.0).abs() <= 10.0 + 1e-4);
            assert!((0.1 - 1e-5..=0.2 + 1e-5).contains(&s.alpha));
        }
    }
}

//! AABB overlap detection and impulse-based pair resolution.
//!
//! Resolution treats both rectangles like circles: the contact normal is the
//! center-to-center direction, not a box-box separating axis. Pairs are
//! resolved one at a time and in place, so the outcome depends on the order in
//! which pairs are visited.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::body::Body;

/// Default coefficient of restitution for body-body contacts.
pub const DEFAULT_RESTITUTION: f32 = 0.5;

/// Half-open AABB overlap test. Bodies that only touch do not overlap.
pub fn overlaps(a: &Body, b: &Body) -> bool {
    a.aabb().overlaps(&b.aabb())
}

/// What [`ImpulseResolver::resolve`] did to a pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Resolution {
    /// Coincident centers or unusable masses; both bodies were left untouched.
    Degenerate,
    /// The pair was already moving apart; only positional correction ran.
    Separating { correction: f32 },
    /// An impulse of magnitude `impulse` was exchanged, then positions corrected.
    Impulse { impulse: f32, correction: f32 },
}

/// Impulse resolver with a single fixed restitution coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpulseResolver {
    pub restitution: f32,
}

impl Default for ImpulseResolver {
    fn default() -> Self {
        Self {
            restitution: DEFAULT_RESTITUTION,
        }
    }
}

impl ImpulseResolver {
    pub fn new(restitution: f32) -> Self {
        Self { restitution }
    }

    /// Resolves one pair that is known to overlap.
    ///
    /// The impulse `j = -(1 + e)(v_rel · n) / (1/m_a + 1/m_b)` is applied only
    /// to approaching pairs. Positional correction pushes the bodies apart along
    /// `n` by `(w_a/2 + w_b/2) - distance`, split so the lighter body moves
    /// further, and runs for approaching and separating pairs alike.
    pub fn resolve(&self, a: &mut Body, b: &mut Body) -> Resolution {
        if !(a.mass > 0.0 && b.mass > 0.0) {
            return Resolution::Degenerate;
        }

        let delta = a.center() - b.center();
        let distance = delta.length();
        if !(distance > 0.0 && distance.is_finite()) {
            trace!(a = a.id.0, b = b.id.0, "skipping pair with coincident centers");
            return Resolution::Degenerate;
        }

        let normal = delta / distance;
        let vel_along_normal = (a.velocity - b.velocity).dot(normal);

        let impulse = if vel_along_normal > 0.0 {
            None
        } else {
            let inv_mass_sum = 1.0 / a.mass + 1.0 / b.mass;
            let j = -(1.0 + self.restitution) * vel_along_normal / inv_mass_sum;
            a.velocity += normal * (j / a.mass);
            b.velocity -= normal * (j / b.mass);
            Some(j)
        };

        // Diagonal contacts can have a center distance larger than the summed
        // half-widths; never pull such a pair together.
        let overlap = (a.half_size().x + b.half_size().x - distance).max(0.0);
        let total_mass = a.mass + b.mass;
        a.position += normal * (overlap * (b.mass / total_mass));
        b.position -= normal * (overlap * (a.mass / total_mass));

        match impulse {
            Some(impulse) => Resolution::Impulse {
                impulse,
                correction: overlap,
            },
            None => Resolution::Separating {
                correction: overlap,
            },
        }
    }
}

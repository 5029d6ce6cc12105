//! Particle vs. container collision response
//!
//! Each axis is resolved independently against the box inset by the particle
//! radius. Resolution is discrete: only the post-move position is tested, so a
//! large enough `dt * speed` can tunnel past a face within one step. The
//! reflection is fully elastic.

use tracing::trace;

use super::params::{BoundingBox, CollisionPolicy};
use super::states::{Contacts, Particle};

/// Push `p` back inside `bounds` and reflect velocity components heading out
/// through a face. Contact is reported for every clamped axis; a component
/// already pointing inward is left alone, so re-resolving a particle that sits
/// on a face changes nothing.
pub fn resolve_boundary(p: &mut Particle, bounds: &BoundingBox, policy: CollisionPolicy) -> Contacts {
    let (lo, hi) = bounds.inset(p.radius());
    let mut x = p.position();
    let mut v = p.velocity();
    let mut contacts = Contacts::default();

    for axis in 0..3 {
        // (face, is the velocity heading out through it)
        let (face, outward) = if x[axis] <= lo[axis] {
            (lo[axis], v[axis] < 0.0)
        } else if x[axis] >= hi[axis] {
            (hi[axis], v[axis] > 0.0)
        } else {
            continue;
        };

        x[axis] = match policy {
            CollisionPolicy::Clamp => face,
            // overshoot travelled past the face is sent back the other way
            CollisionPolicy::Mirror if outward && lo[axis] <= hi[axis] => {
                (2.0 * face - x[axis]).clamp(lo[axis], hi[axis])
            }
            // resting on the face, or sphere wider than the box on this axis
            CollisionPolicy::Mirror => face,
        };
        // already moving back inside (e.g. right after a bounce): keep it
        if outward {
            v[axis] = -v[axis];
        }
        contacts.0[axis] = true;
    }

    if contacts.any() {
        trace!(?contacts, x = ?x, "boundary contact");
        p.set_position(x);
        p.set_velocity(v);
    }
    contacts
}

//! Fixed-step time integration for a single particle
//!
//! Semi-implicit (symplectic) Euler: velocity is kicked first, then the
//! position drifts with the *new* velocity within the same step

use super::states::{NVec3, Particle};

/// Advance `p` by `dt` under the constant net `force` for this step.
/// Goes through `set_velocity` so the cached speed follows.
pub fn semi_implicit_euler(p: &mut Particle, force: NVec3, dt: f64) {
    // a_n = F_n / m  (m > 0 guaranteed by set_radius)
    let a = force / p.mass();

    // Kick: v_n+1 = v_n + dt * a_n
    let v_next = p.velocity() + dt * a;
    p.set_velocity(v_next);

    // Drift: x_n+1 = x_n + dt * v_n+1
    p.set_position(p.position() + dt * v_next);
}

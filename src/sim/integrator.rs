// ---------------------------------------------------------------------------
// Semi-implicit (symplectic) Euler step for the vertical axis
// ---------------------------------------------------------------------------

/// Advance `(altitude, velocity)` by one step of constant acceleration.
///
/// Velocity is updated first and the *new* velocity moves the altitude:
///   v' = v + a*dt
///   h' = h + v'*dt
pub fn semi_implicit_euler(altitude: f64, velocity: f64, accel: f64, dt: f64) -> (f64, f64) {
    let velocity = velocity + accel * dt;
    let altitude = altitude + velocity * dt;
    (altitude, velocity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn velocity_updated_before_position() {
        let (h, v) = semi_implicit_euler(100.0, -10.0, -1.625, 0.1);
        assert_relative_eq!(v, -10.1625, epsilon = 1e-12);
        assert_relative_eq!(h, 100.0 - 10.1625 * 0.1, epsilon = 1e-12);
    }

    #[test]
    fn free_fall_matches_closed_form_discretisation() {
        // h_n = h0 + n*v0*dt + a*dt^2 * n(n+1)/2
        let (h0, v0, a, dt) = (1500.0, -10.0, -1.625, 0.1);
        let (mut h, mut v) = (h0, v0);
        let n = 50;
        for _ in 0..n {
            (h, v) = semi_implicit_euler(h, v, a, dt);
        }
        let nf = n as f64;
        assert_relative_eq!(v, v0 + a * dt * nf, epsilon = 1e-9);
        assert_relative_eq!(h, h0 + nf * v0 * dt + a * dt * dt * nf * (nf + 1.0) / 2.0, epsilon = 1e-9);
    }
}

use crate::physics::{Ball, MovableBody};

/// Compute the opponent's velocity target for this tick: straight at the
/// ball at fixed pursuit speed. Returns `None` when the opponent sits
/// exactly on the ball center, in which case the integrator holds the
/// previous velocity.
pub fn seek_target(body: &MovableBody, ball: &Ball, speed: f32) -> Option<(f32, f32)> {
    let dx = ball.x - body.x;
    let dy = ball.y - body.y;
    let dist = (dx * dx + dy * dy).sqrt();
    if dist == 0.0 {
        return None;
    }
    Some((dx / dist * speed, dy / dist * speed))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_at(x: f32, y: f32) -> MovableBody {
        MovableBody::new(x, y, 20.0, 3.5, 3.5, 0.12, 0.85, -1.0)
    }

    #[test]
    fn target_points_at_ball() {
        let body = body_at(100.0, 100.0);
        let ball = Ball::new(200.0, 100.0, 12.0);
        let (tvx, tvy) = seek_target(&body, &ball, 3.5).unwrap();
        assert!((tvx - 3.5).abs() < 1e-6);
        assert!(tvy.abs() < 1e-6);
    }

    #[test]
    fn target_magnitude_is_pursuit_speed() {
        let body = body_at(10.0, 400.0);
        let ball = Ball::new(700.0, 60.0, 12.0);
        let (tvx, tvy) = seek_target(&body, &ball, 3.5).unwrap();
        let mag = (tvx * tvx + tvy * tvy).sqrt();
        assert!((mag - 3.5).abs() < 1e-4, "got magnitude {mag}");
    }

    #[test]
    fn coincident_ball_yields_no_target() {
        let body = body_at(250.0, 250.0);
        let ball = Ball::new(250.0, 250.0, 12.0);
        assert_eq!(seek_target(&body, &ball, 3.5), None);
    }
}

//! Collision detection and response for the ball
//!
//! Three independent passes run once per tick while the ball is in play, in
//! this order: walls, paddle, bricks. Each pass mutates the ball directly and
//! reports what it hit; scoring is left to the caller.

use super::entity::Entity;
use super::state::Brick;
use crate::tuning::Tuning;

/// Boundaries the ball was pushed back from during the wall pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallHits {
    pub left: bool,
    pub right: bool,
    pub top: bool,
}

impl WallHits {
    pub fn any(&self) -> bool {
        self.left || self.right || self.top
    }
}

/// Velocity components to invert after a brick hit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bounce {
    pub flip_x: bool,
    pub flip_y: bool,
}

impl Bounce {
    pub const HORIZONTAL: Bounce = Bounce {
        flip_x: true,
        flip_y: false,
    };
    pub const VERTICAL: Bounce = Bounce {
        flip_x: false,
        flip_y: true,
    };

    /// Combine two bounces; each component flips at most once
    #[inline]
    pub fn merge(self, other: Bounce) -> Bounce {
        Bounce {
            flip_x: self.flip_x || other.flip_x,
            flip_y: self.flip_y || other.flip_y,
        }
    }
}

/// Keep the ball inside the left, right and top boundaries
///
/// The bottom is open. Left and right are exclusive of each other; the top
/// check is independent, so a corner hit inverts both components.
pub fn resolve_walls(ball: &mut Entity, tuning: &Tuning) -> WallHits {
    let mut hits = WallHits::default();

    if ball.left() < tuning.play_left() {
        ball.set_left(tuning.play_left());
        ball.vel.x = -ball.vel.x;
        hits.left = true;
    } else if ball.right() > tuning.play_right() {
        ball.set_right(tuning.play_right());
        ball.vel.x = -ball.vel.x;
        hits.right = true;
    }

    if ball.top() > tuning.play_top() {
        ball.set_top(tuning.play_top());
        ball.vel.y = -ball.vel.y;
        hits.top = true;
    }

    hits
}

/// Bounce the ball off the paddle, imparting the paddle's horizontal motion
///
/// Only resolves when the ball's center is above the paddle's top edge, so a
/// ball that is already below the paddle is never pulled back up. The
/// resulting horizontal speed is clamped to `±max_x`. The paddle's velocity is
/// consumed by this pass whether or not contact happened.
///
/// Returns true on contact.
pub fn resolve_paddle(ball: &mut Entity, paddle: &mut Entity, max_x: f32) -> bool {
    let contact = ball.overlaps(paddle) && ball.pos.y > paddle.top();

    if contact {
        ball.vel.y = -ball.vel.y;
        ball.set_bottom(paddle.top());
        ball.vel.x = (ball.vel.x + paddle.vel.x).clamp(-max_x, max_x);
    }

    paddle.vel.x = 0.0;
    contact
}

/// Decide which velocity components a brick hit inverts
///
/// When the ball's center is past a corner (outside both the brick's
/// horizontal and vertical extent), the distances from the center to the
/// corner's horizontal and vertical edges decide: a vertical distance greater
/// than or equal to the horizontal one inverts the vertical component,
/// otherwise the horizontal one. A center directly above or below inverts the
/// vertical component; anything else (directly beside) the horizontal one.
pub fn classify_brick_hit(ball: &Entity, brick: &Entity) -> Bounce {
    let (x, y) = (ball.pos.x, ball.pos.y);
    let above = y > brick.top();
    let below = y < brick.bottom();
    let left_of = x < brick.left();
    let right_of = x > brick.right();

    let corner = |edge_y: f32, edge_x: f32| {
        if (y - edge_y).abs() >= (x - edge_x).abs() {
            Bounce::VERTICAL
        } else {
            Bounce::HORIZONTAL
        }
    };

    if above && left_of {
        corner(brick.top(), brick.left())
    } else if above && right_of {
        corner(brick.top(), brick.right())
    } else if below && left_of {
        corner(brick.bottom(), brick.left())
    } else if below && right_of {
        corner(brick.bottom(), brick.right())
    } else if above || below {
        Bounce::VERTICAL
    } else {
        Bounce::HORIZONTAL
    }
}

/// Remove every brick overlapping the ball and bounce it
///
/// All overlapping bricks are destroyed this tick. Their bounces are merged so
/// that each velocity component is inverted at most once. Returns the removed
/// bricks in layout order.
pub fn resolve_bricks(ball: &mut Entity, bricks: &mut Vec<Brick>) -> Vec<Brick> {
    let ball_box = ball.aabb();
    let mut bounce = Bounce::default();
    let mut removed = Vec::new();

    bricks.retain(|brick| {
        if brick.body.aabb().overlaps(&ball_box) {
            bounce = bounce.merge(classify_brick_hit(ball, &brick.body));
            removed.push(brick.clone());
            false
        } else {
            true
        }
    });

    if bounce.flip_y {
        ball.vel.y = -ball.vel.y;
    }
    if bounce.flip_x {
        ball.vel.x = -ball.vel.x;
    }

    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::layout::BrickVariant;
    use glam::Vec2;
    use proptest::prelude::*;

    fn ball_at(x: f32, y: f32, vel: Vec2) -> Entity {
        let mut ball = Entity::new(Vec2::new(x, y), Vec2::splat(12.0));
        ball.vel = vel;
        ball
    }

    fn brick_at(id: u32, x: f32, y: f32) -> Brick {
        Brick {
            id,
            body: Entity::new(Vec2::new(x, y), Vec2::new(50.0, 20.0)),
            variant: BrickVariant::Standard,
        }
    }

    #[test]
    fn test_wall_left_bounce() {
        let tuning = Tuning::default();
        let mut ball = ball_at(22.0, 200.0, Vec2::new(-3.0, 3.0));
        let hits = resolve_walls(&mut ball, &tuning);
        assert!(hits.left && !hits.right && !hits.top);
        assert_eq!(ball.left(), 20.0);
        assert_eq!(ball.vel, Vec2::new(3.0, 3.0));
    }

    #[test]
    fn test_wall_top_right_corner_inverts_both() {
        let tuning = Tuning::default();
        let mut ball = ball_at(477.0, 377.0, Vec2::new(4.0, 3.0));
        let hits = resolve_walls(&mut ball, &tuning);
        assert!(hits.right && hits.top);
        assert_eq!(ball.right(), 480.0);
        assert_eq!(ball.top(), 380.0);
        assert_eq!(ball.vel, Vec2::new(-4.0, -3.0));
    }

    #[test]
    fn test_wall_bottom_is_open() {
        let tuning = Tuning::default();
        let mut ball = ball_at(250.0, -30.0, Vec2::new(0.0, -3.0));
        let hits = resolve_walls(&mut ball, &tuning);
        assert!(!hits.any());
        assert_eq!(ball.pos, Vec2::new(250.0, -30.0));
    }

    #[test]
    fn test_paddle_contact_imparts_spin() {
        let mut paddle = Entity::new(Vec2::new(250.0, 100.0), Vec2::new(80.0, 12.0));
        paddle.vel.x = 4.0;
        let mut ball = ball_at(250.0, 110.0, Vec2::new(1.0, -3.0));

        assert!(resolve_paddle(&mut ball, &mut paddle, 6.0));
        assert_eq!(ball.vel, Vec2::new(5.0, 3.0));
        assert_eq!(ball.bottom(), paddle.top());
        assert_eq!(paddle.vel.x, 0.0);
    }

    #[test]
    fn test_paddle_contact_clamps_horizontal_speed() {
        let mut paddle = Entity::new(Vec2::new(250.0, 100.0), Vec2::new(80.0, 12.0));
        paddle.vel.x = -40.0;
        let mut ball = ball_at(250.0, 110.0, Vec2::new(-2.0, -3.0));

        assert!(resolve_paddle(&mut ball, &mut paddle, 6.0));
        assert_eq!(ball.vel.x, -6.0);
    }

    #[test]
    fn test_paddle_ignores_ball_below_top_edge() {
        let mut paddle = Entity::new(Vec2::new(250.0, 100.0), Vec2::new(80.0, 12.0));
        paddle.vel.x = 3.0;
        // Overlapping, but center is below the paddle's top edge
        let mut ball = ball_at(250.0, 104.0, Vec2::new(0.0, -3.0));

        assert!(!resolve_paddle(&mut ball, &mut paddle, 6.0));
        assert_eq!(ball.vel, Vec2::new(0.0, -3.0));
        // Velocity is consumed regardless
        assert_eq!(paddle.vel.x, 0.0);
    }

    #[test]
    fn test_corner_tie_favors_vertical() {
        // Brick spans x 225..275, y 190..210; ball center 5 above top, 5 left of left
        let brick = Entity::new(Vec2::new(250.0, 200.0), Vec2::new(50.0, 20.0));
        let ball = ball_at(220.0, 215.0, Vec2::new(3.0, -3.0));
        assert_eq!(classify_brick_hit(&ball, &brick), Bounce::VERTICAL);
    }

    #[test]
    fn test_corner_classification_each_quadrant() {
        let brick = Entity::new(Vec2::new(250.0, 200.0), Vec2::new(50.0, 20.0));

        // Top-left, closer to the top edge than the left edge
        assert_eq!(
            classify_brick_hit(&ball_at(215.0, 212.0, Vec2::ZERO), &brick),
            Bounce::HORIZONTAL
        );
        // Top-right, further above than beside
        assert_eq!(
            classify_brick_hit(&ball_at(277.0, 216.0, Vec2::ZERO), &brick),
            Bounce::VERTICAL
        );
        // Bottom-left, further beside than below
        assert_eq!(
            classify_brick_hit(&ball_at(218.0, 188.0, Vec2::ZERO), &brick),
            Bounce::HORIZONTAL
        );
        // Bottom-right tie
        assert_eq!(
            classify_brick_hit(&ball_at(279.0, 186.0, Vec2::ZERO), &brick),
            Bounce::VERTICAL
        );
    }

    #[test]
    fn test_edge_classification() {
        let brick = Entity::new(Vec2::new(250.0, 200.0), Vec2::new(50.0, 20.0));
        assert_eq!(
            classify_brick_hit(&ball_at(250.0, 214.0, Vec2::ZERO), &brick),
            Bounce::VERTICAL
        );
        assert_eq!(
            classify_brick_hit(&ball_at(240.0, 185.0, Vec2::ZERO), &brick),
            Bounce::VERTICAL
        );
        assert_eq!(
            classify_brick_hit(&ball_at(221.0, 200.0, Vec2::ZERO), &brick),
            Bounce::HORIZONTAL
        );
        assert_eq!(
            classify_brick_hit(&ball_at(280.0, 195.0, Vec2::ZERO), &brick),
            Bounce::HORIZONTAL
        );
    }

    #[test]
    fn test_two_bricks_invert_once() {
        // Ball rising into the seam between two side-by-side bricks
        let mut bricks = vec![brick_at(1, 225.0, 200.0), brick_at(2, 275.0, 200.0), brick_at(3, 400.0, 300.0)];
        let mut ball = ball_at(250.0, 186.0, Vec2::new(1.0, 3.0));

        let removed = resolve_bricks(&mut ball, &mut bricks);

        assert_eq!(removed.iter().map(|b| b.id).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(bricks.len(), 1);
        assert_eq!(bricks[0].id, 3);
        // Vertical inverted exactly once, horizontal untouched
        assert_eq!(ball.vel, Vec2::new(1.0, -3.0));
    }

    #[test]
    fn test_no_brick_no_bounce() {
        let mut bricks = vec![brick_at(1, 100.0, 300.0)];
        let mut ball = ball_at(250.0, 150.0, Vec2::new(2.0, 3.0));
        assert!(resolve_bricks(&mut ball, &mut bricks).is_empty());
        assert_eq!(bricks.len(), 1);
        assert_eq!(ball.vel, Vec2::new(2.0, 3.0));
    }

    proptest! {
        #[test]
        fn prop_walls_contain_ball(
            x in -50.0f32..550.0,
            y in 0.0f32..450.0,
            vx in -6.0f32..6.0,
            vy in -3.0f32..3.0,
        ) {
            let tuning = Tuning::default();
            let mut ball = ball_at(x, y, Vec2::new(vx, vy));
            resolve_walls(&mut ball, &tuning);
            prop_assert!(ball.left() >= tuning.play_left());
            prop_assert!(ball.right() <= tuning.play_right());
            prop_assert!(ball.top() <= tuning.play_top());
        }

        #[test]
        fn prop_paddle_contact_clamps(
            paddle_dx in -100.0f32..100.0,
            ball_vx in -6.0f32..6.0,
            offset in -40.0f32..40.0,
        ) {
            let mut paddle = Entity::new(Vec2::new(250.0, 100.0), Vec2::new(80.0, 12.0));
            paddle.vel.x = paddle_dx;
            let mut ball = ball_at(250.0 + offset, 109.0, Vec2::new(ball_vx, -3.0));

            if resolve_paddle(&mut ball, &mut paddle, 6.0) {
                prop_assert!(ball.vel.x >= -6.0 && ball.vel.x <= 6.0);
                prop_assert_eq!(ball.vel.y, 3.0);
            }
            prop_assert_eq!(paddle.vel.x, 0.0);
        }
    }
}

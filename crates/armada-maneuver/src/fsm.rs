//! Motion state machine evaluation.
//!
//! The sub-machine per fleet: `Idle -> RotatingToFace -> Translating ->
//! Idle`, with a direct (drag-drop) variant `Idle -> TranslatingDirect ->
//! Idle` that skips rotation gating entirely. A fleet that is rotating
//! before a move never translates until the rotation completes.

use glam::DVec2;

use armada_core::constants::ROTATION_EPSILON;
use armada_core::enums::MotionState;
use armada_core::types::{shortest_arc, Position};

/// Input to the motion FSM for a single fleet.
pub struct ManeuverContext {
    pub state: MotionState,
    pub position: Position,
    /// Current facing, radians, (-PI, PI].
    pub heading: f64,
    pub target_position: Position,
    pub target_heading: f64,
    /// Derived translation speed (units/s).
    pub move_speed: f64,
    /// Derived rotation speed (rad/s).
    pub rotation_speed: f64,
    /// Speed multiplier for direct moves.
    pub direct_speed_factor: f64,
    /// Suppress facing-while-moving (the fleet is under manual rotation
    /// control and its heading must not be touched by the move).
    pub hold_heading: bool,
    /// Tick delta time (seconds).
    pub dt: f64,
}

/// Output from the motion FSM.
pub struct ManeuverUpdate {
    pub state: MotionState,
    pub position: Position,
    pub heading: f64,
    /// Possibly re-aimed while translating (curved approach).
    pub target_heading: f64,
    /// The fleet snapped onto its destination this tick.
    pub arrived: bool,
}

/// Evaluate one tick of motion for one fleet.
pub fn evaluate(ctx: &ManeuverContext) -> ManeuverUpdate {
    match ctx.state {
        MotionState::Idle => no_change(ctx),
        MotionState::RotatingToFace { resume_move } => rotate_in_place(ctx, resume_move),
        MotionState::Translating => translate(ctx, false),
        MotionState::TranslatingDirect => translate(ctx, true),
    }
}

fn no_change(ctx: &ManeuverContext) -> ManeuverUpdate {
    ManeuverUpdate {
        state: ctx.state,
        position: ctx.position,
        heading: ctx.heading,
        target_heading: ctx.target_heading,
        arrived: false,
    }
}

/// Rotation integration. On completion a pending move releases into
/// `Translating`; a plain rotate order returns to `Idle`.
fn rotate_in_place(ctx: &ManeuverContext, resume_move: bool) -> ManeuverUpdate {
    let (heading, done) = step_heading(ctx.heading, ctx.target_heading, ctx.rotation_speed, ctx.dt);

    let state = if done {
        if resume_move {
            MotionState::Translating
        } else {
            MotionState::Idle
        }
    } else {
        ctx.state
    };

    ManeuverUpdate {
        state,
        position: ctx.position,
        heading,
        target_heading: ctx.target_heading,
        arrived: false,
    }
}

/// Translation integration, plus continuous re-aim for normal moves.
fn translate(ctx: &ManeuverContext, direct: bool) -> ManeuverUpdate {
    let speed = if direct {
        ctx.move_speed * ctx.direct_speed_factor
    } else {
        ctx.move_speed
    };
    let step = speed * ctx.dt;

    let here = DVec2::new(ctx.position.x, ctx.position.y);
    let there = DVec2::new(ctx.target_position.x, ctx.target_position.y);
    let offset = there - here;
    let remaining = offset.length();

    let (position, arrived) = if remaining <= step {
        // Snap exactly onto the destination — no residual drift.
        (ctx.target_position, true)
    } else {
        let next = here + offset / remaining * step;
        (Position::new(next.x, next.y), false)
    };

    // Direct moves keep their heading frozen for the whole travel; normal
    // moves keep the bow aimed at the (possibly moving-past) target point.
    let (heading, target_heading) = if direct || ctx.hold_heading || arrived {
        (ctx.heading, ctx.target_heading)
    } else {
        let aim = ctx.position.heading_to(&ctx.target_position);
        let (h, _) = step_heading(ctx.heading, aim, ctx.rotation_speed, ctx.dt);
        (h, aim)
    };

    ManeuverUpdate {
        state: if arrived { MotionState::Idle } else { ctx.state },
        position,
        heading,
        target_heading,
        arrived,
    }
}

/// Step a heading toward a target by at most `rate * dt`, along the
/// shortest arc. Returns the new heading and whether the target was
/// reached. Snaps within [`ROTATION_EPSILON`]; never overshoots.
pub fn step_heading(current: f64, target: f64, rate: f64, dt: f64) -> (f64, bool) {
    let delta = shortest_arc(current, target);
    if delta.abs() < ROTATION_EPSILON {
        return (target, true);
    }
    let max_step = rate * dt;
    if max_step >= delta.abs() {
        (target, true)
    } else {
        let next = armada_core::types::normalize_angle(current + delta.signum() * max_step);
        (next, false)
    }
}

use std::f64::consts::PI;

use armada_core::constants::{DIRECT_MOVE_SPEED_FACTOR, ROTATION_EPSILON};
use armada_core::enums::MotionState;
use armada_core::types::Position;

use crate::fsm::{evaluate, step_heading, ManeuverContext};

/// A context with sane defaults that individual tests override.
fn base_context(state: MotionState) -> ManeuverContext {
    ManeuverContext {
        state,
        position: Position::new(0.0, 0.0),
        heading: 0.0,
        target_position: Position::new(0.0, 0.0),
        target_heading: 0.0,
        move_speed: 90.0,
        rotation_speed: 1.8,
        direct_speed_factor: DIRECT_MOVE_SPEED_FACTOR,
        hold_heading: false,
        dt: 1.0 / 60.0,
    }
}

// ---- Rotation ----

#[test]
fn test_rotation_converges_without_overshoot() {
    let mut ctx = base_context(MotionState::RotatingToFace { resume_move: false });
    ctx.target_heading = PI / 2.0;

    // Bounded by angular distance / step + slack.
    let step = ctx.rotation_speed * ctx.dt;
    let bound = ((PI / 2.0) / step).ceil() as usize + 2;

    let mut ticks = 0;
    loop {
        let update = evaluate(&ctx);
        // Never past the target: delta keeps the original sign until snap.
        assert!(
            update.heading <= PI / 2.0 + 1e-9,
            "overshot to {}",
            update.heading
        );
        ctx.heading = update.heading;
        ctx.state = update.state;
        ticks += 1;
        if ctx.state == MotionState::Idle {
            break;
        }
        assert!(ticks <= bound, "did not converge within {bound} ticks");
    }
    assert!((ctx.heading - PI / 2.0).abs() < ROTATION_EPSILON);
}

#[test]
fn test_rotation_takes_shortest_path() {
    let mut ctx = base_context(MotionState::RotatingToFace { resume_move: false });
    ctx.heading = 170.0_f64.to_radians();
    ctx.target_heading = -170.0_f64.to_radians();

    let update = evaluate(&ctx);
    // The short way is through PI, i.e. heading increases.
    assert!(update.heading > ctx.heading);
}

#[test]
fn test_waiting_to_rotate_never_translates() {
    let mut ctx = base_context(MotionState::RotatingToFace { resume_move: true });
    ctx.target_position = Position::new(0.0, 500.0);
    ctx.target_heading = PI; // long turn

    let update = evaluate(&ctx);
    assert_eq!(update.position, ctx.position);
    assert!(matches!(
        update.state,
        MotionState::RotatingToFace { resume_move: true }
    ));
}

#[test]
fn test_pending_move_releases_into_translation() {
    let mut ctx = base_context(MotionState::RotatingToFace { resume_move: true });
    ctx.target_position = Position::new(0.0, 500.0);
    ctx.target_heading = 0.005; // inside epsilon — snaps this tick

    let update = evaluate(&ctx);
    assert_eq!(update.state, MotionState::Translating);
    assert_eq!(update.heading, 0.005);
    // Translation itself begins next tick.
    assert_eq!(update.position, ctx.position);
}

#[test]
fn test_plain_rotate_returns_to_idle() {
    let mut ctx = base_context(MotionState::RotatingToFace { resume_move: false });
    ctx.target_heading = 0.005;

    let update = evaluate(&ctx);
    assert_eq!(update.state, MotionState::Idle);
}

// ---- Translation ----

#[test]
fn test_translation_advances_at_move_speed() {
    let mut ctx = base_context(MotionState::Translating);
    ctx.target_position = Position::new(0.0, 500.0);

    let update = evaluate(&ctx);
    let expected = ctx.move_speed * ctx.dt;
    assert!((update.position.y - expected).abs() < 1e-9);
    assert_eq!(update.state, MotionState::Translating);
    assert!(!update.arrived);
}

#[test]
fn test_arrival_snaps_exactly() {
    let mut ctx = base_context(MotionState::Translating);
    // Closer than one step.
    ctx.target_position = Position::new(0.3, 0.4);

    let update = evaluate(&ctx);
    assert_eq!(update.position, ctx.target_position);
    assert_eq!(update.state, MotionState::Idle);
    assert!(update.arrived);
}

#[test]
fn test_move_then_arrive_no_drift() {
    let mut ctx = base_context(MotionState::Translating);
    let destination = Position::new(37.0, 122.0);
    ctx.target_position = destination;
    ctx.heading = ctx.position.heading_to(&destination);

    for _ in 0..2000 {
        let update = evaluate(&ctx);
        ctx.position = update.position;
        ctx.heading = update.heading;
        ctx.target_heading = update.target_heading;
        ctx.state = update.state;
        if update.arrived {
            break;
        }
    }
    assert_eq!(ctx.position, destination);
    assert_eq!(ctx.state, MotionState::Idle);
}

#[test]
fn test_translation_reaims_toward_target() {
    let mut ctx = base_context(MotionState::Translating);
    ctx.target_position = Position::new(200.0, 0.0); // due East
    ctx.heading = 0.0; // facing North

    let update = evaluate(&ctx);
    // Bow swings clockwise toward East while the hull advances.
    assert!(update.heading > 0.0);
    assert!((update.target_heading - PI / 2.0).abs() < 1e-9);
}

#[test]
fn test_hold_heading_suppresses_reaim() {
    let mut ctx = base_context(MotionState::Translating);
    ctx.target_position = Position::new(200.0, 0.0);
    ctx.hold_heading = true;

    let update = evaluate(&ctx);
    assert_eq!(update.heading, 0.0);
}

// ---- Direct moves ----

#[test]
fn test_direct_move_slower_and_heading_frozen() {
    let mut ctx = base_context(MotionState::TranslatingDirect);
    ctx.target_position = Position::new(200.0, 0.0);
    ctx.heading = 1.0;

    let update = evaluate(&ctx);
    let expected = ctx.move_speed * DIRECT_MOVE_SPEED_FACTOR * ctx.dt;
    assert!((update.position.x - expected).abs() < 1e-9);
    assert_eq!(update.heading, 1.0);
    assert_eq!(update.state, MotionState::TranslatingDirect);
}

// ---- Idle / helpers ----

#[test]
fn test_idle_is_inert() {
    let ctx = base_context(MotionState::Idle);
    let update = evaluate(&ctx);
    assert_eq!(update.state, MotionState::Idle);
    assert_eq!(update.position, ctx.position);
    assert_eq!(update.heading, ctx.heading);
}

#[test]
fn test_step_heading_snaps_inside_epsilon() {
    let (heading, done) = step_heading(0.0, ROTATION_EPSILON / 2.0, 1.8, 1.0 / 60.0);
    assert!(done);
    assert_eq!(heading, ROTATION_EPSILON / 2.0);
}

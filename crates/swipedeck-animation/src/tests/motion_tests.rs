use super::*;
use swipedeck_core::{CardPose, MotionKind, SwipeConfig, SwipeController, SwipeDecision};

fn settle(plan: &mut MotionPlan, max_secs: f32) -> CardPose {
    let mut elapsed = 0.0;
    while !plan.is_settled() {
        plan.advance(1.0 / 60.0);
        elapsed += 1.0 / 60.0;
        assert!(elapsed <= max_secs, "motion failed to settle within {max_secs}s");
    }
    plan.pose()
}

#[test]
fn spring_back_returns_to_rest() {
    let mut controller = SwipeController::new(SwipeConfig::new(400.0));
    controller.gesture_start().unwrap();
    controller.gesture_update(80.0, 30.0).unwrap();
    let release = controller.gesture_end(80.0, 30.0, 600.0).unwrap();
    assert_eq!(release.decision, SwipeDecision::None);

    let mut plan = MotionPlan::for_release(&release, &CardAnimationConfig::default());
    assert_eq!(plan.kind(), MotionKind::SpringBack);

    let rest = settle(&mut plan, 3.0);
    assert_eq!(rest, CardPose::new(0.0, 0.0, 0.0));
}

#[test]
fn fly_off_ends_off_screen_in_swipe_direction() {
    let mut controller = SwipeController::new(SwipeConfig::new(400.0));
    controller.gesture_start().unwrap();
    controller.gesture_update(-150.0, 10.0).unwrap();
    let release = controller.gesture_end(-150.0, 10.0, -3_000.0).unwrap();
    assert_eq!(release.decision, SwipeDecision::Pass);

    let mut plan = MotionPlan::for_release(&release, &CardAnimationConfig::default());
    assert_eq!(plan.kind(), MotionKind::FlyOff);

    let end = settle(&mut plan, 3.0);
    assert_eq!(end.x, -600.0);
    assert_eq!(end.y, 10.0);
    assert_eq!(end.rotation_degrees, -60.0);
}

#[test]
fn first_frame_moves_toward_the_target() {
    let mut controller = SwipeController::new(SwipeConfig::new(400.0));
    controller.gesture_start().unwrap();
    let release = controller.gesture_end(200.0, 0.0, 2_000.0).unwrap();

    let mut plan = MotionPlan::for_release(&release, &CardAnimationConfig::default());
    let start_x = plan.pose().x;
    let next_x = plan.advance(1.0 / 60.0).x;
    assert!(next_x > start_x, "fly-off should move right, {start_x} -> {next_x}");
}

#[test]
fn pose_does_not_advance_time() {
    let mut controller = SwipeController::new(SwipeConfig::new(400.0));
    controller.gesture_start().unwrap();
    controller.gesture_update(60.0, 0.0).unwrap();
    let release = controller.gesture_end(60.0, 0.0, 0.0).unwrap();

    let plan = MotionPlan::for_release(&release, &CardAnimationConfig::default());
    assert_eq!(plan.pose().x, 60.0);
    assert_eq!(plan.pose().x, 60.0);
}

//! Headless discovery-screen demo.
//!
//! Replays a handful of scripted swipes and button presses over the
//! sample deck, settling each card's motion plan frame by frame, and logs
//! what a render layer would draw. Run with `RUST_LOG=debug` to see the
//! per-event controller output.

use swipedeck_animation::{CardAnimationConfig, MotionPlan};
use swipedeck_core::{Size, SuperLikePolicy, SwipeConfig, SwipeRelease};
use swipedeck_profiles::sample_profiles;
use swipedeck_testing::{DeckRobot, FRAME_MS};
use web_time::Instant;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let config = SwipeConfig::for_viewport(Size::new(400.0, 800.0))
        .with_super_like(SuperLikePolicy::vertical());
    let animations = CardAnimationConfig::default();
    let mut robot = DeckRobot::new(config, sample_profiles());

    log::info!(
        "deck loaded: {} profiles, commit threshold {:.0} px",
        robot.session().remaining(),
        config.commit_threshold()
    );

    let started = Instant::now();

    // (delta_x, delta_y, duration_ms) per scripted gesture.
    let script: &[(f32, f32, i64)] = &[
        (220.0, -15.0, 160),  // decisive right fling
        (-180.0, 10.0, 240),  // left swipe
        (70.0, 5.0, 640),     // hesitant nudge, springs back
        (12.0, -190.0, 200),  // upward super-like
    ];

    for &(dx, dy, duration) in script {
        let name = match robot.session().top_profile() {
            Some(profile) => profile.name.clone(),
            None => break,
        };
        match robot.swipe(dx, dy, duration) {
            Ok(release) => {
                log::info!("swiped {name}: {}", release.decision);
                play(&release, &animations);
            }
            Err(err) => log::error!("swipe on {name} failed: {err}"),
        }
    }

    // The remaining card goes out via the action buttons.
    if let Some(profile) = robot.session().top_profile() {
        let name = profile.name.clone();
        match robot.session_mut().press_like() {
            Ok(release) => {
                log::info!("pressed like on {name}");
                play(&release, &animations);
            }
            Err(err) => log::error!("button press on {name} failed: {err}"),
        }
    }

    log::info!(
        "session done in {:.1} ms: {} decisions, {} profiles left",
        started.elapsed().as_secs_f64() * 1000.0,
        robot.session().journal().len(),
        robot.session().remaining()
    );
    for (id, decision) in robot.session().journal() {
        log::info!("  profile {id}: {decision}");
    }
}

/// Settles a release's motion plan at 60 fps and logs the trajectory ends.
fn play(release: &SwipeRelease, animations: &CardAnimationConfig) {
    let mut plan = MotionPlan::for_release(release, animations);
    let mut frames = 0;
    while !plan.is_settled() && frames < 1000 {
        plan.advance(FRAME_MS as f32 / 1000.0);
        frames += 1;
    }
    let end = plan.pose();
    log::info!(
        "  {:?} settled after {frames} frames at ({:.0}, {:.0}, {:.0}deg)",
        plan.kind(),
        end.x,
        end.y,
        end.rotation_degrees
    );
}

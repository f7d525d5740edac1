use std::f32::consts::FRAC_PI_2;

use glam::Vec3;
use tweenloop::{Animation, AnimationFrame, Easing, FrameClock, Seconds, Transform};

/// Looping quad animation demo
///
/// Slides a half-size quad across the viewport, grows and spins it on the way
/// back, then eases it home. Drawing is left to the host renderer; this demo
/// logs the matrices it would upload each frame.
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let left = Transform::from_translation(Vec3::new(-0.5, 0.5, 0.0))
        .with_scale(Vec3::new(0.5, 0.5, 1.0));
    let right = Transform {
        translation: Vec3::new(0.5, 0.5, 0.0),
        ..left
    };
    let spun = right.with_scale(Vec3::new(0.75, 0.75, 1.0)).with_rotation(FRAC_PI_2);

    let animation = Animation::new()
        .with_clip(AnimationFrame::linear(left, right), Seconds::new(1.0))
        .with_clip(AnimationFrame::new(right, spun, Easing::SmoothStep), Seconds::new(0.5))
        .with_clip(AnimationFrame::new(spun, left, Easing::CubicInOut), Seconds::new(1.5));

    run(animation, FrameClock::with_fixed_step(Seconds::new(1.0 / 30.0)), 120)
}

fn run(mut animation: Animation, mut clock: FrameClock, frames: u64) -> anyhow::Result<()> {
    log::info!("Playing {} clips for {frames} frames", animation.len());

    while clock.frame_count < frames {
        let delta = clock.tick();
        let previous = animation.active_index();
        animation.update(delta)?;

        let pose = animation.transform()?;
        log::info!(
            "[{:>3}] t={} clip={} translation={} scale={} rotation={:.3}",
            clock.frame_count,
            clock.elapsed,
            animation.active_index(),
            pose.translation,
            pose.scale,
            pose.rotation,
        );
        log::debug!("uTransform = {}", pose.to_trs_matrix());

        if animation.active_index() != previous {
            log::info!("Clip {previous} -> {}", animation.active_index());
        }
    }

    Ok(())
}

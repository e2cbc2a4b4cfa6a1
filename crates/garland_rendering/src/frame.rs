//! Frame Orchestration
//!
//! One [`SceneAnimator`] runs the fixed per-frame sequence: drain the
//! control block, steer the progress driver, stage the instance buffer.
//! The windowing side is left with nothing but byte uploads and draw
//! calls, which keeps the whole animation testable without a GPU.

use garland_core::{
    ProgressDriver, SceneConfig, SceneControls, SceneLayout, ScenePhase,
};

use crate::instancing::{InstanceRanges, OrnamentInstance, SceneInstances};
use crate::photos::PhotoLibrary;

/// Summary of one animator step.
#[derive(Clone, Copy, Debug)]
pub struct FrameStats {
    /// Frames stepped since the animator was created.
    pub frame_count: u64,
    /// Phase currently driven toward.
    pub phase: ScenePhase,
    /// Instances staged for upload this frame.
    pub staged_instances: usize,
    /// True once progress sits exactly on the phase target.
    pub settled: bool,
}

/// Everything the render side needs from one animator step.
pub struct FrameUpdate<'a> {
    /// Global progress after this step.
    pub progress: f32,
    /// Accumulated scene time in seconds, fed to the sway and shimmer.
    pub elapsed: f32,
    /// Instance bytes to upload before drawing.
    pub instance_bytes: &'a [u8],
    /// Step summary.
    pub stats: FrameStats,
}

/// The per-frame scene orchestrator.
///
/// Owns the progress driver and the instance stager; borrows the layout,
/// controls and photo library each step. Draw ranges come from
/// [`ranges`](Self::ranges) and stay fixed for the whole session.
pub struct SceneAnimator {
    driver: ProgressDriver,
    instances: SceneInstances,
    elapsed: f32,
    frame_count: u64,
}

impl SceneAnimator {
    /// Builds the animator settled at `initial_phase`'s endpoint.
    ///
    /// The viewer starts [`ScenePhase::Formed`], presenting the finished
    /// tree; headless drives usually start [`ScenePhase::Chaos`] to walk
    /// the full formation.
    #[must_use]
    pub fn new(config: &SceneConfig, layout: &SceneLayout, initial_phase: ScenePhase) -> Self {
        Self {
            driver: ProgressDriver::new(initial_phase, config.driver),
            instances: SceneInstances::new(layout, config.palette.frame_border),
            elapsed: 0.0,
            frame_count: 0,
        }
    }

    /// Draw ranges into the staged instance buffer.
    #[must_use]
    pub const fn ranges(&self) -> &InstanceRanges {
        self.instances.ranges()
    }

    /// Current global progress.
    #[must_use]
    pub const fn progress(&self) -> f32 {
        self.driver.progress()
    }

    /// Phase currently driven toward.
    #[must_use]
    pub const fn phase(&self) -> ScenePhase {
        self.driver.phase()
    }

    /// Runs one frame step.
    ///
    /// Sequence, fixed: drain queued controls, apply the net phase flip,
    /// forward photo requests, advance the driver, stage every instance.
    /// `delta` is the frame time in seconds; the driver clamps it, the
    /// elapsed clock takes it as-is.
    pub fn frame<'a>(
        &'a mut self,
        layout: &SceneLayout,
        controls: &SceneControls,
        photos: &mut PhotoLibrary,
        delta: f32,
    ) -> FrameUpdate<'a> {
        let snapshot = controls.drain();
        if snapshot.wants_phase_flip() {
            let phase = self.driver.toggle();
            tracing::info!(?phase, progress = self.driver.progress(), "phase toggled");
        }
        for path in snapshot.photo_requests {
            photos.request_next(path);
        }

        let progress = self.driver.advance(delta);
        self.elapsed += delta.max(0.0);
        self.frame_count += 1;

        let stats = FrameStats {
            frame_count: self.frame_count,
            phase: self.driver.phase(),
            staged_instances: 0,
            settled: self.driver.is_settled(),
        };
        let instance_bytes = self.instances.prepare_frame(layout, progress);

        FrameUpdate {
            progress,
            elapsed: self.elapsed,
            instance_bytes,
            stats: FrameStats {
                staged_instances: instance_bytes.len() / OrnamentInstance::SIZE,
                ..stats
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use garland_procedural::{generate_layout, SceneSeed};
    use std::path::PathBuf;

    const FRAME_DELTA: f32 = 1.0 / 60.0;

    fn small_scene() -> (SceneConfig, SceneLayout) {
        let mut config = SceneConfig::default();
        config.population.foliage = 40;
        config.population.ornaments = 12;
        config.population.frames = 3;
        let layout = generate_layout(&config, SceneSeed::new(7));
        (config, layout)
    }

    #[test]
    fn test_settled_frame_stages_every_instance() {
        let (config, layout) = small_scene();
        let mut animator = SceneAnimator::new(&config, &layout, ScenePhase::Formed);
        let controls = SceneControls::new();
        let mut photos = PhotoLibrary::new(config.population.frames);

        let update = animator.frame(&layout, &controls, &mut photos, FRAME_DELTA);
        assert_eq!(update.progress, 1.0);
        assert!(update.stats.settled);
        assert_eq!(update.stats.staged_instances, 12 + 3);
        assert_eq!(
            update.instance_bytes.len(),
            (12 + 3) * OrnamentInstance::SIZE
        );
    }

    #[test]
    fn test_toggle_request_reverses_the_drive() {
        let (config, layout) = small_scene();
        let mut animator = SceneAnimator::new(&config, &layout, ScenePhase::Formed);
        let controls = SceneControls::new();
        let mut photos = PhotoLibrary::new(config.population.frames);

        controls.request_toggle();
        let update = animator.frame(&layout, &controls, &mut photos, FRAME_DELTA);
        assert_eq!(update.stats.phase, ScenePhase::Chaos);
        assert!(update.progress < 1.0);
        assert!(update.progress > 0.0);
        assert!(!update.stats.settled);
    }

    #[test]
    fn test_paired_toggles_cancel_out() {
        let (config, layout) = small_scene();
        let mut animator = SceneAnimator::new(&config, &layout, ScenePhase::Formed);
        let controls = SceneControls::new();
        let mut photos = PhotoLibrary::new(config.population.frames);

        controls.request_toggle();
        controls.request_toggle();
        let update = animator.frame(&layout, &controls, &mut photos, FRAME_DELTA);
        assert_eq!(update.stats.phase, ScenePhase::Formed);
        assert_eq!(update.progress, 1.0);
    }

    #[test]
    fn test_photo_requests_reach_the_library() {
        let (config, layout) = small_scene();
        let mut animator = SceneAnimator::new(&config, &layout, ScenePhase::Formed);
        let controls = SceneControls::new();
        let mut photos = PhotoLibrary::new(config.population.frames);

        controls.request_photo(PathBuf::from("/missing/one.png"));
        controls.request_photo(PathBuf::from("/missing/two.png"));
        animator.frame(&layout, &controls, &mut photos, FRAME_DELTA);

        // Requests bind to slots in rotation order; results have not been
        // polled, so both sit in the loading state.
        assert_eq!(photos.slot(0), Some(&crate::photos::PhotoSlot::Loading));
        assert_eq!(photos.slot(1), Some(&crate::photos::PhotoSlot::Loading));
        assert_eq!(photos.slot(2), Some(&crate::photos::PhotoSlot::Empty));
    }

    #[test]
    fn test_elapsed_takes_raw_delta_while_driver_clamps() {
        let (config, layout) = small_scene();
        let mut animator = SceneAnimator::new(&config, &layout, ScenePhase::Chaos);
        let controls = SceneControls::new();
        let mut photos = PhotoLibrary::new(config.population.frames);

        controls.request_toggle();
        let update = animator.frame(&layout, &controls, &mut photos, 0.5);
        assert_eq!(update.elapsed, 0.5);
        // Driver saw at most max_delta of that stall.
        let ceiling = config.driver.max_delta * config.driver.rate * config.driver.gain;
        assert!(update.progress <= ceiling + 1e-6);
    }
}

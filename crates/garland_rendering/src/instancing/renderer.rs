//! Per-frame instance staging.
//!
//! The CPU half of instanced drawing: every frame, each ornament's lag
//! weight turns the global progress into a local one, the two stored
//! positions blend, and one transform lands in the staging buffer. Photo
//! frames ride along at the end of the same buffer with their fixed curve.
//!
//! The GPU half (buffer creation, draw calls) lives in the viewer binary.

use std::ops::Range;

use garland_core::{eased_progress, lagged_progress, FramePlacement, OrnamentKind, Rgb, SceneLayout};

use super::buffer::InstanceBuffer;
use super::instance_data::OrnamentInstance;

/// Scale factor of a fully dispersed instance.
const SETTLE_SCALE_FLOOR: f32 = 0.8;

/// Extra scale gained as an instance settles onto the tree.
const SETTLE_SCALE_GROWTH: f32 = 0.4;

/// Emissive boost on the photo frame borders.
const FRAME_BORDER_EMISSION: f32 = 0.1;

/// Contiguous instance ranges per draw group, in draw order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstanceRanges {
    /// Baubles, drawn with the unit sphere.
    pub baubles: Range<u32>,
    /// Gifts, drawn with the unit cube.
    pub gifts: Range<u32>,
    /// Lamps, drawn with the unit sphere.
    pub lamps: Range<u32>,
    /// Photo frames, drawn as billboard quads one slot at a time.
    pub frames: Range<u32>,
}

impl InstanceRanges {
    /// The range for one ornament kind.
    #[must_use]
    pub fn for_kind(&self, kind: OrnamentKind) -> Range<u32> {
        match kind {
            OrnamentKind::Bauble => self.baubles.clone(),
            OrnamentKind::Gift => self.gifts.clone(),
            OrnamentKind::Lamp => self.lamps.clone(),
        }
    }
}

/// Stages every instanced object (ornaments, then frames) into one buffer.
///
/// Relies on the generator's grouping invariant: the ornament slice is
/// contiguous by kind in [`OrnamentKind::ALL`] order, so the ranges computed
/// at startup stay valid for the whole session.
pub struct SceneInstances {
    /// Double-buffered staging for GPU upload.
    buffer: InstanceBuffer,
    /// Draw ranges, fixed at startup.
    ranges: InstanceRanges,
    /// Border color applied to every frame instance.
    frame_border: Rgb,
}

impl SceneInstances {
    /// Creates the stager and fixes the draw ranges for `layout`.
    #[must_use]
    pub fn new(layout: &SceneLayout, frame_border: Rgb) -> Self {
        let [baubles, gifts, lamps] = layout.kind_counts();
        let bauble_end = baubles as u32;
        let gift_end = bauble_end + gifts as u32;
        let lamp_end = gift_end + lamps as u32;
        let frame_end = lamp_end + layout.frames().len() as u32;

        Self {
            buffer: InstanceBuffer::new(),
            ranges: InstanceRanges {
                baubles: 0..bauble_end,
                gifts: bauble_end..gift_end,
                lamps: gift_end..lamp_end,
                frames: lamp_end..frame_end,
            },
            frame_border,
        }
    }

    /// Draw ranges into the staged buffer.
    #[must_use]
    pub const fn ranges(&self) -> &InstanceRanges {
        &self.ranges
    }

    /// Instances staged by the last `prepare_frame`.
    #[must_use]
    pub const fn instance_count(&self) -> usize {
        self.buffer.instance_count()
    }

    /// Stages the whole scene at `progress` and returns the upload bytes.
    ///
    /// Ornaments scale up as they settle; frames keep a constant scale and
    /// follow the shared drift curve instead of per-instance weights.
    pub fn prepare_frame(&mut self, layout: &SceneLayout, progress: f32) -> &[u8] {
        self.buffer.begin_frame();
        let mut dropped = 0_usize;

        for ornament in layout.ornaments() {
            let local = lagged_progress(progress, ornament.lag_weight);
            let position = ornament.chaos_position.lerp(ornament.target_position, local);
            let scale =
                (SETTLE_SCALE_FLOOR + local * SETTLE_SCALE_GROWTH) * ornament.kind.base_radius();
            let instance = OrnamentInstance::new(position, scale, ornament.color, ornament.emission);
            if !self.buffer.push(instance) {
                dropped += 1;
            }
        }

        let drift = eased_progress(progress, FramePlacement::DRIFT_EXPONENT);
        for frame in layout.frames() {
            let position = frame.chaos_position.lerp(frame.target_position, drift);
            let instance =
                OrnamentInstance::new(position, 1.0, self.frame_border, FRAME_BORDER_EMISSION);
            if !self.buffer.push(instance) {
                dropped += 1;
            }
        }

        if dropped > 0 {
            tracing::warn!(dropped, "instance buffer full, some objects not staged");
        }

        self.buffer.as_bytes()
    }
}

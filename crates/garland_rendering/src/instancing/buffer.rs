//! CPU staging buffer for instanced rendering.
//!
//! Pre-allocates at startup so the frame path never grows a Vec.

use super::instance_data::OrnamentInstance;

/// Maximum instances per frame.
///
/// The reference scene stages 186 (180 ornaments + 6 frames); the cap only
/// exists so an experimental config cannot silently allocate mid-frame.
pub const MAX_INSTANCES: usize = 4096;

/// Pre-allocated staging buffer for instance data.
///
/// Double buffered: the previous frame's data stays intact while the next
/// frame is written, so an upload that is still in flight never reads a
/// half-written slice.
pub struct InstanceBuffer {
    /// CPU-side staging buffers (double buffered).
    staging: [Vec<OrnamentInstance>; 2],

    /// Current write buffer index.
    write_index: usize,

    /// Number of instances staged this frame.
    instance_count: usize,
}

impl InstanceBuffer {
    /// Creates an instance buffer with pre-allocated capacity.
    #[must_use]
    pub fn new() -> Self {
        Self {
            staging: [
                Vec::with_capacity(MAX_INSTANCES),
                Vec::with_capacity(MAX_INSTANCES),
            ],
            write_index: 0,
            instance_count: 0,
        }
    }

    /// Begins a new frame, swapping buffers and clearing the write side.
    pub fn begin_frame(&mut self) {
        self.write_index = 1 - self.write_index;
        self.staging[self.write_index].clear();
        self.instance_count = 0;
    }

    /// Adds one instance. Returns false if the buffer is full.
    #[inline]
    pub fn push(&mut self, instance: OrnamentInstance) -> bool {
        if self.instance_count >= MAX_INSTANCES {
            return false;
        }
        self.staging[self.write_index].push(instance);
        self.instance_count += 1;
        true
    }

    /// Number of instances staged this frame.
    #[must_use]
    pub const fn instance_count(&self) -> usize {
        self.instance_count
    }

    /// The staged frame as bytes, ready for `queue.write_buffer`.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.staging[self.write_index])
    }
}

impl Default for InstanceBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_buffering() {
        let mut buffer = InstanceBuffer::new();

        buffer.begin_frame();
        assert!(buffer.push(OrnamentInstance::default()));
        assert_eq!(buffer.instance_count(), 1);

        // Next frame starts fresh on the other side.
        buffer.begin_frame();
        assert_eq!(buffer.instance_count(), 0);
        assert!(buffer.as_bytes().is_empty());
    }

    #[test]
    fn test_bytes_cover_staged_instances() {
        let mut buffer = InstanceBuffer::new();
        buffer.begin_frame();
        for _ in 0..10 {
            buffer.push(OrnamentInstance::default());
        }
        assert_eq!(buffer.as_bytes().len(), 10 * OrnamentInstance::SIZE);
    }

    #[test]
    fn test_full_buffer_rejects() {
        let mut buffer = InstanceBuffer::new();
        buffer.begin_frame();
        for _ in 0..MAX_INSTANCES {
            assert!(buffer.push(OrnamentInstance::default()));
        }
        assert!(!buffer.push(OrnamentInstance::default()));
        assert_eq!(buffer.instance_count(), MAX_INSTANCES);
    }
}

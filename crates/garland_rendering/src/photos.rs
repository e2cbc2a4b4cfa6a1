//! Photo Library
//!
//! Frame imagery resolves off the frame path. A request marks the slot
//! `Loading` and hands the file to a worker thread; the worker decodes to
//! RGBA8 and sends the result back over an unbounded channel. The frame
//! loop polls the receiver once per frame and uploads whatever arrived.
//! A slot with nothing ready renders the placeholder gradient, so a slow
//! or failed decode never stalls or breaks a frame.

use std::path::{Path, PathBuf};
use std::thread;

use crossbeam_channel::{unbounded, Receiver, Sender};
use garland_core::color::{FOLIAGE_LOW, GOLD_HIGHLIGHT};

/// Decoded RGBA8 image ready for texture upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Tightly packed RGBA8 rows, `width * height * 4` bytes.
    pub pixels: Vec<u8>,
}

impl PhotoImage {
    /// Side length of the generated placeholder.
    pub const PLACEHOLDER_SIZE: u32 = 64;

    /// Deterministic placeholder: a dim vertical gradient from gold into
    /// the foliage base hue. Uploaded once and shared by every slot that
    /// has no photo yet.
    #[must_use]
    pub fn placeholder() -> Self {
        let size = Self::PLACEHOLDER_SIZE;
        let mut pixels = Vec::with_capacity((size * size * 4) as usize);
        for y in 0..size {
            let t = y as f32 / (size - 1) as f32;
            let r = GOLD_HIGHLIGHT.r + (FOLIAGE_LOW.r - GOLD_HIGHLIGHT.r) * t;
            let g = GOLD_HIGHLIGHT.g + (FOLIAGE_LOW.g - GOLD_HIGHLIGHT.g) * t;
            let b = GOLD_HIGHLIGHT.b + (FOLIAGE_LOW.b - GOLD_HIGHLIGHT.b) * t;
            for _ in 0..size {
                pixels.push((r * 0.45 * 255.0) as u8);
                pixels.push((g * 0.45 * 255.0) as u8);
                pixels.push((b * 0.45 * 255.0) as u8);
                pixels.push(255);
            }
        }
        Self {
            width: size,
            height: size,
            pixels,
        }
    }

    fn decode(path: &Path) -> Result<Self, image::ImageError> {
        let decoded = image::open(path)?.to_rgba8();
        Ok(Self {
            width: decoded.width(),
            height: decoded.height(),
            pixels: decoded.into_raw(),
        })
    }
}

/// Lifecycle of one frame slot's imagery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhotoSlot {
    /// No photo assigned; render the placeholder.
    Empty,
    /// A decode is in flight; render the placeholder until it lands.
    Loading,
    /// Decoded and ready for upload.
    Ready(PhotoImage),
}

impl PhotoSlot {
    /// True once a decoded image is available.
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }
}

struct DecodeOutcome {
    slot: usize,
    stamp: u32,
    path: PathBuf,
    result: Result<PhotoImage, image::ImageError>,
}

/// One slot per photo frame, filled asynchronously.
pub struct PhotoLibrary {
    slots: Vec<PhotoSlot>,
    // Request stamp per slot; a landed decode older than the stamp is stale.
    stamps: Vec<u32>,
    next_slot: usize,
    outbox: Sender<DecodeOutcome>,
    results: Receiver<DecodeOutcome>,
}

impl PhotoLibrary {
    /// Creates an empty library with `slot_count` slots.
    #[must_use]
    pub fn new(slot_count: usize) -> Self {
        let (outbox, results) = unbounded();
        Self {
            slots: vec![PhotoSlot::Empty; slot_count],
            stamps: vec![0; slot_count],
            next_slot: 0,
            outbox,
            results,
        }
    }

    /// Number of slots.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Current state of one slot.
    #[must_use]
    pub fn slot(&self, index: usize) -> Option<&PhotoSlot> {
        self.slots.get(index)
    }

    /// Binds initial photo paths to slots in index order. Paths beyond the
    /// slot count are ignored with a warning; unbound slots stay on the
    /// placeholder.
    pub fn request_initial(&mut self, paths: Vec<PathBuf>) {
        let capacity = self.slots.len();
        if paths.len() > capacity {
            tracing::warn!(
                requested = paths.len(),
                capacity,
                "more photos than frame slots, extras ignored"
            );
        }
        for (index, path) in paths.into_iter().take(capacity).enumerate() {
            self.request(index, path);
        }
        self.next_slot = 0;
    }

    /// Assigns a photo to the next slot in rotation. Slots fill in order;
    /// once all are bound, new drops recycle from the first.
    pub fn request_next(&mut self, path: PathBuf) {
        if self.slots.is_empty() {
            tracing::warn!(path = %path.display(), "photo dropped but the scene has no frame slots");
            return;
        }
        let slot = self.next_slot;
        self.next_slot = (self.next_slot + 1) % self.slots.len();
        self.request(slot, path);
    }

    /// Starts an asynchronous decode for one slot. The slot shows the
    /// placeholder until the result lands.
    pub fn request(&mut self, index: usize, path: PathBuf) {
        let Some(slot) = self.slots.get_mut(index) else {
            tracing::warn!(index, capacity = self.slots.len(), "photo request for missing slot ignored");
            return;
        };
        *slot = PhotoSlot::Loading;
        self.stamps[index] = self.stamps[index].wrapping_add(1);
        let stamp = self.stamps[index];
        let outbox = self.outbox.clone();
        let worker = thread::Builder::new().name(format!("photo-decode-{index}"));
        let spawned = worker.spawn(move || {
            let result = PhotoImage::decode(&path);
            // Receiver dropped means the library is gone; nothing to do.
            let _ = outbox.send(DecodeOutcome {
                slot: index,
                stamp,
                path,
                result,
            });
        });
        if let Err(error) = spawned {
            tracing::warn!(index, %error, "could not spawn photo decode worker");
            self.slots[index] = PhotoSlot::Empty;
        }
    }

    /// Drains decode results that arrived since the last poll. Returns the
    /// indices of slots that became ready, in arrival order; the caller
    /// uploads those textures this frame. Failed decodes return their slot
    /// to the placeholder.
    pub fn poll(&mut self) -> Vec<usize> {
        let mut fresh = Vec::new();
        while let Ok(outcome) = self.results.try_recv() {
            if self.stamps.get(outcome.slot) != Some(&outcome.stamp) {
                tracing::debug!(slot = outcome.slot, "stale photo decode discarded");
                continue;
            }
            match outcome.result {
                Ok(image) => {
                    tracing::info!(
                        slot = outcome.slot,
                        width = image.width,
                        height = image.height,
                        path = %outcome.path.display(),
                        "photo ready"
                    );
                    self.slots[outcome.slot] = PhotoSlot::Ready(image);
                    fresh.push(outcome.slot);
                }
                Err(error) => {
                    tracing::warn!(
                        slot = outcome.slot,
                        path = %outcome.path.display(),
                        %error,
                        "photo decode failed, slot returns to placeholder"
                    );
                    self.slots[outcome.slot] = PhotoSlot::Empty;
                }
            }
        }
        fresh
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn poll_until<F: Fn(&PhotoLibrary) -> bool>(library: &mut PhotoLibrary, done: F) {
        for _ in 0..500 {
            library.poll();
            if done(library) {
                return;
            }
            thread::sleep(Duration::from_millis(10));
        }
        panic!("photo decode did not settle in time");
    }

    #[test]
    fn test_placeholder_is_deterministic() {
        let a = PhotoImage::placeholder();
        let b = PhotoImage::placeholder();
        assert_eq!(a, b);
        assert_eq!(
            a.pixels.len(),
            (PhotoImage::PLACEHOLDER_SIZE * PhotoImage::PLACEHOLDER_SIZE * 4) as usize
        );
    }

    #[test]
    fn test_decode_lands_in_requested_slot() {
        let path = std::env::temp_dir().join("garland_photo_test.png");
        let pixel = image::Rgba([200u8, 40, 40, 255]);
        image::RgbaImage::from_pixel(3, 2, pixel)
            .save(&path)
            .unwrap();

        let mut library = PhotoLibrary::new(6);
        library.request(2, path);
        assert_eq!(library.slot(2), Some(&PhotoSlot::Loading));

        poll_until(&mut library, |lib| {
            lib.slot(2).is_some_and(PhotoSlot::is_ready)
        });
        let PhotoSlot::Ready(image) = library.slot(2).unwrap() else {
            panic!("slot should be ready");
        };
        assert_eq!((image.width, image.height), (3, 2));
        assert_eq!(&image.pixels[..4], &[200, 40, 40, 255]);
    }

    #[test]
    fn test_failed_decode_returns_to_placeholder() {
        let mut library = PhotoLibrary::new(2);
        library.request(0, PathBuf::from("/nonexistent/garland/photo.png"));
        poll_until(&mut library, |lib| {
            lib.slot(0) != Some(&PhotoSlot::Loading)
        });
        assert_eq!(library.slot(0), Some(&PhotoSlot::Empty));
    }

    #[test]
    fn test_out_of_range_request_is_ignored() {
        let mut library = PhotoLibrary::new(2);
        library.request(9, PathBuf::from("anything.png"));
        assert_eq!(library.slot(0), Some(&PhotoSlot::Empty));
        assert_eq!(library.slot(1), Some(&PhotoSlot::Empty));
        assert!(library.slot(9).is_none());
    }

    #[test]
    fn test_rotation_fills_slots_in_order_then_recycles() {
        let mut library = PhotoLibrary::new(2);
        library.request_next(PathBuf::from("/missing/a.png"));
        library.request_next(PathBuf::from("/missing/b.png"));
        library.request_next(PathBuf::from("/missing/c.png"));
        // Third drop recycled slot 0, so its stamp moved twice.
        assert_eq!(library.stamps, vec![2, 1]);
    }

    #[test]
    fn test_initial_paths_truncate_to_slot_count() {
        let mut library = PhotoLibrary::new(2);
        library.request_initial(vec![
            PathBuf::from("/missing/a.png"),
            PathBuf::from("/missing/b.png"),
            PathBuf::from("/missing/c.png"),
        ]);
        assert_eq!(library.stamps, vec![1, 1]);
    }
}

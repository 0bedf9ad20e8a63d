//! Still-frame capture composition.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use cineguide_models::TargetRect;

use crate::gesture::{PointerSample, SelectionGesture};

/// A captured still image, encoded as a base64 JPEG data URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedFrame(String);

impl EncodedFrame {
    /// Encode raw JPEG bytes into the data-URL form the analyze endpoint
    /// accepts.
    pub fn from_jpeg(bytes: &[u8]) -> Self {
        Self(format!("data:image/jpeg;base64,{}", STANDARD.encode(bytes)))
    }

    /// Wrap an already-encoded data URL.
    pub fn from_data_url(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Source of still frames. The live camera feed implements this; a feed
/// that is not ready yields `None`.
pub trait FrameSource {
    fn grab_still(&self) -> Option<EncodedFrame>;
}

/// The capture surface: a live feed composed with the box-selection
/// gesture. The committed target survives until the next gesture ends.
pub struct CaptureSurface<S> {
    source: S,
    gesture: SelectionGesture,
    locked_target: Option<TargetRect>,
}

impl<S: FrameSource> CaptureSurface<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            gesture: SelectionGesture::new(),
            locked_target: None,
        }
    }

    /// Begin a selection gesture at the down position.
    pub fn pointer_down(&mut self, sample: PointerSample) {
        self.gesture.pointer_down(sample);
    }

    /// Advance the live selection.
    pub fn pointer_move(&mut self, sample: PointerSample) -> Option<TargetRect> {
        self.gesture.pointer_move(sample)
    }

    /// End the gesture, committing a wide-enough selection as the locked
    /// target or clearing to no target.
    pub fn pointer_up(&mut self) -> Option<TargetRect> {
        self.locked_target = self.gesture.pointer_up();
        self.locked_target
    }

    /// The committed target from the last gesture, if any.
    pub fn locked_target(&self) -> Option<TargetRect> {
        self.locked_target
    }

    /// Live selection rectangle while dragging.
    pub fn live_selection(&self) -> Option<TargetRect> {
        self.gesture.live_selection()
    }

    /// Sample the current video frame. Yields nothing while the feed is
    /// not ready; no error is raised.
    pub fn capture_now(&self) -> Option<EncodedFrame> {
        self.source.grab_still()
    }

    /// Capture capability handed to whichever control triggers the
    /// shutter. The surface keeps ownership; the trigger only borrows
    /// the ability to capture.
    pub fn capture_handle(&self) -> CaptureHandle<'_, S> {
        CaptureHandle { surface: self }
    }
}

/// Borrowed capture capability for an external shutter control.
pub struct CaptureHandle<'a, S> {
    surface: &'a CaptureSurface<S>,
}

impl<S: FrameSource> CaptureHandle<'_, S> {
    pub fn capture_now(&self) -> Option<EncodedFrame> {
        self.surface.capture_now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::PointerSample;

    struct ReadyFeed;

    impl FrameSource for ReadyFeed {
        fn grab_still(&self) -> Option<EncodedFrame> {
            Some(EncodedFrame::from_jpeg(&[0xFF, 0xD8, 0xFF, 0xD9]))
        }
    }

    struct ColdFeed;

    impl FrameSource for ColdFeed {
        fn grab_still(&self) -> Option<EncodedFrame> {
            None
        }
    }

    #[test]
    fn test_encoded_frame_is_a_data_url() {
        let frame = EncodedFrame::from_jpeg(&[0xFF, 0xD8]);
        assert!(frame.as_str().starts_with("data:image/jpeg;base64,"));
    }

    #[test]
    fn test_capture_through_handle() {
        let surface = CaptureSurface::new(ReadyFeed);
        let handle = surface.capture_handle();
        assert!(handle.capture_now().is_some());
    }

    #[test]
    fn test_not_ready_feed_yields_nothing() {
        let surface = CaptureSurface::new(ColdFeed);
        assert_eq!(surface.capture_now(), None);
    }

    #[test]
    fn test_gesture_commits_locked_target() {
        let mut surface = CaptureSurface::new(ReadyFeed);
        surface.pointer_down(PointerSample::touch(0.0, 0.0));
        surface.pointer_move(PointerSample::touch(80.0, 60.0));
        surface.pointer_up();
        assert!(surface.locked_target().is_some());

        // A narrow follow-up gesture clears the lock.
        surface.pointer_down(PointerSample::touch(0.0, 0.0));
        surface.pointer_move(PointerSample::touch(4.0, 60.0));
        surface.pointer_up();
        assert_eq!(surface.locked_target(), None);
    }
}

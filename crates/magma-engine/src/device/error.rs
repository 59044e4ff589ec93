/// What the caller should do after a failed frame acquisition.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface was reconfigured; the next frame may succeed.
    Reconfigured,
    /// Transient error; drop this frame.
    SkipFrame,
    /// Unrecoverable (commonly OOM).
    Fatal,
}

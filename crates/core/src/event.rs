/// All messages (events) that can flow through the application event bus.
///
/// Sources:
/// - Simulation timer      → `Tick`
/// - Control buttons       → `ToggleSimulation`, `ClearHistory`, `Download`
/// - Speed slider          → `SpeedChanged`
/// - Config watcher task   → `ConfigReloaded`
/// - Toast timer           → `DismissNotice`
#[derive(Debug, Clone)]
pub enum Message {
    /// One simulation step: sample, push, redraw.
    Tick,

    // ── User actions ──────────────────────────────────────────────────────────
    /// Start or stop the simulation timer.
    ToggleSimulation,
    /// Drop every sample in the history window.
    ClearHistory,
    /// Export the history window as JSON.
    Download,
    /// Slider moved; carries the new tick interval in milliseconds.
    SpeedChanged(u64),

    // ── Config ────────────────────────────────────────────────────────────────
    /// Config file changed on disk; triggers a live reload.
    ConfigReloaded,

    // ── Internal ──────────────────────────────────────────────────────────────
    /// Hide the toast with this sequence number if it is still showing.
    DismissNotice(u64),
}

/// Visual flavour of a [`Notice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A short user-facing status message, shown as a toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: NoticeKind::Success }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: NoticeKind::Error }
    }
}

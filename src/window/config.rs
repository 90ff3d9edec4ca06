use std::path::{Path, PathBuf};

// ── WindowMode ────────────────────────────────────────────────────────────────

/// Controls how the OS window is presented.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WindowMode {
    /// Standard decorated window at the configured size.
    Windowed,
    /// Borderless window covering the current monitor.
    Borderless,
}

// ── WindowConfig ──────────────────────────────────────────────────────────────

/// Window and frame-pacing settings for the demo.
#[derive(Clone, Debug, PartialEq)]
pub struct WindowConfig {
    pub title: String,
    /// Inner width in physical pixels.
    pub width: u32,
    /// Inner height in physical pixels.
    pub height: u32,
    pub mode: WindowMode,
    /// Update ticks per second; camera movement is applied once per tick.
    pub target_fps: u32,
}

impl Default for WindowConfig {
    /// 800 × 450, windowed, 60 ticks per second.
    fn default() -> Self {
        Self {
            title: "tilescroll".into(),
            width: 800,
            height: 450,
            mode: WindowMode::Windowed,
            target_fps: 60,
        }
    }
}

impl WindowConfig {
    /// Seconds per update tick.  A zero `target_fps` is treated as 1.
    pub fn fixed_dt(&self) -> f32 {
        1.0 / self.target_fps.max(1) as f32
    }
}

// ── MediaPaths ────────────────────────────────────────────────────────────────

/// Files the demo loads at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaPaths {
    pub map: PathBuf,
    pub tileset: PathBuf,
    pub background: PathBuf,
}

impl MediaPaths {
    /// `map.json`, `tileset.png` and `background.png` inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            map: dir.join("map.json"),
            tileset: dir.join("tileset.png"),
            background: dir.join("background.png"),
        }
    }
}

impl Default for MediaPaths {
    fn default() -> Self {
        Self::in_dir("./media")
    }
}

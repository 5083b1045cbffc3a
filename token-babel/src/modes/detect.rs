//! Brand mode detection
//!
//! A brand supports light/dark modes when its token sources contain both
//! `brands/<brand>/color/light` and `brands/<brand>/color/dark`. Results are
//! cached per (brand, tokens directory) until [`ModeDetector::clear`].

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mode support of one brand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModeConfig {
    pub has_modes: bool,
    pub light_path: Option<String>,
    pub dark_path: Option<String>,
}

impl ModeConfig {
    pub fn without_modes() -> Self {
        ModeConfig::default()
    }

    pub fn with_modes(brand: &str) -> Self {
        ModeConfig {
            has_modes: true,
            light_path: Some(format!("{brand}/color/light")),
            dark_path: Some(format!("{brand}/color/dark")),
        }
    }
}

/// Filesystem check used by the detector.
pub trait DirProbe {
    fn is_readable_dir(&self, path: &Path) -> bool;
}

/// Probes the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl DirProbe for FsProbe {
    fn is_readable_dir(&self, path: &Path) -> bool {
        std::fs::read_dir(path).is_ok()
    }
}

#[derive(Debug)]
pub struct ModeDetector<P: DirProbe = FsProbe> {
    probe: P,
    cache: HashMap<(String, PathBuf), ModeConfig>,
}

impl ModeDetector<FsProbe> {
    pub fn new() -> Self {
        Self::with_probe(FsProbe)
    }
}

impl Default for ModeDetector<FsProbe> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: DirProbe> ModeDetector<P> {
    pub fn with_probe(probe: P) -> Self {
        ModeDetector {
            probe,
            cache: HashMap::new(),
        }
    }

    pub fn detect(&mut self, brand: &str, tokens_dir: &Path) -> ModeConfig {
        let key = (brand.to_string(), tokens_dir.to_path_buf());
        if let Some(cached) = self.cache.get(&key) {
            tracing::debug!(brand, "mode detection cache hit");
            return cached.clone();
        }

        let color_dir = tokens_dir.join("brands").join(brand).join("color");
        let config = if self.probe.is_readable_dir(&color_dir.join("light"))
            && self.probe.is_readable_dir(&color_dir.join("dark"))
        {
            ModeConfig::with_modes(brand)
        } else {
            ModeConfig::without_modes()
        };
        tracing::debug!(brand, has_modes = config.has_modes, "detected color modes");

        self.cache.insert(key, config.clone());
        config
    }

    pub fn clear(&mut self) {
        self.cache.clear();
    }

    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }
}

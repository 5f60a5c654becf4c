use std::path::{Path, PathBuf};
use tokio::fs;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Ding,
    Victory,
    Background,
}

impl Cue {
    pub const ALL: [Cue; 3] = [Cue::Ding, Cue::Victory, Cue::Background];

    pub fn file_name(self) -> &'static str {
        match self {
            Cue::Ding => "ding.mp3",
            Cue::Victory => "victory.mp3",
            Cue::Background => "background.mp3",
        }
    }

    pub fn from_file_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|cue| cue.file_name() == name)
    }

    pub fn url(self) -> String {
        format!("/audio/{}", self.file_name())
    }
}

/// Which cues can actually be played right now.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AvailableCues {
    pub ding: bool,
    pub victory: bool,
    pub background: bool,
}

/// Optional audio files. Missing files are skipped, never reported as errors.
#[derive(Debug, Clone)]
pub struct SoundAssets {
    dir: PathBuf,
    enabled: bool,
}

impl SoundAssets {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            enabled: cfg!(feature = "sound-cues"),
        }
    }

    pub fn disabled() -> Self {
        Self {
            dir: PathBuf::new(),
            enabled: false,
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub async fn locate(&self, cue: Cue) -> Option<PathBuf> {
        if !self.enabled {
            return None;
        }
        let path = self.dir.join(cue.file_name());
        match fs::metadata(&path).await {
            Ok(meta) if meta.is_file() => Some(path),
            _ => None,
        }
    }

    pub async fn available(&self) -> AvailableCues {
        AvailableCues {
            ding: self.locate(Cue::Ding).await.is_some(),
            victory: self.locate(Cue::Victory).await.is_some(),
            background: self.locate(Cue::Background).await.is_some(),
        }
    }
}

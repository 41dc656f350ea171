use std::env;
use std::path::PathBuf;

/// Environment variable naming the encoder binary when it is not `ffmpeg` on `PATH`.
pub const FFMPEG_ENV: &str = "WEBCONVERT_FFMPEG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub source_dir: PathBuf,
    pub dest_dir: PathBuf,
    pub ffmpeg: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self::with_ffmpeg(env::var_os(FFMPEG_ENV).map(PathBuf::from))
    }

    fn with_ffmpeg(ffmpeg: Option<PathBuf>) -> Self {
        let mut config = Self::default();
        if let Some(ffmpeg) = ffmpeg.filter(|p| !p.as_os_str().is_empty()) {
            config.ffmpeg = ffmpeg;
        }
        config
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("videos"),
            dest_dir: PathBuf::from("videos_converted"),
            ffmpeg: PathBuf::from("ffmpeg"),
        }
    }
}

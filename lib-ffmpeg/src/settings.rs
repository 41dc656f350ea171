use std::ffi::OsString;
use std::path::Path;

/// Fixed encoder parameters for one output flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeSettings {
    pub video_codec: &'static str,
    pub profile: &'static str,
    pub level: &'static str,
    pub preset: &'static str,
    /// Constant rate factor, lower is better quality and bigger files.
    pub crf: u8,
    pub audio_codec: &'static str,
    pub audio_bitrate_kbps: u32,
    pub movflags: &'static str,
    /// Videos wider than this are scaled down, narrower ones are left alone.
    pub max_width: u32,
}

/// H.264 high@4.0 + AAC with the moov atom up front, capped at 720p width.
pub const WEB_OPTIMIZED: EncodeSettings = EncodeSettings {
    video_codec: "libx264",
    profile: "high",
    level: "4.0",
    preset: "medium",
    crf: 23,
    audio_codec: "aac",
    audio_bitrate_kbps: 128,
    movflags: "+faststart",
    max_width: 1280,
};

impl EncodeSettings {
    /// `-2` keeps the aspect ratio and rounds the height to an even number.
    pub fn scale_filter(&self) -> String {
        format!("scale='min({},iw)':-2", self.max_width)
    }

    pub fn args(&self, input: &Path, output: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = Vec::with_capacity(22);
        args.push("-i".into());
        args.push(input.as_os_str().to_owned());

        let options = [
            ("-c:v", self.video_codec.to_string()),
            ("-profile:v", self.profile.to_string()),
            ("-level", self.level.to_string()),
            ("-preset", self.preset.to_string()),
            ("-crf", self.crf.to_string()),
            ("-c:a", self.audio_codec.to_string()),
            ("-b:a", format!("{}k", self.audio_bitrate_kbps)),
            ("-movflags", self.movflags.to_string()),
            ("-vf", self.scale_filter()),
        ];
        for (flag, value) in options {
            args.push(flag.into());
            args.push(value.into());
        }

        args.push("-y".into());
        args.push(output.as_os_str().to_owned());
        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[OsString]) -> Vec<String> {
        args.iter().map(|a| a.to_string_lossy().into_owned()).collect()
    }

    #[test]
    fn web_optimized_args_match_ffmpeg_command_line() {
        let args = WEB_OPTIMIZED.args(
            Path::new("videos/Christmas_Work.mp4"),
            Path::new("videos_converted/Christmas_Work.mp4"),
        );

        assert_eq!(
            strings(&args),
            vec![
                "-i",
                "videos/Christmas_Work.mp4",
                "-c:v",
                "libx264",
                "-profile:v",
                "high",
                "-level",
                "4.0",
                "-preset",
                "medium",
                "-crf",
                "23",
                "-c:a",
                "aac",
                "-b:a",
                "128k",
                "-movflags",
                "+faststart",
                "-vf",
                "scale='min(1280,iw)':-2",
                "-y",
                "videos_converted/Christmas_Work.mp4",
            ]
        );
    }

    #[test]
    fn output_path_is_always_last() {
        let args = WEB_OPTIMIZED.args(Path::new("in dir/a b.mp4"), Path::new("out dir/a b.mp4"));
        assert_eq!(args.last().unwrap(), "out dir/a b.mp4");
        assert_eq!(args[1], "in dir/a b.mp4");
    }

    #[test]
    fn scale_filter_follows_max_width() {
        let settings = EncodeSettings {
            max_width: 640,
            ..WEB_OPTIMIZED
        };
        assert_eq!(settings.scale_filter(), "scale='min(640,iw)':-2");
    }
}

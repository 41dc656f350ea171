use anyhow::Result;
use lib_ffmpeg::Ffmpeg;
use webconvert::{BatchConverter, Config, VIDEO_FILES};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(webconvert::logging::env_filter())
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env();
    let ffmpeg = Ffmpeg::new(config.ffmpeg.clone());
    tracing::debug!(
        source = %config.source_dir.display(),
        dest = %config.dest_dir.display(),
        ffmpeg = %ffmpeg.program().display(),
        "starting batch conversion"
    );

    let converter = BatchConverter::new(ffmpeg, config.source_dir, config.dest_dir);
    converter.run(VIDEO_FILES, &mut std::io::stdout()).await
}

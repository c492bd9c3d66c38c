use anyhow::{Context, Result};
use tessera_engine::logging::{init_logging, LoggingConfig};

mod scene;

use scene::{ConstantBuffers, DemoScene};

const DEFAULT_FRAMES: u32 = 120;
const REPORT_EVERY: u32 = 30;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let frames = parse_frame_count(std::env::args().nth(1).as_deref())?;
    log::info!("running {frames} headless frames");

    let mut scene = DemoScene::new();
    let mut buffers = ConstantBuffers::default();

    for index in 0..frames {
        scene.update();
        scene
            .render(&mut buffers)
            .with_context(|| format!("failed to assemble frame {index}"))?;

        if index % REPORT_EVERY == 0 {
            log::debug!(
                "frame {index}: sphere rotate.y = {:.3}, {} bytes uploaded",
                scene.sphere.rotate.y,
                buffers.total_len()
            );
        }
    }

    if let Some(wvp) = scene.sphere_wvp() {
        println!();
        println!("  sphere WVP after {frames} frames:");
        for row in wvp.rows() {
            println!("    [{:>10.5} {:>10.5} {:>10.5} {:>10.5}]", row[0], row[1], row[2], row[3]);
        }
        println!();
    }

    Ok(())
}

fn parse_frame_count(arg: Option<&str>) -> Result<u32> {
    match arg {
        None => Ok(DEFAULT_FRAMES),
        Some(s) => s
            .parse()
            .with_context(|| format!("frame count must be a non-negative integer, got {s:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_count_defaults_when_absent() {
        assert_eq!(parse_frame_count(None).unwrap(), DEFAULT_FRAMES);
    }

    #[test]
    fn frame_count_parses_argument() {
        assert_eq!(parse_frame_count(Some("5")).unwrap(), 5);
        assert!(parse_frame_count(Some("five")).is_err());
    }
}

use clap::{Parser, ValueEnum};
use mandelbrot_rows::{
    CliRenderController, ImageSize, IterationLimits, MandelbrotColourMapKinds, PpmFilePresenter,
    RenderSettings, ZoomStep,
};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum PaletteArg {
    Classic,
    BlueWhite,
}

impl From<PaletteArg> for MandelbrotColourMapKinds {
    fn from(palette: PaletteArg) -> Self {
        match palette {
            PaletteArg::Classic => Self::ClassicPalette,
            PaletteArg::BlueWhite => Self::BlueWhiteGradient,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "mandelbrot_rows")]
#[command(about = "Renders the Mandelbrot set row by row across a pool of agents")]
struct Args {
    #[arg(long, default_value_t = 800)]
    width: u32,

    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Number of concurrent row agents
    #[arg(long, default_value_t = 8)]
    agents: usize,

    #[arg(long, default_value_t = 1024)]
    max_iterations: u32,

    #[arg(long, default_value_t = 100.0)]
    escape_radius: f64,

    #[arg(long, value_enum, default_value_t = PaletteArg::Classic)]
    palette: PaletteArg,

    /// Zoom around a pixel before rendering, e.g. `in:400,300` or `out:10,20`.
    /// Repeat to zoom several times.
    #[arg(long = "zoom")]
    zoom: Vec<ZoomStep>,

    #[arg(short, long, default_value = "output/mandelbrot.ppm")]
    output: PathBuf,

    /// Give up if the final frame is not finished in time
    #[arg(long, default_value_t = 60)]
    timeout_secs: u64,
}

impl Args {
    fn settings(&self) -> Result<RenderSettings, Box<dyn std::error::Error>> {
        Ok(RenderSettings {
            size: ImageSize::new(self.width, self.height),
            agents: self.agents,
            limits: IterationLimits::new(self.max_iterations, self.escape_radius)?,
            palette: self.palette.into(),
            zoom_steps: self.zoom.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        })
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let settings = args.settings()?;

    let mut controller = CliRenderController::new(PpmFilePresenter::new());
    controller.render(&settings)?;

    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    controller.write(&args.output)?;
    log::info!("wrote {}", args.output.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mandelbrot_rows::ZoomDirection;

    #[test]
    fn test_defaults_match_render_settings() {
        let args = Args::try_parse_from(["mandelbrot_rows"]).unwrap();

        assert_eq!(args.settings().unwrap(), RenderSettings::default());
        assert_eq!(args.output, PathBuf::from("output/mandelbrot.ppm"));
    }

    #[test]
    fn test_zoom_steps_are_collected_in_order() {
        let args = Args::try_parse_from([
            "mandelbrot_rows",
            "--zoom",
            "in:400,300",
            "--zoom",
            "out:10,20",
            "--palette",
            "blue-white",
        ])
        .unwrap();

        let settings = args.settings().unwrap();

        assert_eq!(settings.zoom_steps.len(), 2);
        assert_eq!(settings.zoom_steps[0].direction, ZoomDirection::In);
        assert_eq!(settings.zoom_steps[1].direction, ZoomDirection::Out);
        assert_eq!(settings.palette, MandelbrotColourMapKinds::BlueWhiteGradient);
    }

    #[test]
    fn test_invalid_zoom_is_rejected_by_parser() {
        assert!(Args::try_parse_from(["mandelbrot_rows", "--zoom", "up:1,2"]).is_err());
    }

    #[test]
    fn test_invalid_limits_are_rejected() {
        let args = Args::try_parse_from(["mandelbrot_rows", "--max-iterations", "0"]).unwrap();

        assert!(args.settings().is_err());
    }
}

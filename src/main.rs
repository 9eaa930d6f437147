use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use mockshot::compositor::compose_files;
use mockshot::layout::Layout;

/// Composites an app screenshot onto the screen area of a device mockup photo.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Mockup photo to place the screenshot on (PNG or JPEG).
    base: PathBuf,
    /// Screenshot to fit into the mockup's screen area.
    overlay: PathBuf,
    /// Output path; always written as PNG.
    output: PathBuf,

    /// Left edge of the screen as a fraction of the base width.
    #[arg(long, value_name = "FRAC")]
    x_frac: Option<f64>,
    /// Top edge of the screen as a fraction of the base height.
    #[arg(long, value_name = "FRAC")]
    y_frac: Option<f64>,
    /// Screen width as a fraction of the base width.
    #[arg(long, value_name = "FRAC")]
    w_frac: Option<f64>,
    /// Screen height as a fraction of the base height.
    #[arg(long, value_name = "FRAC")]
    h_frac: Option<f64>,
    /// Corner radius as a fraction of the screen width.
    #[arg(long, value_name = "FRAC")]
    radius_frac: Option<f64>,
}

impl Args {
    fn layout(&self) -> Layout {
        let mut layout = Layout::default();
        if let Some(f) = self.x_frac {
            layout.x_frac = f;
        }
        if let Some(f) = self.y_frac {
            layout.y_frac = f;
        }
        if let Some(f) = self.w_frac {
            layout.w_frac = f;
        }
        if let Some(f) = self.h_frac {
            layout.h_frac = f;
        }
        if let Some(f) = self.radius_frac {
            layout.radius_frac = f;
        }
        layout
    }
}

fn main() -> ExitCode {
    if let Err(err) = run(Args::parse()) {
        eprintln!("error: {err:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(args: Args) -> anyhow::Result<()> {
    let _logger = flexi_logger::Logger::try_with_env_or_str("info")
        .context("invalid RUST_LOG specification")?
        .start()
        .context("failed to initialise logging")?;

    compose_files(&args.base, &args.overlay, &args.output, &args.layout())?;
    Ok(())
}

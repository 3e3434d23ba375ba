use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing::{error, warn};

use ten_shades::{generate_palette, OutputFormat, Palette, PaletteRequest, Shade};

mod logging;

const EXAMPLES: &str = "\
Examples:
  ten-shades '#ea1863'
  ten-shades --color '#ea1863'
  ten-shades '#ea1863' --format hsl
  ten-shades '#ea1863' --format hsl --shade 400";

#[derive(Parser)]
#[command(name = "ten-shades")]
#[command(version, about = "Generate ten shades (50 to 900) of a color", long_about = None)]
#[command(after_help = EXAMPLES)]
struct Cli {
    /// Input color, opaque hexadecimal value (#rgb or #rrggbb)
    #[arg(value_name = "COLOR")]
    input: Option<String>,

    /// Input color; takes precedence over the positional COLOR
    #[arg(long, value_name = "COLOR")]
    color: Option<String>,

    /// Output format (hex, hsl, rgb)
    #[arg(short, long, value_name = "FORMAT", default_value = "hex")]
    format: String,

    /// Shade the input color should occupy (50, 100, 200, ..., 900)
    #[arg(short, long, value_name = "SHADE")]
    shade: Option<Shade>,

    /// Print the palette as a JSON object
    #[arg(long)]
    json: bool,

    /// Also copy the output to the system clipboard
    #[cfg(feature = "clipboard")]
    #[arg(long)]
    copy: bool,

    /// Log anchor selection and step sizes to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let format = OutputFormat::parse(&cli.format).unwrap_or_else(|| {
        warn!(format = %cli.format, "unknown output format, using hex");
        OutputFormat::Hex
    });

    let request = PaletteRequest {
        color: cli.color.as_deref().or(cli.input.as_deref()),
        format,
        shade: cli.shade,
    };

    let palette = match generate_palette(&request) {
        Ok(palette) => palette,
        Err(err) => {
            if let Some(message) = err.message() {
                eprintln!("{message}\n");
            }
            eprintln!("{}", Cli::command().render_help());
            return ExitCode::FAILURE;
        }
    };

    let output = if cli.json {
        match serde_json::to_string_pretty(&palette) {
            Ok(json) => json,
            Err(err) => {
                error!(error = %err, "failed to serialize palette");
                return ExitCode::FAILURE;
            }
        }
    } else {
        render_lines(&palette)
    };
    println!("{output}");

    copy_output(&cli, &output);

    ExitCode::SUCCESS
}

#[cfg(feature = "clipboard")]
fn copy_output(cli: &Cli, output: &str) {
    if cli.copy {
        ten_shades::copy_to_clipboard(output);
    }
}

#[cfg(not(feature = "clipboard"))]
fn copy_output(_cli: &Cli, _output: &str) {}

/// One `label: value` line per shade.
fn render_lines(palette: &Palette) -> String {
    palette
        .iter()
        .map(|(shade, value)| format!("{:>3}: {value}", shade.label()))
        .collect::<Vec<_>>()
        .join("\n")
}

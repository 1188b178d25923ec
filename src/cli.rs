use crate::compose::parse_compose;
use crate::config::load_config;
use crate::layout::compute_plan;
use crate::render::{render_svg, write_output};
use crate::theme::Theme;
use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "stackdeck", version, about = "Tiered architecture diagrams from compose manifests")]
pub struct Args {
    /// Input manifest (compose YAML) or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file. Defaults to stdout for textual formats.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'e', long = "format", value_enum, default_value = "svg")]
    pub format: OutputFormat,

    /// Config file (JSON5: theme, themeVariables, layout)
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// List built-in themes and exit
    #[arg(long = "list-themes")]
    pub list_themes: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum OutputFormat {
    Svg,
    /// JSON dump of the paint plan
    Plan,
    #[cfg(feature = "png")]
    Png,
}

pub fn run() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    if args.list_themes {
        for name in Theme::NAMES {
            println!("{name}");
        }
        return Ok(());
    }

    let config = load_config(args.config.as_deref())?;
    let input = read_input(args.input.as_deref())?;
    let nodes = parse_compose(&input)?;
    let plan = compute_plan(&nodes, &config.theme, &config.layout)?;

    match args.format {
        OutputFormat::Svg => {
            let svg = render_svg(&plan, &config.theme);
            write_output(&svg, args.output.as_deref())?;
        }
        OutputFormat::Plan => {
            let json = plan.to_json()?;
            write_output(&json, args.output.as_deref())?;
        }
        #[cfg(feature = "png")]
        OutputFormat::Png => {
            let svg = render_svg(&plan, &config.theme);
            let output = ensure_output(&args.output, "png")?;
            crate::render::write_output_png(&svg, &output, plan.width, plan.height)?;
        }
    }
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path {
        if path == Path::new("-") {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            return Ok(buf);
        }
        return Ok(std::fs::read_to_string(path)?);
    }

    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

fn ensure_output(output: &Option<PathBuf>, ext: &str) -> Result<PathBuf> {
    if let Some(path) = output {
        return Ok(path.clone());
    }
    Err(anyhow::anyhow!("Output path required for {} output", ext))
}

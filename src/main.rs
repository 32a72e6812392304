use std::fs;
use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;

use svgrad::server::{GradientServer, ServerConfig};
use svgrad::{params, presets, synth, GradientOptions, Palette, TransformCenter};

#[derive(Parser)]
#[command(name = "svgrad", version, about = "Randomized layered radial-gradient SVG generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve gradients over HTTP
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1:8000")]
        bind: String,
        /// Worker threads (defaults to the CPU count)
        #[arg(long)]
        threads: Option<usize>,
        /// Reject malformed width/height with 400 instead of defaulting
        #[arg(long)]
        strict: bool,
        /// Recenter layer transforms around the fixed point (300,300)
        /// instead of the canvas center
        #[arg(long)]
        legacy_center: bool,
    },
    /// Generate one gradient document
    Generate {
        /// Palette color, repeatable; accepts #RRGGBB or hex_RRGGBB
        #[arg(short, long = "color")]
        colors: Vec<String>,
        /// Use a named preset palette instead of explicit colors
        #[arg(long, conflicts_with = "colors")]
        preset: Option<String>,
        #[arg(long, default_value_t = svgrad::DEFAULT_WIDTH)]
        width: f64,
        #[arg(long, default_value_t = svgrad::DEFAULT_HEIGHT)]
        height: f64,
        /// Seed the generator for reproducible output
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        legacy_center: bool,
        /// Output path; "-" writes to stdout (default: gradient-{unix-ms}.svg)
        #[arg(long)]
        out: Option<String>,
        /// Print a base64 data URI instead of writing a file
        #[arg(long)]
        data_uri: bool,
        /// Print the endpoint URL for these parameters against the given base
        #[arg(long, value_name = "BASE")]
        print_url: Option<String>,
    },
    /// Print the preset palettes as JSON
    Presets,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Command::Serve {
            bind,
            threads,
            strict,
            legacy_center,
        } => {
            let config = ServerConfig {
                bind,
                threads: threads.unwrap_or_else(num_cpus::get),
                strict_params: strict,
                center: center_for(legacy_center),
            };
            let server = GradientServer::bind(config)?;
            let example = params::api_url(
                &format!("http://{}/api", server.server_addr()),
                &Palette::default(),
                svgrad::DEFAULT_WIDTH,
                svgrad::DEFAULT_HEIGHT,
            );
            eprintln!("example: {example}");
            server.run()?;
            Ok(())
        }
        Command::Generate {
            colors,
            preset,
            width,
            height,
            seed,
            legacy_center,
            out,
            data_uri,
            print_url,
        } => {
            let palette = match preset {
                Some(name) => presets::find(&name)
                    .with_context(|| format!("unknown preset {name:?}"))?
                    .palette(),
                None => Palette::from_query(
                    colors.iter().map(|c| params::param_to_color(c)).collect(),
                ),
            };
            let opts = GradientOptions {
                width,
                height,
                center: center_for(legacy_center),
            };
            if let Some(base) = print_url {
                println!("{}", params::api_url(&base, &palette, width, height));
                return Ok(());
            }
            let svg = match seed {
                Some(seed) => {
                    synth::synthesize_with(&mut StdRng::seed_from_u64(seed), &palette, &opts)
                }
                None => synth::synthesize(&palette, &opts),
            };
            if data_uri {
                println!("{}", params::data_uri(&svg));
                return Ok(());
            }
            match out.as_deref() {
                Some("-") => io::stdout()
                    .write_all(svg.as_bytes())
                    .context("write to stdout")?,
                Some(path) => {
                    fs::write(path, &svg).with_context(|| format!("write {path}"))?;
                    eprintln!("wrote {path}");
                }
                None => {
                    let unix_ms = SystemTime::now()
                        .duration_since(UNIX_EPOCH)
                        .context("system clock before the unix epoch")?
                        .as_millis();
                    let path = params::download_filename(unix_ms);
                    fs::write(&path, &svg).with_context(|| format!("write {path}"))?;
                    eprintln!("wrote {path}");
                }
            }
            Ok(())
        }
        Command::Presets => {
            println!("{}", serde_json::to_string_pretty(&presets::COLOR_PRESETS)?);
            Ok(())
        }
    }
}

fn center_for(legacy: bool) -> TransformCenter {
    if legacy {
        TransformCenter::Fixed
    } else {
        TransformCenter::Canvas
    }
}

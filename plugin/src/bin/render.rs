//! Render a QR panel outside the host.
//!
//! Reads plugin settings and an object snapshot (host REST JSON) and prints
//! the PNG data URI, or writes the PNG when `--output` is given.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use image_engine::encode_png;
use netbox_qr::config::validate;
use netbox_qr::{ObjectKind, PLUGIN, PluginSettings, render_panel};
use qr_payload::Record;

#[derive(Debug, Parser)]
#[command(name = "netbox-qr-render", version, about = "Render a NetBox QR code panel")]
struct Cli {
    /// Plugin settings JSON; defaults are used when omitted
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Object snapshot JSON
    #[arg(long)]
    object: PathBuf,

    /// Object kind (device, rack, cable, location, powerpanel, powerfeed)
    #[arg(long, default_value = "device")]
    kind: ObjectKind,

    /// Absolute URL of the object's detail page
    #[arg(long)]
    url: Option<String>,

    /// Write the PNG here instead of printing a data URI
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::debug!(plugin = PLUGIN.name, version = PLUGIN.version, "{}", PLUGIN.verbose_name);

    let settings = match &cli.settings {
        Some(path) => PluginSettings::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => PluginSettings::default(),
    };
    for warning in validate(&settings) {
        tracing::warn!("{warning}");
    }

    let raw = std::fs::read_to_string(&cli.object)
        .with_context(|| format!("reading {}", cli.object.display()))?;
    let json: serde_json::Value = serde_json::from_str(&raw).context("parsing object JSON")?;
    let object = Record::from_json(&json).context("object JSON must be an object")?;

    let options = settings.options_for(cli.kind);
    let loader = settings.font_loader();
    tracing::debug!(font = %options.font, dir = %loader.dir().display(), "Resolving font");
    let font = loader.load(Some(options.font.as_str()));
    let panel = render_panel(&options, &object, cli.url.as_deref(), &font)?;
    tracing::info!(kind = %cli.kind, width = panel.width(), height = panel.height(), "Rendered QR panel");

    match &cli.output {
        Some(path) => {
            let png = encode_png(&panel)?;
            std::fs::write(path, png).with_context(|| format!("writing {}", path.display()))?;
        }
        None => println!("{}", image_engine::to_png_data_uri(&panel)?),
    }
    Ok(())
}

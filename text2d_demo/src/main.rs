//! Text layout demo
//!
//! Loads a font description and layout settings, lays out a string, and
//! logs the resulting mesh. Stands in for a renderer that would upload the
//! buffers and draw them with an SDF text shader.
//!
//! Usage: `text2d_demo [--font NAME] [--config FILE] [--align left|right|centered] [TEXT...]`
//!
//! Run with `RUST_LOG=debug` to see per-layout engine logging.

use std::path::PathBuf;
use text2d::{Config, ConfigError, FontError, FontLoader, LayoutConfig, TextAlignment, TextLayout};

const DEFAULT_FONT: &str = "demo";
const DEFAULT_CONFIG: &str = "resources/config/layout.toml";
const DEFAULT_TEXT: &str = "Hello\nWorld!";

#[derive(Debug, thiserror::Error)]
enum DemoError {
    #[error("Font error: {0}")]
    Font(#[from] FontError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid argument: {0}")]
    Args(String),
}

#[derive(Debug)]
struct DemoArgs {
    font: String,
    config: Option<PathBuf>,
    alignment: Option<TextAlignment>,
    text: String,
}

impl DemoArgs {
    fn parse<I: Iterator<Item = String>>(mut args: I) -> Result<Self, DemoError> {
        let mut font = DEFAULT_FONT.to_string();
        let mut config = None;
        let mut alignment = None;
        let mut words = Vec::new();

        while let Some(arg) = args.next() {
            let mut value = |flag: &str| {
                args.next()
                    .ok_or_else(|| DemoError::Args(format!("{flag} needs a value")))
            };
            match arg.as_str() {
                "--font" => font = value("--font")?,
                "--config" => config = Some(PathBuf::from(value("--config")?)),
                "--align" => {
                    let name = value("--align")?;
                    alignment = Some(name.parse().map_err(|e| DemoError::Args(format!("{e}")))?);
                }
                _ => words.push(arg),
            }
        }

        let text = if words.is_empty() {
            DEFAULT_TEXT.to_string()
        } else {
            // Literal "\n" in shell arguments becomes a line break.
            words.join(" ").replace("\\n", "\n")
        };

        Ok(Self { font, config, alignment, text })
    }
}

fn load_layout_config(args: &DemoArgs) -> Result<LayoutConfig, DemoError> {
    let mut config = match &args.config {
        Some(path) => LayoutConfig::load_from_file(path)?,
        None if std::path::Path::new(DEFAULT_CONFIG).exists() => {
            LayoutConfig::load_from_file(DEFAULT_CONFIG)?
        }
        None => LayoutConfig::default(),
    };

    if let Some(alignment) = args.alignment {
        config.alignment = alignment;
    }
    Ok(config)
}

fn run() -> Result<(), DemoError> {
    let args = DemoArgs::parse(std::env::args().skip(1))?;
    let config = load_layout_config(&args)?;

    let loader = FontLoader::default();
    let metrics = loader.load_metrics(&args.font)?;
    if let Some(atlas) = loader.load_atlas(&args.font)? {
        log::info!("Atlas texture ready: {}x{}", atlas.width, atlas.height);
    }

    let layout = TextLayout::new(config);
    let mesh = layout.layout(&args.text, &metrics);
    let bounds = mesh.bounds();

    log::info!(
        "{:?} -> {} glyphs, {} vertices, {} indices",
        args.text,
        mesh.glyph_count(),
        mesh.positions.len(),
        mesh.indices.len()
    );
    if !bounds.is_empty() {
        log::info!(
            "Bounds: x [{:.3}, {:.3}] y [{:.3}, {:.3}] ({} alignment)",
            bounds.min_x,
            bounds.max_x,
            bounds.min_y,
            bounds.max_y,
            layout.config().alignment
        );
    }

    for (glyph, quad) in mesh.positions.chunks(4).enumerate() {
        log::debug!("glyph {glyph}: {:?}", quad.iter().map(|v| (v.x, v.y)).collect::<Vec<_>>());
    }

    let vertex_bytes = mesh.vertices().len() * std::mem::size_of::<text2d::TextVertex>();
    log::info!("Vertex buffer: {} bytes", vertex_bytes);
    Ok(())
}

fn main() {
    text2d::foundation::logging::init();

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

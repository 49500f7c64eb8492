use std::path::Path;

use anyhow::{Context, Result};

use vitral_raster::coords::Vec2;
use vitral_raster::logging::{init_logging, LoggingConfig};
use vitral_raster::paint::{Color, ColorStop, LinearGradient, Paint, TwoPointConicalGradient};
use vitral_raster::persist;
use vitral_raster::raster::Pixmap;
use vitral_raster::shader;

const SIZE: u32 = 512;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let out = Path::new("out");
    std::fs::create_dir_all(out).context("creating output directory")?;

    println!();
    println!("  vitral demo: rasterizing gradient paints to {}/", out.display());
    println!();

    for (name, paint) in showcases() {
        let compiled = shader::compile(&paint).with_context(|| format!("compiling `{name}`"))?;
        log::debug!("compiled `{name}`");

        let mut pixmap = Pixmap::new(SIZE, SIZE);
        pixmap.fill(&compiled);

        let path = out.join(format!("{name}.png"));
        image::RgbaImage::from_raw(SIZE, SIZE, pixmap.to_rgba8())
            .context("pixel buffer does not match image dimensions")?
            .save(&path)
            .with_context(|| format!("writing {}", path.display()))?;
        println!("  {name:<18} -> {}", path.display());
    }

    persist_round_trip(out)?;

    println!();
    Ok(())
}

fn showcases() -> Vec<(&'static str, Paint)> {
    let center = Vec2::new(SIZE as f32 / 2.0, SIZE as f32 / 2.0);

    vec![
        (
            "concentric",
            Paint::Conical(TwoPointConicalGradient::new(
                center,
                64.0,
                center,
                224.0,
                warm_stops(),
            )),
        ),
        (
            // Steeply growing end circle: every pixel has a solution.
            "two-point",
            Paint::Conical(TwoPointConicalGradient::new(
                Vec2::new(192.0, 256.0),
                16.0,
                Vec2::new(320.0, 256.0),
                240.0,
                warm_stops(),
            )),
        ),
        (
            // Same geometry with the circles swapped: the flipped solve.
            "two-point-flipped",
            Paint::Conical(TwoPointConicalGradient::new(
                Vec2::new(320.0, 256.0),
                240.0,
                Vec2::new(192.0, 256.0),
                16.0,
                warm_stops(),
            )),
        ),
        (
            // Shallow radius change: the cone does not cover the plane and
            // uncovered pixels stay transparent.
            "two-point-masked",
            Paint::Conical(TwoPointConicalGradient::new(
                Vec2::new(160.0, 256.0),
                96.0,
                Vec2::new(352.0, 256.0),
                128.0,
                warm_stops(),
            )),
        ),
        (
            "linear",
            Paint::Linear(LinearGradient::new(
                Vec2::new(0.0, 0.0),
                Vec2::new(SIZE as f32, SIZE as f32),
                warm_stops(),
            )),
        ),
    ]
}

fn warm_stops() -> Vec<ColorStop> {
    vec![
        ColorStop::new(0.0, Color::from_srgb_u8(0xff, 0xd9, 0x4a, 0xff)),
        ColorStop::new(0.55, Color::from_srgb_u8(0xe0, 0x5c, 0x2b, 0xff)),
        ColorStop::new(1.0, Color::from_srgb_u8(0x40, 0x10, 0x50, 0xff)),
    ]
}

/// Writes one gradient as JSON, reads it back, and recompiles it.
fn persist_round_trip(out: &Path) -> Result<()> {
    let gradient = TwoPointConicalGradient::new(
        Vec2::new(192.0, 256.0),
        16.0,
        Vec2::new(320.0, 256.0),
        240.0,
        warm_stops(),
    );

    let path = out.join("two-point.json");
    let json = serde_json::to_string_pretty(&persist::encode(&gradient))
        .context("encoding gradient record")?;
    std::fs::write(&path, &json).with_context(|| format!("writing {}", path.display()))?;

    let record = serde_json::from_str(&json).context("reading gradient record back")?;
    let decoded = persist::decode(record).context("decoding gradient record")?;
    shader::compile(&Paint::Conical(decoded)).context("recompiling decoded gradient")?;

    println!("  {:<18} -> {} (round-tripped)", "persistence", path.display());
    Ok(())
}

//! Headless walkthrough: replays a scripted session and writes the final
//! frame as SVG.
//!
//! Usage:
//! ```text
//! cargo run --example headless                     # writes geovis.svg
//! cargo run --example headless -- out/square.svg   # custom path
//! RUST_LOG=geovis=debug cargo run --example headless
//! ```

use geovis::input::{Command, InputEvent, ScriptedInput};
use geovis::math::Point2;
use geovis::render::SvgRenderer;
use geovis::Visualizer;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Default: WARN for everything, INFO for geovis.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("geovis=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "geovis.svg".to_owned());

    let mut input = ScriptedInput::new()
        .then(InputEvent::Resize {
            width: 800.0,
            height: 600.0,
        })
        .then(Command::ToggleGrid)
        .tap(300.0, 200.0)
        .tap(300.0, 400.0)
        .tap(500.0, 400.0)
        .tap(520.0, 180.0)
        .drag(Point2::new(520.0, 180.0), Point2::new(500.0, 200.0));

    let mut visualizer = Visualizer::new(SvgRenderer::default());
    let Some(svg) = visualizer.run(&mut input)? else {
        return Ok(());
    };

    println!("{}", visualizer.session().info_text());
    std::fs::write(&path, svg)?;
    println!("wrote {path}");
    Ok(())
}

//! Headless walk through one of the bundled example menus.
//!
//! Builds the named example, feeds it a scripted session (visit every
//! selectable widget, then close with Escape) and prints what the last
//! frame drew.
//!
//! Run with: cargo run -p trellis --example add_widgets -- dropselect

use trellis::gallery::{Example, HEIGHT, WIDTH};
use trellis::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let name = std::env::args().nth(1).unwrap_or_else(|| "button".to_string());
    let example: Example = name.parse()?;

    let mut menu = example
        .builder()
        .url_opener(|url: &str| {
            println!("would open {url}");
            Ok(())
        })
        .build()?;
    example.populate(&mut menu)?;
    menu.update(&[]);

    println!("{}", menu.tree_string());

    let steps = menu.selection_order().len();
    let mut frames: Vec<Vec<InputEvent>> = (0..steps)
        .map(|_| vec![InputEvent::KeyDown(Key::Down)])
        .collect();
    frames.push(vec![InputEvent::KeyDown(Key::Escape)]);
    let mut input = ScriptedInput::new(frames);

    let mut surface = DrawList::new(Size::new(WIDTH, HEIGHT))?;
    menu.mainloop(&mut surface, &mut input)?;

    println!("{example}: {} frames, {} unused", surface.frame_count(), input.remaining());
    for text in surface.texts() {
        println!("  {text}");
    }
    Ok(())
}

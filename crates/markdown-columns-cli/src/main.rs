use anyhow::{Context, Result};
use markdown_columns_config::Config;
use markdown_columns_engine::{HtmlRenderer, LayoutConfig, snippet};
use std::{env, fs, process};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("scaffold") => scaffold(&args),
        Some(path) if args.len() == 2 => render(path),
        _ => {
            eprintln!("Usage: {} <file.md>", args[0]);
            eprintln!("       {} scaffold [columns]", args[0]);
            process::exit(1);
        }
    }
}

fn scaffold(args: &[String]) -> Result<()> {
    let columns = match args.get(2) {
        None => 2,
        Some(raw) => match raw.parse() {
            Ok(n) => n,
            Err(_) => {
                eprintln!("Error: '{raw}' is not a column count");
                process::exit(1);
            }
        },
    };
    print!("{}", snippet::column_wrapper(columns));
    Ok(())
}

fn render(path: &str) -> Result<()> {
    let source =
        fs::read_to_string(path).with_context(|| format!("Failed to read '{path}'"))?;

    let config = match Config::load() {
        Ok(Some(config)) => config,
        Ok(None) => Config::default(),
        Err(e) => {
            eprintln!("Warning: {e}; using default settings");
            Config::default()
        }
    };
    let layout = LayoutConfig {
        min_column_width: config.wrap_size,
        default_span: config.default_span,
    };

    let mut renderer = HtmlRenderer::new(layout);
    print!("{}", renderer.render_document(&source));
    Ok(())
}

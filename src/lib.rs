use std::fs;
use std::path::Path;

use anyhow::Context;
use log::info;

use parser::{Parser, Translation};

pub mod codegen;
pub mod config;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod semantic;

/// Translates one ALG program to C in a single pass.
pub fn translate(input: &str) -> Translation {
    let translation = Parser::new(input).run();
    info!(
        "{} ({} diagnostics)",
        translation.status,
        translation.diagnostics.len()
    );
    translation
}

/// Reads the source as bytes; anything that is not UTF-8 is replaced and
/// then rejected by the scanner.
pub fn read_source(path: &Path) -> anyhow::Result<String> {
    let bytes = fs::read(path)
        .with_context(|| format!("cannot open source file {}", path.display()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Writes the translated program to `destination`. Without output, a file
/// left there by an earlier run is removed.
pub fn write_artifact(destination: &Path, output: Option<&str>) -> anyhow::Result<()> {
    match output {
        Some(text) => fs::write(destination, text)
            .with_context(|| format!("cannot write {}", destination.display())),
        None if destination.exists() => fs::remove_file(destination)
            .with_context(|| format!("cannot remove stale {}", destination.display())),
        None => Ok(()),
    }
}

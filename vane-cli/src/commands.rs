//! Subcommand handlers

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use vane_config::{load_file, Document, LoadOptions};
use vane_core::codegen::backend::{render_cpp, render_lib_deps};
use vane_core::codegen::Program;
use vane_core::components::{generate, ComponentKind};
use vane_core::platform::Platform;

use crate::args::Emit;

pub fn validate(file: &Path, platform: Option<Platform>) -> Result<()> {
    let document = load(file, platform)?;
    println!(
        "{}: ok ({} component(s), {} on {})",
        file.display(),
        document.components.len(),
        document.target().platform,
        document.target().framework
    );
    Ok(())
}

pub fn compile(
    file: &Path,
    platform: Option<Platform>,
    emit: Emit,
    output: Option<&Path>,
) -> Result<()> {
    let document = load(file, platform)?;
    let program = generate(&document.components, document.target());
    info!(
        instructions = program.len(),
        libraries = program.dependencies().count(),
        "Generated program"
    );

    let bytes = render(&program, emit)?;
    match output {
        Some(path) => {
            fs::write(path, &bytes)
                .with_context(|| format!("failed to write {}", path.display()))?;
            debug!("Wrote {} bytes to {}", bytes.len(), path.display());
        }
        None => io::stdout()
            .write_all(&bytes)
            .context("failed to write to stdout")?,
    }
    Ok(())
}

pub fn platforms() {
    for platform in Platform::ALL {
        let async_tcp = ComponentKind::AsyncTcp
            .supported_platforms()
            .map_or(true, |supported| supported.contains(platform));
        if async_tcp {
            println!("{:<8} async_tcp", platform.name());
        } else {
            println!("{}", platform.name());
        }
    }
}

fn load(file: &Path, platform: Option<Platform>) -> Result<Document> {
    let options = LoadOptions { platform };
    load_file(file, &options).with_context(|| format!("failed to load {}", file.display()))
}

fn render(program: &Program, emit: Emit) -> Result<Vec<u8>> {
    let bytes = match emit {
        Emit::Cpp => render_cpp(program)
            .context("failed to render C++")?
            .into_bytes(),
        Emit::Libs => render_lib_deps(program)
            .context("failed to render lib_deps")?
            .into_bytes(),
        Emit::Json => {
            let mut json = serde_json::to_vec_pretty(program.instructions())
                .context("failed to encode JSON")?;
            json.push(b'\n');
            json
        }
        Emit::Postcard => {
            postcard::to_allocvec(program.instructions()).context("failed to encode postcard")?
        }
    };
    Ok(bytes)
}

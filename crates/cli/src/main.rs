//! I3C core configuration tool.
//!
//! This binary is the build-flow entry point around the configuration
//! engine. It performs:
//! 1. **Generate:** Resolve a JSON parameter file and emit the SystemVerilog
//!    defines header plus the register-generator sizing file.
//! 2. **Check:** Resolve and encode without writing anything, for CI gating.
//!
//! Log verbosity follows the `RUST_LOG` environment variable.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::{fs, process};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use i3ccfg_core::codegen::{CoreDefines, RegGenParams};
use i3ccfg_core::{Schema, Value, config};

/// Include guard macro for the generated defines header.
const DEFINES_GUARD: &str = "I3C_CONFIG";

#[derive(Parser, Debug)]
#[command(
    name = "i3ccfg",
    author,
    version,
    about = "I3C core configuration compiler",
    long_about = "Resolve an I3C core parameter file against the built-in schema and emit the \
RTL defines header and register-generator sizing parameters.\n\nExamples:\n  i3ccfg generate -c i3c_core_config.json -o build/cfg\n  i3ccfg check -c i3c_core_config.json"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve the configuration and write the generated artifacts.
    Generate {
        /// JSON parameter file (name -> value mapping).
        #[arg(short, long)]
        config: PathBuf,

        /// Output directory for `i3c_defines.svh` and `i3c_reggen.json`.
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,
    },

    /// Resolve and encode the configuration, reporting errors without writing.
    Check {
        /// JSON parameter file (name -> value mapping).
        #[arg(short, long)]
        config: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Generate { config, out_dir } => cmd_generate(&config, &out_dir),
        Commands::Check { config } => cmd_check(&config),
    }
}

/// Loads and resolves the parameter file, exiting with code 1 on any failure.
fn load(config_path: &Path) -> (CoreDefines, RegGenParams) {
    let text = fs::read_to_string(config_path).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {}", config_path.display(), e);
        process::exit(1);
    });
    let raw: BTreeMap<String, Value> = serde_json::from_str(&text).unwrap_or_else(|e| {
        eprintln!("Error parsing {}: {}", config_path.display(), e);
        process::exit(1);
    });

    let cfg = config::resolve(&raw, &Schema::i3c_core()).unwrap_or_else(|e| {
        eprintln!("Configuration error: {e}");
        process::exit(1);
    });
    let defines = CoreDefines::generate(&cfg).unwrap_or_else(|e| {
        eprintln!("Encoding error: {e}");
        process::exit(1);
    });
    let reggen = RegGenParams::derive(&cfg).unwrap_or_else(|e| {
        eprintln!("Encoding error: {e}");
        process::exit(1);
    });
    (defines, reggen)
}

/// Resolves the configuration and writes both artifacts to `out_dir`.
fn cmd_generate(config_path: &Path, out_dir: &Path) {
    let (defines, reggen) = load(config_path);

    fs::create_dir_all(out_dir).unwrap_or_else(|e| {
        eprintln!("Error creating {}: {}", out_dir.display(), e);
        process::exit(1);
    });

    let svh_path = out_dir.join("i3c_defines.svh");
    write_file(&svh_path, &render_defines(&defines));

    let reggen_path = out_dir.join("i3c_reggen.json");
    let json = serde_json::to_string_pretty(&reggen).unwrap_or_else(|e| {
        eprintln!("Error serializing sizing parameters: {e}");
        process::exit(1);
    });
    write_file(&reggen_path, &(json + "\n"));

    println!("[*] {} defines -> {}", defines.len(), svh_path.display());
    println!("[*] sizing parameters -> {}", reggen_path.display());
}

/// Resolves and encodes without writing; prints a one-line summary.
fn cmd_check(config_path: &Path) {
    let (defines, reggen) = load(config_path);
    println!(
        "[*] OK: {} defines, {} sizing parameters",
        defines.len(),
        reggen.params().len()
    );
}

/// Renders the define collection as a guarded SystemVerilog header.
fn render_defines(defines: &CoreDefines) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "// Generated by i3ccfg; do not edit.");
    let _ = writeln!(out, "`ifndef {DEFINES_GUARD}");
    let _ = writeln!(out, "`define {DEFINES_GUARD}");
    let _ = writeln!(out);
    for (name, value) in defines.iter() {
        let _ = writeln!(out, "`define {name} {value}");
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "`endif // {DEFINES_GUARD}");
    out
}

/// Writes a file, exiting with code 1 on I/O failure.
fn write_file(path: &Path, contents: &str) {
    fs::write(path, contents).unwrap_or_else(|e| {
        eprintln!("Error writing {}: {}", path.display(), e);
        process::exit(1);
    });
}

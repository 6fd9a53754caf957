//! Build script for ytfetch-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("ytfetch")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Download media into expanded destination paths")
        .long_about(
            "Expand ${NAME} placeholders in a destination path, create or choose its \
             directory, and download a video or its audio there with youtube-dl",
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Read configuration from this file as well")
                .value_name("PATH")
                .global(true)
                .env("YTFETCH_CONFIG"),
        )
        .subcommands(vec![
            Command::new("fetch")
                .about("Download a video or its audio into a file path")
                .long_about(
                    "Expand the destination, resolve its directory and run the downloader. \
                     Undefined variables and unsupported URLs are asked about interactively.",
                )
                .arg(Arg::new("filepath").value_name("FILEPATH"))
                .arg(Arg::new("url").value_name("URL"))
                .arg(
                    Arg::new("dry-run")
                        .long("dry-run")
                        .help("Print the downloader command instead of running it")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("yes")
                        .short('y')
                        .long("yes")
                        .help("Search for unsupported URLs without asking")
                        .action(ArgAction::SetTrue),
                ),
            Command::new("resolve")
                .about("Expand and resolve a file path without downloading")
                .long_about("Print the absolute path a download would be written to"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> io::Result<()> {
    // Generate man pages at build time
    let out_dir = std::env::var_os("OUT_DIR")
        .map(PathBuf::from)
        .ok_or_else(|| io::Error::other("OUT_DIR is not set"))?;
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;

    fs::write(man_dir.join("ytfetch.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}

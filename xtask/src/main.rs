//! A task runner following the [xtask convention][1].
//!
//! [1]: https://github.com/matklad/cargo-xtask

use anyhow::{anyhow, bail, Result};
use pico_args::Arguments;
use std::path::Path;
use xshell::{cmd, pushd};

fn show_help() {
  print!("{}", include_str!("help.txt"));
}

fn finish_args(args: Arguments) -> Result<()> {
  let args = args.finish();
  if !args.is_empty() {
    bail!("unused arguments: {:?}", args);
  }
  Ok(())
}

fn ci() -> Result<()> {
  cmd!("cargo test --no-run").run()?;
  cmd!("cargo fmt -- --check").run()?;
  cmd!("cargo clippy").run()?;
  cmd!("cargo test").run()?;
  cmd!("cargo doc --no-deps").run()?;
  Ok(())
}

fn test(krate: Option<String>) -> Result<()> {
  match krate {
    None => cmd!("cargo test").run()?,
    Some(krate) => cmd!("cargo test -p {krate}").run()?,
  }
  Ok(())
}

fn run() -> Result<()> {
  let mut args = Arguments::from_env();
  if args.contains(["-h", "--help"]) {
    show_help();
    return Ok(());
  }
  let Some(subcommand) = args.subcommand()? else {
    show_help();
    return Ok(());
  };
  let root = Path::new(env!("CARGO_MANIFEST_DIR"))
    .parent()
    .ok_or_else(|| anyhow!("xtask has no parent dir"))?;
  let _d = pushd(root)?;
  match subcommand.as_str() {
    "ci" => {
      finish_args(args)?;
      ci()?;
    }
    "test" => {
      let krate = args.opt_free_from_str()?;
      finish_args(args)?;
      test(krate)?;
    }
    s => bail!("unknown subcommand: {}", s),
  }
  Ok(())
}

fn main() {
  if let Err(e) = run() {
    eprintln!("{e}");
    std::process::exit(1);
  }
}

use std::fs::File;
use std::io::{Read, stdin};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "luadoc-cli",
    about = "Convert Lua API documentation tables to JSON",
    version
)]
struct Args {
    /// Emit the generic value tree instead of the projected document
    #[arg(long)]
    raw: bool,

    /// Reject sources with malformed fragments instead of skipping them
    #[arg(long)]
    strict: bool,

    /// Pretty-print the JSON output
    #[arg(long, default_value_t = false)]
    pretty: bool,

    /// Nesting limit for table literals
    #[arg(long, default_value_t = 128)]
    max_depth: usize,

    /// Input file (defaults to stdin)
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut buf = String::new();
    match &args.input {
        Some(path) => {
            let mut f = File::open(path)?;
            f.read_to_string(&mut buf)?;
        }
        None => {
            stdin().read_to_string(&mut buf)?;
        }
    }

    let options = luadoc::Options {
        strict: args.strict,
        max_depth: args.max_depth,
    };

    let value: serde_json::Value = if args.raw {
        let parsed = luadoc::parse_source(&buf, &options)?;
        parsed.value.into()
    } else {
        let doc = luadoc::parse_document(&buf, &options)?;
        serde_json::to_value(&doc)?
    };

    if args.pretty {
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{}", serde_json::to_string(&value)?);
    }

    Ok(())
}

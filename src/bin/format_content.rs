//! Print formatted catalog content without the terminal UI.
//!
//! Usage: cargo run --bin format_content [-- --csv PATH] [--plain] [--json] [ID ...]
//!
//! With no IDs every record is printed.

use anyhow::{bail, Context};

use prodview::config::Config;
use prodview::report::{select_records, FormattedRecord};
use prodview::store::CatalogStore;

struct Args {
    csv: Option<String>,
    plain: bool,
    json: bool,
    ids: Vec<String>,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut args = Args { csv: None, plain: false, json: false, ids: Vec::new() };
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--csv" => args.csv = Some(iter.next().context("--csv needs a path")?),
            "--plain" => args.plain = true,
            "--json" => args.json = true,
            flag if flag.starts_with("--") => bail!("unknown option {flag}"),
            _ => args.ids.push(arg),
        }
    }
    Ok(args)
}

fn main() -> anyhow::Result<()> {
    let args = parse_args()?;

    let mut config = Config::load()?;
    if let Some(path) = &args.csv {
        config = config.with_catalog_path(path);
    }

    let store = CatalogStore::open(&config.catalog_path)
        .with_context(|| format!("loading {}", config.catalog_path.display()))?;

    for record in select_records(&store, &args.ids)? {
        let rendered = FormattedRecord::build(record, args.plain);
        if args.json {
            println!("{}", rendered.to_json()?);
        } else {
            println!("{}", rendered.to_block());
        }
    }

    Ok(())
}

use std::io::Read;

use anyhow::{Context, Result};
use registry_filters::{make_comparator, stable_sort, Dir};

use super::read_input;
use crate::SortArgs;

pub fn run(args: &SortArgs, stdin: &mut dyn Read) -> Result<String> {
    let json = read_input(args.file.as_deref(), stdin)?;
    let records: Vec<serde_json::Value> =
        serde_json::from_str(&json).context("expected a JSON array of records")?;

    let dir = if args.desc { Dir::Desc } else { Dir::Asc };
    let sorted = stable_sort(&records, make_comparator(dir, args.key.as_str()));
    Ok(serde_json::to_string_pretty(&sorted)?)
}

use anyhow::Result;
use registry_filters::deserialize;

use crate::DecodeArgs;

pub fn run(args: &DecodeArgs) -> Result<String> {
    let state = deserialize(&args.query);
    Ok(serde_json::to_string_pretty(&state)?)
}

use std::io::Read;

use anyhow::Result;
use registry_filters::{serialize, FilterState, SerializeOptions};

use super::read_input;
use crate::EncodeArgs;

pub fn run(args: &EncodeArgs, stdin: &mut dyn Read) -> Result<String> {
    let json = read_input(args.file.as_deref(), stdin)?;
    let state = FilterState::from_json(&json)?;
    let options = SerializeOptions {
        embed: args.embed,
        detail: args.detail,
    };
    Ok(serialize(&state, options))
}

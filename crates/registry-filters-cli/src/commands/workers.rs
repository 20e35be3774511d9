use registry_filters::validate_worker_count_text;

use crate::WorkersArgs;

pub fn run(args: &WorkersArgs) -> String {
    match validate_worker_count_text(&args.text) {
        Some(err) => err.to_string(),
        None => "valid".to_string(),
    }
}

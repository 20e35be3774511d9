use anyhow::Result;
use registry_filters::{pagination_from_query_string, FilterConfig, Pagination};
use serde::Serialize;

use crate::PageArgs;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PageReport {
    #[serde(flatten)]
    pagination: Pagination,
    start: usize,
    end: usize,
}

pub fn run(args: &PageArgs, config: &FilterConfig) -> Result<String> {
    let pagination = pagination_from_query_string(&args.query, config);
    let bounds = pagination.bounds();

    if args.json {
        let report = PageReport {
            pagination,
            start: bounds.start,
            end: bounds.end,
        };
        return Ok(serde_json::to_string_pretty(&report)?);
    }

    Ok(format!(
        "page: {}\nrows per page: {}\nrows: {}..{}",
        pagination.page, pagination.rows_per_page, bounds.start, bounds.end
    ))
}

use anyhow::{Context, Result};
use registry_filters::{deserialize, parse_source, serialize, SerializeOptions};

use crate::ReconcileArgs;

/// Prints the canonical query string after reconciliation, followed by the
/// relabeled options of the facet.
pub fn run(args: &ReconcileArgs) -> Result<String> {
    let raw = std::fs::read_to_string(&args.source)
        .with_context(|| format!("failed to read {}", args.source.display()))?;
    let source = parse_source(&raw)?;

    let mut state = deserialize(&args.query);
    let before = state.facet(args.facet).len();
    state.reconcile_facet(args.facet, &source);
    tracing::debug!(
        facet = %args.facet,
        kept = state.facet(args.facet).len(),
        dropped = before - state.facet(args.facet).len(),
        "reconciled facet"
    );

    let mut lines = vec![serialize(&state, SerializeOptions::default())];
    for option in state.facet(args.facet) {
        lines.push(format!("{}\t{}", option.value, option.label));
    }
    Ok(lines.join("\n"))
}

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;

use asmt_draft::AssignmentDraft;
use asmt_model::RemoteAssignment;
use asmt_submit::build_payload;
use asmt_validate::ValidationReport;

use crate::cli::{CheckArgs, PayloadArgs};

pub struct CheckResult {
    pub draft: AssignmentDraft,
    pub report: ValidationReport,
}

/// Hydrate a saved remote read and run the submit validation sweep.
pub fn run_check(args: &CheckArgs) -> anyhow::Result<CheckResult> {
    let mut draft = load_draft(&args.input)?;
    let report = draft.check_submit();
    Ok(CheckResult { draft, report })
}

/// Hydrate a saved remote read and print the payload a save would send.
pub fn run_payload(args: &PayloadArgs) -> anyhow::Result<()> {
    let draft = load_draft(&args.input)?;
    let payload = build_payload(&draft);
    let rendered = if args.compact {
        serde_json::to_string(&payload)?
    } else {
        serde_json::to_string_pretty(&payload)?
    };
    println!("{rendered}");
    Ok(())
}

fn load_draft(input: &Path) -> anyhow::Result<AssignmentDraft> {
    let file = File::open(input)
        .with_context(|| format!("cannot open draft file {}", input.display()))?;
    let remote: RemoteAssignment = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("cannot parse remote read {}", input.display()))?;
    AssignmentDraft::hydrate(remote)
        .with_context(|| format!("cannot hydrate draft from {}", input.display()))
}

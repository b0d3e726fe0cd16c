use std::io::Write;

use super::{ReportData, ReportMeta};
use crate::error::Result;
use crate::loc::ProjectSummary;

/// YAML document with the same fields as the JSON report, framed by
/// `---` and `...`.
pub fn write_yaml(summary: &ProjectSummary, meta: &ReportMeta, out: &mut dyn Write) -> Result<()> {
    let data = ReportData::new(summary, meta);
    let body = serde_yaml::to_string(&data)?;
    writeln!(out, "---")?;
    out.write_all(body.as_bytes())?;
    writeln!(out, "...")?;
    Ok(())
}

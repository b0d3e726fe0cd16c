use std::io::Write;

use super::{ReportData, ReportMeta};
use crate::error::Result;
use crate::loc::ProjectSummary;

pub fn write_json(summary: &ProjectSummary, meta: &ReportMeta, out: &mut dyn Write) -> Result<()> {
    let data = ReportData::new(summary, meta);
    serde_json::to_writer_pretty(&mut *out, &data)?;
    writeln!(out)?;
    Ok(())
}

//! JSON snapshot output (machine-friendly)

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use super::{ReportFormat, ReportGenerator};
use crate::config::DisplayConfig;
use crate::data::DashboardSnapshot;

const INDENT: &[u8] = b"    ";

pub struct JsonReportGenerator;

impl ReportGenerator for JsonReportGenerator {
    fn generate(&self, snapshot: &DashboardSnapshot, _display: &DisplayConfig) -> Result<String> {
        let mut buf = Vec::new();
        let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
        snapshot
            .serialize(&mut serializer)
            .context("Failed to serialize dashboard snapshot")?;
        String::from_utf8(buf).context("Serialized snapshot is not valid UTF-8")
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

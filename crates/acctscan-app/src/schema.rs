use acctscan_settings::AcctscanConfigV1;
use acctscan_types::ScanReport;
use anyhow::Context;

/// Documents whose JSON schema can be printed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchemaKind {
    /// `acctscan.toml`
    Config,
    /// The scan report JSON.
    Report,
}

pub fn schema_json(kind: SchemaKind) -> anyhow::Result<String> {
    let schema = match kind {
        SchemaKind::Config => schemars::schema_for!(AcctscanConfigV1),
        SchemaKind::Report => schemars::schema_for!(ScanReport),
    };
    serde_json::to_string_pretty(&schema).context("serialize schema")
}

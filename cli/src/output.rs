//! Result rendering: tab separated, table, or JSON

use anyhow::Result;
use comfy_table::{ContentArrangement, Table};
use ristretto::{CurieUtil, Node};

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Tsv,
    Table,
    Json,
}

/// Rows of string cells under a fixed header.
pub struct Output {
    header: Vec<&'static str>,
    rows: Vec<Vec<String>>,
    /// Cell separator in tsv mode
    separator: &'static str,
    /// Print the header in tsv mode
    tsv_header: bool,
}

impl Output {
    /// `CURIE ! label` rows.
    pub fn terms() -> Self {
        Output {
            header: vec!["curie", "label"],
            rows: Vec::new(),
            separator: " ! ",
            tsv_header: false,
        }
    }

    /// Tab separated rows with a header line.
    pub fn columns(header: Vec<&'static str>) -> Self {
        Output {
            header,
            rows: Vec::new(),
            separator: "\t",
            tsv_header: true,
        }
    }

    pub fn push(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn push_term(&mut self, node: &Node, curies: &CurieUtil) {
        self.rows.push(vec![display_id(node, curies), node.label().to_string()]);
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        let rendered = match format {
            OutputFormat::Tsv => {
                let mut lines = Vec::with_capacity(self.rows.len() + 1);
                if self.tsv_header {
                    lines.push(self.header.join(self.separator));
                }
                lines.extend(self.rows.iter().map(|row| row.join(self.separator)));
                lines.join("\n")
            }
            OutputFormat::Table => {
                let mut table = Table::new();
                table.set_content_arrangement(ContentArrangement::Dynamic);
                table.set_header(&self.header);
                for row in &self.rows {
                    table.add_row(row);
                }
                format!("{}\n{} row(s)", table, self.rows.len())
            }
            OutputFormat::Json => {
                let records: Vec<serde_json::Map<String, serde_json::Value>> = self
                    .rows
                    .iter()
                    .map(|row| {
                        self.header
                            .iter()
                            .zip(row)
                            .map(|(key, cell)| (key.to_string(), serde_json::Value::String(cell.clone())))
                            .collect()
                    })
                    .collect();
                serde_json::to_string_pretty(&records)?
            }
        };
        Ok(rendered)
    }

    /// Print to stdout. Empty term lists print nothing in tsv mode.
    pub fn print(&self, format: OutputFormat) -> Result<()> {
        let rendered = self.render(format)?;
        if !rendered.is_empty() {
            println!("{}", rendered);
        }
        Ok(())
    }
}

/// The node's CURIE, or its raw identifier when no prefix matches.
pub fn display_id(node: &Node, curies: &CurieUtil) -> String {
    curies
        .compress(node.id())
        .unwrap_or_else(|| node.id().to_string())
}

/// Nodes sorted by label, duplicates removed.
pub fn sorted_by_label<'a>(nodes: impl IntoIterator<Item = &'a Node>) -> Vec<&'a Node> {
    let mut nodes: Vec<&Node> = nodes.into_iter().collect();
    nodes.sort_by(|a, b| a.label().cmp(b.label()).then_with(|| a.id().cmp(b.id())));
    nodes.dedup();
    nodes
}

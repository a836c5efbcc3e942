//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use autoparts_analogs::Component;
use autoparts_domain::{PartId, RelationType};
use autoparts_search::SearchResult;
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format search or analog results.
    pub fn format_results(&self, results: &[SearchResult]) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_results_json(results),
            OutputFormat::Table => Ok(self.format_results_table(results)),
            OutputFormat::Quiet => Ok(self.format_results_quiet(results)),
        }
    }

    fn format_results_json(&self, results: &[SearchResult]) -> Result<String> {
        let json_results: Vec<serde_json::Value> = results
            .iter()
            .map(|r| {
                let part = r.part();
                let mut value = serde_json::json!({
                    "id": part.id.value(),
                    "part_number": part.part_number,
                    "name": part.name,
                    "description": part.description,
                    "manufacturer": part.manufacturer,
                    "category_id": part.category_id,
                    "price": r.price().to_string(),
                    "stock_quantity": part.stock_quantity,
                    "is_exact_match": r.is_exact_match,
                    "is_analog": r.is_analog,
                    "relation_type": r.relation_type.map(|t| t.as_str()),
                    "analog_type": r.analog_type,
                    "distance": r.distance
                });
                if let (Some(base), Some(markup)) = (r.priced.base_price, r.priced.markup_percent) {
                    value["base_price"] = serde_json::json!(base.to_string());
                    value["markup_percent"] = serde_json::json!(markup);
                }
                value
            })
            .collect();

        Ok(serde_json::to_string_pretty(&json_results)?)
    }

    fn format_results_table(&self, results: &[SearchResult]) -> String {
        if results.is_empty() {
            return self.colorize("No results found.", "yellow");
        }

        let show_admin = results.iter().any(|r| r.priced.base_price.is_some());

        let mut header = vec!["ID", "Part number", "Name", "Manufacturer", "Stock", "Price"];
        if show_admin {
            header.extend(["Base price", "Markup"]);
        }
        header.extend(["Match", "Distance"]);

        let mut builder = Builder::default();
        builder.push_record(header);

        for result in results {
            let part = result.part();
            let mut row = vec![
                part.id.to_string(),
                part.part_number.clone(),
                part.name.clone(),
                part.manufacturer.clone(),
                part.stock_quantity.to_string(),
                result.price().to_string(),
            ];
            if show_admin {
                row.push(result.priced.base_price.map(|p| p.to_string()).unwrap_or_default());
                row.push(
                    result
                        .priced
                        .markup_percent
                        .map(|m| format!("{}%", m))
                        .unwrap_or_default(),
                );
            }
            row.push(self.match_label(result));
            row.push(result.distance.map(|d| d.to_string()).unwrap_or_default());
            builder.push_record(row);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    fn format_results_quiet(&self, results: &[SearchResult]) -> String {
        let ids: Vec<String> = results.iter().map(|r| r.id().to_string()).collect();
        ids.join("\n")
    }

    fn match_label(&self, result: &SearchResult) -> String {
        match (result.relation_type, result.analog_type.as_deref()) {
            (Some(relation), Some(analog_type)) => {
                let label = format!("{} ({})", relation.as_str(), analog_type);
                match relation {
                    RelationType::Direct => self.colorize(&label, "cyan"),
                    RelationType::Indirect => self.colorize(&label, "magenta"),
                }
            }
            _ => self.colorize("exact", "green"),
        }
    }

    /// Format suggestions, one per line (JSON array in JSON mode).
    pub fn format_suggestions(&self, suggestions: &[String]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(suggestions)?),
            OutputFormat::Table if suggestions.is_empty() => Ok(self.colorize("No suggestions.", "yellow")),
            OutputFormat::Table | OutputFormat::Quiet => Ok(suggestions.join("\n")),
        }
    }

    /// Format the relation between two parts.
    pub fn format_relation(&self, first: PartId, second: PartId, relation: Option<RelationType>) -> Result<String> {
        let name = relation.map(|r| r.as_str()).unwrap_or("none");
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "first": first.value(),
                "second": second.value(),
                "relation": relation.map(|r| r.as_str()),
            }))?),
            OutputFormat::Quiet => Ok(name.to_string()),
            OutputFormat::Table => Ok(match relation {
                Some(RelationType::Direct) => {
                    self.success(&format!("Parts {} and {} are direct analogs", first, second))
                }
                Some(RelationType::Indirect) => {
                    self.success(&format!("Parts {} and {} are indirect analogs", first, second))
                }
                None => self.info(&format!("Parts {} and {} are not analogs", first, second)),
            }),
        }
    }

    /// Format analog groups.
    pub fn format_groups(&self, groups: &[Component]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json_groups: Vec<Vec<i64>> = groups
                    .iter()
                    .map(|g| g.members().iter().map(|id| id.value()).collect())
                    .collect();
                Ok(serde_json::to_string_pretty(&json_groups)?)
            }
            OutputFormat::Quiet => Ok(groups
                .iter()
                .map(|g| join_ids(g.members(), " "))
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                if groups.is_empty() {
                    return Ok(self.colorize("No analog groups.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Group", "Size", "Parts"]);
                for (index, group) in groups.iter().enumerate() {
                    builder.push_record([
                        (index + 1).to_string(),
                        group.len().to_string(),
                        join_ids(group.members(), ", "),
                    ]);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));
                Ok(table.to_string())
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            "magenta" => text.magenta().to_string(),
            _ => text.to_string(),
        }
    }
}

fn join_ids(ids: &[PartId], separator: &str) -> String {
    ids.iter().map(|id| id.to_string()).collect::<Vec<_>>().join(separator)
}

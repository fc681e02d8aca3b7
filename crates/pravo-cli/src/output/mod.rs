use pravo_core::entities::Incident;
use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Column order for incident tables.
const INCIDENT_HEADERS: [&str; 6] = [
    "id",
    "title",
    "description",
    "latitude",
    "longitude",
    "image_uri",
];

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Render incidents; tables use a fixed column order with `-` for missing values.
pub fn render_incidents(incidents: &[Incident], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Table => Ok(render_incident_table(incidents, table_options())),
        OutputFormat::Json | OutputFormat::Raw => render(&incidents, format),
    }
}

/// Print incidents in the requested format.
pub fn output_incidents(incidents: &[Incident], format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render_incidents(incidents, format)?;
    println!("{rendered}");
    Ok(())
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_incident_table(incidents: &[Incident], options: table::TableOptions) -> String {
    if incidents.is_empty() {
        return String::from("(no incidents)");
    }

    let rows = incidents
        .iter()
        .map(|incident| {
            vec![
                incident.id.to_string(),
                incident.title.clone(),
                incident.description.clone(),
                opt_cell(incident.latitude.map(|v| v.to_string())),
                opt_cell(incident.longitude.map(|v| v.to_string())),
                opt_cell(incident.image_uri.clone()),
            ]
        })
        .collect::<Vec<_>>();

    table::render_entity_table(&INCIDENT_HEADERS, &rows, options)
}

fn opt_cell(value: Option<String>) -> String {
    value.unwrap_or_else(|| String::from("-"))
}

fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let options = table_options();

    let value = serde_json::to_value(value)?;
    match value {
        Value::Object(map) => {
            let headers = ["key", "value"];
            let mut entries = map.into_iter().collect::<Vec<_>>();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            let rows = entries
                .into_iter()
                .map(|(key, value)| vec![key, value_to_cell(&value)])
                .collect::<Vec<_>>();
            Ok(table::render_entity_table(&headers, &rows, options))
        }
        Value::Array(items) if items.is_empty() => Ok(String::from("(no rows)")),
        other => {
            let headers = ["value"];
            let rows = vec![vec![value_to_cell(&other)]];
            Ok(table::render_entity_table(&headers, &rows, options))
        }
    }
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

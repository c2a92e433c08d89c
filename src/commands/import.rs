use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::json;
use tracing::info;

use catpick::cli::EmitFormat;
use catpick::taxonomy::{parse_google_taxonomy, to_json_value, Taxonomy};
use catpick::ui::json::{emit, event};

use super::Session;

/// Global variable name used by web pages that embed the categories
const JS_VARIABLE: &str = "google_product_categories";

pub fn cmd_import(
    session: &Session,
    source: &Path,
    output: Option<&Path>,
    emit_format: EmitFormat,
) -> Result<()> {
    let text = fs::read_to_string(source)
        .with_context(|| format!("failed to read {}", source.display()))?;
    let taxonomy = parse_google_taxonomy(&text)
        .with_context(|| format!("failed to parse {}", source.display()))?;

    let rendered = encode(&taxonomy, emit_format)?;

    match output {
        Some(path) => {
            fs::write(path, &rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(output = %path.display(), "wrote categories");
            if session.json {
                emit(event(
                    "complete",
                    "import",
                    json!({
                        "source": source.display().to_string(),
                        "output": path.display().to_string(),
                        "categories": taxonomy.category_count(),
                        "leaves": taxonomy.leaves().len(),
                    }),
                ))?;
            } else {
                println!(
                    "Imported {} categories into {}",
                    taxonomy.category_count(),
                    path.display()
                );
            }
        }
        // The converted document is the output; no event wrapper
        None => print!("{}", rendered),
    }
    Ok(())
}

fn encode(taxonomy: &Taxonomy, format: EmitFormat) -> Result<String> {
    let body = serde_json::to_string_pretty(&to_json_value(taxonomy))?;
    Ok(match format {
        EmitFormat::Json => format!("{}\n", body),
        EmitFormat::Js => format!("{} = {};\n", JS_VARIABLE, body),
    })
}

mod draft;

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context};
use configurator::{BackendClient, ModelSubmission};
use log::{info, warn};

const USAGE: &str = "usage: hyperparams <draft.json> | hyperparams schema <category> <model>";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    match args.as_slice() {
        [cmd, category, model] if cmd == "schema" => print_schema(category, model),
        [path] => run_draft(path).await,
        _ => bail!(USAGE),
    }
}

/// Prints the form descriptors of a model as JSON.
fn print_schema(category: &str, model: &str) -> anyhow::Result<()> {
    let schema = schema::lookup(category, model)?;

    let mut out = serde_json::json!({
        "model": schema.name,
        "category": schema.category,
        "fields": configurator::describe(schema),
    });
    if let Some(architecture) = schema.architecture {
        out["layer_fields"] = serde_json::to_value(configurator::describe_layer(architecture))?;
    }

    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

/// Applies a draft, prints the resulting payload and submits it when a
/// backend is configured.
async fn run_draft(path: &str) -> anyhow::Result<()> {
    let draft = draft::load(path).map_err(anyhow::Error::msg)?;
    let (config, rejections) = draft
        .configure()
        .with_context(|| format!("cannot configure '{path}'"))?;

    for rejection in &rejections {
        warn!("rejected {}: {}", rejection.input, rejection.error);
    }
    info!(
        "{} configured with {} rejected input(s)",
        config.model_type(),
        rejections.len()
    );

    let submission = config.to_submission(&draft.classification_id);
    println!("{}", serde_json::to_string_pretty(&submission)?);

    let Ok(base_url) = env::var("BACKEND_URL") else {
        info!("BACKEND_URL not set, skipping submission");
        return Ok(());
    };

    let client = BackendClient::new(base_url);
    let model_id = draft.model_id.as_deref();
    match configurator::submit(&client, &config, &draft.classification_id, model_id).await {
        Ok(record) => {
            info!("stored {} as {}", record.model_name, record.id);
            Ok(())
        }
        Err(e) => {
            let pending = save_pending(Path::new(path), &submission)?;
            Err(e).with_context(|| {
                format!("submission failed, payload kept at '{}'", pending.display())
            })
        }
    }
}

/// Writes the payload next to the draft so the submission can be retried.
fn save_pending(draft: &Path, submission: &ModelSubmission) -> anyhow::Result<PathBuf> {
    let pending = draft.with_extension("pending.json");
    let json = serde_json::to_string_pretty(submission)?;
    fs::write(&pending, json).with_context(|| format!("cannot write '{}'", pending.display()))?;
    Ok(pending)
}

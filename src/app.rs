//! Application orchestrator.
//! Initializes logging, merges CLI flags with interactive prompt answers,
//! shows the optional preview, asks for confirmation, and runs the renames.

use anyhow::Result;
use tracing::{debug, error, info};

use crate::cli::Args;
use crate::config::Config;
use crate::errors::ResubError;
use crate::output as out;
use crate::plan::{self, plan_renames};
use crate::{fs_ops, logging, prompt};

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    let level = args.effective_log_level().unwrap_or_default();
    let _guard = logging::init_tracing(&level, args.log_file.as_deref()).map_err(|e| {
        out::error(&format!("Failed to initialize logging: {}", e));
        e
    })?;
    debug!("starting resub: {:?}", args);

    let cfg = build_config(&args)?;

    // The plan computed here backs the preview and the JSON output; the
    // executor re-derives its own from the same inputs.
    let files = fs_ops::list_files(&cfg.directory)?;
    let plan = plan_renames(&files, &cfg.search, &cfg.replacement);

    if args.json {
        let changed: Vec<_> = plan::changes(&plan).collect();
        out::user(&serde_json::to_string_pretty(&changed)?);
        return Ok(());
    }

    let preview = if args.no_preview {
        false
    } else if args.interactive() {
        prompt::confirm("Would you like to preview the changes before renaming?", true)?
    } else {
        true
    };

    if preview {
        out::user("\nPreview of renaming changes:");
        for item in plan::changes(&plan) {
            out::user(&format!("Rename: {} -> {}", item.original, item.renamed));
        }

        // Dry runs mutate nothing, so there is nothing to confirm.
        if !args.yes && !cfg.dry_run {
            let proceed = prompt::confirm("Do you want to proceed with these changes?", false)?;
            if !proceed {
                out::user("Renaming cancelled.");
                info!("run cancelled at confirmation prompt");
                return Ok(());
            }
        }
    }

    match fs_ops::execute_renames(&cfg) {
        Ok(renamed) => {
            if cfg.dry_run {
                out::info(&format!(
                    "Dry-run complete; {renamed} file(s) would be renamed, nothing was changed."
                ));
            } else {
                out::success("Renaming completed.");
            }
            info!(renamed, dry_run = cfg.dry_run, "run finished");
            Ok(())
        }
        Err(e) => {
            if let Some(re) = e.downcast_ref::<ResubError>() {
                error!(code = re.code(), error = %re, "Rename run failed");
            } else {
                error!(error = ?e, "Rename run failed");
            }
            Err(e)
        }
    }
}

/// Resolve the run inputs: flags win, missing interactive answers are
/// prompted for, missing non-interactive answers take their defaults. A
/// directory given by flag that fails validation is a fatal error rather
/// than a re-prompt, since there is nobody to re-prompt.
fn build_config(args: &Args) -> Result<Config> {
    let directory = match args.resolved_directory() {
        Some(p) => p,
        None => prompt::ask_directory()?,
    };
    let search = match &args.search {
        Some(s) => s.clone(),
        None => prompt::ask_search()?,
    };
    let replacement = match &args.replace {
        Some(r) => r.clone(),
        None if args.interactive() => prompt::ask_replacement()?,
        None => String::new(),
    };

    let mut cfg = Config::new(directory, search, replacement);
    cfg.dry_run = args.dry_run;
    cfg.force = args.force;
    cfg.validate()?;
    Ok(cfg)
}

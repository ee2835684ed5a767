use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{debug, info, info_span};

use roster_cli::logging::redact_value;
use roster_cli::render::{page_footer, records_table, stats_table};
use roster_cli::session::{FileDashboard, Session};
use roster_model::{PageSize, RecordDraft, RecordId};
use roster_output::{ExportFormat, today, write_export};
use roster_store::LoadStatus;

use crate::cli::{DeleteManyArgs, ExportArgs, RecordArgs, UpdateArgs, ViewArgs};

pub fn run_load(session: &mut Session, location: &str) -> Result<()> {
    let span = info_span!("load", location);
    let _guard = span.enter();
    let applied = session.ensure_loaded(location)?;
    let dashboard = session.dashboard();
    if let Some(message) = dashboard.status().error() {
        bail!("{message}\nCheck the source location and run `roster load` again.");
    }
    if applied {
        println!("Loaded {} users from {location}.", dashboard.records().len());
    } else {
        println!(
            "{} users already saved; nothing loaded.",
            dashboard.records().len()
        );
    }
    Ok(())
}

/// Load on first use. A failed fetch is reported but the command still runs
/// on the empty list.
fn ensure_initial(session: &mut Session, location: &str) -> Result<()> {
    session.ensure_loaded(location)?;
    if let LoadStatus::Failed(message) = session.dashboard().status() {
        eprintln!("warning: {message}");
    }
    Ok(())
}

fn apply_view(dashboard: &mut FileDashboard, args: &ViewArgs) {
    if let Some(search) = &args.search {
        dashboard.set_search(search.as_str());
    }
    dashboard.set_gender_filter(args.gender_filter());
    dashboard.set_sort(args.sort_spec());
    dashboard.set_page(args.page);
    if dashboard.correct_page() {
        eprintln!("note: page {} is out of range, showing page 1", args.page);
    }
}

pub fn run_list(session: &mut Session, args: &ViewArgs, location: &str) -> Result<()> {
    ensure_initial(session, location)?;
    apply_view(session.dashboard_mut(), args);

    let dashboard = session.dashboard();
    let state = dashboard.view_state();
    let view = dashboard.view();
    println!(
        "{}",
        records_table(&view, state.selection(), state.sort())
    );
    println!("{}", page_footer(&view));
    Ok(())
}

pub fn run_add(session: &mut Session, args: RecordArgs) -> Result<()> {
    let draft = RecordDraft {
        first_name: args.first_name,
        last_name: args.last_name,
        email: args.email,
        gender: args.gender,
        ip_address: args.ip_address,
    };
    let email = draft.email.clone();
    let id = session
        .dashboard_mut()
        .create_record(draft)
        .context("user not added")?;
    info!(%id, email = redact_value(&email), "user added");
    println!("Added user {id}.");
    Ok(())
}

pub fn run_update(session: &mut Session, args: UpdateArgs) -> Result<()> {
    let dashboard = session.dashboard_mut();
    let Some(existing) = dashboard.record(&args.id) else {
        bail!("no user with id {}", args.id);
    };
    let mut draft = RecordDraft::from_record(existing);
    let mut changed = false;
    for (slot, value) in [
        (&mut draft.first_name, args.first_name),
        (&mut draft.last_name, args.last_name),
        (&mut draft.email, args.email),
        (&mut draft.gender, args.gender),
        (&mut draft.ip_address, args.ip_address),
    ] {
        if let Some(value) = value {
            *slot = value;
            changed = true;
        }
    }
    if !changed {
        bail!("nothing to change; pass at least one field flag");
    }

    dashboard
        .edit_record(&args.id, draft)
        .context("user not updated")?;
    info!(id = %args.id, "user updated");
    println!("Updated user {}.", args.id);
    Ok(())
}

pub fn run_delete(session: &mut Session, id: &str) -> Result<()> {
    if session.dashboard_mut().delete_record(id) {
        println!("Deleted user {id}.");
    } else {
        println!("No user with id {id}; nothing deleted.");
    }
    Ok(())
}

pub fn run_delete_many(session: &mut Session, args: &DeleteManyArgs) -> Result<()> {
    let dashboard = session.dashboard_mut();
    if args.visible {
        apply_view(dashboard, &args.view);
        dashboard.toggle_page_selection();
    } else {
        dashboard.select_many(args.ids.iter().map(|id| RecordId::from(id.as_str())));
    }

    let requested = dashboard.view_state().selection().len();
    let removed = dashboard.delete_selected();
    debug!(requested, removed, "bulk delete finished");
    println!("Deleted {removed} users.");
    if removed < requested {
        println!("{} ids matched no user.", requested - removed);
    }
    Ok(())
}

pub fn run_export(
    session: &mut Session,
    args: &ExportArgs,
    default_dir: Option<&Path>,
    location: &str,
) -> Result<()> {
    ensure_initial(session, location)?;
    let format = ExportFormat::from(args.format);
    let dir = args
        .output_dir
        .clone()
        .or_else(|| default_dir.map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));

    let records = session.dashboard().records();
    let path = write_export(&dir, format, records, today())
        .with_context(|| format!("export {format} to {}", dir.display()))?;
    println!("Exported {} users to {}.", records.len(), path.display());
    Ok(())
}

pub fn run_stats(session: &mut Session, location: &str) -> Result<()> {
    ensure_initial(session, location)?;
    println!("{}", stats_table(&session.dashboard().stats()));
    Ok(())
}

pub fn run_page_size(session: &mut Session, size: Option<PageSize>) -> Result<()> {
    let dashboard = session.dashboard_mut();
    match size {
        Some(size) => {
            dashboard.set_page_size(size);
            println!("Page size set to {size}.");
        }
        None => println!("Page size: {}", dashboard.view_state().page_size()),
    }
    Ok(())
}

use crate::authors;
use crate::changeset::ChangeSet;
use crate::context::HookContext;
use crate::deliver::{self, Mailer};
use crate::report::format_report;
use crate::{status, warning};
use crate::svnlook::Inspector;
use anyhow::{Context, Result};

/// run the post-commit pipeline once: inspect, classify, resolve, format, deliver
///
/// every stage must finish before the next starts; the first failure aborts
/// the run before anything is delivered. returns the delivered report
pub fn run(ctx: &HookContext, inspector: &dyn Inspector, mailer: &dyn Mailer) -> Result<String> {
    let info = inspector.info().context("failed to read commit info")?;
    let changed = inspector.changed().context("failed to read changed paths")?;
    if ctx.verbose {
        status!(
            "r{} by {}: {} changed path(s)",
            info.revision,
            info.author.trim(),
            changed.len()
        );
        if let Some(length) = info.log_length
            && length != info.log_message.len()
        {
            warning!(
                "log length {} doesn't match the {} byte message read",
                length,
                info.log_message.len()
            );
        }
    }

    let changes = ChangeSet::classify(&changed);
    if ctx.verbose {
        status!(
            "{} modified, {} added, {} deleted, {} other in {}",
            changes.modified.len(),
            changes.added.len(),
            changes.deleted.len(),
            changes.other.len(),
            changes.subject_tag()
        );
    }

    // only a configured directory produces a From header
    let from = ctx
        .authors
        .as_deref()
        .map(|directory| authors::resolve(Some(directory), info.author.trim()));
    if ctx.verbose
        && let Some(from) = &from
    {
        status!("mail from {}", from);
    }

    let report = format_report(&info, &changes, ctx.other_section);

    deliver::deliver(
        &report,
        &changes.subject_tag(),
        &ctx.destinations,
        from.as_deref(),
        mailer,
    )
    .context("failed to deliver commit summary")?;
    if ctx.verbose {
        status!("delivered r{}", info.revision);
    }

    Ok(report)
}

use crate::constants::{CHANGELOG_SEPARATOR, SUBJECT_PREFIX};
use crate::context::Destinations;
use crate::error::HookError;
use crate::process;
use fs2::FileExt;
use std::ffi::OsStr;
use std::fmt::Write as _;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

/// hands a composed message to a mail transfer agent
pub trait Mailer {
    fn send(&self, to: &str, message: &str) -> Result<(), HookError>;
}

/// pipes the message into `sendmail <to>`
#[derive(Debug, Clone)]
pub struct Sendmail {
    pub command: String,
    pub timeout: Option<Duration>,
}

impl Mailer for Sendmail {
    fn send(&self, to: &str, message: &str) -> Result<(), HookError> {
        process::run(
            &self.command,
            &[OsStr::new(to)],
            Some(message.as_bytes()),
            self.timeout,
        )
        .map(|_| ())
        .map_err(|message| HookError::delivery(format!("mail to {to}"), message))
    }
}

/// headers, a blank line, then the report
pub fn compose_message(report: &str, subject_tag: &str, to: &str, from: Option<&str>) -> String {
    let mut message = String::new();
    if let Some(from) = from {
        let _ = writeln!(message, "From: {from}");
    }
    let _ = writeln!(message, "To: {to}");
    let _ = writeln!(message, "Subject: {SUBJECT_PREFIX}{subject_tag}");
    message.push('\n');
    message.push_str(report);
    message.push('\n');
    message
}

/// append one `===>` delimited entry to the changelog
///
/// the entry goes out in a single write while holding an exclusive lock so
/// concurrent hook runs can't interleave
pub fn append_changelog(path: &Path, report: &str) -> Result<(), HookError> {
    let failed = |e: std::io::Error| HookError::delivery(path.display().to_string(), e.to_string());

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(failed)?;

    let entry = format!("{CHANGELOG_SEPARATOR}\n{report}\n");

    file.lock_exclusive().map_err(failed)?;
    let written = file.write_all(entry.as_bytes()).and_then(|()| file.flush());
    let unlocked = FileExt::unlock(&file);
    written.map_err(failed)?;
    unlocked.map_err(failed)
}

/// send the report to every configured destination, mail first
///
/// stops at the first failure
pub fn deliver(
    report: &str,
    subject_tag: &str,
    destinations: &Destinations,
    from: Option<&str>,
    mailer: &dyn Mailer,
) -> Result<(), HookError> {
    if let Some(to) = destinations.mailto() {
        mailer.send(to, &compose_message(report, subject_tag, to, from))?;
    }

    if let Some(changelog) = destinations.changelog() {
        append_changelog(changelog, report)?;
    }

    Ok(())
}

use crate::constants::{SENDMAIL_COMMAND, SVNLOOK_COMMAND};
use crate::context::{Destinations, HookContext, OtherSection};
use crate::error::HookError;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// svn-commit-log: subversion post-commit hook that mails and/or logs
/// openbsd cvs style commit summaries
///
/// at least one of --mailto or --changelog must be given
#[derive(Parser, Debug)]
#[command(name = "svn-commit-log", version, about, long_about = None)]
pub struct Cli {
    /// email address to mail the commit summary to
    #[arg(long, value_name = "ADDRESS")]
    pub mailto: Option<String>,

    /// file to append the commit summary to
    #[arg(long, value_name = "PATH")]
    pub changelog: Option<PathBuf>,

    /// tab separated map of usernames to email addresses
    #[arg(long, value_name = "PATH")]
    pub authors: Option<PathBuf>,

    /// command used to inspect the repository
    #[arg(long, value_name = "COMMAND", default_value = SVNLOOK_COMMAND)]
    pub svnlook: String,

    /// command used to deliver mail, the recipient is appended
    #[arg(long, value_name = "COMMAND", default_value = SENDMAIL_COMMAND)]
    pub sendmail: String,

    /// kill an external command that runs longer than this many seconds
    /// (default: wait for it to finish)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// list the real "other" paths instead of the historical deleted-paths rendering
    #[arg(long)]
    pub list_other_paths: bool,

    /// print progress for each stage
    #[arg(long, short)]
    pub verbose: bool,

    /// path to the repository
    #[arg(value_name = "REPO")]
    pub repo: PathBuf,

    /// revision that was just committed
    #[arg(value_name = "REVISION")]
    pub revision: u64,
}

impl Cli {
    /// parse from the process arguments
    pub fn parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }

    /// validate into the hook context; fails when there is nowhere to deliver to
    pub fn into_context(self) -> Result<HookContext, HookError> {
        let destinations = match (self.mailto, self.changelog) {
            (None, None) => {
                return Err(HookError::Configuration(
                    "nothing to do: one of --mailto or --changelog is required".to_string(),
                ));
            }
            (Some(mailto), None) => Destinations::Mail(mailto),
            (None, Some(changelog)) => Destinations::Changelog(changelog),
            (Some(mailto), Some(changelog)) => Destinations::Both { mailto, changelog },
        };

        if self.svnlook.trim().is_empty() {
            return Err(HookError::Configuration("--svnlook must not be empty".to_string()));
        }
        if self.sendmail.trim().is_empty() {
            return Err(HookError::Configuration("--sendmail must not be empty".to_string()));
        }

        Ok(HookContext {
            repo: self.repo,
            revision: self.revision,
            destinations,
            authors: self.authors,
            svnlook: self.svnlook,
            sendmail: self.sendmail,
            timeout: self.timeout.map(Duration::from_secs),
            other_section: if self.list_other_paths {
                OtherSection::OtherPaths
            } else {
                OtherSection::DeletedPaths
            },
            verbose: self.verbose,
        })
    }
}

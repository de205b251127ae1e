mod authors;
mod changeset;
mod cli;
mod constants;
mod context;
mod deliver;
mod error;
mod hook;
mod process;
mod report;
mod svnlook;
mod ui;

use crate::cli::Cli;
use crate::deliver::Sendmail;
use crate::svnlook::SvnLook;
use anyhow::Result;

fn main() {
    ui::configure_colour();

    let cli = match Cli::parse_args() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version are not failures
            let _ = e.print();
            std::process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    };

    if let Err(e) = run(cli) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let ctx = cli.into_context()?;

    let inspector = SvnLook {
        command: ctx.svnlook.clone(),
        repo: ctx.repo.clone(),
        revision: ctx.revision,
        timeout: ctx.timeout,
    };
    let mailer = Sendmail {
        command: ctx.sendmail.clone(),
        timeout: ctx.timeout,
    };

    hook::run(&ctx, &inspector, &mailer)?;

    Ok(())
}

use super::args::{Cli, Command};

pub mod ci_summary;
pub mod gate;
pub mod run;

pub async fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        Command::Run(args) => run::run(args).await,
        Command::Gate(args) => gate::run(args),
        Command::CiSummary(args) => ci_summary::run(args),
    }
}

use super::args::{Cli, Commands, ConfigCommand};
use super::handlers::{self, HandlerContext};
use crate::logging;
use crate::presentation::ViewMode;
use anyhow::Result;
use copytrace_runtime::{CopyTrace, resolve_workspace_path};

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let data_dir = resolve_workspace_path(cli.data_dir.as_deref())?;

    match cli.command {
        Commands::Config { command } => {
            let ctx = HandlerContext::with_mode(cli.format, ViewMode::default());
            match command {
                ConfigCommand::Show => handlers::config::handle_show(&data_dir, &ctx),
                ConfigCommand::Init { force } => {
                    handlers::config::handle_init(&data_dir, force, &ctx)
                }
            }
        }

        Commands::Analyze { wallet, view } => {
            let workspace = CopyTrace::open(data_dir)?;
            let ctx = HandlerContext::new(cli.format, &view.view_mode);
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(handlers::analyze::handle(&workspace, &wallet, &view, &ctx))
        }

        Commands::Results { view, clear } => {
            let workspace = CopyTrace::open(data_dir)?;
            let ctx = HandlerContext::new(cli.format, &view.view_mode);
            if clear {
                handlers::results::handle_clear(&workspace, &ctx)
            } else {
                handlers::results::handle(&workspace, &view, &ctx)
            }
        }

        Commands::Browse => {
            let workspace = CopyTrace::open(data_dir)?;
            handlers::browse::handle(&workspace)
        }

        Commands::Transactions {
            leader,
            follower,
            view_mode,
        } => {
            let workspace = CopyTrace::open(data_dir)?;
            let ctx = HandlerContext::new(cli.format, &view_mode);
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(handlers::transactions::handle(
                &workspace, &leader, &follower, &ctx,
            ))
        }

        Commands::Export {
            output,
            sort,
            direction,
        } => {
            let workspace = CopyTrace::open(data_dir)?;
            let ctx = HandlerContext::with_mode(cli.format, ViewMode::default());
            handlers::export::handle(&workspace, &output, sort, direction, &ctx)
        }
    }
}

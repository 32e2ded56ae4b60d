use anyhow::Result;
use copytrace_runtime::CopyTrace;

use super::{HandlerContext, apply_view_args, resolve_scheme};
use crate::args::LeaderboardArgs;
use crate::presentation::presenters;

pub fn handle(workspace: &CopyTrace, args: &LeaderboardArgs, ctx: &HandlerContext) -> Result<()> {
    let response = workspace.last_response()?;
    let mut controller = workspace.last_result()?;
    apply_view_args(&mut controller, args);
    let scheme = resolve_scheme(&controller, args);

    let Some(view) = controller.view() else {
        anyhow::bail!("Stored result could not be loaded");
    };

    ctx.render(presenters::present_leaderboard(view, scheme, &response))
}

pub fn handle_clear(workspace: &CopyTrace, ctx: &HandlerContext) -> Result<()> {
    let store = workspace.store();
    let removed = store.clear()?;
    ctx.render(presenters::present_clear(store.path(), removed))
}

use anyhow::Result;
use copytrace_runtime::CopyTrace;
use tracing::debug;

use super::{HandlerContext, apply_view_args, resolve_scheme};
use crate::args::LeaderboardArgs;
use crate::presentation::presenters;

pub async fn handle(
    workspace: &CopyTrace,
    wallet: &str,
    args: &LeaderboardArgs,
    ctx: &HandlerContext,
) -> Result<()> {
    let analysis = workspace.analyze(wallet).await?;

    let mut controller = analysis.controller;
    apply_view_args(&mut controller, args);
    let scheme = resolve_scheme(&controller, args);

    let Some(view) = controller.view() else {
        anyhow::bail!("Analysis finished without a result to show");
    };
    debug!(rows = view.rows.len(), page = view.page.page, "rendering analysis");

    ctx.render(presenters::present_analysis(view, scheme, &analysis.response))
}

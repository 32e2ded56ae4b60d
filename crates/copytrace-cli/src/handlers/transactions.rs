use anyhow::Result;
use copytrace_runtime::CopyTrace;

use super::HandlerContext;
use crate::presentation::presenters;

pub async fn handle(
    workspace: &CopyTrace,
    leader: &str,
    follower: &str,
    ctx: &HandlerContext,
) -> Result<()> {
    let response = workspace.copy_transactions(leader, follower).await?;

    ctx.render(presenters::present_transactions(
        leader.trim().to_string(),
        follower.trim().to_string(),
        response.transactions,
    ))
}

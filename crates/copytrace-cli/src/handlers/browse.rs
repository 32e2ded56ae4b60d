use anyhow::Result;
use copytrace_runtime::CopyTrace;
use is_terminal::IsTerminal;

use crate::presentation::renderers::BrowseApp;

pub fn handle(workspace: &CopyTrace) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        anyhow::bail!("browse needs an interactive terminal; use `copytrace results` instead");
    }

    let response = workspace.last_response()?;
    let controller = workspace.last_result()?;
    let scheme = controller.options().classifier.scheme;

    BrowseApp::new(controller, response, scheme).run()
}

use anyhow::Result;
use copytrace_runtime::Config;
use std::path::Path;

use super::HandlerContext;
use crate::presentation::presenters;

pub fn handle_show(data_dir: &Path, ctx: &HandlerContext) -> Result<()> {
    let path = Config::path_in(data_dir);
    let exists = path.exists();
    let config = Config::load_from(&path)?.with_env_overrides();

    ctx.render(presenters::present_config_show(&path, exists, config))
}

pub fn handle_init(data_dir: &Path, force: bool, ctx: &HandlerContext) -> Result<()> {
    let path = Config::path_in(data_dir);

    if path.exists() && !force {
        let config = Config::load_from(&path)?;
        return ctx.render(presenters::present_config_init(&path, false, config));
    }

    let config = Config::default();
    config.save_to(&path)?;
    ctx.render(presenters::present_config_init(&path, true, config))
}

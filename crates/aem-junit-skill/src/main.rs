//! CLI entrypoint for aem-junit-skill.

use aem_junit_skill::Application;
use anyhow::Result;

fn main() -> Result<()> {
    let app = Application::new();
    let exit_code = app.run()?;
    std::process::exit(exit_code);
}

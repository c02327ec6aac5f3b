use anyhow::Result;
use tracing::info;

use sable_term::Session;

fn main() -> Result<()> {
    // stdout carries protocol responses, so logs go to stderr.
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    info!("sable starting");
    Session::new().run()?;
    Ok(())
}

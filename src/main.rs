//! frontconf: resolve, validate and render front-end application settings

use anyhow::Result;

fn main() -> Result<()> {
    frontconf::cli::run()
}

//! Modules command implementation

use anyhow::Result;

use crate::domain::ModuleId;

pub fn run() -> Result<()> {
    let width = ModuleId::ALL.iter().map(|m| m.as_str().len()).max().unwrap_or(0);
    for module in ModuleId::ALL {
        println!("{:<width$}  {}", module.as_str(), module.description(), width = width);
    }
    Ok(())
}

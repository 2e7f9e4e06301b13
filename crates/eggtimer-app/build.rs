//! Emits the short commit hash and the dirty flag of the working tree for the
//! startup log line.

use vergen_gitcl::{Emitter, GitclBuilder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let git = GitclBuilder::default().sha(true).dirty(false).build()?;
    Emitter::default().add_instructions(&git)?.emit()?;
    Ok(())
}

use crate::{layout, plan::Plan, report, scaffold};
use std::path::PathBuf;

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum RangkaError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Scaffold(#[from] scaffold::ScaffoldError),
}

/// Creates the full project structure under
/// `./drug-consumption-dnn-prediction`: the base directory, every
/// subdirectory, then every placeholder file, reporting each entry as
/// created or already existing, followed by a closing summary.
///
/// The operation is idempotent: re-running it only fills in whatever is
/// missing and never overwrites existing content.
///
/// # Errors
///
/// Returns a [`RangkaError`] if:
///
/// - A directory cannot be created.
/// - A placeholder file cannot be written.
pub fn create_project_structure() -> Result<(), RangkaError> {
    let root = PathBuf::from(layout::BASE_DIR);

    log::debug!("scaffolding project under: {}", root.display());

    let plan = Plan::project_layout();

    let report = scaffold::apply(&plan, &root)?;

    report::print_summary(&plan, &root, &report);

    Ok(())
}

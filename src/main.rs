use clap::{crate_description, crate_name, crate_version, Command};

// The CLI layer should only parse inputs and forward them to library code.
fn main() -> miette::Result<()> {
    env_logger::init();

    // No arguments beyond the built-in --help/--version; running the binary
    // performs the full scaffolding operation.
    Command::new(crate_name!())
        .about(crate_description!())
        .version(crate_version!())
        .get_matches();

    rangka::api::create_project_structure()?;

    Ok(())
}

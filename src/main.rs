use log::{error, info};
use std::io;
use std::path::Path;
use std::process::ExitCode;

mod assets;
mod error;
mod layout;
mod transform;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let root = Path::new(layout::RESOURCES_DIR);

    match assets::generate_all(root, &mut io::stdout().lock()) {
        Ok(written) => {
            info!("✅ Generated {} assets under {}", written.len(), root.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("❌ {}", error::describe(&err));
            ExitCode::FAILURE
        }
    }
}

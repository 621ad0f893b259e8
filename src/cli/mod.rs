//! CLI surface: argument definitions, handlers, and output rendering

pub mod commands;
pub mod output;

use crate::config::ScanConfig;
use crate::runtime::SystemProbe;
use crate::scan::{Orchestrator, ScanContext};
use commands::DetectArgs;
use tracing::{error, warn};

/// Run one detection over the given source tree.
///
/// Exit codes: 0 - descriptor produced, 1 - no deployable Python stack,
/// 2 - hard error in positively-identified manifests.
pub fn handle_detect(args: &DetectArgs) -> i32 {
    let source_dir = args.path.canonicalize().unwrap_or_else(|_| args.path.clone());
    let config = ScanConfig::from_env();
    let probe = SystemProbe;
    let ctx = ScanContext::new(&source_dir, &config, &probe);

    match Orchestrator::new().detect(&ctx) {
        Ok(Some(descriptor)) => match output::render(&descriptor, args.format) {
            Ok(rendered) => {
                println!("{rendered}");
                0
            }
            Err(err) => {
                error!("failed to render descriptor: {err:#}");
                2
            }
        },
        Ok(None) => {
            warn!(
                "no deployable Python stack found in {}",
                source_dir.display()
            );
            1
        }
        Err(err) => {
            error!("{err}");
            2
        }
    }
}

use anyhow::Result;

use spindrift::app::DriftApp;
use spindrift::device::GpuInit;
use spindrift::logging::{init_logging, LoggingConfig};
use spindrift::sim::SimConfig;
use spindrift::window::{Runtime, RuntimeConfig};

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let app = DriftApp::new(SimConfig::default());
    Runtime::run(RuntimeConfig::default(), GpuInit::default(), app)
}

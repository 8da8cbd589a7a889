// Copyright (C) 2024-2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)] // Allow multiple versions from transitive dependencies
#![allow(clippy::cargo_common_metadata)] // Metadata is inherited from workspace

#[macro_use]
extern crate tracing;

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::{
    EnvFilter,
    fmt::layer,
    layer::SubscriberExt,
    util::SubscriberInitExt,
};
use ttyconsts_common::constants::ReportVariant;
use ttyconsts_common::report::run_report;

/// Install the tracing stack. Diagnostics go to stderr only; stdout is
/// reserved for the report itself.
///
/// Filtering is driven by the environment, e.g.
/// `RUST_LOG=ttyconsts_common=trace ttyconsts`.
pub fn init_tracing() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(Level::WARN.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

/// Entry point shared by the two reporter binaries.
///
/// # Errors
/// Will return an error if the report cannot be written to stdout.
pub fn run(variant: ReportVariant) -> Result<()> {
    init_tracing();
    trace!("reporting {variant:?} constant list");
    run_report(variant)?;

    Ok(())
}

//! Check command implementation.
//!
//! Runs the symbol self-check: short identifiers must round-trip exactly,
//! invalid identifiers must be rejected, and long identifiers must encode
//! lossily, deterministically, with bit 63 set and bit 62 clear, and must
//! survive decode followed by encode unchanged.

use std::time::Instant;

use symc_core::symbol::{LOSSY_FLAG, RESERVED_BIT};
use symc_core::Symbol;
use tracing::{debug, warn};

use crate::config::CheckConfig;
use crate::error::{Result, SymtError};

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Cases to run.
    pub cases: CheckConfig,
}

/// Outcome of a full self-check run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    /// Number of cases run.
    pub total: usize,
    /// One message per failed case.
    pub failures: Vec<String>,
}

impl CheckReport {
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }

    fn record(&mut self, outcome: std::result::Result<String, String>) {
        self.total += 1;
        match outcome {
            Ok(message) => debug!("{message}"),
            Err(message) => {
                warn!("{message}");
                self.failures.push(message);
            }
        }
    }
}

/// An exact identifier must decode back to itself.
fn round_trip(identifier: &str) -> std::result::Result<String, String> {
    let symbol = Symbol::new(identifier)
        .map_err(|e| format!("unexpected error encoding {identifier:?}: {e}"))?;
    let decoded = symbol.decode();

    if decoded != identifier {
        return Err(format!(
            "round trip: {identifier:?} -> {} -> {decoded:?} NOT RECOVERED",
            symbol.code()
        ));
    }
    if symbol.is_lossy() {
        return Err(format!("round trip: {identifier:?} was encoded lossily"));
    }
    Ok(format!(
        "round trip: {identifier:?} -> {} -> {decoded:?} recovered",
        symbol.code()
    ))
}

/// An identifier with a foreign character must be rejected.
fn expect_invalid(identifier: &str) -> std::result::Result<String, String> {
    match Symbol::new(identifier) {
        Err(e) => Ok(format!("caught expected error: {e}")),
        Ok(symbol) => Err(format!(
            "no error encoding {identifier:?}, got {}",
            symbol.code()
        )),
    }
}

/// A long identifier must encode lossily and reliably.
fn lossy(identifier: &str) -> std::result::Result<String, String> {
    let first = Symbol::new(identifier)
        .map_err(|e| format!("unexpected error encoding {identifier:?}: {e}"))?;
    let second = Symbol::new(identifier)
        .map_err(|e| format!("unexpected error encoding {identifier:?}: {e}"))?;

    if first != second {
        return Err(format!("unreliable encoding of {identifier:?}"));
    }
    if first.code() & LOSSY_FLAG == 0 {
        return Err(format!(
            "high bit of encoded {identifier:?} -> {} not set",
            first.code()
        ));
    }
    if first.code() & RESERVED_BIT != 0 {
        return Err(format!(
            "second-highest bit of encoded {identifier:?} -> {} is set",
            first.code()
        ));
    }

    let text = first.decode();
    match Symbol::new(&text) {
        Ok(again) if again == first => Ok(format!(
            "reliably encoded long identifier {identifier:?} as {} ({text})",
            first.code()
        )),
        _ => Err(format!(
            "re-encoding {text:?} did not reproduce {}",
            first.code()
        )),
    }
}

/// Run every configured case and collect the results.
pub fn run_check(args: &CheckArgs) -> CheckReport {
    let start_time = Instant::now();
    let mut report = CheckReport::default();

    for identifier in &args.cases.round_trip {
        report.record(round_trip(identifier));
    }
    for identifier in &args.cases.invalid {
        report.record(expect_invalid(identifier));
    }
    for identifier in &args.cases.lossy {
        report.record(lossy(identifier));
    }

    if args.verbose {
        debug!(
            "ran {} cases in {:.2}ms",
            report.total,
            start_time.elapsed().as_secs_f64() * 1000.0
        );
    }
    report
}

/// Run the check command, failing unless every case passed.
pub fn execute(args: CheckArgs) -> Result<()> {
    let report = run_check(&args);

    if report.passed() {
        println!("passed.");
        Ok(())
    } else {
        println!("failed!");
        Err(SymtError::CheckFailed {
            failed: report.failures.len(),
            total: report.total,
        })
    }
}

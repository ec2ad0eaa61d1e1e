//! Encode, decode and validate commands.
//!
//! Thin wrappers over `symc_core` that render one line (or one JSON record)
//! per input.

use serde::Serialize;
use symc_core::Symbol;

use crate::error::{Result, SymtError};

/// One encoded or decoded symbol, as printed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolRecord {
    /// Raw 64-bit code.
    pub code: u64,
    /// Code as `0x`-prefixed, zero-padded hex.
    pub hex: String,
    /// Whether the code uses the lossy layout.
    pub lossy: bool,
    /// Decoded text.
    pub text: String,
}

impl SymbolRecord {
    pub fn new(symbol: Symbol) -> Self {
        Self {
            code: symbol.code(),
            hex: format!("{:#018x}", symbol.code()),
            lossy: symbol.is_lossy(),
            text: symbol.decode(),
        }
    }

    fn render(&self) -> String {
        let mode = if self.lossy { "lossy" } else { "exact" };
        format!("{} {} {} {:?}", self.code, self.hex, mode, self.text)
    }
}

/// Arguments shared by encode and decode.
#[derive(Debug, Clone, Default)]
pub struct CodecArgs {
    /// Inputs: identifiers for encode, codes for decode.
    pub inputs: Vec<String>,
    /// Emit a JSON array instead of text lines.
    pub json: bool,
}

/// Parse a symbol code written in decimal or `0x` hex.
pub fn parse_code(input: &str) -> Result<u64> {
    let parsed = match input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
    {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => input.parse(),
    };
    parsed.map_err(|e| SymtError::Validation(format!("invalid symbol code {input:?}: {e}")))
}

/// Encode every identifier; the first invalid one aborts.
pub fn encode_all(inputs: &[String]) -> Result<Vec<SymbolRecord>> {
    inputs
        .iter()
        .map(|ident| -> Result<SymbolRecord> {
            let symbol = Symbol::new(ident)?;
            tracing::debug!("encoded {ident:?} as {:#018x}", symbol.code());
            Ok(SymbolRecord::new(symbol))
        })
        .collect()
}

/// Decode every code; the first unparsable one aborts.
pub fn decode_all(inputs: &[String]) -> Result<Vec<SymbolRecord>> {
    inputs
        .iter()
        .map(|input| parse_code(input).map(|code| SymbolRecord::new(Symbol::from_code(code))))
        .collect()
}

/// Render records as text lines or a JSON array.
pub fn render(records: &[SymbolRecord], json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(records)?);
    }
    Ok(records
        .iter()
        .map(SymbolRecord::render)
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Run the encode command.
pub fn run_encode(args: CodecArgs) -> Result<()> {
    let records = encode_all(&args.inputs)?;
    println!("{}", render(&records, args.json)?);
    Ok(())
}

/// Run the decode command.
pub fn run_decode(args: CodecArgs) -> Result<()> {
    let records = decode_all(&args.inputs)?;
    println!("{}", render(&records, args.json)?);
    Ok(())
}

/// Run the validate command.
///
/// Prints `valid` or the reason per identifier and fails if any is invalid.
pub fn run_validate(inputs: &[String]) -> Result<()> {
    let mut invalid = 0;
    for ident in inputs {
        match symc_core::letter::check(ident) {
            Ok(()) => println!("{ident:?} valid"),
            Err(e) => {
                invalid += 1;
                println!("{ident:?} invalid: {e}");
            }
        }
    }

    if invalid > 0 {
        return Err(SymtError::Validation(format!(
            "{invalid} of {} identifiers are invalid",
            inputs.len()
        )));
    }
    Ok(())
}

//! # Golden Tests
//!
//! These tests ensure that receipt encoding produces byte-identical jobs.
//!
//! ## Test Coverage
//!
//! - **`end_to_end.bin`**: plain, centered and extra-large lines in one job.
//! - **`demo_receipt.bin`**: a full shop receipt using every markup token,
//!   blank lines and a line with stray `\r`.
//!
//! ## Regenerating Golden Files
//!
//! ```bash
//! cargo test generate_golden_files -- --ignored --nocapture
//! ```

use posbridge::dispatcher::assemble;
use posbridge::receipt::ReceiptDocument;
use std::fs;

/// Path to golden test directory
const GOLDEN_DIR: &str = "tests/golden";

const END_TO_END: &str = "Hello\n**CENTER**World**CENTER**\n**XLARGE**Total**XLARGE**";

const DEMO_RECEIPT: &str = "\
**CENTER****XLARGE**CHURRA MART**XLARGE****CENTER**
**CENTER**42 Galle Road, Colombo**CENTER**
**CENTER**Tel 011 234 5678**CENTER**

Invoice: INV-2024-0117
Cashier: Nimal\r
--------------------------------
Coffee x2                   7.00
Croissant                   3.25
Orange juice                4.50
--------------------------------
**LARGE**TOTAL            14.75**LARGE**
Cash                       20.00
Change                      5.25

**CENTER****LARGE**Thank you!**LARGE****CENTER**
**CENTER**Please come again**CENTER**
";

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

fn encode(content: &str) -> Vec<u8> {
    assemble(&ReceiptDocument::parse(content)).into_bytes()
}

/// Write binary data to a golden file
fn write_golden(name: &str, data: &[u8]) {
    let path = format!("{}/{}.bin", GOLDEN_DIR, name);
    fs::write(&path, data).unwrap_or_else(|e| panic!("Failed to write {}: {}", path, e));
    println!("Wrote {} ({} bytes)", path, data.len());
}

/// Compare data against a golden file
fn check_golden(name: &str, data: &[u8]) {
    let path = format!("{}/{}.bin", GOLDEN_DIR, name);
    let golden = fs::read(&path).unwrap_or_else(|_| {
        panic!(
            "Golden file not found: {}. Run `cargo test generate_golden_files -- --ignored` to generate.",
            path
        )
    });

    if data.len() != golden.len() {
        panic!(
            "Golden file size mismatch for {}:\n\
             - Golden: {} bytes\n\
             - Actual: {} bytes",
            path,
            golden.len(),
            data.len()
        );
    }

    if data != golden {
        let first_diff = data
            .iter()
            .zip(golden.iter())
            .position(|(a, b)| a != b)
            .unwrap_or(data.len());

        panic!(
            "Golden file content mismatch for {}:\n\
             - First difference at byte {:#06x}",
            path, first_diff
        );
    }
}

// ============================================================================
// GOLDEN FILE GENERATOR
// ============================================================================

/// Run with: cargo test generate_golden_files -- --ignored --nocapture
#[test]
#[ignore]
fn generate_golden_files() {
    write_golden("end_to_end", &encode(END_TO_END));
    write_golden("demo_receipt", &encode(DEMO_RECEIPT));
    println!("\nAll golden files written to {}/", GOLDEN_DIR);
}

// ============================================================================
// BINARY TESTS
// ============================================================================

#[test]
fn test_binary_end_to_end() {
    check_golden("end_to_end", &encode(END_TO_END));
}

#[test]
fn test_binary_demo_receipt() {
    check_golden("demo_receipt", &encode(DEMO_RECEIPT));
}

#[test]
fn test_demo_receipt_framing() {
    let job = encode(DEMO_RECEIPT);
    assert!(job.starts_with(&[0x1B, 0x40]));
    assert!(job.ends_with(&[0x0A, 0x0A, 0x0A, 0x0A, 0x1D, 0x56, 0x42, 0x00]));
    assert!(!job.windows(2).any(|w| w == b"**"));
}

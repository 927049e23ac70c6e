//! Determinism checks for validation reports.
//!
//! Validation is a pure function of its inputs, so repeated runs must
//! serialize to byte-identical reports.
//!
//! # Example
//!
//! ```rust,ignore
//! use wearcheck_tests::determinism::verify_determinism;
//!
//! let result = verify_determinism(|| {
//!     run_validation(&stats, &selection, "hat.glb").to_json_pretty().unwrap()
//! }, 3);
//! result.assert_deterministic();
//! ```

use std::fmt;

/// Result of a determinism verification.
#[derive(Debug, Clone)]
pub struct DeterminismResult {
    /// Whether all runs produced identical output.
    pub is_deterministic: bool,
    /// Number of runs performed.
    pub runs: usize,
    /// Size of the reference output in bytes.
    pub output_size: usize,
    /// BLAKE3 hash of the reference output.
    pub hash: String,
    /// If non-deterministic, the first difference found.
    pub diff_info: Option<DiffInfo>,
}

/// First byte difference between the reference run and a later run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffInfo {
    /// Byte offset of the difference.
    pub offset: usize,
    /// Byte from the reference run, if it has one at `offset`.
    pub expected: Option<u8>,
    /// Byte from the differing run, if it has one at `offset`.
    pub actual: Option<u8>,
    /// Which run (0-indexed) differed.
    pub run_index: usize,
}

impl fmt::Display for DiffInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let byte = |b: Option<u8>| {
            b.map(|b| format!("0x{:02X}", b))
                .unwrap_or_else(|| "EOF".to_string())
        };
        write!(
            f,
            "Difference at byte {}: expected {}, got {} (run {})",
            self.offset,
            byte(self.expected),
            byte(self.actual),
            self.run_index
        )
    }
}

impl DeterminismResult {
    /// Panic with a detailed message if not deterministic.
    pub fn assert_deterministic(&self) {
        if let Some(diff) = &self.diff_info {
            panic!(
                "Non-deterministic output detected!\n\
                 Runs: {}\n\
                 Output size: {} bytes\n\
                 Hash: {}\n\
                 {}",
                self.runs, self.output_size, self.hash, diff
            );
        }
    }
}

/// Runs `generate_fn` `runs` times and compares every output to the first.
pub fn verify_determinism<F, O>(generate_fn: F, runs: usize) -> DeterminismResult
where
    F: Fn() -> O,
    O: AsRef<[u8]>,
{
    assert!(runs >= 2, "Must run at least 2 times to verify determinism");

    let reference = generate_fn();
    let reference_bytes = reference.as_ref();
    let hash = compute_hash(reference_bytes);

    let diff_info = (1..runs).find_map(|run_index| {
        let output = generate_fn();
        find_first_difference(reference_bytes, output.as_ref(), run_index)
    });

    DeterminismResult {
        is_deterministic: diff_info.is_none(),
        runs,
        output_size: reference_bytes.len(),
        hash,
        diff_info,
    }
}

fn find_first_difference(expected: &[u8], actual: &[u8], run_index: usize) -> Option<DiffInfo> {
    let len = expected.len().max(actual.len());
    (0..len)
        .find(|&i| expected.get(i) != actual.get(i))
        .map(|offset| DiffInfo {
            offset,
            expected: expected.get(offset).copied(),
            actual: actual.get(offset).copied(),
            run_index,
        })
}

/// Compute BLAKE3 hash of data.
pub fn compute_hash(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

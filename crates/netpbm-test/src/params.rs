//! Regression test parameters and operations

use crate::error::{TestError, TestResult};
use crate::regout_dir;
use netpbm_core::{MagicNumber, Pix};
use std::fs;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Write outputs and verify they decode back unchanged (default)
    #[default]
    Compare,
    /// Write outputs without verification (visual inspection)
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// This structure tracks the state of a regression test, including
/// the test name, current index, mode, and success status.
pub struct RegParams {
    /// Name of the test (e.g., "pnmio")
    pub test_name: String,
    /// Current test index (incremented before each check)
    index: usize,
    /// Test mode
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// The mode is taken from the `REGTEST_MODE` environment variable.
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn fail(&mut self, msg: String) -> bool {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
        false
    }

    /// Compare two numeric values
    ///
    /// Returns `true` if `|expected - actual| <= delta`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.fail(msg)
        } else {
            true
        }
    }

    /// Compare two images for exact equality
    ///
    /// Kind, size, maximum value and every pixel must match.
    pub fn compare_pix(&mut self, pix1: &Pix, pix2: &Pix) -> bool {
        self.index += 1;

        if !pix1.sizes_equal(pix2) || pix1.max_value() != pix2.max_value() {
            let msg = format!(
                "Failure in {}_reg: pix comparison for index {} - header mismatch: \
                 {:?} {}x{} max {} vs {:?} {}x{} max {}",
                self.test_name,
                self.index,
                pix1.kind(),
                pix1.width(),
                pix1.height(),
                pix1.max_value(),
                pix2.kind(),
                pix2.width(),
                pix2.height(),
                pix2.max_value()
            );
            return self.fail(msg);
        }

        for y in 0..pix1.height() {
            for x in 0..pix1.width() {
                let p1 = pix1.get_pixel(x, y);
                let p2 = pix2.get_pixel(x, y);
                if p1 != p2 {
                    let msg = format!(
                        "Failure in {}_reg: pix comparison for index {} - pixel mismatch at ({}, {}): {:?} vs {:?}",
                        self.test_name, self.index, x, y, p1, p2
                    );
                    return self.fail(msg);
                }
            }
        }

        true
    }

    /// Compare two byte strings
    pub fn compare_strings(&mut self, data1: &[u8], data2: &[u8]) -> bool {
        self.index += 1;

        if data1 != data2 {
            let msg = format!(
                "Failure in {}_reg: string comparison for index {}\n\
                 sizes: {} vs {}\n{:?}\n{:?}",
                self.test_name,
                self.index,
                data1.len(),
                data2.len(),
                String::from_utf8_lossy(data1),
                String::from_utf8_lossy(data2)
            );
            self.fail(msg)
        } else {
            true
        }
    }

    /// Write an image to the regout directory
    ///
    /// The file is named `<test>.<index>.<ext>` with the extension chosen
    /// by the image family. In compare mode the file is read back and
    /// must decode to an identical image.
    ///
    /// Returns the path written.
    pub fn write_pix(&mut self, pix: &Pix, magic: MagicNumber) -> TestResult<String> {
        self.index += 1;

        let dir = regout_dir();
        ensure_dir(&dir)?;
        let path = format!(
            "{}/{}.{:02}.{}",
            dir,
            self.test_name,
            self.index,
            crate::extension(magic)
        );

        netpbm_io::write_image(pix, &path, magic).map_err(|e| TestError::ImageWrite {
            path: path.clone(),
            message: e.to_string(),
        })?;

        if self.mode == RegTestMode::Compare {
            let back = netpbm_io::read_image(&path).map_err(|e| TestError::ImageLoad {
                path: path.clone(),
                message: e.to_string(),
            })?;
            if back != *pix {
                let msg = format!(
                    "Failure in {}_reg, index {}: {} does not read back unchanged",
                    self.test_name, self.index, path
                );
                self.fail(msg);
            }
        }

        Ok(path)
    }

    /// Clean up and report results
    ///
    /// Returns `true` if all checks passed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all checks have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

/// Create `dir` and its parents if missing.
fn ensure_dir(dir: &str) -> TestResult<()> {
    fs::create_dir_all(dir)?;
    Ok(())
}

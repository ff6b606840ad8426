//! Fixture runner for `cminus test`
//!
//! A fixture is a directory holding an `input.txt` plus any of the five expected listings. Each
//! expected file present is compared line by line with what the front end produces for the input;
//! missing expected files are simply not checked.
//!
//! ## TestReporter Trait
//!
//! The runner uses a `TestReporter` trait to separate reporting from
//! execution, so other output formats can be plugged in.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::artifacts::Artifacts;
use crate::config::{DEFAULT_INPUT_FILE, OutputConfig};
use cminus_syntax::lexer::ScanOptions;

use super::commands::read_source;
use super::{CliError, CliResult, ExitCode};

// ============================================================================
// Test Reporter Trait
// ============================================================================

/// Trait for reporting fixture results.
pub trait TestReporter {
    /// Called when discovery begins
    fn on_discovery_start(&mut self, _path: &Path) {}

    /// Called when collection is complete
    fn on_collection_complete(&mut self, fixture_count: usize);

    /// Called when a fixture begins
    fn on_fixture_start(&mut self, _fixture: &Fixture) {}

    /// Called when a fixture completes
    fn on_fixture_complete(&mut self, fixture: &Fixture, result: &FixtureResult);

    /// Called when all fixtures have completed
    fn on_run_complete(&mut self, summary: &TestSummary);
}

/// A discovered fixture directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    pub dir: PathBuf,
    /// Display name (the path relative to the search root)
    pub name: String,
}

/// First differing line between an expected and an actual listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub file: String,
    /// 1-based line number
    pub line: usize,
    pub expected: Option<String>,
    pub actual: Option<String>,
}

/// Result of running a single fixture
#[derive(Debug)]
pub enum FixtureResult {
    Passed(Duration),
    Failed(Duration, Vec<Mismatch>),
    /// The fixture could not be run at all
    Error(String),
}

/// Summary of a fixture run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TestSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub errors: usize,
    pub duration: Duration,
}

impl TestSummary {
    pub fn is_success(&self) -> bool {
        self.failed == 0 && self.errors == 0
    }
}

// ============================================================================
// Console reporter
// ============================================================================

/// Default console reporter
#[derive(Default)]
pub struct ConsoleReporter {
    pub verbose: bool,
}

impl ConsoleReporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl TestReporter for ConsoleReporter {
    fn on_collection_complete(&mut self, fixture_count: usize) {
        println!("\x1b[1m=================== fixture session starts ===================\x1b[0m");
        println!("collected {} fixture(s)", fixture_count);
        println!();
    }

    fn on_fixture_start(&mut self, fixture: &Fixture) {
        if self.verbose {
            eprint!("{} ... ", fixture.name);
        }
    }

    fn on_fixture_complete(&mut self, fixture: &Fixture, result: &FixtureResult) {
        let status = match result {
            FixtureResult::Passed(d) => {
                if self.verbose {
                    format!("\x1b[32mPASSED\x1b[0m ({:.0}ms)", d.as_millis())
                } else {
                    "\x1b[32m.\x1b[0m".to_string()
                }
            }
            FixtureResult::Failed(d, _) => {
                if self.verbose {
                    format!("\x1b[31mFAILED\x1b[0m ({:.0}ms)", d.as_millis())
                } else {
                    "\x1b[31mF\x1b[0m".to_string()
                }
            }
            FixtureResult::Error(_) => {
                if self.verbose {
                    "\x1b[31mERROR\x1b[0m".to_string()
                } else {
                    "\x1b[31mE\x1b[0m".to_string()
                }
            }
        };

        if self.verbose {
            eprintln!("{}", status);
        } else {
            eprint!("{}", status);
        }

        match result {
            FixtureResult::Failed(_, mismatches) => {
                eprintln!("\n\x1b[31m{}\x1b[0m", fixture.name);
                for mismatch in mismatches {
                    eprintln!("  {} line {}:", mismatch.file, mismatch.line);
                    eprintln!("    expected: {}", mismatch.expected.as_deref().unwrap_or("<end of file>"));
                    eprintln!("    actual:   {}", mismatch.actual.as_deref().unwrap_or("<end of file>"));
                }
            }
            FixtureResult::Error(message) => {
                eprintln!("\n\x1b[31m{}\x1b[0m", fixture.name);
                eprintln!("  {}", message);
            }
            FixtureResult::Passed(_) => {}
        }
    }

    fn on_run_complete(&mut self, summary: &TestSummary) {
        if !self.verbose {
            eprintln!();
        }
        eprintln!();

        let mut parts = Vec::new();
        if summary.passed > 0 {
            parts.push(format!("\x1b[32m{} passed\x1b[0m", summary.passed));
        }
        if summary.failed > 0 {
            parts.push(format!("\x1b[31m{} failed\x1b[0m", summary.failed));
        }
        if summary.errors > 0 {
            parts.push(format!("\x1b[31m{} error(s)\x1b[0m", summary.errors));
        }

        eprintln!(
            "====== {} in {:.2}s ======",
            parts.join(", "),
            summary.duration.as_secs_f64()
        );
    }
}

// ============================================================================
// Discovery and execution
// ============================================================================

/// Run every fixture under `path` with console reporting.
pub fn run_fixtures(path: &Path, verbose: bool, stop_on_fail: bool, options: &ScanOptions) -> CliResult<ExitCode> {
    let mut reporter = ConsoleReporter::new(verbose);
    let summary = run_fixtures_with(path, options, stop_on_fail, &mut reporter)?;
    Ok(if summary.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Run every fixture under `path`, reporting through `reporter`.
///
/// ## Errors
/// - No fixture directory exists under `path`.
pub fn run_fixtures_with(
    path: &Path,
    options: &ScanOptions,
    stop_on_fail: bool,
    reporter: &mut dyn TestReporter,
) -> CliResult<TestSummary> {
    let start_time = Instant::now();
    reporter.on_discovery_start(path);

    let fixtures = discover_fixtures(path);
    if fixtures.is_empty() {
        return Err(CliError::failure(format!(
            "No fixtures found in '{}'\nA fixture is a directory containing {}",
            path.display(),
            DEFAULT_INPUT_FILE
        )));
    }
    reporter.on_collection_complete(fixtures.len());

    let mut summary = TestSummary::default();
    for fixture in &fixtures {
        reporter.on_fixture_start(fixture);
        let result = run_fixture(&fixture.dir, options);
        reporter.on_fixture_complete(fixture, &result);

        summary.total += 1;
        match result {
            FixtureResult::Passed(_) => summary.passed += 1,
            FixtureResult::Failed(..) => summary.failed += 1,
            FixtureResult::Error(_) => summary.errors += 1,
        }

        if stop_on_fail && !summary.is_success() {
            break;
        }
    }

    summary.duration = start_time.elapsed();
    reporter.on_run_complete(&summary);
    Ok(summary)
}

/// Find fixture directories under `path`, sorted by path.
///
/// `path` itself counts when it holds an `input.txt`. Hidden directories and `target` are skipped.
pub fn discover_fixtures(path: &Path) -> Vec<Fixture> {
    let mut dirs = Vec::new();
    collect_fixture_dirs(path, &mut dirs);
    dirs.sort();

    dirs.into_iter()
        .map(|dir| {
            let name = match dir.strip_prefix(path) {
                Ok(relative) if !relative.as_os_str().is_empty() => relative.display().to_string(),
                _ => dir.display().to_string(),
            };
            Fixture { dir, name }
        })
        .collect()
}

fn collect_fixture_dirs(dir: &Path, out: &mut Vec<PathBuf>) {
    if !dir.is_dir() {
        return;
    }
    if dir.join(DEFAULT_INPUT_FILE).is_file() {
        out.push(dir.to_path_buf());
    }

    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let entry_path = entry.path();
        if !entry_path.is_dir() {
            continue;
        }
        let name = entry_path.file_name().and_then(|n| n.to_str()).unwrap_or("");
        if !name.starts_with('.') && name != "target" {
            collect_fixture_dirs(&entry_path, out);
        }
    }
}

/// Compile one fixture's input and compare against every expected listing present.
pub fn run_fixture(dir: &Path, options: &ScanOptions) -> FixtureResult {
    let start = Instant::now();
    let source = match read_source(&dir.join(DEFAULT_INPUT_FILE)) {
        Ok(source) => source,
        Err(e) => return FixtureResult::Error(e.message),
    };

    let artifacts = Artifacts::compile(&source, options);
    let config = OutputConfig::new().with_out_dir(dir);

    let mut checked = 0;
    let mut mismatches = Vec::new();
    for (name, actual) in artifacts.entries(&config) {
        let expected_path = config.path_for(name);
        if !expected_path.is_file() {
            continue;
        }
        let expected = match fs::read_to_string(&expected_path) {
            Ok(text) => text,
            Err(e) => return FixtureResult::Error(format!("Error reading '{}': {}", expected_path.display(), e)),
        };
        checked += 1;
        if let Some(mismatch) = first_mismatch(name, &expected, actual) {
            mismatches.push(mismatch);
        }
    }

    if checked == 0 {
        return FixtureResult::Error(format!("No expected listings in '{}'", dir.display()));
    }

    let duration = start.elapsed();
    if mismatches.is_empty() {
        FixtureResult::Passed(duration)
    } else {
        FixtureResult::Failed(duration, mismatches)
    }
}

/// Compare two listings line by line, ignoring line-ending style.
///
/// A trailing newline counts: `"a\n"` and `"a"` differ on line 2.
fn first_mismatch(file: &str, expected: &str, actual: &str) -> Option<Mismatch> {
    let expected = expected.replace("\r\n", "\n");
    let actual = actual.replace("\r\n", "\n");
    let mut expected_lines = expected.split('\n');
    let mut actual_lines = actual.split('\n');
    let mut line = 0;

    loop {
        line += 1;
        match (expected_lines.next(), actual_lines.next()) {
            (None, None) => return None,
            (e, a) if e == a => continue,
            (e, a) => {
                return Some(Mismatch {
                    file: file.to_string(),
                    line,
                    expected: e.map(str::to_string),
                    actual: a.map(str::to_string),
                });
            }
        }
    }
}

//! Workspace-wide quality checks.

use std::path::Path;
use std::process::Output;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use xshell::{Shell, cmd};

/// Crates whose library code must stay free of `unwrap`/`expect`.
const LIBRARY_CRATES: [&str; 4] = ["pack-types", "pack-layout", "pack-spec", "pack"];

type Step = fn(&Shell) -> Result<()>;

/// Checks shared by `check` and `ci`, in run order.
const STEPS: [(&str, Step); 5] = [
    ("Formatting", run_fmt_check),
    ("Clippy", run_clippy),
    ("Tests", run_tests),
    ("Documentation", run_doc_check),
    ("Safety", run_safety_scan),
];

/// Shell rooted at the workspace, wherever xtask was invoked from.
fn workspace_shell() -> Result<Shell> {
    let sh = Shell::new()?;
    let root = Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .context("xtask has no parent directory")?;
    sh.change_dir(root);
    Ok(sh)
}

fn banner(title: &str) {
    println!();
    println!("{}", title.bold());
    println!("{}", "=".repeat(title.len()).bold());
    println!();
}

/// Run all checks (non-CI mode - failures are reported but don't fail)
pub fn run(ci_mode: bool) -> Result<()> {
    let sh = workspace_shell()?;
    banner("CellForge Quality Check");

    let mut all_passed = true;
    for (name, step) in STEPS {
        println!("{}", format!("{name}...").dimmed());
        let result = step(&sh);
        match &result {
            Ok(()) => println!("  {} {name}", "✓".green()),
            Err(e) => println!("  {} {name} - {e}", "✗".red()),
        }
        all_passed &= result.is_ok();
    }
    println!();

    if all_passed {
        println!("{}", "✓ All checks passed!".green().bold());
        Ok(())
    } else if ci_mode {
        anyhow::bail!("some checks failed")
    } else {
        println!("{}", "⚠ Some checks failed. Fix before committing.".yellow());
        Ok(())
    }
}

/// Run full CI suite
pub fn run_ci() -> Result<()> {
    let sh = workspace_shell()?;
    banner("CellForge CI Suite");

    let total = STEPS.len() + 1;
    let mut failures = Vec::new();
    for (i, (name, step)) in STEPS.iter().enumerate() {
        println!("{}", format!("Step {}/{total}: {name}", i + 1).cyan());
        match step(&sh) {
            Ok(()) => println!("  {} {name} OK", "✓".green()),
            Err(e) => {
                println!("  {} {name} failed", "✗".red());
                failures.push(format!("{name}: {e}"));
            }
        }
    }

    // cargo-deny is optional locally
    println!("{}", format!("Step {total}/{total}: Dependencies").cyan());
    match run_deny(&sh) {
        Ok(()) => println!("  {} Dependencies OK", "✓".green()),
        Err(e) => println!("  {} Dependency check: {e}", "⚠".yellow()),
    }
    println!();

    if failures.is_empty() {
        println!("{}", "  ✓ CI PASSED".green().bold());
        return Ok(());
    }

    println!("{}", "  ✗ CI FAILED".red().bold());
    println!();
    println!("Failures:");
    for f in &failures {
        println!("  - {}", f.red());
    }
    anyhow::bail!("{} CI step(s) failed", failures.len())
}

/// Run the property tests in release mode
pub fn run_proptest() -> Result<()> {
    let sh = workspace_shell()?;

    println!("{}", "Running property tests...".cyan());
    cmd!(sh, "cargo test -p pack-layout --release --test proptest_layout")
        .run()
        .context("Property tests failed")?;
    println!("  {} Property tests OK", "✓".green());
    Ok(())
}

fn run_fmt_check(sh: &Shell) -> Result<()> {
    cmd!(sh, "cargo fmt --all -- --check")
        .run()
        .context("Formatting check failed")
}

fn run_clippy(sh: &Shell) -> Result<()> {
    cmd!(sh, "cargo clippy --workspace --all-targets --all-features -- -D warnings")
        .run()
        .context("Clippy check failed")
}

fn run_tests(sh: &Shell) -> Result<()> {
    cmd!(sh, "cargo test --workspace --all-features")
        .run()
        .context("Tests failed")
}

fn run_doc_check(sh: &Shell) -> Result<()> {
    cmd!(sh, "cargo doc --workspace --no-deps --all-features")
        .env("RUSTDOCFLAGS", "-D warnings")
        .run()
        .context("Documentation build failed")
}

fn run_safety_scan(sh: &Shell) -> Result<()> {
    let mut violations = Vec::new();
    for name in LIBRARY_CRATES {
        let src = Path::new("pack").join(name).join("src");
        for file in sh.read_dir(&src)? {
            if file.extension().is_some_and(|ext| ext == "rs") {
                let text = sh.read_file(&file)?;
                violations.extend(
                    scan_library_source(&text)
                        .into_iter()
                        .map(|line| format!("{}:{line}", file.display())),
                );
            }
        }
    }

    for v in &violations {
        println!("    {}", v.dimmed());
    }
    if !violations.is_empty() {
        anyhow::bail!(
            "Found {} unwrap/expect calls in library code",
            violations.len()
        );
    }

    Ok(())
}

/// Line numbers of `unwrap`/`expect` calls outside comments and test modules.
fn scan_library_source(text: &str) -> Vec<usize> {
    let mut hits = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let trimmed = line.trim_start();
        // test modules sit at the bottom of each file
        if trimmed.starts_with("#[cfg(test)]") {
            break;
        }
        if trimmed.starts_with("//") {
            continue;
        }
        if line.contains(".unwrap()") || line.contains(".expect(") {
            hits.push(i + 1);
        }
    }
    hits
}

/// Returns true if `cargo <tool> --version` exited cleanly.
///
/// Cargo answers an unknown subcommand with a failing status.
fn tool_installed(output: &Output) -> bool {
    output.status.success()
}

fn run_deny(sh: &Shell) -> Result<()> {
    let has_deny = cmd!(sh, "cargo deny --version")
        .ignore_status()
        .quiet()
        .output()
        .is_ok_and(|output| tool_installed(&output));

    if !has_deny {
        anyhow::bail!("cargo-deny not installed. Run: cargo install cargo-deny");
    }

    cmd!(sh, "cargo deny check")
        .run()
        .context("Dependency check failed")
}

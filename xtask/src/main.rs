//! Development automation tasks for the workboard workspace.
//!
//! Run with: `cargo xtask <command>`
//!
//! This is a CLI tool for developers, so `println!` and `eprintln!` are
//! used for user-facing output rather than structured logging.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitCode};
use std::{env, fs};

use anyhow::{anyhow, Context};

/// Packages checked individually during CI, in dependency order.
const PACKAGES: &[&str] = &["workboard-domain", "workboard-core", "workboard-infra", "workboard-app"];

fn main() -> ExitCode {
    let task = env::args().nth(1);

    let result = match task.as_deref() {
        Some("ci") => run_ci(),
        Some("fmt") => run_fmt(),
        Some("clippy") => run_clippy(),
        Some("check") => run_check(),
        Some("test") => run_test(),
        Some("deny") => run_deny(),
        Some("codegen") => run_codegen(),
        Some("help") | None => {
            print_help();
            Ok(())
        }
        Some(unknown) => {
            eprintln!("Unknown task: {unknown}");
            eprintln!();
            print_help();
            Err(anyhow!("Unknown task"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Task failed: {e}");
            ExitCode::FAILURE
        }
    }
}

fn print_help() {
    println!("Workboard Development Tasks");
    println!();
    println!("USAGE:");
    println!("    cargo xtask <TASK>");
    println!();
    println!("TASKS:");
    println!("    ci        Run fmt, clippy, check, test and deny in sequence");
    println!("    fmt       Check Rust code formatting");
    println!("    clippy    Run Clippy lints");
    println!("    check     Check each workspace package on its own");
    println!("    test      Run all tests");
    println!("    codegen   Generate TypeScript bindings for the domain types");
    println!("    deny      Check dependencies with cargo-deny");
    println!("    help      Show this help message");
}

/// Run all CI checks in sequence
fn run_ci() -> anyhow::Result<()> {
    println!("==> Running CI checks...\n");

    println!("==> Step 1/5: Checking Rust format...");
    run_fmt()?;

    println!("\n==> Step 2/5: Running Clippy...");
    run_clippy()?;

    println!("\n==> Step 3/5: Checking packages...");
    run_check()?;

    println!("\n==> Step 4/5: Running tests...");
    run_test()?;

    println!("\n==> Step 5/5: Checking dependencies...");
    run_deny()?;

    println!("\n✓ All CI checks passed!");
    Ok(())
}

fn cargo(args: &[&str]) -> anyhow::Result<bool> {
    let status = Command::new("cargo")
        .args(args)
        .status()
        .with_context(|| format!("Failed to run cargo {}", args.join(" ")))?;
    Ok(status.success())
}

/// Check Rust code formatting
fn run_fmt() -> anyhow::Result<()> {
    if !cargo(&["fmt", "--all", "--", "--check"])? {
        anyhow::bail!("Format check failed. Run 'cargo fmt --all' to fix.");
    }
    Ok(())
}

/// Run Clippy lints
fn run_clippy() -> anyhow::Result<()> {
    if cargo(&["clippy", "--workspace", "--all-targets", "--all-features", "--", "-D", "warnings"])? {
        Ok(())
    } else {
        Err(anyhow!("Clippy run failed. See output above."))
    }
}

/// Each package must build without features leaking in from its siblings
fn run_check() -> anyhow::Result<()> {
    for package in PACKAGES {
        println!("Checking {package}...");
        if !cargo(&["check", "-p", package, "--all-targets"])? {
            anyhow::bail!("{package} check failed");
        }
    }
    println!("✓ {} packages compile", PACKAGES.len());
    Ok(())
}

/// Run all workspace tests
fn run_test() -> anyhow::Result<()> {
    if !cargo(&["test", "--workspace", "--all-features"])? {
        anyhow::bail!("Tests failed");
    }
    Ok(())
}

/// Check dependencies with cargo-deny
fn run_deny() -> anyhow::Result<()> {
    let check_installed = Command::new("cargo").args(["deny", "--version"]).output();

    if check_installed.is_err() || !check_installed.as_ref().is_ok_and(|o| o.status.success()) {
        eprintln!("cargo-deny is not installed.");
        eprintln!("Install it with: cargo install cargo-deny");
        anyhow::bail!("cargo-deny not found");
    }

    if !cargo(&["deny", "check"])? {
        anyhow::bail!("cargo-deny found issues");
    }
    Ok(())
}

/// Generate TypeScript bindings for the domain types
fn run_codegen() -> anyhow::Result<()> {
    println!("==> Generating TypeScript types from Rust...\n");

    println!("Step 1/2: Running ts-gen tests...");
    if !cargo(&["test", "-p", "workboard-domain", "--features", "ts-gen", "--lib"])? {
        anyhow::bail!("TypeScript generation tests failed");
    }

    let bindings_dir = PathBuf::from("crates/domain/bindings");
    if !bindings_dir.exists() {
        anyhow::bail!(
            "Bindings directory not found at {}. TypeScript generation may have failed.",
            bindings_dir.display()
        );
    }

    println!("\nStep 2/2: Generating index.ts...");
    generate_index_ts(&bindings_dir)?;

    println!("\n✓ TypeScript type generation complete!");
    println!("  Generated files: {}", bindings_dir.display());
    Ok(())
}

/// Generate index.ts that exports all types
fn generate_index_ts(types_dir: &Path) -> anyhow::Result<()> {
    let index_path = types_dir.join("index.ts");
    let entries = fs::read_dir(types_dir).context("Failed to read bindings directory")?;

    let mut type_files: Vec<String> = entries
        .filter_map(Result::ok)
        .filter_map(|e| {
            let path = e.path();
            if path.extension()?.to_str()? != "ts" {
                return None;
            }
            let stem = path.file_stem()?.to_str()?;
            (stem != "index").then(|| stem.to_string())
        })
        .collect();

    type_files.sort();

    let mut content = String::from(
        "// Auto-generated types from the workboard domain crate\n\
         // Generated by ts-rs via: cargo xtask codegen\n\
         // DO NOT EDIT MANUALLY - changes will be overwritten\n\n",
    );

    for type_name in &type_files {
        let _ = writeln!(content, "export type {{ {type_name} }} from './{type_name}';");
    }

    fs::write(&index_path, content)
        .with_context(|| format!("Failed to write {}", index_path.display()))?;

    println!("  Generated index.ts with {} exports", type_files.len());
    Ok(())
}

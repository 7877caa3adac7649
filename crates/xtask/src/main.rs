use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// Crates the domain must never depend on.
const DOMAIN_FORBIDDEN: &[&str] = &[
    "dioxus",
    "dioxus-desktop",
    "reqwest",
    "gloo-net",
    "tokio",
    "web-sys",
    "tracing",
];

/// Player layers that must stay free of UI and transport code.
const PURE_LAYERS: &[&str] = &["application", "ports"];

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!("Usage: cargo xtask <command>\n\nCommands:\n  arch-check"),
    }
}

#[derive(Deserialize)]
struct Metadata {
    packages: Vec<Package>,
    workspace_root: PathBuf,
}

#[derive(Deserialize)]
struct Package {
    name: String,
    dependencies: Vec<Dependency>,
}

#[derive(Deserialize)]
struct Dependency {
    name: String,
}

fn arch_check() -> anyhow::Result<()> {
    let output = std::process::Command::new("cargo")
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .output()
        .context("running cargo metadata")?;

    if !output.status.success() {
        anyhow::bail!("cargo metadata failed")
    }

    let metadata: Metadata =
        serde_json::from_slice(&output.stdout).context("parsing cargo metadata")?;

    let mut violations = domain_dependency_violations(&metadata.packages);
    let player_src = metadata.workspace_root.join("crates/player/src");
    for layer in PURE_LAYERS {
        violations.extend(layer_import_violations(&player_src.join(layer))?);
    }

    if violations.is_empty() {
        println!("arch-check: ok");
        return Ok(());
    }

    for v in &violations {
        eprintln!("arch-check: {v}");
    }
    anyhow::bail!("{} layering violation(s)", violations.len())
}

fn domain_dependency_violations(packages: &[Package]) -> Vec<String> {
    packages
        .iter()
        .filter(|p| p.name == "roster-domain")
        .flat_map(|p| p.dependencies.iter())
        .filter(|d| DOMAIN_FORBIDDEN.contains(&d.name.as_str()))
        .map(|d| format!("roster-domain depends on `{}`", d.name))
        .collect()
}

fn layer_import_violations(dir: &Path) -> anyhow::Result<Vec<String>> {
    let forbidden = regex_lite::Regex::new(r"(?m)^\s*use\s+(dioxus|reqwest|gloo_net|web_sys)\b")
        .context("compiling import pattern")?;

    let mut violations = Vec::new();
    for file in rust_files(dir)? {
        let source = std::fs::read_to_string(&file)
            .with_context(|| format!("reading {}", file.display()))?;
        for caps in forbidden.captures_iter(&source) {
            violations.push(format!("{} imports `{}`", file.display(), &caps[1]));
        }
    }
    Ok(violations)
}

fn rust_files(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    if !dir.exists() {
        return Ok(files);
    }
    for entry in std::fs::read_dir(dir).with_context(|| format!("listing {}", dir.display()))? {
        let path = entry?.path();
        if path.is_dir() {
            files.extend(rust_files(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            files.push(path);
        }
    }
    Ok(files)
}

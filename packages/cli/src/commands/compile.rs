use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use pagecraft_compiler_html::{compile_to_html, CompileOptions as HtmlOptions};
use pagecraft_compiler_react::{compile_page, CompileOptions as ReactOptions};
use pagecraft_document::from_json;
use pagecraft_registry::Registry;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Args)]
pub struct CompileArgs {
    /// File or directory to compile (defaults to the configured src dir)
    pub path: Option<String>,

    /// Target format (react, html)
    #[arg(short, long)]
    pub target: Option<String>,

    /// Output to stdout instead of files
    #[arg(long)]
    pub stdout: bool,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<String>,
}

pub fn compile(args: CompileArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;

    let src = match &args.path {
        Some(path) => PathBuf::from(cwd).join(path),
        None => config.get_src_dir(cwd),
    };
    if !src.exists() {
        return Err(anyhow!("Source path does not exist: {:?}", src));
    }

    let target = args.target.clone().unwrap_or_else(|| config.target.clone());
    if target != "react" && target != "html" {
        return Err(anyhow!("Invalid target: {}. Use: react or html", target));
    }

    let out_dir = match &args.out_dir {
        Some(dir) => PathBuf::from(cwd).join(dir),
        None => config.get_out_dir(cwd),
    };

    println!("{}", "🔨 Compiling page documents...".bright_blue().bold());

    // Find all .page.json documents
    let page_files = find_page_files(&src);

    if page_files.is_empty() {
        println!("{}", "⚠️  No .page.json documents found".yellow());
        return Ok(());
    }

    println!("Found {} documents", page_files.len());

    // Compile each document
    let mut success_count = 0;
    let mut error_count = 0;

    for page_file in &page_files {
        match compile_file(page_file, &target, &args, &out_dir) {
            Ok(output_path) => {
                success_count += 1;
                let relative_path = page_file.strip_prefix(&src).unwrap_or(page_file);
                println!(
                    "  {} {} → {}",
                    "✓".green(),
                    relative_path.display(),
                    output_path
                );
            }
            Err(e) => {
                error_count += 1;
                let relative_path = page_file.strip_prefix(&src).unwrap_or(page_file);
                eprintln!(
                    "  {} {} - {}",
                    "✗".red(),
                    relative_path.display(),
                    e.to_string().red()
                );
            }
        }
    }

    println!();
    if error_count == 0 {
        println!(
            "{} Compiled {} documents successfully",
            "✅".green(),
            success_count
        );
        Ok(())
    } else {
        println!(
            "{} Compiled {} documents, {} errors",
            "⚠️".yellow(),
            success_count,
            error_count
        );
        Err(anyhow!("{} documents failed to compile", error_count))
    }
}

fn find_page_files(path: &Path) -> Vec<PathBuf> {
    if path.is_file() {
        return vec![path.to_path_buf()];
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(path)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if path
            .file_name()
            .and_then(|s| s.to_str())
            .map(|name| name.ends_with(".page.json"))
            .unwrap_or(false)
        {
            files.push(path.to_path_buf());
        }
    }

    files
}

fn compile_file(
    file_path: &Path,
    target: &str,
    args: &CompileArgs,
    out_dir: &Path,
) -> Result<String> {
    // Read and import the document
    let json = fs::read_to_string(file_path)?;
    let tree = from_json(&json)?;

    let registry = Registry::global();

    let (code, extension) = match target {
        "react" => (
            compile_page(&tree, registry, ReactOptions::default())?,
            "tsx",
        ),
        "html" => (
            compile_to_html(&tree, registry, HtmlOptions::default())?,
            "html",
        ),
        _ => unreachable!("target validated by caller"),
    };

    if args.stdout {
        println!("{}", code);
        return Ok("stdout".to_string());
    }

    let output_path = out_dir.join(format!("{}.{}", page_name(file_path), extension));
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&output_path, code)?;

    Ok(output_path.display().to_string())
}

/// "home.page.json" → "home"
fn page_name(path: &Path) -> String {
    let name = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("page");
    name.strip_suffix(".page.json").unwrap_or(name).to_string()
}

//! Command-line renderer for portfolio project files.
//!
//! # Responsibility
//! - Load a project file and print the markup the page would show.
//! - Drive the core crate end to end without a browser host.

use anyhow::{bail, Context, Result};
use clap::Parser;
use folio_core::{
    default_log_level, init_logging, load_projects_from_path, Page, RenderConfig, UiEvent,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "folio", version, about = "Render portfolio cards and project details")]
struct Cli {
    /// Project data file: a JSON array or an object with a `projects` array.
    projects: PathBuf,

    /// Render configuration file (JSON).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Tag to filter by; repeat for several (all must match).
    #[arg(long = "tag", value_name = "TAG")]
    tags: Vec<String>,

    /// Print the detail view of this project id instead of the grid.
    #[arg(long, value_name = "PROJECT_ID")]
    open: Option<String>,

    /// Log level for the file logger; only valid together with `--log-dir`.
    #[arg(long, requires = "log_dir")]
    log_level: Option<String>,

    /// Absolute directory for rotating log files. Logging is off without it.
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or_else(|| default_log_level());
        init_logging(level, &log_dir.to_string_lossy())
            .context("failed to initialize logging")?;
    }

    println!("{}", render(&cli)?);
    Ok(())
}

/// Builds the page for `cli` and returns the text to print.
fn render(cli: &Cli) -> Result<String> {
    let config = match cli.config.as_deref() {
        Some(path) => RenderConfig::from_path(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => RenderConfig::default(),
    };
    let projects = load_projects_from_path(&cli.projects)
        .with_context(|| format!("failed to load projects {}", cli.projects.display()))?;

    let mut page = Page::new(projects, config);
    for tag in &cli.tags {
        if !page.filter().buttons().iter().any(|button| &button.tag == tag) {
            bail!("unknown tag `{tag}`");
        }
        if !page.filter().is_active(tag) {
            page.dispatch(UiEvent::TagClicked(tag.clone()));
        }
    }

    let mut out = page.results_note();
    out.push('\n');

    let Some(id) = cli.open.as_deref() else {
        out.push_str(&page.grid_html());
        return Ok(out);
    };

    page.dispatch(UiEvent::CardClicked(id.to_string()));
    let Some(content) = page.modal().content().filter(|_| page.modal().is_open()) else {
        bail!("unknown project id `{id}`");
    };
    out.push_str(&format!("{} · {}\n", content.title, content.eyebrow));
    out.push_str(&content.tags_html);
    out.push('\n');
    out.push_str(&content.body_html);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::{render, Cli};
    use clap::Parser;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn projects_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"[
                {{"id": "atlas", "title": "Atlas", "year": 2024, "tags": ["ui", "maps"],
                  "sections": {{"overview": "A map explorer."}}}},
                {{"id": "ledger", "title": "Ledger", "tags": ["data"]}}
            ]"#
        )
        .expect("write projects");
        file
    }

    fn cli(file: &NamedTempFile, extra: &[&str]) -> Cli {
        let path = file.path().to_str().expect("utf-8 temp path");
        let args = ["folio", path].into_iter().chain(extra.iter().copied());
        Cli::try_parse_from(args).expect("arguments should parse")
    }

    #[test]
    fn renders_filtered_grid() {
        let file = projects_file();
        let out = render(&cli(&file, &["--tag", "ui"])).expect("render grid");
        assert!(out.starts_with("Showing 1 of 2 projects matching: ui.\n"));
        assert!(out.contains("data-id=\"atlas\""));
        assert!(out.contains("project-card hidden\" data-id=\"ledger\""));
    }

    #[test]
    fn renders_opened_project() {
        let file = projects_file();
        let out = render(&cli(&file, &["--open", "atlas"])).expect("render modal");
        assert!(out.contains("Atlas · 2024"));
        assert!(out.contains("<p class=\"modal-text\">A map explorer.</p>"));
    }

    #[test]
    fn rejects_unknown_tag() {
        let file = projects_file();
        let err = render(&cli(&file, &["--tag", "nope"])).expect_err("unknown tag must fail");
        assert!(err.to_string().contains("unknown tag `nope`"));
    }

    #[test]
    fn rejects_unknown_project_id() {
        let file = projects_file();
        let err = render(&cli(&file, &["--open", "missing"])).expect_err("unknown id must fail");
        assert!(err.to_string().contains("unknown project id `missing`"));
    }

    #[test]
    fn log_level_requires_log_dir() {
        let err = Cli::try_parse_from(["folio", "projects.json", "--log-level", "debug"])
            .expect_err("log level alone must be rejected");
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }
}

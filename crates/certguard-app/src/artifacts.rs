//! Writing the three certification artifacts.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use certguard_types::CertReport;
use std::io::Write;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::report::{render_markdown, serialize_report};

const DECISIONS_CSV: &str = "decisions.csv";
const DECISIONS_JSON: &str = "decisions.json";
const REPORT_MD: &str = "report.md";

/// Paths of the artifacts written by [`write_artifacts`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artifacts {
    pub csv: Utf8PathBuf,
    pub json: Utf8PathBuf,
    pub markdown: Utf8PathBuf,
}

impl Artifacts {
    pub fn paths(&self) -> [&Utf8Path; 3] {
        [&self.csv, &self.json, &self.markdown]
    }
}

/// Render every artifact, then write them into `out_dir` (created if missing).
///
/// Each artifact is staged in a temporary file inside `out_dir` and renamed into place only once
/// all three are fully written. A render or write failure leaves no partial artifact behind.
pub fn write_artifacts(out_dir: &Utf8Path, report: &CertReport) -> anyhow::Result<Artifacts> {
    let csv = certguard_render::render_decisions_csv(&report.source.columns, &report.decisions)
        .context("render decisions csv")?;
    let json = serialize_report(report)?;
    let markdown = render_markdown(report).context("render markdown report")?;

    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("create directory: {out_dir}"))?;

    let artifacts = Artifacts {
        csv: out_dir.join(DECISIONS_CSV),
        json: out_dir.join(DECISIONS_JSON),
        markdown: out_dir.join(REPORT_MD),
    };
    let staged = [
        stage(out_dir, &artifacts.csv, &csv)?,
        stage(out_dir, &artifacts.json, &json)?,
        stage(out_dir, &artifacts.markdown, markdown.as_bytes())?,
    ];
    for (tmp, path) in staged {
        tmp.persist(path)
            .map_err(|err| err.error)
            .with_context(|| format!("write {path}"))?;
        debug!(%path, "wrote artifact");
    }

    Ok(artifacts)
}

fn stage<'a>(
    dir: &Utf8Path,
    path: &'a Utf8Path,
    data: &[u8],
) -> anyhow::Result<(NamedTempFile, &'a Utf8Path)> {
    let mut tmp =
        NamedTempFile::new_in(dir).with_context(|| format!("create temp file in {dir}"))?;
    tmp.write_all(data)
        .and_then(|()| tmp.as_file().sync_all())
        .with_context(|| format!("write {path}"))?;
    debug!(%path, bytes = data.len(), "staged artifact");
    Ok((tmp, path))
}

/// Write text, creating parent directories as needed.
pub fn write_text(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;
    }
    write_bytes(path, text.as_bytes())
}

fn write_bytes(path: &Utf8Path, data: &[u8]) -> anyhow::Result<()> {
    std::fs::write(path, data).with_context(|| format!("write {path}"))?;
    debug!(%path, bytes = data.len(), "wrote artifact");
    Ok(())
}

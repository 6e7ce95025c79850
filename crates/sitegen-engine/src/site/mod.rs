//! Static site generation.
//!
//! A site is three inputs and one output:
//! - a static directory copied verbatim,
//! - a content directory of markdown pages,
//! - an HTML template with `{{ Title }}` and `{{ Content }}` placeholders,
//! - the output directory, rebuilt from scratch on every run.

pub mod io;
pub mod page;

use std::path::PathBuf;

use thiserror::Error;

use crate::parsing::ConversionError;

pub use io::copy_dir_recursive;
pub use page::{extract_title, fill_template, generate_page, generate_pages_recursive};

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(
        "No h1 title found{}",
        .0.as_ref().map(|p| format!(" in {}", p.display())).unwrap_or_default()
    )]
    MissingTitle(Option<PathBuf>),
    #[error("Failed to convert {path}: {source}")]
    Conversion {
        path: PathBuf,
        #[source]
        source: ConversionError,
    },
    #[error("Path is not inside the content directory: {0}")]
    OutsideContentDir(PathBuf),
}

/// Where a site's inputs live and where its output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteLayout {
    pub static_dir: PathBuf,
    pub content_dir: PathBuf,
    pub template_path: PathBuf,
    pub output_dir: PathBuf,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub pages: Vec<PathBuf>,
    pub static_files: usize,
}

/// Rebuild the whole site.
///
/// The output directory is deleted first, so files from earlier builds
/// never survive. A missing static directory is not an error.
pub fn build_site(layout: &SiteLayout) -> Result<BuildReport, SiteError> {
    log::info!("Deleting {} directory...", layout.output_dir.display());
    io::remove_dir_if_exists(&layout.output_dir)?;

    let static_files = if layout.static_dir.is_dir() {
        log::info!(
            "Copying static files from {} to {}...",
            layout.static_dir.display(),
            layout.output_dir.display()
        );
        copy_dir_recursive(&layout.static_dir, &layout.output_dir)?
    } else {
        log::warn!(
            "Static directory {} not found, skipping",
            layout.static_dir.display()
        );
        io::create_dir(&layout.output_dir)?;
        0
    };

    log::info!("Generating content...");
    let pages = generate_pages_recursive(
        &layout.content_dir,
        &layout.template_path,
        &layout.output_dir,
    )?;

    Ok(BuildReport {
        pages,
        static_files,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{create_test_dir, create_test_file};
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn layout(dir: &TempDir) -> SiteLayout {
        SiteLayout {
            static_dir: dir.path().join("static"),
            content_dir: dir.path().join("content"),
            template_path: dir.path().join("template.html"),
            output_dir: dir.path().join("public"),
        }
    }

    fn scaffold(dir: &TempDir) {
        create_test_file(dir, "static/index.css", "body {}");
        create_test_file(dir, "static/images/logo.png", "png");
        create_test_file(dir, "content/index.md", "# Home\n\nWelcome *in*");
        create_test_file(dir, "content/blog/first.md", "# First\n\n> quoted");
        create_test_file(
            dir,
            "template.html",
            "<title>{{ Title }}</title><main>{{ Content }}</main>",
        );
    }

    #[test]
    fn test_build_site() {
        let dir = create_test_dir();
        scaffold(&dir);
        let layout = layout(&dir);

        let report = build_site(&layout).unwrap();

        assert_eq!(report.static_files, 2);
        assert_eq!(report.pages.len(), 2);
        assert!(layout.output_dir.join("index.css").is_file());
        assert!(layout.output_dir.join("images/logo.png").is_file());
        assert_eq!(
            fs::read_to_string(layout.output_dir.join("index.html")).unwrap(),
            "<title>Home</title><main><div><h1>Home</h1><p>Welcome <i>in</i></p></div></main>"
        );
        assert_eq!(
            fs::read_to_string(layout.output_dir.join("blog/first/index.html")).unwrap(),
            "<title>First</title><main><div><h1>First</h1><blockquote>quoted</blockquote></div></main>"
        );
    }

    #[test]
    fn test_build_site_removes_stale_output() {
        let dir = create_test_dir();
        scaffold(&dir);
        let stale = create_test_file(&dir, "public/old/index.html", "stale");

        build_site(&layout(&dir)).unwrap();

        assert!(!stale.exists());
    }

    #[test]
    fn test_build_site_without_static_dir() {
        let dir = create_test_dir();
        scaffold(&dir);
        fs::remove_dir_all(dir.path().join("static")).unwrap();

        let report = build_site(&layout(&dir)).unwrap();

        assert_eq!(report.static_files, 0);
        assert_eq!(report.pages.len(), 2);
    }

    #[test]
    fn test_build_site_reports_failing_page() {
        let dir = create_test_dir();
        scaffold(&dir);
        let bad = create_test_file(&dir, "content/bad.md", "# Bad\n\n[](empty-link-text)");

        let err = build_site(&layout(&dir)).unwrap_err();

        assert!(matches!(err, SiteError::Conversion { ref path, .. } if *path == bad));
        assert!(err.to_string().contains("bad.md"));
    }

    #[test]
    fn test_missing_title_message() {
        assert_eq!(SiteError::MissingTitle(None).to_string(), "No h1 title found");
        assert_eq!(
            SiteError::MissingTitle(Some(PathBuf::from("content/a.md"))).to_string(),
            "No h1 title found in content/a.md"
        );
    }
}

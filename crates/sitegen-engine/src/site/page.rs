use std::path::{Path, PathBuf};

use relative_path::{RelativePath, RelativePathBuf};

use super::{
    SiteError,
    io::{read_file, scan_markdown_files, write_file},
};
use crate::render;

pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// Returns the text of the first `# ` line, with the leading `#` and spaces
/// stripped.
///
/// # Errors
/// [`SiteError::MissingTitle`] with no path if no line starts with `# `.
pub fn extract_title(markdown: &str) -> Result<String, SiteError> {
    markdown
        .split('\n')
        .find(|line| line.starts_with("# "))
        .map(|line| line.trim_start_matches(['#', ' ']).trim_end().to_string())
        .ok_or(SiteError::MissingTitle(None))
}

/// Substitutes the title, then the content, into `template`.
///
/// Plain substring replacement: a title that itself contains the content
/// placeholder will have it replaced too.
pub fn fill_template(template: &str, title: &str, content: &str) -> String {
    template
        .replace(TITLE_PLACEHOLDER, title)
        .replace(CONTENT_PLACEHOLDER, content)
}

/// Renders one markdown file through the template and writes it to `dest_path`.
pub fn generate_page(
    markdown_path: &Path,
    template_path: &Path,
    dest_path: &Path,
) -> Result<(), SiteError> {
    log::info!(
        "Generating page from {} to {} using {}",
        markdown_path.display(),
        dest_path.display(),
        template_path.display()
    );

    let markdown = read_file(markdown_path)?;
    let template = read_file(template_path)?;

    let content = render(&markdown).map_err(|source| SiteError::Conversion {
        path: markdown_path.to_path_buf(),
        source,
    })?;
    let title = extract_title(&markdown)
        .map_err(|_| SiteError::MissingTitle(Some(markdown_path.to_path_buf())))?;

    write_file(dest_path, &fill_template(&template, &title, &content))
}

/// Output location of a page, relative to the output directory.
///
/// `index.md` maps to `index.html` in the same directory; any other
/// `name.md` gets its own directory: `name/index.html`.
pub fn page_output_path(source: &RelativePath) -> RelativePathBuf {
    let dir = source
        .parent()
        .map(RelativePath::to_relative_path_buf)
        .unwrap_or_else(RelativePathBuf::new);
    match source.file_stem() {
        Some("index") | None => dir.join("index.html"),
        Some(stem) => dir.join(stem).join("index.html"),
    }
}

/// Generates a page for every markdown file under `content_dir`.
///
/// Returns the written page paths in source order.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template_path: &Path,
    output_dir: &Path,
) -> Result<Vec<PathBuf>, SiteError> {
    let mut written = Vec::new();
    for source in scan_markdown_files(content_dir)? {
        let relative = source
            .strip_prefix(content_dir)
            .ok()
            .and_then(|p| RelativePathBuf::from_path(p).ok())
            .ok_or_else(|| SiteError::OutsideContentDir(source.clone()))?;

        let dest = page_output_path(&relative).to_path(output_dir);
        generate_page(&source, template_path, &dest)?;
        written.push(dest);
    }
    Ok(written)
}

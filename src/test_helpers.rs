//! Shared test utilities for the folio test suite.
//!
//! ```rust,ignore
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let content = content::load(tmp.path()).unwrap();
//! assert_eq!(project_titles(&content)[0], "Event Hub");
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::content::Content;

/// Copy `fixtures/content/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

pub fn project_titles(content: &Content) -> Vec<&str> {
    content.projects.iter().map(|p| p.title.as_str()).collect()
}

/// Position of `needle` in `html`. Panics with context on miss.
pub fn position_of(html: &str, needle: &str) -> usize {
    html.find(needle)
        .unwrap_or_else(|| panic!("'{needle}' not found in generated HTML"))
}

/// Assert the needles appear in `html` in the given order.
pub fn assert_in_order(html: &str, needles: &[&str]) {
    let positions: Vec<usize> = needles.iter().map(|n| position_of(html, n)).collect();
    for (pair, names) in positions.windows(2).zip(needles.windows(2)) {
        assert!(
            pair[0] < pair[1],
            "expected '{}' before '{}' in generated HTML",
            names[0],
            names[1]
        );
    }
}

//! Reads a directory of HTML pages into a [`RawCorpus`].
//!
//! Only files directly inside the directory whose names end in `.html` are
//! pages. Links are the `href` values of `<a>` tags, taken verbatim; they are
//! not resolved against the page, so only links naming another file of the
//! directory survive [`LinkGraph::build`](crate::LinkGraph::build).

use crate::{graph::RawCorpus, Error, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::{collections::BTreeSet, path::Path};
use tracing::{debug, instrument};
use walkdir::WalkDir;

lazy_static! {
    static ref HREF: Regex =
        Regex::new(r#"<a\s+(?:[^>]*?)href="([^"]*)""#).expect("Invalid regex");
}

pub fn extract_links(html: &str) -> BTreeSet<String> {
    HREF.captures_iter(html)
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

#[instrument(fields(dir = %dir.as_ref().display()), skip(dir))]
pub fn crawl(dir: impl AsRef<Path>) -> Result<RawCorpus> {
    let dir = dir.as_ref();
    let mut pages = RawCorpus::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            continue;
        };
        if !name.ends_with(".html") {
            continue;
        }
        let contents = std::fs::read_to_string(entry.path()).map_err(|source| Error::Io {
            path: entry.path().to_path_buf(),
            source,
        })?;
        let mut links = extract_links(&contents);
        links.remove(name);
        debug!(page = name, links = links.len(), "read page");
        pages.insert(name.to_string(), links);
    }
    Ok(pages)
}

//! Where icon SVGs come from.

use std::collections::HashMap;
use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::debug;

use crate::errors::FetchError;

/// Raw SVG folder of the Material Design Icons repository.
pub const MDI_BASE_URL: &str =
    "https://raw.githubusercontent.com/Templarian/MaterialDesign/master/svg/";

const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Supplies the SVG document for an icon id.
pub trait IconSource {
    fn fetch_svg(&self, id: &str) -> Result<String, FetchError>;
}

/// Reads `<root>/<id>.svg`, as laid out in a checkout of the MDI `svg/` folder.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl IconSource for DirectorySource {
    fn fetch_svg(&self, id: &str) -> Result<String, FetchError> {
        if !is_plain_id(id) {
            return Err(FetchError::NotFound(id.to_string()));
        }
        let path = self.root.join(format!("{}.svg", id));
        let svg = std::fs::read_to_string(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => FetchError::NotFound(id.to_string()),
            _ => FetchError::Io {
                id: id.to_string(),
                reason: e.to_string(),
            },
        })?;
        check_svg(id, svg)
    }
}

/// Downloads `<base_url><id>.svg`. Defaults to [`MDI_BASE_URL`].
#[derive(Clone)]
pub struct HttpSource {
    base_url: String,
    agent: ureq::Agent,
}

impl HttpSource {
    pub fn new() -> Self {
        Self::with_base_url(MDI_BASE_URL)
    }

    /// `base_url` is used as a prefix verbatim, so it should end in `/`.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(HTTP_TIMEOUT).build();
        Self {
            base_url: base_url.into(),
            agent,
        }
    }

    pub fn url_for(&self, id: &str) -> String {
        format!("{}{}.svg", self.base_url, id)
    }
}

impl Default for HttpSource {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for HttpSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpSource")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl IconSource for HttpSource {
    fn fetch_svg(&self, id: &str) -> Result<String, FetchError> {
        if !is_plain_id(id) {
            return Err(FetchError::NotFound(id.to_string()));
        }
        let url = self.url_for(id);
        debug!(id, %url, "downloading icon");

        let response = match self.agent.get(&url).call() {
            Ok(response) => response,
            Err(ureq::Error::Status(404, _)) => return Err(FetchError::NotFound(id.to_string())),
            Err(err) => {
                return Err(FetchError::Http {
                    id: id.to_string(),
                    reason: err.to_string(),
                })
            }
        };
        let svg = response.into_string().map_err(|e| FetchError::Http {
            id: id.to_string(),
            reason: e.to_string(),
        })?;
        check_svg(id, svg)
    }
}

/// Icons held in memory, keyed by id.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    icons: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_icon(mut self, id: impl Into<String>, svg: impl Into<String>) -> Self {
        self.insert(id, svg);
        self
    }

    pub fn insert(&mut self, id: impl Into<String>, svg: impl Into<String>) {
        self.icons.insert(id.into(), svg.into());
    }
}

impl IconSource for MemorySource {
    fn fetch_svg(&self, id: &str) -> Result<String, FetchError> {
        let svg = self
            .icons
            .get(id)
            .cloned()
            .ok_or_else(|| FetchError::NotFound(id.to_string()))?;
        check_svg(id, svg)
    }
}

/// Ids are plain file stems; anything path-like cannot name an icon.
fn is_plain_id(id: &str) -> bool {
    !(id.is_empty() || id.contains(['/', '\\', '?', '#']) || id.starts_with('.'))
}

fn check_svg(id: &str, svg: String) -> Result<String, FetchError> {
    if svg.contains("<svg") {
        Ok(svg)
    } else {
        Err(FetchError::NotSvg(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M0 0h24v24H0z"/></svg>"#;

    #[test]
    fn test_memory_source() {
        let source = MemorySource::new()
            .with_icon("usb", SVG)
            .with_icon("broken", "not an icon");
        assert_eq!(source.fetch_svg("usb").unwrap(), SVG);
        assert_eq!(
            source.fetch_svg("broken"),
            Err(FetchError::NotSvg("broken".to_string()))
        );
        assert_eq!(
            source.fetch_svg("wifi"),
            Err(FetchError::NotFound("wifi".to_string()))
        );
    }

    #[test]
    fn test_directory_source_rejects_path_ids() {
        let source = DirectorySource::new(std::env::temp_dir());
        for id in ["", "../etc/passwd", ".hidden", "a/b"] {
            assert!(matches!(source.fetch_svg(id), Err(FetchError::NotFound(_))), "{}", id);
        }
    }

    #[test]
    fn test_http_source_urls() {
        let source = HttpSource::new();
        assert_eq!(
            source.url_for("usb-c-port"),
            "https://raw.githubusercontent.com/Templarian/MaterialDesign/master/svg/usb-c-port.svg"
        );
        let mirror = HttpSource::with_base_url("http://localhost:8080/icons/");
        assert_eq!(mirror.url_for("wifi"), "http://localhost:8080/icons/wifi.svg");
    }

    #[test]
    fn test_http_source_rejects_path_ids_offline() {
        // Unroutable base: a request would fail with Http, not NotFound.
        let source = HttpSource::with_base_url("http://0.0.0.0:9/");
        for id in ["", "../README", ".hidden", "a/b", "usb?raw=1"] {
            assert_eq!(
                source.fetch_svg(id),
                Err(FetchError::NotFound(id.to_string())),
                "{}",
                id
            );
        }
    }

    #[test]
    fn test_directory_source_missing_root() {
        let source = DirectorySource::new("/nonexistent/icon-catalog-test");
        assert_eq!(
            source.fetch_svg("usb"),
            Err(FetchError::NotFound("usb".to_string()))
        );
    }
}

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::domain::entities::query::DEFAULT_PAGE_SIZE;
use crate::infra::import::json::EmbeddedSource;
use crate::infra::import::open_source;
use crate::usecase::ports::source::RecordSource;

pub const DATA_PATH_ENV: &str = "PEOPLE_TABLE_DATA";
const DATA_FILE_CANDIDATES: [&str; 3] = ["data.json", "data.csv", "data.xlsx"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// `None` uses the dataset bundled into the binary.
    pub data_path: Option<PathBuf>,
    pub default_page_size: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: None,
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl AppConfig {
    /// Environment override first, then a dataset in the user data dir, then the bundled one.
    pub fn resolve() -> Self {
        let env_path = std::env::var_os(DATA_PATH_ENV).map(PathBuf::from);
        let data_dir = project_dirs().ok().map(|dirs| dirs.data_local_dir().to_path_buf());
        Self::resolve_from(env_path, data_dir.as_deref())
    }

    pub fn resolve_from(env_path: Option<PathBuf>, data_dir: Option<&Path>) -> Self {
        let data_path = env_path
            .filter(|path| !path.as_os_str().is_empty())
            .or_else(|| data_dir.and_then(find_user_dataset));

        Self {
            data_path,
            ..Self::default()
        }
    }

    pub fn open_source(&self) -> Result<Arc<dyn RecordSource>> {
        match &self.data_path {
            Some(path) => open_source(path),
            None => Ok(Arc::new(EmbeddedSource)),
        }
    }
}

fn find_user_dataset(data_dir: &Path) -> Option<PathBuf> {
    DATA_FILE_CANDIDATES
        .iter()
        .map(|name| data_dir.join(name))
        .find(|path| path.is_file())
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "hellhbbd", "people-table")
        .ok_or_else(|| anyhow!("unable to resolve data directory"))
}

pub fn ensure_webview_data_dir(base_data_dir: &Path) -> Result<PathBuf> {
    let webview_data_dir = base_data_dir.join("webview2");
    std::fs::create_dir_all(&webview_data_dir).with_context(|| {
        format!(
            "failed to create webview dir: {}",
            webview_data_dir.display()
        )
    })?;
    Ok(webview_data_dir)
}

pub fn default_webview_data_dir() -> Result<PathBuf> {
    ensure_webview_data_dir(project_dirs()?.data_local_dir())
}

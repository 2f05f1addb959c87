use crate::classifier::{EmotionClassifier, RandomClassifier};
use std::path::{Path, PathBuf};
use std::sync::Arc;

const UPLOADS_DIR: &str = "uploads";

async fn init_workspace(workspace: &Path) -> std::io::Result<()> {
    tokio::fs::create_dir_all(workspace.join(UPLOADS_DIR)).await?;
    Ok(())
}

#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<dyn EmotionClassifier>,
    pub uploads_dir: PathBuf,
}

impl AppState {
    pub async fn new(workspace: &Path) -> anyhow::Result<Self> {
        init_workspace(workspace).await?;

        Ok(Self {
            classifier: Arc::new(RandomClassifier),
            uploads_dir: workspace.join(UPLOADS_DIR),
        })
    }

    pub fn uploads_dir(&self) -> &Path {
        self.uploads_dir.as_path()
    }
}

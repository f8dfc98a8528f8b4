use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};

use crate::model::store::TaskState;
use crate::repository::traits::{LoadStatus, StateRepository};

const DEFAULT_DIR_NAME: &str = ".ttask";
const DATA_FILE_NAME: &str = "data.json";

/// Default data directory (~/.ttask).
pub fn default_data_dir() -> Result<PathBuf> {
    let home_dir =
        dirs::home_dir().ok_or_else(|| anyhow!("Could not determine home directory"))?;
    Ok(home_dir.join(DEFAULT_DIR_NAME))
}

#[derive(Clone)]
pub struct FileStateRepository {
    file_path: PathBuf,
}

impl FileStateRepository {
    pub fn new(base_dir: &Path) -> Result<Self> {
        fs::create_dir_all(base_dir)
            .with_context(|| format!("creating data directory {}", base_dir.display()))?;
        Ok(FileStateRepository { file_path: base_dir.join(DATA_FILE_NAME) })
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }
}

impl StateRepository for FileStateRepository {
    fn load(&self) -> Result<(TaskState, LoadStatus)> {
        let file = match File::open(&self.file_path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Ok((
                    TaskState::default(),
                    LoadStatus::FreshStart(format!(
                        "\"{}\" doesn't exist. Starting fresh.",
                        self.file_path.display()
                    )),
                ));
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("opening {}", self.file_path.display()));
            }
        };
        match serde_json::from_reader(BufReader::new(file)) {
            Ok(state) => Ok((state, LoadStatus::Loaded)),
            Err(e) => Ok((
                TaskState::default(),
                LoadStatus::FreshStart(format!("Error parsing JSON: {}. Starting fresh.", e)),
            )),
        }
    }

    fn save(&self, state: &TaskState) -> Result<()> {
        let file = File::create(&self.file_path)
            .with_context(|| format!("writing {}", self.file_path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, state)?;
        writer.flush()?;
        Ok(())
    }
}

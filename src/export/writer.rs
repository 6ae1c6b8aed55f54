use crate::error::ForcedelError;
use crate::models::{Artifact, ArtifactKind, ScriptVariant};
use std::fs;
use std::path::{Path, PathBuf};

pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Writes generated artifacts to disk under their fixed file names.
#[derive(Debug, Clone)]
pub struct ArtifactWriter {
    out_dir: PathBuf,
    overwrite: bool,
    create_dirs: bool,
}

impl ArtifactWriter {
    pub fn new<P: Into<PathBuf>>(out_dir: P) -> Self {
        Self {
            out_dir: out_dir.into(),
            overwrite: false,
            create_dirs: true,
        }
    }

    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn create_dirs(mut self, create_dirs: bool) -> Self {
        self.create_dirs = create_dirs;
        self
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    pub fn target_path(&self, artifact: &Artifact) -> PathBuf {
        self.out_dir.join(artifact.file_name)
    }

    pub fn write(&self, artifact: &Artifact) -> Result<PathBuf, ForcedelError> {
        if self.create_dirs {
            fs::create_dir_all(&self.out_dir)?;
        }

        let path = self.target_path(artifact);
        self.ensure_writable(&path)?;

        fs::write(&path, Self::encode(artifact))?;
        log::info!("Wrote {} ({} bytes)", path.display(), artifact.size_bytes());

        Ok(path)
    }

    /// Checks every target before writing any, so an existing file leaves the
    /// output directory untouched.
    pub fn write_all(&self, artifacts: &[Artifact]) -> Result<Vec<PathBuf>, ForcedelError> {
        for artifact in artifacts {
            self.ensure_writable(&self.target_path(artifact))?;
        }

        artifacts.iter().map(|artifact| self.write(artifact)).collect()
    }

    fn ensure_writable(&self, path: &Path) -> Result<(), ForcedelError> {
        if !self.overwrite && path.exists() {
            return Err(ForcedelError::ArtifactExists {
                path: path.display().to_string(),
            });
        }
        Ok(())
    }

    /// Windows PowerShell 5.1 reads BOM-less scripts in the ANSI code page.
    pub fn encode(artifact: &Artifact) -> Vec<u8> {
        match artifact.kind {
            ArtifactKind::Script(ScriptVariant::PowerShell) => {
                let mut bytes = Vec::with_capacity(UTF8_BOM.len() + artifact.content.len());
                bytes.extend_from_slice(UTF8_BOM);
                bytes.extend_from_slice(artifact.content.as_bytes());
                bytes
            }
            _ => artifact.content.as_bytes().to_vec(),
        }
    }
}

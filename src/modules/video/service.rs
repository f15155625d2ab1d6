use super::error::RenderError;
use super::inspector;
use crate::common::fs::find_first_file;
use crate::state::AppState;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use uuid::Uuid;

/// Container format manim is asked to produce.
const VIDEO_EXT: &str = "mp4";

/// A successfully rendered video at its canonical location.
#[derive(Debug)]
pub struct RenderedArtifact {
    pub id: Uuid,
    pub path: PathBuf,
}

pub struct RenderService;

impl RenderService {
    /// Canonical on-disk location for a job's artifact.
    pub fn artifact_path(videos_root: &Path, id: Uuid) -> PathBuf {
        videos_root
            .join(id.to_string())
            .join(format!("{id}.{VIDEO_EXT}"))
    }

    /// Render `source` into a fresh job directory and return the artifact.
    ///
    /// Every failure removes the job directory again; the staged source
    /// file is deleted on all paths.
    pub async fn render(state: AppState, source: String) -> Result<RenderedArtifact, RenderError> {
        let id = Uuid::new_v4();

        let videos_root = &state.config.videos_dir;
        std::fs::create_dir_all(videos_root)?;
        let job_dir = videos_root.join(id.to_string());
        // Fails with AlreadyExists only if a job id is ever reused.
        std::fs::create_dir(&job_dir)?;

        let result = Self::render_into(&state, &source, &job_dir, id).await;

        if result.is_err() {
            if let Err(e) = std::fs::remove_dir_all(&job_dir) {
                warn!(job = %id, "Failed to remove job directory: {e}");
            }
        }

        result
    }

    async fn render_into(
        state: &AppState,
        source: &str,
        job_dir: &Path,
        id: Uuid,
    ) -> Result<RenderedArtifact, RenderError> {
        // Reject before staging anything or touching the renderer.
        let scene = inspector::find_entry_point(source).ok_or(RenderError::EntryPointMissing)?;

        info!(job = %id, scene, "Starting render");

        // Staged outside the job directory. The handle owns the file and
        // deletes it on drop, whichever way this function exits.
        let mut staging = tempfile::Builder::new().suffix(".py").tempfile()?;
        staging.write_all(source.as_bytes())?;
        staging.flush()?;

        let _permit = state
            .render_slots
            .acquire()
            .await
            .expect("render semaphore closed");

        state.renderer.render(staging.path(), scene, job_dir).await?;

        // Manim's output layout under the media dir is version-dependent;
        // take the first video in deterministic traversal order.
        let produced = find_first_file(job_dir, |path| {
            path.extension().and_then(|ext| ext.to_str()) == Some(VIDEO_EXT)
        })
        .ok_or_else(|| RenderError::ArtifactMissing(job_dir.to_path_buf()))?;

        let final_path = job_dir.join(format!("{id}.{VIDEO_EXT}"));
        std::fs::rename(&produced, &final_path)?;

        info!(job = %id, path = %final_path.display(), "Render finished");

        Ok(RenderedArtifact {
            id,
            path: final_path,
        })
    }
}

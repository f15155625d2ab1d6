use super::error::RenderError;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::debug;

/// Runs `manim` as a child process to render one scene at a time.
#[derive(Debug, Clone)]
pub struct ManimRenderer {
    program: PathBuf,
    timeout: Duration,
}

impl ManimRenderer {
    pub fn new(program: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            timeout,
        }
    }

    /// Render `scene` from the staged `source` file into `media_root`.
    ///
    /// Exit code 0 means manim wrote a video somewhere under `media_root`;
    /// the caller is responsible for locating it. A non-zero exit surfaces
    /// the captured stderr in full — it is the primary debugging signal for
    /// broken generated code. Exceeding the wall-clock budget kills the
    /// child and reports [`RenderError::Timeout`].
    pub async fn render(
        &self,
        source: &Path,
        scene: &str,
        media_root: &Path,
    ) -> Result<(), RenderError> {
        let mut cmd = Command::new(&self.program);
        cmd.arg(source)
            .arg(scene)
            .arg("--media_dir")
            .arg(media_root)
            .arg("--quality")
            .arg("m")
            .arg("--format")
            .arg("mp4")
            // every render is independent of previous ones
            .arg("--disable_caching")
            .env("PYTHONIOENCODING", "utf-8")
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        debug!(program = %self.program.display(), scene, "spawning manim");

        let child = cmd.spawn()?;

        let output = match tokio::time::timeout(self.timeout, child.wait_with_output()).await {
            Ok(result) => result?,
            // The wait future is dropped here; kill_on_drop reaps the child.
            Err(_) => return Err(RenderError::Timeout(self.timeout)),
        };

        if !output.status.success() {
            return Err(RenderError::RendererFailed {
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
#[cfg(unix)]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::TempDir;

    /// Write an executable stub standing in for the manim binary.
    fn stub_renderer(dir: &TempDir, script: &str) -> PathBuf {
        let path = dir.path().join("manim-stub.sh");
        fs::write(&path, format!("#!/bin/sh\n{script}\n")).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    fn staged_source(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("scene.py");
        fs::write(&path, "class Demo(Scene): pass\n").unwrap();
        path
    }

    #[tokio::test]
    async fn clean_exit_is_ok() {
        let dir = TempDir::new().unwrap();
        let renderer = ManimRenderer::new(stub_renderer(&dir, "exit 0"), Duration::from_secs(5));

        let result = renderer
            .render(&staged_source(&dir), "Demo", dir.path())
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn nonzero_exit_carries_stderr() {
        let dir = TempDir::new().unwrap();
        let renderer = ManimRenderer::new(
            stub_renderer(&dir, "echo 'NameError: Circle2 is not defined' >&2\nexit 1"),
            Duration::from_secs(5),
        );

        let err = renderer
            .render(&staged_source(&dir), "Demo", dir.path())
            .await
            .unwrap_err();
        match err {
            RenderError::RendererFailed { stderr } => {
                assert!(stderr.contains("NameError: Circle2 is not defined"));
            }
            other => panic!("expected RendererFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn slow_renderer_times_out() {
        let dir = TempDir::new().unwrap();
        let renderer =
            ManimRenderer::new(stub_renderer(&dir, "sleep 10"), Duration::from_millis(200));

        let err = renderer
            .render(&staged_source(&dir), "Demo", dir.path())
            .await
            .unwrap_err();
        assert!(matches!(err, RenderError::Timeout(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn missing_binary_is_io_error() {
        let dir = TempDir::new().unwrap();
        let renderer = ManimRenderer::new("/nonexistent/manim-bin", Duration::from_secs(5));

        let err = renderer
            .render(&staged_source(&dir), "Demo", dir.path())
            .await
            .unwrap_err();
        assert!(matches!(err, RenderError::Io(_)), "got {err:?}");
    }
}

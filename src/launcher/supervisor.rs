use std::{process::ExitStatus, time::Duration};

use tokio::process::{Child, Command};

use crate::{error::AppError, launcher::plan::ProcessSpec};

const WATCH_INTERVAL: Duration = Duration::from_secs(1);
const TERMINATE_TIMEOUT: Duration = Duration::from_secs(5);

/// A running child and the name it was planned under.
pub struct ManagedChild {
    pub name: String,
    process: Child,
}

impl ManagedChild {
    /// Exit status when the child has already exited.
    pub fn try_exit(&mut self) -> Result<Option<ExitStatus>, AppError> {
        Ok(self.process.try_wait()?)
    }

    /// Asks the child to stop, force-killing it after the timeout.
    ///
    /// A child that already exited is left alone.
    pub async fn terminate(&mut self, timeout: Duration) -> Result<(), AppError> {
        if self.process.try_wait()?.is_some() {
            return Ok(());
        }

        request_stop(&mut self.process)?;

        match tokio::time::timeout(timeout, self.process.wait()).await {
            Ok(status) => {
                tracing::info!("{} stopped ({})", self.name, status?);
            }
            Err(_) => {
                tracing::warn!(
                    "{} did not stop within {}s, killing it",
                    self.name,
                    timeout.as_secs()
                );
                self.process.kill().await?;
            }
        }

        Ok(())
    }
}

#[cfg(unix)]
fn request_stop(process: &mut Child) -> Result<(), AppError> {
    use nix::{
        sys::signal::{kill, Signal},
        unistd::Pid,
    };

    let Some(pid) = process.id() else {
        return Ok(());
    };

    kill(Pid::from_raw(pid as i32), Signal::SIGTERM).map_err(std::io::Error::from)?;

    Ok(())
}

#[cfg(not(unix))]
fn request_stop(process: &mut Child) -> Result<(), AppError> {
    Ok(process.start_kill()?)
}

/// Starts a child process with the parent's environment plus the spec's variables.
///
/// Standard output and error are inherited so that every process logs to the launcher's
/// terminal.
pub fn spawn(spec: &ProcessSpec) -> Result<ManagedChild, AppError> {
    tracing::info!("Starting {}...", spec.name);

    let process = Command::new(&spec.program)
        .args(&spec.args)
        .envs(spec.env.iter().cloned())
        .spawn()?;

    Ok(ManagedChild {
        name: spec.name.clone(),
        process,
    })
}

/// Drops every child that has exited from the watch list, logging its status.
pub fn reap(children: &mut Vec<ManagedChild>) {
    children.retain_mut(|child| match child.try_exit() {
        Ok(Some(status)) => {
            tracing::warn!("{} exited unexpectedly ({})", child.name, status);
            false
        }
        Ok(None) => true,
        Err(e) => {
            tracing::error!("Failed to poll {}: {}", child.name, e);
            true
        }
    });
}

async fn terminate_all(children: &mut Vec<ManagedChild>) {
    tracing::info!("Shutting down every system...");

    for child in children.iter_mut() {
        if let Err(e) = child.terminate(TERMINATE_TIMEOUT).await {
            tracing::error!("Failed to stop {}: {}", child.name, e);
        }
    }

    children.clear();
}

/// Completes on Ctrl+C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// Starts every planned process in order and watches them.
///
/// Returns once every child has exited, or after stopping them all on a shutdown signal.
pub async fn supervise(specs: Vec<ProcessSpec>, dashboard_address: &str) -> Result<(), AppError> {
    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    let mut children = Vec::with_capacity(specs.len());

    for spec in &specs {
        match spawn(spec) {
            Ok(child) => children.push(child),
            Err(e) => tracing::error!("Failed to start {}: {}", spec.name, e),
        }

        if spec.delay_after.is_zero() {
            continue;
        }

        tokio::select! {
            _ = &mut shutdown => {
                terminate_all(&mut children).await;
                return Ok(());
            }
            _ = tokio::time::sleep(spec.delay_after) => {}
        }
    }

    tracing::info!(
        "All systems running. Dashboard: http://{} - press Ctrl+C to stop everything.",
        dashboard_address
    );

    let mut interval = tokio::time::interval(WATCH_INTERVAL);

    loop {
        tokio::select! {
            _ = &mut shutdown => {
                terminate_all(&mut children).await;
                return Ok(());
            }
            _ = interval.tick() => {
                reap(&mut children);

                if children.is_empty() {
                    tracing::info!("Every system has stopped");
                    return Ok(());
                }
            }
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn shell(name: &str, script: &str) -> ProcessSpec {
        ProcessSpec {
            name: name.to_string(),
            program: PathBuf::from("sh"),
            args: vec!["-c".to_string(), script.to_string()],
            env: vec![("DREAMCLUB_TEST".to_string(), "1".to_string())],
            delay_after: Duration::ZERO,
        }
    }

    #[tokio::test]
    async fn returns_when_every_child_exited() {
        let specs = vec![shell("ONE", "exit 0"), shell("TWO", "exit 3")];

        let result = tokio::time::timeout(
            Duration::from_secs(10),
            supervise(specs, "127.0.0.1:8000"),
        )
        .await;

        assert!(matches!(result, Ok(Ok(()))));
    }

    #[tokio::test]
    async fn reaps_exited_children_once() {
        let mut children = vec![
            spawn(&shell("DONE", "exit 0")).unwrap(),
            spawn(&shell("RUNNING", "sleep 30")).unwrap(),
        ];

        tokio::time::sleep(Duration::from_millis(500)).await;
        reap(&mut children);
        reap(&mut children);

        assert_eq!(children.len(), 1);
        assert_eq!(children[0].name, "RUNNING");

        children[0].terminate(TERMINATE_TIMEOUT).await.unwrap();
    }

    #[tokio::test]
    async fn terminates_running_child() {
        let mut child = spawn(&shell("SLEEPER", "sleep 30")).unwrap();

        child.terminate(Duration::from_secs(5)).await.unwrap();

        assert!(child.try_exit().unwrap().is_some());
    }

    #[tokio::test]
    async fn terminating_exited_child_is_a_no_op() {
        let mut child = spawn(&shell("QUICK", "exit 0")).unwrap();
        child.process.wait().await.unwrap();

        child.terminate(Duration::from_secs(1)).await.unwrap();
        child.terminate(Duration::from_secs(1)).await.unwrap();
    }

    #[tokio::test]
    async fn passes_extra_environment() {
        let mut child = spawn(&shell("ENV", r#"test "$DREAMCLUB_TEST" = 1"#)).unwrap();

        let status = child.process.wait().await.unwrap();

        assert!(status.success());
    }
}

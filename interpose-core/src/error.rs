use thiserror::Error;

/// Reason an effect was not injected.
///
/// Never surfaced to the application: the intercepted call always proceeds.
#[derive(Clone, Debug, Error)]
pub enum InjectError {
    #[error("no active runtime on device {0:?}")]
    NoRuntime(ipt::DeviceId),
    #[error("runtime has pre-processing disabled")]
    Disabled,
    #[error("feature parameter `{0}` does not name a resource")]
    MissingResource(String),
    #[error("resource format {0:?} cannot be rendered to")]
    UnusableFormat(ipt::Format),
    #[error("failed to create render target view: {0}")]
    ViewCreation(#[source] hal::DeviceError),
}

#[derive(Clone, Debug, Error)]
pub enum HookError {
    #[error("export `{0}` was not found")]
    ExportNotFound(String),
    #[error("failed to redirect `{export}`: {reason}")]
    Install { export: String, reason: String },
}

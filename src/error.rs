use thiserror::Error;

/// Fatal startup errors. Anything here means the host sequence stops and no
/// handle is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    #[error("mount point \"{0}\" not found in the host UI tree")]
    MissingMountPoint(String),

    #[error("no locator for asset \"{0}\"")]
    MissingAsset(String),

    #[error("core initialization failed: {0}")]
    InitFailed(String),
}

/// Per-event send failure on a core port. Never fatal: the offending event
/// is dropped and the bridge keeps listening.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PortError {
    #[error("port send failed: {0}")]
    Send(String),
}

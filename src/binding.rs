//! One-shot binding between a section list producer and a data source.
//!
//! The pipeline is single-fire: the producer emits exactly one section
//! list, the consumer installs it exactly once, and both channel halves
//! release on drop. `send` consumes the sender and
//! `bind_once` consumes the receiver, so a second emission or a second
//! binding is a compile error rather than a runtime check. There is no
//! manual unsubscribe path anywhere.

use thiserror::Error;
use tokio::sync::oneshot;

use crate::source::{ReloadSource, SectionModel};

#[derive(Debug, Error, PartialEq)]
pub enum BindError {
    /// The producer went away without emitting a section list.
    #[error("section producer dropped before emitting")]
    Cancelled,

    /// The binding target went away before the emission arrived.
    #[error("binding target dropped before the emission arrived")]
    Disconnected,
}

/// Create the single-value channel for a section list.
pub fn channel<S: SectionModel>() -> (oneshot::Sender<Vec<S>>, oneshot::Receiver<Vec<S>>) {
    oneshot::channel()
}

/// Emit the section list. Consumes the sender, so this happens at most once.
pub fn emit<S: SectionModel>(
    tx: oneshot::Sender<Vec<S>>,
    sections: Vec<S>,
) -> Result<(), BindError> {
    tx.send(sections).map_err(|_| BindError::Disconnected)
}

/// Await the one emission and install it into the data source.
pub async fn bind_once<S: SectionModel>(
    rx: oneshot::Receiver<Vec<S>>,
    source: &mut ReloadSource<S>,
) -> Result<(), BindError> {
    let sections = rx.await.map_err(|_| BindError::Cancelled)?;
    tracing::debug!("bound {} sections", sections.len());
    source.reload(sections);
    Ok(())
}

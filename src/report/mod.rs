//! User-visible notices emitted during a merge run
//!
//! Notices are typed values handed to a [`Reporter`]. The binary uses
//! [`TracingReporter`], which turns them into log events on stdout;
//! tests and embedders can collect them with [`CollectingReporter`].

mod notice;

pub use notice::Notice;

use tracing::{error, info, warn};

/// Receives notices in processing order
pub trait Reporter {
    fn notice(&mut self, notice: Notice);
}

/// Reports notices as `tracing` events
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn notice(&mut self, notice: Notice) {
        // The Display text already names every path involved
        match notice {
            Notice::Merging { .. } => info!("{}", notice),
            Notice::MergeFailed { .. } => error!("{}", notice),
            _ => warn!("{}", notice),
        }
    }
}

/// Keeps every notice in memory
#[derive(Debug, Default, Clone)]
pub struct CollectingReporter {
    notices: Vec<Notice>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }
}

impl Reporter for CollectingReporter {
    fn notice(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}

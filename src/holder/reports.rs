//! User-facing action reports

use log::{error, info, warn};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportLevel {
    Info,
    Warning,
    Error,
}

impl fmt::Display for ReportLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportLevel::Info => write!(f, "INFO"),
            ReportLevel::Warning => write!(f, "WARNING"),
            ReportLevel::Error => write!(f, "ERROR"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub level: ReportLevel,
    pub message: String,
}

/// Reports queued by actions until the front end drains them.
/// Every report is mirrored to the log at the matching level.
#[derive(Debug, Default)]
pub struct Reports {
    pending: Vec<Report>,
}

impl Reports {
    pub fn push(&mut self, level: ReportLevel, message: impl Into<String>) {
        let message = message.into();
        match level {
            ReportLevel::Info => info!("{}", message),
            ReportLevel::Warning => warn!("{}", message),
            ReportLevel::Error => error!("{}", message),
        }
        self.pending.push(Report { level, message });
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(ReportLevel::Info, message);
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.push(ReportLevel::Warning, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(ReportLevel::Error, message);
    }

    pub fn pending(&self) -> &[Report] {
        &self.pending
    }

    pub fn drain(&mut self) -> Vec<Report> {
        std::mem::take(&mut self.pending)
    }
}

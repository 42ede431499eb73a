#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/cantera-analytics/cantera/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod export;
pub mod rankings;
pub mod report;

pub use export::{ExportError, ExportFormat, Exporter};
pub use rankings::{RankingSummary, format_rankings};
pub use report::{Report, ReportBuilder, ReportError};

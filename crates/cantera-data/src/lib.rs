#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/cantera-analytics/cantera/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod dataset;
pub mod error;
pub mod tables;

pub use dataset::DatasetDir;
pub use error::{DataError, Result};
pub use tables::{MetricTable, read_metric_table};

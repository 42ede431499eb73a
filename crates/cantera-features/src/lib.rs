#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/cantera-analytics/cantera/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod builder;
pub mod registry;

pub use builder::{FeatureError, build_feature_table};
pub use registry::{
    MetricCategory, MetricInfo, available_metrics, get_metric_info, metrics_by_category,
};

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/cantera-analytics/cantera/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod league;

// Re-export main types from sub-crates
pub use cantera_data as data;
pub use cantera_features as features;
pub use cantera_model as model;
pub use cantera_output as output;

// Re-export common league types
pub use league::{Club, LaLiga, League};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

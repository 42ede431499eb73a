//! Metric Registry
//!
//! Central catalogue of the per-club metrics contributed by each source
//! table. Allows lookup by name and category when assembling feature lists.

use std::collections::HashMap;

/// Available metric categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricCategory {
    /// Match performance metrics (points, win rate, goal difference)
    Performance,
    /// Expected-goals metrics
    ExpectedGoals,
    /// Financial metrics (attendance, matchday revenue)
    Financial,
    /// Squad composition metrics (value, age profile)
    Squad,
}

/// Metric metadata
#[derive(Debug, Clone)]
pub struct MetricInfo {
    /// Metric column name (unique identifier)
    pub name: &'static str,
    /// Metric category
    pub category: MetricCategory,
    /// Brief description of what the metric measures
    pub description: &'static str,
    /// Source table the metric comes from
    pub source_table: &'static str,
}

/// Get all available metric info
pub fn available_metrics() -> Vec<MetricInfo> {
    vec![
        // Performance metrics
        MetricInfo {
            name: "AvgLeaguePosition",
            category: MetricCategory::Performance,
            description: "Average final league position across seasons",
            source_table: "performance_metrics",
        },
        MetricInfo {
            name: "TotalPoints",
            category: MetricCategory::Performance,
            description: "Total league points accumulated",
            source_table: "performance_metrics",
        },
        MetricInfo {
            name: "PointsPerGame",
            category: MetricCategory::Performance,
            description: "Average points earned per match",
            source_table: "performance_metrics",
        },
        MetricInfo {
            name: "WinRate",
            category: MetricCategory::Performance,
            description: "Share of matches won",
            source_table: "performance_metrics",
        },
        MetricInfo {
            name: "LossRate",
            category: MetricCategory::Performance,
            description: "Share of matches lost",
            source_table: "performance_metrics",
        },
        MetricInfo {
            name: "GoalDifference",
            category: MetricCategory::Performance,
            description: "Goals scored minus goals conceded",
            source_table: "performance_metrics",
        },
        MetricInfo {
            name: "TotalGoalsFor",
            category: MetricCategory::Performance,
            description: "Total goals scored",
            source_table: "performance_metrics",
        },
        MetricInfo {
            name: "TotalGoalsAgainst",
            category: MetricCategory::Performance,
            description: "Total goals conceded",
            source_table: "performance_metrics",
        },
        // Expected-goals metrics
        MetricInfo {
            name: "AvgxG",
            category: MetricCategory::ExpectedGoals,
            description: "Average expected goals per match",
            source_table: "xg_metrics",
        },
        MetricInfo {
            name: "AvgxGA",
            category: MetricCategory::ExpectedGoals,
            description: "Average expected goals conceded per match",
            source_table: "xg_metrics",
        },
        MetricInfo {
            name: "xGDifference",
            category: MetricCategory::ExpectedGoals,
            description: "Expected goals scored minus expected goals conceded",
            source_table: "xg_metrics",
        },
        // Financial metrics
        MetricInfo {
            name: "AvgAttendance",
            category: MetricCategory::Financial,
            description: "Average home attendance",
            source_table: "financial_scores",
        },
        MetricInfo {
            name: "EstimatedMatchdayRevenue",
            category: MetricCategory::Financial,
            description: "Estimated matchday revenue in euros",
            source_table: "financial_scores",
        },
        MetricInfo {
            name: "FinancialScore",
            category: MetricCategory::Financial,
            description: "Composite financial health score",
            source_table: "financial_scores",
        },
        // Squad metrics
        MetricInfo {
            name: "SquadValueScore",
            category: MetricCategory::Squad,
            description: "Composite squad market value score",
            source_table: "squad_value_scores",
        },
        MetricInfo {
            name: "AvgAge_x",
            category: MetricCategory::Squad,
            description: "Average squad age (squad value table)",
            source_table: "squad_value_scores",
        },
        MetricInfo {
            name: "TotalPlayers",
            category: MetricCategory::Squad,
            description: "Squad size",
            source_table: "squad_value_scores",
        },
        MetricInfo {
            name: "YoungPlayers",
            category: MetricCategory::Squad,
            description: "Players under 23",
            source_table: "squad_value_scores",
        },
        MetricInfo {
            name: "PrimePlayers",
            category: MetricCategory::Squad,
            description: "Players aged 23 to 29",
            source_table: "squad_value_scores",
        },
        MetricInfo {
            name: "ExperiencedPlayers",
            category: MetricCategory::Squad,
            description: "Players aged 30 or older",
            source_table: "squad_value_scores",
        },
    ]
}

/// Get metrics by category
pub fn metrics_by_category(category: MetricCategory) -> Vec<MetricInfo> {
    available_metrics()
        .into_iter()
        .filter(|m| m.category == category)
        .collect()
}

/// Get metric info by name
pub fn get_metric_info(name: &str) -> Option<MetricInfo> {
    available_metrics().into_iter().find(|m| m.name == name)
}

/// Get a map of all metrics indexed by name
pub fn metric_map() -> HashMap<&'static str, MetricInfo> {
    available_metrics()
        .into_iter()
        .map(|m| (m.name, m))
        .collect()
}

/// List all metric names
pub fn list_metric_names() -> Vec<&'static str> {
    available_metrics().into_iter().map(|m| m.name).collect()
}

/// Count metrics by category
pub fn count_by_category() -> HashMap<MetricCategory, usize> {
    let mut counts = HashMap::new();
    for metric in available_metrics() {
        *counts.entry(metric.category).or_insert(0) += 1;
    }
    counts
}

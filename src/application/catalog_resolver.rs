// Chart catalog resolver - derives available chart types from a payload
//
// Recognition is table-driven: a fixed-priority allow-list of single-purpose
// chart keys, then suffix rules for the per-column charts the backend
// generates. The payload itself stays opaque beyond key names and the
// image-length heuristic.
use crate::domain::format::{format_column_name, title_case};
use crate::domain::insights::AnalysisPayload;
use serde::Serialize;
use serde_json::Value;

/// String values longer than this are treated as base64 chart images.
pub const IMAGE_LENGTH_THRESHOLD: usize = 1000;

struct NamedChartRule {
    content_type: &'static str,
    /// Payload keys that satisfy this rule; the first is the canonical one.
    sources: &'static [&'static str],
    title: &'static str,
}

const NAMED_CHART_RULES: &[NamedChartRule] = &[
    NamedChartRule {
        content_type: "correlation_heatmap",
        sources: &["correlation_heatmap"],
        title: "Correlation Heatmap",
    },
    NamedChartRule {
        content_type: "pca",
        sources: &["pca"],
        title: "PCA Projection",
    },
    NamedChartRule {
        content_type: "clusters",
        sources: &["clusters", "kmeans"],
        title: "Data Clusters",
    },
    NamedChartRule {
        content_type: "numeric_bar",
        sources: &["numeric_bar"],
        title: "Numeric Column Averages",
    },
    NamedChartRule {
        content_type: "numeric_line",
        sources: &["numeric_line"],
        title: "Trend Analysis",
    },
    NamedChartRule {
        content_type: "numeric_stacked_bar",
        sources: &["numeric_stacked_bar"],
        title: "Multi-dimension Comparison",
    },
    NamedChartRule {
        content_type: "line_chart",
        sources: &["line_chart"],
        title: "Line Chart",
    },
    NamedChartRule {
        content_type: "area_chart",
        sources: &["area_chart"],
        title: "Area Chart",
    },
    NamedChartRule {
        content_type: "waterfall_chart",
        sources: &["waterfall_chart"],
        title: "Waterfall Chart",
    },
    NamedChartRule {
        content_type: "table_chart",
        sources: &["table_chart"],
        title: "Data Table",
    },
    NamedChartRule {
        content_type: "ribbon_chart",
        sources: &["ribbon_chart"],
        title: "Ribbon Chart",
    },
    NamedChartRule {
        content_type: "matrix_chart",
        sources: &["matrix_chart"],
        title: "Matrix Chart",
    },
    NamedChartRule {
        content_type: "donut_chart",
        sources: &["donut_chart"],
        title: "Donut Chart",
    },
    NamedChartRule {
        content_type: "gauge_chart",
        sources: &["gauge_chart"],
        title: "Gauge Chart",
    },
    NamedChartRule {
        content_type: "funnel_chart",
        sources: &["funnel_chart"],
        title: "Funnel Chart",
    },
    NamedChartRule {
        content_type: "bubble_chart",
        sources: &["bubble_chart"],
        title: "Bubble Chart",
    },
    NamedChartRule {
        content_type: "radar_chart",
        sources: &["radar_chart"],
        title: "Radar Chart",
    },
    NamedChartRule {
        content_type: "pareto_chart",
        sources: &["pareto_chart"],
        title: "Pareto Chart",
    },
    NamedChartRule {
        content_type: "boxplot",
        sources: &["boxplot"],
        title: "Box Plot",
    },
    NamedChartRule {
        content_type: "histograms",
        sources: &["histograms"],
        title: "Histograms",
    },
    NamedChartRule {
        content_type: "scatter_plot",
        sources: &["scatter_plot"],
        title: "Scatter Plot",
    },
    NamedChartRule {
        content_type: "network_graph",
        sources: &["network_graph"],
        title: "Network Graph",
    },
    NamedChartRule {
        content_type: "calendar_heatmap",
        sources: &["calendar_heatmap"],
        title: "Calendar Heatmap",
    },
];

struct SuffixChartRule {
    suffix: &'static str,
    /// Keys containing this fragment are claimed by a named rule instead.
    excluded_infix: Option<&'static str>,
    label: &'static str,
}

const SUFFIX_CHART_RULES: &[SuffixChartRule] = &[
    SuffixChartRule {
        suffix: "_bar",
        excluded_infix: Some("numeric_"),
        label: "Bar Chart",
    },
    SuffixChartRule {
        suffix: "_pie",
        excluded_infix: None,
        label: "Pie Chart",
    },
    SuffixChartRule {
        suffix: "_word_count",
        excluded_infix: None,
        label: "Word Frequency",
    },
    SuffixChartRule {
        suffix: "_donut",
        excluded_infix: None,
        label: "Donut Chart",
    },
    SuffixChartRule {
        suffix: "_tree_map",
        excluded_infix: None,
        label: "Tree Map",
    },
    SuffixChartRule {
        suffix: "_wordcloud",
        excluded_infix: None,
        label: "Word Cloud",
    },
];

/// One chart the user can add to the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogEntry {
    pub content_type: String,
    pub title: String,
    pub image: String,
}

fn present(payload: &AnalysisPayload, key: &str) -> bool {
    payload.get(key).is_some_and(|v| !v.is_null())
}

fn suffix_rule_for(key: &str) -> Option<&'static SuffixChartRule> {
    SUFFIX_CHART_RULES.iter().find(|rule| {
        key.ends_with(rule.suffix)
            && rule
                .excluded_infix
                .is_none_or(|fragment| !key.contains(fragment))
    })
}

fn is_named_source(key: &str) -> bool {
    NAMED_CHART_RULES
        .iter()
        .any(|rule| rule.sources.contains(&key))
}

/// Every content type the payload can back: allow-list keys first in fixed
/// priority order, then suffix-matched keys in payload key order.
pub fn available_content_types(payload: &AnalysisPayload) -> Vec<String> {
    let mut types = Vec::new();

    for rule in NAMED_CHART_RULES {
        if rule.sources.iter().any(|source| present(payload, source)) {
            types.push(rule.content_type.to_string());
        }
    }

    for key in payload.keys() {
        if is_named_source(key) {
            continue;
        }
        if suffix_rule_for(key).is_some() {
            types.push(key.clone());
        }
    }

    types
}

/// Human-readable title for a content type.
pub fn title_for(content_type: &str) -> String {
    if let Some(rule) = NAMED_CHART_RULES
        .iter()
        .find(|rule| rule.content_type == content_type)
    {
        return rule.title.to_string();
    }

    if let Some(rule) = suffix_rule_for(content_type) {
        let column = content_type
            .strip_suffix(rule.suffix)
            .unwrap_or(content_type);
        return format!("{} {}", title_case(&column.replace('_', " ")), rule.label);
    }

    format_column_name(content_type)
}

/// Payload image for a content type, resolving the clusters/kmeans alias.
pub fn image_for<'a>(payload: &'a AnalysisPayload, content_type: &str) -> Option<&'a str> {
    match NAMED_CHART_RULES
        .iter()
        .find(|rule| rule.content_type == content_type)
    {
        Some(rule) => rule
            .sources
            .iter()
            .find_map(|source| payload.get(*source).and_then(Value::as_str)),
        None => payload.get(content_type).and_then(Value::as_str),
    }
}

/// All image-valued payload entries, in payload order, paired with resolved
/// titles. This is what populates the "add a chart" listing.
pub fn catalog_entries(payload: &AnalysisPayload) -> Vec<CatalogEntry> {
    payload
        .iter()
        .filter_map(|(key, value)| {
            let image = value.as_str()?;
            if image.len() <= IMAGE_LENGTH_THRESHOLD {
                return None;
            }
            Some(CatalogEntry {
                content_type: key.clone(),
                title: title_for(key),
                image: image.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: serde_json::Value) -> AnalysisPayload {
        match value {
            Value::Object(map) => map,
            _ => panic!("payload fixtures must be objects"),
        }
    }

    fn long_image() -> String {
        "i".repeat(1500)
    }

    #[test]
    fn test_available_types_allow_list_before_suffix_matches() {
        let p = payload(json!({
            "region_pie": long_image(),
            "correlation_heatmap": long_image(),
            "sales_bar": long_image(),
        }));

        assert_eq!(
            available_content_types(&p),
            vec!["correlation_heatmap", "region_pie", "sales_bar"]
        );
    }

    #[test]
    fn test_available_types_excludes_unrecognized_keys() {
        let p = payload(json!({
            "correlation_heatmap": "x".repeat(1200),
            "sales_bar": "x".repeat(1500),
            "note": "hi",
        }));

        assert_eq!(
            available_content_types(&p),
            vec!["correlation_heatmap", "sales_bar"]
        );
    }

    #[test]
    fn test_available_types_resolves_kmeans_alias() {
        let p = payload(json!({"kmeans": long_image()}));
        assert_eq!(available_content_types(&p), vec!["clusters"]);
        assert_eq!(image_for(&p, "clusters"), Some(p["kmeans"].as_str().unwrap()));
    }

    #[test]
    fn test_available_types_skips_numeric_bar_suffix_collision() {
        let p = payload(json!({"numeric_bar": long_image()}));
        // claimed by the allow-list entry, not re-added by the _bar rule
        assert_eq!(available_content_types(&p), vec!["numeric_bar"]);
    }

    #[test]
    fn test_available_types_empty_payload() {
        assert!(available_content_types(&AnalysisPayload::new()).is_empty());
    }

    #[test]
    fn test_title_for_named_and_suffix_keys() {
        assert_eq!(title_for("correlation_heatmap"), "Correlation Heatmap");
        assert_eq!(title_for("sales_bar"), "Sales Bar Chart");
        assert_eq!(title_for("region_pie"), "Region Pie Chart");
        assert_eq!(title_for("comment_word_count"), "Comment Word Frequency");
        assert_eq!(title_for("unit_price_bar"), "Unit Price Bar Chart");
    }

    #[test]
    fn test_title_for_falls_back_to_title_case() {
        assert_eq!(title_for("mystery_series"), "Mystery Series");
    }

    #[test]
    fn test_catalog_entries_applies_image_threshold() {
        let p = payload(json!({
            "sales_bar": long_image(),
            "note": "hi",
            "shape": [100, 4],
        }));

        let entries = catalog_entries(&p);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].content_type, "sales_bar");
        assert_eq!(entries[0].title, "Sales Bar Chart");
    }

    #[test]
    fn test_catalog_entries_preserve_payload_order() {
        let p = payload(json!({
            "zeta_pie": long_image(),
            "alpha_bar": long_image(),
        }));

        let types: Vec<&str> = catalog_entries(&p)
            .iter()
            .map(|e| e.content_type.as_str())
            .collect();
        assert_eq!(types, vec!["zeta_pie", "alpha_bar"]);
    }
}

// KPI service - derives the KPI tile strip from an analysis payload
use crate::domain::format::{format_count, format_number};
use crate::domain::insights::{column_kpis, dataset_shape, missing_counts, AnalysisPayload};
use serde::Serialize;

/// At most this many per-column KPI tiles are shown.
const MAX_COLUMN_TILES: usize = 4;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiStat {
    pub label: String,
    pub value: String,
}

impl KpiStat {
    fn new(label: &str, value: String) -> Self {
        Self {
            label: label.to_string(),
            value,
        }
    }
}

/// One KPI card: a headline value with a unit label and secondary stats.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiTile {
    pub id: String,
    pub title: String,
    pub value: String,
    pub label: String,
    pub stats: Vec<KpiStat>,
}

/// Build the KPI strip for a payload: dataset size, the first few numeric
/// columns, and the missing-value summary. Tiles whose backing keys are
/// absent are simply omitted.
pub fn kpi_tiles(payload: &AnalysisPayload) -> Vec<KpiTile> {
    let mut tiles = Vec::new();

    if let Some((rows, cols)) = dataset_shape(payload) {
        tiles.push(KpiTile {
            id: "dataset-size".to_string(),
            title: "Dataset Size".to_string(),
            value: format_count(rows),
            label: "rows".to_string(),
            stats: vec![KpiStat::new("columns", format_count(cols))],
        });
    }

    for kpi in column_kpis(payload).into_iter().take(MAX_COLUMN_TILES) {
        tiles.push(KpiTile {
            id: format!("kpi-{}", kpi.column),
            title: kpi.column.clone(),
            value: format_number(kpi.mean),
            label: "avg".to_string(),
            stats: vec![
                KpiStat::new("min", format_number(kpi.min)),
                KpiStat::new("max", format_number(kpi.max)),
            ],
        });
    }

    let missing = missing_counts(payload);
    if !missing.is_empty() {
        let total: u64 = missing.iter().map(|(_, count)| count).sum();
        let affected = missing.iter().filter(|(_, count)| *count > 0).count();
        tiles.push(KpiTile {
            id: "missing-values".to_string(),
            title: "Missing Values".to_string(),
            value: format_count(total),
            label: "total".to_string(),
            stats: vec![KpiStat::new("affected columns", format_count(affected as u64))],
        });
    }

    tiles
}

// Analysis payload domain model
//
// The analysis backend returns a loose mapping from string keys to values:
// a `shape` pair, `dtypes` and `missing` mappings, per-column `*_kpi`
// objects, and base64-image chart keys. Key order is preserved end to end,
// so accessors here see keys in the order the backend emitted them.
use serde_json::Value;

/// Raw analysis result as returned by the backend.
pub type AnalysisPayload = serde_json::Map<String, Value>;

const KPI_KEY_SUFFIX: &str = "_kpi";

/// Summary statistics the backend computes for one numeric column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnKpi {
    pub column: String,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    pub sum: f64,
}

/// The `shape` pair as (rows, columns), if present and well-formed.
pub fn dataset_shape(payload: &AnalysisPayload) -> Option<(u64, u64)> {
    let shape = payload.get("shape")?.as_array()?;
    let rows = shape.first()?.as_u64()?;
    let cols = shape.get(1)?.as_u64()?;
    Some((rows, cols))
}

/// Per-column missing-value counts from the `missing` mapping.
pub fn missing_counts(payload: &AnalysisPayload) -> Vec<(String, u64)> {
    let Some(Value::Object(missing)) = payload.get("missing") else {
        return Vec::new();
    };
    missing
        .iter()
        .filter_map(|(column, count)| count.as_u64().map(|c| (column.clone(), c)))
        .collect()
}

/// All `*_kpi` entries in payload order. Entries without a numeric mean are
/// skipped; the other statistics degrade to NaN and render as "N/A".
pub fn column_kpis(payload: &AnalysisPayload) -> Vec<ColumnKpi> {
    payload
        .iter()
        .filter_map(|(key, value)| {
            let column = key.strip_suffix(KPI_KEY_SUFFIX)?;
            let stats = value.as_object()?;
            let mean = stats.get("mean")?.as_f64()?;
            Some(ColumnKpi {
                column: column.to_string(),
                mean,
                min: stats.get("min").and_then(Value::as_f64).unwrap_or(f64::NAN),
                max: stats.get("max").and_then(Value::as_f64).unwrap_or(f64::NAN),
                sum: stats.get("sum").and_then(Value::as_f64).unwrap_or(f64::NAN),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> AnalysisPayload {
        match value {
            Value::Object(map) => map,
            _ => panic!("payload fixtures must be objects"),
        }
    }

    #[test]
    fn test_dataset_shape() {
        let p = payload(json!({"shape": [1200, 8]}));
        assert_eq!(dataset_shape(&p), Some((1200, 8)));
    }

    #[test]
    fn test_dataset_shape_tolerates_missing_or_malformed() {
        assert_eq!(dataset_shape(&AnalysisPayload::new()), None);
        let p = payload(json!({"shape": "12x8"}));
        assert_eq!(dataset_shape(&p), None);
    }

    #[test]
    fn test_missing_counts() {
        let p = payload(json!({"missing": {"price": 3, "region": 0}}));
        let counts = missing_counts(&p);
        assert_eq!(counts.len(), 2);
        assert!(counts.contains(&("price".to_string(), 3)));
    }

    #[test]
    fn test_column_kpis_reads_statistics() {
        let p = payload(json!({
            "price_kpi": {"mean": 12.5, "min": 1.0, "max": 99.0, "sum": 1250.0},
            "note": "not a kpi"
        }));
        let kpis = column_kpis(&p);
        assert_eq!(kpis.len(), 1);
        assert_eq!(kpis[0].column, "price");
        assert_eq!(kpis[0].mean, 12.5);
        assert_eq!(kpis[0].sum, 1250.0);
    }

    #[test]
    fn test_column_kpis_skips_entries_without_mean() {
        let p = payload(json!({"price_kpi": {"min": 1.0}}));
        assert!(column_kpis(&p).is_empty());
    }
}

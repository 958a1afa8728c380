use crate::domain::model::Dataset;
use crate::utils::error::Result;

pub const OUTPUT_EXTENSION: &str = "json";

pub fn output_file_name(basename: &str) -> String {
    format!("{}.{}", basename, OUTPUT_EXTENSION)
}

/// Two-space pretty JSON with object keys in source order and no trailing newline.
pub fn render_dataset(dataset: &Dataset) -> Result<String> {
    Ok(serde_json::to_string_pretty(dataset.as_value())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parse::parse_dataset;
    use serde_json::json;

    #[test]
    fn test_output_file_name() {
        assert_eq!(output_file_name("kpi_summary"), "kpi_summary.json");
    }

    #[test]
    fn test_render_pretty_array() {
        let dataset = Dataset::from_records(vec![
            json!({"total_claims": "100", "avg_amount": 500}),
            json!({"total_claims": "50", "avg_amount": 700}),
        ]);

        let expected = "[\n  {\n    \"total_claims\": \"100\",\n    \"avg_amount\": 500\n  },\n  {\n    \"total_claims\": \"50\",\n    \"avg_amount\": 700\n  }\n]";
        assert_eq!(render_dataset(&dataset).unwrap(), expected);
    }

    #[test]
    fn test_render_empty_array() {
        let dataset = Dataset::from_records(Vec::new());
        assert_eq!(render_dataset(&dataset).unwrap(), "[]");
    }

    #[test]
    fn test_key_order_follows_source() {
        let (_, dataset) = parse_dataset("{\"zeta\":1,\"alpha\":2,\"mid\":3}").unwrap();
        let rendered = render_dataset(&dataset).unwrap();

        let zeta = rendered.find("zeta").unwrap();
        let alpha = rendered.find("alpha").unwrap();
        let mid = rendered.find("mid").unwrap();
        assert!(zeta < alpha && alpha < mid);
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let source = "{\"severity\":\"high\",\"count\":\"12\",\"share\":0.25}\n\n{\"severity\":\"low\",\"count\":3,\"nested\":{\"b\":[1,2],\"a\":null}}\n";
        let (_, first) = parse_dataset(source).unwrap();
        let once = render_dataset(&first).unwrap();

        let (_, second) = parse_dataset(&once).unwrap();
        let twice = render_dataset(&second).unwrap();

        assert_eq!(once, twice);
    }
}

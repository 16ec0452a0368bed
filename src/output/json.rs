//! JSON output for subnet reports.

use crate::models::SubnetReport;

/// Render reports as pretty JSON.
///
/// A single report is written as an object, several as an array.
pub fn render_json(reports: &[SubnetReport]) -> Result<String, serde_json::Error> {
    match reports {
        [report] => serde_json::to_string_pretty(report),
        _ => serde_json::to_string_pretty(reports),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::REPORT_KEYS;
    use crate::processing::calculate;
    use serde_json::Value;

    #[test]
    fn test_render_json_single() {
        let report = calculate("192.168.1.10", 24).unwrap();
        let json: Value = serde_json::from_str(&render_json(&[report]).unwrap()).unwrap();

        let object = json.as_object().expect("expected a JSON object");
        assert_eq!(object.len(), REPORT_KEYS.len());
        for key in REPORT_KEYS {
            assert!(object.contains_key(key), "missing key {key}");
        }
        assert_eq!(json["IP Address"], "192.168.1.10");
        assert_eq!(json["Usable Host IP Range"], "192.168.1.1 - 192.168.1.254");
        assert_eq!(json["Total Number of Hosts"], 256);
        assert_eq!(json["Number of Usable Hosts"], 254);
        assert_eq!(json["IP Class"], "C");
        assert_eq!(json["CIDR Notation"], "/24");
        assert_eq!(json["IP Type"], "Private");
    }

    #[test]
    fn test_render_json_many() {
        let reports = vec![
            calculate("1.1.1.1", 0).unwrap(),
            calculate("230.1.1.1", 4).unwrap(),
        ];
        let json: Value = serde_json::from_str(&render_json(&reports).unwrap()).unwrap();

        let array = json.as_array().expect("expected a JSON array");
        assert_eq!(array.len(), 2);
        assert_eq!(array[0]["Total Number of Hosts"], 4294967296u64);
        assert_eq!(array[1]["IP Class"], "D or E");
        assert_eq!(array[1]["Network Address"], "224.0.0.0");
    }
}

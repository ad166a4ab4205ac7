#[cfg(test)]
mod tests {
    use crate::parsing::couriers_parser::{parse_couriers, parse_couriers_str};
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Test parsing courier records with both name column spellings
    #[test]
    fn test_parse_courier_records() {
        let json = r#"[
            {"id_petugas": "P017", "nama": "Budi Santoso", "id_kantor": "40115"},
            {"id_petugas": "P018", "nama_petugas": "Sari Dewi", "id_kantor": "40115"}
        ]"#;

        let result = parse_couriers_str(json);
        assert!(result.is_ok(), "Should parse couriers: {:?}", result.err());
        let couriers = result.unwrap();
        assert_eq!(couriers.len(), 2);
        assert_eq!(couriers[0].courier_id, "P017");
        assert_eq!(couriers[0].name, "Budi Santoso");
        assert_eq!(couriers[1].name, "Sari Dewi");
        assert_eq!(couriers[1].display_label(), "P018 - Sari Dewi");
    }

    /// Test that numeric courier ids are kept as strings
    #[test]
    fn test_numeric_courier_id() {
        let json = r#"[
            {"id_petugas": 17, "id_kantor": 40115}
        ]"#;

        let couriers = parse_couriers_str(json).unwrap();
        assert_eq!(couriers[0].courier_id, "17");
        assert_eq!(couriers[0].name, "");
    }

    /// Test that a non-array payload fails fast
    #[test]
    fn test_non_array_payload_fails() {
        let result = parse_couriers_str(r#""P017""#);
        assert!(result.is_err(), "String payload must be rejected");
        let error_msg = result.unwrap_err().to_string();
        assert!(
            error_msg.contains("array"),
            "Error should name the expected shape: {}",
            error_msg
        );
    }

    /// Test parsing from a file
    #[test]
    fn test_parse_from_file() {
        let json = r#"[
            {"id_petugas": "P001", "nama": "Agus", "id_kantor": "40115"}
        ]"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", json).unwrap();

        let result = parse_couriers(temp_file.path());
        assert!(result.is_ok(), "Should parse from file: {:?}", result.err());
        assert_eq!(result.unwrap().len(), 1);
    }
}

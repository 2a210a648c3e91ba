//! Tests for sequence bean and manager

use super::*;
use chrono::NaiveDate;
use dbscope_core::{Row, Value};

fn catalog_row() -> Row {
    Row::new(
        vec![
            "SEQNAME".to_string(),
            "OWNER".to_string(),
            "OWNERTYPE".to_string(),
            "SEQID".to_string(),
            "SEQTYPE".to_string(),
            "BASE_SEQSCHEMA".to_string(),
            "BASE_SEQNAME".to_string(),
            "INCREMENT".to_string(),
            "START".to_string(),
            "MAXVALUE".to_string(),
            "MINVALUE".to_string(),
            "NEXTCACHEFIRSTVALUE".to_string(),
            "CYCLE".to_string(),
            "CACHE".to_string(),
            "ORDER".to_string(),
            "DATATYPEID".to_string(),
            "SOURCETYPEID".to_string(),
            "CREATE_TIME".to_string(),
            "ALTER_TIME".to_string(),
            "PRECISION".to_string(),
            "ORIGIN".to_string(),
            "REMARKS".to_string(),
        ],
        vec![
            Value::String("ORDERS_SEQ".to_string()),
            Value::String("APPUSER".to_string()),
            Value::String("U".to_string()),
            Value::Int32(1042),
            Value::String("S".to_string()),
            Value::String("SALES  ".to_string()),
            Value::String("ORDERS_BASE".to_string()),
            Value::Int64(1),
            Value::Int64(1),
            Value::Int64(999_999_999),
            Value::Int64(1),
            Value::Int64(2081),
            Value::String("Y".to_string()),
            Value::Int32(20),
            Value::String("Y".to_string()),
            Value::Int32(497),
            Value::Int32(0),
            Value::DateTime(
                NaiveDate::from_ymd_opt(2024, 1, 10)
                    .unwrap()
                    .and_hms_opt(8, 0, 0)
                    .unwrap(),
            ),
            Value::DateTime(
                NaiveDate::from_ymd_opt(2024, 6, 2)
                    .unwrap()
                    .and_hms_opt(17, 45, 0)
                    .unwrap(),
            ),
            Value::Int32(10),
            Value::String("U".to_string()),
            Value::String("Order numbers".to_string()),
        ],
    )
}

mod precision_tests {
    use super::*;

    #[test]
    fn test_digits_and_data_types() {
        assert_eq!(SequencePrecision::P5.digits(), 5);
        assert_eq!(SequencePrecision::P5.data_type(), "SMALLINT");
        assert_eq!(SequencePrecision::P10.digits(), 10);
        assert_eq!(SequencePrecision::P10.data_type(), "INTEGER");
        assert_eq!(SequencePrecision::P19.digits(), 19);
        assert_eq!(SequencePrecision::P19.data_type(), "BIGINT");
    }

    #[test]
    fn test_from_digits_known() {
        assert_eq!(SequencePrecision::from_digits(5), Some(SequencePrecision::P5));
        assert_eq!(SequencePrecision::from_digits(10), Some(SequencePrecision::P10));
        assert_eq!(SequencePrecision::from_digits(19), Some(SequencePrecision::P19));
    }

    #[test]
    fn test_from_digits_unknown_is_none() {
        assert_eq!(SequencePrecision::from_digits(7), None);
        assert_eq!(SequencePrecision::from_digits(0), None);
        assert_eq!(SequencePrecision::from_digits(-1), None);
    }

    #[test]
    fn test_description_round_trip() {
        for p in [
            SequencePrecision::P5,
            SequencePrecision::P10,
            SequencePrecision::P19,
        ] {
            assert_eq!(SequencePrecision::from_description(&p.description()), Some(p));
        }
    }

    #[test]
    fn test_from_description_unknown_is_none() {
        assert_eq!(SequencePrecision::from_description("DECIMAL (31 digits)"), None);
        assert_eq!(SequencePrecision::from_description(""), None);
    }

    #[test]
    fn test_default_is_ten_digits() {
        assert_eq!(SequencePrecision::default(), SequencePrecision::P10);
    }
}

mod classification_tests {
    use super::*;

    #[test]
    fn test_owner_type_codes() {
        assert_eq!(SequenceOwnerType::User.code(), "U");
        assert_eq!(SequenceOwnerType::System.code(), "S");
        assert_eq!(SequenceOwnerType::from_code("U"), Some(SequenceOwnerType::User));
        assert_eq!(SequenceOwnerType::from_code("S"), Some(SequenceOwnerType::System));
        assert_eq!(SequenceOwnerType::from_code("X"), None);
    }

    #[test]
    fn test_owner_type_descriptions() {
        assert_eq!(SequenceOwnerType::User.description(), "User");
        assert_eq!(SequenceOwnerType::System.description(), "System");
    }

    #[test]
    fn test_sequence_type_codes() {
        assert_eq!(SequenceType::Sequence.code(), "S");
        assert_eq!(SequenceType::Identity.code(), "I");
        assert_eq!(SequenceType::from_code("S"), Some(SequenceType::Sequence));
        assert_eq!(SequenceType::from_code("I"), Some(SequenceType::Identity));
        assert_eq!(SequenceType::from_code("Q"), None);
    }
}

mod from_row_tests {
    use super::*;

    #[test]
    fn test_generation_parameters_mirror_row() {
        let seq = Sequence::from_row("SALES", &catalog_row());
        assert_eq!(seq.increment(), Some(1));
        assert_eq!(seq.start(), Some(1));
        assert_eq!(seq.cache(), Some(20));
        assert!(seq.cycle());
        assert!(seq.order());
    }

    #[test]
    fn test_identity_fields() {
        let seq = Sequence::from_row("SALES", &catalog_row());
        assert_eq!(seq.name(), "ORDERS_SEQ");
        assert_eq!(seq.schema(), "SALES");
        assert_eq!(seq.qualified_name(), "SALES.ORDERS_SEQ");
        assert_eq!(seq.owner(), Some("APPUSER"));
        assert_eq!(seq.owner_type(), Some(SequenceOwnerType::User));
        assert_eq!(seq.seq_id(), Some(1042));
    }

    #[test]
    fn test_classification_fields() {
        let seq = Sequence::from_row("SALES", &catalog_row());
        assert_eq!(seq.seq_type(), SequenceType::Sequence);
        assert_eq!(seq.precision(), SequencePrecision::P10);
        assert_eq!(seq.origin(), Some(SequenceOwnerType::User));
    }

    #[test]
    fn test_base_object_trimmed() {
        let seq = Sequence::from_row("SALES", &catalog_row());
        assert_eq!(seq.base_schema(), Some("SALES"));
        assert_eq!(seq.base_sequence(), Some("ORDERS_BASE"));
    }

    #[test]
    fn test_bounds_and_cache_watermark() {
        let seq = Sequence::from_row("SALES", &catalog_row());
        assert_eq!(seq.min_value(), Some(1));
        assert_eq!(seq.max_value(), Some(999_999_999));
        assert_eq!(seq.next_cache_first_value(), Some(2081));
    }

    #[test]
    fn test_audit_fields() {
        let seq = Sequence::from_row("SALES", &catalog_row());
        assert!(seq.create_time().is_some());
        assert!(seq.alter_time().is_some());
        assert_eq!(seq.remarks(), Some("Order numbers"));
        assert_eq!(seq.data_type_id(), Some(497));
        assert_eq!(seq.source_type_id(), Some(0));
    }

    #[test]
    fn test_row_bean_is_persisted() {
        let seq = Sequence::from_row("SALES", &catalog_row());
        assert!(seq.is_persisted());
    }

    #[test]
    fn test_sparse_row_leaves_fields_empty() {
        let row = Row::new(
            vec!["SEQNAME".to_string(), "CYCLE".to_string()],
            vec![Value::String("S1".to_string()), Value::String("N".to_string())],
        );
        let seq = Sequence::from_row("APP", &row);
        assert_eq!(seq.name(), "S1");
        assert!(!seq.cycle());
        assert!(!seq.order());
        assert_eq!(seq.increment(), None);
        assert_eq!(seq.cache(), None);
        assert_eq!(seq.owner(), None);
        assert_eq!(seq.create_time(), None);
    }

    #[test]
    fn test_unknown_precision_falls_back_to_default() {
        let row = Row::new(
            vec!["SEQNAME".to_string(), "PRECISION".to_string()],
            vec![Value::String("S1".to_string()), Value::Int32(31)],
        );
        let seq = Sequence::from_row("APP", &row);
        assert_eq!(seq.precision(), SequencePrecision::P10);
    }
}

mod new_bean_tests {
    use super::*;

    #[test]
    fn test_factory_defaults() {
        let seq = Sequence::new("SALES", "NEW_SEQ");
        assert_eq!(seq.increment(), Some(1));
        assert_eq!(seq.cache(), Some(20));
        assert!(!seq.cycle());
        assert!(!seq.order());
        assert_eq!(seq.precision(), SequencePrecision::P10);
        assert_eq!(seq.precision().digits(), 10);
    }

    #[test]
    fn test_new_bean_classification() {
        let seq = Sequence::new("SALES", "NEW_SEQ");
        assert_eq!(seq.seq_type(), SequenceType::Sequence);
        assert_eq!(seq.owner_type(), Some(SequenceOwnerType::User));
        assert_eq!(seq.origin(), Some(SequenceOwnerType::User));
    }

    #[test]
    fn test_new_bean_is_not_persisted() {
        let seq = Sequence::new("SALES", "NEW_SEQ");
        assert!(!seq.is_persisted());
    }

    #[test]
    fn test_setters_do_not_validate_bounds() {
        // min > max is accepted; consistency is the server's call
        let mut seq = Sequence::new("SALES", "NEW_SEQ");
        seq.set_min_value(Some(100));
        seq.set_max_value(Some(10));
        seq.set_start(Some(-5));
        assert_eq!(seq.min_value(), Some(100));
        assert_eq!(seq.max_value(), Some(10));
        assert_eq!(seq.start(), Some(-5));
    }

    #[test]
    fn test_set_precision_from_description() {
        let mut seq = Sequence::new("SALES", "NEW_SEQ");
        seq.set_precision_from_description("BIGINT (19 digits)").unwrap();
        assert_eq!(seq.precision(), SequencePrecision::P19);
    }

    #[test]
    fn test_set_precision_from_unknown_description_fails_loudly() {
        let mut seq = Sequence::new("SALES", "NEW_SEQ");
        let err = seq
            .set_precision_from_description("DECIMAL (31 digits)")
            .unwrap_err();
        assert_eq!(
            err,
            SequenceError::UnknownPrecision("DECIMAL (31 digits)".to_string())
        );
        // field unchanged
        assert_eq!(seq.precision(), SequencePrecision::P10);
    }

    #[test]
    fn test_serialization_round_trip() {
        let seq = Sequence::from_row("SALES", &catalog_row());
        let json = serde_json::to_string(&seq).unwrap();
        let back: Sequence = serde_json::from_str(&json).unwrap();
        assert_eq!(back.name(), seq.name());
        assert_eq!(back.precision(), seq.precision());
        assert_eq!(back.next_cache_first_value(), seq.next_cache_first_value());
    }
}

mod manager_tests {
    use super::*;

    #[test]
    fn test_create_from_fresh_bean() {
        let manager = SequenceManager::new();
        let seq = Sequence::new("SALES", "NEW_SEQ");

        let sql = manager.build_create_sequence(&seq).unwrap();
        assert!(sql.starts_with("CREATE SEQUENCE SALES.NEW_SEQ AS INTEGER"));
        assert!(sql.contains("INCREMENT BY 1"));
        assert!(sql.contains("CACHE 20"));
        assert!(sql.contains("NO MINVALUE"));
        assert!(sql.contains("NO MAXVALUE"));
        assert!(sql.contains("NO CYCLE"));
        assert!(sql.contains("NO ORDER"));
        // fresh bean has no start value
        assert!(!sql.contains("START WITH"));
    }

    #[test]
    fn test_create_with_explicit_parameters() {
        let manager = SequenceManager::new();
        let mut seq = Sequence::new("SALES", "NEW_SEQ");
        seq.set_start(Some(1000));
        seq.set_min_value(Some(1));
        seq.set_max_value(Some(999_999));
        seq.set_cycle(true);
        seq.set_order(true);
        seq.set_cache(None);
        seq.set_precision(SequencePrecision::P19);

        let sql = manager.build_create_sequence(&seq).unwrap();
        assert!(sql.contains("AS BIGINT"));
        assert!(sql.contains("START WITH 1000"));
        assert!(sql.contains("MINVALUE 1"));
        assert!(sql.contains("MAXVALUE 999999"));
        assert!(sql.contains("NO CACHE"));
        assert!(sql.contains("\n    CYCLE"));
        assert!(sql.contains("\n    ORDER"));
        assert!(!sql.contains("NO CYCLE"));
        assert!(!sql.contains("NO ORDER"));
    }

    #[test]
    fn test_create_empty_name_error() {
        let manager = SequenceManager::new();
        let seq = Sequence::new("SALES", "");
        assert_eq!(
            manager.build_create_sequence(&seq),
            Err(SequenceError::EmptyName)
        );
    }

    #[test]
    fn test_drop_sequence() {
        let manager = SequenceManager::new();
        let seq = Sequence::new("SALES", "NEW_SEQ");
        let sql = manager.build_drop_sequence(&seq, false).unwrap();
        assert_eq!(sql, "DROP SEQUENCE SALES.NEW_SEQ");
    }

    #[test]
    fn test_drop_sequence_if_exists() {
        let manager = SequenceManager::new();
        let seq = Sequence::new("SALES", "NEW_SEQ");
        let sql = manager.build_drop_sequence(&seq, true).unwrap();
        assert_eq!(sql, "DROP SEQUENCE IF EXISTS SALES.NEW_SEQ");
    }

    #[test]
    fn test_comment_from_remarks() {
        let manager = SequenceManager::new();
        let mut seq = Sequence::new("SALES", "NEW_SEQ");
        seq.set_remarks(Some("Order numbers".to_string()));
        let sql = manager.build_comment(&seq).unwrap();
        assert_eq!(
            sql,
            "COMMENT ON SEQUENCE SALES.NEW_SEQ IS 'Order numbers'"
        );
    }

    #[test]
    fn test_comment_escapes_quotes() {
        let manager = SequenceManager::new();
        let mut seq = Sequence::new("SALES", "NEW_SEQ");
        seq.set_remarks(Some("O'Reilly's counter".to_string()));
        let sql = manager.build_comment(&seq).unwrap();
        assert!(sql.contains("O''Reilly''s counter"));
    }

    #[test]
    fn test_comment_without_remarks_is_none() {
        let manager = SequenceManager::new();
        let seq = Sequence::new("SALES", "NEW_SEQ");
        assert!(manager.build_comment(&seq).is_none());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            SequenceError::EmptyName.to_string(),
            "Sequence name cannot be empty"
        );
        assert_eq!(
            SequenceError::UnknownPrecision("7 digits".to_string()).to_string(),
            "Unknown sequence precision: 7 digits"
        );
    }
}

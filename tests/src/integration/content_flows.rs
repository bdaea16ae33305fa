//! # Content Operation Flows
//!
//! ## Flows Tested
//!
//! 1. **Decode → validate → authorities → fee** through `ContentOperationsApi`
//! 2. **Golden scenarios**: underpaid platform, no-op update, partial backlink
//! 3. **Fee schedule replay**: historical heights priced by historical schedules
//! 4. **Forward compatibility**: unknown extensions survive a round trip

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use qc_18_content_operations::{
        codec, compute_fee, required_authorities, ContentOperationsApi, ContentValidationService,
        ExtensionEntry, Extensions, FeeParameters, FeeSchedule, FeeScheduleHistory, Operation,
        PostExtension, ServiceConfig, ValidationError, VoteFeeParameters,
    };
    use shared_types::{AuthorityTier, BLOCKCHAIN_PRECISION};

    use crate::support::*;

    fn service_with(schedule: FeeSchedule) -> ContentValidationService {
        init_test_logging();
        let history = FeeScheduleHistory::new(schedule).unwrap();
        ContentValidationService::with_config(ServiceConfig::default(), history)
    }

    // =========================================================================
    // GOLDEN SCENARIOS
    // =========================================================================

    #[test]
    fn test_underpaid_platform_create_rejected() {
        let mut schedule = FeeSchedule::default();
        schedule.platform_create = FeeParameters::new(1000, 0, 0, 10);
        let service = service_with(schedule);

        let op = platform_create(1005);
        assert!(codec::payload_len(&op).unwrap() <= 1024);
        assert_eq!(
            service.process(&op, 1),
            Err(ValidationError::InsufficientFee {
                required: 1010,
                claimed: 1005
            })
        );

        let paid = service.process(&platform_create(1010), 1).unwrap();
        assert_eq!(paid.required_fee, 1010);
        assert_eq!(paid.fee_payer, PLATFORM);
    }

    #[test]
    fn test_noop_post_update_rejected() {
        let service = ContentValidationService::new();
        let op = Operation::PostUpdate(post_update_op(i64::MAX));
        assert!(matches!(
            service.process(&op, 1),
            Err(ValidationError::InconsistentFields { .. })
        ));
    }

    #[test]
    fn test_partial_origin_rejected() {
        let service = ContentValidationService::new();
        let mut op = post_op(i64::MAX, "reply");
        op.origin_post_pid = Some(9);
        op.origin_platform = Some(PLATFORM);
        assert!(matches!(
            service.process(&Operation::Post(op), 1),
            Err(ValidationError::InconsistentFields { .. })
        ));
    }

    #[test]
    fn test_conflicting_vote_rejected() {
        let service = ContentValidationService::new();
        assert!(matches!(
            service.process(&vote(i64::MAX, &[5], &[5]), 1),
            Err(ValidationError::InconsistentFields { .. })
        ));
    }

    // =========================================================================
    // AUTHORITIES
    // =========================================================================

    #[test]
    fn test_post_requires_poster_and_platform_secondary() {
        let service = ContentValidationService::new();
        let validated = service.process(&post(i64::MAX, "body"), 1).unwrap();
        let expected = [
            (POSTER, AuthorityTier::Secondary),
            (PLATFORM, AuthorityTier::Secondary),
        ]
        .into_iter()
        .collect();
        assert_eq!(validated.required_authorities, expected);

        let mut update = post_update_op(i64::MAX);
        update.body = Some("edited".into());
        let validated = service.process(&Operation::PostUpdate(update), 1).unwrap();
        assert_eq!(validated.required_authorities, expected);
    }

    #[test]
    fn test_value_operations_require_active() {
        let service = ContentValidationService::new();
        for op in [platform_update(i64::MAX), vote(i64::MAX, &[PLATFORM], &[])] {
            let validated = service.process(&op, 1).unwrap();
            assert_eq!(validated.required_authorities.len(), 1);
            let (uid, tier) = validated.required_authorities.iter().next().copied().unwrap();
            assert_eq!(uid, op.fee_payer());
            assert_eq!(tier, AuthorityTier::Active);
        }
    }

    // =========================================================================
    // FEES
    // =========================================================================

    #[test]
    fn test_fee_grows_with_body_kbytes() {
        let schedule = FeeSchedule::default();
        let mut previous = 0;
        for kbytes in 0..8 {
            let op = post(0, &"x".repeat(kbytes * 1024));
            let size = codec::payload_len(&op).unwrap();
            let fee = compute_fee(&op, &schedule, size);
            assert!(fee >= previous);
            previous = fee;
        }
        // base 1 token, 8 started kbytes at 10 tokens each
        assert_eq!(previous, 81 * BLOCKCHAIN_PRECISION);
    }

    #[test]
    fn test_vote_priced_per_added_platform() {
        let mut schedule = FeeSchedule::default();
        schedule.platform_vote_update = VoteFeeParameters::new(100, 25, 0, 0);
        let service = service_with(schedule);

        let validated = service
            .process(&vote(175, &[11, 12, 13], &[14]), 1)
            .unwrap();
        assert_eq!(validated.required_fee, 175);
        assert!(service.process(&vote(174, &[11, 12, 13], &[]), 1).is_err());
    }

    #[test]
    fn test_extension_order_changes_bytes_not_fee() {
        let schedule = FeeSchedule::default();
        let mut ordered = post_op(0, "body");
        ordered.extensions = Extensions::from_entries(vec![
            PostExtension::LicenseId(4).to_entry(),
            ExtensionEntry::new(300, vec![1, 2, 3]),
        ]);
        let mut shuffled = ordered.clone();
        shuffled.extensions = Extensions::from_entries(vec![
            ExtensionEntry::new(300, vec![1, 2, 3]),
            PostExtension::LicenseId(4).to_entry(),
        ]);
        let ordered = Operation::Post(ordered);
        let shuffled = Operation::Post(shuffled);

        let fee = |op: &Operation| compute_fee(op, &schedule, codec::payload_len(op).unwrap());
        assert_eq!(fee(&ordered), fee(&shuffled));
        assert_ne!(codec::encode(&ordered).unwrap(), codec::encode(&shuffled).unwrap());
    }

    #[test]
    fn test_historical_schedule_used_for_replay() {
        init_test_logging();
        let mut history = FeeScheduleHistory::default();
        let mut upgraded = FeeSchedule::default();
        upgraded.post = FeeParameters::new(2 * BLOCKCHAIN_PRECISION, 0, 0, 0);
        history.schedule_upgrade(50_000, upgraded).unwrap();
        let service = ContentValidationService::with_config(ServiceConfig::default(), history);

        let op = post(0, "body");
        let before = service.process(&post(i64::MAX, "body"), 49_999).unwrap();
        let after = service.process(&post(i64::MAX, "body"), 50_000).unwrap();
        assert_eq!(before.required_fee, 11 * BLOCKCHAIN_PRECISION);
        assert_eq!(after.required_fee, 2 * BLOCKCHAIN_PRECISION);
        assert!(service.process(&op, 50_000).is_err());
    }

    #[test]
    fn test_schedule_loaded_from_json() {
        init_test_logging();
        let mut schedule = FeeSchedule::default();
        schedule.platform_update = FeeParameters::new(1, 500, 5_000, 0);
        let json = serde_json::json!({ "0": schedule }).to_string();
        let history = FeeScheduleHistory::from_json(&json).unwrap();
        let service = ContentValidationService::with_config(ServiceConfig::default(), history);

        // floor 500 discounted by 50%
        let validated = service.process(&platform_update(250), 1).unwrap();
        assert_eq!(validated.required_fee, 250);
        assert_eq!(validated.overpayment(), 0);
    }

    // =========================================================================
    // WIRE
    // =========================================================================

    #[test]
    fn test_encoded_round_trip_keeps_unknown_extension() {
        let service = ContentValidationService::new();
        let mut op = post_op(i64::MAX, "body");
        op.extensions.insert(
            PostExtension::PermissionFlags(7).id(),
            PostExtension::PermissionFlags(7).to_payload(),
        );
        op.extensions.insert(60_000, b"future".to_vec());
        let op = Operation::Post(op);

        let bytes = codec::encode(&op).unwrap();
        let decoded = codec::decode(&bytes).unwrap();
        assert_eq!(decoded, op);
        assert_eq!(codec::encode(&decoded).unwrap(), bytes);
        assert!(service.process_encoded(&bytes, 1).is_ok());
    }

    #[test]
    fn test_encoded_known_extension_with_bad_payload_rejected() {
        let service = ContentValidationService::new();
        let mut op = post_op(i64::MAX, "body");
        op.extensions.insert(PostExtension::ForwardPrice(0).id(), vec![0; 3]);
        let bytes = codec::encode(&Operation::Post(op)).unwrap();
        assert!(matches!(
            service.process_encoded(&bytes, 1),
            Err(ValidationError::UnknownRequiredExtension { id: 1, .. })
        ));
    }

    #[test]
    fn test_oversized_encoding_rejected() {
        init_test_logging();
        let config = ServiceConfig {
            max_operation_bytes: 64,
            ..ServiceConfig::default()
        };
        let service = ContentValidationService::with_config(config, FeeScheduleHistory::default());
        let bytes = codec::encode(&post(i64::MAX, "body")).unwrap();
        assert!(matches!(
            service.process_encoded(&bytes, 1),
            Err(ValidationError::MalformedField {
                field: "operation",
                ..
            })
        ));
    }

    // =========================================================================
    // BATCH
    // =========================================================================

    #[test]
    fn test_parallel_batch_matches_sequential() {
        init_test_logging();
        let ops: Vec<Operation> = (0..200)
            .map(|i| match i % 4 {
                0 => post(i64::MAX, &"y".repeat(i * 37)),
                1 => vote(i64::MAX, &[i as u64 + 1], &[]),
                2 => Operation::PostUpdate(post_update_op(i64::MAX)),
                _ => platform_create(0),
            })
            .collect();

        let parallel = ContentValidationService::new().process_batch(&ops, 10);
        let sequential: Vec<_> = {
            let service = ContentValidationService::with_config(
                ServiceConfig {
                    parallel_batch_threshold: usize::MAX,
                    ..ServiceConfig::default()
                },
                FeeScheduleHistory::default(),
            );
            ops.iter().map(|op| service.process(op, 10)).collect()
        };
        assert_eq!(parallel, sequential);
        assert_eq!(parallel.iter().filter(|r| r.is_err()).count(), 100);
    }

    proptest! {
        #[test]
        fn prop_overlapping_vote_sets_always_rejected(
            shared in 1u64..10_000,
            add in proptest::collection::btree_set(1u64..10_000, 0..6),
            remove in proptest::collection::btree_set(1u64..10_000, 0..6),
        ) {
            let mut add: Vec<_> = add.into_iter().collect();
            let mut remove: Vec<_> = remove.into_iter().collect();
            add.push(shared);
            remove.push(shared);
            let op = vote(i64::MAX, &add, &remove);
            let result = ContentValidationService::new().process(&op, 1);
            let rejected = matches!(result, Err(ValidationError::InconsistentFields { .. }));
            prop_assert!(rejected);
            prop_assert!(!required_authorities(&op).is_empty());
        }
    }
}

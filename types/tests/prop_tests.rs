use proptest::prelude::*;

use warden_types::{Amount, PrincipalId, Timestamp, RAW_PER_UNIT};

proptest! {
    /// Timestamp ordering: new(a) <= new(b) iff a <= b.
    #[test]
    fn timestamp_ordering(a in 0u64..u64::MAX, b in 0u64..u64::MAX) {
        let ta = Timestamp::new(a);
        let tb = Timestamp::new(b);
        prop_assert_eq!(ta <= tb, a <= b);
        prop_assert_eq!(ta == tb, a == b);
    }

    /// Timestamp elapsed_since: elapsed_since(now) = now - self (saturating).
    #[test]
    fn timestamp_elapsed_since(base in 0u64..1_000_000, offset in 0u64..1_000_000) {
        let t = Timestamp::new(base);
        let now = Timestamp::new(base + offset);
        prop_assert_eq!(t.elapsed_since(now), offset);
    }

    /// Timestamp elapsed_since saturates to 0 when now < self.
    #[test]
    fn timestamp_elapsed_since_saturates(
        base in 1u64..1_000_000,
        deficit in 1u64..1_000_000,
    ) {
        let later = Timestamp::new(base + deficit);
        let earlier = Timestamp::new(base);
        prop_assert_eq!(later.elapsed_since(earlier), 0);
    }

    /// Timestamp has_expired agrees with manual arithmetic.
    #[test]
    fn timestamp_has_expired_correct(
        start in 0u64..500_000,
        duration in 1u64..500_000,
        offset in 0u64..1_000_000,
    ) {
        let t = Timestamp::new(start);
        let now = Timestamp::new(start.saturating_add(offset));
        prop_assert_eq!(t.has_expired(duration, now), offset >= duration);
    }

    /// Amount: from_units scales by RAW_PER_UNIT.
    #[test]
    fn amount_unit_scaling(units in 0u128..1_000_000_000) {
        let amount = Amount::from_units(units);
        prop_assert_eq!(amount.raw(), units * RAW_PER_UNIT);
    }

    /// Amount: checked_add/checked_sub round-trip when no overflow occurs.
    #[test]
    fn amount_add_sub_inverse(a in 0u128..u64::MAX as u128, b in 0u128..u64::MAX as u128) {
        let x = Amount::new(a);
        let y = Amount::new(b);
        let sum = x.checked_add(y).unwrap();
        prop_assert_eq!(sum.checked_sub(y), Some(x));
    }

    /// Amount: saturating_sub never underflows.
    #[test]
    fn amount_saturating_sub_floor(a in 0u128..1_000_000, b in 0u128..1_000_000) {
        let diff = Amount::new(a).saturating_sub(Amount::new(b));
        prop_assert_eq!(diff.raw(), a.saturating_sub(b));
    }

    /// Amount bincode serialization roundtrip.
    #[test]
    fn amount_bincode_roundtrip(raw in 0u128..u128::MAX) {
        let amount = Amount::new(raw);
        let encoded = bincode::serialize(&amount).unwrap();
        let decoded: Amount = bincode::deserialize(&encoded).unwrap();
        prop_assert_eq!(decoded, amount);
    }

    /// PrincipalId: valid iff prefixed and longer than the prefix.
    #[test]
    fn principal_validity(suffix in "[a-z0-9]{0,16}") {
        let id = PrincipalId::new(format!("wdn_{suffix}"));
        prop_assert_eq!(id.is_valid(), !suffix.is_empty());
    }
}

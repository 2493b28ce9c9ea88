use proptest::prelude::*;

use warden_recovery::{RecoveryEngine, RequestStatus, VoteOutcome};
use warden_types::{PrincipalId, RecoveryClass, RecoveryParams, Timestamp};

fn p(i: usize) -> PrincipalId {
    PrincipalId::new(format!("wdn_g{i}"))
}

/// Engine with `n` guardians and one open emergency request.
fn engine_with_request(n: usize) -> (RecoveryEngine, u64) {
    let owner = PrincipalId::new("wdn_owner");
    let mut engine = RecoveryEngine::new(owner.clone(), RecoveryParams::default());
    for i in 0..n {
        engine.add_guardian(&owner, p(i)).unwrap();
    }
    let id = engine
        .open_request(
            &p(0),
            PrincipalId::new("wdn_phoenix"),
            RecoveryClass::Emergency,
            Timestamp::new(0),
        )
        .unwrap();
    (engine, id)
}

proptest! {
    /// current_weight is exactly the sum of support-vote weights, and the
    /// request executes on the crossing vote, never a later one.
    #[test]
    fn weight_accounting_and_quorum_crossing(
        n in 2usize..8,
        supports in prop::collection::vec(any::<bool>(), 2..8),
    ) {
        let (mut engine, id) = engine_with_request(n);
        let stake = engine.params().stake_amount;
        let required = engine.request(id).unwrap().required_weight;

        let mut expected_weight = 0u64;
        let mut executed = false;
        for (i, support) in supports.iter().copied().enumerate().take(n) {
            let reputation = engine.guardian(&p(i)).unwrap().reputation;
            let outcome = engine.vote(id, &p(i), support, stake, Timestamp::new(1));
            if executed {
                // Nothing is votable after execution.
                prop_assert!(outcome.is_err());
                continue;
            }
            let outcome = outcome.unwrap();
            if support {
                expected_weight += reputation;
            }
            if expected_weight >= required {
                prop_assert_eq!(&outcome, &VoteOutcome::Executed);
                executed = true;
            } else {
                prop_assert_eq!(&outcome, &VoteOutcome::Recorded {
                    current_weight: expected_weight,
                    required_weight: required,
                });
            }
            prop_assert_eq!(engine.request(id).unwrap().current_weight, expected_weight);
        }

        let status = engine.request(id).unwrap().status;
        prop_assert_eq!(executed, status == RequestStatus::Executed);
    }

    /// Stake is never lost: whatever was escrowed comes back as balances
    /// (plus bonuses on execution) at the terminal transition.
    #[test]
    fn stake_conservation_at_terminal(
        n in 2usize..8,
        supports in prop::collection::vec(any::<bool>(), 2..8),
        expire_instead in any::<bool>(),
    ) {
        let (mut engine, id) = engine_with_request(n);
        let stake = engine.params().stake_amount;
        let bonus = engine.params().vote_bonus;

        let mut voters = 0u128;
        for (i, support) in supports.iter().copied().enumerate().take(n) {
            // Force dissent when expiry is requested so quorum never lands.
            let support = support && !expire_instead;
            if engine.vote(id, &p(i), support, stake, Timestamp::new(1)).is_ok() {
                voters += 1;
            }
        }

        if engine.request(id).unwrap().status == RequestStatus::Open {
            let aged = Timestamp::new(engine.params().max_request_age_secs + 1);
            engine.expire_request(id, &p(0), aged).unwrap();
        }

        let status = engine.request(id).unwrap().status;
        let expected_per_voter = match status {
            RequestStatus::Executed => stake.checked_add(bonus).unwrap(),
            _ => stake,
        };
        let total: u128 = (0..n).map(|i| engine.balance(&p(i)).raw()).sum();
        prop_assert_eq!(total, voters * expected_per_voter.raw());

        // Every escrow is resolved and mirrored clear.
        for i in 0..n {
            prop_assert!(engine.guardian(&p(i)).unwrap().staked.is_zero());
        }
    }

    /// A terminal request never transitions again, whatever is thrown at it.
    #[test]
    fn terminal_is_absorbing(n in 2usize..6) {
        let (mut engine, id) = engine_with_request(n);
        let stake = engine.params().stake_amount;
        for i in 0..n {
            let _ = engine.vote(id, &p(i), true, stake, Timestamp::new(1));
        }
        prop_assert_eq!(engine.request(id).unwrap().status, RequestStatus::Executed);
        let owner_after = engine.current_owner().clone();

        let aged = Timestamp::new(engine.params().max_request_age_secs + 1);
        prop_assert!(engine.expire_request(id, &p(0), aged).is_err());
        prop_assert!(engine.vote(id, &p(0), true, stake, aged).is_err());
        prop_assert_eq!(engine.request(id).unwrap().status, RequestStatus::Executed);
        prop_assert_eq!(engine.current_owner(), &owner_after);
    }
}

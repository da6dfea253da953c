//! Edge case tests for the group ledger core, driven through the library API.

use expense_groups::{GroupCatalog, LedgerError, Money};
use std::str::FromStr;

fn money(s: &str) -> Money {
    Money::from_str(s).unwrap()
}

/// Build a catalog with one group and the given members.
fn catalog_with(group: &str, members: &[&str]) -> GroupCatalog {
    let mut catalog = GroupCatalog::new();
    catalog.add_group(group).unwrap();
    let g = catalog.find_group_mut(group).unwrap();
    for member in members {
        g.add_user(member).unwrap();
    }
    catalog
}

// ==================== CATALOG EDGE CASES ====================

#[test]
fn test_duplicate_group_leaves_exactly_one() {
    let mut catalog = GroupCatalog::new();
    catalog.add_group("trip").unwrap();
    assert!(matches!(
        catalog.add_group("trip"),
        Err(LedgerError::GroupExists(_))
    ));

    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.group_names().collect::<Vec<_>>(), vec!["trip"]);
}

#[test]
fn test_groups_are_independent() {
    let mut catalog = GroupCatalog::new();
    catalog.add_group("trip").unwrap();
    catalog.add_group("flat").unwrap();

    catalog.find_group_mut("trip").unwrap().add_user("alice").unwrap();
    catalog.find_group_mut("flat").unwrap().add_user("alice").unwrap();
    catalog
        .find_group_mut("trip")
        .unwrap()
        .post_xct("alice", money("10.0"))
        .unwrap();

    let trip = catalog.find_group("trip").unwrap();
    let flat = catalog.find_group("flat").unwrap();
    assert_eq!(trip.user_balance("alice").unwrap(), money("10.00"));
    assert_eq!(flat.user_balance("alice").unwrap(), Money::ZERO);
    assert_eq!(flat.recent_xct(10).count(), 0);
}

// ==================== BALANCE EDGE CASES ====================

#[test]
fn test_balance_is_sum_of_posted_amounts() {
    let mut catalog = catalog_with("trip", &["alice"]);
    let group = catalog.find_group_mut("trip").unwrap();

    let amounts = ["10.00", "-3.25", "0.01", "100.00", "-50.50"];
    for amount in amounts {
        group.post_xct("alice", money(amount)).unwrap();
    }

    let expected: Money = amounts.iter().map(|s| money(s)).sum();
    assert_eq!(group.user_balance("alice").unwrap(), expected);
    assert_eq!(group.user_balance("alice").unwrap().to_string(), "56.26");
}

#[test]
fn test_zero_amount_transaction_is_recorded() {
    let mut catalog = catalog_with("trip", &["alice"]);
    let group = catalog.find_group_mut("trip").unwrap();

    group.post_xct("alice", Money::ZERO).unwrap();
    assert_eq!(group.recent_xct(10).count(), 1);
    assert_eq!(group.user_balance("alice").unwrap(), Money::ZERO);
}

#[test]
fn test_balance_can_go_negative() {
    let mut catalog = catalog_with("trip", &["alice"]);
    let group = catalog.find_group_mut("trip").unwrap();

    group.post_xct("alice", money("-42.50")).unwrap();
    assert_eq!(group.user_balance("alice").unwrap().to_string(), "-42.50");
}

// ==================== ORDERING EDGE CASES ====================

#[test]
fn test_one_step_reposition_after_each_post() {
    let mut catalog = catalog_with("trip", &["carol", "bob", "alice"]);
    let group = catalog.find_group_mut("trip").unwrap();

    // List order starts alice, bob, carol (newest member at the front).
    group.post_xct("bob", money("3.0")).unwrap();
    group.post_xct("carol", money("7.0")).unwrap();

    // After each post the moved member sits at or below its successor.
    let order: Vec<String> = group.list_users().map(|(n, _)| n.to_string()).collect();
    assert_eq!(order, vec!["alice", "bob", "carol"]);
}

#[test]
fn test_large_post_moves_one_position_per_call() {
    let mut catalog = catalog_with("trip", &["carol", "bob", "alice"]);
    let group = catalog.find_group_mut("trip").unwrap();
    group.post_xct("bob", money("1.0")).unwrap();
    group.post_xct("carol", money("2.0")).unwrap();
    // List: alice(0), bob(1), carol(2).

    // One adjacent swap per call: alice overtakes bob only, then carol on
    // the next posting.
    group.post_xct("alice", money("99.0")).unwrap();
    let order: Vec<String> = group.list_users().map(|(n, _)| n.to_string()).collect();
    assert_eq!(order, vec!["bob", "alice", "carol"]);

    group.post_xct("alice", Money::ZERO).unwrap();
    let order: Vec<String> = group.list_users().map(|(n, _)| n.to_string()).collect();
    assert_eq!(order, vec!["bob", "carol", "alice"]);
}

// ==================== UNDER-PAID EDGE CASES ====================

#[test]
fn test_under_paid_returns_all_ties_at_minimum() {
    let mut catalog = catalog_with("trip", &["carol", "bob", "alice"]);
    let group = catalog.find_group_mut("trip").unwrap();
    group.post_xct("carol", money("10.0")).unwrap();
    group.post_xct("bob", money("5.0")).unwrap();
    group.post_xct("alice", money("5.0")).unwrap();

    let under: Vec<&str> = group.under_paid().unwrap().into_iter().map(|(n, _)| n).collect();
    assert_eq!(under, vec!["alice", "bob"]);
}

#[test]
fn test_under_paid_empty_group_fails() {
    let catalog = catalog_with("trip", &[]);
    let group = catalog.find_group("trip").unwrap();
    assert!(matches!(group.under_paid(), Err(LedgerError::EmptyRegistry)));
}

#[test]
fn test_under_paid_threshold_is_head_balance_not_true_minimum() {
    let mut catalog = catalog_with("trip", &["bob", "alice"]);
    let group = catalog.find_group_mut("trip").unwrap();

    // List: alice(0), bob(0). A negative post never moves a member
    // backward, so bob drops below the head while staying at the tail.
    group.post_xct("bob", money("-4.0")).unwrap();
    let order: Vec<String> = group.list_users().map(|(n, _)| n.to_string()).collect();
    assert_eq!(order, vec!["alice", "bob"]);

    // The threshold is the head balance (0), so everyone at or below it
    // is reported, including bob at -4 behind the head.
    let under: Vec<(String, String)> = group
        .under_paid()
        .unwrap()
        .into_iter()
        .map(|(n, b)| (n.to_string(), b.to_string()))
        .collect();
    assert_eq!(
        under,
        vec![
            ("alice".to_string(), "0.00".to_string()),
            ("bob".to_string(), "-4.00".to_string()),
        ]
    );
}

#[test]
fn test_under_paid_all_tied_returns_everyone() {
    let catalog = catalog_with("trip", &["carol", "bob", "alice"]);
    let group = catalog.find_group("trip").unwrap();

    assert_eq!(group.under_paid().unwrap().len(), 3);
}

// ==================== REMOVAL EDGE CASES ====================

#[test]
fn test_removal_purges_journal_and_readd_starts_fresh() {
    let mut catalog = catalog_with("trip", &["alice", "bob"]);
    let group = catalog.find_group_mut("trip").unwrap();
    group.post_xct("alice", money("10.0")).unwrap();
    group.post_xct("bob", money("4.0")).unwrap();
    group.post_xct("alice", money("6.0")).unwrap();

    group.remove_user("alice").unwrap();
    assert!(group.recent_xct(100).all(|e| e.user != "alice"));

    group.add_user("alice").unwrap();
    assert_eq!(group.user_balance("alice").unwrap(), Money::ZERO);
    assert!(group.recent_xct(100).all(|e| e.user != "alice"));
}

#[test]
fn test_remove_last_member_empties_registry() {
    let mut catalog = catalog_with("trip", &["alice"]);
    let group = catalog.find_group_mut("trip").unwrap();

    group.remove_user("alice").unwrap();
    assert_eq!(group.list_users().count(), 0);
    assert!(matches!(group.under_paid(), Err(LedgerError::EmptyRegistry)));
}

// ==================== JOURNAL EDGE CASES ====================

#[test]
fn test_recent_three_of_five_newest_first() {
    let mut catalog = catalog_with("trip", &["alice"]);
    let group = catalog.find_group_mut("trip").unwrap();
    for i in 1..=5 {
        group.post_xct("alice", money(&format!("{}.0", i))).unwrap();
    }

    let amounts: Vec<String> = group.recent_xct(3).map(|e| e.amount.to_string()).collect();
    assert_eq!(amounts, vec!["5.00", "4.00", "3.00"]);
}

#[test]
fn test_recent_on_empty_journal_is_empty_not_error() {
    let catalog = catalog_with("trip", &["alice"]);
    let group = catalog.find_group("trip").unwrap();
    assert_eq!(group.recent_xct(3).count(), 0);
}

#[test]
fn test_recent_zero_requests_nothing() {
    let mut catalog = catalog_with("trip", &["alice"]);
    let group = catalog.find_group_mut("trip").unwrap();
    group.post_xct("alice", money("1.0")).unwrap();

    assert_eq!(group.recent_xct(0).count(), 0);
}

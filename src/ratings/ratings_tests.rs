use super::*;

#[test]
fn test_empty_store() {
    let store = RatingStore::new();
    assert!(store.is_empty());
    assert_eq!(store.num_users(), 0);
    assert_eq!(store.num_ratings(), 0);
}

#[test]
fn test_add_rating_creates_row() {
    let mut store = RatingStore::new();
    store.add_rating(1, 100, 3.5);

    assert!(store.contains_user(1));
    assert_eq!(store.rating(1, 100), Some(3.5));
    assert_eq!(store.row(1).len(), 1);
}

#[test]
fn test_last_write_wins() {
    let mut store = RatingStore::new();
    store.add_rating(1, 100, 1.0);
    store.add_rating(1, 100, 4.0);

    assert_eq!(store.rating(1, 100), Some(4.0));
    assert_eq!(store.num_ratings(), 1);
}

#[test]
fn test_unknown_user_gets_empty_row() {
    let mut store = RatingStore::new();
    store.add_rating(1, 100, 1.0);

    let row = store.row(2);
    assert!(row.is_empty());
    assert_eq!(row.get(100), None);
    assert!(!store.contains_user(2));
    assert_eq!(store.rating(2, 100), None);
}

#[test]
fn test_users_ascending() {
    let mut store = RatingStore::new();
    for user in [5, -3, 12, 0] {
        store.add_rating(user, 1, 1.0);
    }
    let users: Vec<UserId> = store.users().collect();
    assert_eq!(users, vec![-3, 0, 5, 12]);
}

#[test]
fn test_row_iter_ascending_items() {
    let mut store = RatingStore::new();
    store.add_rating(1, 30, 3.0);
    store.add_rating(1, 10, 1.0);
    store.add_rating(1, 20, 2.0);

    let items: Vec<(ItemId, f32)> = store.row(1).iter().collect();
    assert_eq!(items, vec![(10, 1.0), (20, 2.0), (30, 3.0)]);
}

#[test]
fn test_row_display_sorted_one_decimal() {
    let mut store = RatingStore::new();
    store.add_rating(1, 42, 0.31);
    store.add_rating(1, 7, -1.0);
    store.add_rating(1, 100, 4.96);

    assert_eq!(
        store.row(1).to_string(),
        "{\n7: -1.0,\n42: 0.3,\n100: 5.0,\n}\n"
    );
}

#[test]
fn test_empty_row_display() {
    let store = RatingStore::new();
    assert_eq!(store.row(1).to_string(), "{\n}\n");
}

#[test]
fn test_row_min_max() {
    let mut store = RatingStore::new();
    store.add_rating(1, 1, 2.0);
    store.add_rating(1, 2, -4.0);
    store.add_rating(1, 3, 9.0);

    assert_eq!(store.row(1).min_max(), Some((-4.0, 9.0)));
    assert_eq!(RatingRow::new().min_max(), None);
}

#[test]
fn test_try_add_rating_rejects_non_finite() {
    let mut store = RatingStore::new();
    assert!(store.try_add_rating(1, 1, 2.0).is_ok());

    let err = store.try_add_rating(1, 2, f32::NAN).unwrap_err();
    assert!(matches!(
        err,
        CollabError::NonFiniteRating { user: 1, item: 2, .. }
    ));
    assert!(store.try_add_rating(1, 3, f32::NEG_INFINITY).is_err());

    assert_eq!(store.num_ratings(), 1);
}

#[test]
fn test_from_iterator_and_extend() {
    let mut store: RatingStore = vec![(1, 10, 1.0), (2, 10, 2.0), (1, 10, 3.0)]
        .into_iter()
        .collect();
    assert_eq!(store.num_users(), 2);
    assert_eq!(store.rating(1, 10), Some(3.0));

    store.extend([(3, 11, 5.0)]);
    assert_eq!(store.num_users(), 3);
    assert_eq!(store.num_ratings(), 3);
}

#[test]
fn test_iter_pairs_users_with_rows() {
    let mut store = RatingStore::new();
    store.add_rating(2, 1, 1.0);
    store.add_rating(1, 1, 1.0);
    store.add_rating(1, 2, 1.0);

    let sizes: Vec<(UserId, usize)> = store.iter().map(|(u, row)| (u, row.len())).collect();
    assert_eq!(sizes, vec![(1, 2), (2, 1)]);
}

#[test]
fn test_normalize_all_users_single_rating_collapses() {
    let mut store = RatingStore::new();
    store.add_rating(1, 42, 5.0);
    store.normalize_all_users();
    assert_eq!(store.rating(1, 42), Some(0.0));
}

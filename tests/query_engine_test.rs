//! Properties of the query pipeline: filtering, searching and sorting.

mod common;

use std::collections::HashSet;

use common::{record, scenario_dataset};
use reelscope::models::{Dataset, SortField, Summary};
use reelscope::query::{apply, QueryState, SortOrder};

fn query(search: &str, tier: Option<&str>, sort: Option<SortField>, order: SortOrder) -> QueryState {
    QueryState {
        search: search.to_string(),
        tier: tier.map(str::to_string),
        sort_field: sort,
        sort_order: order,
    }
}

fn view_ids(dataset: &Dataset, q: &QueryState) -> Vec<i64> {
    apply(dataset, q)
        .into_iter()
        .map(|idx| dataset.records()[idx].id)
        .collect()
}

fn sample_queries() -> Vec<QueryState> {
    vec![
        QueryState::default(),
        query("creator 1", None, None, SortOrder::Desc),
        query("", Some("A"), Some(SortField::ViewsCount), SortOrder::Asc),
        query("acct4", Some("B"), Some(SortField::AuthorName), SortOrder::Desc),
        query("no such creator", None, None, SortOrder::Asc),
        query("  CREATOR  ", Some("C"), Some(SortField::Id), SortOrder::Desc),
    ]
}

#[test]
fn test_filtered_view_is_subset_without_duplicates() {
    let dataset = scenario_dataset();
    for q in sample_queries() {
        let view = apply(&dataset, &q);
        assert!(view.len() <= dataset.len());
        assert!(view.iter().all(|&idx| idx < dataset.len()));
        let unique: HashSet<_> = view.iter().collect();
        assert_eq!(unique.len(), view.len(), "duplicate index for {q:?}");
    }
}

#[test]
fn test_filtering_is_idempotent() {
    let dataset = scenario_dataset();
    for q in sample_queries() {
        assert_eq!(apply(&dataset, &q), apply(&dataset, &q));
    }
}

#[test]
fn test_no_predicates_keeps_dataset_order() {
    let dataset = scenario_dataset();
    let expected: Vec<i64> = (1..=45).collect();
    assert_eq!(view_ids(&dataset, &QueryState::default()), expected);
    // Whitespace-only search is inactive
    assert_eq!(view_ids(&dataset, &query("   ", None, None, SortOrder::Desc)), expected);
}

#[test]
fn test_tier_filter_counts() {
    let dataset = scenario_dataset();
    assert_eq!(view_ids(&dataset, &query("", Some("A"), None, SortOrder::Desc)).len(), 20);
    assert_eq!(view_ids(&dataset, &query("", Some("B"), None, SortOrder::Desc)).len(), 25);
    // Tier matching is exact
    assert!(view_ids(&dataset, &query("", Some("a"), None, SortOrder::Desc)).is_empty());
}

#[test]
fn test_search_matches_caption_case_insensitively() {
    let mut only_caption = record(7, "Someone", "A", None);
    only_caption.account_id = Some("someone".to_string());
    only_caption.video_caption = Some("Learning the ABC song".to_string());
    let dataset = Dataset::new(
        Summary::default(),
        vec![record(1, "Other", "A", None), only_caption],
    );

    assert_eq!(view_ids(&dataset, &query("abc", None, None, SortOrder::Desc)), vec![7]);
}

#[test]
fn test_search_and_tier_combine() {
    let dataset = scenario_dataset();
    // "Creator 2" matches 2 and 20-29; tier B keeps 21-29
    let ids = view_ids(&dataset, &query("creator 2", Some("B"), None, SortOrder::Desc));
    assert_eq!(ids, (21..=29).collect::<Vec<_>>());
}

#[test]
fn test_missing_values_sort_last_in_both_directions() {
    let dataset = scenario_dataset();
    for order in [SortOrder::Desc, SortOrder::Asc] {
        let ids = view_ids(&dataset, &query("", Some("B"), Some(SortField::ViewsCount), order));
        assert_eq!(ids.len(), 25);
        assert_eq!(&ids[23..], &[30, 40], "{order:?}");
    }

    let desc = view_ids(&dataset, &query("", Some("B"), Some(SortField::ViewsCount), SortOrder::Desc));
    assert_eq!(&desc[..3], &[45, 44, 43]);
}

#[test]
fn test_adjacent_pairs_respect_sort_order() {
    let dataset = scenario_dataset();
    for order in [SortOrder::Desc, SortOrder::Asc] {
        let view = apply(&dataset, &query("", None, Some(SortField::ViewsCount), order));
        for pair in view.windows(2) {
            let a = dataset.records()[pair[0]].views_count;
            let b = dataset.records()[pair[1]].views_count;
            match (a, b) {
                (Some(a), Some(b)) => match order {
                    SortOrder::Desc => assert!(a >= b),
                    SortOrder::Asc => assert!(a <= b),
                },
                (None, Some(_)) => panic!("missing value sorted before a present one"),
                _ => {}
            }
        }
    }
}

#[test]
fn test_text_sort_ignores_case() {
    let dataset = Dataset::new(
        Summary::default(),
        vec![
            record(1, "bravo", "A", None),
            record(2, "Alpha", "A", None),
            record(3, "charlie", "A", None),
        ],
    );
    let asc = view_ids(&dataset, &query("", None, Some(SortField::AuthorName), SortOrder::Asc));
    assert_eq!(asc, vec![2, 1, 3]);
    let desc = view_ids(&dataset, &query("", None, Some(SortField::AuthorName), SortOrder::Desc));
    assert_eq!(desc, vec![3, 1, 2]);
}

#[test]
fn test_equal_keys_keep_dataset_order() {
    let dataset = Dataset::new(
        Summary::default(),
        (1..=6).map(|id| record(id, "same", "A", Some(10.0))).collect(),
    );
    let ids = view_ids(&dataset, &query("", None, Some(SortField::ViewsCount), SortOrder::Desc));
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_unknown_sort_key_behaves_like_no_sort() {
    let dataset = scenario_dataset();
    let unknown = query("", None, SortField::from_key("not_a_field"), SortOrder::Asc);
    assert_eq!(unknown.sort_field, None);
    assert_eq!(view_ids(&dataset, &unknown), view_ids(&dataset, &QueryState::default()));
}

#[test]
fn test_blank_name_sorts_before_text_and_null_sorts_last() {
    let dataset = Dataset::from_json_slice(
        br#"{"data": [
            {"id": 1, "author_name": "b"},
            {"id": 2, "author_name": ""},
            {"id": 3, "author_name": "a"},
            {"id": 4, "author_name": null}
        ]}"#,
    )
    .unwrap();

    let asc = query("", None, Some(SortField::AuthorName), SortOrder::Asc);
    assert_eq!(view_ids(&dataset, &asc), vec![2, 3, 1, 4]);

    let desc = query("", None, Some(SortField::AuthorName), SortOrder::Desc);
    assert_eq!(view_ids(&dataset, &desc), vec![1, 3, 2, 4]);
}

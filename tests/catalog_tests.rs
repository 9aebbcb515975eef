use std::collections::HashSet;

use portfolio::catalog::*;

fn bundled() -> Catalog {
    Catalog::bundled().expect("Bundled catalog should parse")
}

fn ids(records: &[&ProjectRecord]) -> Vec<u32> {
    records.iter().map(|r| r.id.0).collect()
}

#[test]
fn test_bundled_catalog_has_unique_ids() {
    let catalog = bundled();
    assert!(!catalog.is_empty(), "Bundled catalog should not be empty");

    let unique: HashSet<ProjectId> = catalog.records().iter().map(|r| r.id).collect();
    assert_eq!(
        unique.len(),
        catalog.len(),
        "Every project id should appear exactly once"
    );
}

#[test]
fn test_bundled_links_never_hold_placeholder() {
    let catalog = bundled();
    for record in catalog.records() {
        for link in [&record.github_url, &record.live_url].into_iter().flatten() {
            assert!(
                link != "#" && !link.trim().is_empty(),
                "Project {} kept a placeholder link",
                record.id
            );
        }
    }
}

#[test]
fn test_lookup_hit_and_miss() {
    let catalog = bundled();
    for record in catalog.records() {
        let found = catalog.find_by_id(record.id).expect("Listed id should resolve");
        assert_eq!(found, record);
        assert_eq!(
            catalog.find_by_key(&record.id.to_string()).map(|r| r.id),
            Some(record.id)
        );
    }

    assert!(catalog.find_by_id(ProjectId(999)).is_none(), "Unknown id should miss");
    assert!(catalog.find_by_key("999").is_none());
    assert!(catalog.find_by_key("not-a-number").is_none());
    assert!(catalog.find_by_key("").is_none());
}

#[test]
fn test_all_filter_with_blank_text_returns_everything() {
    let catalog = bundled();
    let all = catalog.query(CategoryFilter::All, "");
    assert_eq!(all.len(), catalog.len());
    assert_eq!(ids(&all), ids(&catalog.query(CategoryFilter::All, "   ")));
}

#[test]
fn test_category_filter_keeps_only_that_type() {
    let catalog = bundled();
    for kind in [ProjectType::Mobile, ProjectType::Web] {
        let results = catalog.query(CategoryFilter::Only(kind), "");
        assert!(!results.is_empty(), "{} projects expected", kind);
        assert!(
            results.iter().all(|r| r.kind == kind),
            "{} filter let another type through",
            kind
        );
    }

    let mobile = catalog.query(CategoryFilter::Only(ProjectType::Mobile), "").len();
    let web = catalog.query(CategoryFilter::Only(ProjectType::Web), "").len();
    assert_eq!(mobile + web, catalog.len(), "The two tabs partition the catalog");
}

#[test]
fn test_mobile_flutter_search() {
    let catalog = bundled();
    let results = catalog.query(CategoryFilter::Only(ProjectType::Mobile), "flutter");
    assert_eq!(ids(&results), vec![1, 3, 5, 7]);
}

#[test]
fn test_search_is_case_insensitive() {
    let catalog = bundled();
    let lower = ids(&catalog.query(CategoryFilter::All, "react"));
    let upper = ids(&catalog.query(CategoryFilter::All, "REACT"));
    let mixed = ids(&catalog.query(CategoryFilter::All, "ReAcT"));
    assert_eq!(lower, vec![2, 4, 6]);
    assert_eq!(lower, upper);
    assert_eq!(lower, mixed);
}

#[test]
fn test_padded_text_is_not_trimmed() {
    let catalog = bundled();
    // "JavaScript" contains "script" but never " script"
    assert_eq!(ids(&catalog.query(CategoryFilter::All, "script")), vec![2, 6, 8]);
    assert!(
        catalog.query(CategoryFilter::All, " script").is_empty(),
        "Leading space should be kept in the search text"
    );
    assert!(
        catalog.query(CategoryFilter::All, "  react ").is_empty(),
        "Padded text should be matched as written"
    );
}

#[test]
fn test_search_matches_any_technology_substring() {
    let catalog = bundled();
    // "Google Maps" on 1 and 5
    assert_eq!(ids(&catalog.query(CategoryFilter::All, "maps")), vec![1, 5]);
    // "JavaScript" on the web projects that list it
    assert_eq!(ids(&catalog.query(CategoryFilter::All, "java")), vec![2, 6, 8]);
}

#[test]
fn test_search_matches_title() {
    let catalog = bundled();
    assert_eq!(ids(&catalog.query(CategoryFilter::All, "market")), vec![1]);
}

#[test]
fn test_filter_and_text_combine() {
    let catalog = bundled();
    let web_firebase = catalog.query(CategoryFilter::Only(ProjectType::Web), "firebase");
    assert_eq!(ids(&web_firebase), vec![4]);

    let web_flutter = catalog.query(CategoryFilter::Only(ProjectType::Web), "FLUTTER");
    assert!(web_flutter.is_empty(), "No web project uses Flutter");
}

#[test]
fn test_no_match_returns_empty() {
    let catalog = bundled();
    assert!(catalog.query(CategoryFilter::All, "zzz").is_empty());
}

#[test]
fn test_results_keep_catalog_order() {
    let catalog = bundled();
    let order: Vec<u32> = catalog.records().iter().map(|r| r.id.0).collect();
    let results = ids(&catalog.query(CategoryFilter::All, "tailwind"));

    let positions: Vec<usize> = results
        .iter()
        .map(|id| order.iter().position(|o| o == id).expect("Result should be in catalog"))
        .collect();
    assert!(
        positions.windows(2).all(|w| w[0] < w[1]),
        "Results out of catalog order: {:?}",
        results
    );
}

#[test]
fn test_related_excludes_self_and_is_capped() {
    let catalog = bundled();
    for record in catalog.records() {
        let related = catalog.related_to(record);
        assert!(related.len() <= RELATED_LIMIT, "At most {} related", RELATED_LIMIT);
        assert!(
            related.iter().all(|r| r.id != record.id),
            "Project {} listed as related to itself",
            record.id
        );
        assert!(
            related.iter().all(|r| r.kind == record.kind),
            "Related projects should share the type of {}",
            record.id
        );
    }
}

#[test]
fn test_related_for_first_mobile_project() {
    let catalog = bundled();
    let first = catalog.find_by_id(ProjectId(1)).expect("Project 1 exists");
    assert_eq!(ids(&catalog.related_to(first)), vec![3, 5, 7]);
}

#[test]
fn test_featured_is_a_prefix() {
    let catalog = bundled();
    let featured = catalog.featured(FEATURED_COUNT);
    assert_eq!(featured.len(), FEATURED_COUNT.min(catalog.len()));
    assert_eq!(featured, &catalog.records()[..featured.len()]);
}

#[test]
fn test_links_outcomes_from_bundled_data() {
    let catalog = bundled();
    let links = |id| catalog.find_by_id(ProjectId(id)).map(ProjectRecord::links);

    assert!(matches!(links(2), Some(ProjectLinks::Both { .. })));
    assert!(matches!(links(4), Some(ProjectLinks::LiveOnly(_))));
    assert!(matches!(links(1), Some(ProjectLinks::RepoOnly(_))));
    assert_eq!(links(3), Some(ProjectLinks::None), "Both links are placeholders");
    assert_eq!(links(7), Some(ProjectLinks::None), "Placeholder repo, missing live");
}

use partyscope::catalog::{
    filter_parties, normalize, BrowseState, BrowseView, Catalog, CitationRef, RatingAxis,
    RatingTier, Segment,
};
use partyscope::report::{PartyReport, ReportLookup};

fn bundled() -> Catalog {
    Catalog::bundled().expect("bundled catalog loads")
}

#[test]
fn search_select_and_back_keeps_the_search_term() {
    let catalog = bundled();
    let mut state = BrowseState::default();

    state.search("green");
    let BrowseView::Listing(parties) = state.view(&catalog) else {
        panic!("expected listing");
    };
    let ids: Vec<_> = parties.iter().map(|party| party.id.as_str()).collect();
    assert_eq!(ids, ["greens"]);

    state.select("greens");
    let BrowseView::Detail(party) = state.view(&catalog) else {
        panic!("expected detail view");
    };
    let report = PartyReport::build(&catalog, party);
    let card_ratings: Vec<_> = report.card.ratings.iter().map(|rating| rating.score).collect();
    assert_eq!(card_ratings, [90, 90, 90, 90]);
    assert_eq!(report.timeline.as_ref().map(|timeline| timeline.events.len()), Some(5));

    state.back();
    assert_eq!(state.search_term, "green");
    assert!(matches!(state.view(&catalog), BrowseView::Listing(ref parties) if parties.len() == 1));
}

#[test]
fn empty_search_lists_every_party_in_catalog_order() {
    let catalog = bundled();
    let ids: Vec<_> = filter_parties(catalog.parties(), "")
        .iter()
        .map(|party| party.id.as_str())
        .collect();
    assert_eq!(
        ids,
        [
            "labor",
            "coalition",
            "greens",
            "one-nation",
            "australia-voice",
            "democrats",
            "teal-independents",
            "uap",
            "reason-party",
            "socialist-alliance",
        ]
    );
    assert!(filter_parties(catalog.parties(), "zzz").is_empty());
}

#[test]
fn labor_narrative_resolves_against_its_own_citations() {
    let catalog = bundled();
    let labor = catalog.party("labor").expect("labor is bundled");
    let report = PartyReport::build(&catalog, labor);
    let section = report
        .section(RatingAxis::Inclusivity)
        .expect("inclusivity section");

    let citations: Vec<_> = section
        .narrative
        .iter()
        .filter_map(|segment| match segment {
            Segment::Citation(reference) => Some(*reference),
            Segment::Text { .. } => None,
        })
        .collect();
    assert_eq!(
        citations,
        [CitationRef {
            index: 2,
            url: "https://www.abc.net.au/news/2022-08-12/labor-delays-religious-discrimination-laws-until-2023/101328118",
        }]
    );
}

#[test]
fn parties_without_timeline_or_highlights_render_without_them() {
    let catalog = bundled();
    let ReportLookup::Found(report) = ReportLookup::find(&catalog, "democrats") else {
        panic!("democrats is bundled");
    };
    assert!(report.timeline.is_none());
    assert!(report.sections.iter().all(|section| section.highlights.is_empty()));
    assert!(report.references.is_empty());
}

#[test]
fn unknown_report_id_is_not_found() {
    let catalog = bundled();
    assert!(matches!(
        ReportLookup::find(&catalog, "whigs"),
        ReportLookup::NotFound { ref party_id } if party_id == "whigs"
    ));
}

#[test]
fn off_axis_labels_still_use_the_global_table() {
    let catalog = bundled();
    let uap = catalog.party("uap").expect("uap is bundled");
    let rating = normalize(uap.rating(RatingAxis::ConflictStance));
    assert_eq!(rating.score, 50);
    assert_eq!(rating.tier, RatingTier::Poor);
}

#[test]
fn unrecognised_labels_use_the_default_tier() {
    for label in ["", "N/A", "Unrated"] {
        let rating = normalize(label);
        assert_eq!((rating.score, rating.tier), (60, RatingTier::Default), "{label:?}");
    }
}

#[test]
fn rating_labels_match_case_insensitively() {
    assert_eq!(normalize("Excellent"), normalize("EXCELLENT"));
    assert_eq!(normalize("excellent").score, 90);
}

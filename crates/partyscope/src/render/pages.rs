use super::{attr, layout, narrative, rating_badge, Html};
use crate::catalog::{BrowseState, BrowseView, Catalog};
use crate::comparison::ALL_CATEGORIES;
use crate::comparison::views::{ComparisonView, IssueRowView, PartyCellView};
use crate::report::{
    report_index, AxisSection, LeaningView, PartyCardView, PartyReport, StatsView, TimelineView,
};

const NO_POSITION: &str = "No position stated on this issue";

/// Catalog home: the filtered card grid, or one party's detail view.
pub fn home_page(catalog: &Catalog, state: &BrowseState) -> String {
    let back = BrowseState::with_search(state.search_term.clone());
    let back_href = format!("/{}", back.query_string());

    let mut w = Html::new();
    let title = match state.view(catalog) {
        BrowseView::Listing(parties) => {
            search_form(&mut w, "/", &state.search_term, "Search parties...");
            if parties.is_empty() {
                w.push("<p class=\"muted\">No parties match \"")
                    .text(&state.search_term)
                    .push("\".</p>");
            }
            w.push("<div class=\"grid\">");
            for party in parties {
                let mut selected = back.clone();
                selected.select(party.id.as_str());
                party_card(&mut w, &PartyCardView::new(party), &format!("/{}", selected.query_string()));
            }
            w.push("</div>");
            "Political Parties".to_string()
        }
        BrowseView::Detail(party) => {
            back_link(&mut w, &back_href, "Back to all parties");
            party_report_body(&mut w, &PartyReport::build(catalog, party));
            party.name.clone()
        }
        BrowseView::NotFound(party_id) => {
            not_found_body(&mut w, party_id, &back_href, "Back to all parties");
            "Party not found".to_string()
        }
    };

    layout(&title, &w.finish())
}

pub fn reports_index_page(catalog: &Catalog) -> String {
    let mut w = Html::new();
    w.push("<h1>Party Reports</h1><div class=\"grid\">");
    for entry in report_index(catalog) {
        w.push("<a class=\"report-entry\" href=\"")
            .push(attr(&entry.href))
            .push("\">");
        logo(&mut w, entry.logo, entry.name);
        w.push("<h2>")
            .text(entry.name)
            .push("</h2><span class=\"badge\">")
            .text(entry.type_label)
            .push("</span><div>");
        rating_badge(&mut w, &entry.inclusivity);
        rating_badge(&mut w, &entry.conflict_stance);
        w.push("</div><p>").text(entry.summary).push("</p></a>");
    }
    w.push("</div>");
    layout("Party Reports", &w.finish())
}

pub fn party_report_page(report: &PartyReport<'_>) -> String {
    let mut w = Html::new();
    back_link(&mut w, "/reports", "Back to all reports");
    party_report_body(&mut w, report);
    layout(report.card.name, &w.finish())
}

/// Rendered for report lookups whose party id is not in the catalog.
pub fn not_found_page(party_id: &str) -> String {
    let mut w = Html::new();
    not_found_body(&mut w, party_id, "/reports", "Back to all reports");
    layout("Party not found", &w.finish())
}

pub fn comparison_page(view: &ComparisonView<'_>) -> String {
    let mut w = Html::new();
    w.push("<h1>Compare Party Positions</h1>")
        .push("<form method=\"get\" action=\"/compare\"><input type=\"search\" name=\"q\" value=\"")
        .push(attr(view.search))
        .push("\" placeholder=\"Search issues...\"><select name=\"category\">");
    for category in &view.categories {
        w.push("<option value=\"").push(attr(category)).push("\"");
        if *category == view.category {
            w.push(" selected");
        }
        let label = if *category == ALL_CATEGORIES {
            "All Categories"
        } else {
            *category
        };
        w.push(">").text(label).push("</option>");
    }
    w.push("</select><button type=\"submit\">Filter</button></form>");

    if view.issues.is_empty() {
        w.push("<p class=\"muted\">No issues match the current filters.</p>");
    }
    for row in &view.issues {
        issue_cards(&mut w, row);
    }
    if !view.issues.is_empty() {
        issue_table(&mut w, &view.issues);
    }

    layout("Compare Party Positions", &w.finish())
}

fn search_form(w: &mut Html, action: &str, term: &str, placeholder: &str) {
    w.push("<form method=\"get\" action=\"")
        .push(attr(action))
        .push("\"><input type=\"search\" name=\"q\" value=\"")
        .push(attr(term))
        .push("\" placeholder=\"")
        .push(attr(placeholder))
        .push("\"><button type=\"submit\">Search</button></form>");
}

fn back_link(w: &mut Html, href: &str, label: &str) {
    w.push("<p><a class=\"back\" href=\"")
        .push(attr(href))
        .push("\">&larr; ")
        .text(label)
        .push("</a></p>");
}

fn not_found_body(w: &mut Html, party_id: &str, back_href: &str, back_label: &str) {
    w.push("<section class=\"not-found\"><h1>Party not found</h1><p>No party with id \"")
        .text(party_id)
        .push("\" exists in the catalog.</p>");
    back_link(w, back_href, back_label);
    w.push("</section>");
}

fn logo(w: &mut Html, logo: Option<&str>, name: &str) {
    if let Some(url) = logo {
        w.push("<img class=\"logo\" src=\"")
            .push(attr(url))
            .push("\" alt=\"")
            .push(attr(name))
            .push(" logo\" width=\"48\" height=\"48\">");
    }
}

fn leaning_bar(w: &mut Html, leaning: &LeaningView) {
    w.push("<div class=\"leaning-row\"><span>Left</span><div class=\"leaning\"><span class=\"leaning-marker\" style=\"left:")
        .push(format!("{}%", leaning.marker_pct))
        .push("\"></span></div><span>Right</span><span class=\"leaning-band\">")
        .text(leaning.band)
        .push("</span></div>");
}

fn party_card(w: &mut Html, card: &PartyCardView<'_>, href: &str) {
    w.push("<article class=\"party-card\" style=\"border-top:4px solid ")
        .push(attr(card.color))
        .push("\" onclick=\"location.href=this.dataset.href\" data-href=\"")
        .push(attr(href))
        .push("\">");
    logo(w, card.logo, card.name);
    w.push("<h2><a href=\"")
        .push(attr(href))
        .push("\">")
        .text(card.name)
        .push("</a></h2><span class=\"badge\">")
        .text(card.type_label)
        .push("</span>");
    leaning_bar(w, &card.leaning);
    w.push("<div class=\"ratings\">");
    for rating in &card.ratings {
        rating_badge(w, rating);
    }
    w.push("</div><p>").text(card.summary).push("</p>");
    if let Some(candidate) = card.candidate {
        w.push("<p class=\"candidate\">")
            .text(&candidate.name)
            .push(", ")
            .text(&candidate.role)
            .push("</p>");
    }
    w.push("<a href=\"")
        .push(attr(card.website_url))
        .push("\" target=\"_blank\" rel=\"noopener noreferrer\" onclick=\"event.stopPropagation()\">Official website</a></article>");
}

fn stats_block(w: &mut Html, stats: &StatsView<'_>) {
    w.push("<dl class=\"stats\"><dt>Historic Win Rate</dt><dd>")
        .text(&stats.historic_win_rate_display)
        .push("<div class=\"win-rate\"><span class=\"win-rate-")
        .push(stats.win_rate_band.as_str())
        .push("\" style=\"width:")
        .push(format!("{:.0}%", (stats.historic_win_rate * 100.0).clamp(0.0, 100.0)))
        .push("\"></span></div><small>")
        .text(stats.historic_win_rate_calculation)
        .push("</small></dd><dt>National Popularity</dt><dd>")
        .text(&stats.national_popularity_display)
        .push("<small>")
        .text(stats.national_popularity_calculation)
        .push("</small></dd></dl>");
}

fn axis_section(w: &mut Html, section: &AxisSection<'_>) {
    w.push("<section class=\"axis\" id=\"")
        .push(section.rating.axis.slug())
        .push("\"><h2>")
        .text(section.rating.axis_label)
        .push("</h2>");
    rating_badge(w, &section.rating);
    w.push("<p class=\"summary\">").text(section.summary).push("</p>");
    narrative(w, &section.narrative);
    if !section.highlights.is_empty() {
        w.push("<h3>").text(section.highlights_heading).push("</h3><ul>");
        for item in section.highlights {
            w.push("<li>").text(item).push("</li>");
        }
        w.push("</ul>");
    }
    w.push("</section>");
}

fn timeline_block(w: &mut Html, timeline: &TimelineView<'_>) {
    w.push("<section class=\"timeline\"><h2>")
        .text(timeline.title)
        .push("</h2><ol>");
    for event in timeline.events {
        w.push("<li><time>")
            .text(&event.date)
            .push("</time> ");
        if let Some(title) = &event.title {
            w.push("<strong>").text(title).push("</strong> ");
        }
        w.text(&event.description)
            .push("</li>");
    }
    w.push("</ol></section>");
}

fn party_report_body(w: &mut Html, report: &PartyReport<'_>) {
    let card = &report.card;
    w.push("<article class=\"report\" style=\"border-top:6px solid ")
        .push(attr(card.color))
        .push("\">");
    logo(w, card.logo, card.name);
    w.push("<h1>")
        .text(card.name)
        .push("</h1><span class=\"badge\">")
        .text(card.type_label)
        .push("</span>");
    leaning_bar(w, &card.leaning);
    stats_block(w, &report.stats);
    for section in &report.sections {
        axis_section(w, section);
    }
    if let Some(timeline) = &report.timeline {
        timeline_block(w, timeline);
    }
    if !report.references.is_empty() {
        w.push("<section class=\"references\"><h2>References</h2><ol>");
        for citation in report.references {
            w.push("<li id=\"ref-")
                .push(citation.id.to_string())
                .push("\">[")
                .push(citation.id.to_string())
                .push("] <a href=\"")
                .push(attr(&citation.url))
                .push("\" target=\"_blank\" rel=\"noopener noreferrer\">")
                .text(&citation.text)
                .push("</a></li>");
        }
        w.push("</ol></section>");
    }
    w.push("<p><a href=\"")
        .push(attr(card.website_url))
        .push("\" target=\"_blank\" rel=\"noopener noreferrer\">Official website</a></p></article>");
}

fn initials_chip(w: &mut Html, cell: &PartyCellView<'_>) {
    w.push("<span class=\"initials\" style=\"background:")
        .push(attr(cell.color))
        .push("\" title=\"")
        .push(attr(cell.party_name))
        .push("\">")
        .text(&cell.initials)
        .push("</span>");
}

fn issue_cards(w: &mut Html, row: &IssueRowView<'_>) {
    w.push("<section class=\"issue\" id=\"issue-")
        .push(attr(&row.issue.id))
        .push("\"><h2>")
        .text(&row.issue.name)
        .push("</h2><span class=\"badge\">")
        .text(&row.issue.category)
        .push("</span><p>")
        .text(&row.issue.description)
        .push("</p><div class=\"grid\">");
    for cell in &row.parties {
        match &cell.position {
            Some(position) => {
                w.push("<div class=\"position-card bucket-")
                    .push(position.bucket.as_str())
                    .push("\">");
                initials_chip(w, cell);
                w.push("<h3>")
                    .text(cell.party_name)
                    .push("</h3><span class=\"badge ")
                    .push(position.stance.css_class())
                    .push("\">")
                    .text(position.stance_label)
                    .push("</span><p>")
                    .text(position.summary)
                    .push("</p>");
                if !position.key_points.is_empty() {
                    w.push("<ul>");
                    for point in position.key_points {
                        w.push("<li>").text(point).push("</li>");
                    }
                    w.push("</ul>");
                }
                if let Some(record) = position.voting_record {
                    w.push("<p class=\"voting-record\">").text(record).push("</p>");
                }
                if let Some(url) = position.source_url {
                    w.push("<a href=\"")
                        .push(attr(url))
                        .push("\" target=\"_blank\" rel=\"noopener noreferrer\">Source</a>");
                }
                w.push("</div>");
            }
            None => {
                w.push("<div class=\"position-card no-position\">");
                initials_chip(w, cell);
                w.push("<h3>")
                    .text(cell.party_name)
                    .push("</h3><p class=\"muted\">")
                    .push(NO_POSITION)
                    .push("</p></div>");
            }
        }
    }
    w.push("</div></section>");
}

fn issue_table(w: &mut Html, rows: &[IssueRowView<'_>]) {
    let Some(first) = rows.first() else {
        return;
    };
    w.push("<table class=\"comparison\"><thead><tr><th>Issue</th>");
    for cell in &first.parties {
        w.push("<th>").text(cell.party_name).push("</th>");
    }
    w.push("</tr></thead><tbody>");
    for row in rows {
        w.push("<tr><th scope=\"row\">").text(&row.issue.name).push("</th>");
        for cell in &row.parties {
            match &cell.position {
                Some(position) => {
                    w.push("<td><span class=\"badge ")
                        .push(position.stance.css_class())
                        .push("\">")
                        .text(position.stance_label)
                        .push("</span></td>");
                }
                None => {
                    w.push("<td class=\"muted\">No position</td>");
                }
            }
        }
        w.push("</tr>");
    }
    w.push("</tbody></table>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_support::party;
    use crate::catalog::{Issue, PartyPosition, Stance};
    use crate::comparison::{CategoryFilter, IssueQuery};

    fn catalog() -> Catalog {
        let issues = vec![Issue {
            id: "healthcare".to_string(),
            name: "Healthcare".to_string(),
            category: "Domestic Policy".to_string(),
            description: "Public hospitals".to_string(),
        }];
        let positions = vec![PartyPosition {
            party_id: "labor".to_string(),
            issue_id: "healthcare".to_string(),
            stance: Stance::StronglySupportive,
            summary: "Expand Medicare".to_string(),
            key_points: vec!["Bulk billing".to_string()],
            voting_record: None,
            source_url: None,
        }];
        Catalog::new(
            vec![
                party("labor", "Australian Labor Party"),
                party("greens", "Australian Greens"),
            ],
            issues,
            positions,
        )
        .expect("catalog builds")
    }

    #[test]
    fn detail_view_links_back_with_search_term() {
        let catalog = catalog();
        let mut state = BrowseState::with_search("green");
        state.select("greens");
        let html = home_page(&catalog, &state);
        assert!(html.contains("href=\"/?q=green\""));
        assert!(html.contains("<h1>Australian Greens</h1>"));
    }

    #[test]
    fn listing_links_cards_to_detail() {
        let catalog = catalog();
        let html = home_page(&catalog, &BrowseState::with_search("green"));
        assert!(html.contains("/?q=green&amp;party=greens"));
        assert!(!html.contains("Australian Labor Party"));
    }

    #[test]
    fn unknown_selection_renders_not_found() {
        let catalog = catalog();
        let mut state = BrowseState::default();
        state.select("whigs");
        let html = home_page(&catalog, &state);
        assert!(html.contains("Party not found"));
        assert!(html.contains("No party with id \"whigs\""));
    }

    #[test]
    fn comparison_marks_absent_positions() {
        let catalog = catalog();
        let query = IssueQuery::new("", CategoryFilter::All);
        let html = comparison_page(&ComparisonView::build(&catalog, &query));
        assert!(html.contains("bucket-supportive"));
        assert!(html.contains("stance-strongly-supportive"));
        assert!(html.contains(NO_POSITION));
        assert!(html.contains("<td class=\"muted\">No position</td>"));
        assert!(html.contains(">AG</span>"));
    }

    #[test]
    fn report_page_omits_missing_timeline() {
        let catalog = catalog();
        let html = party_report_page(&PartyReport::build(&catalog, &catalog.parties()[0]));
        assert!(!html.contains("Timeline of Key Actions"));
        assert!(html.contains("Back to all reports"));
    }
}

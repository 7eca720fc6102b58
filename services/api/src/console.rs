use crate::infra::load_catalog;
use clap::Args;
use partyscope::catalog::citations::to_plain_text;
use partyscope::catalog::{filter_parties, Catalog};
use partyscope::comparison::views::ComparisonView;
use partyscope::comparison::{CategoryFilter, IssueQuery};
use partyscope::config::AppConfig;
use partyscope::error::AppError;
use partyscope::report::{PartyCardView, PartyReport, ReportLookup};
use partyscope::telemetry::{self, LogSink};
use std::io::{self, Write};
use std::process::ExitCode;

#[derive(Args, Debug, Default)]
pub(crate) struct PartiesArgs {
    /// Case-insensitive substring of the party name
    #[arg(long)]
    pub(crate) search: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    /// Party id, e.g. `greens`
    pub(crate) party_id: String,
}

#[derive(Args, Debug, Default)]
pub(crate) struct CompareArgs {
    /// Case-insensitive substring of the issue name
    #[arg(long)]
    pub(crate) search: Option<String>,
    /// Issue category, or `all`
    #[arg(long)]
    pub(crate) category: Option<String>,
}

/// Config, stderr logging and the catalog, for one-shot commands.
fn prepare() -> Result<Catalog, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry, LogSink::Stderr)?;
    Ok(load_catalog(config.catalog.path.as_deref())?)
}

pub(crate) fn run_parties(args: PartiesArgs) -> Result<ExitCode, AppError> {
    let catalog = prepare()?;
    let mut out = io::stdout().lock();
    write_parties(&catalog, args.search.as_deref().unwrap_or_default(), &mut out)?;
    Ok(ExitCode::SUCCESS)
}

pub(crate) fn run_report(args: ReportArgs) -> Result<ExitCode, AppError> {
    let catalog = prepare()?;
    match ReportLookup::find(&catalog, &args.party_id) {
        ReportLookup::Found(report) => {
            let mut out = io::stdout().lock();
            write_report(&report, &mut out)?;
            Ok(ExitCode::SUCCESS)
        }
        ReportLookup::NotFound { party_id } => {
            eprintln!("party '{party_id}' not found");
            Ok(ExitCode::FAILURE)
        }
    }
}

pub(crate) fn run_compare(args: CompareArgs) -> Result<ExitCode, AppError> {
    let catalog = prepare()?;
    let query = IssueQuery::new(
        args.search.unwrap_or_default(),
        CategoryFilter::from(args.category.unwrap_or_default()),
    );
    let mut out = io::stdout().lock();
    write_comparison(&ComparisonView::build(&catalog, &query), &mut out)?;
    Ok(ExitCode::SUCCESS)
}

pub(crate) fn write_parties<W: Write>(catalog: &Catalog, search: &str, out: &mut W) -> io::Result<()> {
    let parties = filter_parties(catalog.parties(), search);
    if parties.is_empty() {
        writeln!(out, "No parties match \"{search}\".")?;
        return Ok(());
    }

    for party in parties {
        let card = PartyCardView::new(party);
        writeln!(out, "{} ({}) [{}]", card.name, card.type_label, card.id)?;
        writeln!(out, "  leaning: {} ({})", card.leaning.value, card.leaning.band)?;
        for rating in &card.ratings {
            writeln!(
                out,
                "  {}: {} ({}/100, {})",
                rating.axis_label,
                rating.label,
                rating.score,
                rating.tier.as_str()
            )?;
        }
    }
    Ok(())
}

pub(crate) fn write_report<W: Write>(report: &PartyReport<'_>, out: &mut W) -> io::Result<()> {
    let card = &report.card;
    writeln!(out, "{} ({})", card.name, card.type_label)?;
    writeln!(out, "Website: {}", card.website_url)?;
    writeln!(out, "Political leaning: {} ({})", card.leaning.value, card.leaning.band)?;
    writeln!(
        out,
        "Historic win rate: {} ({})",
        report.stats.historic_win_rate_display, report.stats.historic_win_rate_calculation
    )?;
    writeln!(
        out,
        "National popularity: {} ({})",
        report.stats.national_popularity_display, report.stats.national_popularity_calculation
    )?;

    for section in &report.sections {
        writeln!(out)?;
        writeln!(
            out,
            "== {}: {} ({}/100, {}) ==",
            section.rating.axis_label,
            section.rating.label,
            section.rating.score,
            section.rating.tier.as_str()
        )?;
        writeln!(out, "{}", section.summary)?;
        writeln!(out, "{}", to_plain_text(&section.narrative))?;
        if !section.highlights.is_empty() {
            writeln!(out, "{}:", section.highlights_heading)?;
            for item in section.highlights {
                writeln!(out, "  - {item}")?;
            }
        }
    }

    if let Some(timeline) = &report.timeline {
        writeln!(out)?;
        writeln!(out, "== {} ==", timeline.title)?;
        for event in timeline.events {
            match &event.title {
                Some(title) => writeln!(out, "  {}: {title}. {}", event.date, event.description)?,
                None => writeln!(out, "  {}: {}", event.date, event.description)?,
            }
        }
    }

    if !report.references.is_empty() {
        writeln!(out)?;
        writeln!(out, "References:")?;
        for citation in report.references {
            writeln!(out, "  [{}] {} <{}>", citation.id, citation.text, citation.url)?;
        }
    }
    Ok(())
}

pub(crate) fn write_comparison<W: Write>(view: &ComparisonView<'_>, out: &mut W) -> io::Result<()> {
    if view.issues.is_empty() {
        writeln!(out, "No issues match the current filters.")?;
        return Ok(());
    }

    for row in &view.issues {
        writeln!(out, "{} [{}]", row.issue.name, row.issue.category)?;
        for cell in &row.parties {
            match &cell.position {
                Some(position) => writeln!(
                    out,
                    "  {} ({}): {}: {}",
                    cell.party_name, cell.initials, position.stance_label, position.summary
                )?,
                None => writeln!(
                    out,
                    "  {} ({}): No position stated on this issue",
                    cell.party_name, cell.initials
                )?,
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundled() -> Catalog {
        Catalog::bundled().expect("bundled catalog loads")
    }

    fn render<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        let mut buf = Vec::new();
        f(&mut buf).expect("write succeeds");
        String::from_utf8(buf).expect("utf8 output")
    }

    #[test]
    fn parties_listing_honours_search() {
        let catalog = bundled();
        let output = render(|out| write_parties(&catalog, "green", out));
        assert!(output.starts_with("Australian Greens (Minor Party) [greens]"));
        assert!(!output.contains("Labor"));

        let output = render(|out| write_parties(&catalog, "zzz", out));
        assert_eq!(output, "No parties match \"zzz\".\n");
    }

    #[test]
    fn report_lists_ratings_timeline_and_references() {
        let catalog = bundled();
        let ReportLookup::Found(report) = ReportLookup::find(&catalog, "labor") else {
            panic!("labor is bundled");
        };
        let output = render(|out| write_report(&report, out));
        assert!(output.contains("Historic win rate: 48%"));
        assert!(output.contains("National popularity: 36%"));
        assert!(output.contains("== Gaza Stance: Mixed (70/100, moderate) =="));
        assert!(output.contains("== Timeline of Key Actions =="));
        assert!(output.contains("References:"));
    }

    #[test]
    fn report_timeline_prints_event_titles() {
        let catalog = bundled();
        let ReportLookup::Found(report) = ReportLookup::find(&catalog, "one-nation") else {
            panic!("one-nation is bundled");
        };
        let output = render(|out| write_report(&report, out));
        assert!(output.contains("  Aug 2017: Burqa Stunt. Pauline Hanson wore a burqa"));
    }

    #[test]
    fn comparison_shows_absent_positions() {
        let catalog = bundled();
        let query = IssueQuery::new("", CategoryFilter::Only("Foreign Policy".to_string()));
        let output = render(|out| write_comparison(&ComparisonView::build(&catalog, &query), out));
        assert!(output.contains("Gaza Conflict Stance [Foreign Policy]"));
        assert!(output.contains("Palestinian State Recognition [Foreign Policy]"));
        assert!(output.contains("Reason Party (RP): No position stated on this issue"));
        assert!(!output.contains("Healthcare"));
    }
}

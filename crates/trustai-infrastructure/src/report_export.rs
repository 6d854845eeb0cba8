//! Plain-text report rendering and export.
//!
//! Produces the downloadable rendition of a report with a fixed section
//! order, and writes it to `TrustAI_Report.txt`.

use std::path::{Path, PathBuf};

use trustai_core::report::ReportData;

/// Default file name for exported reports.
pub const REPORT_FILE_NAME: &str = "TrustAI_Report.txt";

/// Renders a report as plain text with the fixed export layout.
pub fn render_report_text(report: &ReportData) -> String {
    let mut content = String::from("TRUST AI CREDIBILITY REPORT\n=========================\n\n");
    content.push_str(&format!(
        "STATUS: {} (Score: {}/100, Confidence: {}%)\n\n",
        report.credibility.status, report.credibility.score, report.credibility.confidence
    ));
    content.push_str(&format!(
        "SUMMARY\n-------\n{}\n\nEXPLANATION\n-----------\n{}\n\n",
        report.summary.overview, report.summary.explanation
    ));
    content.push_str(&format!(
        "SENTIMENT & BIAS\n----------------\nTone: {}\nBias: {}\n\n",
        report.sentiment_analysis.tone, report.sentiment_analysis.bias
    ));
    content.push_str(&format!(
        "FACT CHECKS ({})\n-------------\n",
        report.fact_checks.len()
    ));
    for fc in &report.fact_checks {
        content.push_str(&format!(
            "- Claim: {}\n  Finding: {} (Source: {})\n  Link: {}\n\n",
            fc.claim, fc.finding, fc.source, fc.url
        ));
    }
    if let Some(rewrite) = &report.rewritten_text {
        if !rewrite.is_empty() {
            content.push_str(&format!(
                "SUGGESTED NEUTRAL REWRITE\n--------------------------\n{}\n\n",
                rewrite
            ));
        }
    }
    content.push_str(&format!(
        "SOURCE ANALYSIS\n---------------\nType: {}\nReputation: {}\nDetails: {}\n\n",
        report.source_analysis.kind,
        report.source_analysis.reputation,
        report.source_analysis.details.join(", ")
    ));
    content.push_str("SOURCE EVALUATION\n------------------\n");
    for src in &report.referenced_sources {
        content.push_str(&format!(
            "- {} | Status: {}, Score: {}/100\n  Link: {}\n",
            src.name, src.status, src.trust_score, src.url
        ));
    }
    content
}

/// Writes the plain-text rendering of a report.
///
/// `dest` may be a directory (the default file name is appended), a file
/// path (used as-is), or `None` (the default file name in the current
/// directory). Returns the path written.
pub fn write_report(report: &ReportData, dest: Option<&Path>) -> std::io::Result<PathBuf> {
    let path = match dest {
        Some(p) if p.is_dir() => p.join(REPORT_FILE_NAME),
        Some(p) => p.to_path_buf(),
        None => PathBuf::from(REPORT_FILE_NAME),
    };
    std::fs::write(&path, render_report_text(report))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use trustai_core::report::{
        Credibility, CredibilityStatus, FactCheck, FactCheckFinding, ReferenceStatus,
        ReferencedSource, ReportSummary, SentimentAnalysis, SentimentTone, SourceAnalysis,
        SourceReputation, SourceType,
    };

    fn full_report() -> ReportData {
        ReportData {
            credibility: Credibility {
                score: 35,
                confidence: 80,
                status: CredibilityStatus::PotentiallyMisleading,
            },
            summary: ReportSummary {
                overview: "Cherry-picked statistics.".to_string(),
                explanation: "The article omits the base rate.".to_string(),
            },
            sentiment_analysis: SentimentAnalysis {
                tone: SentimentTone::Sensationalist,
                bias: "Leans heavily on outrage".to_string(),
            },
            fact_checks: vec![FactCheck {
                claim: "Crime tripled last year".to_string(),
                finding: FactCheckFinding::MostlyFalse,
                source: "National statistics office".to_string(),
                url: "https://stats.example.gov/crime".to_string(),
            }],
            rewritten_text: Some("Reported crime rose 12% last year.".to_string()),
            source_analysis: SourceAnalysis {
                kind: SourceType::Domain,
                reputation: SourceReputation::Low,
                details: vec!["Registered 3 months ago".to_string(), "No masthead".to_string()],
            },
            referenced_sources: vec![ReferencedSource {
                name: "stats.example.gov".to_string(),
                url: "https://stats.example.gov".to_string(),
                status: ReferenceStatus::Verified,
                trust_score: 95,
                last_updated: None,
            }],
        }
    }

    #[test]
    fn test_renders_sections_in_order() {
        let text = render_report_text(&full_report());

        assert!(text.starts_with("TRUST AI CREDIBILITY REPORT\n=========================\n\n"));
        assert!(text.contains(
            "STATUS: Potentially Misleading (Score: 35/100, Confidence: 80%)\n\n"
        ));
        assert!(text.contains("SUMMARY\n-------\nCherry-picked statistics.\n\n"));
        assert!(text.contains("EXPLANATION\n-----------\nThe article omits the base rate.\n\n"));
        assert!(text.contains(
            "SENTIMENT & BIAS\n----------------\nTone: Sensationalist\nBias: Leans heavily on outrage\n\n"
        ));
        assert!(text.contains("FACT CHECKS (1)\n-------------\n"));
        assert!(text.contains(
            "- Claim: Crime tripled last year\n  Finding: Mostly False (Source: National statistics office)\n  Link: https://stats.example.gov/crime\n\n"
        ));
        assert!(text.contains(
            "SUGGESTED NEUTRAL REWRITE\n--------------------------\nReported crime rose 12% last year.\n\n"
        ));
        assert!(text.contains(
            "SOURCE ANALYSIS\n---------------\nType: Domain\nReputation: Low\nDetails: Registered 3 months ago, No masthead\n\n"
        ));
        assert!(text.contains("SOURCE EVALUATION\n------------------\n"));
        assert!(text.ends_with(
            "- stats.example.gov | Status: Verified, Score: 95/100\n  Link: https://stats.example.gov\n"
        ));

        // Section order matches the fixed layout.
        let summary_at = text.find("SUMMARY").unwrap();
        let facts_at = text.find("FACT CHECKS").unwrap();
        let rewrite_at = text.find("SUGGESTED NEUTRAL REWRITE").unwrap();
        let evaluation_at = text.find("SOURCE EVALUATION").unwrap();
        assert!(summary_at < facts_at);
        assert!(facts_at < rewrite_at);
        assert!(rewrite_at < evaluation_at);
    }

    #[test]
    fn test_rewrite_section_omitted_when_absent() {
        let mut report = full_report();
        report.rewritten_text = None;

        let text = render_report_text(&report);
        assert!(!text.contains("SUGGESTED NEUTRAL REWRITE"));
    }

    #[test]
    fn test_empty_fact_checks_keep_heading() {
        let mut report = full_report();
        report.fact_checks.clear();

        let text = render_report_text(&report);
        assert!(text.contains("FACT CHECKS (0)\n-------------\n"));
    }

    #[test]
    fn test_write_report_into_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_report(&full_report(), Some(temp_dir.path())).unwrap();

        assert!(path.ends_with(REPORT_FILE_NAME));
        let written = std::fs::read_to_string(path).unwrap();
        assert!(written.starts_with("TRUST AI CREDIBILITY REPORT"));
    }
}

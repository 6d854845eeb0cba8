//! Colored terminal rendering for the report and the static views.

use colored::{ColoredString, Colorize};
use trustai_core::history::HistoryItem;
use trustai_core::nav::InputMode;
use trustai_core::report::{ReferenceStatus, ReportData};

pub fn welcome() {
    println!("{}", "=== Trust AI ===".bright_magenta().bold());
    println!("{}", "AI-Powered Misinformation Detector".bold());
    println!(
        "{}",
        "Analyze text, URLs, images, and files to assess their credibility in real-time."
            .bright_black()
    );
    println!(
        "{}",
        "Type /help for commands, ? before a question to ask the assistant, or 'quit' to exit."
            .bright_black()
    );
    println!();
}

pub fn help() {
    let lines = [
        ("/view <target>", "switch view: analyzer, learn, transparency, history"),
        ("/mode <target>", "switch input modality: text, url, image, file"),
        ("/theme", "toggle between light and dark"),
        ("/history [n|clear]", "list past analyses, open entry n, or clear"),
        ("/chat <message>", "ask a follow-up question about the report"),
        ("/voice [stop]", "dictate into the draft via the configured transcriber"),
        ("/save [path]", "write the report as a text file"),
        ("/show", "re-print the current view"),
        ("/back", "dismiss the report and return to the input"),
        ("/nav <words>", "free-text command, same as the ? prefix"),
        ("/help", "this list"),
        ("/quit", "exit"),
    ];
    for (command, description) in lines {
        println!("  {}  {}", format!("{command:<20}").bright_cyan(), description.bright_black());
    }
}

/// The analyzer's input state: what modality is active and any draft text.
pub fn analyzer_intro(mode: InputMode, draft: &str) {
    println!("{}", "AI-Powered Misinformation Detector".bold());
    println!(
        "{}",
        "Analyze text, URLs, images, and files to assess their credibility in real-time."
            .bright_black()
    );
    println!(
        "{}",
        format!("Input mode: {}. {}", mode.as_str(), mode_hint(mode)).bright_black()
    );
    if !draft.is_empty() {
        println!("{}", format!("Draft: {draft}").bright_black());
    }
}

fn mode_hint(mode: InputMode) -> &'static str {
    match mode {
        InputMode::Text => "Paste text, an article, or a social media post.",
        InputMode::Url => "Enter a URL (e.g., https://example.com/article).",
        InputMode::Image => "Enter the path to an image file.",
        InputMode::File => "Enter the path to a plain-text (.txt) file.",
    }
}

/// Prints the full credibility report, colored by score.
pub fn report(data: &ReportData) {
    let credibility = &data.credibility;
    println!();
    println!("{}", "Credibility Score".bold());
    println!(
        "  {}  {}",
        score_colored(
            credibility.score,
            format!("{}/100", credibility.score)
        )
        .bold(),
        score_colored(credibility.score, credibility.status.to_string())
    );
    println!(
        "  {}",
        format!("Confidence: {}%", credibility.confidence).bright_black()
    );

    println!();
    println!("{}", "Summary".bold());
    println!("  {}", data.summary.overview);
    println!("  {}", data.summary.explanation);

    println!();
    println!("{}", "Sentiment & Bias".bold());
    println!("  Tone: {}", data.sentiment_analysis.tone);
    println!("  Detected Bias: {}", data.sentiment_analysis.bias);

    println!();
    println!("{}", "Source Analysis".bold());
    println!("  Type: {}", data.source_analysis.kind);
    println!("  Reputation: {}", data.source_analysis.reputation);
    for detail in &data.source_analysis.details {
        println!("  - {detail}");
    }

    if !data.fact_checks.is_empty() {
        println!();
        println!("{}", "Fact-Check Results".bold());
        for check in &data.fact_checks {
            println!("  - \"{}\"", check.claim);
            println!(
                "    Finding: {} {}",
                check.finding,
                format!("(Source: {})", check.source).bright_black()
            );
            println!("    {}", format!("Link: {}", check.url).bright_black());
        }
    }

    if let Some(rewrite) = data.rewritten_text.as_deref().filter(|t| !t.is_empty()) {
        println!();
        println!("{}", "Suggested Neutral Rewrite".bold());
        println!("  {rewrite}");
    }

    if !data.referenced_sources.is_empty() {
        println!();
        println!("{}", "Source Evaluation".bold());
        for source in &data.referenced_sources {
            println!(
                "  - {} [{}] {}",
                source.name,
                status_colored(source.status),
                score_colored(
                    source.trust_score,
                    format!("{}/100", source.trust_score)
                )
            );
            println!("    {}", format!("Link: {}", source.url).bright_black());
            if let Some(updated) = &source.last_updated {
                println!("    {}", format!("Updated: {updated}").bright_black());
            }
        }
    }
    println!();
}

pub fn history_list(items: &[HistoryItem]) {
    println!("{}", "Analysis History".bold());
    println!("{}", "Review your past analyses.".bright_black());
    println!(
        "{}",
        "Your history is saved privately on this device and is not shared.".bright_black()
    );
    println!();
    if items.is_empty() {
        println!("{}", "No History Yet".bold());
        println!("{}", "Your completed analyses will appear here.".bright_black());
        return;
    }
    for (index, item) in items.iter().enumerate() {
        println!("{}. {}", index + 1, item.input_summary);
        let when = item
            .created_at()
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "unknown time".to_string());
        println!(
            "   {}",
            format!("{} - Score: {}", when, item.report.credibility.score).bright_black()
        );
    }
    println!();
    println!(
        "{}",
        "Open an entry with /history <n>, or clear everything with /history clear.".bright_black()
    );
}

pub fn learn() {
    println!("{}", "Understanding Misinformation".bold());
    println!(
        "{}",
        "Empower yourself with knowledge to navigate the digital world safely and critically."
            .bright_black()
    );
    section(
        "What is Misinformation?",
        "Misinformation is false or inaccurate information that is spread, regardless of intent \
         to deceive. It differs from disinformation, which is deliberately misleading. Both can \
         harm public discourse and trust.",
    );
    section(
        "Common Red Flags",
        "Be skeptical of emotionally charged language, sensational headlines, and claims that \
         seem too good (or bad) to be true. Always check for sources, and be wary of content \
         from anonymous or unverified accounts. Look for professional design and grammar; sloppy \
         presentation can be a warning sign.",
    );
    section(
        "How to Fact-Check",
        "Before sharing, take a moment to verify. A simple search can often reveal if a claim \
         has been debunked. Use reputable fact-checking websites like Snopes, PolitiFact, or the \
         Associated Press. A reverse image search can also help verify the origin of a photo.",
    );
}

pub fn transparency() {
    println!("{}", "Our Commitment to Transparency".bold());
    println!(
        "{}",
        "Trust AI is a tool to assist, not replace, critical thinking. Here's how it works and \
         what its limitations are."
            .bright_black()
    );
    section(
        "How Trust AI Works",
        "Trust AI utilizes advanced large language models from Google's Gemini family. When you \
         submit content, the AI analyzes patterns, language, and context against a vast dataset \
         of information. For URLs, it simulates checking domain reputation signals. For images, \
         it uses multimodal analysis to understand context and search for similar content \
         online. The result is a synthesized report based on these AI-driven insights.",
    );
    section(
        "AI Limitations & Bias",
        "No AI is perfect. The analysis provided is a prediction based on patterns, not a \
         declaration of absolute truth. It can make mistakes, misinterpret nuance, or lack \
         context on very recent events. AI models can also reflect biases present in their \
         training data. Always use the analysis as one of several tools in your verification \
         process.",
    );
    section(
        "Data Privacy & Feedback",
        "Your history stays on this device. The content you analyze is sent to the Gemini API \
         for processing and is governed by Google's privacy policies; nothing else is uploaded.",
    );
}

fn section(title: &str, body: &str) {
    println!();
    println!("{}", title.bold());
    println!("  {body}");
}

fn score_colored(score: u8, label: String) -> ColoredString {
    if score >= 75 {
        label.green()
    } else if score >= 50 {
        label.yellow()
    } else {
        label.red()
    }
}

fn status_colored(status: ReferenceStatus) -> ColoredString {
    let label = status.as_str();
    match status {
        ReferenceStatus::Verified => label.green(),
        ReferenceStatus::Unverified => label.red(),
        ReferenceStatus::PotentiallyBiased => label.yellow(),
    }
}

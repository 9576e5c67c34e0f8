//! Output formatters for interview reports

use crate::config::OutputFormat;
use crate::error::{InterviewCoachError, Result};
use crate::interview::conversation::Exchange;
use crate::output::report::{InterviewReport, Verdict};
use crate::processing::answer_scorer::MAX_NOTE;
use colored::{Color, Colorize};
use std::path::Path;
use unicode_segmentation::UnicodeSegmentation;

/// Answers longer than this are shortened unless the output is detailed.
const ANSWER_PREVIEW_GRAPHEMES: usize = 120;

pub trait OutputFormatter {
    fn format_report(&self, report: &InterviewReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Report generator that dispatches on [`OutputFormat`]
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

/// Shorten `text` to at most `max_graphemes` user-perceived characters.
pub fn truncate_graphemes(text: &str, max_graphemes: usize) -> String {
    let graphemes: Vec<&str> = text.graphemes(true).collect();
    if graphemes.len() <= max_graphemes {
        return text.to_string();
    }
    let kept = max_graphemes.saturating_sub(3);
    format!("{}...", graphemes[..kept].concat())
}

fn note_label(note: Option<u8>) -> String {
    match note {
        Some(note) => format!("{}/{}", note, MAX_NOTE),
        None => "-".to_string(),
    }
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            3 => "▒",
            _ => "░",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            3 => Color::Yellow,
            _ => Color::White,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_verdict_badge(&self, verdict: Verdict) -> String {
        let color = match verdict {
            Verdict::Excellent => Color::Green,
            Verdict::Good => Color::BrightGreen,
            Verdict::Fair => Color::Yellow,
            Verdict::NeedsWork => Color::BrightRed,
        };

        if self.use_colors {
            format!("[{}]", verdict.label().color(color).bold())
        } else {
            format!("[{}]", verdict.label())
        }
    }

    fn note_color(note: Option<u8>) -> Color {
        match note {
            Some(4..=5) => Color::Green,
            Some(2..=3) => Color::Yellow,
            Some(_) => Color::Red,
            None => Color::White,
        }
    }

    fn format_exchange(&self, index: usize, exchange: &Exchange) -> String {
        let mut output = format!(
            "{}. {} {}\n",
            index,
            self.colorize(&exchange.question, Color::Cyan),
            self.colorize(&note_label(exchange.note), Self::note_color(exchange.note))
        );

        match &exchange.answer {
            Some(answer) => {
                let answer = if self.detailed {
                    answer.clone()
                } else {
                    truncate_graphemes(answer, ANSWER_PREVIEW_GRAPHEMES)
                };
                output.push_str(&format!("   > {}\n", answer));
            }
            None => {
                let placeholder = self.colorize("(no answer)", Color::BrightBlack);
                output.push_str(&format!("   {}\n", placeholder));
            }
        }

        if self.detailed {
            for feedback in exchange.feedbacks.iter().flatten() {
                output.push_str(&format!("   • {}\n", feedback));
            }
        }
        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &InterviewReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("🎤 MOCK INTERVIEW REPORT", 1));
        output.push_str(&format!(
            "Generated: {} | Conversation: {}\n",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.conversation_id
        ));
        output.push_str(&format!(
            "Role: {} {} | Duration: {} min\n",
            report.job.level,
            report.job.job_type,
            report.duration_minutes()
        ));

        output.push_str(&self.format_header("Summary", 2));
        output.push_str(&format!(
            "Average note: {:.2}/{} ({}%) {}\n",
            report.average_note,
            MAX_NOTE,
            report.score_percentage(),
            self.format_verdict_badge(report.verdict)
        ));
        output.push_str(&format!(
            "Answered: {}/{}\n",
            report.answered_count,
            report.exchanges.len()
        ));
        output.push_str(&format!(
            "Verdict: {}\n",
            self.colorize(report.verdict.summary(), Color::Cyan)
        ));

        if !report.weak_points.is_empty() {
            output.push_str(&self.format_header("🎯 Weak Points", 3));
            for weak_point in &report.weak_points {
                output.push_str(&format!("  • {}\n", self.colorize(weak_point, Color::Yellow)));
            }
        }

        if !report.exchanges.is_empty() {
            output.push_str(&self.format_header("Questions", 2));
            for (index, exchange) in report.exchanges.iter().enumerate() {
                output.push_str(&self.format_exchange(index + 1, exchange));
            }
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &InterviewReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn markdown_badge(verdict: Verdict) -> &'static str {
        match verdict {
            Verdict::Excellent => "🟢 Excellent",
            Verdict::Good => "🟡 Good",
            Verdict::Fair => "🟠 Fair",
            Verdict::NeedsWork => "🔴 Needs work",
        }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &InterviewReport) -> Result<String> {
        let mut output = String::new();

        output.push_str("# 🎤 Mock Interview Report\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Conversation:** `{}`\n\n",
                report.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.conversation_id
            ));
        }

        output.push_str("## Summary\n\n");
        output.push_str("| Role | Average note | Answered | Verdict |\n");
        output.push_str("|------|--------------|----------|---------|\n");
        output.push_str(&format!(
            "| {} {} | {:.2}/{} | {}/{} | {} |\n\n",
            report.job.level,
            report.job.job_type,
            report.average_note,
            MAX_NOTE,
            report.answered_count,
            report.exchanges.len(),
            Self::markdown_badge(report.verdict)
        ));
        output.push_str(&format!("{}\n\n", report.verdict.summary()));

        if !report.job.skills.is_empty() || !report.job.technologies.is_empty() {
            output.push_str(&format!(
                "**Skills:** {} | **Technologies:** {}\n\n",
                report.job.skills.join(", "),
                report.job.technologies.join(", ")
            ));
        }

        if !report.weak_points.is_empty() {
            output.push_str("### 🎯 Weak Points\n\n");
            for weak_point in &report.weak_points {
                output.push_str(&format!("- {}\n", weak_point));
            }
            output.push('\n');
        }

        output.push_str("## Questions\n\n");
        for (index, exchange) in report.exchanges.iter().enumerate() {
            output.push_str(&format!(
                "### {}. {} ({})\n\n",
                index + 1,
                exchange.question,
                note_label(exchange.note)
            ));
            match &exchange.answer {
                Some(answer) => output.push_str(&format!("> {}\n\n", answer)),
                None => output.push_str("_No answer._\n\n"),
            }
            for feedback in exchange.feedbacks.iter().flatten() {
                output.push_str(&format!("- {}\n", feedback));
            }
            if exchange.feedbacks.as_ref().is_some_and(|f| !f.is_empty()) {
                output.push('\n');
            }
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, false, true, true)
    }

    pub fn with_options(
        use_colors: bool,
        detailed: bool,
        pretty_json: bool,
        include_metadata: bool,
    ) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
        }
    }

    pub fn generate_report(
        &self,
        report: &InterviewReport,
        format: OutputFormat,
    ) -> Result<String> {
        let formatter: &dyn OutputFormatter = match format {
            OutputFormat::Console => &self.console_formatter,
            OutputFormat::Json => &self.json_formatter,
            OutputFormat::Markdown => &self.markdown_formatter,
        };
        debug_assert_eq!(formatter.supports_format(), format);
        formatter.format_report(report)
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content).map_err(|e| {
        InterviewCoachError::OutputFormatting(format!(
            "Failed to write report to {}: {}",
            file_path.display(),
            e
        ))
    })
}

pub fn suggest_filename(format: OutputFormat, conversation_id: &str, timestamp: bool) -> String {
    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    format!("interview_{}{}.{}", conversation_id, timestamp_suffix, format.extension())
}

//! Output formatters: console, JSON, Markdown and HTML renderings of a screening report

use crate::config::OutputFormat;
use crate::error::{Result, ScreenerError};
use crate::output::report::ScreeningReport;
use crate::processing::dimension::Dimension;
use crate::processing::gaps::GapReport;
use crate::processing::zone::Zone;
use askama::Template;
use colored::{Color, Colorize};
use std::path::Path;

const BAR_WIDTH: usize = 20;

/// Trait for formatting screening reports
pub trait OutputFormatter {
    fn format_report(&self, report: &ScreeningReport) -> Result<String>;
}

/// Console formatter with colors and score bars
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for API integration and structured data
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for documentation and reports
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// HTML formatter with embedded styling
pub struct HtmlFormatter {
    include_styles: bool,
    detailed: bool,
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
}

/// Askama template for HTML output
#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Candidate Screening Report</title>
    {% if include_styles %}
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: #333;
            max-width: 900px;
            margin: 0 auto;
            padding: 20px;
            background: #f8f9fa;
        }
        .container {
            background: white;
            padding: 30px;
            border-radius: 8px;
            box-shadow: 0 2px 10px rgba(0,0,0,0.1);
        }
        .header {
            text-align: center;
            border-bottom: 3px solid #007acc;
            padding-bottom: 20px;
        }
        .zone-badge {
            display: inline-block;
            padding: 8px 16px;
            border-radius: 20px;
            font-weight: bold;
            color: white;
            margin-left: 10px;
        }
        .zone-green { background: #28a745; }
        .zone-yellow { background: #ffc107; color: #000; }
        .zone-red { background: #dc3545; }
        table { width: 100%; border-collapse: collapse; margin: 15px 0; }
        th, td { text-align: left; padding: 8px; border-bottom: 1px solid #e9ecef; }
        .bar { background: #e9ecef; border-radius: 4px; height: 10px; width: 160px; }
        .bar-fill { background: #007acc; border-radius: 4px; height: 10px; }
        .gap { background: #f8f9fa; padding: 12px; margin: 10px 0; border-left: 4px solid #ffc107; border-radius: 6px; }
        .metadata {
            background: #e9ecef;
            padding: 15px;
            border-radius: 6px;
            margin-top: 30px;
            font-size: 0.9em;
            color: #6c757d;
        }
    </style>
    {% endif %}
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>Candidate Screening Report</h1>
            <p>{{ job_title }} | Generated: {{ generated_at }}</p>
        </div>

        <div class="section">
            <h2>Overall Score: {{ overall_score }}% <span class="zone-badge zone-{{ zone }}">{{ zone_label }}</span></h2>
            <p><strong>Recommendation:</strong> {{ recommendation }}</p>
        </div>

        <div class="section">
            <h2>Score Breakdown</h2>
            <table>
                <tr><th>Dimension</th><th>Score</th><th></th><th>Weight</th>{% if detailed %}<th>Rationale</th>{% endif %}</tr>
                {% for row in rows %}
                <tr>
                    <td>{{ row.label }}</td>
                    <td>{{ row.score }}%</td>
                    <td><div class="bar"><div class="bar-fill" style="width: {{ row.percent }}%"></div></div></td>
                    <td>{{ row.weight }}%</td>
                    {% if detailed %}<td>{{ row.note }}</td>{% endif %}
                </tr>
                {% endfor %}
            </table>
        </div>

        {% if has_gaps %}
        <div class="section">
            <h2>Gaps</h2>
            {% for gap in gaps %}
            <div class="gap">
                <strong>{{ gap.label }}</strong> ({{ gap.score }}%){% if !gap.note.is_empty() %}: {{ gap.note }}{% endif %}
                {% if !gap.missing.is_empty() %}<br><small>Missing: {{ gap.missing }}</small>{% endif %}
            </div>
            {% endfor %}
            {% if has_recommendations %}
            <h3>Recommendations</h3>
            <ul>
                {% for item in recommendations %}
                <li>{{ item }}</li>
                {% endfor %}
            </ul>
            {% endif %}
        </div>
        {% endif %}

        <div class="metadata">
            <p><strong>Generated by Intern Screener v{{ version }}</strong> | Skill matching: {{ matching_mode }}</p>
            <p><strong>Candidate:</strong> {{ candidate_file }} | <strong>Job:</strong> {{ job_file }}</p>
        </div>
    </div>
</body>
</html>"#, ext = "html")]
struct HtmlTemplate {
    include_styles: bool,
    detailed: bool,
    generated_at: String,
    job_title: String,
    overall_score: String,
    zone: String,
    zone_label: String,
    recommendation: String,
    rows: Vec<HtmlRow>,
    has_gaps: bool,
    gaps: Vec<HtmlGap>,
    has_recommendations: bool,
    recommendations: Vec<String>,
    version: String,
    matching_mode: String,
    candidate_file: String,
    job_file: String,
}

struct HtmlRow {
    label: String,
    score: String,
    percent: String,
    weight: String,
    note: String,
}

struct HtmlGap {
    label: String,
    score: String,
    note: String,
    missing: String,
}

fn zone_label(zone: Zone) -> &'static str {
    match zone {
        Zone::Green => "GREEN",
        Zone::Yellow => "YELLOW",
        Zone::Red => "RED",
    }
}

fn labels(dimensions: &[Dimension]) -> String {
    dimensions.iter().map(|d| d.label()).collect::<Vec<_>>().join(", ")
}

fn file_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string())
}

fn formatted_time(report: &ScreeningReport) -> String {
    report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
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
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn zone_color(zone: Zone) -> Color {
        match zone {
            Zone::Green => Color::Green,
            Zone::Yellow => Color::Yellow,
            Zone::Red => Color::Red,
        }
    }

    fn format_zone_badge(&self, zone: Zone) -> String {
        let label = zone_label(zone);
        if self.use_colors {
            format!("[{}]", label.color(Self::zone_color(zone)).bold())
        } else {
            format!("[{}]", label)
        }
    }

    fn score_color(score: f64) -> Color {
        if score >= 80.0 {
            Color::Green
        } else if score >= 60.0 {
            Color::Yellow
        } else {
            Color::Red
        }
    }

    fn score_bar(&self, score: f64) -> String {
        let filled = ((score / 100.0) * BAR_WIDTH as f64).round().clamp(0.0, BAR_WIDTH as f64) as usize;
        let bar = format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled));
        self.colorize(&bar, Self::score_color(score))
    }

    fn format_gaps(&self, gaps: &GapReport, output: &mut String) {
        output.push_str(&self.format_header("Gaps", 2));
        if gaps.gaps.is_empty() {
            output.push_str(&format!("  {}\n", self.colorize("No gaps below threshold", Color::Green)));
        }
        for gap in &gaps.gaps {
            output.push_str(&format!(
                "• {} {}\n",
                self.colorize(gap.dimension.label(), Color::Red),
                self.colorize(&format!("({:.2}%)", gap.score), Color::BrightBlack)
            ));
            if let Some(note) = &gap.note {
                output.push_str(&format!("  {}\n", note));
            }
            if let Some(missing) = gap.missing.as_ref().filter(|m| !m.is_empty()) {
                output.push_str(&format!("  Missing: {}\n", missing.join(", ")));
            }
        }

        if !gaps.recommendations.is_empty() {
            output.push_str(&self.format_header("📋 Recommendations", 3));
            for (i, rec) in gaps.recommendations.iter().enumerate() {
                output.push_str(&format!("{}. {}\n", i + 1, rec));
            }
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &ScreeningReport) -> Result<String> {
        let result = &report.result;
        let mut output = String::new();

        output.push_str(&self.format_header("📊 CANDIDATE SCREENING", 1));
        if !report.metadata.job_title.is_empty() {
            output.push_str(&format!("Position: {}\n", report.metadata.job_title));
        }
        output.push_str(&format!("Generated: {}\n", formatted_time(report)));

        output.push_str(&self.format_header("Summary", 2));
        output.push_str(&format!(
            "Overall Score: {:.2}% {}\n",
            result.overall_score,
            self.format_zone_badge(result.zone)
        ));
        output.push_str(&format!(
            "Recommendation: {}\n",
            self.colorize(&result.recommendation, Color::Cyan)
        ));

        output.push_str(&self.format_header("Score Breakdown", 3));
        for (dimension, score, weight, note) in report.rows() {
            output.push_str(&format!(
                "{:<14} {} {:>6.2}% (weight: {:.0}%)\n",
                dimension.label(),
                self.score_bar(score),
                score,
                weight
            ));
            if self.detailed && !note.is_empty() {
                output.push_str(&format!("               {}\n", self.colorize(note, Color::BrightBlack)));
            }
        }

        let strengths = report.strengths();
        if !strengths.is_empty() {
            output.push_str(&format!("\n✅ Strengths: {}\n", self.colorize(&labels(&strengths), Color::Green)));
        }
        let improvements = report.improvement_areas();
        if !improvements.is_empty() {
            output.push_str(&format!("🎯 Improve: {}\n", self.colorize(&labels(&improvements), Color::Yellow)));
        }

        if let Some(gaps) = &report.gaps {
            self.format_gaps(gaps, &mut output);
        }

        output.push_str(&format!(
            "\n{} Generated by Intern Screener v{} | Skill matching: {}\n",
            self.colorize("ℹ️", Color::Blue),
            report.metadata.screener_version,
            report.metadata.matching_mode()
        ));

        Ok(output)
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &ScreeningReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn zone_badge(zone: Zone) -> &'static str {
        match zone {
            Zone::Green => "🟢 Green",
            Zone::Yellow => "🟡 Yellow",
            Zone::Red => "🔴 Red",
        }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &ScreeningReport) -> Result<String> {
        let result = &report.result;
        let mut output = String::new();

        output.push_str("# 📊 Candidate Screening Report\n\n");

        if self.include_metadata {
            if !report.metadata.job_title.is_empty() {
                output.push_str(&format!("**Position:** {}\n", report.metadata.job_title));
            }
            output.push_str(&format!("**Generated:** {}\n", formatted_time(report)));
            output.push_str(&format!(
                "**Candidate:** `{}` | **Job:** `{}`\n\n",
                file_name(&report.metadata.candidate_file),
                file_name(&report.metadata.job_file)
            ));
        }

        output.push_str("## Summary\n\n");
        output.push_str(&format!(
            "**Overall Score:** {:.2}% {}\n\n",
            result.overall_score,
            Self::zone_badge(result.zone)
        ));
        output.push_str(&format!("**Recommendation:** {}\n\n", result.recommendation));

        output.push_str("### Score Breakdown\n\n");
        output.push_str("| Dimension | Score | Weight | Rationale |\n");
        output.push_str("|-----------|-------|--------|-----------|\n");
        for (dimension, score, weight, note) in report.rows() {
            output.push_str(&format!(
                "| {} | {:.2}% | {:.0}% | {} |\n",
                dimension.label(),
                score,
                weight,
                note.replace('|', "\\|")
            ));
        }
        output.push('\n');

        if let Some(gaps) = &report.gaps {
            output.push_str("## 🎯 Gaps\n\n");
            if gaps.gaps.is_empty() {
                output.push_str("No dimension falls below its threshold.\n\n");
            }
            for gap in &gaps.gaps {
                output.push_str(&format!("- **{}** ({:.2}%)", gap.dimension.label(), gap.score));
                if let Some(note) = &gap.note {
                    output.push_str(&format!(": {}", note));
                }
                output.push('\n');
                if let Some(missing) = gap.missing.as_ref().filter(|m| !m.is_empty()) {
                    output.push_str(&format!("  - Missing: `{}`\n", missing.join("`, `")));
                }
            }
            output.push('\n');

            if !gaps.recommendations.is_empty() {
                output.push_str("## 📋 Recommendations\n\n");
                for (i, rec) in gaps.recommendations.iter().enumerate() {
                    output.push_str(&format!("{}. {}\n", i + 1, rec));
                }
                output.push('\n');
            }
        }

        if self.include_metadata {
            output.push_str("---\n\n");
            output.push_str(&format!(
                "*Generated by Intern Screener v{} | Skill matching: {}*\n",
                report.metadata.screener_version,
                report.metadata.matching_mode()
            ));
        }

        Ok(output)
    }
}

impl HtmlFormatter {
    pub fn new(include_styles: bool, detailed: bool) -> Self {
        Self { include_styles, detailed }
    }

    fn create_template_data(&self, report: &ScreeningReport) -> HtmlTemplate {
        let result = &report.result;

        let rows = report
            .rows()
            .into_iter()
            .map(|(dimension, score, weight, note)| HtmlRow {
                label: dimension.label().to_string(),
                score: format!("{:.2}", score),
                percent: format!("{:.0}", score.clamp(0.0, 100.0)),
                weight: format!("{:.0}", weight),
                note: note.to_string(),
            })
            .collect();

        let (gaps, recommendations) = match &report.gaps {
            Some(report_gaps) => (
                report_gaps
                    .gaps
                    .iter()
                    .map(|gap| HtmlGap {
                        label: gap.dimension.label().to_string(),
                        score: format!("{:.2}", gap.score),
                        note: gap.note.clone().unwrap_or_default(),
                        missing: gap.missing.as_ref().map(|m| m.join(", ")).unwrap_or_default(),
                    })
                    .collect::<Vec<_>>(),
                report_gaps.recommendations.clone(),
            ),
            None => (Vec::new(), Vec::new()),
        };

        HtmlTemplate {
            include_styles: self.include_styles,
            detailed: self.detailed,
            generated_at: formatted_time(report),
            job_title: report.metadata.job_title.clone(),
            overall_score: format!("{:.2}", result.overall_score),
            zone: result.zone.to_string(),
            zone_label: zone_label(result.zone).to_string(),
            recommendation: result.recommendation.clone(),
            rows,
            has_gaps: report.gaps.is_some(),
            gaps,
            has_recommendations: !recommendations.is_empty(),
            recommendations,
            version: report.metadata.screener_version.clone(),
            matching_mode: report.metadata.matching_mode(),
            candidate_file: file_name(&report.metadata.candidate_file),
            job_file: file_name(&report.metadata.job_file),
        }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, report: &ScreeningReport) -> Result<String> {
        self.create_template_data(report)
            .render()
            .map_err(|e| ScreenerError::OutputFormatting(e.to_string()))
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true, false),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
            html_formatter: HtmlFormatter::new(true, false),
        }
    }

    pub fn with_options(
        use_colors: bool,
        detailed: bool,
        pretty_json: bool,
        include_metadata: bool,
        include_html_styles: bool,
    ) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
            html_formatter: HtmlFormatter::new(include_html_styles, detailed),
        }
    }

    pub fn generate_report(&self, report: &ScreeningReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
            OutputFormat::Html => self.html_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

// Utility functions for saving reports
pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;

    if let Some(parent) = file_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, candidate_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(candidate_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    match format {
        OutputFormat::Console => format!("{}_screening{}.txt", base_name, timestamp_suffix),
        OutputFormat::Json => format!("{}_screening{}.json", base_name, timestamp_suffix),
        OutputFormat::Markdown => format!("{}_screening{}.md", base_name, timestamp_suffix),
        OutputFormat::Html => format!("{}_screening{}.html", base_name, timestamp_suffix),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::report::ReportMetadata;
    use crate::processing::engine::{EngineConfig, MatchingEngine};
    use crate::processing::gaps::{GapAnalyzer, GapThresholds};
    use crate::profile::{CandidateProfile, RequirementProfile, Skills};
    use tempfile::TempDir;

    fn sample_report() -> ScreeningReport {
        let candidate = CandidateProfile {
            skills: Skills {
                technical: vec!["Rust".into()],
                soft: vec![],
            },
            ..CandidateProfile::default()
        };
        let requirement = RequirementProfile {
            title: "Systems <Intern>".into(),
            skills_required: vec!["Rust".into(), "Go".into()],
            ..RequirementProfile::default()
        };

        let engine = MatchingEngine::new(EngineConfig::default()).unwrap();
        let analyzer = GapAnalyzer::new(engine, GapThresholds::default());
        let result = analyzer.engine().score(&candidate, &requirement);
        let gaps = analyzer.report(&result, &candidate, &requirement);

        ScreeningReport::new(
            result,
            Some(gaps),
            ReportMetadata::new("data/alice.json", "jobs/systems.toml", &requirement.title, None),
        )
    }

    #[test]
    fn test_console_without_colors() {
        let report = sample_report();
        let output = ConsoleFormatter::new(false, true).format_report(&report).unwrap();

        assert!(output.contains("Overall Score:"));
        assert!(output.contains(&report.result.recommendation));
        assert!(output.contains("Learn: Go"));
        assert!(!output.contains("\u{1b}["));
    }

    #[test]
    fn test_json_round_trips_result() {
        let report = sample_report();
        let json = JsonFormatter::new(false).format_report(&report).unwrap();
        let parsed: ScreeningReport = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.result, report.result);
        assert_eq!(parsed.gaps, report.gaps);
    }

    #[test]
    fn test_markdown_has_breakdown_table() {
        let output = MarkdownFormatter::new(true).format_report(&sample_report()).unwrap();

        assert!(output.contains("| Skills |"));
        assert!(output.contains("`alice.json`"));
        assert!(output.contains("## 📋 Recommendations"));
    }

    #[test]
    fn test_html_escapes_user_text() {
        let output = HtmlFormatter::new(false, true).format_report(&sample_report()).unwrap();

        assert!(output.contains("<!DOCTYPE html>"));
        assert!(output.contains("Systems &lt;Intern&gt;") || output.contains("Systems &#60;Intern&#62;"));
        assert!(!output.contains("<style>"));
    }

    #[test]
    fn test_html_rationale_column_follows_detailed_option() {
        let report = sample_report();

        let brief = ReportGenerator::with_options(false, false, true, true, false)
            .generate_report(&report, &OutputFormat::Html)
            .unwrap();
        assert!(!brief.contains("<th>Rationale</th>"));

        let detailed = ReportGenerator::with_options(false, true, true, true, false)
            .generate_report(&report, &OutputFormat::Html)
            .unwrap();
        assert!(detailed.contains("<th>Rationale</th>"));
    }

    #[test]
    fn test_save_and_suggest_filename() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out").join("report.md");
        save_report_to_file("# report", &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# report");

        assert_eq!(
            suggest_filename(&OutputFormat::Html, "data/alice.json", false),
            "alice_screening.html"
        );
    }
}

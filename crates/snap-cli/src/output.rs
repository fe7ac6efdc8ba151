use snap_gen::GenerationReport;

use crate::cli::OutputFormat;

/// Render a report in the requested format.
pub fn render(report: &GenerationReport, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Human => Ok(match &report.content {
            Some(content) if !report.written => content.trim_end().to_string(),
            _ => report.success_message(),
        }),
    }
}

pub fn print_report(report: &GenerationReport, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(report, format)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;
    use snap_gen::SourceKind;

    use super::*;

    fn report(written: bool) -> GenerationReport {
        GenerationReport {
            source_path: PathBuf::from("/src/math.ts"),
            source_kind: SourceKind::TypeScript,
            test_file_path: PathBuf::from("/src/tests/math.test.js"),
            test_file_name: "math.test.js".to_string(),
            import_specifier: "../math".to_string(),
            functions: vec!["add".to_string()],
            seed: 7,
            written,
            content: (!written).then(|| "const {add} = require(\"../math\")\n".to_string()),
        }
    }

    #[test]
    fn human_success_line() {
        let rendered = render(&report(true), OutputFormat::Human).unwrap();
        assert_eq!(rendered, "✅ math.test.js created successfully!");
    }

    #[test]
    fn human_dry_run_prints_content() {
        let rendered = render(&report(false), OutputFormat::Human).unwrap();
        assert_eq!(rendered, "const {add} = require(\"../math\")");
    }

    #[test]
    fn json_report_fields() {
        let rendered = render(&report(true), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["test_file_name"], "math.test.js");
        assert_eq!(value["import_specifier"], "../math");
        assert_eq!(value["source_kind"], "typescript");
        assert_eq!(value["seed"], 7);
        assert_eq!(value["written"], true);
        assert!(value.get("content").is_none());
    }
}

//! Printable HTML document

use super::{ExportInput, Exporter};
use crate::error::{ExportError, Result};
use crate::render::escape_html;
use std::io::Write;

pub struct PrintExporter;

const PRINT_STYLE: &str = "body{font-family:serif;margin:22px}table{border-collapse:collapse;width:100%}th,td{border:1px solid #999;padding:4px 6px;text-align:left}@page{size:landscape;margin:22px}";

impl Exporter for PrintExporter {
    fn export(&self, input: &ExportInput<'_>, writer: &mut dyn Write) -> Result<()> {
        let columns = input.effective_columns();
        let title = escape_html(input.title);

        let header: String = columns
            .iter()
            .map(|c| format!("<th>{}</th>", escape_html(&c.label)))
            .collect();
        let rows: String = input
            .records
            .iter()
            .map(|record| {
                let cells: String = columns
                    .iter()
                    .map(|c| format!("<td>{}</td>", escape_html(&c.value(record).display_text())))
                    .collect();
                format!("<tr>{}</tr>\n", cells)
            })
            .collect();

        write!(
            writer,
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n<style>{style}</style>\n</head>\n<body onload=\"window.print()\">\n<h1>{heading}</h1>\n<table>\n<thead><tr>{header}</tr></thead>\n<tbody>\n{rows}</tbody>\n</table>\n</body>\n</html>\n",
            title = title,
            heading = escape_html(&input.labels.page_title),
            style = PRINT_STYLE,
            header = header,
            rows = rows,
        )
        .map_err(ExportError::from)?;
        Ok(())
    }

    fn format_name(&self) -> &str {
        "Print"
    }

    fn file_extension(&self) -> &str {
        "html"
    }

    fn mime_type(&self) -> &str {
        "text/html"
    }
}

//! Standalone HTML page for a rendered view

use super::escape::escape_html;
use super::labels::Labels;
use super::ViewFrame;
use crate::view::ViewState;

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 1.5rem; color: #222; }
.toolbar { display: flex; gap: 1rem; align-items: center; margin-bottom: .75rem; }
table { border-collapse: collapse; width: 100%; }
th, td { border-bottom: 1px solid #ddd; padding: .4rem .6rem; text-align: left; vertical-align: top; }
th.sortable { cursor: pointer; user-select: none; }
tr.empty td { color: #666; font-style: italic; }
.clamp-2 { display: -webkit-box; -webkit-line-clamp: 2; -webkit-box-orient: vertical; overflow: hidden; }
.pager { display: flex; gap: .5rem; align-items: center; margin-top: .75rem; }
#status { color: #555; margin-top: .5rem; }
#cover-preview { position: fixed; display: none; left: -9999px; top: -9999px; background: #fff; border: 1px solid #ccc; padding: .5rem; box-shadow: 0 4px 16px rgba(0,0,0,.2); }
#cover-preview.show { display: block; }
#cover-preview img { max-width: 180px; display: block; }
#cover-preview .hint { font-size: .75rem; color: #666; margin-top: .25rem; }
"#;

pub(crate) fn render_page(frame: &ViewFrame, state: &ViewState, labels: &Labels) -> String {
    let options: String = frame
        .pager
        .page_size_options
        .iter()
        .map(|size| {
            let selected = if *size == frame.pager.page_size {
                " selected"
            } else {
                ""
            };
            format!(r#"<option value="{0}"{1}>{0}</option>"#, size, selected)
        })
        .collect();

    let disabled = |enabled: bool| if enabled { "" } else { " disabled" };

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>{style}</style>
</head>
<body>
<h1>{title}</h1>
<div class="toolbar">
<label>{search_label} <input id="search" type="search" value="{search}" placeholder="{placeholder}"></label>
<label>{page_size_label} <select id="pageSize">{options}</select></label>
<button id="btnPrint" type="button">{print}</button>
</div>
<table id="tbl">{table}</table>
<div class="pager">
<button id="btnPrev"{prev_disabled}>{previous}</button>
<span id="pageIndicator">{indicator}</span>
<button id="btnNext"{next_disabled}>{next}</button>
</div>
<div id="status" role="status">{status}</div>
<div id="cover-preview" role="dialog" aria-hidden="true"></div>
</body>
</html>
"#,
        title = escape_html(&labels.page_title),
        style = STYLE,
        search_label = escape_html(&labels.search),
        search = escape_html(&state.filter_text),
        placeholder = escape_html(&labels.search_placeholder),
        page_size_label = escape_html(&labels.page_size),
        options = options,
        print = escape_html(&labels.print),
        table = frame.table_html(),
        prev_disabled = disabled(frame.pager.previous_enabled),
        previous = escape_html(&labels.previous),
        indicator = escape_html(&frame.pager.indicator),
        next_disabled = disabled(frame.pager.next_enabled),
        next = escape_html(&labels.next),
        status = escape_html(&frame.status),
    )
}

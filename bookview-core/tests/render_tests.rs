//! Rendering tests for bookview-core
//!
//! The generated page is parsed with `scraper` and inspected the way a
//! browser would see it; short fragments are pinned with inline snapshots.

use bookview_core::render::{Labels, Renderer};
use bookview_core::types::{demo_books, BookRecord};
use bookview_core::view::ViewState;
use scraper::{Html, Selector};

fn select(html: &Html, selector: &str) -> Vec<String> {
    let selector = Selector::parse(selector).unwrap();
    html.select(&selector)
        .map(|e| e.text().collect::<String>())
        .collect()
}

fn render(records: &[BookRecord], state: &mut ViewState) -> Html {
    let renderer = Renderer::default();
    let frame = renderer.frame(records, state);
    Html::parse_document(&renderer.page_html(&frame, state))
}

#[test]
fn test_first_page_of_demo() {
    let mut state = ViewState::new(5);
    let html = render(&demo_books(), &mut state);

    assert_eq!(select(&html, "#tbl tbody tr").len(), 5);
    assert_eq!(
        select(&html, "#tbl thead th"),
        vec!["ID", "Title", "Author", "Year", "Category"]
    );
    assert_eq!(select(&html, "#pageIndicator"), vec!["1 / 2"]);
    assert_eq!(
        select(&html, "#status"),
        vec!["Showing 5 of 10 books · page 1 of 2"]
    );
    assert_eq!(select(&html, "#btnPrev[disabled]").len(), 1);
    assert_eq!(select(&html, "#btnNext[disabled]").len(), 0);
    assert_eq!(select(&html, "#pageSize option[selected]"), vec!["5"]);
}

#[test]
fn test_cells_are_escaped() {
    let records = vec![BookRecord::new()
        .with("id", 1)
        .with("title", "<b>Bold</b> & \"quoted\"")
        .with("author", "O'Brien")];
    let mut state = ViewState::new(5);
    let html = render(&records, &mut state);

    assert_eq!(select(&html, "#tbl td b").len(), 0);
    let cells = select(&html, "#tbl tbody td");
    assert_eq!(cells[1], "<b>Bold</b> & \"quoted\"");
    assert_eq!(cells[2], "O'Brien");
}

#[test]
fn test_search_value_is_escaped() {
    let mut state = ViewState::new(5);
    state.set_filter("\"><script>");
    let html = render(&demo_books(), &mut state);

    assert_eq!(select(&html, "script").len(), 0);
    let input = Selector::parse("#search").unwrap();
    let value = html
        .select(&input)
        .next()
        .and_then(|e| e.value().attr("value"))
        .unwrap();
    assert_eq!(value, "\"><script>");
}

#[test]
fn test_sorted_header_marks_direction() {
    let books = demo_books();
    let mut state = ViewState::new(5);
    state.toggle_sort("year");
    state.toggle_sort("year");

    let frame = Renderer::default().frame(&books, &mut state);
    insta::assert_snapshot!(
        frame.header[3].to_html(),
        @r#"<th data-column="year" class="sortable sorted" aria-sort="descending">Year ▼</th>"#
    );
    insta::assert_snapshot!(frame.header[0].to_html(), @r#"<th data-column="id" class="sortable">ID</th>"#);
}

#[test]
fn test_filtered_status() {
    let books = demo_books();
    let mut state = ViewState::new(5);
    state.set_filter("python");
    state.toggle_sort("year");
    state.toggle_sort("year");

    let frame = Renderer::default().frame(&books, &mut state);
    insta::assert_snapshot!(
        frame.status,
        @r#"Showing 2 of 10 books · 2 matching "python" · sorted by Year (descending) · page 1 of 1"#
    );
}

#[test]
fn test_empty_states_are_distinct() {
    let renderer = Renderer::default();

    let mut state = ViewState::new(5);
    let empty = renderer.frame(&[], &mut state);
    assert_eq!(empty.status, "No data loaded.");

    let books = demo_books();
    state.set_filter("zzz-no-match");
    let none = renderer.frame(&books, &mut state);
    assert_eq!(none.status, "No books match \"zzz-no-match\" (10 loaded).");
    assert!(none.rows.is_empty());

    state.clear_filter();
    state.go_to(7);
    let past_end = renderer.frame(&books, &mut state);
    assert_eq!(past_end.status, "Nothing to show on this page · page 2 of 2");
    assert_eq!(past_end.rows.len(), 5);
}

#[test]
fn test_undeclared_rows_line_up_with_header() {
    let records = vec![
        BookRecord::new().with("id", 1).with("title", "A"),
        BookRecord::new().with("isbn", "X-1").with("id", 2),
    ];
    let renderer = Renderer::new(Vec::new(), Labels::default(), vec![5]);
    let mut state = ViewState::new(5);
    let frame = renderer.frame(&records, &mut state);
    let html = Html::parse_document(&renderer.page_html(&frame, &state));

    assert_eq!(select(&html, "#tbl thead th"), vec!["id", "title", "isbn"]);
    let rows = Selector::parse("#tbl tbody tr").unwrap();
    let td = Selector::parse("td").unwrap();
    let cells: Vec<Vec<String>> = html
        .select(&rows)
        .map(|r| r.select(&td).map(|c| c.text().collect()).collect())
        .collect();
    assert_eq!(cells, vec![vec!["1", "A", ""], vec!["2", "", "X-1"]]);
}

#[test]
fn test_rows_carry_preview_data() {
    let mut state = ViewState::new(5);
    let html = render(&demo_books(), &mut state);

    let rows = Selector::parse("#tbl tbody tr").unwrap();
    let attrs: Vec<(Option<&str>, Option<&str>)> = html
        .select(&rows)
        .map(|r| (r.value().attr("data-cover"), r.value().attr("data-buy")))
        .collect();

    assert_eq!(
        attrs[0].0,
        Some("https://covers.openlibrary.org/b/isbn/9780132350884-M.jpg")
    );
    assert!(attrs[0].1.is_some());
    // Refactoring has no cover
    assert_eq!(attrs[3], (None, None));
}

#[test]
fn test_vietnamese_labels() {
    let books = demo_books();
    let mut state = ViewState::new(5);
    let renderer = Renderer::new(
        bookview_core::render::Locale::Vi.columns(),
        Labels::vietnamese(),
        vec![5, 10],
    );
    let frame = renderer.frame(&books, &mut state);
    let labels: Vec<&str> = frame.header.iter().map(|h| h.label.as_str()).collect();
    assert_eq!(labels, vec!["ID", "Tên sách", "Tác giả", "Năm", "Thể loại"]);
    assert_eq!(frame.status, "Hiển thị 5 / 10 mục · Trang 1 / 2");
}

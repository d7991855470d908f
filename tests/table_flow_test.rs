//! Integration tests for a server-paginated table, from query string to view model.

mod helpers;

use std::collections::HashMap;

use helpers::BASE_URL;
use pyeza::{
    Align, BulkActionsConfig, FilterCondition, FilterOperator, FiltersToken, PaginationQuery,
    TableCell, TableColumn, TableConfig, TableRow, ToolkitConfig, apply_column_styles,
    chip_cell_from_labels, evaluate_conditions,
};

struct Client {
    id: u32,
    name: String,
    status: &'static str,
    tags: Vec<&'static str>,
}

fn clients() -> Vec<Client> {
    (1..=42)
        .map(|id| Client {
            id,
            name: format!("Client {id:02}"),
            status: if id % 3 == 0 { "inactive" } else { "active" },
            tags: vec!["north", "retail", "vip", "wholesale"],
        })
        .collect()
}

#[test]
fn test_filtered_page_round_trip() {
    let config = ToolkitConfig::from_toml_str("").expect("default config");

    let filters = FiltersToken::encode(&[FilterCondition::new(
        "status",
        FilterOperator::Equals,
        "active",
    )])
    .expect("encode filters");

    let query: PaginationQuery = serde_json::from_value(serde_json::json!({
        "page": 2,
        "size": 10,
        "sort": "name",
        "filters": filters.as_str(),
    }))
    .expect("query should deserialize");

    // The data layer decodes the token it receives and filters rows.
    let state = query.query_state().expect("query state");
    let conditions = state
        .filters
        .as_ref()
        .expect("filters present")
        .decode()
        .expect("decode filters");

    let matching: Vec<Client> = clients()
        .into_iter()
        .filter(|c| {
            let row: HashMap<String, String> =
                HashMap::from([("status".to_string(), c.status.to_string())]);
            evaluate_conditions(&conditions, &row)
        })
        .collect();
    assert_eq!(matching.len(), 28);

    let offset = query.offset(&config.pagination) as usize;
    let limit = query.limit(&config.pagination) as usize;
    let page: Vec<&Client> = matching.iter().skip(offset).take(limit).collect();

    let display = query
        .offset_request(BASE_URL, matching.len() as u64, &config.pagination)
        .expect("request")
        .with_body_url(format!("{BASE_URL}/body"))
        .build_display();

    assert_eq!((display.start_row, display.end_row), (11, 20));
    assert_eq!(display.total_pages, 3);
    assert_eq!(
        display.next_url_str(),
        format!(
            "{BASE_URL}?page=3&size=10&sort=name&dir=asc&filters={}",
            filters.as_str()
        )
    );

    let columns = vec![
        TableColumn::new("name", "Name").sortable(),
        TableColumn::new("status", "Status").align(Align::Center),
        TableColumn::new("tags", "Tags"),
    ];

    let mut rows: Vec<TableRow> = page
        .iter()
        .map(|c| TableRow {
            id: c.id.to_string(),
            cells: vec![
                TableCell::text(c.name.clone()),
                TableCell::badge(c.status, "success"),
                chip_cell_from_labels(c.tags.as_slice(), config.table.max_visible_chips),
            ],
            ..TableRow::default()
        })
        .collect();
    apply_column_styles(&columns, &mut rows);

    let mut table = TableConfig {
        id: "clients".to_string(),
        columns,
        rows,
        bulk_actions: Some(BulkActionsConfig {
            enabled: true,
            ..BulkActionsConfig::default()
        }),
        server_pagination: Some(display),
        ..TableConfig::default()
    };
    table.apply_table_settings();

    assert!(table.is_server_paginated());
    assert_eq!(table.rows.len(), 10);
    assert!(table.rows.iter().all(|r| r.show_checkbox));
    assert_eq!(table.rows[0].cells[1].align, Some(Align::Center));
    assert_eq!(table.rows[0].cells[2].chip_overflow, 1);

    let json = serde_json::to_value(&table).expect("table should serialize");
    let pagination = &json["server_pagination"];
    assert_eq!(pagination["current_page"], 2);
    assert_eq!(pagination["base_url"], BASE_URL);
    assert_eq!(pagination["body_url"], "/action/clients/table/body");
    assert_eq!(pagination["search"], serde_json::Value::Null);
    assert_eq!(pagination["sort_column"], "name");
    assert_eq!(pagination["sort_direction"], "asc");
    assert_eq!(pagination["filters"], filters.as_str());
    assert_eq!(json["rows"][0]["cells"][2]["kind"], "chips");
}

#[test]
fn test_out_of_range_page_is_clamped_to_last() {
    let config = ToolkitConfig::default();
    let query = PaginationQuery {
        page: Some(50),
        size: Some(25),
        ..PaginationQuery::default()
    };

    let display = query
        .offset_request(BASE_URL, 60, &config.pagination)
        .expect("request")
        .build_display();

    assert_eq!(display.current_page, 3);
    assert_eq!((display.start_row, display.end_row), (51, 60));
    assert!(display.next_url.is_none());
}

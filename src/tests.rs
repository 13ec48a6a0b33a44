use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::config::{ensure_webview_data_dir, AppConfig};
use crate::domain::entities::column::default_columns;
use crate::domain::entities::query::{PageParams, QueryError, DEFAULT_PAGE_SIZE};
use crate::domain::entities::record::FieldValue;
use crate::infra::cache::CachedSource;
use crate::infra::import::csv::CsvFileSource;
use crate::infra::import::json::{EmbeddedSource, JsonFileSource};
use crate::infra::import::open_source;
use crate::ui::state::controller::TableController;
use crate::usecase::ports::source::RecordSource;
use crate::usecase::services::query_service::QueryService;

fn unique_test_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("people-table-{prefix}-{nanos}"))
}

fn service_for(source: Arc<dyn RecordSource>) -> QueryService {
    QueryService::new(Arc::new(CachedSource::new(source)))
}

const TRIO_JSON: &str = r#"[
    {"index": 1, "name": "Bob"},
    {"index": 2, "name": "Ann"},
    {"index": 3, "name": "Cid"}
]"#;

#[test]
fn csv_source_reads_headers_and_infers_values() {
    let temp_dir = unique_test_dir("csv-source");
    fs::create_dir_all(&temp_dir).expect("should create temp dir");
    let csv_path = temp_dir.join("people.csv");
    fs::write(&csv_path, "index,name,age\n0,Alice,31\n1,Bob,\n").expect("should write csv fixture");

    let records = CsvFileSource::new(&csv_path)
        .load()
        .expect("csv should load");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].get("name"), Some(&FieldValue::Text("Alice".into())));
    assert_eq!(records[0].get("age"), Some(&FieldValue::Integer(31)));
    assert_eq!(records[1].get("age"), Some(&FieldValue::Null));

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn json_source_reports_missing_file() {
    let temp_dir = unique_test_dir("json-missing");
    let err = JsonFileSource::new(temp_dir.join("absent.json"))
        .load()
        .expect_err("missing file should fail");

    assert!(
        format!("{err:#}").contains("failed to read json"),
        "error should name the failing step: {err:#}"
    );
}

#[test]
fn open_source_picks_reader_by_extension() {
    for name in ["data.json", "DATA.CSV", "data.xlsx"] {
        let source = open_source(&PathBuf::from(name)).expect("known extension");
        assert!(source.describe().ends_with(name));
    }

    let err = open_source(&PathBuf::from("data.txt")).err().expect("txt is unsupported");
    assert!(err.to_string().contains("unsupported dataset format"));
}

#[test]
fn config_prefers_env_then_user_dir_then_bundled() {
    let temp_dir = unique_test_dir("config");
    fs::create_dir_all(&temp_dir).expect("should create temp dir");

    let bundled = AppConfig::resolve_from(None, Some(&temp_dir));
    assert_eq!(bundled.data_path, None);
    assert_eq!(bundled.default_page_size, DEFAULT_PAGE_SIZE);

    let user_file = temp_dir.join("data.csv");
    fs::write(&user_file, "index,name\n0,Ann\n").expect("should write user dataset");
    let from_user_dir = AppConfig::resolve_from(None, Some(&temp_dir));
    assert_eq!(from_user_dir.data_path.as_deref(), Some(user_file.as_path()));

    let override_path = temp_dir.join("override.json");
    let from_env = AppConfig::resolve_from(Some(override_path.clone()), Some(&temp_dir));
    assert_eq!(from_env.data_path, Some(override_path));

    let blank_env = AppConfig::resolve_from(Some(PathBuf::new()), None);
    assert_eq!(blank_env.data_path, None, "an empty override is ignored");

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn ensure_webview_data_dir_creates_webview2_subdir() {
    let temp_dir = unique_test_dir("webview");

    let webview_dir = ensure_webview_data_dir(&temp_dir).expect("should create webview dir");

    assert!(webview_dir.ends_with("webview2"));
    assert!(webview_dir.is_dir());

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn default_columns_mark_address_unsortable() {
    let columns = default_columns();
    let names: Vec<&str> = columns.iter().map(|c| c.name.as_str()).collect();

    assert_eq!(
        names,
        vec!["index", "name", "gender", "age", "email", "phone", "address"]
    );
    assert!(columns.iter().filter(|c| !c.sortable).all(|c| c.name == "address"));
}

#[tokio::test]
async fn service_serves_pages_from_json_file() {
    let temp_dir = unique_test_dir("service-json");
    fs::create_dir_all(&temp_dir).expect("should create temp dir");
    let json_path = temp_dir.join("data.json");
    fs::write(&json_path, TRIO_JSON).expect("should write json fixture");

    let service = service_for(Arc::new(JsonFileSource::new(&json_path)));
    let page = service
        .get_paged_data(&PageParams::default().page(1).page_size(2).order_by("name asc"))
        .await
        .expect("query should succeed");

    assert_eq!(page.total_count, 3);
    let names: Vec<String> = page.data.iter().map(|r| r.display("name")).collect();
    assert_eq!(names, vec!["Ann", "Bob"]);

    fs::remove_file(&json_path).expect("should remove fixture");
    let cached = service
        .get_paged_data(&PageParams::default().search("cid"))
        .await
        .expect("cached dataset should still be served");
    assert_eq!(cached.total_count, 1);

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[tokio::test]
async fn service_reports_source_failures() {
    let temp_dir = unique_test_dir("service-missing");
    let service = service_for(Arc::new(JsonFileSource::new(temp_dir.join("absent.json"))));

    let err = service
        .get_paged_data(&PageParams::default())
        .await
        .expect_err("missing dataset should fail");

    assert!(matches!(err, QueryError::Source(_)));
}

#[tokio::test]
async fn total_count_is_stable_across_pages_of_bundled_data() {
    let service = service_for(Arc::new(EmbeddedSource));
    let everything = service
        .get_paged_data(&PageParams::default().search(""))
        .await
        .expect("query should succeed");
    let dataset_len = EmbeddedSource.load().expect("bundled dataset").len();
    assert_eq!(everything.total_count, dataset_len, "empty search returns all rows");

    let mut seen = 0;
    let mut page = 1;
    loop {
        let result = service
            .get_paged_data(&PageParams::default().page(page).page_size(25).search("example"))
            .await
            .expect("query should succeed");
        assert_eq!(result.total_count, dataset_len, "every email matches");
        assert!(result.data.len() <= 25);
        if result.data.is_empty() {
            break;
        }
        seen += result.data.len();
        page += 1;
    }
    assert_eq!(seen, dataset_len, "pages should cover the dataset exactly once");
}

#[tokio::test]
async fn controller_round_trip_through_service() {
    let service = service_for(Arc::new(EmbeddedSource));
    let mut controller = TableController::new(DEFAULT_PAGE_SIZE);

    let ticket = controller.initial_query();
    let result = service
        .get_paged_data(&ticket.params)
        .await
        .map_err(|err| err.to_string());
    assert!(controller.apply_result(ticket.seq, result));

    assert_eq!(controller.data().len(), DEFAULT_PAGE_SIZE);
    assert_eq!(
        controller.data()[0].get("index"),
        Some(&FieldValue::Integer(0)),
        "default order is index ascending"
    );

    let last_page = controller.page_count();
    let ticket = controller.change_page(last_page);
    let result = service
        .get_paged_data(&ticket.params)
        .await
        .map_err(|err| err.to_string());
    assert!(controller.apply_result(ticket.seq, result));

    let expected_tail = controller.total_count() - (last_page - 1) * DEFAULT_PAGE_SIZE;
    assert_eq!(controller.data().len(), expected_tail);
}

//! End-to-end pull scenarios over a scripted page driver.

use async_trait::async_trait;
use mcm_specs::browser::PageDriver;
use mcm_specs::commands::PullCommand;
use mcm_specs::config::Config;
use mcm_specs::error::ScrapeError;
use mcm_specs::scrape::selectors;
use mcm_specs::SpecPair;
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

/// Serves one fixed spec table for every page and records navigations.
struct ScriptedDriver {
    navigations: Mutex<Vec<String>>,
    labels: Vec<String>,
    values: Vec<String>,
}

impl ScriptedDriver {
    fn new(labels: &[&str], values: &[&str]) -> Self {
        Self {
            navigations: Mutex::new(Vec::new()),
            labels: labels.iter().map(|s| s.to_string()).collect(),
            values: values.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[async_trait]
impl PageDriver for ScriptedDriver {
    async fn navigate(&self, url: &str) -> Result<(), ScrapeError> {
        self.navigations.lock().unwrap().push(url.to_string());
        Ok(())
    }

    async fn ready_state(&self) -> Result<String, ScrapeError> {
        Ok("complete".to_string())
    }

    async fn texts_by_class_fragment(&self, fragment: &str) -> Result<Vec<String>, ScrapeError> {
        if fragment == selectors::SPEC_LABEL_CLASS {
            Ok(self.labels.clone())
        } else {
            Ok(self.values.clone())
        }
    }

    async fn close(&mut self) {}
}

fn write_config(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", json).unwrap();
    file
}

#[tokio::test]
async fn test_single_code_end_to_end() {
    let config_file = write_config(r#"{"_PRODUCT_CODES": ["91290A115"]}"#);
    let config = Config::from_file(config_file.path()).unwrap();

    let driver = ScriptedDriver::new(
        &["Thread Size", "Length", "", "Material"],
        &["M3 x 0.5 mm", "15 mm", "unused", "Black-Oxide Alloy Steel"],
    );

    let reports = PullCommand::new(config).execute_with_driver(&driver).await.unwrap();

    assert_eq!(
        *driver.navigations.lock().unwrap(),
        vec!["https://www.mcmaster.com/91290A115/"]
    );

    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].code, "91290A115");
    assert_eq!(reports[0].url, "https://www.mcmaster.com/91290A115/");
    assert_eq!(
        reports[0].pairs,
        vec![
            SpecPair { label: "Thread Size".into(), value: "M3 x 0.5 mm".into() },
            SpecPair { label: "Length".into(), value: "15 mm".into() },
            SpecPair { label: "Material".into(), value: "Black-Oxide Alloy Steel".into() },
        ]
    );
}

#[tokio::test]
async fn test_empty_code_list_navigates_nowhere() {
    let config_file = write_config(r#"{"_PRODUCT_CODES": []}"#);
    let config = Config::from_file(config_file.path()).unwrap();

    let driver = ScriptedDriver::new(&["Thread Size"], &["M3 x 0.5 mm"]);

    let reports = PullCommand::new(config).execute_with_driver(&driver).await.unwrap();

    assert!(reports.is_empty());
    assert!(driver.navigations.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_multiple_codes_in_file_order() {
    let config_file = write_config(r#"{"_PRODUCT_CODES": ["91290A115", "92141A008"]}"#);
    let config = Config::from_file(config_file.path()).unwrap();

    let driver = ScriptedDriver::new(&[], &[]);

    let reports = PullCommand::new(config).execute_with_driver(&driver).await.unwrap();

    assert_eq!(
        *driver.navigations.lock().unwrap(),
        vec!["https://www.mcmaster.com/91290A115/", "https://www.mcmaster.com/92141A008/"]
    );
    assert_eq!(reports[0].code, "91290A115");
    assert_eq!(reports[1].code, "92141A008");
}

#[tokio::test]
async fn test_short_value_list_is_an_error_not_truncation() {
    let config_file = write_config(r#"{"_PRODUCT_CODES": ["91290A115"]}"#);
    let config = Config::from_file(config_file.path()).unwrap();

    let driver = ScriptedDriver::new(&["Thread Size", "Length"], &["M3 x 0.5 mm"]);

    let result = PullCommand::new(config).execute_with_driver(&driver).await;

    assert!(result.is_err());
    let err = format!("{:?}", result.unwrap_err());
    assert!(err.contains("no matching value"));
}

#[tokio::test]
async fn test_missing_config_key_fails_before_any_navigation() {
    let config_file = write_config(r#"{"PRODUCT_CODES": ["91290A115"]}"#);

    let result = Config::from_file(config_file.path());

    assert!(matches!(result, Err(ScrapeError::ConfigParse { .. })));
}

use crate::utils::{HEADER, Row, write_lines};
use vacancy_stats::{StatisticsConfig, VacancyReader, VacancyStatsError};

fn reader() -> VacancyReader {
    VacancyReader::new(StatisticsConfig::default()).unwrap()
}

/// Rows with an empty field or a wrong field count are dropped silently
#[test]
fn test_malformed_rows_are_discarded() {
    let dir = tempfile::tempdir().unwrap();
    let good = Row::new("Программист", 10000.0, 20000.0, "Москва", 2007);
    let path = write_lines(
        dir.path(),
        "mixed.csv",
        &[
            good.to_line(),
            "Программист,,20000,RUR,Москва,2007-01-01T00:00:00+0300".to_string(),
            "Программист,10000,20000,RUR,Москва".to_string(),
            "Программист,10000,20000,RUR,Москва,2007-01-01,extra".to_string(),
        ],
    );

    let rows = reader().read_rows_from_path(&path).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows.discarded, 3);

    let vacancies = reader().read_vacancies(&path).unwrap();
    assert_eq!(vacancies.len(), 1);
    assert_eq!(vacancies[0].valuation(), 15000.0);
}

/// Markup is removed and whitespace collapsed in every retained field
#[test]
fn test_fields_are_cleaned() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_lines(
        dir.path(),
        "html.csv",
        &["\"<b>Ведущий</b>   программист \",10000,20000,RUR,\"  Нижний   Новгород\",2007-01-01".to_string()],
    );

    let vacancies = reader().read_vacancies(&path).unwrap();
    assert_eq!(vacancies[0].name, "Ведущий программист");
    assert_eq!(vacancies[0].area_name, "Нижний Новгород");
}

#[test]
fn test_empty_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.csv");
    std::fs::write(&path, "").unwrap();

    let err = reader().read_vacancies(&path).unwrap_err();
    assert!(matches!(err, VacancyStatsError::EmptyInput(_)));
    assert!(err.is_fatal());
}

#[test]
fn test_no_valid_rows_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_lines(
        dir.path(),
        "broken.csv",
        &["Программист,,,RUR,Москва,2007-01-01".to_string()],
    );

    let err = reader().read_vacancies(&path).unwrap_err();
    assert!(matches!(err, VacancyStatsError::NoData(_)));
}

#[test]
fn test_bom_is_tolerated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bom.csv");
    let line = Row::new("Тестировщик", 1000.0, 3000.0, "Казань", 2008).to_line();
    std::fs::write(&path, format!("\u{feff}{HEADER}\n{line}\n")).unwrap();

    let vacancies = reader().read_vacancies(&path).unwrap();
    assert_eq!(vacancies.len(), 1);
    assert_eq!(vacancies[0].published_year, 2008);
}

/// Unknown currencies and malformed dates drop the row without aborting
#[test]
fn test_bad_records_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_rows_with_bad_records(dir.path());

    let vacancies = reader().read_vacancies(&path).unwrap();
    assert_eq!(vacancies.len(), 1);
    assert_eq!(vacancies[0].salary.salary_currency, "EUR");
}

#[test]
fn test_strict_currency_aborts() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_rows_with_bad_records(dir.path());
    let config = StatisticsConfig {
        fail_on_unknown_currency: true,
        ..Default::default()
    };

    let err = VacancyReader::new(config).unwrap().read_vacancies(&path).unwrap_err();
    assert_eq!(err.to_string(), "Unknown currency: GBP");
}

fn write_rows_with_bad_records(dir: &std::path::Path) -> std::path::PathBuf {
    write_lines(
        dir,
        "bad_records.csv",
        &[
            Row::new("Программист", 1000.0, 2000.0, "Москва", 2007)
                .with_currency("GBP")
                .to_line(),
            "Программист,1000,2000,RUR,Москва,07-01-01".to_string(),
            Row::new("Программист", 1000.0, 2000.0, "Москва", 2007)
                .with_currency("EUR")
                .to_line(),
        ],
    )
}

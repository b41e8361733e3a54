use crate::utils::{Row, cities_rows, write_lines, write_rows, write_year_partitions};
use vacancy_stats::{StatisticsConfig, StatisticsReport, VacancyStatsError, find_partition_files};

#[test]
fn test_report_from_single_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_rows(dir.path(), "vacancies.csv", &cities_rows());

    let report =
        StatisticsReport::generate(&input, "Программист", None, &StatisticsConfig::default())
            .unwrap();

    assert_eq!(report.name, "Программист");
    assert_eq!(report.yearly.count_by_year.values().sum::<u64>(), 13);
    assert_eq!(report.regional.region_share_big.len(), 9);

    let summary = report.summary();
    assert!(summary.contains("Salary level by region (descending)"));
    assert!(summary.contains("Vacancy count dynamics by year: {2007: 7, 2008: 6}"));
}

#[test]
fn test_report_with_partitions() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_rows(dir.path(), "vacancies.csv", &cities_rows());
    let partition_dir = dir.path().join("by_year");
    std::fs::create_dir(&partition_dir).unwrap();
    write_year_partitions(&partition_dir, &cities_rows());

    let partitions = find_partition_files(&partition_dir).unwrap();
    let config = StatisticsConfig::default();
    let split = StatisticsReport::generate(&input, "Программист", Some(&partitions), &config).unwrap();
    let unsplit = StatisticsReport::generate(&input, "Программист", None, &config).unwrap();

    assert_eq!(split, unsplit);
}

/// A row with an empty field is absent from every statistic
#[test]
fn test_rejected_row_does_not_count() {
    let dir = tempfile::tempdir().unwrap();
    let mut lines: Vec<String> = cities_rows().iter().map(Row::to_line).collect();
    lines.push("Программист,,50000,RUR,Москва,2007-05-05T10:00:00+0300".to_string());
    let input = write_lines(dir.path(), "vacancies.csv", &lines);

    let report =
        StatisticsReport::generate(&input, "Программист", None, &StatisticsConfig::default())
            .unwrap();
    assert_eq!(report.yearly.count_by_year.values().sum::<u64>(), 13);
    assert_eq!(report.regional.salary_of("Москва"), Some(57562));
}

#[test]
fn test_fatal_errors_are_reported() {
    let dir = tempfile::tempdir().unwrap();
    let config = StatisticsConfig::default();

    let empty = dir.path().join("empty.csv");
    std::fs::write(&empty, "").unwrap();
    let err = StatisticsReport::generate(&empty, "Программист", None, &config).unwrap_err();
    assert!(matches!(err, VacancyStatsError::EmptyInput(_)));

    let header_only = write_lines(dir.path(), "header.csv", &[]);
    let err = StatisticsReport::generate(&header_only, "Программист", None, &config).unwrap_err();
    assert!(matches!(err, VacancyStatsError::NoData(_)));

    let strict = StatisticsConfig {
        fail_on_unknown_currency: true,
        ..Default::default()
    };
    let foreign = write_rows(
        dir.path(),
        "foreign.csv",
        &[Row::new("Программист", 1.0, 2.0, "Москва", 2007).with_currency("JPY")],
    );
    let err = StatisticsReport::generate(&foreign, "Программист", None, &strict).unwrap_err();
    assert!(matches!(err, VacancyStatsError::UnknownCurrency(code) if code == "JPY"));
}

#[test]
fn test_report_serializes_to_json() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_rows(dir.path(), "vacancies.csv", &cities_rows());
    let report =
        StatisticsReport::generate(&input, "Программист", None, &StatisticsConfig::default())
            .unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["yearly"]["count_by_year"]["2007"], 7);
    assert_eq!(json["regional"]["region_share_big"][0][0], "Москва");
}

#[test]
fn test_no_vacancies_in_year_range() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_rows(
        dir.path(),
        "old.csv",
        &[Row::new("Программист", 10000.0, 20000.0, "Москва", 2003)],
    );

    let err = StatisticsReport::generate(&input, "Программист", None, &StatisticsConfig::default())
        .unwrap_err();
    assert!(matches!(err, VacancyStatsError::NoVacancies(_)));
    assert_eq!(err.to_string(), "No vacancies to aggregate for regional statistics");
}

/// An unknown currency outside the year range does not abort a strict run
#[test]
fn test_strict_currency_outside_range_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let mut rows = cities_rows();
    rows.push(Row::new("Программист", 1.0, 2.0, "Москва", 2003).with_currency("JPY"));
    let input = write_rows(dir.path(), "vacancies.csv", &rows);
    let strict = StatisticsConfig {
        fail_on_unknown_currency: true,
        ..Default::default()
    };

    let report = StatisticsReport::generate(&input, "Программист", None, &strict).unwrap();
    assert_eq!(report.yearly.count_by_year.values().sum::<u64>(), 13);
}

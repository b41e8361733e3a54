use crate::utils::{Row, big_cities_rows, cities_rows, write_rows, write_year_partitions};
use vacancy_stats::{StatisticsConfig, Vacancy, YearRange, YearlyStatistics};

fn config() -> StatisticsConfig {
    StatisticsConfig {
        year_range: YearRange::new(2007, 2014),
        ..Default::default()
    }
}

fn vacancies(rows: &[Row]) -> Vec<Vacancy> {
    rows.iter().map(Row::to_vacancy).collect()
}

#[test]
fn test_counts_and_salaries_by_year() {
    let stats =
        YearlyStatistics::from_partitions(&[vacancies(&cities_rows())], "Программист", &config())
            .unwrap();

    assert_eq!(stats.count_by_year.get(&2007), Some(&7));
    assert_eq!(stats.count_by_year.get(&2008), Some(&6));
    assert_eq!(stats.count_by_year_name.get(&2007), Some(&3));
    assert_eq!(stats.count_by_year_name.get(&2008), Some(&2));
    // 2008 programmers: 35000 and 65000
    assert_eq!(stats.salary_by_year_name.get(&2008), Some(&50000));
}

/// Splitting a dataset into year partitions does not change the result
#[test]
fn test_partitioned_files_match_unsplit_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let mut rows = cities_rows();
    rows.extend(big_cities_rows());
    rows.push(Row::new("Программист", 90000.0, 110000.0, "Москва", 2011));

    let partitions = write_year_partitions(dir.path(), &rows);
    assert_eq!(partitions.len(), 3);

    let unsplit = YearlyStatistics::from_partitions(&[vacancies(&rows)], "Программист", &config()).unwrap();
    let split = YearlyStatistics::from_partition_files(&partitions, "Программист", &config()).unwrap();

    assert_eq!(split, unsplit);
    assert_eq!(split.count_by_year.keys().copied().collect::<Vec<_>>(), vec![2007, 2008, 2011]);
}

/// Unreadable partitions contribute nothing instead of failing the run
#[test]
fn test_failed_partitions_are_absent() {
    let dir = tempfile::tempdir().unwrap();
    let good = write_rows(
        dir.path(),
        "2007.csv",
        &[Row::new("Программист", 10000.0, 30000.0, "Москва", 2007)],
    );
    let empty = dir.path().join("2008.csv");
    std::fs::write(&empty, "").unwrap();
    let missing = dir.path().join("2009.csv");

    let stats =
        YearlyStatistics::from_partition_files(&[good, empty, missing], "Программист", &config())
            .unwrap();

    assert_eq!(stats.count_by_year.len(), 1);
    assert_eq!(stats.salary_by_year.get(&2007), Some(&20000));
}

/// A partition without name matches leaves its year out of the name statistics
#[test]
fn test_empty_name_subset_leaves_year_absent() {
    let dir = tempfile::tempdir().unwrap();
    let rows = vec![
        Row::new("Программист", 10000.0, 30000.0, "Москва", 2007),
        Row::new("Менеджер", 20000.0, 30000.0, "Москва", 2008),
    ];
    let partitions = write_year_partitions(dir.path(), &rows);

    let stats = YearlyStatistics::from_partition_files(&partitions, "Программист", &config()).unwrap();
    assert_eq!(stats.count_by_year.len(), 2);
    assert!(stats.count_by_year_name.contains_key(&2007));
    assert!(!stats.count_by_year_name.contains_key(&2008));
    assert!(!stats.salary_by_year_name.contains_key(&2008));
}

#[test]
fn test_years_outside_range_are_ignored() {
    let rows = vec![
        Row::new("Программист", 10000.0, 10000.0, "Москва", 2006),
        Row::new("Программист", 20000.0, 20000.0, "Москва", 2007),
        Row::new("Программист", 30000.0, 30000.0, "Москва", 2008),
    ];
    let config = StatisticsConfig {
        year_range: YearRange::new(2007, 2008),
        ..Default::default()
    };

    let stats = YearlyStatistics::from_partitions(&[vacancies(&rows)], "", &config).unwrap();
    assert_eq!(stats.count_by_year.keys().copied().collect::<Vec<_>>(), vec![2007, 2008]);
    assert_eq!(stats.count_by_year_name, stats.count_by_year);
}

#[test]
fn test_zero_workers_is_rejected() {
    let config = StatisticsConfig {
        max_workers: 0,
        ..Default::default()
    };
    assert!(YearlyStatistics::from_partitions(&[vacancies(&cities_rows())], "", &config).is_err());
}

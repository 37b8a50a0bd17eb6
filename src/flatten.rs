use crate::error::{Error, Result};
use crate::models::{Vacancy, VacancyRow};

/// Project salaried listings onto output rows, preserving input order.
///
/// Listings without a usable salary are dropped silently. A listing that
/// does carry a salary must be complete: a hole in any other exported field
/// aborts the whole batch.
pub fn flatten(vacancies: &[Vacancy]) -> Result<Vec<VacancyRow>> {
    if vacancies.is_empty() {
        return Ok(Vec::new());
    }

    vacancies
        .iter()
        .filter_map(|vacancy| {
            vacancy
                .salary
                .as_ref()
                .filter(|salary| !salary.is_blank())
                .map(|salary| (vacancy, salary))
        })
        .map(|(vacancy, salary)| {
            Ok(VacancyRow {
                name: vacancy.name.clone().ok_or(Error::MissingField("name"))?,
                area_name: vacancy
                    .area
                    .as_ref()
                    .and_then(|area| area.name.clone())
                    .ok_or(Error::MissingField("area.name"))?,
                salary_from: salary.from,
                salary_to: salary.to,
                salary_currency: salary
                    .currency
                    .clone()
                    .ok_or(Error::MissingField("salary.currency"))?,
                published_at: vacancy
                    .published_at
                    .clone()
                    .ok_or(Error::MissingField("published_at"))?,
            })
        })
        .collect()
}

use serde::{Deserialize, Serialize};

/// One listing as the API returns it. Only the exported fields are decoded;
/// the rest of the payload is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Vacancy {
    pub name: Option<String>,
    pub area: Option<Area>,
    pub salary: Option<Salary>,
    pub published_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Area {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Salary {
    pub from: Option<i64>,
    pub to: Option<i64>,
    pub currency: Option<String>,
}

impl Salary {
    /// Some listings carry `"salary": {}` or an all-null salary object;
    /// those count as having no salary at all.
    pub fn is_blank(&self) -> bool {
        self.from.is_none() && self.to.is_none() && self.currency.is_none()
    }
}

/// One exported row. Field order here is the column order in the CSV.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VacancyRow {
    pub name: String,
    pub area_name: String,
    pub salary_from: Option<i64>,
    pub salary_to: Option<i64>,
    pub salary_currency: String,
    pub published_at: String,
}

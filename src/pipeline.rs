use rayon::prelude::*;
use rayon::ThreadPoolBuilder;

use crate::client::{VacancyQuery, VacancySource};
use crate::flatten::flatten;
use crate::models::{Vacancy, VacancyRow};
use crate::writer::save_to_csv;
use crate::Result;

/// One of the calendar ranges the export is partitioned into.
#[derive(Debug, Clone)]
pub struct FetchWindow {
    pub date_from: String,
    pub date_to: String,
}

impl FetchWindow {
    pub fn new(date_from: impl Into<String>, date_to: impl Into<String>) -> Self {
        Self {
            date_from: date_from.into(),
            date_to: date_to.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FetchPlan {
    pub specialization: u32,
    pub per_page: u32,
    pub pages_per_window: u32,
    pub windows: Vec<FetchWindow>,
    /// 0 sizes the pool to the machine.
    pub thread_count: usize,
}

impl Default for FetchPlan {
    fn default() -> Self {
        Self {
            specialization: 1,
            per_page: 100,
            pages_per_window: 20,
            windows: vec![
                FetchWindow::new("2022-12-05T00:00:00", "2022-12-05T12:00:00"),
                FetchWindow::new("2022-12-05T00:12:00", "2022-12-06T00:00:00"),
            ],
            thread_count: 0,
        }
    }
}

impl FetchPlan {
    /// Expand to the flat request list: every page of every window, window
    /// order first, page order within a window. Output rows follow this
    /// order exactly.
    pub fn queries(&self) -> Vec<VacancyQuery> {
        self.windows
            .iter()
            .flat_map(|window| {
                (0..self.pages_per_window).map(move |page| VacancyQuery {
                    specialization: self.specialization,
                    date_from: window.date_from.clone(),
                    date_to: window.date_to.clone(),
                    per_page: self.per_page,
                    page,
                })
            })
            .collect()
    }
}

pub struct FetchPipeline {
    plan: FetchPlan,
}

#[must_use = "pipeline must end with .save() to write the export"]
pub struct PipelineWithRows {
    rows: Vec<VacancyRow>,
}

impl FetchPipeline {
    pub fn new(plan: FetchPlan) -> Self {
        Self { plan }
    }

    /// Fetch every page, then flatten every page, as two parallel map
    /// phases on one pool. Every page is in hand before any flattening
    /// starts, results stay in request order, and the first failed page or
    /// malformed record aborts the run.
    pub fn fetch(self, source: &impl VacancySource) -> Result<PipelineWithRows> {
        let queries = self.plan.queries();
        let pool = ThreadPoolBuilder::new()
            .num_threads(self.plan.thread_count)
            .build()?;

        println!(
            "fetching {} pages across {} windows..",
            queries.len(),
            self.plan.windows.len()
        );
        let pages: Vec<Vec<Vacancy>> = pool.install(|| {
            queries
                .par_iter()
                .map(|query| source.fetch_page(query))
                .collect::<Result<Vec<_>>>()
        })?;

        let tables: Vec<Vec<VacancyRow>> = pool.install(|| {
            pages
                .par_iter()
                .map(|page| flatten(page))
                .collect::<Result<Vec<_>>>()
        })?;

        let rows: Vec<VacancyRow> = tables.into_iter().flatten().collect();
        println!("✅ {} vacancies collected", rows.len());

        Ok(PipelineWithRows { rows })
    }
}

impl PipelineWithRows {
    pub fn rows(&self) -> &[VacancyRow] {
        &self.rows
    }

    pub fn save(self, path: &str) -> Result<()> {
        save_to_csv(&self.rows, path)?;
        println!("✅ csv saved: {}", path);
        Ok(())
    }
}

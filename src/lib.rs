pub mod client;
pub mod error;
pub mod flatten;
pub mod models;
pub mod pipeline;
pub mod writer;

pub use client::{HhClient, VacancyQuery, VacancySource, HH_API_BASE_URL};
pub use error::{Error, Result};
pub use flatten::flatten;
pub use models::{Area, Salary, Vacancy, VacancyRow};
pub use pipeline::{FetchPipeline, FetchPlan, FetchWindow, PipelineWithRows};
pub use writer::save_to_csv;

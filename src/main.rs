use hh_vacancies::{FetchPipeline, FetchPlan, FetchWindow, HhClient, Result};

const OUTPUT_PATH: &str = "vacancies_from_hh.csv";

fn main() -> Result<()> {
    let plan = FetchPlan {
        specialization: 1,
        per_page: 100,
        pages_per_window: 20,
        windows: vec![
            FetchWindow::new("2022-12-05T00:00:00", "2022-12-05T12:00:00"),
            FetchWindow::new("2022-12-05T00:12:00", "2022-12-06T00:00:00"),
        ],
        thread_count: 0,
    };

    let client = HhClient::new()?;
    FetchPipeline::new(plan).fetch(&client)?.save(OUTPUT_PATH)
}

use std::io;

use topnkit::rec::{PopularityRecommender, PreferenceData, RunnerBuilder, TsvFormat};

const INTERACTIONS: &str = "\
ann\ttea
ann\tjam
bob\ttea
bob\tham
cy\ttea
cy\tjam
";

fn main() {
    let data: PreferenceData<String, String> =
        PreferenceData::read_tsv(INTERACTIONS.as_bytes()).unwrap();
    let recommender = PopularityRecommender::new(&data);

    let runner = RunnerBuilder::new().max_length(1).build(
        data.users().iter().cloned(),
        TsvFormat::new(),
        |user: &String| -> Vec<String> {
            data.items()
                .iter()
                .filter(|item| !data.has_interacted(user, item))
                .cloned()
                .collect()
        },
    );

    let summary = runner.run(&recommender, io::stdout().lock()).unwrap();
    println!("users={} rows={}", summary.users, summary.rows);
}

// Expected output:
// ann	ham	1
// bob	jam	2
// cy	ham	1
// users=3 rows=3
//
// Explanation: tea (3 users) is seen by everyone, so each user gets the most
// popular item they have not interacted with yet.

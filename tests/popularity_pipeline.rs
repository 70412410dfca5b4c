// ==============================================
// POPULARITY PIPELINE TESTS (integration)
// ==============================================
//
// TSV in, ranked TSV out, through PreferenceData, PopularityRecommender and
// CandidatesRunner.

use topnkit::rec::{PopularityRecommender, PreferenceData, RunnerBuilder, TsvFormat};
use topnkit::traits::Recommender;

const INPUT: &str = "\
# user\titem\trating
alice\tdune\t5
alice\temma\t3
bob\tdune\t4
bob\tulysses\t2
carol\tdune\t5
carol\temma\t4
dave\tulysses\t1
";

fn load() -> PreferenceData<String, String> {
    PreferenceData::read_tsv(INPUT.as_bytes()).unwrap()
}

#[test]
fn popularity_ranking_from_tsv() {
    let data = load();
    let rec = PopularityRecommender::new(&data);
    let ranking: Vec<(&str, f64)> = rec
        .ranking()
        .iter()
        .map(|(item, score)| (item.as_str(), *score))
        .collect();
    assert_eq!(
        ranking,
        vec![("dune", 3.0), ("ulysses", 2.0), ("emma", 2.0)]
    );
}

#[test]
fn unseen_items_per_user_end_to_end() {
    let data = load();
    let rec = PopularityRecommender::new(&data);
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

    let mut out = Vec::new();
    let summary = runner.run(&rec, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(
        text,
        "alice\tulysses\t2\nbob\temma\t2\ncarol\tulysses\t2\ndave\tdune\t3\n"
    );
    assert_eq!(summary.users, 4);
    assert_eq!(summary.rows, 4);
}

#[test]
fn output_reads_back_as_preferences() {
    let data = load();
    let rec = PopularityRecommender::new(&data);
    let runner = RunnerBuilder::new().build(
        vec!["zed".to_string()],
        TsvFormat::new(),
        |_: &String| data.items().to_vec(),
    );

    let mut out = Vec::new();
    runner.run(&rec, &mut out).unwrap();

    let echoed: PreferenceData<String, String> = PreferenceData::read_tsv(out.as_slice()).unwrap();
    assert_eq!(echoed.num_users(), 1);
    assert_eq!(echoed.num_items(), 3);
}

#[test]
fn filter_and_length_through_trait_object() {
    let data = load();
    let rec = PopularityRecommender::new(&data);
    let dyn_rec: &dyn Recommender<String, String> = &rec;

    let list = dyn_rec.recommend(&"alice".to_string(), 2, &|item| item != "dune");
    let items: Vec<&str> = list.items.iter().map(|(i, _)| i.as_str()).collect();
    assert_eq!(items, vec!["ulysses", "emma"]);
}

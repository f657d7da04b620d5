mod common;

use std::fs;
use std::sync::Arc;
use std::thread;
use sememe_similarity::core::stats::LexiconStats;
use sememe_similarity::scoring::explanation::SenseComparison;
use sememe_similarity::{Config, ErrorKind, Lexicon};

const EPS: f64 = 1e-12;

fn open() -> (common::Fixture, Lexicon) {
    let fixture = common::fixture();
    let lexicon = Lexicon::open(&fixture.config).unwrap();
    (fixture, lexicon)
}

#[test]
fn load_reports_counts_and_skips_bad_lines() {
    let (_fixture, lexicon) = open();
    assert_eq!(
        lexicon.stats(),
        &LexiconStats {
            words: 8,
            senses: 9,
            structural_senses: 2,
            primitives: 11,
            skipped_glossary_lines: 1,
            skipped_hierarchy_lines: 0,
        }
    );

    let engine = lexicon.engine();
    assert!(engine.hierarchy().is_primitive("雇用"));
    assert!(engine.store().contains("中国"));
    assert_eq!(engine.params().default_distance, 20);
}

#[test]
fn primitive_queries() {
    let (_fixture, lexicon) = open();
    assert_eq!(lexicon.distance_of_primitives("雇用", "争斗"), 2);
    assert!((lexicon.similarity_of_primitives("雇用", "争斗") - 1.6 / 3.6).abs() < EPS);

    for p in ["实体", "人", "牲畜", "雇用", "属性"] {
        assert_eq!(lexicon.distance_of_primitives(p, p), 0);
        assert_eq!(lexicon.similarity_of_primitives(p, p), 1.0);
    }

    assert_eq!(lexicon.distance_of_primitives("人", "属性"), 20);
    assert!((lexicon.similarity_of_primitives("人", "属性") - 1.6 / 21.6).abs() < EPS);
}

#[test]
fn identical_first_primitive_words() {
    let (_fixture, lexicon) = open();
    assert!((lexicon.similarity_of_words("牛", "猪") - 1.0).abs() < EPS);

    let explanation = lexicon.explain_words("牛", "猪").unwrap();
    assert_eq!((explanation.sense1, explanation.sense2), (0, 0));
    assert_eq!(explanation.pairs_scored, 2);
}

#[test]
fn relation_symbols_damp_the_last_layer() {
    let (_fixture, lexicon) = open();
    let explanation = lexicon.explain_words("打", "揍").unwrap();
    let SenseComparison::Content(layers) = explanation.best.comparison else {
        panic!("expected content senses");
    };
    assert_eq!(layers.first, 1.0);
    assert_eq!(layers.others, 1.0);
    assert_eq!(layers.relational, 1.0);
    assert!((layers.symbols - 0.2).abs() < EPS);
    assert!((explanation.score() - (0.5 + 0.2 + 0.17 + 0.13 * 0.2)).abs() < EPS);
}

#[test]
fn partially_shared_relations() {
    let (_fixture, lexicon) = open();
    let first = 1.6 / 3.6;
    let relational = (1.0 + 0.2) / 2.0;
    let expected = 0.5 * first + 0.2 * first + 0.17 * first * relational + 0.13 * first * relational;
    assert!((lexicon.similarity_of_words("打", "雇") - expected).abs() < 1e-9);
}

#[test]
fn function_words() {
    let (_fixture, lexicon) = open();
    assert_eq!(lexicon.similarity_of_words("的", "之"), 1.0);
    assert_eq!(lexicon.similarity_of_words("的", "牛"), 0.0);
    assert_eq!(lexicon.similarity_of_words("打", "之"), 0.0);
}

#[test]
fn unknown_words_score_zero() {
    let (_fixture, lexicon) = open();
    assert_eq!(lexicon.similarity_of_words("牛", "麒麟"), 0.0);
    assert_eq!(lexicon.similarity_of_words("麒麟", "牛"), 0.0);
    let err = lexicon.explain_words("麒麟", "牛").unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[test]
fn single_sense_words_are_symmetric() {
    let (_fixture, lexicon) = open();
    let words = ["猪", "中国", "雇", "打", "揍"];
    for a in words {
        for b in words {
            assert_eq!(lexicon.similarity_of_words(a, b), lexicon.similarity_of_words(b, a), "{} {}", a, b);
        }
    }
}

#[test]
fn greedy_pick_order_depends_on_argument_order() {
    let (_fixture, lexicon) = open();
    let engine = lexicon.engine();
    let forward: Vec<String> = ["中国", "人", "兽"].iter().map(|s| s.to_string()).collect();
    let backward: Vec<String> = ["兽", "人", "中国"].iter().map(|s| s.to_string()).collect();

    let picks_forward: Vec<&str> = engine
        .list_matches(&forward, &backward)
        .iter()
        .map(|p| forward[p.left].as_str())
        .collect();
    let picks_backward: Vec<&str> = engine
        .list_matches(&backward, &forward)
        .iter()
        .map(|p| backward[p.left].as_str())
        .collect();

    // Tied perfect matches are taken in scan order of whichever list is first.
    assert_eq!(picks_forward, vec!["中国", "人", "兽"]);
    assert_eq!(picks_backward, vec!["兽", "人", "中国"]);
    assert_eq!(engine.list_similarity(&forward, &backward), 1.0);
    assert_eq!(engine.list_similarity(&backward, &forward), 1.0);
}

#[test]
fn batch_keeps_input_order() {
    let (_fixture, lexicon) = open();
    let pairs: Vec<(String, String)> = [("牛", "猪"), ("的", "牛"), ("打", "揍"), ("麒麟", "牛")]
        .iter()
        .map(|(a, b)| (a.to_string(), b.to_string()))
        .collect();

    let batch = lexicon.similarity_batch(&pairs);
    let sequential: Vec<f64> = pairs
        .iter()
        .map(|(a, b)| lexicon.similarity_of_words(a, b))
        .collect();
    assert_eq!(batch, sequential);

    let words: Vec<String> = ["牛", "打", "的"].iter().map(|s| s.to_string()).collect();
    let matrix = lexicon.similarity_matrix(&words, &words);
    assert_eq!(matrix.len(), 3);
    assert_eq!(matrix[2][2], 1.0);
    assert_eq!(matrix[0][2], 0.0);
}

#[test]
fn concurrent_queries_agree() {
    let (_fixture, lexicon) = open();
    let lexicon = Arc::new(lexicon);
    let expected = lexicon.similarity_of_words("打", "雇");

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let lexicon = Arc::clone(&lexicon);
            thread::spawn(move || {
                (0..50)
                    .map(|_| lexicon.similarity_of_words("打", "雇"))
                    .collect::<Vec<f64>>()
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap().iter().all(|s| *s == expected));
    }
    // stored senses are untouched by matching
    assert_eq!(lexicon.similarity_of_words("打", "雇"), expected);
}

#[test]
fn missing_files_fail_the_load() {
    let fixture = common::fixture();

    let mut config = fixture.config.clone();
    config.glossary_path = fixture.dir.path().join("absent.dat");
    assert_eq!(Lexicon::open(&config).unwrap_err().kind, ErrorKind::Io);

    let mut config = fixture.config.clone();
    config.hierarchy_path = fixture.dir.path().join("absent.dat");
    assert_eq!(Lexicon::open(&config).unwrap_err().kind, ErrorKind::Io);
}

#[test]
fn invalid_params_are_rejected() {
    let mut fixture = common::fixture();
    fixture.config.params.beta = [0.9, 0.9, 0.0, 0.0];
    assert_eq!(Lexicon::open(&fixture.config).unwrap_err().kind, ErrorKind::InvalidArgument);
}

#[test]
fn opens_from_json_config() {
    let fixture = common::fixture();
    let config_path = fixture.dir.path().join("config.json");
    let json = serde_json::json!({
        "glossary_path": fixture.config.glossary_path,
        "hierarchy_path": fixture.config.hierarchy_path,
        "workers": 1,
        "params": { "gamma": 0.1 }
    });
    fs::write(&config_path, json.to_string()).unwrap();

    let config = Config::from_json_file(&config_path).unwrap();
    assert_eq!(config.params.gamma, 0.1);
    let lexicon = Lexicon::open(&config).unwrap();
    assert_eq!(lexicon.engine().params().gamma, 0.1);
    assert_eq!(lexicon.engine().token_similarity("人", "中国"), 0.1);
}

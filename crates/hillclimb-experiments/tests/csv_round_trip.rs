// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use hillclimb_experiments::{
    config::ExperimentConfig,
    experiment::run_study,
    record::{EggholderRecord, NQueensRecord, SuccessRecord},
    sink::{CsvSink, read_eggholder, read_nqueens, read_success},
};

#[test]
fn test_eggholder_table_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let sink = CsvSink::new(dir.path());
    let records = vec![
        EggholderRecord {
            run: 1,
            minimum_value: -959.6406627208505,
        },
        EggholderRecord {
            run: 2,
            minimum_value: -0.1,
        },
        EggholderRecord {
            run: 3,
            minimum_value: 1234.5,
        },
    ];

    let path = sink.write_eggholder(&records).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("Run,Minimum Value\n"));
    assert_eq!(read_eggholder(&path).unwrap(), records);
}

#[test]
fn test_nqueens_table_uses_capitalised_booleans() {
    let dir = tempfile::tempdir().unwrap();
    let sink = CsvSink::new(dir.path());
    let records = vec![
        NQueensRecord {
            run: 1,
            attacks: 0,
            is_solution: true,
        },
        NQueensRecord {
            run: 2,
            attacks: 3,
            is_solution: false,
        },
    ];

    let path = sink.write_nqueens(8, &records).unwrap();
    assert!(path.ends_with("nqueens_results_N8.csv"));

    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text, "Run,Attacks,Is Solution\n1,0,True\n2,3,False\n");
    assert_eq!(read_nqueens(&path).unwrap(), records);
}

#[test]
fn test_nqueens_reader_accepts_lowercase_and_rejects_garbage() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lower.csv");
    std::fs::write(&path, "Run,Attacks,Is Solution\n1,0,true\n2,1,false\n").unwrap();
    let records = read_nqueens(&path).unwrap();
    assert!(records[0].is_solution);
    assert!(!records[1].is_solution);

    let bad = dir.path().join("bad.csv");
    std::fs::write(&bad, "Run,Attacks,Is Solution\n1,0,yes\n").unwrap();
    let err = read_nqueens(&bad).unwrap_err();
    assert!(err.to_string().contains("bad.csv"));
}

#[test]
fn test_sink_creates_nested_directories() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("a").join("b");
    let sink = CsvSink::new(&nested);
    let records = vec![SuccessRecord {
        board_size: 8,
        solutions: 14,
        trials: 100,
    }];

    let path = sink.write_success(&records).unwrap();

    assert!(nested.is_dir());
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "N,Solutions,Trials\n8,14,100\n"
    );
    assert_eq!(read_success(&path).unwrap(), records);
}

#[test]
fn test_reading_a_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    assert!(read_eggholder(&dir.path().join("missing.csv")).is_err());
}

#[test]
fn test_study_writes_every_table() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("results");
    let config = ExperimentConfig::builder()
        .trials(6)
        .max_no_improve(20)
        .board_sizes([4, 5])
        .seed(Some(2025))
        .workers(2)
        .out_dir(&out)
        .build()
        .unwrap();

    let report = run_study(&config).unwrap();

    assert_eq!(report.files.len(), 4);
    let sink = CsvSink::new(&out);

    let eggholder = read_eggholder(&sink.eggholder_path()).unwrap();
    assert_eq!(eggholder.len(), 6);
    assert_eq!(
        eggholder.iter().map(|r| r.run).collect::<Vec<_>>(),
        vec![1, 2, 3, 4, 5, 6]
    );
    let summary = report.eggholder.unwrap();
    assert!(eggholder.iter().all(|r| r.minimum_value >= summary.best));

    let success = read_success(&sink.success_path()).unwrap();
    assert_eq!(success.len(), 2);
    for (record, n) in success.iter().zip([4, 5]) {
        let rows = read_nqueens(&sink.nqueens_path(n)).unwrap();
        assert_eq!(rows.len(), 6);
        assert_eq!(record.board_size, n);
        assert_eq!(record.trials, 6);
        assert_eq!(
            record.solutions,
            rows.iter().filter(|r| r.is_solution).count()
        );
        assert!(rows.iter().all(|r| r.is_solution == (r.attacks == 0)));
    }

    // Same seed, same tables.
    let again = run_study(&config).unwrap();
    assert_eq!(again.nqueens, report.nqueens);
    assert_eq!(again.eggholder, report.eggholder);
}

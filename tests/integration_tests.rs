use approx::assert_abs_diff_eq;
use chrono::NaiveDate;
use xirr_engine::cashflow::{load_transactions_from_reader, transactions_from_series};
use xirr_engine::{calculate_xirr, SolverConfig, Transaction, XirrCalculator, XirrError, XirrReport};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn closed_form_one_year() {
    let transactions = [
        Transaction::new(-1000.0, date(2019, 3, 1)),
        Transaction::new(1100.0, date(2020, 2, 29)),
    ];
    // 365 days apart across a leap day
    let rate = calculate_xirr(&transactions).unwrap();
    assert_abs_diff_eq!(rate, 0.10, epsilon = 1e-4);
}

#[test]
fn csv_pipeline_multi_period() {
    let csv = "\
when,amount
2008-01-01,-10000
2008-03-01,2750
2008-10-30,4250
2009-02-15,3250
2009-04-01,2750
";
    let transactions = load_transactions_from_reader(csv.as_bytes()).unwrap();
    let solution = XirrCalculator::default().solve(&transactions, 0.1).unwrap();

    assert!((solution.rate - 0.373).abs() < 1e-2, "got {}", solution.rate);
    let report = XirrReport::from_outcome(&Ok(solution), transactions.len());
    assert!(report.headline().ends_with('%'));
}

#[test]
fn monthly_totals_row_with_header_labels() {
    // Totals row and month-year header axis as a reporting grid supplies them
    let totals = [-5000.0, 1000.0, 1000.0, 1000.0, 1000.0, 1500.0];
    let headers = ["Jan 2019", "Apr 2019", "Jul 2019", "Oct 2019", "Jan 2020", "Apr 2020"];

    let transactions = transactions_from_series(&totals, &headers).unwrap();
    let rate = calculate_xirr(&transactions).unwrap();

    // 5,500 back on 5,000 within ~15 months is a modest positive return
    assert!(rate > 0.0 && rate < 0.2, "got {}", rate);
}

#[test]
fn configured_precision_is_honoured() {
    let transactions = [
        Transaction::new(-10000.0, date(2008, 1, 1)),
        Transaction::new(2750.0, date(2008, 3, 1)),
        Transaction::new(4250.0, date(2008, 10, 30)),
        Transaction::new(3250.0, date(2009, 2, 15)),
        Transaction::new(2750.0, date(2009, 4, 1)),
    ];

    let one_step = XirrCalculator::new(SolverConfig::default().with_max_iterations(1));
    match one_step.compute(&transactions, 0.1) {
        Err(XirrError::ConvergenceError { iterations, .. }) => assert_eq!(iterations, 1),
        other => panic!("expected ConvergenceError, got {other:?}"),
    }
}

#[test]
fn failures_render_as_absent_value() {
    let transactions = [
        Transaction::new(100.0, date(2020, 1, 1)),
        Transaction::new(50.0, date(2020, 1, 31)),
    ];
    let outcome = XirrCalculator::default().solve(&transactions, 0.1);
    let report = XirrReport::from_outcome(&outcome, transactions.len());

    assert!(report.rate.is_none());
    assert_eq!(report.headline(), "");
    assert!(report.error.is_some());
}

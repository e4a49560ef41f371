//! Integration tests for outcomes at the boundary with `Result`-based code.

use std::{fs, io};

use anyhow::Context as _;
use outcome::{Fault, FaultCategory, IntoOutcome, OptionOutcomeExt, Outcome};
use rstest::{fixture, rstest};

/// Parsed `key=value` setting used by the pipeline under test.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Setting {
    key: String,
    port: u16,
}

fn split(line: &str) -> Outcome<(&str, &str)> {
    line.split_once('=')
        .ok_or_fault(|| Fault::new("Syntax", "missing '='").with_arg("line", line))
}

fn parse_port(raw: &str) -> Outcome<u16> {
    raw.trim()
        .parse::<u16>()
        .map_err(|err| Fault::from_error("Parse", err).with_arg("raw", raw.trim()))
        .into_outcome()
}

fn parse_setting(line: &str) -> Outcome<Setting> {
    split(line).and_then(|(key, raw)| {
        parse_port(raw).map(|port| Setting {
            key: key.trim().to_owned(),
            port,
        })
    })
}

#[fixture]
fn config_lines() -> Vec<&'static str> {
    vec!["http = 8080", "admin=9000", "metrics = 9100"]
}

#[rstest]
fn all_valid_lines_parse(config_lines: Vec<&'static str>) {
    let parsed = Outcome::all(config_lines.into_iter().map(parse_setting));
    let ports = parsed.map(|settings| settings.into_iter().map(|s| s.port).collect::<Vec<_>>());
    assert_eq!(ports, Outcome::success(vec![8080, 9000, 9100]));
}

#[rstest]
#[case("http 8080", "Syntax")]
#[case("http = eighty", "Parse")]
#[case("http = 70000", "Parse")]
fn invalid_lines_report_their_category(#[case] line: &str, #[case] category: &str) {
    let reported =
        parse_setting(line).fold_with(|fault| fault.category().to_string(), |_| String::new());
    assert_eq!(reported, category);
}

#[test]
fn gather_reports_every_bad_line() {
    let lines = ["http = 8080", "broken", "admin = x"];
    let gathered = Outcome::gather(lines.into_iter().map(parse_setting));
    let categories = gathered.fold_with(
        |fault| {
            assert_eq!(fault.category(), &FaultCategory::AGGREGATE);
            fault
                .sub_faults()
                .iter()
                .map(|f| f.category().to_string())
                .collect::<Vec<_>>()
        },
        |_| Vec::new(),
    );
    assert_eq!(categories, ["Syntax", "Parse"]);
}

#[test]
fn io_errors_become_io_faults() {
    let read = fs::read_to_string("/definitely/missing/outcome.conf").into_outcome();
    let (category, kind) = read.fold_with(
        |fault| (fault.category().clone(), fault.arg("kind").map(str::to_owned)),
        |_| (FaultCategory::from("Unexpected"), None),
    );
    assert_eq!(category, FaultCategory::IO);
    assert_eq!(kind.as_deref(), Some("NotFound"));
}

#[test]
fn faults_flow_into_anyhow() {
    fn load() -> anyhow::Result<u16> {
        let port = parse_port("eighty").into_result().context("loading port")?;
        Ok(port)
    }
    let err = load().expect_err("an unparsable port should fail");
    assert_eq!(err.to_string(), "loading port");
    let fault = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<Fault>())
        .expect("the fault should stay in the error chain");
    assert_eq!(fault.arg("raw"), Some("eighty"));
}

#[test]
fn request_layer_wraps_lower_faults() {
    let lower = io::Error::new(io::ErrorKind::TimedOut, "upstream timed out");
    let result: Outcome<Setting> = Err::<Setting, _>(lower)
        .into_outcome()
        .map_fault(|inner| Fault::new("Request", "settings unavailable").with_sub_faults([inner]));
    let summary = result.fold_with(
        |fault| format!("{fault}\n{}", fault.sub_faults()),
        |setting| setting.key,
    );
    assert_eq!(
        summary,
        "Request: settings unavailable\n1: Io: upstream timed out (kind=TimedOut)"
    );
}

#[test]
fn gathered_faults_survive_in_anyhow_reports() {
    let gathered = Outcome::gather(["broken", "admin = x"].into_iter().map(parse_setting));
    let err = anyhow::Error::new(gathered.into_result().expect_err("both lines are invalid"));
    let report = format!("{err:#}");
    assert!(report.starts_with("Aggregate: 2 faults: "), "unexpected report: {report}");
    assert!(report.contains("1: Syntax: missing '=' (line=broken)"), "missing syntax fault");
    assert!(report.contains("2: Parse: "), "missing parse fault");
    assert!(report.contains("(raw=x)"), "missing parse argument");
}

#[test]
fn lower_causes_downcast_through_anyhow() {
    fn load() -> anyhow::Result<u16> {
        let port = parse_port("eighty").into_result().context("loading port")?;
        Ok(port)
    }
    let err = load().expect_err("an unparsable port should fail");
    let parse_error = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<std::num::ParseIntError>());
    assert!(parse_error.is_some(), "the ParseIntError should be reachable");
}

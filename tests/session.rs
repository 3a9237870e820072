use std::io::Cursor;

use disksched::utils::{run_session, SessionConfig};
use disksched::{Algorithm, Boundary, Direction, Error, InvalidInput, SweepConfig};

const BATCH: &str = "8\n95 180 34 119 11 123 62 64\n50\n";

fn session(input: &str, config: &SessionConfig) -> Result<String, Error> {
    let mut out = Vec::new();
    run_session(Cursor::new(input.as_bytes()), &mut out, config)?;
    Ok(String::from_utf8(out).unwrap())
}

fn menu_session(choice: &str) -> String {
    session(&format!("{}{}\n", BATCH, choice), &SessionConfig::default()).unwrap()
}

#[test]
fn test_fcfs_session_output() {
    let out = menu_session("1");
    assert_eq!(
        out,
        "Enter number of requests: Enter requests: Enter initial head position: \
         \nSelect Scheduling Algorithm:\n1. FCFS\n2. SSTF\n3. SCAN\n4. C-SCAN\n\
         \nFCFS Order: 50 -> 95 -> 180 -> 34 -> 119 -> 11 -> 123 -> 62 -> 64\
         \nTotal Seek Time: 644\n"
    );
}

#[test]
fn test_each_menu_choice() {
    assert!(menu_session("2").ends_with(
        "\nSSTF Order: 50 -> 62 -> 64 -> 34 -> 11 -> 95 -> 119 -> 123 -> 180\nTotal Seek Time: 236\n"
    ));
    assert!(menu_session("3").ends_with(
        "\nSCAN Order: 50 -> 62 -> 64 -> 95 -> 119 -> 123 -> 180 -> 34 -> 11\nTotal Seek Time: 299\n"
    ));
    assert!(menu_session("4").ends_with(
        "\nC-SCAN Order: 50 -> 62 -> 64 -> 95 -> 119 -> 123 -> 180 -> 11 -> 34\nTotal Seek Time: 322\n"
    ));
}

#[test]
fn test_invalid_choice_computes_nothing() {
    for choice in ["5", "0", "fifo"] {
        let out = menu_session(choice);
        assert!(out.ends_with("4. C-SCAN\nInvalid Choice!\n"), "{}", choice);
        assert!(!out.contains("Total Seek Time"));
    }
}

#[test]
fn test_preselected_algorithm_skips_menu() {
    let config = SessionConfig {
        algorithm: Some(Algorithm::CScan),
        sweep: SweepConfig {
            direction: Direction::Up,
            boundary: Boundary::DiskEdge { disk_size: 200 },
        },
    };
    let out = session(BATCH, &config).unwrap();
    assert!(!out.contains("Select Scheduling Algorithm"));
    assert!(out.ends_with(
        "\nC-SCAN Order: 50 -> 62 -> 64 -> 95 -> 119 -> 123 -> 180 -> (199) -> (0) -> 11 -> 34\
         \nTotal Seek Time: 382\n"
    ));
}

#[test]
fn test_input_file_with_comments() {
    let input = "# requests\n3\n# tracks\n10\n20\n5\n# head\n15\n# choice\nSCAN\n";
    let out = session(input, &SessionConfig::default()).unwrap();
    assert!(out.ends_with("\nSCAN Order: 15 -> 20 -> 10 -> 5\nTotal Seek Time: 20\n"));
}

#[test]
fn test_bad_input_is_reported() {
    let err = session("0\n", &SessionConfig::default()).unwrap_err();
    assert!(matches!(err, Error::InvalidInput(InvalidInput::NoRequests)));

    let err = session("2\n10 x\n", &SessionConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidInput(InvalidInput::NotANumber { what: "request", .. })
    ));

    let err = session("2\n10 20\n", &SessionConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidInput(InvalidInput::MissingValue { what: "head position" })
    ));
    assert_eq!(
        err.to_string(),
        "invalid input: expected head position, found end of input"
    );
}

#[test]
fn test_track_beyond_disk_is_reported() {
    let config = SessionConfig {
        algorithm: Some(Algorithm::Scan),
        sweep: SweepConfig {
            direction: Direction::Down,
            boundary: Boundary::DiskEdge { disk_size: 100 },
        },
    };
    let err = session(BATCH, &config).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidInput(InvalidInput::TrackOutOfRange { track: 180, disk_size: 100 })
    ));
}

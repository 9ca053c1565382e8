use fcl::FileRecord;
use fcl::output::csv::{CsvRecord, write_records};
use fcl::output::terminal;
use std::path::PathBuf;
use std::time::{Duration, SystemTime};

fn sample() -> Vec<FileRecord> {
    vec![
        FileRecord {
            path: PathBuf::from("/var/log/app/old.log"),
            size: 1536,
            modified: SystemTime::now() - Duration::from_secs(86_400),
        },
        FileRecord {
            path: PathBuf::from("/var/log/app/huge.bin"),
            size: 3 * 1024 * 1024,
            modified: SystemTime::now(),
        },
    ]
}

#[test]
fn test_csv_rendering() {
    let mut buffer = Vec::new();
    write_records(&sample(), &mut buffer).unwrap();

    let text = String::from_utf8(buffer).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "path,size_bytes,size_human,modified");
    assert!(lines[1].starts_with("/var/log/app/old.log,1536,"));
    assert!(lines[1].contains("KiB"));
    assert!(lines[2].starts_with("/var/log/app/huge.bin,3145728,"));
    assert!(lines[2].contains("MiB"));
}

#[test]
fn test_csv_record_conversion() {
    let records = sample();
    let row = CsvRecord::from(&records[0]);
    assert_eq!(row.path, "/var/log/app/old.log");
    assert_eq!(row.size_bytes, 1536);
    assert_eq!(row.modified.len(), "2024-01-01 00:00:00".len());
}

#[test]
fn test_terminal_rendering() {
    terminal::render(&sample());
    terminal::render(&[]);
}

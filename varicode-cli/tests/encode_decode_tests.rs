use std::fs;
use tempfile::tempdir;
use varicode_cli::commands::{decode, encode, TableOpts};

const TABLE_SPEC: &str = r#""a"=0, "b"=10, "c"=110, "d"=111"#;

fn opts(eol: Option<&str>, width: Option<usize>) -> TableOpts {
    TableOpts {
        table: Some(TABLE_SPEC.to_string()),
        table_file: None,
        eol: eol.map(str::to_string),
        width,
    }
}

#[test]
fn test_encode_inline_text_to_file() {
    let td = tempdir().unwrap();
    let out_path = td.path().join("bits.txt");

    encode::execute(
        &opts(None, None),
        None,
        Some("abcd"),
        out_path.to_str(),
        None,
        None,
        false,
    )
    .unwrap();

    assert_eq!(fs::read_to_string(&out_path).unwrap(), "010110111");
}

#[test]
fn test_encode_from_file_with_signature_and_terminator() {
    let td = tempdir().unwrap();
    let in_path = td.path().join("message.txt");
    let out_path = td.path().join("bits.txt");
    fs::write(&in_path, "b").unwrap();

    encode::execute(
        &opts(Some("1101"), None),
        in_path.to_str(),
        None,
        out_path.to_str(),
        Some("a"),
        None,
        true,
    )
    .unwrap();

    // "a" + "b" signed, then the end-of-message marker
    assert_eq!(fs::read_to_string(&out_path).unwrap(), "0101101");
}

#[test]
fn test_encode_rejects_unencodable_text() {
    let result = encode::execute(&opts(None, None), None, Some("ax"), None, None, None, false);
    assert!(result.is_err());
}

#[test]
fn test_decode_round_trip_via_files() {
    let td = tempdir().unwrap();
    let bits_path = td.path().join("bits.txt");
    let text_path = td.path().join("text.txt");

    encode::execute(
        &opts(None, None),
        None,
        Some("dcba"),
        bits_path.to_str(),
        None,
        None,
        false,
    )
    .unwrap();

    decode::execute(
        &opts(None, None),
        bits_path.to_str(),
        None,
        text_path.to_str(),
        true,
    )
    .unwrap();

    assert_eq!(fs::read_to_string(&text_path).unwrap(), "dcba");
}

#[test]
fn test_decode_strict_fails_on_dangling_bits() {
    let result = decode::execute(&opts(None, None), None, Some("01"), None, true);
    assert!(result.is_err());
}

#[test]
fn test_decode_lenient_passes_input_through() {
    let td = tempdir().unwrap();
    let out_path = td.path().join("text.txt");

    decode::execute(
        &opts(None, None),
        None,
        Some("01"),
        out_path.to_str(),
        false,
    )
    .unwrap();

    assert_eq!(fs::read_to_string(&out_path).unwrap(), "01");
}

#[test]
fn test_table_file_and_fixed_width() {
    let td = tempdir().unwrap();
    let table_path = td.path().join("table.spec");
    let out_path = td.path().join("bits.txt");
    fs::write(&table_path, r#""x"=1, "y"=10"#).unwrap();

    let opts = TableOpts {
        table: None,
        table_file: table_path.to_str().map(str::to_string),
        eol: None,
        width: Some(4),
    };

    encode::execute(&opts, None, Some("xy"), out_path.to_str(), None, None, false).unwrap();
    assert_eq!(fs::read_to_string(&out_path).unwrap(), "00010010");
}

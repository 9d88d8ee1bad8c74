#![allow(missing_docs)]

use textcodec::{HexDumpOptions, format_hex_dump, write_hex_dump};

fn dump_to_string(data: &[u8]) -> String {
    let mut out = Vec::new();
    write_hex_dump(&mut out, data).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn snapshot_text_over_several_rows() {
    let data = b"The quick brown fox jumps over the lazy dog.\n";
    insta::assert_snapshot!(dump_to_string(data), @r"
    00000000  54 68 65 20 71 75 69 63 6b 20 62 72 6f 77 6e 20  |The quick brown |
    00000010  66 6f 78 20 6a 75 6d 70 73 20 6f 76 65 72 20 74  |fox jumps over t|
    00000020  68 65 20 6c 61 7a 79 20 64 6f 67 2e 0a           |he lazy dog..|
    ");
    assert_eq!(format_hex_dump(data, HexDumpOptions::default()), dump_to_string(data));
}

#[test]
fn snapshot_control_and_high_bytes() {
    insta::assert_snapshot!(dump_to_string(b"\x00\x01\x7f\x80\xff textcodec"), @r"00000000  00 01 7f 80 ff 20 74 65 78 74 63 6f 64 65 63     |..... textcodec|");
}

#[test]
fn snapshot_uppercase_window() {
    let data: Vec<u8> = (0..40).collect();
    let options = HexDumpOptions {
        uppercase: true,
        start_offset: 0x1000,
    };
    insta::assert_snapshot!(format_hex_dump(&data, options), @r##"
    00001000  00 01 02 03 04 05 06 07 08 09 0A 0B 0C 0D 0E 0F  |................|
    00001010  10 11 12 13 14 15 16 17 18 19 1A 1B 1C 1D 1E 1F  |................|
    00001020  20 21 22 23 24 25 26 27                          | !"#$%&'|
    "##);
}

#[test]
fn empty_input_writes_nothing() {
    assert_eq!(dump_to_string(b""), "");
}

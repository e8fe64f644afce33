
use std::io::Write;

use macros::TestFs;

#[test]
fn extracts_through_a_custom_fs() {
    let mut fs = TestFs::new();
    fs.add_file("style.css", ".mes_text { color: red; }");
    let options = cssift::Options::default().fs(&fs);

    let css = cssift::from_path("style.css", &options).expect("failed to extract");

    assert_eq!(css, ".ils_mes_text {\n  color: red;\n}\n");
}

#[test]
fn null_fs_never_finds_input() {
    let options = cssift::Options::default().fs(&cssift::NullFs);

    assert!(cssift::from_path("style.css", &options).is_err());
}

#[test]
fn reads_input_from_disk() {
    let mut file = tempfile::Builder::new()
        .suffix(".css")
        .tempfile()
        .expect("failed to create tempfile");
    write!(file, ".mes_text {{ color: red; }} .bar {{ color: blue; }}")
        .expect("failed to write tempfile");

    let css = cssift::from_path(file.path(), &cssift::Options::default())
        .expect("failed to extract");

    assert_eq!(css, ".ils_mes_text {\n  color: red;\n}\n");
}

#[test]
fn invalid_utf8_input_fails() {
    let mut fs = TestFs::new();
    fs.add_file_bytes("style.css", b".mes_text { color: r\xffd; }");
    let options = cssift::Options::default().fs(&fs);

    match cssift::from_path("style.css", &options) {
        Ok(..) => panic!("did not fail"),
        Err(e) => assert!(e
            .to_string()
            .starts_with("Error: Invalid UTF-8 character")),
    }
}

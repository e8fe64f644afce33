
// the exact OS error text varies by platform, so only the prefix is checked
#[test]
fn missing_input_file() {
    match cssift::from_path(
        "definitely-does-not-exist.css",
        &cssift::Options::default(),
    ) {
        Ok(..) => panic!("did not fail"),
        Err(e) => assert!(e.to_string().starts_with("Error: ")),
    }
}

error!(
    missing_input_file_with_null_fs,
    "style.css",
    "Error: NullFs, there is no file system",
    cssift::Options::default().fs(&cssift::NullFs)
);

#[test]
fn bts_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/bts_error_pass.rs");
}

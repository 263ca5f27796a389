#![no_main]

use arbitrary::Arbitrary;
use jyut_i18n::format::{arg, max_placeholder, substitute_count};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    template: &'a str,
    args: Vec<&'a str>,
    count: i64,
}

fuzz_target!(|input: Input<'_>| {
    if input.template.len() > 4096 || input.args.len() > 16 {
        return;
    }

    let _ = max_placeholder(input.template);
    let _ = substitute_count(input.template, input.count);

    let formatted = arg(input.template, &input.args);
    // Without placeholders the template passes through untouched.
    if max_placeholder(input.template) == 0 {
        assert_eq!(formatted, input.template);
    }
});

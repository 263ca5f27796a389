#![no_main]

use jyut_i18n::{DuplicatePolicy, LoadOptions, LocaleTag, ts};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if text.len() > 16 * 1024 {
        return;
    }

    // Header-only locale: must fail cleanly or produce a catalog.
    let _ = ts::parse_str(text, None, LoadOptions::default());

    let Ok(locale) = LocaleTag::parse("yue_Hant") else {
        return;
    };
    let strict = LoadOptions {
        use_unfinished: false,
        duplicates: DuplicatePolicy::Reject,
    };
    if let Ok(catalog) = ts::parse_str(text, Some(locale), strict) {
        // Every active message must be reachable through lookup.
        for (context, message) in catalog.messages() {
            if message.is_active(false) {
                let found = catalog.lookup(context, &message.source, message.disambiguation.as_deref());
                assert!(found.is_some(), "active message not found: {context} {:?}", message.source);
            }
        }
        let stats = catalog.stats();
        assert!(stats.active <= stats.messages);
        assert_eq!(stats.duplicates, 0);
    }
});

#![no_main]
use libfuzzer_sys::fuzz_target;
use sitemap::{manifest, FormatConfig};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(sitemap) = manifest::from_json_str(s) {
            let xml = sitemap.xml_with_config(&FormatConfig::escaped());
            assert_eq!(xml.matches("</url>").count(), sitemap.len());
        }
    }
});

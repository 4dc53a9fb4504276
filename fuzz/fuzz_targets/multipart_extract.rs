#![no_main]
use libfuzzer_sys::fuzz_target;

// First byte picks a content type, the rest is the body. The extractor must
// never panic, whatever the framing looks like.
fuzz_target!(|data: &[u8]| {
    let (selector, body) = match data.split_first() {
        Some(split) => split,
        None => return,
    };
    let content_type = match selector % 4 {
        0 => "multipart/form-data; boundary=XYZ",
        1 => "multipart/form-data; boundary=----fuzz; charset=utf-8",
        2 => "multipart/form-data",
        _ => "text/plain",
    };
    if let Some(attachment) = detectfake::multipart::extract_image(body, content_type) {
        assert_eq!(attachment.size(), attachment.bytes().len());
        assert_eq!(attachment.declared_mime(), "image/jpeg");
    }
});

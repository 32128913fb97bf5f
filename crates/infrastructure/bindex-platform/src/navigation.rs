use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Everything a URL path segment cannot carry verbatim.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Admin-console record page URL for the given record and action.
pub fn record_url(
    instance_url: &str,
    record_id: &str,
    object_api_name: &str,
    action: &str,
) -> String {
    let base = instance_url.trim_end_matches('/');
    format!(
        "{base}/lightning/r/{}/{}/{}",
        utf8_percent_encode(object_api_name, SEGMENT),
        utf8_percent_encode(record_id, SEGMENT),
        utf8_percent_encode(action, SEGMENT),
    )
}

/// The default navigation action.
pub fn record_view_url(instance_url: &str, record_id: &str, object_api_name: &str) -> String {
    record_url(instance_url, record_id, object_api_name, "view")
}

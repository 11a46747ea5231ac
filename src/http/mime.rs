/// Maps a target path's file extension to a Content-Type string.
///
/// The extension is whatever follows the last '.' in the target, wherever
/// that dot sits. Unknown extensions and targets without any dot fall back
/// to `text/plain`; this never fails.
pub fn content_type_for(target: &str) -> &'static str {
    let ext = match target.rsplit_once('.') {
        Some((_, ext)) => ext,
        None => return "text/plain",
    };

    match ext {
        "html" => "text/html",
        "png" => "image/png",
        "jpg" => "image/jpg",
        "ico" => "image/ico",
        _ => "text/plain",
    }
}

use std::path::PathBuf;

use staticd::http::parser::{ParseError, parse_request};
use staticd::http::request::Request;
use staticd::http::response::StatusCode;
use staticd::static_files::StaticResponder;

fn temp_docroot(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "staticd-responder-{}-{}",
        tag,
        std::process::id()
    ));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn get(target: &str) -> Result<Request, ParseError> {
    Ok(Request {
        method: "GET".to_string(),
        target: target.to_string(),
        version: "HTTP/1.0".to_string(),
        body: Vec::new(),
    })
}

#[tokio::test]
async fn test_serves_file_with_content_type_and_length() {
    let root = temp_docroot("serve");
    std::fs::write(root.join("index.html"), "<h1>hi</h1>").unwrap();
    let responder = StaticResponder::new(root);

    let response = responder.respond(get("/index.html")).await.unwrap();

    assert_eq!(response.status(), StatusCode::Ok);
    assert_eq!(
        response.as_bytes(),
        b"HTTP/1.0 200 OK\r\nContent-Type: text/html\r\nContent-Length: 11\r\n\r\n<h1>hi</h1>"
            .as_slice()
    );
}

#[tokio::test]
async fn test_root_target_equivalent_to_index() {
    let root = temp_docroot("root-index");
    std::fs::write(root.join("index.html"), "home").unwrap();
    let responder = StaticResponder::new(root);

    let via_root = responder
        .respond(parse_request(b"GET / HTTP/1.0\r\n\r\n"))
        .await
        .unwrap();
    let via_index = responder
        .respond(parse_request(b"GET /index.html HTTP/1.0\r\n\r\n"))
        .await
        .unwrap();

    assert_eq!(via_root, via_index);
}

#[tokio::test]
async fn test_non_get_method_is_501() {
    let root = temp_docroot("post");
    std::fs::write(root.join("x"), "data").unwrap();
    let responder = StaticResponder::new(root);

    let req = Ok(Request {
        method: "POST".to_string(),
        target: "/x".to_string(),
        version: "HTTP/1.0".to_string(),
        body: b"payload".to_vec(),
    });
    let response = responder.respond(req).await.unwrap();

    assert_eq!(response.status(), StatusCode::NotImplemented);
    assert_eq!(response.as_bytes(), b"HTTP 1.0 501 Not Implemented".as_slice());
}

#[tokio::test]
async fn test_invalid_request_is_400() {
    let responder = StaticResponder::new(temp_docroot("invalid"));

    let response = responder
        .respond(Err(ParseError::InvalidRequestLine))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BadRequest);
    assert_eq!(
        response.as_bytes(),
        b"HTTP 1.0 400 Bad Request\r\nContent-Type: application/json\r\nContent-Length: 77\r\n\r\n{'error':'Bad request','message':'Request body could not be read properly.',}"
            .as_slice()
    );
}

#[tokio::test]
async fn test_missing_file_is_404() {
    let responder = StaticResponder::new(temp_docroot("missing"));

    let response = responder.respond(get("/nope.html")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NotFound);
    assert_eq!(
        response.as_bytes(),
        b"HTTP 1.0 404 Not Found\r\nContent-Type: application/json\r\nContent-Length: 77\r\n\r\n{'error':'Not Found','message':'Unable to find the file at the given path.',}"
            .as_slice()
    );
}

#[tokio::test]
async fn test_traversal_rejected_even_when_target_resolves() {
    // "/sub/../index.html" names an existing, readable file, but any ".."
    // in the target is refused before the filesystem is consulted.
    let root = temp_docroot("traversal");
    std::fs::create_dir(root.join("sub")).unwrap();
    std::fs::write(root.join("index.html"), "home").unwrap();
    let responder = StaticResponder::new(root);

    let response = responder.respond(get("/sub/../index.html")).await.unwrap();

    assert_eq!(response.status(), StatusCode::Forbidden);
    assert_eq!(response.as_bytes(), b"HTTP 1.0 403 Forbidden".as_slice());
}

#[tokio::test]
async fn test_traversal_outside_root_rejected() {
    let responder = StaticResponder::new(temp_docroot("escape"));

    let response = responder.respond(get("/../../etc/passwd")).await.unwrap();

    assert_eq!(response.status(), StatusCode::Forbidden);
}

#[cfg(unix)]
#[tokio::test]
async fn test_unreadable_file_is_403() {
    use std::os::unix::fs::PermissionsExt;

    let root = temp_docroot("unreadable");
    let path = root.join("secret.txt");
    std::fs::write(&path, "hidden").unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o200)).unwrap();
    let responder = StaticResponder::new(root);

    let response = responder.respond(get("/secret.txt")).await.unwrap();

    assert_eq!(response.status(), StatusCode::Forbidden);
    assert_eq!(response.as_bytes(), b"HTTP 1.0 403 Forbidden".as_slice());
}

#[tokio::test]
async fn test_binary_file_round_trip() {
    let root = temp_docroot("binary");
    let contents: Vec<u8> = (0u8..=255).cycle().take(1000).collect();
    std::fs::write(root.join("blob.bin"), &contents).unwrap();
    let responder = StaticResponder::new(root);

    let response = responder.respond(get("/blob.bin")).await.unwrap();

    let head = format!(
        "HTTP/1.0 200 OK\r\nContent-Type: text/plain\r\nContent-Length: {}\r\n\r\n",
        contents.len()
    );
    assert_eq!(response.len(), head.len() + contents.len());
    assert_eq!(&response.as_bytes()[..head.len()], head.as_bytes());
    assert_eq!(&response.as_bytes()[head.len()..], contents.as_slice());
}

#[tokio::test]
async fn test_repeated_get_is_idempotent() {
    let root = temp_docroot("idempotent");
    std::fs::write(root.join("page.html"), "same every time").unwrap();
    let responder = StaticResponder::new(root);

    let first = responder.respond(get("/page.html")).await.unwrap();
    let second = responder.respond(get("/page.html")).await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_content_type_follows_extension() {
    let root = temp_docroot("mime");
    std::fs::write(root.join("notes.txt"), "plain").unwrap();
    std::fs::write(root.join("pic.png"), [0x89u8, 0x50, 0x4e, 0x47]).unwrap();
    let responder = StaticResponder::new(root);

    let txt = responder.respond(get("/notes.txt")).await.unwrap();
    let png = responder.respond(get("/pic.png")).await.unwrap();

    assert!(txt.as_bytes().starts_with(b"HTTP/1.0 200 OK\r\nContent-Type: text/plain\r\n"));
    assert!(png.as_bytes().starts_with(b"HTTP/1.0 200 OK\r\nContent-Type: image/png\r\n"));
}

#[tokio::test]
async fn test_directory_target_is_fatal() {
    // A directory passes the metadata and permission checks but cannot be
    // read as a file; that is a local fatal error, not a client response.
    let root = temp_docroot("dir-target");
    std::fs::create_dir(root.join("assets")).unwrap();
    let responder = StaticResponder::new(root);

    let result = responder.respond(get("/assets")).await;

    assert!(result.is_err());
}

use crate::http::request::Request;

/// Why a raw buffer failed to parse as a request.
///
/// Every variant is answered with the same 400 response; the distinction
/// only matters for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Method, target, or version token could not be extracted
    InvalidRequestLine,
    /// The header section never ended before the buffer ran out
    MissingBlankLine,
    /// A request-line token was not valid UTF-8
    InvalidToken,
}

/// Parses the raw bytes received on a connection into a [`Request`].
///
/// The buffer is sliced by explicit lengths, never scanned for a NUL
/// terminator:
///
/// 1. method = bytes before the first space
/// 2. target = bytes before the next space
/// 3. version = the rest of that line (trailing CR stripped)
/// 4. header lines are skipped until a line consisting solely of CR
/// 5. body = everything after the blank line, to the end of the buffer
///
/// A target of exactly "/" is rewritten to "/index.html". Running out of
/// buffer before any of these steps complete is a parse failure, never an
/// out-of-bounds read.
pub fn parse_request(buf: &[u8]) -> Result<Request, ParseError> {
    let sp = find_byte(buf, b' ').ok_or(ParseError::InvalidRequestLine)?;
    let method = &buf[..sp];
    let rest = &buf[sp + 1..];

    let sp = find_byte(rest, b' ').ok_or(ParseError::InvalidRequestLine)?;
    let target = &rest[..sp];
    let rest = &rest[sp + 1..];

    let nl = find_byte(rest, b'\n').ok_or(ParseError::InvalidRequestLine)?;
    let version = strip_cr(&rest[..nl]);
    let mut rest = &rest[nl + 1..];

    // Skip header lines until the CR-only line that ends the header section.
    loop {
        let nl = find_byte(rest, b'\n').ok_or(ParseError::MissingBlankLine)?;
        let line = &rest[..nl];
        rest = &rest[nl + 1..];

        if line == b"\r" {
            break;
        }
    }

    let method = token_str(method)?;
    let mut target = token_str(target)?;
    let version = token_str(version)?;

    // Default document for the bare root target.
    if target == "/" {
        target = "/index.html".to_string();
    }

    Ok(Request {
        method,
        target,
        version,
        body: rest.to_vec(),
    })
}

fn find_byte(buf: &[u8], byte: u8) -> Option<usize> {
    buf.iter().position(|&b| b == byte)
}

fn strip_cr(line: &[u8]) -> &[u8] {
    match line.last() {
        Some(b'\r') => &line[..line.len() - 1],
        _ => line,
    }
}

fn token_str(bytes: &[u8]) -> Result<String, ParseError> {
    std::str::from_utf8(bytes)
        .map(str::to_string)
        .map_err(|_| ParseError::InvalidToken)
}

// src/core/net.rs

// HTTP/1.0 GET over TCP (std-only)

use std::{io::{Read, Write}, net::TcpStream, time::Duration};

use crate::config::consts::{HOST, PREFIX};
use crate::error::FetchError;

pub fn http_get(path: &str) -> Result<String, FetchError> {
    let mut s = TcpStream::connect((HOST, 80))?;
    s.set_read_timeout(Some(Duration::from_secs(15)))?;
    s.set_write_timeout(Some(Duration::from_secs(15)))?;

    let full = format!("{}{}", PREFIX, path);
    let req = format!(
        "GET {} HTTP/1.0\r\nHost: {}\r\nUser-Agent: quillshelf/0.3\r\nConnection: close\r\n\r\n",
        full, HOST
    );
    s.write_all(req.as_bytes())?;
    s.flush()?;

    let mut buf = Vec::new();
    s.read_to_end(&mut buf)?;
    let resp = String::from_utf8_lossy(&buf);

    let status = resp.split("\r\n").next().unwrap_or("");
    if !status.contains("200") {
        return Err(FetchError::Status(format!("{} {}{}", status, HOST, full)));
    }
    let body_idx = resp.find("\r\n\r\n").ok_or(FetchError::Malformed)? + 4;
    Ok(resp[body_idx..].to_string())
}

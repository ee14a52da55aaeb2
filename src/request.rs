use std::io::BufRead;

use eyre::WrapErr;
use eyre::eyre;
use serde::Deserialize;

/// One lookup, read as a single JSON line such as
/// `{"song_name": "Despacito", "artist": "Luis Fonsi"}`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SongRequest {
    pub song_name: String,
    pub artist: String,
}

impl SongRequest {
    /// Free-text search query: title, a space, then artist.
    pub fn query(&self) -> String {
        format!("{} {}", self.song_name, self.artist)
    }
}

pub fn read_request(mut reader: impl BufRead) -> eyre::Result<SongRequest> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(eyre!("No input line; expected {{\"song_name\": ..., \"artist\": ...}}"));
    }
    let line = line.trim_end();
    // Only a JSON object counts; serde would also accept `["title", "artist"]` for a struct.
    let fields: serde_json::Map<String, serde_json::Value> = serde_json::from_str(line)
        .wrap_err_with(|| format!("Malformed input line: {}", line))?;
    serde_json::from_value(serde_json::Value::Object(fields))
        .wrap_err_with(|| format!("Malformed input line: {}", line))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The exact line the native caller pipes in.
    const DRIVER_LINE: &str = "{\"song_name\": \"Despacito\", \"artist\": \"Luis Fonsi\"}\n";

    #[test]
    fn reads_driver_line() {
        let req = read_request(DRIVER_LINE.as_bytes()).unwrap();
        assert_eq!(
            req,
            SongRequest {
                song_name: "Despacito".to_string(),
                artist: "Luis Fonsi".to_string(),
            }
        );
        assert_eq!(req.query(), "Despacito Luis Fonsi");
    }

    #[test]
    fn reads_both_fields() {
        let req = read_request(&b"{\"song_name\": \"Despacito\", \"artist\": \"Luis Fonsi\"}\n"[..])
            .unwrap();
        assert_eq!(req.song_name, "Despacito");
        assert_eq!(req.artist, "Luis Fonsi");
        assert_eq!(req.query(), "Despacito Luis Fonsi");
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let req = read_request(&b"{}\n"[..]).unwrap();
        assert_eq!(req, SongRequest::default());
        assert_eq!(req.query(), " ");
    }

    #[test]
    fn only_first_line_is_read() {
        let req = read_request(&b"{\"artist\": \"A\"}\n{\"artist\": \"B\"}\n"[..]).unwrap();
        assert_eq!(req.artist, "A");
        assert_eq!(req.song_name, "");
    }

    #[test]
    fn empty_input_fails() {
        assert!(read_request(&b""[..]).is_err());
    }

    #[test]
    fn array_line_fails() {
        let err = read_request(&b"[\"Despacito\", \"Luis Fonsi\"]\n"[..]).unwrap_err();
        assert!(err.to_string().contains("Malformed input line"));
    }

    #[test]
    fn non_string_field_fails() {
        assert!(read_request(&b"{\"song_name\": 5}\n"[..]).is_err());
    }

    #[test]
    fn malformed_line_fails_with_context() {
        let err = read_request(&b"song=Despacito\n"[..]).unwrap_err();
        assert!(err.to_string().contains("song=Despacito"));
    }
}
